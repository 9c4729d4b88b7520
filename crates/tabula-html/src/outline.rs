//! Indented debug listing of a tree.

use std::fmt::Write as _;

use tabula_dom::{DomTree, NodeId, NodeType};

/// One line per node, two spaces of indentation per level.
///
/// Elements show their tag followed by `#id` and `.class` markers, text is
/// quoted with newlines shown as `\n`, comments use `<!-- -->`. Unknown
/// handles produce no output.
#[must_use]
pub fn outline(tree: &DomTree, node: NodeId) -> String {
    let mut out = String::new();
    write_outline(tree, node, 0, &mut out);
    out
}

fn write_outline(tree: &DomTree, id: NodeId, indent: usize, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    let prefix = "  ".repeat(indent);
    match node.node_type() {
        NodeType::Element(data) => {
            let _ = write!(out, "{prefix}<{}>", data.tag_name());
            if let Some(id) = data.id() {
                let _ = write!(out, " #{id}");
            }
            for class in data.classes() {
                let _ = write!(out, " .{class}");
            }
            out.push('\n');
        }
        NodeType::Text(text) => {
            let _ = writeln!(out, "{prefix}\"{}\"", text.replace('\n', "\\n"));
        }
        NodeType::Comment(text) => {
            let _ = writeln!(out, "{prefix}<!-- {text} -->");
        }
    }
    for &child in node.children() {
        write_outline(tree, child, indent + 1, out);
    }
}
