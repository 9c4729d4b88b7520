//! Recursive HTML serialization of an element tree.

use std::fmt::Write as _;

use tabula_common::warning::warn_once;
use tabula_dom::{DomTree, ElementData, NodeId, NodeType};

use crate::error::RenderError;
use crate::escape::escape_html;

/// Serializes nodes of a [`DomTree`] to HTML.
///
/// Elements render as `<tag attrs>children</tag>`, text renders escaped,
/// anything else is rejected. Every element gets an explicit closing tag,
/// void elements included.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Create a renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render `node` and everything below it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnsupportedNodeKind`] if the node or any
    /// descendant is neither text nor an element, and
    /// [`RenderError::UnknownNode`] for dangling handles.
    pub fn render(&self, tree: &DomTree, node: NodeId) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(tree, node, &mut out)?;
        Ok(out)
    }

    /// Render an element node: opening tag, children, closing tag.
    ///
    /// # Errors
    ///
    /// Same as [`HtmlRenderer::render`]; also fails if `node` is not an
    /// element.
    pub fn render_element(&self, tree: &DomTree, node: NodeId) -> Result<String, RenderError> {
        let element = tree.as_element(node).ok_or_else(|| unsupported(tree, node))?;
        let mut out = String::new();
        self.write_element(tree, node, element, &mut out)?;
        Ok(out)
    }

    /// Render a text node, escaped.
    ///
    /// # Errors
    ///
    /// Fails if `node` is not a text node.
    pub fn render_text(tree: &DomTree, node: NodeId) -> Result<String, RenderError> {
        tree.as_text(node)
            .map(|text| escape_html(text).into_owned())
            .ok_or_else(|| unsupported(tree, node))
    }

    /// Render the children of `node` in order, walking them with the child
    /// cursor.
    ///
    /// # Errors
    ///
    /// Same as [`HtmlRenderer::render`].
    pub fn render_children(&self, tree: &DomTree, node: NodeId) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_children(tree, node, &mut out)?;
        Ok(out)
    }

    /// `id="…"`, or an empty string when the element has no id.
    #[must_use]
    pub fn render_id(element: &ElementData) -> String {
        element
            .id()
            .filter(|id| !id.is_empty())
            .map(|id| format!("id=\"{}\"", escape_html(id)))
            .unwrap_or_default()
    }

    /// `class="a b"`, or an empty string when the element has no classes.
    #[must_use]
    pub fn render_classes(element: &ElementData) -> String {
        let classes = element.classes();
        if classes.is_empty() {
            return String::new();
        }
        let joined = classes.iter().map(String::as_str).collect::<Vec<_>>().join(" ");
        format!("class=\"{}\"", escape_html(&joined))
    }

    /// `style="prop: value; …;"`, or an empty string when there are no
    /// inline styles.
    #[must_use]
    pub fn render_styles(element: &ElementData) -> String {
        let styles = element.styles();
        if styles.is_empty() {
            return String::new();
        }
        let declarations = styles
            .iter()
            .map(|(property, value)| format!("{}: {};", escape_html(property), escape_html(value)))
            .collect::<Vec<_>>()
            .join(" ");
        format!("style=\"{declarations}\"")
    }

    /// Space-joined `name="value"` pairs, bare names for flag attributes.
    /// Names that are blank after trimming are skipped.
    #[must_use]
    pub fn render_attributes(element: &ElementData) -> String {
        element
            .attributes()
            .iter()
            .filter_map(|(name, value)| {
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some(match value {
                    Some(value) => format!("{}=\"{}\"", escape_html(name), escape_html(value)),
                    None => escape_html(name).into_owned(),
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn render_into(
        &self,
        tree: &DomTree,
        node: NodeId,
        out: &mut String,
    ) -> Result<(), RenderError> {
        let entry = tree.get(node).ok_or(RenderError::UnknownNode(node))?;
        match entry.node_type() {
            NodeType::Text(text) => {
                out.push_str(&escape_html(text));
                Ok(())
            }
            NodeType::Element(element) => self.write_element(tree, node, element, out),
            other => Err(RenderError::UnsupportedNodeKind {
                node,
                kind: other.kind(),
            }),
        }
    }

    fn write_element(
        &self,
        tree: &DomTree,
        node: NodeId,
        element: &ElementData,
        out: &mut String,
    ) -> Result<(), RenderError> {
        let tag = element.tag_name();
        log::trace!(target: "render", "<{tag}> {node}");
        if tag.is_void() {
            warn_once(
                "render",
                &format!("void element <{tag}> rendered with an explicit closing tag"),
            );
        }

        let fragments = [
            Self::render_id(element),
            Self::render_classes(element),
            Self::render_attributes(element),
            Self::render_styles(element),
        ];

        let _ = write!(out, "<{tag}");
        for fragment in fragments.iter().filter(|f| !f.is_empty()) {
            out.push(' ');
            out.push_str(fragment);
        }
        out.push('>');
        self.write_children(tree, node, out)?;
        let _ = write!(out, "</{tag}>");
        Ok(())
    }

    fn write_children(
        &self,
        tree: &DomTree,
        node: NodeId,
        out: &mut String,
    ) -> Result<(), RenderError> {
        for child in tree.child_cursor(node) {
            self.render_into(tree, child, out)?;
        }
        Ok(())
    }
}

fn unsupported(tree: &DomTree, node: NodeId) -> RenderError {
    tree.kind(node).map_or(RenderError::UnknownNode(node), |kind| {
        RenderError::UnsupportedNodeKind { node, kind }
    })
}

/// Render `node` with a default [`HtmlRenderer`].
///
/// # Errors
///
/// Same as [`HtmlRenderer::render`].
pub fn render(tree: &DomTree, node: NodeId) -> Result<String, RenderError> {
    HtmlRenderer::new().render(tree, node)
}
