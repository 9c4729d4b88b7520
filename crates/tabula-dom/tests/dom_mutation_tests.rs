//! Tests for tree mutation: append, prepend, insert_child_at, remove_child,
//! clear_children, and the validation that guards them.

use pretty_assertions::assert_eq;
use tabula_dom::{
    DomError, DomTree, ElementKind, NodeId, NodeKind, StructuralViolation, TagName,
};

/// Helper to create a generic element node and return its NodeId.
fn alloc_div(tree: &mut DomTree) -> NodeId {
    tree.create_element(ElementKind::Generic(TagName::Div))
}

/// Helper to build table > tbody > tr > td and return every id.
fn alloc_table_chain(tree: &mut DomTree) -> (NodeId, NodeId, NodeId, NodeId) {
    let table = tree.create_element(ElementKind::Table);
    let body = tree.create_element(ElementKind::TableBody);
    let row = tree.create_element(ElementKind::TableRow);
    let cell = tree.create_element(ElementKind::DataCell);
    tree.append_child(table, body).unwrap();
    tree.append_child(body, row).unwrap();
    tree.append_child(row, cell).unwrap();
    (table, body, row, cell)
}

// ========== append_children ==========

#[test]
fn test_append_children_preserves_argument_order() {
    let mut tree = DomTree::new();
    let parent = alloc_div(&mut tree);
    let a = alloc_div(&mut tree);
    let b = tree.create_text("b");
    let c = alloc_div(&mut tree);

    tree.append_children(parent, &[a, b, c]).unwrap();

    assert_eq!(tree.children(parent), &[a, b, c]);
    for child in [a, b, c] {
        assert_eq!(tree.parent(child), Some(parent));
    }
}

#[test]
fn test_append_children_appends_after_existing() {
    let mut tree = DomTree::new();
    let parent = alloc_div(&mut tree);
    let a = alloc_div(&mut tree);
    let b = alloc_div(&mut tree);
    tree.append_child(parent, a).unwrap();
    tree.append_child(parent, b).unwrap();

    assert_eq!(tree.children(parent), &[a, b]);
    assert_eq!(tree.first_child(parent), Some(a));
    assert_eq!(tree.last_child(parent), Some(b));
}

#[test]
fn test_append_children_rejects_whole_batch() {
    let mut tree = DomTree::new();
    let row = tree.create_element(ElementKind::TableRow);
    let good = tree.create_element(ElementKind::DataCell);
    let bad = tree.create_text("loose text");

    let err = tree.append_children(row, &[good, bad]).unwrap_err();

    assert_eq!(
        err,
        DomError::Structural(StructuralViolation::NotAllowed {
            parent: NodeKind::Element(ElementKind::TableRow),
            child: NodeKind::Text,
        })
    );
    assert!(tree.children(row).is_empty());
    assert_eq!(tree.parent(good), None);
}

#[test]
fn test_append_self_is_rejected() {
    let mut tree = DomTree::new();
    let div = alloc_div(&mut tree);

    let err = tree.append_child(div, div).unwrap_err();

    assert_eq!(
        err,
        DomError::Structural(StructuralViolation::SelfAttachment(div))
    );
}

#[test]
fn test_duplicate_in_batch_is_rejected() {
    let mut tree = DomTree::new();
    let parent = alloc_div(&mut tree);
    let child = alloc_div(&mut tree);

    let err = tree.append_children(parent, &[child, child]).unwrap_err();

    assert_eq!(
        err,
        DomError::Structural(StructuralViolation::DuplicateInBatch(child))
    );
    assert!(tree.children(parent).is_empty());
}

#[test]
fn test_unknown_node_is_rejected() {
    let mut tree = DomTree::new();
    let parent = alloc_div(&mut tree);

    let err = tree.append_child(parent, NodeId(99)).unwrap_err();

    assert_eq!(err, DomError::UnknownNode(NodeId(99)));
}

#[test]
fn test_disallowed_kind_is_rejected() {
    let mut tree = DomTree::new();
    let table = tree.create_element(ElementKind::Table);
    let row = tree.create_element(ElementKind::TableRow);
    let fake_cell = tree.create_element(ElementKind::Generic(TagName::Td));

    let err = tree.append_child(table, row).unwrap_err();
    assert!(err.is_structural());

    let row_err = tree.append_child(row, fake_cell).unwrap_err();
    assert!(row_err.is_structural());
}

// ========== cycle prevention ==========

#[test]
fn test_attach_ancestor_under_descendant_is_a_cycle() {
    let mut tree = DomTree::new();
    let root = alloc_div(&mut tree);
    let mid = alloc_div(&mut tree);
    let leaf = alloc_div(&mut tree);
    tree.append_child(root, mid).unwrap();
    tree.append_child(mid, leaf).unwrap();

    let err = tree.append_child(leaf, root).unwrap_err();
    assert_eq!(
        err,
        DomError::Structural(StructuralViolation::Cycle {
            parent: leaf,
            child: root,
        })
    );

    let err = tree.prepend_child(leaf, mid).unwrap_err();
    assert!(err.is_structural());

    // Tree is untouched.
    assert_eq!(tree.children(root), &[mid]);
    assert_eq!(tree.children(mid), &[leaf]);
    assert!(tree.children(leaf).is_empty());
}

#[test]
fn test_cycle_detected_at_depth() {
    let mut tree = DomTree::new();
    let mut chain = vec![alloc_div(&mut tree)];
    for _ in 0..6 {
        let next = alloc_div(&mut tree);
        let last = *chain.last().unwrap();
        tree.append_child(last, next).unwrap();
        chain.push(next);
    }

    for (depth, &ancestor) in chain.iter().enumerate().take(chain.len() - 1) {
        let deepest = *chain.last().unwrap();
        let err = tree.insert_child_at(deepest, 0, ancestor).unwrap_err();
        assert!(err.is_structural(), "depth {depth} accepted a cycle");
    }
}

#[test]
fn test_reattaching_existing_descendant_is_rejected() {
    let mut tree = DomTree::new();
    let root = alloc_div(&mut tree);
    let mid = alloc_div(&mut tree);
    let leaf = alloc_div(&mut tree);
    tree.append_child(root, mid).unwrap();
    tree.append_child(mid, leaf).unwrap();

    let err = tree.append_child(root, leaf).unwrap_err();

    assert_eq!(
        err,
        DomError::Structural(StructuralViolation::AlreadyDescendant {
            parent: root,
            child: leaf,
        })
    );
}

#[test]
fn test_is_ancestor() {
    let mut tree = DomTree::new();
    let (table, body, row, cell) = alloc_table_chain(&mut tree);

    assert!(tree.is_ancestor(cell, row));
    assert!(tree.is_ancestor(cell, table));
    assert!(!tree.is_ancestor(table, cell));
    assert!(!tree.is_ancestor(cell, cell));
    assert_eq!(tree.ancestors(cell).collect::<Vec<_>>(), vec![row, body, table]);
}

// ========== moving between parents ==========

#[test]
fn test_attach_moves_node_from_old_parent() {
    let mut tree = DomTree::new();
    let first = alloc_div(&mut tree);
    let second = alloc_div(&mut tree);
    let child = alloc_div(&mut tree);
    tree.append_child(first, child).unwrap();

    tree.append_child(second, child).unwrap();

    assert!(tree.children(first).is_empty());
    assert_eq!(tree.children(second), &[child]);
    assert_eq!(tree.parent(child), Some(second));
}

// ========== prepend_child / insert_child_at ==========

#[test]
fn test_prepend_child() {
    let mut tree = DomTree::new();
    let parent = alloc_div(&mut tree);
    let existing = alloc_div(&mut tree);
    tree.append_child(parent, existing).unwrap();

    let new_child = alloc_div(&mut tree);
    tree.prepend_child(parent, new_child).unwrap();

    assert_eq!(tree.children(parent), &[new_child, existing]);
    assert_eq!(tree.parent(new_child), Some(parent));
}

#[test]
fn test_insert_child_at_middle() {
    let mut tree = DomTree::new();
    let parent = alloc_div(&mut tree);
    let a = alloc_div(&mut tree);
    let c = alloc_div(&mut tree);
    tree.append_children(parent, &[a, c]).unwrap();

    let b = alloc_div(&mut tree);
    tree.insert_child_at(parent, 1, b).unwrap();

    assert_eq!(tree.children(parent), &[a, b, c]);
}

#[test]
fn test_insert_child_at_clamps_index() {
    let mut tree = DomTree::new();
    let parent = alloc_div(&mut tree);
    let a = alloc_div(&mut tree);
    tree.append_child(parent, a).unwrap();

    let b = alloc_div(&mut tree);
    tree.insert_child_at(parent, 42, b).unwrap();

    assert_eq!(tree.children(parent), &[a, b]);
}

// ========== remove_child ==========

#[test]
fn test_remove_child_middle_of_three() {
    let mut tree = DomTree::new();
    let parent = alloc_div(&mut tree);
    let a = alloc_div(&mut tree);
    let b = alloc_div(&mut tree);
    let c = alloc_div(&mut tree);
    tree.append_children(parent, &[a, b, c]).unwrap();

    tree.remove_child(parent, b).unwrap();

    assert_eq!(tree.children(parent), &[a, c]);
    assert_eq!(tree.parent(b), None);
}

#[test]
fn test_remove_child_is_identity_based() {
    let mut tree = DomTree::new();
    let parent = alloc_div(&mut tree);
    let first = tree.create_text("same");
    let second = tree.create_text("same");
    tree.append_children(parent, &[first, second]).unwrap();

    tree.remove_child(parent, second).unwrap();

    assert_eq!(tree.children(parent), &[first]);
    assert_eq!(tree.parent(first), Some(parent));
}

#[test]
fn test_remove_child_not_found_is_noop() {
    let mut tree = DomTree::new();
    let parent = alloc_div(&mut tree);
    let child = alloc_div(&mut tree);
    let stranger = alloc_div(&mut tree);
    let other_parent = alloc_div(&mut tree);
    tree.append_child(parent, child).unwrap();
    tree.append_child(other_parent, stranger).unwrap();

    tree.remove_child(parent, stranger).unwrap();

    assert_eq!(tree.children(parent), &[child]);
    assert_eq!(tree.parent(stranger), Some(other_parent));
}

// ========== clear_children ==========

#[test]
fn test_clear_children() {
    let mut tree = DomTree::new();
    let parent = alloc_div(&mut tree);
    let a = alloc_div(&mut tree);
    let b = tree.create_text("b");
    tree.append_children(parent, &[a, b]).unwrap();

    tree.clear_children(parent).unwrap();

    assert!(!tree.has_children(parent));
    assert_eq!(tree.parent(a), None);
    assert_eq!(tree.parent(b), None);
}

// ========== leaf nodes ==========

#[test]
fn test_text_node_rejects_child_mutation() {
    let mut tree = DomTree::new();
    let text = tree.create_text("leaf");
    let div = alloc_div(&mut tree);

    let results = [
        tree.append_child(text, div),
        tree.prepend_child(text, div),
        tree.insert_child_at(text, 0, div),
        tree.remove_child(text, div),
        tree.clear_children(text),
    ];

    for result in results {
        assert!(matches!(
            result,
            Err(DomError::UnsupportedOperation {
                kind: NodeKind::Text,
                ..
            })
        ));
    }
    assert!(!tree.is_allowed_child(text, div));
}

#[test]
fn test_text_round_trips_unescaped() {
    let mut tree = DomTree::new();
    let raw = r#"<b>"Fish" & 'Chips'</b>"#;
    let text = tree.create_text(raw);

    assert_eq!(tree.as_text(text), Some(raw));

    tree.set_text(text, "plain").unwrap();
    assert_eq!(tree.as_text(text), Some("plain"));

    let div = alloc_div(&mut tree);
    assert!(matches!(
        tree.set_text(div, "nope"),
        Err(DomError::UnsupportedOperation { operation: "set_text", .. })
    ));
}

// ========== child cursor ==========

#[test]
fn test_child_cursor_is_restartable() {
    let mut tree = DomTree::new();
    let parent = alloc_div(&mut tree);
    let a = alloc_div(&mut tree);
    let b = alloc_div(&mut tree);
    tree.append_children(parent, &[a, b]).unwrap();

    let mut cursor = tree.child_cursor(parent);
    assert!(cursor.has_next());
    assert_eq!(cursor.next(), Some(a));
    assert_eq!(cursor.next(), Some(b));
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), None);

    cursor.rewind();
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.collect::<Vec<_>>(), vec![a, b]);
}

#[test]
fn test_child_cursor_on_leaf_is_empty() {
    let mut tree = DomTree::new();
    let text = tree.create_text("x");

    assert!(!tree.child_cursor(text).has_next());
    assert!(!tree.child_cursor(NodeId(1000)).has_next());
}
