//! Element tree for Tabula.
//!
//! This crate provides an arena-based tree of elements, text and comments.
//! It is the composite at the centre of the table builder: every element
//! knows which kinds of children it accepts, and every insertion is checked
//! against that allow-list and against cycles before anything is mutated.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships,
//! providing O(1) access and traversal without borrow checker issues. Node
//! identity is handle identity: two nodes with equal content are still
//! different nodes.
//!
//! `DomTree` has no interior locking. It can be moved between threads, but
//! shared mutation needs external synchronization.

pub mod cursor;
pub mod element;
pub mod error;

use std::fmt;

pub use cursor::ChildCursor;
pub use element::{
    AttributesMap, ClassList, ElementData, ElementInit, ElementKind, NodeKind, StyleMap, TagName,
};
pub use error::{DomError, StructuralViolation};

/// A type-safe index into the tree.
///
/// `NodeId` provides O(1) access to any node in the tree without borrowing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One slot of the arena.
///
/// Relationships are private so that the parent/child invariants can only
/// change through [`DomTree`].
#[derive(Debug, Clone)]
pub struct Node {
    node_type: NodeType,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    /// The node's payload.
    #[must_use]
    pub const fn node_type(&self) -> &NodeType {
        &self.node_type
    }

    /// The parent, if attached.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Kind of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.node_type.kind()
    }
}

/// Payload of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// A container node with tag, attributes and an allow-list.
    Element(ElementData),
    /// A leaf holding raw, unescaped text.
    Text(String),
    /// A leaf holding comment text.
    Comment(String),
}

impl NodeType {
    /// Kind of this payload.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Element(data) => NodeKind::Element(data.kind()),
            Self::Text(_) => NodeKind::Text,
            Self::Comment(_) => NodeKind::Comment,
        }
    }
}

/// Arena-based tree with O(1) node access and traversal.
///
/// A tree may hold several disconnected roots; nodes start detached and are
/// attached with the `append`/`prepend`/`insert` family.
#[derive(Debug, Clone, Default)]
pub struct DomTree {
    /// All nodes in the tree, indexed by `NodeId`.
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get the number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Allocate an undecorated element.
    pub fn create_element(&mut self, kind: ElementKind) -> NodeId {
        self.alloc(NodeType::Element(ElementData::new(kind)))
    }

    /// Allocate an element with id, classes, styles and attributes set.
    pub fn create_element_with(&mut self, kind: ElementKind, init: ElementInit) -> NodeId {
        self.alloc(NodeType::Element(init.apply(kind)))
    }

    /// Allocate a text node holding `text` verbatim.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeType::Text(text.into()))
    }

    /// Allocate a comment node.
    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeType::Comment(text.into()))
    }

    /// Kind of a node.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.get(id).map(Node::kind)
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Check if a node has any children.
    #[must_use]
    pub fn has_children(&self, id: NodeId) -> bool {
        !self.children(id).is_empty()
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).last().copied()
    }

    /// Restartable cursor over the children of a node. Unknown nodes and
    /// leaves yield an empty cursor.
    #[must_use]
    pub fn child_cursor(&self, id: NodeId) -> ChildCursor<'_> {
        ChildCursor::new(self.children(id))
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get mutable element data if this node is an element.
    ///
    /// Only decoration can change through this; the kind is fixed at
    /// creation, so existing children stay valid.
    pub fn as_element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.nodes.get_mut(id.0).and_then(|n| match &mut n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Replace the content of a text node.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnknownNode`] for a dangling handle and
    /// [`DomError::UnsupportedOperation`] if the node is not a text node.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), DomError> {
        let node = self.nodes.get_mut(id.0).ok_or(DomError::UnknownNode(id))?;
        match &mut node.node_type {
            NodeType::Text(content) => {
                *content = text.into();
                Ok(())
            }
            other => Err(DomError::UnsupportedOperation {
                operation: "set_text",
                node: id,
                kind: other.kind(),
            }),
        }
    }

    /// Returns true if `candidate` is the parent of `id` or any transitive
    /// parent.
    #[must_use]
    pub fn is_ancestor(&self, id: NodeId, candidate: NodeId) -> bool {
        self.ancestors(id).any(|ancestor| ancestor == candidate)
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Returns true if `child` may be attached under `parent` according to
    /// the parent's allow-list. Leaves accept nothing.
    #[must_use]
    pub fn is_allowed_child(&self, parent: NodeId, child: NodeId) -> bool {
        match (self.as_element(parent), self.kind(child)) {
            (Some(data), Some(kind)) => data.kind().allows(kind),
            _ => false,
        }
    }

    /// Append `children` to `parent` in argument order.
    ///
    /// The whole batch is validated first; if any child is rejected nothing
    /// is attached.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Structural`] for a disallowed kind, self-attachment,
    /// a cycle or a duplicate in the batch, [`DomError::UnsupportedOperation`]
    /// if `parent` is a leaf and [`DomError::UnknownNode`] for dangling handles.
    pub fn append_children(
        &mut self,
        parent: NodeId,
        children: &[NodeId],
    ) -> Result<(), DomError> {
        self.validate_children(parent, children, "append_children")?;
        for &child in children {
            self.detach(child);
            self.nodes[parent.0].children.push(child);
            self.nodes[child.0].parent = Some(parent);
        }
        Ok(())
    }

    /// Append a single child.
    ///
    /// # Errors
    ///
    /// Same as [`DomTree::append_children`].
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.append_children(parent, &[child])
    }

    /// Insert `child` as the first child of `parent`.
    ///
    /// # Errors
    ///
    /// Same as [`DomTree::append_children`].
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.validate_children(parent, &[child], "prepend_child")?;
        self.attach_at(parent, 0, child);
        Ok(())
    }

    /// Insert `child` at `index`, clamped to the current number of children.
    ///
    /// # Errors
    ///
    /// Same as [`DomTree::append_children`].
    pub fn insert_child_at(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), DomError> {
        self.validate_children(parent, &[child], "insert_child_at")?;
        self.attach_at(parent, index, child);
        Ok(())
    }

    /// Remove `child` from `parent` by identity. Does nothing if `child` is
    /// not a child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnsupportedOperation`] if `parent` is a leaf and
    /// [`DomError::UnknownNode`] if it does not exist.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.require_container(parent, "remove_child")?;
        let siblings = &mut self.nodes[parent.0].children;
        if let Some(pos) = siblings.iter().position(|&id| id == child) {
            let _ = siblings.remove(pos);
            self.nodes[child.0].parent = None;
        }
        Ok(())
    }

    /// Detach every child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnsupportedOperation`] if `parent` is a leaf and
    /// [`DomError::UnknownNode`] if it does not exist.
    pub fn clear_children(&mut self, parent: NodeId) -> Result<(), DomError> {
        self.require_container(parent, "clear_children")?;
        let children = std::mem::take(&mut self.nodes[parent.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
        Ok(())
    }

    fn require_container(&self, parent: NodeId, operation: &'static str) -> Result<(), DomError> {
        let node = self.get(parent).ok_or(DomError::UnknownNode(parent))?;
        match node.node_type {
            NodeType::Element(_) => Ok(()),
            ref other => Err(DomError::UnsupportedOperation {
                operation,
                node: parent,
                kind: other.kind(),
            }),
        }
    }

    fn validate_children(
        &self,
        parent: NodeId,
        children: &[NodeId],
        operation: &'static str,
    ) -> Result<(), DomError> {
        self.require_container(parent, operation)?;
        let parent_kind = self.nodes[parent.0].kind();

        for (i, &child) in children.iter().enumerate() {
            let child_kind = self.kind(child).ok_or(DomError::UnknownNode(child))?;
            if child == parent {
                return Err(StructuralViolation::SelfAttachment(child).into());
            }
            if children[..i].contains(&child) {
                return Err(StructuralViolation::DuplicateInBatch(child).into());
            }
            if !self.is_allowed_child(parent, child) {
                return Err(StructuralViolation::NotAllowed {
                    parent: parent_kind,
                    child: child_kind,
                }
                .into());
            }
            if self.is_ancestor(parent, child) {
                return Err(StructuralViolation::Cycle { parent, child }.into());
            }
            if self.is_ancestor(child, parent) {
                return Err(StructuralViolation::AlreadyDescendant { parent, child }.into());
            }
        }
        Ok(())
    }

    /// Insert an already validated child.
    fn attach_at(&mut self, parent: NodeId, index: usize, child: NodeId) {
        self.detach(child);
        let siblings = &mut self.nodes[parent.0].children;
        let index = index.min(siblings.len());
        siblings.insert(index, child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Remove `child` from its current parent, if any.
    fn detach(&mut self, child: NodeId) {
        if let Some(old_parent) = self.nodes[child.0].parent.take() {
            self.nodes[old_parent.0].children.retain(|&id| id != child);
        }
    }
}

/// Iterator over ancestors of a node.
#[derive(Debug)]
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}
