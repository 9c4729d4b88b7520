//! Errors raised by tree mutation.

use thiserror::Error;

use crate::NodeId;
use crate::element::NodeKind;

/// A mutation that would break the shape of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralViolation {
    /// The parent's allow-list does not contain the child's kind.
    #[error("{child} is not allowed inside {parent}")]
    NotAllowed {
        /// Kind of the prospective parent.
        parent: NodeKind,
        /// Kind of the rejected child.
        child: NodeKind,
    },

    /// A node was attached to itself.
    #[error("node {0} cannot be its own child")]
    SelfAttachment(NodeId),

    /// The child is an ancestor of the prospective parent.
    #[error("attaching node {child} under node {parent} would create a cycle")]
    Cycle {
        /// The prospective parent.
        parent: NodeId,
        /// The child, already an ancestor of `parent`.
        child: NodeId,
    },

    /// The child already sits somewhere below the prospective parent.
    #[error("node {child} is already a descendant of node {parent}")]
    AlreadyDescendant {
        /// The prospective parent.
        parent: NodeId,
        /// The child, already below `parent`.
        child: NodeId,
    },

    /// The same node appears twice in one batch.
    #[error("node {0} appears more than once in the same insertion")]
    DuplicateInBatch(NodeId),
}

/// Errors returned by [`crate::DomTree`] mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// Invalid child, self-attachment or cycle. Nothing was mutated.
    #[error("invalid child: {0}")]
    Structural(#[from] StructuralViolation),

    /// Child mutation attempted on a leaf node.
    #[error("`{operation}` is not supported on {kind} node {node}")]
    UnsupportedOperation {
        /// Name of the rejected operation.
        operation: &'static str,
        /// The leaf node.
        node: NodeId,
        /// Kind of the leaf node.
        kind: NodeKind,
    },

    /// The handle does not refer to a node in this tree.
    #[error("node {0} does not exist in this tree")]
    UnknownNode(NodeId),
}

impl DomError {
    /// Returns true for the structural violation family.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::Structural(_))
    }
}
