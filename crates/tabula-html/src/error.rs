//! Rendering errors.

use tabula_dom::{NodeId, NodeKind};
use thiserror::Error;

/// Errors returned by [`crate::HtmlRenderer`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The node is neither text nor an element.
    #[error("cannot render {kind} node {node}")]
    UnsupportedNodeKind {
        /// The offending node.
        node: NodeId,
        /// Its kind.
        kind: NodeKind,
    },

    /// The handle does not refer to a node in the tree.
    #[error("node {0} does not exist in this tree")]
    UnknownNode(NodeId),
}
