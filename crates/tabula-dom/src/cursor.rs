//! Restartable forward cursor over a node's children.

use crate::NodeId;

/// Forward cursor over the children of one node.
///
/// The cursor hides the backing storage: callers only see `rewind`,
/// `has_next` and [`Iterator::next`]. A cursor borrows the tree, so the
/// children cannot change while it is alive.
#[derive(Debug, Clone)]
pub struct ChildCursor<'a> {
    children: &'a [NodeId],
    position: usize,
}

impl<'a> ChildCursor<'a> {
    pub(crate) const fn new(children: &'a [NodeId]) -> Self {
        Self {
            children,
            position: 0,
        }
    }

    /// Move back to the first child.
    pub const fn rewind(&mut self) {
        self.position = 0;
    }

    /// Returns true if [`Iterator::next`] would yield a child.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.position < self.children.len()
    }

    /// Number of children already visited since the last rewind.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl Iterator for ChildCursor<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.children.get(self.position).copied()?;
        self.position += 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.children.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChildCursor<'_> {}
