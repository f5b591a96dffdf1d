//! Tree queries
//!
//! Sibling links are not stored. They are rebuilt on demand by scanning
//! for nodes with the same parent, which costs O(N) per query on menus of
//! a few dozen items read at human key-press rates.
//!
//! Sibling moves past either end return the node itself: "no movement",
//! not an error.

use super::node::{Node, NodeId};
use super::MenuTree;

/// Tree query errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TreeError {
    /// Id outside 1..=last node
    OutOfRange(NodeId),
}

impl<'a, const N: usize> MenuTree<'a, N> {
    /// Look up a node
    pub fn node(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.nodes.get(id.index()).ok_or(TreeError::OutOfRange(id))
    }

    /// Check that `id` names a compiled node
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Enclosing item, `None` at the top level
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.node(id)?.parent)
    }

    /// First child, `None` when the item has no children
    pub fn eldest_child(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.node(id)?.eldest_child)
    }

    /// Action code, 0 for submenus
    pub fn action(&self, id: NodeId) -> Result<u16, TreeError> {
        Ok(self.node(id)?.action)
    }

    /// Display text of a node
    pub fn label(&self, id: NodeId) -> Result<&'a str, TreeError> {
        let span = self.node(id)?.label_span();
        // Spans end on ASCII dashes and colons, always char boundaries
        Ok(self.source.get(span).unwrap_or(""))
    }

    /// First sibling of `id` (possibly `id` itself)
    pub fn eldest_sibling(&self, id: NodeId) -> Result<NodeId, TreeError> {
        match self.parent(id)? {
            Some(parent) => Ok(self.eldest_child(parent)?.unwrap_or(id)),
            None => Ok(NodeId::FIRST),
        }
    }

    /// Previous sibling, or `id` itself when it is the eldest
    pub fn previous_sibling(&self, id: NodeId) -> Result<NodeId, TreeError> {
        let parent = self.parent(id)?;
        if self.eldest_sibling(id)? == id {
            return Ok(id);
        }

        let mut cursor = id.preceding();
        while let Some(candidate) = cursor {
            if self.nodes[candidate.index()].parent == parent {
                return Ok(candidate);
            }
            cursor = candidate.preceding();
        }
        Ok(id)
    }

    /// Next sibling, or `id` itself when it is the youngest
    pub fn next_sibling(&self, id: NodeId) -> Result<NodeId, TreeError> {
        let parent = self.parent(id)?;
        let found = self.nodes[id.index() + 1..]
            .iter()
            .position(|node| node.parent == parent)
            .map(|offset| NodeId::from_index(id.index() + 1 + offset));
        Ok(found.unwrap_or(id))
    }

    /// Iterate over all siblings of `id` (including `id`) in order
    pub fn siblings(&self, id: NodeId) -> Result<Siblings<'_, 'a, N>, TreeError> {
        Ok(Siblings {
            tree: self,
            parent: self.parent(id)?,
            next: self.eldest_sibling(id)?.index(),
        })
    }

    /// 1-based position of `id` among its siblings
    pub fn rank(&self, id: NodeId) -> Result<usize, TreeError> {
        let position = self.siblings(id)?.position(|sibling| sibling == id);
        Ok(position.map_or(1, |p| p + 1))
    }

    /// Number of nodes sharing `id`'s parent, `id` included
    pub fn siblings_count(&self, id: NodeId) -> Result<usize, TreeError> {
        Ok(self.siblings(id)?.count())
    }

    /// The sibling of `id` at 1-based `rank`
    pub fn sibling_at(&self, id: NodeId, rank: usize) -> Result<Option<NodeId>, TreeError> {
        let mut siblings = self.siblings(id)?;
        Ok(rank.checked_sub(1).and_then(|skip| siblings.nth(skip)))
    }

    /// First node whose label equals `label`
    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.ids()
            .find(|&id| self.label(id).is_ok_and(|l| l == label))
    }

    /// Log every node at trace level
    pub fn dump(&self) {
        for id in self.ids() {
            let node = &self.nodes[id.index()];
            crate::log::trace!(
                "{}: {}..{} parent={} eldest={} action={}",
                id,
                node.label_start,
                node.label_end,
                node.parent,
                node.eldest_child,
                node.action
            );
        }
    }
}

/// Siblings of a node in document order
pub struct Siblings<'t, 'a, const N: usize> {
    tree: &'t MenuTree<'a, N>,
    parent: Option<NodeId>,
    next: usize,
}

impl<'t, 'a, const N: usize> Iterator for Siblings<'t, 'a, N> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let nodes = &self.tree.nodes;
        while self.next < nodes.len() {
            let index = self.next;
            self.next += 1;
            if nodes[index].parent == self.parent {
                return Some(NodeId::from_index(index));
            }
        }
        None
    }
}
