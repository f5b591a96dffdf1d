//! Compiled menu tree
//!
//! The menu string is compiled once into a flat arena of [`Node`]s,
//! numbered 1..=N in document order. Only the parent and the eldest child
//! of each node are stored; siblings are found by scanning for nodes that
//! share a parent.

pub mod compiler;
pub mod navigator;
pub mod node;

pub use compiler::{CompileError, ACTION_DIGITS, DELIMITER, MARKER, MAX_DEPTH};
pub use navigator::{Siblings, TreeError};
pub use node::{Node, NodeId};

use heapless::Vec;

/// Default node capacity of a menu
pub const DEFAULT_CAPACITY: usize = 64;

/// A compiled menu
///
/// Borrows the source string; labels are spans into it.
#[derive(Debug, Clone)]
pub struct MenuTree<'a, const N: usize = DEFAULT_CAPACITY> {
    source: &'a str,
    nodes: Vec<Node, N>,
}

impl<'a, const N: usize> MenuTree<'a, N> {
    /// The menu source this tree was compiled from
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Number of compiled nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a successfully compiled tree
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Id of the last node in document order
    pub fn last(&self) -> NodeId {
        NodeId::from_index(self.nodes.len().saturating_sub(1))
    }

    /// All node ids in document order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::from_index)
    }

    /// All nodes in document order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}
