//! Node records

use core::ops::Range;

/// Index of a compiled node, 1-based in document order
///
/// Top-level items have no parent node; there is no id for the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NodeId(u8);

impl NodeId {
    /// The first top-level item
    pub const FIRST: NodeId = NodeId(1);

    /// Node ids fit in a byte
    pub const MAX_NODES: usize = u8::MAX as usize;

    /// Create an id from its 1-based number; 0 is not a node
    pub const fn new(number: u8) -> Option<Self> {
        if number == 0 {
            None
        } else {
            Some(NodeId(number))
        }
    }

    /// 1-based node number
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Arena slot
    pub(crate) const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Id for an arena slot; callers keep slots below `MAX_NODES`
    pub(crate) const fn from_index(index: usize) -> Self {
        NodeId(index as u8 + 1)
    }

    pub(crate) const fn following(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(NodeId(next)),
            None => None,
        }
    }

    pub(crate) const fn preceding(self) -> Option<Self> {
        NodeId::new(self.0 - 1)
    }
}

/// One compiled menu item
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Node {
    /// Label start (byte offset into the source)
    pub(crate) label_start: u16,
    /// Label end, exclusive
    pub(crate) label_end: u16,
    /// Enclosing item, `None` at the top level
    pub(crate) parent: Option<NodeId>,
    /// First child in document order
    pub(crate) eldest_child: Option<NodeId>,
    /// Action code, 0 for submenus
    pub(crate) action: u16,
}

impl Node {
    /// Byte range of the label in the source
    pub fn label_span(&self) -> Range<usize> {
        self.label_start as usize..self.label_end as usize
    }

    /// Enclosing item, `None` at the top level
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// First child, `None` for items without children
    pub fn eldest_child(&self) -> Option<NodeId> {
        self.eldest_child
    }

    /// Action code in 0..=999
    pub fn action(&self) -> u16 {
        self.action
    }

    /// True when activating this item opens a submenu
    pub fn is_submenu(&self) -> bool {
        self.action == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_zero_is_not_a_node() {
        assert_eq!(NodeId::new(0), None);
        assert_eq!(NodeId::new(1), Some(NodeId::FIRST));
    }

    #[test]
    fn test_node_id_neighbours() {
        let id = NodeId::new(2).unwrap();
        assert_eq!(id.preceding(), Some(NodeId::FIRST));
        assert_eq!(NodeId::FIRST.preceding(), None);
        assert_eq!(NodeId::new(255).unwrap().following(), None);
        assert_eq!(id.index(), 1);
        assert_eq!(NodeId::from_index(1), id);
    }
}
