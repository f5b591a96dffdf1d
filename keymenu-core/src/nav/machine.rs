//! Cursor transitions
//!
//! | key   | effect                                                     |
//! |-------|------------------------------------------------------------|
//! | Up    | previous sibling                                           |
//! | Down  | next sibling                                               |
//! | Left  | parent, unless already at the top level                    |
//! | Right | dispatch the action, or enter the first child of a submenu |
//!
//! Every transition lands on a compiled node: sibling moves past either
//! end and Left at the top level leave the cursor where it is.

use crate::input::Key;
use crate::tree::{MenuTree, NodeId, TreeError};

/// What a key does to the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Cursor moves to this node
    Move(NodeId),
    /// Cursor stays
    Stay,
    /// Application should perform this action; cursor stays
    Dispatch(u16),
}

/// Result of feeding a key to a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// No key, or the key did not move the cursor
    Unchanged,
    /// Cursor moved; the view needs a refresh
    Moved { from: NodeId, to: NodeId },
    /// An action item was activated
    Action(u16),
}

impl Outcome {
    /// Action code, 0 when no action was triggered
    pub fn action_code(&self) -> u16 {
        match self {
            Outcome::Action(code) => *code,
            _ => 0,
        }
    }

    /// Check if the cursor moved
    pub fn moved(&self) -> bool {
        matches!(self, Outcome::Moved { .. })
    }
}

/// Compute where `key` takes the cursor at `current`
pub fn transition<const N: usize>(
    tree: &MenuTree<'_, N>,
    current: NodeId,
    key: Key,
) -> Result<Transition, TreeError> {
    let target = match key {
        Key::Up => tree.previous_sibling(current)?,
        Key::Down => tree.next_sibling(current)?,
        Key::Left => match tree.parent(current)? {
            Some(parent) => parent,
            None => current,
        },
        Key::Right => {
            let node = tree.node(current)?;
            if !node.is_submenu() {
                return Ok(Transition::Dispatch(node.action()));
            }
            node.eldest_child().unwrap_or(current)
        }
    };

    if target == current {
        Ok(Transition::Stay)
    } else {
        Ok(Transition::Move(target))
    }
}
