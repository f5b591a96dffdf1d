//! Menu string compiler
//!
//! Grammar, repeated with no separator:
//!
//! ```text
//! <dashes><label>:<3-digit action>
//! ```
//!
//! The dash run gives the nesting level (1 for top-level items). Action
//! `000` marks a submenu; anything else is handed back to the application
//! when the item is activated.
//!
//! Compilation is a single forward pass. The level of item `i + 1` is only
//! known after reading the dashes that follow item `i`, so each item is
//! linked to its parent from a small stack of open ancestors and the
//! lookahead decides whether to push (descend), keep (sibling) or pop
//! (ascend) before moving on.

use heapless::Vec;

use super::node::{Node, NodeId};
use super::MenuTree;
use crate::log::{debug, log_warn, trace};

/// Nesting level marker
pub const MARKER: u8 = b'-';

/// Separates a label from its action code
pub const DELIMITER: u8 = b':';

/// Width of the action field
pub const ACTION_DIGITS: usize = 3;

/// Deepest supported nesting level
pub const MAX_DEPTH: usize = 8;

/// Malformed menu source
///
/// `at` is the byte offset where the problem was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CompileError {
    /// Source contains no items
    Empty,
    /// An item does not start with a dash run
    MissingMarker { at: usize },
    /// Nothing between the dashes and the delimiter
    EmptyLabel { at: usize },
    /// No `:` after a label
    MissingDelimiter { at: usize },
    /// Action field is not three decimal digits
    BadAction { at: usize },
    /// Item is more than one level deeper than the item before it,
    /// or the first item is not at level 1
    NestingJump { at: usize },
    /// Item is nested deeper than [`MAX_DEPTH`]
    TooDeep { at: usize },
    /// More items than the tree capacity
    TooManyItems,
    /// Source longer than label spans can address
    SourceTooLong,
}

impl<'a, const N: usize> MenuTree<'a, N> {
    /// Compile a menu source
    ///
    /// Fails without producing a partial tree if any item is malformed.
    pub fn compile(source: &'a str) -> Result<Self, CompileError> {
        let result: Result<Vec<Node, N>, CompileError> = Compiler::new(source).run();
        match &result {
            Ok(nodes) => debug!("menu compiled: {} nodes", nodes.len()),
            Err(e) => log_warn!("menu rejected: {}", e),
        }
        Ok(Self {
            source,
            nodes: result?,
        })
    }
}

struct Compiler<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Compiler<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    fn run<const N: usize>(mut self) -> Result<Vec<Node, N>, CompileError> {
        if self.bytes.is_empty() {
            return Err(CompileError::Empty);
        }
        if self.bytes.len() > u16::MAX as usize {
            return Err(CompileError::SourceTooLong);
        }

        let mut nodes: Vec<Node, N> = Vec::new();
        let mut ancestors: Vec<NodeId, MAX_DEPTH> = Vec::new();

        let start = self.pos;
        let mut level = self.markers()?;
        if level != 1 {
            return Err(CompileError::NestingJump { at: start });
        }

        loop {
            if nodes.len() >= NodeId::MAX_NODES {
                return Err(CompileError::TooManyItems);
            }
            let id = NodeId::from_index(nodes.len());
            let (label_start, label_end) = self.label()?;
            let action = self.action()?;

            nodes
                .push(Node {
                    label_start: label_start as u16,
                    label_end: label_end as u16,
                    parent: ancestors.last().copied(),
                    eldest_child: None,
                    action,
                })
                .map_err(|_| CompileError::TooManyItems)?;
            trace!("item {} at level {}", id, level);

            if self.pos == self.bytes.len() {
                break;
            }

            let next_at = self.pos;
            let next_level = self.markers()?;
            if next_level > MAX_DEPTH {
                return Err(CompileError::TooDeep { at: next_at });
            }
            if next_level > level + 1 {
                return Err(CompileError::NestingJump { at: next_at });
            }

            if next_level == level + 1 {
                // The next item is this item's eldest child
                ancestors
                    .push(id)
                    .map_err(|_| CompileError::TooDeep { at: next_at })?;
                if let Some(node) = nodes.last_mut() {
                    node.eldest_child = id.following();
                }
            } else {
                ancestors.truncate(next_level - 1);
            }
            level = next_level;
        }

        Ok(nodes)
    }

    /// Consume a dash run and return its length
    fn markers(&mut self) -> Result<usize, CompileError> {
        let start = self.pos;
        let run = self.bytes[start..]
            .iter()
            .take_while(|&&b| b == MARKER)
            .count();
        if run == 0 {
            return Err(CompileError::MissingMarker { at: start });
        }
        self.pos += run;
        Ok(run)
    }

    /// Consume a label and its delimiter, returning the label span
    fn label(&mut self) -> Result<(usize, usize), CompileError> {
        let start = self.pos;
        let len = self.bytes[start..]
            .iter()
            .position(|&b| b == DELIMITER)
            .ok_or(CompileError::MissingDelimiter { at: start })?;
        if len == 0 {
            return Err(CompileError::EmptyLabel { at: start });
        }
        self.pos = start + len + 1;
        Ok((start, start + len))
    }

    /// Consume the three-digit action field
    fn action(&mut self) -> Result<u16, CompileError> {
        let start = self.pos;
        let field = self
            .bytes
            .get(start..start + ACTION_DIGITS)
            .ok_or(CompileError::BadAction { at: start })?;

        let mut action = 0u16;
        for &digit in field {
            if !digit.is_ascii_digit() {
                return Err(CompileError::BadAction { at: start });
            }
            action = action * 10 + u16::from(digit - b'0');
        }
        self.pos = start + ACTION_DIGITS;
        Ok(action)
    }
}
