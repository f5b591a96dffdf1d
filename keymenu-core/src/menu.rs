//! Menu facade
//!
//! A compiled tree, the cursor and the "view needs refresh" flag. The
//! menu never touches hardware: feed it keys with [`Menu::update`] and
//! pull display lines with [`Menu::line_for_display`], or let a
//! [`MenuController`](crate::MenuController) do both.

use crate::config::ViewConfig;
use crate::input::{Key, KeyMap};
use crate::log::{debug, info, log_warn};
use crate::nav::{transition, Outcome, Transition};
use crate::tree::{CompileError, MenuTree, NodeId, TreeError, DEFAULT_CAPACITY};
use crate::view::{format_row, row_slot, Line};

/// A navigable menu
#[derive(Debug, Clone)]
pub struct Menu<'a, const N: usize = DEFAULT_CAPACITY> {
    tree: MenuTree<'a, N>,
    current: NodeId,
    view: ViewConfig,
    needs_refresh: bool,
}

impl<'a, const N: usize> Menu<'a, N> {
    /// Compile `source` with the default 16x2 view
    pub fn new(source: &'a str) -> Result<Self, CompileError> {
        Self::with_view(source, ViewConfig::default())
    }

    /// Compile `source` for a display of the given geometry
    pub fn with_view(source: &'a str, view: ViewConfig) -> Result<Self, CompileError> {
        let tree = MenuTree::compile(source)?;
        Ok(Self {
            tree,
            current: NodeId::FIRST,
            view,
            needs_refresh: true,
        })
    }

    /// The compiled tree
    pub fn tree(&self) -> &MenuTree<'a, N> {
        &self.tree
    }

    /// Display geometry
    pub fn view(&self) -> &ViewConfig {
        &self.view
    }

    /// Change the display geometry; the view is redrawn
    pub fn set_view(&mut self, view: ViewConfig) {
        self.view = view;
        self.needs_refresh = true;
    }

    /// The cursor node
    pub fn current_item(&self) -> NodeId {
        self.current
    }

    /// Label of the cursor node
    pub fn current_label(&self) -> &'a str {
        self.tree.label(self.current).unwrap_or("")
    }

    /// Action code of the cursor node, 0 for submenus
    pub fn current_action(&self) -> u16 {
        self.tree.action(self.current).unwrap_or(0)
    }

    /// Move the cursor to the first item labelled `label`
    ///
    /// Returns false, leaving the cursor alone, when no item matches.
    pub fn set_current_item(&mut self, label: &str) -> bool {
        match self.tree.find(label) {
            Some(id) => {
                self.move_to(id);
                true
            }
            None => false,
        }
    }

    /// Apply one key
    ///
    /// A failed tree query is logged and leaves the cursor where it is.
    pub fn update(&mut self, key: Key) -> Outcome {
        match self.try_update(key) {
            Ok(outcome) => outcome,
            Err(e) => {
                log_warn!("navigation failed: {}", e);
                Outcome::Unchanged
            }
        }
    }

    /// Apply one key, failing if the cursor is outside the tree
    pub fn try_update(&mut self, key: Key) -> Result<Outcome, TreeError> {
        let outcome = match transition(&self.tree, self.current, key)? {
            Transition::Stay => Outcome::Unchanged,
            Transition::Dispatch(action) => {
                info!("action {} from {}", action, self.current);
                Outcome::Action(action)
            }
            Transition::Move(to) => {
                let from = self.current;
                self.move_to(to);
                Outcome::Moved { from, to }
            }
        };
        Ok(outcome)
    }

    /// Apply an application key code through `map`
    ///
    /// Codes outside the mapping are ignored.
    pub fn update_with<T: PartialEq>(&mut self, map: &KeyMap<T>, code: &T) -> Outcome {
        match map.map(code) {
            Some(key) => self.update(key),
            None => Outcome::Unchanged,
        }
    }

    /// Back to the first top-level item; the tree is kept
    pub fn restart(&mut self) {
        debug!("menu restart");
        self.move_to(NodeId::FIRST);
        self.needs_refresh = true;
    }

    /// The application finished an action and gives the display back
    pub fn done(&mut self) {
        debug!("action done at {}", self.current);
        self.needs_refresh = true;
    }

    /// Text for display row `row`, empty when the row shows nothing
    pub fn line_for_display(&self, row: u8) -> Line {
        let current = self.current;
        let (Ok(rank), Ok(count)) = (self.tree.rank(current), self.tree.siblings_count(current))
        else {
            return Line::new();
        };

        let slot = row_slot(rank, count, usize::from(self.view.rows), usize::from(row));
        let label = slot
            .and_then(|slot| self.tree.sibling_at(current, slot.rank).ok().flatten())
            .and_then(|id| self.tree.label(id).ok());

        match (slot, label) {
            (Some(slot), Some(label)) => format_row(label, slot.selected, &self.view),
            _ => Line::new(),
        }
    }

    /// Check if the view must be redrawn
    pub fn needs_refresh(&self) -> bool {
        self.needs_refresh
    }

    /// The view was redrawn
    pub fn refreshed(&mut self) {
        self.needs_refresh = false;
    }

    /// Force a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_refresh = true;
    }

    /// Log the compiled tree
    pub fn dump(&self) {
        self.tree.dump();
    }

    fn move_to(&mut self, id: NodeId) {
        if id != self.current {
            debug!("cursor {} -> {}", self.current, id);
            self.current = id;
            self.needs_refresh = true;
        }
    }
}
