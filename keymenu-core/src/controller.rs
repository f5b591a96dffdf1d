//! Menu controller
//!
//! Owns the menu plus, optionally, the key source and the display, and is
//! polled once per iteration of the application's loop. Nothing here
//! waits: a key that is still held simply reports "no event yet" until a
//! later poll.
//!
//! ```text
//!  poll ─► KeySource ─► PressTracker / AutoRepeat ─► Menu::update
//!                                                        │
//!                         DisplayBackend ◄── render ◄────┘ (if dirty)
//! ```

use keymenu_display::{DisplayBackend, DisplayError};

use crate::config::{RepeatConfig, ViewConfig};
use crate::input::{AutoRepeat, Key, KeyMap, KeySource, PressTracker};
use crate::log::{debug, info};
use crate::menu::Menu;
use crate::nav::Outcome;
use crate::tree::{TreeError, DEFAULT_CAPACITY};
use crate::view::render;

/// Controller errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuError {
    /// Polled without a key source; the application must feed keys itself
    NoKeySource,
    /// Tree query failed
    Tree(TreeError),
    /// Display write failed
    Display(DisplayError),
}

impl From<TreeError> for MenuError {
    fn from(e: TreeError) -> Self {
        MenuError::Tree(e)
    }
}

impl From<DisplayError> for MenuError {
    fn from(e: DisplayError) -> Self {
        MenuError::Display(e)
    }
}

/// Menu with its key source and display
pub struct MenuController<'a, 'io, const N: usize = DEFAULT_CAPACITY> {
    menu: Menu<'a, N>,
    keys: Option<&'io mut dyn KeySource>,
    display: Option<&'io mut dyn DisplayBackend>,
    presses: PressTracker,
    /// Completed press not yet claimed by `was_pressed` or `poll`
    pending: Option<Key>,
    repeat: AutoRepeat,
}

impl<'a, 'io, const N: usize> MenuController<'a, 'io, N> {
    /// Wrap a menu; no keys or display attached yet
    pub fn new(menu: Menu<'a, N>) -> Self {
        Self {
            menu,
            keys: None,
            display: None,
            presses: PressTracker::new(),
            pending: None,
            repeat: AutoRepeat::new(RepeatConfig::default()),
        }
    }

    /// Set auto-repeat timing for [`Self::poll_with_repeat`]
    pub fn with_repeat(mut self, config: RepeatConfig) -> Self {
        self.repeat.set_config(config);
        self
    }

    /// The menu
    pub fn menu(&self) -> &Menu<'a, N> {
        &self.menu
    }

    /// The menu, mutably
    pub fn menu_mut(&mut self) -> &mut Menu<'a, N> {
        &mut self.menu
    }

    /// Read keys from `keys` from now on
    pub fn handle_keys(&mut self, keys: &'io mut dyn KeySource) {
        self.keys = Some(keys);
        self.presses = PressTracker::new();
        self.pending = None;
        self.repeat.reset();
    }

    /// Stop reading keys; the application feeds them through [`Self::update`]
    pub fn release_keys(&mut self) {
        self.keys = None;
    }

    /// Draw on `display` from now on, sized to its dimensions
    pub fn handle_display(&mut self, display: &'io mut dyn DisplayBackend) -> Result<(), MenuError> {
        let (cols, rows) = display.dimensions();
        let marker = self.menu.view().marker;
        self.menu.set_view(ViewConfig { cols, rows, marker });
        self.display = Some(display);
        self.show_menu()
    }

    /// Give the display back; the application draws using
    /// [`Menu::line_for_display`] for a display of `cols` x `rows`
    pub fn define_display(&mut self, cols: u8, rows: u8) {
        self.display = None;
        let marker = self.menu.view().marker;
        self.menu.set_view(ViewConfig { cols, rows, marker });
    }

    /// Whether the controller draws the menu itself
    pub fn owns_display(&self) -> bool {
        self.display.is_some()
    }

    fn source(&mut self) -> Result<&mut (dyn KeySource + 'io), MenuError> {
        match self.keys.as_deref_mut() {
            Some(keys) => Ok(keys),
            None => Err(MenuError::NoKeySource),
        }
    }

    /// The key held right now
    pub fn read_key(&mut self) -> Result<Option<Key>, MenuError> {
        Ok(self.source()?.read_key())
    }

    /// Check whether `key` is held right now
    pub fn is_pressed(&mut self, key: Key) -> Result<bool, MenuError> {
        Ok(self.source()?.is_pressed(key))
    }

    /// Check whether any key is held right now
    pub fn any_pressed(&mut self) -> Result<bool, MenuError> {
        Ok(self.source()?.any_pressed())
    }

    /// Sample the keys and park a completed press until it is claimed
    fn collect_press(&mut self) -> Result<(), MenuError> {
        let sample = self.source()?.read_key();
        if let Some(key) = self.presses.update(sample) {
            self.pending = Some(key);
        }
        Ok(())
    }

    /// True exactly once per press of `key`, on the first call after it
    /// is released
    ///
    /// A completed press of another key stays pending for its own
    /// `was_pressed` or for [`Self::poll`].
    pub fn was_pressed(&mut self, key: Key) -> Result<bool, MenuError> {
        self.collect_press()?;
        if self.pending == Some(key) {
            self.pending = None;
            return Ok(true);
        }
        Ok(false)
    }

    /// One tick: navigate on each completed press
    pub fn poll(&mut self) -> Result<Outcome, MenuError> {
        self.collect_press()?;
        match self.pending.take() {
            Some(key) => self.update(key),
            None => Ok(Outcome::Unchanged),
        }
    }

    /// One tick with auto-repeat: navigate as soon as a key goes down and
    /// again while it is held
    pub fn poll_with_repeat(&mut self, now_ms: u32) -> Result<Outcome, MenuError> {
        let sample = self.source()?.read_key();
        // Key still held after an action stays ignored
        let sample = if self.presses.is_suppressed() {
            self.presses.update(sample);
            None
        } else {
            sample
        };

        match self.repeat.poll(sample, now_ms) {
            Some(key) => self.update(key),
            None => Ok(Outcome::Unchanged),
        }
    }

    /// Apply a key and redraw if the cursor moved
    pub fn update(&mut self, key: Key) -> Result<Outcome, MenuError> {
        let outcome = self.menu.try_update(key)?;
        if outcome.moved() {
            self.show_menu()?;
        }
        Ok(outcome)
    }

    /// Apply an application key code through `map`
    pub fn update_with<T: PartialEq>(
        &mut self,
        map: &KeyMap<T>,
        code: &T,
    ) -> Result<Outcome, MenuError> {
        match map.map(code) {
            Some(key) => self.update(key),
            None => Ok(Outcome::Unchanged),
        }
    }

    /// The application finished an action: redraw the menu and ignore
    /// keys until everything is released
    pub fn done(&mut self) -> Result<(), MenuError> {
        self.menu.done();
        self.presses.suppress_until_release();
        self.pending = None;
        self.repeat.reset();
        self.show_menu()
    }

    /// Back to the first top-level item
    pub fn restart(&mut self) -> Result<(), MenuError> {
        self.menu.restart();
        self.show_menu()
    }

    /// Redraw the owned display if the view is dirty
    pub fn show_menu(&mut self) -> Result<(), MenuError> {
        if !self.menu.needs_refresh() {
            return Ok(());
        }
        let Some(display) = self.display.as_deref_mut() else {
            return Ok(());
        };

        render(&self.menu, display)?;
        self.menu.refreshed();
        debug!("menu drawn at {}", self.menu.current_item());
        Ok(())
    }

    /// Take the menu back, dropping the key source and display
    pub fn into_menu(self) -> Menu<'a, N> {
        info!("controller released");
        self.menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ExternalKeys;
    use keymenu_display::{Lcd16x2, Screen};

    const MENU: &str = "-READ:000--A:101--B:102-SET:000";

    #[test]
    fn test_poll_without_keys_fails() {
        let mut controller: MenuController<'_, '_, 8> =
            MenuController::new(Menu::new(MENU).unwrap());
        assert_eq!(controller.poll(), Err(MenuError::NoKeySource));
        assert_eq!(controller.poll_with_repeat(0), Err(MenuError::NoKeySource));
        assert_eq!(controller.read_key(), Err(MenuError::NoKeySource));
    }

    #[test]
    fn test_update_without_keys_still_works() {
        let mut controller: MenuController<'_, '_, 8> =
            MenuController::new(Menu::new(MENU).unwrap());
        assert!(controller.update(Key::Down).unwrap().moved());
        assert_eq!(controller.menu().current_label(), "SET");
    }

    #[test]
    fn test_owned_display_is_drawn_on_attach() {
        let mut lcd = Lcd16x2::new();
        {
            let mut controller: MenuController<'_, '_, 8> =
                MenuController::new(Menu::new(MENU).unwrap());
            controller.handle_display(&mut lcd).unwrap();
            assert!(!controller.menu().needs_refresh());
        }
        assert_eq!(lcd.trimmed_line(0), Some(">READ"));
        assert_eq!(lcd.trimmed_line(1), Some(" SET"));
    }

    #[test]
    fn test_define_display_leaves_refresh_to_application() {
        let mut controller: MenuController<'_, '_, 8> =
            MenuController::new(Menu::new(MENU).unwrap());
        controller.define_display(20, 4);
        assert!(!controller.owns_display());
        assert!(controller.menu().needs_refresh());
        assert_eq!(controller.menu().view().rows, 4);
        controller.show_menu().unwrap();
        assert!(controller.menu().needs_refresh());
    }

    #[test]
    fn test_was_pressed_false_while_held() {
        let mut keys = ExternalKeys::new(KeyMap::new('u', 'd', 'l', 'r'));
        keys.feed(Some('d'));
        let mut controller: MenuController<'_, '_, 8> =
            MenuController::new(Menu::new(MENU).unwrap());
        controller.handle_keys(&mut keys);
        assert_eq!(controller.was_pressed(Key::Down), Ok(false));
        assert_eq!(controller.is_pressed(Key::Down), Ok(true));
        assert_eq!(controller.any_pressed(), Ok(true));
    }

    #[test]
    fn test_tree_error_converts() {
        let outside = crate::tree::NodeId::new(42).unwrap();
        assert_eq!(
            MenuError::from(TreeError::OutOfRange(outside)),
            MenuError::Tree(TreeError::OutOfRange(outside))
        );
    }

    #[test]
    fn test_small_screen_is_clipped() {
        let mut lcd = Screen::<4, 1>::new();
        {
            let mut controller: MenuController<'_, '_, 8> =
                MenuController::new(Menu::new(MENU).unwrap());
            controller.handle_display(&mut lcd).unwrap();
            assert_eq!(controller.menu().view().cols, 4);
        }
        assert_eq!(lcd.line(0), Some(">REA"));
    }
}
