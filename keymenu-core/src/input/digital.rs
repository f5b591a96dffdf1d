//! One pin per key
//!
//! Each key pulls its pin to the active level (low, with pull-ups) while
//! held. When several pins read active the last one in
//! Up/Down/Left/Right order wins. The winning pin is then debounced before
//! the key is reported.

use keymenu_hal::{InputPin, Level};

use super::debounce::Debouncer;
use super::key::Key;
use super::KeySource;
use crate::config::DebounceConfig;
use crate::log::log_warn;

/// Four-pin keypad
pub struct DigitalKeypad<P> {
    /// Pins in Up, Down, Left, Right order
    pins: [P; 4],
    active: Level,
    debounce: DebounceConfig,
}

impl<P: InputPin> DigitalKeypad<P> {
    /// Create a keypad with active-low (pulled-up) keys
    pub fn new(up: P, down: P, left: P, right: P, debounce: DebounceConfig) -> Self {
        Self {
            pins: [up, down, left, right],
            active: Level::Low,
            debounce,
        }
    }

    /// Use keys that read high while held
    pub fn active_high(mut self) -> Self {
        self.active = Level::High;
        self
    }

    /// Get access to the pin of a key
    pub fn pin(&self, key: Key) -> &P {
        &self.pins[key.index()]
    }

    /// Get mutable access to the pin of a key
    pub fn pin_mut(&mut self, key: Key) -> &mut P {
        &mut self.pins[key.index()]
    }

    /// Key whose pin reads active on a single pass, without debouncing
    fn scan(&mut self) -> Option<Key> {
        let active = self.active;
        let mut found = None;
        for key in Key::ALL {
            if self.pins[key.index()].level() == active {
                found = Some(key);
            }
        }
        found
    }
}

impl<P: InputPin> KeySource for DigitalKeypad<P> {
    fn read_key(&mut self) -> Option<Key> {
        let key = self.scan()?;
        let pin = &mut self.pins[key.index()];
        match Debouncer::settle(self.debounce, || pin.level()) {
            Some(level) if level == self.active => Some(key),
            Some(_) => None,
            None => {
                log_warn!("key {} never settled", key);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Pin replaying a fixed pattern, holding the last level
    struct Scripted<'s> {
        levels: &'s [bool],
        at: Cell<usize>,
    }

    impl<'s> Scripted<'s> {
        fn new(levels: &'s [bool]) -> Self {
            Self {
                levels,
                at: Cell::new(0),
            }
        }

        fn idle() -> Self {
            Self::new(&[true])
        }
    }

    impl InputPin for Scripted<'_> {
        fn is_high(&mut self) -> bool {
            let at = self.at.get();
            self.at.set(at + 1);
            self.levels[at.min(self.levels.len() - 1)]
        }
    }

    fn quick() -> DebounceConfig {
        DebounceConfig {
            threshold: 4,
            budget: 20,
        }
    }

    #[test]
    fn test_idle_pins_report_no_key() {
        let mut keypad = DigitalKeypad::new(
            Scripted::idle(),
            Scripted::idle(),
            Scripted::idle(),
            Scripted::idle(),
            quick(),
        );
        assert_eq!(keypad.read_key(), None);
        assert!(!keypad.any_pressed());
    }

    #[test]
    fn test_held_key_is_reported() {
        let mut keypad = DigitalKeypad::new(
            Scripted::idle(),
            Scripted::new(&[false]),
            Scripted::idle(),
            Scripted::idle(),
            quick(),
        );
        assert_eq!(keypad.read_key(), Some(Key::Down));
    }

    #[test]
    fn test_last_active_pin_wins() {
        let mut keypad = DigitalKeypad::new(
            Scripted::new(&[false]),
            Scripted::idle(),
            Scripted::idle(),
            Scripted::new(&[false]),
            quick(),
        );
        assert_eq!(keypad.read_key(), Some(Key::Right));
    }

    #[test]
    fn test_glitch_is_rejected() {
        // Scan sees low, debounce reference is low, then the line is high
        let mut keypad = DigitalKeypad::new(
            Scripted::new(&[false, false, true]),
            Scripted::idle(),
            Scripted::idle(),
            Scripted::idle(),
            quick(),
        );
        assert_eq!(keypad.read_key(), None);
    }

    #[test]
    fn test_active_high_keys() {
        let mut keypad = DigitalKeypad::new(
            Scripted::new(&[false]),
            Scripted::new(&[false]),
            Scripted::new(&[true]),
            Scripted::new(&[false]),
            quick(),
        )
        .active_high();
        assert_eq!(keypad.read_key(), Some(Key::Left));
    }
}
