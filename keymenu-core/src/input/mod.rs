//! Key engine
//!
//! Turns raw samples into logical arrow keys. Three interchangeable
//! sources implement [`KeySource`]:
//!
//! - [`DigitalKeypad`]: one pin per key, debounced by net sample count
//! - [`AnalogKeypad`]: four keys on one ADC channel via a resistor ladder
//! - [`ExternalKeys`]: codes supplied by the application's own keypad
//!
//! On top of a source, [`PressTracker`] reports one event per
//! press-release cycle and [`AutoRepeat`] re-emits held keys. Both are
//! polled once per tick and never wait.

pub mod analog;
pub mod debounce;
pub mod digital;
pub mod external;
pub mod key;
pub mod press;
pub mod repeat;

pub use analog::{key_for_level, AnalogKeypad};
pub use debounce::{DebounceState, Debouncer};
pub use digital::DigitalKeypad;
pub use external::{ExternalKeys, KeyMap};
pub use key::Key;
pub use press::PressTracker;
pub use repeat::{AutoRepeat, RepeatState};

/// A debounced source of logical keys
pub trait KeySource {
    /// The key held right now, if any
    fn read_key(&mut self) -> Option<Key>;

    /// Check whether `key` is held right now
    fn is_pressed(&mut self, key: Key) -> bool {
        self.read_key() == Some(key)
    }

    /// Check whether any key is held right now
    fn any_pressed(&mut self) -> bool {
        self.read_key().is_some()
    }
}

impl<T: KeySource + ?Sized> KeySource for &mut T {
    fn read_key(&mut self) -> Option<Key> {
        (**self).read_key()
    }
}
