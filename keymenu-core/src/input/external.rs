//! Keys supplied by the application
//!
//! When the application scans its own keypad (a matrix keypad returning
//! characters, a remote returning integers) it hands the codes over and
//! only the mapping to logical keys happens here.

use super::key::Key;
use super::KeySource;

/// Application codes for the four keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyMap<T> {
    pub up: T,
    pub down: T,
    pub left: T,
    pub right: T,
}

impl<T: PartialEq> KeyMap<T> {
    /// Create a mapping
    pub const fn new(up: T, down: T, left: T, right: T) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    /// Logical key for an application code
    pub fn map(&self, code: &T) -> Option<Key> {
        if *code == self.up {
            Some(Key::Up)
        } else if *code == self.down {
            Some(Key::Down)
        } else if *code == self.left {
            Some(Key::Left)
        } else if *code == self.right {
            Some(Key::Right)
        } else {
            None
        }
    }
}

/// Matrix-keypad style mapping: `'2'`, `'8'`, `'4'`, `'6'`
impl Default for KeyMap<char> {
    fn default() -> Self {
        Self::new('2', '8', '4', '6')
    }
}

/// Key source fed with application codes
///
/// The application reports what its keypad holds each tick with
/// [`ExternalKeys::feed`]; press tracking and auto-repeat then work the
/// same as with the built-in keypads.
#[derive(Debug, Clone)]
pub struct ExternalKeys<T> {
    map: KeyMap<T>,
    held: Option<Key>,
}

impl<T: PartialEq> ExternalKeys<T> {
    /// Create a source with no key held
    pub fn new(map: KeyMap<T>) -> Self {
        Self { map, held: None }
    }

    /// Record the code currently held (`None` when released)
    ///
    /// Codes outside the mapping count as no key.
    pub fn feed(&mut self, code: Option<T>) {
        self.held = code.and_then(|code| self.map.map(&code));
    }

    /// The mapping in use
    pub fn map(&self) -> &KeyMap<T> {
        &self.map
    }
}

impl<T: PartialEq> KeySource for ExternalKeys<T> {
    fn read_key(&mut self) -> Option<Key> {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_mapping() {
        let map = KeyMap::new('u', 'd', 'l', 'r');
        assert_eq!(map.map(&'u'), Some(Key::Up));
        assert_eq!(map.map(&'r'), Some(Key::Right));
        assert_eq!(map.map(&'x'), None);
    }

    #[test]
    fn test_integer_mapping() {
        let map = KeyMap::new(10, 20, 30, 40);
        assert_eq!(map.map(&30), Some(Key::Left));
        assert_eq!(map.map(&0), None);
    }

    #[test]
    fn test_default_matrix_keypad() {
        let map = KeyMap::default();
        assert_eq!(map.map(&'8'), Some(Key::Down));
    }

    #[test]
    fn test_external_source_holds_last_feed() {
        let mut keys = ExternalKeys::new(KeyMap::new(1u8, 2, 3, 4));
        assert_eq!(keys.read_key(), None);
        keys.feed(Some(4));
        assert_eq!(keys.read_key(), Some(Key::Right));
        assert!(keys.is_pressed(Key::Right));
        keys.feed(Some(9));
        assert_eq!(keys.read_key(), None);
        keys.feed(Some(2));
        keys.feed(None);
        assert!(!keys.any_pressed());
    }
}
