//! Logical keys

/// One of the four arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Previous sibling
    Up,
    /// Next sibling
    Down,
    /// Back to the parent
    Left,
    /// Open a submenu or activate an action
    Right,
}

// Codes handed to applications, matching the reference keypad numbering
const CODE_UP: u8 = 1;
const CODE_DOWN: u8 = 2;
const CODE_LEFT: u8 = 3;
const CODE_RIGHT: u8 = 4;

impl Key {
    /// All keys in pin/bin order
    pub const ALL: [Key; 4] = [Key::Up, Key::Down, Key::Left, Key::Right];

    /// Key for a 0-based pin or ladder bin index
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Key::Up),
            1 => Some(Key::Down),
            2 => Some(Key::Left),
            3 => Some(Key::Right),
            _ => None,
        }
    }

    /// 0-based pin or ladder bin index
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse a 1-based key code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            CODE_UP => Some(Key::Up),
            CODE_DOWN => Some(Key::Down),
            CODE_LEFT => Some(Key::Left),
            CODE_RIGHT => Some(Key::Right),
            _ => None,
        }
    }

    /// 1-based key code (0 is reserved for "no key")
    pub fn code(self) -> u8 {
        match self {
            Key::Up => CODE_UP,
            Key::Down => CODE_DOWN,
            Key::Left => CODE_LEFT,
            Key::Right => CODE_RIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        for key in Key::ALL {
            assert_eq!(Key::from_code(key.code()), Some(key));
        }
        assert_eq!(Key::from_code(0), None);
        assert_eq!(Key::from_code(5), None);
    }

    #[test]
    fn test_index_order() {
        assert_eq!(Key::from_index(0), Some(Key::Up));
        assert_eq!(Key::from_index(3), Some(Key::Right));
        assert_eq!(Key::from_index(4), None);
        assert_eq!(Key::Left.index(), 2);
    }
}
