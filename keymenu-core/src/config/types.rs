//! Configuration type definitions
//!
//! Defaults reproduce the reference keypad: 500 net samples to accept a
//! digital key, 300 blended reads for the analog ladder split into four
//! bins of 256 levels, and a 16x2 LCD.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Widest display line the renderer produces (HD44780 tops out at 40)
pub const MAX_LINE_LEN: usize = 40;

/// Digital key debounce settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DebounceConfig {
    /// Net count of samples agreeing with the first one needed to accept it
    pub threshold: u16,
    /// Samples taken before giving up on a channel that never settles
    pub budget: u16,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            threshold: 500,
            budget: 4000,
        }
    }
}

/// Analog resistor-ladder keypad settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalogConfig {
    /// Reads blended into the running average
    pub samples: u16,
    /// Width of each key bin in ADC levels
    pub bin_width: u16,
    /// Averages above this mean no key is held
    pub open_threshold: u16,
}

impl Default for AnalogConfig {
    fn default() -> Self {
        Self {
            samples: 300,
            bin_width: 256,
            open_threshold: 1000,
        }
    }
}

/// Auto-repeat timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RepeatConfig {
    /// Hold time before the key starts repeating (ms)
    pub delay_ms: u32,
    /// Time between repeated emissions while repeating (ms)
    pub interval_ms: u32,
}

impl Default for RepeatConfig {
    fn default() -> Self {
        Self {
            delay_ms: 500,
            interval_ms: 150,
        }
    }
}

impl RepeatConfig {
    /// Create repeat timing
    pub const fn new(delay_ms: u32, interval_ms: u32) -> Self {
        Self {
            delay_ms,
            interval_ms,
        }
    }
}

/// Display geometry and selection glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewConfig {
    /// Characters per row
    pub cols: u8,
    /// Rows available to the menu
    pub rows: u8,
    /// Prefix of the selected row; other rows get a blank
    pub marker: char,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            cols: 16,
            rows: 2,
            marker: '>',
        }
    }
}

impl ViewConfig {
    /// Geometry with the default marker
    pub const fn new(cols: u8, rows: u8) -> Self {
        Self {
            cols,
            rows,
            marker: '>',
        }
    }
}

/// Complete menu configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MenuConfig {
    pub debounce: DebounceConfig,
    pub analog: AnalogConfig,
    pub repeat: RepeatConfig,
    pub view: ViewConfig,
}

/// Configuration persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed
    Deserialize,
}

#[cfg(feature = "serde")]
impl MenuConfig {
    /// Serialize into `buf`, returning the used prefix
    pub fn to_slice<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Deserialize from postcard bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)
    }
}
