//! Four keys on one analog channel
//!
//! With a 10K pull-up and 1.5K, 5.6K, 18K and 68K key resistors the
//! held keys read near 134, 368, 658 and 893; an open channel reads near
//! full scale. The 0..=1023 range is split into bins of `bin_width`
//! levels, bin 0 being Up. Reads are blended into a running average
//! first to reject noise.

use keymenu_hal::AnalogInput;

use super::key::Key;
use super::KeySource;
use crate::config::AnalogConfig;

/// Resistor-ladder keypad
pub struct AnalogKeypad<A> {
    adc: A,
    config: AnalogConfig,
}

impl<A: AnalogInput> AnalogKeypad<A> {
    /// Create a keypad on one channel
    pub fn new(adc: A, config: AnalogConfig) -> Self {
        Self { adc, config }
    }

    /// Get access to the underlying channel
    pub fn adc(&self) -> &A {
        &self.adc
    }

    /// Blend `samples` reads into a running average
    ///
    /// Each read moves the average halfway towards it, so the result
    /// weights recent reads most heavily.
    pub fn average(&mut self) -> u16 {
        let mut average = u32::from(self.adc.read());
        for _ in 0..self.config.samples {
            average = (average + u32::from(self.adc.read())) / 2;
        }
        average as u16
    }
}

impl<A: AnalogInput> KeySource for AnalogKeypad<A> {
    fn read_key(&mut self) -> Option<Key> {
        let level = self.average();
        key_for_level(level, &self.config)
    }
}

/// Map an averaged reading to a key
///
/// Readings above the open threshold mean no key is held.
pub fn key_for_level(level: u16, config: &AnalogConfig) -> Option<Key> {
    if level > config.open_threshold || config.bin_width == 0 {
        return None;
    }
    Key::from_index(usize::from(level / config.bin_width))
}
