//! Analog channel adapters
//!
//! embedded-hal 1.0 has no ADC trait, so analog keypads are fed from a
//! closure that performs one conversion on the board's own ADC driver.

use keymenu_hal::{AnalogInput, ADC_MAX};

/// Analog channel read through a closure returning 10-bit values
///
/// Readings above full scale are clamped.
pub struct FnAnalog<F> {
    read: F,
}

impl<F: FnMut() -> u16> FnAnalog<F> {
    /// Wrap a conversion closure
    pub fn new(read: F) -> Self {
        Self { read }
    }
}

impl<F: FnMut() -> u16> AnalogInput for FnAnalog<F> {
    fn read(&mut self) -> u16 {
        (self.read)().min(ADC_MAX)
    }
}

/// Scales a 12-bit converter (RP2040, STM32) down to 10 bits
pub struct Scaled12Bit<A> {
    inner: A,
}

impl<A: AnalogInput> Scaled12Bit<A> {
    /// Wrap a channel returning 0..=4095
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

impl<A: AnalogInput> AnalogInput for Scaled12Bit<A> {
    fn read(&mut self) -> u16 {
        (self.inner.read() >> 2).min(ADC_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keymenu_core::config::AnalogConfig;
    use keymenu_core::input::AnalogKeypad;
    use keymenu_core::{Key, KeySource};

    #[test]
    fn test_closure_channel_is_clamped() {
        let mut channel = FnAnalog::new(|| 2000);
        assert_eq!(channel.read(), ADC_MAX);
    }

    #[test]
    fn test_twelve_bit_scaling() {
        let mut raw = Scaled12Bit::new(Raw(4095));
        assert_eq!(raw.read(), ADC_MAX);
        let mut raw = Scaled12Bit::new(Raw(1472));
        assert_eq!(raw.read(), 368);
    }

    #[test]
    fn test_ladder_over_twelve_bit_adc() {
        let mut keypad = AnalogKeypad::new(Scaled12Bit::new(Raw(2632)), AnalogConfig::default());
        assert_eq!(keypad.read_key(), Some(Key::Left));
    }

    struct Raw(u16);

    impl AnalogInput for Raw {
        fn read(&mut self) -> u16 {
            self.0
        }
    }
}
