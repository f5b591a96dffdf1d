//! Analog input abstraction
//!
//! A single ADC channel reading a voltage divider: one pull-up resistor to
//! the supply and one resistor per key to ground. Each key pulls the
//! channel to a distinct level; with no key held the channel floats near
//! full scale.

/// Full-scale reading of a 10-bit converter
pub const ADC_MAX: u16 = 1023;

/// One analog channel
///
/// Implementations scale their converter to the 10-bit range
/// `0..=ADC_MAX`, so 12-bit ADCs shift right by two.
pub trait AnalogInput {
    /// Take one conversion
    fn read(&mut self) -> u16;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    fn read(&mut self) -> u16 {
        (**self).read()
    }
}
