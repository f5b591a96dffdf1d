//! embedded-hal digital pins
//!
//! Keys are wired to ground with the pin pulled up, so a failed read is
//! reported as high (released) by default: a flaky bus never produces
//! phantom presses.

use embedded_hal::digital::InputPin as EhInputPin;
use keymenu_core::config::DebounceConfig;
use keymenu_core::input::DigitalKeypad;
use keymenu_hal::{InputPin, Level};

/// An embedded-hal input pin usable as a key line
pub struct EhPin<P> {
    pin: P,
    /// Level reported when the read fails
    on_error: Level,
    errors: u32,
}

impl<P: EhInputPin> EhPin<P> {
    /// Wrap a pin whose failed reads count as high
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            on_error: Level::High,
            errors: 0,
        }
    }

    /// Report `level` when a read fails
    pub fn on_error(mut self, level: Level) -> Self {
        self.on_error = level;
        self
    }

    /// Number of failed reads so far
    pub fn error_count(&self) -> u32 {
        self.errors
    }

    /// Get the wrapped pin back
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: EhInputPin> InputPin for EhPin<P> {
    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => high,
            Err(_) => {
                self.errors = self.errors.wrapping_add(1);
                self.on_error == Level::High
            }
        }
    }
}

/// Four-pin keypad over embedded-hal pins, active low
pub fn gpio_keypad<P: EhInputPin>(
    up: P,
    down: P,
    left: P,
    right: P,
    debounce: DebounceConfig,
) -> DigitalKeypad<EhPin<P>> {
    DigitalKeypad::new(
        EhPin::new(up),
        EhPin::new(down),
        EhPin::new(left),
        EhPin::new(right),
        debounce,
    )
}
