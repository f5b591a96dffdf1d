//! Key input adapters

pub mod adc;
pub mod gpio;

pub use adc::{FnAnalog, Scaled12Bit};
pub use gpio::{gpio_keypad, EhPin};
