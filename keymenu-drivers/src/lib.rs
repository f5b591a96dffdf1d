//! Hardware adapters
//!
//! This crate connects keymenu's key engine to real hardware:
//!
//! - `embedded-hal` 1.0 digital pins as keymenu input pins
//! - ready-made four-pin keypads over `embedded-hal` pins
//! - analog channels from a sampling closure, with 12-bit scaling

#![no_std]
#![deny(unsafe_code)]

pub mod keys;

pub use keys::{gpio_keypad, EhPin, FnAnalog, Scaled12Bit};
