//! Display abstraction for keymenu
//!
//! This crate provides:
//! - `DisplayBackend` trait for character-grid displays (HD44780 LCDs,
//!   I2C backpacks, text-mode OLEDs)
//! - `Screen`, an in-memory character grid that implements the trait
//!
//! # Architecture
//!
//! The menu core only ever writes a string at a (column, row) and clears
//! the display. Concrete drivers implement `DisplayBackend`; the menu
//! controller holds one as a trait object and never needs to know which
//! hardware is behind it.
//!
//! `Screen` can be used directly as a frame buffer: render the menu into
//! it, then copy its lines to hardware that prefers whole-line updates.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use screen::{Screen, Lcd16x2, Lcd20x4};
