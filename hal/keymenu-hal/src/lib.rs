//! Keymenu Hardware Abstraction Layer
//!
//! This crate defines the raw sampling traits the key engine reads from.
//! Chip-specific code (or the `keymenu-drivers` adapters over
//! `embedded-hal`) implements them; pin modes and pull-ups are configured
//! by whoever constructs the pin.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  keymenu-core (key engine, menu)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  keymenu-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ keymenu-      │       │ board code,   │
//! │ drivers (e-h) │       │ test fakes    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - One digital key line
//! - [`adc::AnalogInput`] - One analog channel behind a resistor ladder

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use adc::{AnalogInput, ADC_MAX};
pub use gpio::{InputPin, Level};
