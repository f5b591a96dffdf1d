//! Board-agnostic core logic for keypad-driven menus
//!
//! A whole menu is authored as one string, for example
//!
//! ```text
//! -READ:000--SENSORS:000---SENSOR A1:101-SET:000--SERVO ARM:105
//! ```
//!
//! where the dash run gives the nesting level, the text up to `:` is the
//! label and the three digits are the action code (`000` for submenus).
//!
//! This crate contains everything that does not depend on hardware:
//!
//! - Menu compiler (string to flat node arena)
//! - Tree queries (parent, siblings, rank)
//! - Key engine (digital debounce, analog ladder, host key codes,
//!   auto-repeat, press/release tracking)
//! - Navigation state machine and the `Menu` facade
//! - Row selection for character displays
//! - `MenuController`, the per-tick polling loop over a key source and a
//!   display backend

#![no_std]
#![deny(unsafe_code)]

mod log;

pub mod config;
pub mod controller;
pub mod input;
pub mod menu;
pub mod nav;
pub mod tree;
pub mod view;

pub use controller::{MenuController, MenuError};
pub use input::{Key, KeySource};
pub use menu::Menu;
pub use nav::Outcome;
pub use tree::{CompileError, MenuTree, NodeId, TreeError};
