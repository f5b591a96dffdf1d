//! Navigation state machine
//!
//! The cursor is the only state. Each key maps to a sibling move, an
//! ascent, a descent or an action handed back to the application.

pub mod machine;

pub use machine::{transition, Outcome, Transition};
