//! Menu view for character displays
//!
//! Shows the siblings of the cursor, one per row, with the selected row
//! marked.

pub mod renderer;
pub mod rows;

pub use renderer::{format_row, render, Line};
pub use rows::{row_slot, window_offset, RowSlot};
