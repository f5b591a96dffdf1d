//! Row selection
//!
//! While the cursor's rank fits on screen, row 0 shows the eldest
//! sibling. Past that the window scrolls so the cursor sits on the last
//! row.

/// What a display row shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RowSlot {
    /// 1-based rank of the sibling shown
    pub rank: usize,
    /// Whether it is the cursor
    pub selected: bool,
}

/// Number of siblings scrolled off the top
pub fn window_offset(cursor_rank: usize, rows: usize) -> usize {
    cursor_rank.saturating_sub(rows)
}

/// Sibling shown on `row`, or `None` for an empty row
///
/// - `cursor_rank`: 1-based rank of the cursor among its siblings
/// - `count`: number of siblings
/// - `rows`: rows on the display
pub fn row_slot(cursor_rank: usize, count: usize, rows: usize, row: usize) -> Option<RowSlot> {
    if row >= rows {
        return None;
    }
    let rank = row + 1 + window_offset(cursor_rank, rows);
    if rank > count {
        return None;
    }
    Some(RowSlot {
        rank,
        selected: rank == cursor_rank,
    })
}
