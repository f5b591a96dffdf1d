//! Screen buffer types
//!
//! Provides a character-grid buffer for text-mode displays.

use crate::backend::{DisplayBackend, DisplayError};

/// Classic 16x2 character LCD
pub type Lcd16x2 = Screen<16, 2>;

/// 20x4 character LCD
pub type Lcd20x4 = Screen<20, 4>;

/// Cell content after a clear
const BLANK: u8 = b' ';

/// Substituted for characters a character LCD cannot show
const UNPRINTABLE: u8 = b'?';

/// Character-grid buffer of `COLS` x `ROWS` cells
///
/// Cells hold printable ASCII. Writes past the right edge are clipped,
/// writes to a row or column outside the grid fail with
/// [`DisplayError::InvalidCoordinates`].
#[derive(Clone)]
pub struct Screen<const COLS: usize, const ROWS: usize> {
    /// Current display content
    cells: [[u8; COLS]; ROWS],
    /// Whether the screen needs to be redrawn
    dirty: bool,
    /// Number of `clear` calls since creation
    clears: u32,
}

impl<const COLS: usize, const ROWS: usize> Default for Screen<COLS, ROWS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const COLS: usize, const ROWS: usize> Screen<COLS, ROWS> {
    /// Create a new blank screen
    pub const fn new() -> Self {
        Self {
            cells: [[BLANK; COLS]; ROWS],
            dirty: true,
            clears: 0,
        }
    }

    /// Get the content of a specific row, full width
    pub fn line(&self, row: usize) -> Option<&str> {
        // Cells only ever hold ASCII
        self.cells
            .get(row)
            .and_then(|cells| core::str::from_utf8(cells).ok())
    }

    /// Get the content of a specific row without trailing blanks
    pub fn trimmed_line(&self, row: usize) -> Option<&str> {
        self.line(row).map(str::trim_end)
    }

    /// Get all lines as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        (0..ROWS).filter_map(move |row| self.line(row))
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after copying it to hardware)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Number of times the screen was cleared
    pub fn clear_count(&self) -> u32 {
        self.clears
    }

    /// Get number of rows
    pub const fn rows(&self) -> usize {
        ROWS
    }

    /// Get number of columns
    pub const fn cols(&self) -> usize {
        COLS
    }
}

impl<const COLS: usize, const ROWS: usize> DisplayBackend for Screen<COLS, ROWS> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for row in &mut self.cells {
            row.fill(BLANK);
        }
        self.clears = self.clears.wrapping_add(1);
        self.dirty = true;
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        let row = row as usize;
        let col = col as usize;
        if row >= ROWS || col >= COLS {
            return Err(DisplayError::InvalidCoordinates);
        }

        let cells = &mut self.cells[row][col..];
        for (cell, ch) in cells.iter_mut().zip(text.chars()) {
            *cell = if ch.is_ascii() && !ch.is_ascii_control() {
                ch as u8
            } else {
                UNPRINTABLE
            };
        }
        self.dirty = true;
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (COLS.min(u8::MAX as usize) as u8, ROWS.min(u8::MAX as usize) as u8)
    }
}

#[cfg(feature = "defmt")]
impl<const COLS: usize, const ROWS: usize> defmt::Format for Screen<COLS, ROWS> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line);
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_screen_is_blank() {
        let screen = Lcd16x2::new();
        assert_eq!(screen.line(0), Some("                "));
        assert_eq!(screen.trimmed_line(1), Some(""));
        assert_eq!(screen.line(2), None);
        assert_eq!(screen.dimensions(), (16, 2));
    }

    #[test]
    fn test_draw_text_clips_at_right_edge() {
        let mut screen = Screen::<8, 1>::new();
        screen.draw_text(0, 3, "ABCDEFGH").unwrap();
        assert_eq!(screen.line(0), Some("   ABCDE"));
    }

    #[test]
    fn test_draw_text_rejects_bad_coordinates() {
        let mut screen = Lcd16x2::new();
        assert_eq!(
            screen.draw_text(2, 0, "X"),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(
            screen.draw_text(0, 16, "X"),
            Err(DisplayError::InvalidCoordinates)
        );
    }

    #[test]
    fn test_unprintable_characters_are_substituted() {
        let mut screen = Screen::<4, 1>::new();
        screen.draw_text(0, 0, "a\u{e9}\tb").unwrap();
        assert_eq!(screen.line(0), Some("a??b"));
    }

    #[test]
    fn test_clear_and_dirty_tracking() {
        let mut screen = Lcd20x4::new();
        screen.draw_text(3, 0, "MOVE").unwrap();
        screen.mark_clean();
        assert!(!screen.is_dirty());

        screen.clear().unwrap();
        assert!(screen.is_dirty());
        assert_eq!(screen.clear_count(), 1);
        assert!(screen.lines().all(|line| line.trim_end().is_empty()));
    }
}
