//! Line formatting and drawing

use heapless::String;
use keymenu_display::{DisplayBackend, DisplayError};

use crate::config::{ViewConfig, MAX_LINE_LEN};
use crate::menu::Menu;

/// One formatted display line
pub type Line = String<MAX_LINE_LEN>;

/// Blank prefix of unselected rows, same width as the marker
const BLANK: char = ' ';

/// Format a row: marker (or blank), then the label cut to the display width
pub fn format_row(label: &str, selected: bool, view: &ViewConfig) -> Line {
    let width = usize::from(view.cols).min(MAX_LINE_LEN);
    let mut line = Line::new();
    if width == 0 {
        return line;
    }

    let prefix = if selected { view.marker } else { BLANK };
    if line.push(prefix).is_err() {
        return line;
    }
    for ch in label.chars().take(width - 1) {
        if line.push(ch).is_err() {
            break;
        }
    }
    line
}

/// Clear the display and draw every row of the menu
pub fn render<const N: usize, D: DisplayBackend + ?Sized>(
    menu: &Menu<'_, N>,
    display: &mut D,
) -> Result<(), DisplayError> {
    if !display.is_ready() {
        return Err(DisplayError::NotInitialized);
    }

    display.clear()?;
    for row in 0..menu.view().rows {
        let line = menu.line_for_display(row);
        if !line.is_empty() {
            display.draw_text(row, 0, &line)?;
        }
    }
    display.flush()
}
