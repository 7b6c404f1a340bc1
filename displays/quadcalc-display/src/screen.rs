//! Screen buffer types
//!
//! Provides a character-based screen buffer for the 2×16 text display.

use heapless::String;

use crate::backend::{DisplayBackend, DisplayError};

/// Number of character rows on the display
pub const SCREEN_ROWS: usize = 2;

/// Number of character columns on the display
pub const SCREEN_COLS: usize = 16;

/// Maximum characters per line
pub const LINE_LEN: usize = SCREEN_COLS;

/// Screen buffer for text-mode displays
///
/// Holds what should be on the glass and can be rendered to any
/// `DisplayBackend` implementation. Text longer than the display is
/// truncated on write.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Screen {
    /// Current display content
    lines: [String<LINE_LEN>; SCREEN_ROWS],
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub const fn new() -> Self {
        Self {
            lines: [String::new(), String::new()],
            dirty: true,
        }
    }

    /// Clear the entire screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.dirty = true;
    }

    /// Set the content of a specific row
    ///
    /// Only marks the screen dirty when the content actually changes.
    pub fn set_line(&mut self, row: usize, text: &str) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };

        let mut fitted: String<LINE_LEN> = String::new();
        for c in text.chars() {
            // Full line
            if fitted.push(c).is_err() {
                break;
            }
        }

        if *line != fitted {
            *line = fitted;
            self.dirty = true;
        }
    }

    /// Set both rows at once
    pub fn set_lines(&mut self, top: &str, bottom: &str) {
        self.set_line(0, top);
        self.set_line(1, bottom);
    }

    /// Get the content of a specific row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Mark screen as dirty (needs redraw)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Get all lines as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }

    /// Get number of rows
    pub const fn rows(&self) -> usize {
        SCREEN_ROWS
    }

    /// Get number of columns
    pub const fn cols(&self) -> usize {
        SCREEN_COLS
    }

    /// Write the buffer out to a display backend
    ///
    /// Every row is padded with spaces to the full width so stale
    /// characters from a longer previous line are overwritten. The screen
    /// is marked clean only after the backend flushed successfully.
    pub fn render_to<B: DisplayBackend>(&mut self, backend: &mut B) -> Result<(), DisplayError> {
        if !backend.is_ready() {
            return Err(DisplayError::NotInitialized);
        }

        let (cols, rows) = backend.dimensions();
        if (cols as usize) < SCREEN_COLS || (rows as usize) < SCREEN_ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }

        for (row, line) in self.lines.iter().enumerate() {
            let mut padded: String<LINE_LEN> = String::new();
            // Both pushes are bounded by LINE_LEN
            let _ = padded.push_str(line);
            while padded.push(' ').is_ok() {}
            backend.draw_text(row as u8, 0, &padded)?;
        }

        backend.flush()?;
        self.dirty = false;
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}
