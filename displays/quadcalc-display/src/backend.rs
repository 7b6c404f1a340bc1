//! Display backend trait
//!
//! Defines the interface for character display hardware.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus or pin error while talking to the display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for character displays.
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at the specified row and column
    ///
    /// - `row`: Row number (0-based)
    /// - `col`: Column number in characters (0-based)
    /// - `text`: Text to display
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    ///
    /// Displays that write straight through can leave this as a no-op.
    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}
