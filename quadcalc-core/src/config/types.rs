//! Configuration type definitions
//!
//! These types represent the calculator configuration. The firmware
//! embeds a TOML file at compile time and parses it into these structures
//! at boot.

use crate::input::Keymap;

/// Keypad wiring and timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeypadConfig {
    /// Logical key for each matrix position
    pub layout: Keymap,
    /// Delay between idle scans (ms)
    pub scan_interval_ms: u16,
    /// Lockout after a recognized press (ms)
    ///
    /// Guarantees one logical key per physical press.
    pub debounce_ms: u16,
    /// Settling time between driving a row and reading columns (µs)
    pub settle_us: u16,
    /// Divide key opens help while the calculator is idle
    pub divide_opens_help: bool,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            layout: Keymap::standard(),
            scan_interval_ms: 10,
            debounce_ms: 250,
            settle_us: 10,
            divide_opens_help: true,
        }
    }
}

/// Display timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// How long the splash screen stays up without a key press (ms)
    pub splash_ms: u16,
    /// How long each help page is shown (ms)
    pub help_ms: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            splash_ms: 2000,
            help_ms: 2000,
        }
    }
}

/// Complete calculator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalculatorConfig {
    /// Keypad settings
    pub keypad: KeypadConfig,
    /// Display settings
    pub display: DisplayConfig,
}

impl CalculatorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether help can be reached from the keypad at all
    pub fn help_reachable(&self) -> bool {
        self.keypad.layout.has_help_key() || self.keypad.divide_opens_help
    }
}
