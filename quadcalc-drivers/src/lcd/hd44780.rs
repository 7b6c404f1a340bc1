//! HD44780 character LCD, 8-bit parallel bus
//!
//! RW is expected to be tied low; the driver never reads the busy flag
//! and relies on fixed waits after every transfer instead.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use quadcalc_display::{DisplayBackend, DisplayError};

/// Function set: 8-bit bus, two lines, 5×8 font
pub const CMD_FUNCTION_SET: u8 = 0x38;
/// Display on, cursor off, blink off
pub const CMD_DISPLAY_ON: u8 = 0x0C;
/// Entry mode: increment, no shift
pub const CMD_ENTRY_MODE: u8 = 0x06;
/// Clear display and home the cursor
pub const CMD_CLEAR: u8 = 0x01;
/// Set DDRAM address, first line
pub const CMD_LINE1: u8 = 0x80;
/// Set DDRAM address, second line
pub const CMD_LINE2: u8 = 0xC0;

/// Visible columns
pub const COLUMNS: u8 = 16;
/// Visible rows
pub const ROWS: u8 = 2;

const POWER_UP_MS: u32 = 50;
const ENABLE_PULSE_US: u32 = 1;
const COMMAND_WAIT_MS: u32 = 2;
const DATA_WAIT_MS: u32 = 1;
const CLEAR_WAIT_MS: u32 = 2;

/// HD44780 driver
///
/// All control and data lines share one pin type, which is what HALs
/// with type-erased outputs hand out.
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    data: [P; 8],
    delay: D,
    initialized: bool,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    /// Create a driver; call `init` before writing
    ///
    /// `data` is ordered D0 first.
    pub fn new(rs: P, en: P, data: [P; 8], delay: D) -> Self {
        Self {
            rs,
            en,
            data,
            delay,
            initialized: false,
        }
    }

    /// Run the power-up sequence
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.en.set_low().map_err(|_| DisplayError::Communication)?;
        self.delay.delay_ms(POWER_UP_MS);

        for cmd in [CMD_FUNCTION_SET, CMD_DISPLAY_ON, CMD_ENTRY_MODE, CMD_CLEAR] {
            self.command(cmd)?;
        }
        self.delay.delay_ms(CLEAR_WAIT_MS);

        self.initialized = true;
        Ok(())
    }

    /// Send an instruction byte
    pub fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.rs.set_low().map_err(|_| DisplayError::Communication)?;
        self.write_bus(cmd)?;
        self.delay.delay_ms(COMMAND_WAIT_MS);
        Ok(())
    }

    /// Send a character byte at the cursor
    pub fn write_byte(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.rs.set_high().map_err(|_| DisplayError::Communication)?;
        self.write_bus(byte)?;
        self.delay.delay_ms(DATA_WAIT_MS);
        Ok(())
    }

    /// Move the cursor
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        if row >= ROWS || col >= COLUMNS {
            return Err(DisplayError::InvalidCoordinates);
        }
        let base = if row == 0 { CMD_LINE1 } else { CMD_LINE2 };
        self.command(base + col)
    }

    /// Release the pins and delay
    pub fn release(self) -> (P, P, [P; 8], D) {
        (self.rs, self.en, self.data, self.delay)
    }

    fn write_bus(&mut self, byte: u8) -> Result<(), DisplayError> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            let result = if byte & (1 << bit) != 0 {
                pin.set_high()
            } else {
                pin.set_low()
            };
            result.map_err(|_| DisplayError::Communication)?;
        }

        self.en.set_high().map_err(|_| DisplayError::Communication)?;
        self.delay.delay_us(ENABLE_PULSE_US);
        self.en.set_low().map_err(|_| DisplayError::Communication)
    }
}

impl<P: OutputPin, D: DelayNs> DisplayBackend for Hd44780<P, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.command(CMD_CLEAR)?;
        self.delay.delay_ms(CLEAR_WAIT_MS);
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        let len = text.chars().count();
        if col as usize + len > COLUMNS as usize {
            return Err(DisplayError::InvalidCoordinates);
        }

        self.set_cursor(row, col)?;
        for c in text.chars() {
            // ROM A00 matches ASCII in the printable range only
            let byte = if c.is_ascii() && !c.is_ascii_control() {
                c as u8
            } else {
                b'?'
            };
            self.write_byte(byte)?;
        }
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (COLUMNS, ROWS)
    }

    fn is_ready(&self) -> bool {
        self.initialized
    }
}
