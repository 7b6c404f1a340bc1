//! Matrix keypad scanner
//!
//! Rows are outputs idling high, columns are inputs with pull-ups. A
//! pressed switch pulls its column low while its row is driven low.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use quadcalc_core::input::KeyPosition;

use super::KeypadError;

/// Row-driven matrix keypad
pub struct MatrixKeypad<R, C, const ROWS: usize, const COLS: usize> {
    rows: [R; ROWS],
    cols: [C; COLS],
    /// Wait between driving a row and sampling the columns
    settle_us: u32,
}

impl<R, C, const ROWS: usize, const COLS: usize> MatrixKeypad<R, C, ROWS, COLS>
where
    R: OutputPin,
    C: InputPin,
{
    /// Create a scanner and release every row
    pub fn new(rows: [R; ROWS], cols: [C; COLS], settle_us: u32) -> Result<Self, KeypadError> {
        let mut keypad = Self {
            rows,
            cols,
            settle_us,
        };
        keypad.release_all()?;
        Ok(keypad)
    }

    /// Scan the matrix once
    ///
    /// Rows are scanned top to bottom and columns left to right; the
    /// first closed switch wins. All rows are released afterwards, even
    /// when a pin fails part-way.
    pub fn scan<D: DelayNs>(&mut self, delay: &mut D) -> Result<Option<KeyPosition>, KeypadError> {
        let found = self.scan_rows(delay);
        let released = self.release_all();
        let found = found?;
        released?;
        Ok(found)
    }

    fn scan_rows<D: DelayNs>(&mut self, delay: &mut D) -> Result<Option<KeyPosition>, KeypadError> {
        for row in 0..ROWS {
            self.rows[row].set_low().map_err(|_| KeypadError::Pin)?;
            delay.delay_us(self.settle_us);

            for (col, pin) in self.cols.iter_mut().enumerate() {
                if pin.is_low().map_err(|_| KeypadError::Pin)? {
                    return Ok(Some(KeyPosition::new(row as u8, col as u8)));
                }
            }

            self.rows[row].set_high().map_err(|_| KeypadError::Pin)?;
        }
        Ok(None)
    }

    fn release_all(&mut self) -> Result<(), KeypadError> {
        for pin in &mut self.rows {
            pin.set_high().map_err(|_| KeypadError::Pin)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use core::convert::Infallible;
    use embedded_hal::digital::{Error, ErrorKind, ErrorType};

    /// Switch matrix shared by the mock pins
    struct Matrix {
        /// Row output levels, true = high
        rows: [bool; 4],
        /// Closed switches
        pressed: [[bool; 4]; 4],
        /// Row driven low during the scan, in order
        driven: heapless::Vec<usize, 16>,
        fail_col: bool,
    }

    impl Matrix {
        fn new() -> Self {
            Self {
                rows: [false; 4],
                pressed: [[false; 4]; 4],
                driven: heapless::Vec::new(),
                fail_col: false,
            }
        }
    }

    #[derive(Debug)]
    struct PinFault;

    impl Error for PinFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct RowPin<'a> {
        index: usize,
        matrix: &'a RefCell<Matrix>,
    }

    impl ErrorType for RowPin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for RowPin<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            let mut m = self.matrix.borrow_mut();
            m.rows[self.index] = false;
            let _ = m.driven.push(self.index);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.matrix.borrow_mut().rows[self.index] = true;
            Ok(())
        }
    }

    struct ColPin<'a> {
        index: usize,
        matrix: &'a RefCell<Matrix>,
    }

    impl ErrorType for ColPin<'_> {
        type Error = PinFault;
    }

    impl InputPin for ColPin<'_> {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.is_low().map(|low| !low)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            let m = self.matrix.borrow();
            if m.fail_col {
                return Err(PinFault);
            }
            Ok((0..4).any(|row| !m.rows[row] && m.pressed[row][self.index]))
        }
    }

    /// Delay that only accumulates the requested time
    struct CountingDelay {
        total_ns: u64,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    fn keypad(matrix: &RefCell<Matrix>) -> MatrixKeypad<RowPin<'_>, ColPin<'_>, 4, 4> {
        let rows = core::array::from_fn(|index| RowPin { index, matrix });
        let cols = core::array::from_fn(|index| ColPin { index, matrix });
        MatrixKeypad::new(rows, cols, 10).unwrap()
    }

    #[test]
    fn test_new_releases_rows() {
        let matrix = RefCell::new(Matrix::new());
        let _keypad = keypad(&matrix);
        assert_eq!(matrix.borrow().rows, [true; 4]);
    }

    #[test]
    fn test_no_key() {
        let matrix = RefCell::new(Matrix::new());
        let mut keypad = keypad(&matrix);
        let mut delay = CountingDelay { total_ns: 0 };

        assert_eq!(keypad.scan(&mut delay), Ok(None));
        // Every row driven once, each followed by the settle wait
        assert_eq!(matrix.borrow().driven.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(delay.total_ns, 4 * 10_000);
        assert_eq!(matrix.borrow().rows, [true; 4]);
    }

    #[test]
    fn test_single_key() {
        let matrix = RefCell::new(Matrix::new());
        matrix.borrow_mut().pressed[2][1] = true;
        let mut keypad = keypad(&matrix);
        let mut delay = CountingDelay { total_ns: 0 };

        assert_eq!(keypad.scan(&mut delay), Ok(Some(KeyPosition::new(2, 1))));
        // Scan stops at the row with the closed switch
        assert_eq!(matrix.borrow().driven.as_slice(), &[0, 1, 2]);
        assert_eq!(matrix.borrow().rows, [true; 4]);
    }

    #[test]
    fn test_first_key_wins() {
        let matrix = RefCell::new(Matrix::new());
        {
            let mut m = matrix.borrow_mut();
            m.pressed[3][0] = true;
            m.pressed[1][3] = true;
            m.pressed[1][2] = true;
        }
        let mut keypad = keypad(&matrix);
        let mut delay = CountingDelay { total_ns: 0 };

        assert_eq!(keypad.scan(&mut delay), Ok(Some(KeyPosition::new(1, 2))));
    }

    #[test]
    fn test_pin_error_releases_rows() {
        let matrix = RefCell::new(Matrix::new());
        let mut keypad = keypad(&matrix);
        matrix.borrow_mut().fail_col = true;
        let mut delay = CountingDelay { total_ns: 0 };

        assert_eq!(keypad.scan(&mut delay), Err(KeypadError::Pin));
        assert_eq!(matrix.borrow().rows, [true; 4]);
    }
}
