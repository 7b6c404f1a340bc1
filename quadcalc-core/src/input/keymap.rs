//! Keypad layout
//!
//! Maps matrix positions to logical keys. Layouts are written as one
//! string per row, one character per switch:
//!
//! ```text
//! 7 8 9 /      row0 = "789/"
//! 4 5 6 *      row1 = "456*"
//! 1 2 3 -      row2 = "123-"
//! C 0 = +      row3 = "C0=+"
//! ```
//!
//! `.` marks a position with no key fitted.

use crate::state::{Key, Operator};

/// Number of driven rows on the keypad matrix
pub const KEYPAD_ROWS: usize = 4;

/// Number of sensed columns on the keypad matrix
pub const KEYPAD_COLS: usize = 4;

/// Character used for an unpopulated matrix position
pub const EMPTY_POSITION: char = '.';

/// A single switch position in the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyPosition {
    pub row: u8,
    pub col: u8,
}

impl KeyPosition {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Errors building a keymap from layout strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeymapError {
    /// Row string does not have exactly one character per column
    RowLength { row: u8 },
    /// Character is not a known key
    UnknownKey { row: u8, col: u8 },
    /// Row index beyond the matrix
    RowOutOfRange,
}

/// Logical key for every matrix position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Keymap {
    keys: [[Option<Key>; KEYPAD_COLS]; KEYPAD_ROWS],
}

impl Default for Keymap {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keymap {
    /// Keymap with no keys assigned
    pub const fn empty() -> Self {
        Self {
            keys: [[None; KEYPAD_COLS]; KEYPAD_ROWS],
        }
    }

    /// Layout of the stock calculator keypad
    pub const fn standard() -> Self {
        const fn d(n: u8) -> Option<Key> {
            Some(Key::Digit(n))
        }
        const fn op(o: Operator) -> Option<Key> {
            Some(Key::Operator(o))
        }

        Self {
            keys: [
                [d(7), d(8), d(9), op(Operator::Divide)],
                [d(4), d(5), d(6), op(Operator::Times)],
                [d(1), d(2), d(3), op(Operator::Minus)],
                [Some(Key::Clear), d(0), Some(Key::Equals), op(Operator::Plus)],
            ],
        }
    }

    /// Build a keymap from one layout string per row
    pub fn from_rows(rows: &[&str; KEYPAD_ROWS]) -> Result<Self, KeymapError> {
        let mut keymap = Self::empty();
        for (row, text) in rows.iter().enumerate() {
            keymap.set_row(row, text)?;
        }
        Ok(keymap)
    }

    /// Replace the keys of a single row
    pub fn set_row(&mut self, row: usize, text: &str) -> Result<(), KeymapError> {
        let slots = self.keys.get_mut(row).ok_or(KeymapError::RowOutOfRange)?;
        let row_u8 = row as u8;

        if text.chars().count() != KEYPAD_COLS {
            return Err(KeymapError::RowLength { row: row_u8 });
        }

        for (col, c) in text.chars().enumerate() {
            slots[col] = if c == EMPTY_POSITION {
                None
            } else {
                let key = Key::from_char(c).ok_or(KeymapError::UnknownKey {
                    row: row_u8,
                    col: col as u8,
                })?;
                Some(key)
            };
        }
        Ok(())
    }

    /// Key at a matrix position, if one is fitted
    pub fn key_at(&self, position: KeyPosition) -> Option<Key> {
        self.keys
            .get(position.row as usize)
            .and_then(|row| row.get(position.col as usize))
            .copied()
            .flatten()
    }

    /// Find where a key sits on the matrix
    pub fn position_of(&self, key: Key) -> Option<KeyPosition> {
        self.keys.iter().enumerate().find_map(|(row, keys)| {
            keys.iter()
                .position(|k| *k == Some(key))
                .map(|col| KeyPosition::new(row as u8, col as u8))
        })
    }

    /// Check if the layout offers a dedicated help key
    pub fn has_help_key(&self) -> bool {
        self.position_of(Key::Help).is_some()
    }
}
