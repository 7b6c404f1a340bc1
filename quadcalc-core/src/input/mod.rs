//! Keypad input
//!
//! Decouples the arithmetic key alphabet from the physical row/column
//! wiring of the keypad.

pub mod decoder;
pub mod keymap;

pub use decoder::{route_key, KeyAction, KeyDecoder};
pub use keymap::{KeyPosition, Keymap, KeymapError, KEYPAD_COLS, KEYPAD_ROWS};
