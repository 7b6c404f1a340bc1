//! Key decoding and routing
//!
//! Turns a raw matrix scan into a logical key, then decides whether that
//! key goes to the engine or to the help screens.

use super::keymap::{KeyPosition, Keymap};
use crate::state::{CalculatorState, Key, Operator};

/// Converts matrix scans into logical keys
#[derive(Debug, Clone, Default)]
pub struct KeyDecoder {
    keymap: Keymap,
}

impl KeyDecoder {
    pub const fn new(keymap: Keymap) -> Self {
        Self { keymap }
    }

    /// Decode one scan result
    ///
    /// `None` in, or a position with no key fitted, means no key.
    pub fn decode(&self, scan: Option<KeyPosition>) -> Option<Key> {
        scan.and_then(|position| self.keymap.key_at(position))
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }
}

/// Where a decoded key should be delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// Feed the key to the calculator engine
    Engine(Key),
    /// Show the next help page
    Help,
}

/// Route a key given the engine's current state
///
/// With `divide_shares_help` set, the divide key doubles as the help key
/// while the engine is idle (operators are ignored there anyway).
pub fn route_key(key: Key, state: CalculatorState, divide_shares_help: bool) -> KeyAction {
    match key {
        Key::Help => KeyAction::Help,
        Key::Operator(Operator::Divide)
            if divide_shares_help && state == CalculatorState::Idle =>
        {
            KeyAction::Help
        }
        _ => KeyAction::Engine(key),
    }
}
