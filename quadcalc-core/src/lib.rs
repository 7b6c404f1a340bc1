//! Board-agnostic core logic for the calculator firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Key alphabet and keypad decoding (keymap lookup)
//! - State machine for operand entry and chaining
//! - Checked 16-bit arithmetic
//! - Display model derivation
//! - Configuration types and the embedded config parser

#![no_std]
#![deny(unsafe_code)]

pub mod arith;
pub mod config;
pub mod engine;
pub mod input;
pub mod model;
pub mod state;

pub use engine::{CalculatorEngine, EngineSnapshot};
pub use model::DisplayModel;
pub use state::{CalculatorState, ErrorKind, Key, Operator};
