//! Display abstraction and shared renderer for QuadCalc
//!
//! This crate provides:
//! - `DisplayBackend` trait for character displays (HD44780 and friends)
//! - `Screen`, a 2×16 text buffer with dirty tracking
//! - `Renderer`, which fits engine display models, help pages and the
//!   splash screen onto a `Screen`
//! - `HelpCycle`, the help page counter
//!
//! # Architecture
//!
//! The engine produces a `DisplayModel` whose lines may be longer than the
//! glass. The renderer copies those lines into a `Screen`, truncating to
//! the display width, and the screen is then pushed to whatever backend
//! the board provides. None of this code makes decisions about
//! calculator state.

#![no_std]

pub mod backend;
pub mod help;
pub mod renderer;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use help::{HelpCycle, HelpPage};
pub use renderer::Renderer;
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
