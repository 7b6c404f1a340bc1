//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod controller;
pub mod display;
pub mod keypad;

pub use controller::controller_task;
pub use display::{display_task, Lcd};
pub use keypad::{keypad_task, Keypad};
