//! State machine for expression entry
//!
//! The engine is explicit, finite, and deterministic: every key either
//! moves it to one of five named states or is ignored.

pub mod events;
pub mod machine;

pub use events::{Key, Operator};
pub use machine::{CalculatorState, ErrorKind};
