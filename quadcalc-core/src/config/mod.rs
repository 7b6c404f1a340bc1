//! Configuration types
//!
//! Board-agnostic configuration structures and the embedded TOML parser.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ConfigError};
pub use types::*;
