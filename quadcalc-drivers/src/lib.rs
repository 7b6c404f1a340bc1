//! Hardware driver implementations
//!
//! This crate provides concrete drivers for the calculator's peripherals,
//! generic over the `embedded-hal` 1.0 pin and delay traits:
//!
//! - 4×4 matrix keypad scanner (active-low)
//! - HD44780 character LCD on an 8-bit bus, implementing
//!   `quadcalc_display::DisplayBackend`

#![no_std]
#![deny(unsafe_code)]

pub mod keypad;
pub mod lcd;
