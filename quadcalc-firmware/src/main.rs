//! QuadCalc - Four-Function Calculator Firmware
//!
//! Main firmware binary for RP2040-based boards with a 4×4 matrix keypad
//! and a 2×16 HD44780 character LCD.
//!
//! Pin assignments:
//! - Keypad rows: GPIO2-5 (outputs, idle high)
//! - Keypad columns: GPIO6-9 (inputs, pull-up)
//! - LCD RS: GPIO10, RW: GPIO11 (held low), EN: GPIO12
//! - LCD D0-D7: GPIO13-20

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use quadcalc_core::config::{parse_config, CalculatorConfig};
use quadcalc_drivers::keypad::MatrixKeypad;
use quadcalc_drivers::lcd::Hd44780;

mod channels;
mod controller;
mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit calculator.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../calculator.toml");

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("QuadCalc firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    if !config.help_reachable() {
        warn!("No help key mapped and divide_opens_help is off, help is unreachable");
    }

    // Keypad matrix: rows idle high, columns pulled up
    let rows = [
        Output::new(p.PIN_2, Level::High),
        Output::new(p.PIN_3, Level::High),
        Output::new(p.PIN_4, Level::High),
        Output::new(p.PIN_5, Level::High),
    ];
    let cols = [
        Input::new(p.PIN_6, Pull::Up),
        Input::new(p.PIN_7, Pull::Up),
        Input::new(p.PIN_8, Pull::Up),
        Input::new(p.PIN_9, Pull::Up),
    ];
    let keypad = match MatrixKeypad::new(rows, cols, config.keypad.settle_us.into()) {
        Ok(keypad) => keypad,
        Err(e) => {
            // RP2040 GPIO is infallible; nothing sensible to continue with
            defmt::panic!("Keypad setup failed: {:?}", e);
        }
    };
    info!("Keypad initialized");

    // LCD on an 8-bit bus, RW tied low through GPIO11
    let rs = Output::new(p.PIN_10, Level::Low);
    let rw = Output::new(p.PIN_11, Level::Low);
    let en = Output::new(p.PIN_12, Level::Low);
    let data = [
        Output::new(p.PIN_13, Level::Low),
        Output::new(p.PIN_14, Level::Low),
        Output::new(p.PIN_15, Level::Low),
        Output::new(p.PIN_16, Level::Low),
        Output::new(p.PIN_17, Level::Low),
        Output::new(p.PIN_18, Level::Low),
        Output::new(p.PIN_19, Level::Low),
        Output::new(p.PIN_20, Level::Low),
    ];
    let lcd = Hd44780::new(rs, en, data, Delay);
    info!("LCD pins initialized");

    // Spawn tasks
    spawner.spawn(tasks::display_task(lcd, rw)).unwrap();
    spawner.spawn(tasks::controller_task(config)).unwrap();
    spawner
        .spawn(tasks::keypad_task(keypad, config.keypad))
        .unwrap();

    info!("All tasks spawned, firmware running");
}

/// Parse the embedded configuration
///
/// Falls back to built-in defaults if the embedded TOML is rejected.
fn load_config() -> CalculatorConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            // build.rs validates calculator.toml, so this means the two
            // parsers disagree
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using default configuration");
            CalculatorConfig::default()
        }
    }
}
