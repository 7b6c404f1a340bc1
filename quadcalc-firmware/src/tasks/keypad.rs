//! Keypad scan task
//!
//! Scans the matrix, decodes presses through the configured keymap and
//! forwards keys to the controller.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Delay, Duration, Timer};

use quadcalc_core::config::KeypadConfig;
use quadcalc_core::input::{KeyDecoder, KEYPAD_COLS, KEYPAD_ROWS};
use quadcalc_drivers::keypad::MatrixKeypad;

use crate::channels::KEY_CHANNEL;

/// The board's keypad
pub type Keypad = MatrixKeypad<Output<'static>, Input<'static>, KEYPAD_ROWS, KEYPAD_COLS>;

/// Keypad task - one logical key per recognized press
#[embassy_executor::task]
pub async fn keypad_task(mut keypad: Keypad, config: KeypadConfig) {
    info!("Keypad task started");

    let decoder = KeyDecoder::new(config.layout);
    let scan_interval = Duration::from_millis(config.scan_interval_ms.into());
    let debounce = Duration::from_millis(config.debounce_ms.into());
    let mut delay = Delay;

    loop {
        match keypad.scan(&mut delay) {
            Ok(scan) => {
                if let Some(key) = decoder.decode(scan) {
                    debug!("Key: {:?}", key);
                    KEY_CHANNEL.send(key).await;
                    Timer::after(debounce).await;
                    continue;
                }
            }
            Err(e) => warn!("Keypad scan failed: {:?}", e),
        }

        Timer::after(scan_interval).await;
    }
}
