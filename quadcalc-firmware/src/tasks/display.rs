//! Display task
//!
//! Writes the shared screen buffer to the LCD whenever the controller
//! publishes new content.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Delay;

use quadcalc_display::DisplayBackend;
use quadcalc_drivers::lcd::Hd44780;

use crate::channels::{SCREEN_BUFFER, SCREEN_DRAWN, SCREEN_UPDATE};

/// The board's LCD
pub type Lcd = Hd44780<Output<'static>, Delay>;

/// Display task - owns the LCD
///
/// `_rw` is held so the pin keeps driving RW low for the lifetime of the
/// firmware.
#[embassy_executor::task]
pub async fn display_task(mut lcd: Lcd, _rw: Output<'static>) {
    info!("Display task started");

    if let Err(e) = lcd.init() {
        error!("LCD init failed: {:?}", e);
    }

    loop {
        SCREEN_UPDATE.wait().await;

        {
            let mut screen = SCREEN_BUFFER.lock().await;
            if screen.is_dirty() {
                match screen.render_to(&mut lcd) {
                    Ok(()) => trace!("Screen drawn"),
                    Err(e) => warn!("Failed to draw screen: {:?}", e),
                }
            }
        }

        // Release the controller even if the LCD failed
        SCREEN_DRAWN.signal(());

        if !lcd.is_ready() {
            // Retry the power-up sequence before the next frame
            if let Err(e) = lcd.init() {
                error!("LCD init failed: {:?}", e);
            }
        }
    }
}
