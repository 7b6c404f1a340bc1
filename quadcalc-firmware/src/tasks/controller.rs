//! Controller task
//!
//! Receives decoded keys, drives the calculator and help pages, and
//! publishes screens for the display task.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Timer};

use quadcalc_core::config::CalculatorConfig;
use quadcalc_core::Key;
use quadcalc_display::Screen;

use crate::channels::{KEY_CHANNEL, SCREEN_BUFFER, SCREEN_DRAWN, SCREEN_UPDATE};
use crate::controller::{Controller, View};

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(config: CalculatorConfig) {
    info!("Controller task started");

    let mut controller = Controller::new(&config);
    let splash = Duration::from_millis(config.display.splash_ms.into());
    let help = Duration::from_millis(config.display.help_ms.into());

    // Splash until the first key or timeout; the dismissing key is consumed
    publish(controller.splash()).await;
    if let Either::First(key) = select(KEY_CHANNEL.receive(), Timer::after(splash)).await {
        debug!("Splash dismissed by {:?}", key);
    }
    publish(controller.render(View::Calculator)).await;
    info!("Calculator ready");

    let mut pending: Option<Key> = None;
    loop {
        let key = match pending.take() {
            Some(key) => key,
            None => KEY_CHANNEL.receive().await,
        };

        let view = controller.process_key(key);
        debug!("{:?} -> {:?} ({:?})", key, controller.state(), view);
        publish(controller.render(view)).await;

        if let View::Help(_) = view {
            // A key pressed while help is up is handled right away
            if let Either::First(key) = select(KEY_CHANNEL.receive(), Timer::after(help)).await {
                pending = Some(key);
            } else {
                publish(controller.render(View::Calculator)).await;
            }
        }
    }
}

/// Hand a composed screen to the display task and wait for it to be drawn
async fn publish(screen: &mut Screen) {
    if !screen.is_dirty() {
        return;
    }

    {
        let mut buffer = SCREEN_BUFFER.lock().await;
        buffer.clone_from(screen);
    }
    screen.mark_clean();

    SCREEN_DRAWN.reset();
    SCREEN_UPDATE.signal(());
    SCREEN_DRAWN.wait().await;
}
