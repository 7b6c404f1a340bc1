//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use quadcalc_core::Key;
use quadcalc_display::Screen;

/// Channel capacity for decoded key presses
const KEY_CHANNEL_SIZE: usize = 4;

/// Decoded key presses from the keypad task
pub static KEY_CHANNEL: Channel<CriticalSectionRawMutex, Key, KEY_CHANNEL_SIZE> = Channel::new();

/// Shared screen buffer protected by mutex
pub static SCREEN_BUFFER: Mutex<CriticalSectionRawMutex, Screen> = Mutex::new(Screen::new());

/// Signal that the screen buffer holds new content
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Signal that the display task finished writing the buffer out
pub static SCREEN_DRAWN: Signal<CriticalSectionRawMutex, ()> = Signal::new();
