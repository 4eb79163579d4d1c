//! Exposed channels which can be used to share data across devices & processors

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::event::KeyEvent;
use crate::hid::Report;

pub const EVENT_CHANNEL_SIZE: usize = 16;
pub const REPORT_CHANNEL_SIZE: usize = 16;

/// Channel for key events, the matrix scanner sends to it and [`Keyboard::run`](crate::keyboard::Keyboard::run) receives from it.
pub static KEY_EVENT_CHANNEL: Channel<CriticalSectionRawMutex, KeyEvent, EVENT_CHANNEL_SIZE> = Channel::new();
/// Channel for reports, receive from it to forward reports to the USB writer
pub static KEYBOARD_REPORT_CHANNEL: Channel<CriticalSectionRawMutex, Report, REPORT_CHANNEL_SIZE> = Channel::new();
