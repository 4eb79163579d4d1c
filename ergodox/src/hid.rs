//! HID report types, and the trait through which reports leave the keyboard.

use core::future::Future;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Sender;
use usbd_hid::descriptor::generator_prelude::*;
use usbd_hid::descriptor::{MediaKey, MediaKeyboardReport, MouseReport, SystemControlKey, SystemControlReport};

use crate::types::keycode::KeyCode;

/// KeyboardReport describes a report and its companion descriptor that can be
/// used to send keyboard button presses to a host and receive the status of the
/// keyboard LEDs.
#[gen_hid_descriptor(
    (collection = APPLICATION, usage_page = GENERIC_DESKTOP, usage = KEYBOARD) = {
        (usage_page = KEYBOARD, usage_min = 0xE0, usage_max = 0xE7) = {
            #[packed_bits = 8] #[item_settings(data,variable,absolute)] modifier=input;
        };
        (logical_min = 0,) = {
            #[item_settings(constant,variable,absolute)] reserved=input;
        };
        (usage_page = LEDS, usage_min = 0x01, usage_max = 0x05) = {
            #[packed_bits = 5] #[item_settings(data,variable,absolute)] leds=output;
        };
        (usage_page = KEYBOARD, usage_min = 0x00, usage_max = 0xDD) = {
            #[item_settings(data,array,absolute)] keycodes=input;
        };
    }
)]
#[allow(dead_code)]
#[derive(Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    pub modifier: u8, // HidModifiers
    pub reserved: u8,
    pub leds: u8,
    pub keycodes: [u8; 6],
}

/// All reports the keyboard produces
pub enum Report {
    /// Normal keyboard hid report
    KeyboardReport(KeyboardReport),
    /// Mouse hid report
    MouseReport(MouseReport),
    /// Media keyboard report
    MediaKeyboardReport(MediaKeyboardReport),
    /// System control report
    SystemControlReport(SystemControlReport),
}

#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidError {
    /// The host side isn't connected
    Disconnected,
}

/// HidReporter is used for reporting HID messages to the host, via USB, BLE, or a channel.
pub trait HidReporter {
    /// Write report to the host
    fn write_report(&mut self, report: Report) -> impl Future<Output = Result<(), HidError>>;
}

/// Reports can be forwarded to a channel, the reporter task on the other side writes them to the host.
impl<M: RawMutex, const N: usize> HidReporter for Sender<'_, M, Report, N> {
    async fn write_report(&mut self, report: Report) -> Result<(), HidError> {
        self.send(report).await;
        Ok(())
    }
}

/// Convert a consumer keycode to usb hid media key
pub(crate) fn as_consumer_control_usage_id(keycode: KeyCode) -> MediaKey {
    match keycode {
        KeyCode::AudioMute => MediaKey::Mute,
        KeyCode::AudioVolUp => MediaKey::VolumeIncrement,
        KeyCode::AudioVolDown => MediaKey::VolumeDecrement,
        KeyCode::MediaNextTrack => MediaKey::NextTrack,
        KeyCode::MediaPrevTrack => MediaKey::PrevTrack,
        KeyCode::MediaStop => MediaKey::Stop,
        KeyCode::MediaPlayPause => MediaKey::PlayPause,
        KeyCode::MediaSelect => MediaKey::Record,
        _ => MediaKey::Zero,
    }
}

/// Convert a system keycode to usb hid system control key
pub(crate) fn as_system_control_usage_id(keycode: KeyCode) -> Option<SystemControlKey> {
    match keycode {
        KeyCode::SystemPower => Some(SystemControlKey::PowerDown),
        KeyCode::SystemSleep => Some(SystemControlKey::Sleep),
        KeyCode::SystemWake => Some(SystemControlKey::WakeUp),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_media_usage_ids() {
        assert_eq!(as_consumer_control_usage_id(KeyCode::MediaPlayPause) as u16, 0xCD);
        assert_eq!(as_consumer_control_usage_id(KeyCode::MediaNextTrack) as u16, 0xB5);
        assert_eq!(as_consumer_control_usage_id(KeyCode::MediaPrevTrack) as u16, 0xB6);
        assert_eq!(as_consumer_control_usage_id(KeyCode::A) as u16, 0);
    }

    #[test]
    fn test_system_usage_ids() {
        assert!(as_system_control_usage_id(KeyCode::SystemSleep).is_some());
        assert!(as_system_control_usage_id(KeyCode::AudioMute).is_none());
    }
}
