pub mod common;

use embassy_futures::block_on;
use ergodox::config::BehaviorConfig;
use ergodox::hid::Report;
use ergodox::types::keycode::KeyCode;

use crate::common::*;

#[test]
fn test_bootloader_key_clears_and_returns_on_host() {
    block_on(async {
        let mut keyboard = create_test_keyboard();
        keyboard.process_key_event(press(LAYER_1_SET)).await;
        keyboard.process_key_event(release(LAYER_1_SET)).await;
        keyboard.process_key_event(press(LSHIFT)).await;
        keyboard.process_key_event(press(Q)).await;
        let before = keyboard.reporter().reports.len();

        keyboard.process_key_event(press(BOOTLOADER)).await;
        assert!(keyboard.hid_state().mods().is_empty());
        assert!(!keyboard.hid_state().has_key(KeyCode::Q));
        assert_eq!(keyboard.delay().delays_ms, vec![50]);
        // Layers are kept
        assert_eq!(keyboard.layer_state().bits(), 0b10);

        // All reports are cleared
        let reports = &keyboard.reporter().reports[before..];
        assert_eq!(reports.len(), 4);
        assert_eq!(keyboard_reports(reports), vec![kb_report(0, &[])]);
        assert!(reports.iter().any(|r| matches!(r, Report::MouseReport(m) if m.buttons == 0)));
        assert!(reports.iter().any(|r| matches!(r, Report::SystemControlReport(s) if s.usage_id == 0)));
        assert!(reports.iter().any(|r| matches!(r, Report::MediaKeyboardReport(m) if m.usage_id == 0)));

        // Release doesn't do anything
        keyboard.process_key_event(release(BOOTLOADER)).await;
        assert_eq!(keyboard.reporter().reports.len(), before + 4);

        // Keyboard keeps running
        keyboard.process_key_event(press(KC1)).await;
        assert_eq!(
            keyboard.reporter().keyboard_reports().last(),
            Some(&kb_report(0, &[KeyCode::F1 as u8]))
        );
    });
}

#[test]
fn test_bootloader_key_is_gui_on_layer_0() {
    block_on(async {
        let mut keyboard = create_test_keyboard();
        keyboard.process_key_event(press(BOOTLOADER)).await;
        assert_eq!(keyboard.reporter().keyboard_reports(), vec![kb_report(1 << 3, &[])]);
        assert!(keyboard.delay().delays_ms.is_empty());
    });
}

#[test]
fn test_bootloader_delay_from_config() {
    block_on(async {
        let config = BehaviorConfig {
            bootloader_delay_ms: 100,
            ..Default::default()
        };
        let mut keyboard = create_test_keyboard_with_config(config);
        keyboard.process_key_event(press(LAYER_1_SET)).await;
        keyboard.process_key_event(press(BOOTLOADER)).await;
        assert_eq!(keyboard.delay().delays_ms, vec![100]);
    });
}
