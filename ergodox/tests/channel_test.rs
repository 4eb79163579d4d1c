pub mod common;

use embassy_futures::block_on;
use embassy_futures::select::{Either, select};
use embassy_futures::yield_now;
use embassy_time::{Duration, MockDriver};
use ergodox::channel::{KEY_EVENT_CHANNEL, KEYBOARD_REPORT_CHANNEL};
use ergodox::config::BehaviorConfig;
use ergodox::fn_resolver;
use ergodox::hid::{KeyboardReport, Report};
use ergodox::keyboard::Keyboard;
use ergodox::layout::KEYMAP;
use ergodox::types::keycode::KeyCode;
use rusty_fork::rusty_fork_test;

use crate::common::*;

async fn receive_keyboard_reports(n: usize) -> Vec<KeyboardReport> {
    let mut reports = Vec::new();
    while reports.len() < n {
        if let Report::KeyboardReport(r) = KEYBOARD_REPORT_CHANNEL.receive().await {
            reports.push(r);
        }
    }
    reports
}

rusty_fork_test! {
#[test]
fn test_run_from_event_channel() {
    block_on(async {
        KEY_EVENT_CHANNEL.clear();
        KEYBOARD_REPORT_CHANNEL.clear();

        let mut keyboard = Keyboard::new(
            &KEYMAP,
            fn_resolver(),
            KEYBOARD_REPORT_CHANNEL.sender(),
            RecordingDelay::default(),
            BehaviorConfig::default(),
        );

        for event in [press(LAYER_1_HOLD), press(KC1), release(KC1), release(LAYER_1_HOLD), press(KC1)] {
            KEY_EVENT_CHANNEL.send(event).await;
        }

        match select(keyboard.run(), receive_keyboard_reports(3)).await {
            Either::First(_) => panic!("Keyboard stopped"),
            Either::Second(reports) => assert_eq!(
                reports,
                vec![
                    kb_report(0, &[KeyCode::F1 as u8]),
                    kb_report(0, &[]),
                    kb_report(0, &[KeyCode::Kc1 as u8]),
                ]
            ),
        }
    });
}
}

rusty_fork_test! {
#[test]
fn test_macro_through_channels() {
    block_on(async {
        KEY_EVENT_CHANNEL.clear();
        KEYBOARD_REPORT_CHANNEL.clear();

        let mut keyboard = Keyboard::new(
            &KEYMAP,
            fn_resolver(),
            KEYBOARD_REPORT_CHANNEL.sender(),
            RecordingDelay::default(),
            BehaviorConfig::default(),
        );

        KEY_EVENT_CHANNEL.send(press(SHIFT_INSERT)).await;
        KEY_EVENT_CHANNEL.send(release(SHIFT_INSERT)).await;

        match select(keyboard.run(), receive_keyboard_reports(5)).await {
            Either::First(_) => panic!("Keyboard stopped"),
            Either::Second(reports) => assert_eq!(
                reports,
                vec![
                    kb_report(KC_LSHIFT, &[]),
                    kb_report(KC_LSHIFT, &[KeyCode::Insert as u8]),
                    kb_report(KC_LSHIFT, &[]),
                    kb_report(0, &[]),
                    kb_report(0, &[]),
                ]
            ),
        }
    });
}
}

rusty_fork_test! {
#[test]
fn test_hold_timeout_in_run_loop() {
    block_on(async {
        KEY_EVENT_CHANNEL.clear();
        KEYBOARD_REPORT_CHANNEL.clear();

        let mut keyboard = Keyboard::new(
            &KEYMAP,
            fn_resolver(),
            KEYBOARD_REPORT_CHANNEL.sender(),
            RecordingDelay::default(),
            BehaviorConfig::default(),
        );

        KEY_EVENT_CHANNEL.send(press(ENTER_RCTRL)).await;

        let host = async {
            // Let the keyboard take the press before the clock moves
            yield_now().await;
            MockDriver::get().advance(Duration::from_millis(250));
            // Right Ctrl is sent with the key still held
            let held = receive_keyboard_reports(1).await;
            KEY_EVENT_CHANNEL.send(release(ENTER_RCTRL)).await;
            let released = receive_keyboard_reports(1).await;
            (held, released)
        };

        match select(keyboard.run(), host).await {
            Either::First(_) => panic!("Keyboard stopped"),
            Either::Second((held, released)) => {
                assert_eq!(held, vec![kb_report(KC_RCTRL, &[])]);
                assert_eq!(released, vec![kb_report(0, &[])]);
            }
        }
    });
}
}
