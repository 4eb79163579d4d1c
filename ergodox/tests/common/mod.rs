#![allow(dead_code)]

use embedded_hal_async::delay::DelayNs;
use ergodox::config::BehaviorConfig;
use ergodox::event::KeyEvent;
use ergodox::hid::{HidError, HidReporter, KeyboardReport, Report};
use ergodox::keyboard::Keyboard;
use ergodox::layout::{COL, KEYMAP, NUM_LAYER, ROW, fn_resolver};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub const KC_LCTRL: u8 = 1 << 0;
pub const KC_LSHIFT: u8 = 1 << 1;
pub const KC_LALT: u8 = 1 << 2;
pub const KC_RCTRL: u8 = 1 << 4;
pub const KC_RSHIFT: u8 = 1 << 5;

// Matrix positions of the keys used in tests, as (row, col)
pub const Q: (u8, u8) = (1, 1);
pub const KC1: (u8, u8) = (1, 0);
pub const LSHIFT: (u8, u8) = (0, 3);
pub const LCTRL: (u8, u8) = (0, 4);
/// Fn2, momentary layer 1
pub const LAYER_1_HOLD: (u8, u8) = (3, 4);
/// Fn7
pub const BACKSPACE_DELETE: (u8, u8) = (4, 4);
/// Fn4
pub const PASTE: (u8, u8) = (1, 5);
/// Fn10
pub const SHIFT_INSERT: (u8, u8) = (2, 5);
/// Fn8
pub const COPY: (u8, u8) = (3, 5);
/// Fn11
pub const CUT: (u8, u8) = (4, 5);
/// Fn12, switch to layer 1
pub const LAYER_1_SET: (u8, u8) = (7, 5);
/// Fn3, `;` or Left Alt
pub const SEMICOLON_ALT: (u8, u8) = (10, 4);
/// Fn5, `=` or Right Shift
pub const EQUAL_RSHIFT: (u8, u8) = (13, 3);
/// Fn6 on layer 0, Enter or Right Ctrl. Play/Pause on layer 1
pub const ENTER_RCTRL: (u8, u8) = (10, 5);
/// Fn1 on layer 1
pub const BOOTLOADER: (u8, u8) = (6, 5);
/// Fn0 on layer 1, back to layer 0
pub const LAYER_0_SET: (u8, u8) = (9, 5);
/// Layer 1
pub const MOUSE_UP: (u8, u8) = (10, 1);
/// Layer 1
pub const MOUSE_BTN1: (u8, u8) = (12, 2);

pub fn press(pos: (u8, u8)) -> KeyEvent {
    KeyEvent::press(pos.0, pos.1)
}

pub fn release(pos: (u8, u8)) -> KeyEvent {
    KeyEvent::release(pos.0, pos.1)
}

/// Reporter which records every report written by the keyboard
#[derive(Default)]
pub struct TestReporter {
    pub reports: Vec<Report>,
}

impl HidReporter for TestReporter {
    async fn write_report(&mut self, report: Report) -> Result<(), HidError> {
        self.reports.push(report);
        Ok(())
    }
}

impl TestReporter {
    pub fn keyboard_reports(&self) -> Vec<KeyboardReport> {
        keyboard_reports(&self.reports)
    }
}

pub fn keyboard_reports(reports: &[Report]) -> Vec<KeyboardReport> {
    reports
        .iter()
        .filter_map(|r| match r {
            Report::KeyboardReport(r) => Some(*r),
            _ => None,
        })
        .collect()
}

/// Delay which returns immediately and records the requested delays in ms
#[derive(Default)]
pub struct RecordingDelay {
    pub delays_ms: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.delays_ms.push(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}

pub type TestKeyboard = Keyboard<'static, TestReporter, RecordingDelay, ROW, COL, NUM_LAYER>;

pub fn create_test_keyboard_with_config(config: BehaviorConfig) -> TestKeyboard {
    Keyboard::new(&KEYMAP, fn_resolver(), TestReporter::default(), RecordingDelay::default(), config)
}

pub fn create_test_keyboard() -> TestKeyboard {
    create_test_keyboard_with_config(BehaviorConfig::default())
}

/// Build a keyboard report with the given modifier byte and keys
pub fn kb_report(modifier: u8, keys: &[u8]) -> KeyboardReport {
    let mut keycodes = [0; 6];
    keycodes[..keys.len()].copy_from_slice(keys);
    KeyboardReport {
        modifier,
        reserved: 0,
        leds: 0,
        keycodes,
    }
}
