pub mod common;

use embassy_futures::block_on;
use ergodox::config::BehaviorConfig;
use ergodox::function::FunctionId;
use ergodox::keyboard::Keyboard;
use ergodox::resolver::FnResolver;
use ergodox::types::action::Action;
use ergodox::types::keycode::KeyCode;

use crate::common::*;

const LAYERS: [[[KeyCode; 2]; 1]; 1] = [[[KeyCode::Fn0, KeyCode::Q]]];
const FN_ACTIONS: [Action; 2] = [
    Action::FunctionTap(FunctionId::CopyOrAlt as u8),
    // Not a function
    Action::Function(7),
];

fn create_copy_or_alt_keyboard() -> Keyboard<'static, TestReporter, RecordingDelay, 1, 2, 1> {
    Keyboard::new(
        &LAYERS,
        FnResolver::new(&FN_ACTIONS, &[]),
        TestReporter::default(),
        RecordingDelay::default(),
        BehaviorConfig::default(),
    )
}

#[test]
fn test_copy_on_tap() {
    block_on(async {
        let mut keyboard = create_copy_or_alt_keyboard();
        keyboard.process_key_event(press((0, 0))).await;
        keyboard.process_key_event(release((0, 0))).await;

        assert_eq!(
            keyboard.reporter().keyboard_reports(),
            vec![
                kb_report(KC_LCTRL, &[]),
                kb_report(KC_LCTRL, &[KeyCode::C as u8]),
                kb_report(KC_LCTRL, &[]),
                kb_report(0, &[]),
            ]
        );
        // Ctrl was only a weak modifier
        assert!(keyboard.hid_state().mods().is_empty());
    });
}

#[test]
fn test_alt_on_hold() {
    block_on(async {
        let mut keyboard = create_copy_or_alt_keyboard();
        keyboard.process_key_event(press((0, 0))).await;
        keyboard.process_key_event(press((0, 1))).await;
        keyboard.process_key_event(release((0, 1))).await;
        keyboard.process_key_event(release((0, 0))).await;

        assert_eq!(
            keyboard.reporter().keyboard_reports(),
            vec![
                kb_report(KC_LALT, &[]),
                kb_report(KC_LALT, &[KeyCode::Q as u8]),
                kb_report(KC_LALT, &[]),
                kb_report(0, &[]),
            ]
        );
    });
}

#[test]
fn test_unknown_function_is_ignored() {
    block_on(async {
        let mut keyboard = Keyboard::<_, _, 1, 2, 1>::new(
            &[[[KeyCode::Fn1, KeyCode::Q]]],
            FnResolver::new(&FN_ACTIONS, &[]),
            TestReporter::default(),
            RecordingDelay::default(),
            BehaviorConfig::default(),
        );
        keyboard.process_key_event(press((0, 0))).await;
        keyboard.process_key_event(release((0, 0))).await;
        assert!(keyboard.reporter().reports.is_empty());
    });
}
