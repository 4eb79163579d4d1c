pub mod common;

use ergodox::fn_resolver;
use ergodox::layout::{FN_ACTIONS, FN_ACTIONS_1, FN_ACTIONS_2};
use ergodox::types::action::{Action, LayerTrigger};
use ergodox::types::keycode::KeyCode;

#[test]
fn test_default_layer_uses_default_table() {
    let resolver = fn_resolver();
    for (index, action) in FN_ACTIONS.iter().enumerate() {
        assert_eq!(resolver.resolve_index(index as u8, 0), *action);
    }
}

#[test]
fn test_layer_1_overrides_and_falls_back() {
    let resolver = fn_resolver();
    for index in 0..FN_ACTIONS.len() as u8 {
        let expected = match FN_ACTIONS_1.get(index as usize) {
            Some(action) if !action.is_no() => *action,
            _ => FN_ACTIONS[index as usize],
        };
        assert_eq!(resolver.resolve_index(index, 1), expected);
    }
    // Slot 3 of layer 1 is explicitly empty
    assert_eq!(resolver.resolve(KeyCode::Fn3, 1), FN_ACTIONS[3]);
    assert_eq!(resolver.resolve(KeyCode::Fn1, 1), Action::Function(0));
}

#[test]
fn test_layer_2_table() {
    let resolver = fn_resolver();
    assert_eq!(resolver.resolve(KeyCode::Fn0, 2), FN_ACTIONS_2[0]);
    assert_eq!(resolver.resolve(KeyCode::Fn0, 2), Action::LayerSet(0, LayerTrigger::Both));
    // Layer 2 doesn't see the layer 1 table
    assert_eq!(resolver.resolve(KeyCode::Fn1, 2), Action::No);
    assert_eq!(resolver.resolve(KeyCode::Fn2, 2), Action::LayerOn(1));
}

#[test]
fn test_out_of_bounds_index() {
    let resolver = fn_resolver();
    for layer in 0..4 {
        for index in FN_ACTIONS.len() as u8..=255 {
            assert_eq!(resolver.resolve_index(index, layer), Action::No);
        }
    }
}

#[test]
fn test_unbound_slots() {
    let resolver = fn_resolver();
    for layer in 0..3 {
        assert_eq!(resolver.resolve(KeyCode::Fn9, layer), Action::No);
        assert_eq!(resolver.resolve(KeyCode::Fn13, layer), Action::No);
    }
    assert_eq!(resolver.resolve(KeyCode::Fn1, 0), Action::No);
}
