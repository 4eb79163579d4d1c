//! The ErgoDox keymap: two layers, and the function actions bound to their `Fn` keys.
//!
//! ```text
//! Layer 0:
//! ,-----------------------------------------------.           ,-----------------------------------------------------.
//! |   Esc   |  1  |  2  |  3  |  4   |  5  |   6  |           |   7  |   8   | Left  | Down  |  Up | Right |   \|   |
//! |---------+-----+-----+-----+------+------------|           |------+-------+-------+-------+-----+-------+--------|
//! |   Tab   |  Q  |  F  |  W  |  R   |  Y  | Home |           | End  |  `~   |   H   |   J   |  K  |   L   |  PgUp  |
//! |---------+-----+-----+-----+------+-----|      |           |      |-------+-------+-------+-----+-------+--------|
//! |    -_   |  A  |  S  |  D  |  G   |  X  |------|           |------|  ,<   |   C   |   E   |  I  |   O   |  PgDwn |
//! |---------+-----+-----+-----+------+-----|  [{  |           |  ]}  |-------+-------+-------+-----+-------+--------|
//! | LShift  |  Z  |  T  |  M  |  B   |  V  |      |           |      |  /?   |   N   |   P   | .>  |   U   |=+/RShft|
//! `---------+-----+-----+-----+------+------------'           `--------------+-------+-------+-----+-------+--------'
//!  | LCtrl  |RAlt | LAlt| ~L1 |Bksp/Del|                                     | Space |;:/LAlt| '"  |   9   |   0   |
//!  `-----------------------------------'                                     `-------------------------------------'
//!                                        ,-------------.       ,-------------.
//!                                        |  F2  | LGui |       |  L1  |  F1  |
//!                                 ,------|------|------|       |------+------+------.
//!                                 |      |      | C-x  |       |  F3  |      |      |
//!                                 | C-c  |S-Ins |------|       |------| Del  |Enter |
//!                                 |      |      | C-v  |       | KP0  |      |RCtrl |
//!                                 `--------------------'       `--------------------'
//!
//! Layer 1:
//! ,--------------------------------------------------.           ,--------------------------------------------------.
//! |        |  F1  |  F2  |  F3  |  F4  |  F5  |  F6  |           |  F7  |  F8  |  F9  |  F10 |      |  F11 |   F12  |
//! |--------+------+------+------+------+-------------|           |------+------+------+------+------+------+--------|
//! |        |      |      |  Up  |      |      |      |           |      |      |      |  M_U |      |      |        |
//! |--------+------+------+------+------+------|      |           |      |------+------+------+------+------+--------|
//! |        |      | Left | Down | Right|      |------|           |------|      |  M_L |  M_D |  M_R | BTN1 |        |
//! |--------+------+------+------+------+------|      |           |      |------+------+------+------+------+--------|
//! |        |      |      |      |      |      |      |           |      |      |      | BTN2 | BTN2 | KP_8 |        |
//! `--------+------+------+------+------+-------------'           `-------------+------+------+------+------+--------'
//!   |      |      |      |      |      |                                       | WH_D | WH_U | KP_4 | KP_2 | KP_6 |
//!   `----------------------------------'                                       `----------------------------------'
//!                                        ,-------------.       ,-------------.
//!                                        |      |Boot  |       |      |      |
//!                                 ,------|------|------|       |------+------+------.
//!                                 |      |      |      |       |  L0  |      |      |
//!                                 |      |      |------|       |------|      |      |
//!                                 |      |      |      |       | Prev | Next | Play |
//!                                 `--------------------'       `--------------------'
//! ```

use crate::ergodox_layer;
use crate::function::FunctionId;
use crate::keyboard_macro::MacroId;
use crate::resolver::{FnResolver, FnTable};
use crate::types::action::{Action, LayerTrigger};
use crate::types::keycode::KeyCode;
use crate::types::modifier::ModifierCombination;

pub const ROW: usize = 14;
pub const COL: usize = 6;
pub const NUM_LAYER: usize = 2;

#[rustfmt::skip]
pub const KEYMAP: [[[KeyCode; COL]; ROW]; NUM_LAYER] = [
    ergodox_layer!(
        // left hand
        Escape, Kc1,  Kc2,  Kc3,  Kc4, Kc5, Kc6,
        Tab,    Q,    F,    W,    R,   Y,   Home,
        Minus,  A,    S,    D,    G,   X,
        LShift, Z,    T,    M,    B,   V,   LeftBracket,
        LCtrl,  RAlt, LAlt, Fn2,  Fn7,
                                                F2,   LGui,
                                                      Fn11,
                                          Fn8,  Fn10, Fn4,
        // right hand
        Kc7,          Kc8,   Left,  Down, Up,    Right, Backslash,
        End,          Grave, H,     J,    K,     L,     PageUp,
                      Comma, C,     E,    I,     O,     PageDown,
        RightBracket, Slash, N,     P,    Dot,   U,     Fn5,
                             Space, Fn3,  Quote, Kc9,   Kc0,
        Fn12, F1,
        F3,
        Kp0, Delete, Fn6
    ),
    ergodox_layer!(
        // left hand
        Transparent, F1,          F2,          F3,          F4,          F5,          F6,
        Transparent, Transparent, Transparent, Up,          Transparent, Transparent, Transparent,
        Transparent, Transparent, Left,        Down,        Right,       Transparent,
        Transparent, Transparent, Transparent, Transparent, Transparent, Transparent, Transparent,
        Transparent, Transparent, Transparent, Transparent, Transparent,
                                                             Transparent, Fn1,
                                                                          Transparent,
                                                Transparent, Transparent, Transparent,
        // right hand
        F7,          F8,          F9,             F10,          Transparent, F11,         F12,
        Transparent, Transparent, Transparent,    MouseUp,      Transparent, Transparent, Transparent,
                     Transparent, MouseLeft,      MouseDown,    MouseRight,  MouseBtn1,   Transparent,
        Transparent, Transparent, Transparent,    MouseBtn2,    MouseBtn2,   Kp8,         Transparent,
                                  MouseWheelDown, MouseWheelUp, Kp4,         Kp2,         Kp6,
        Transparent, Transparent,
        Fn0,
        MediaPrevTrack, MediaNextTrack, MediaPlayPause
    ),
];

/// Function actions of layer 0, used by every layer which doesn't override the slot
pub const FN_ACTIONS: [Action; 13] = [
    Action::No,
    Action::No,
    // Fn2, momentary layer 1
    Action::LayerOn(1),
    // Fn3, `;` or Left Alt
    Action::ModifierTap(ModifierCombination::LALT, KeyCode::Semicolon),
    // Fn4
    Action::TriggerMacro(MacroId::Paste as u8),
    // Fn5, `=` or Right Shift
    Action::ModifierTap(ModifierCombination::RSHIFT, KeyCode::Equal),
    // Fn6, Enter or Right Ctrl
    Action::ModifierTap(ModifierCombination::RCTRL, KeyCode::Enter),
    // Fn7
    Action::Function(FunctionId::BackspaceOrDelete as u8),
    // Fn8
    Action::TriggerMacro(MacroId::Copy as u8),
    Action::No,
    // Fn10
    Action::TriggerMacro(MacroId::ShiftInsert as u8),
    // Fn11
    Action::TriggerMacro(MacroId::Cut as u8),
    // Fn12, switch to layer 1
    Action::LayerSet(1, LayerTrigger::Press),
];

/// Function actions of layer 1
pub const FN_ACTIONS_1: [Action; 4] = [
    // Fn0, back to layer 0
    Action::LayerSet(0, LayerTrigger::Both),
    // Fn1
    Action::Function(FunctionId::Bootloader as u8),
    Action::No,
    Action::No,
];

/// Function actions of layer 2
pub const FN_ACTIONS_2: [Action; 1] = [Action::LayerSet(0, LayerTrigger::Both)];

pub const FN_TABLES: [FnTable<'static>; 2] = [FnTable::new(1, &FN_ACTIONS_1), FnTable::new(2, &FN_ACTIONS_2)];

/// The resolver of the `Fn` keys of this keymap
pub const fn fn_resolver() -> FnResolver<'static> {
    FnResolver::new(&FN_ACTIONS, &FN_TABLES)
}
