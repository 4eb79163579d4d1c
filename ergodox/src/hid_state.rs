use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use bitfield_struct::bitfield;

use crate::hid::KeyboardReport;
use crate::types::keycode::KeyCode;
use crate::types::modifier::HidModifiers;

#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct HidMouseButtons {
    #[bits(1)]
    pub button1: bool, //left
    #[bits(1)]
    pub button2: bool, //right
    #[bits(1)]
    pub button3: bool, //middle
    #[bits(1)]
    pub button4: bool,
    #[bits(1)]
    pub button5: bool,
    #[bits(1)]
    pub button6: bool,
    #[bits(1)]
    pub button7: bool,
    #[bits(1)]
    pub button8: bool,
}

impl BitOr for HidMouseButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}
impl BitAnd for HidMouseButtons {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() & rhs.into_bits())
    }
}
impl Not for HidMouseButtons {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::from_bits(!self.into_bits())
    }
}
impl BitAndAssign for HidMouseButtons {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}
impl BitOrAssign for HidMouseButtons {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl HidMouseButtons {
    /// The button bit of a mouse button keycode, empty for other keycodes
    pub fn from_keycode(keycode: KeyCode) -> Self {
        if KeyCode::MouseBtn1 <= keycode && keycode <= KeyCode::MouseBtn8 {
            Self::from_bits(1 << (keycode as u16 - KeyCode::MouseBtn1 as u16))
        } else {
            Self::new()
        }
    }
}

/// The registered state of the keyboard report.
///
/// `held_modifiers` are the modifiers registered by keys and stay until unregistered.
/// `weak_modifiers` are added on top of them for a few reports, then removed, without touching
/// what the user is holding.
#[derive(Debug, Clone)]
pub struct HidState {
    held_modifiers: HidModifiers,
    weak_modifiers: HidModifiers,
    held_keycodes: [KeyCode; 6],
    mouse_buttons: HidMouseButtons,
}

impl Default for HidState {
    fn default() -> Self {
        Self::new()
    }
}

impl HidState {
    pub fn new() -> Self {
        Self {
            held_modifiers: HidModifiers::new(),
            weak_modifiers: HidModifiers::new(),
            held_keycodes: [KeyCode::No; 6],
            mouse_buttons: HidMouseButtons::new(),
        }
    }

    /// The modifiers currently held, weak modifiers excluded
    pub fn mods(&self) -> HidModifiers {
        self.held_modifiers
    }

    pub fn add_mods(&mut self, mods: HidModifiers) {
        self.held_modifiers |= mods;
    }

    pub fn del_mods(&mut self, mods: HidModifiers) {
        self.held_modifiers &= !mods;
    }

    pub fn add_weak_mods(&mut self, mods: HidModifiers) {
        self.weak_modifiers |= mods;
    }

    pub fn del_weak_mods(&mut self, mods: HidModifiers) {
        self.weak_modifiers &= !mods;
    }

    /// Register a key in the 6-key array.
    ///
    /// A key which is already registered isn't added twice. If all slots are used, the key is dropped.
    pub fn add_key(&mut self, keycode: KeyCode) {
        if self.held_keycodes.contains(&keycode) {
            return;
        }
        match self.held_keycodes.iter_mut().find(|k| **k == KeyCode::No) {
            Some(slot) => *slot = keycode,
            None => warn!("Keyboard report is full, dropping {:?}", keycode),
        }
    }

    pub fn del_key(&mut self, keycode: KeyCode) {
        self.held_keycodes
            .iter_mut()
            .filter(|k| **k == keycode)
            .for_each(|k| *k = KeyCode::No);
    }

    pub fn has_key(&self, keycode: KeyCode) -> bool {
        keycode != KeyCode::No && self.held_keycodes.contains(&keycode)
    }

    pub fn mouse_buttons(&self) -> HidMouseButtons {
        self.mouse_buttons
    }

    pub fn press_mouse_buttons(&mut self, buttons: HidMouseButtons) {
        self.mouse_buttons |= buttons;
    }

    pub fn release_mouse_buttons(&mut self, buttons: HidMouseButtons) {
        self.mouse_buttons &= !buttons;
    }

    /// Release everything: keys, modifiers and mouse buttons
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Build the keyboard report from current state
    pub fn keyboard_report(&self) -> KeyboardReport {
        KeyboardReport {
            modifier: (self.held_modifiers | self.weak_modifiers).into_bits(),
            reserved: 0,
            leds: 0,
            keycodes: self.held_keycodes.map(|k| k as u16 as u8),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_add_and_del_key() {
        let mut state = HidState::new();
        state.add_key(KeyCode::A);
        state.add_key(KeyCode::B);
        state.add_key(KeyCode::A);
        assert_eq!(state.keyboard_report().keycodes, [0x04, 0x05, 0, 0, 0, 0]);
        state.del_key(KeyCode::A);
        state.add_key(KeyCode::C);
        // The freed slot is reused
        assert_eq!(state.keyboard_report().keycodes, [0x06, 0x05, 0, 0, 0, 0]);
        assert!(state.has_key(KeyCode::B));
        assert!(!state.has_key(KeyCode::A));
    }

    #[test]
    fn test_rollover_drops_key() {
        let mut state = HidState::new();
        for k in [KeyCode::A, KeyCode::B, KeyCode::C, KeyCode::D, KeyCode::E, KeyCode::F, KeyCode::G] {
            state.add_key(k);
        }
        assert!(!state.has_key(KeyCode::G));
        assert_eq!(state.keyboard_report().keycodes, [0x04, 0x05, 0x06, 0x07, 0x08, 0x09]);
    }

    #[test]
    fn test_weak_mods_are_reported_but_not_held() {
        let mut state = HidState::new();
        state.add_mods(HidModifiers::new().with_left_alt(true));
        state.add_weak_mods(HidModifiers::new().with_left_ctrl(true));
        assert_eq!(state.keyboard_report().modifier, 0b101);
        assert_eq!(state.mods(), HidModifiers::new().with_left_alt(true));
        state.del_weak_mods(HidModifiers::new().with_left_ctrl(true));
        assert_eq!(state.keyboard_report().modifier, 0b100);
        state.del_mods(HidModifiers::new().with_left_alt(true));
        assert_eq!(state.keyboard_report().modifier, 0);
    }

    #[test]
    fn test_mouse_buttons() {
        let mut state = HidState::new();
        state.press_mouse_buttons(HidMouseButtons::from_keycode(KeyCode::MouseBtn1));
        state.press_mouse_buttons(HidMouseButtons::from_keycode(KeyCode::MouseBtn2));
        assert_eq!(state.mouse_buttons().into_bits(), 0b11);
        state.release_mouse_buttons(HidMouseButtons::from_keycode(KeyCode::MouseBtn1));
        assert_eq!(state.mouse_buttons().into_bits(), 0b10);
        assert_eq!(HidMouseButtons::from_keycode(KeyCode::MouseUp).into_bits(), 0);
        state.clear();
        assert_eq!(state.mouse_buttons().into_bits(), 0);
    }
}
