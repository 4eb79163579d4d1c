//! Clipboard macros.
//!
//! Every macro of this keymap is the same shape: hold a modifier, tap a key, release the modifier.

use heapless::Vec;

use crate::types::keycode::KeyCode;

/// Maximum number of operations in a macro sequence
pub const MACRO_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroOperation {
    Press(KeyCode),
    Release(KeyCode),
    Tap(KeyCode),
    /// Set the time waited after every following operation, in ms
    Interval(u16),
    /// Wait once, in ms
    Delay(u16),
    /// Marks the end of a macro sequence
    End,
}

/// Ids of the macros which can be bound with `Action::TriggerMacro`
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroId {
    /// Ctrl + X
    Cut = 0,
    /// Ctrl + C
    Copy = 1,
    /// Ctrl + V
    Paste = 2,
    /// Shift + Insert
    ShiftInsert = 3,
}

impl MacroId {
    pub fn from_u8(id: u8) -> Option<Self> {
        match id {
            0 => Some(MacroId::Cut),
            1 => Some(MacroId::Copy),
            2 => Some(MacroId::Paste),
            3 => Some(MacroId::ShiftInsert),
            _ => None,
        }
    }

    /// The modifier held during the macro
    pub fn modifier(self) -> KeyCode {
        match self {
            MacroId::ShiftInsert => KeyCode::LShift,
            _ => KeyCode::LCtrl,
        }
    }

    /// The key tapped while the modifier is held
    pub fn key(self) -> KeyCode {
        match self {
            MacroId::Cut => KeyCode::X,
            MacroId::Copy => KeyCode::C,
            MacroId::Paste => KeyCode::V,
            MacroId::ShiftInsert => KeyCode::Insert,
        }
    }

    /// The sequence played when the macro key is pressed
    pub fn sequence(self, interval_ms: u16) -> Vec<MacroOperation, MACRO_SIZE> {
        Vec::from_iter([
            MacroOperation::Interval(interval_ms),
            MacroOperation::Press(self.modifier()),
            MacroOperation::Tap(self.key()),
            MacroOperation::Release(self.modifier()),
            MacroOperation::End,
        ])
    }
}
