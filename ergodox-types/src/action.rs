//! Actions bound to function slots.
//!
//! A keymap position holds a [`KeyCode`]. When the keycode is a function slot (`Fn0` ~ `Fn31`),
//! the keyboard looks the slot up in the function action tables and executes the [`Action`] found
//! there instead of a fixed key.

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// On which key edge a [`Action::LayerSet`] takes effect
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerTrigger {
    Press,
    Release,
    Both,
}

impl LayerTrigger {
    /// Returns `true` if the trigger fires on the given key state
    pub fn fires_on(self, pressed: bool) -> bool {
        match self {
            LayerTrigger::Press => pressed,
            LayerTrigger::Release => !pressed,
            LayerTrigger::Both => true,
        }
    }
}

/// A single action that a function slot resolves to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// No action, also used for empty slots of the function action tables.
    #[default]
    No,
    /// A normal key stroke, uses for all keycodes defined in `KeyCode` enum, including mouse key, consumer/system control, etc.
    Key(KeyCode),
    /// Hold the modifiers while the key is held, send the key when tapped.
    ModifierTap(ModifierCombination, KeyCode),
    /// Activate a layer while the key is held
    LayerOn(u8),
    /// Toggle a layer when the key is released
    LayerToggle(u8),
    /// Turn off all other layers and activate the given one
    LayerSet(u8, LayerTrigger),
    /// Activate a layer while the key is held, send the key when tapped.
    LayerTap(u8, KeyCode),
    /// Triggers the macro with the given id
    TriggerMacro(u8),
    /// Calls the user function with the given id, on both press and release
    Function(u8),
    /// Calls the user function with the given id, with tap/hold information
    FunctionTap(u8),
}

impl Action {
    /// Returns `true` if the action is the `No` sentinel
    pub fn is_no(&self) -> bool {
        matches!(self, Action::No)
    }

    /// Returns `true` if the action has different behavior on tap and on hold
    pub fn is_tap_hold(&self) -> bool {
        matches!(
            self,
            Action::ModifierTap(_, _) | Action::LayerTap(_, _) | Action::FunctionTap(_)
        )
    }
}
