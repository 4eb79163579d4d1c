//! Layer-aware resolution of function slots.
//!
//! A function slot (`Fn0` ~ `Fn31`) in the keymap doesn't carry its meaning: the action is
//! looked up when the key is pressed, in the table of the active layer first and then in the
//! default table. Every layer inherits the default bindings unless it overrides them, so the
//! key which switched into a layer can still be resolved inside that layer.

use crate::types::action::Action;
use crate::types::keycode::KeyCode;

/// Function actions overriding the default table while `layer` is the active layer.
#[derive(Debug, Clone, Copy)]
pub struct FnTable<'a> {
    pub layer: u8,
    pub actions: &'a [Action],
}

impl<'a> FnTable<'a> {
    pub const fn new(layer: u8, actions: &'a [Action]) -> Self {
        Self { layer, actions }
    }

    /// Get the action at `index`, `None` if the index is out of the table
    pub fn get(&self, index: u8) -> Option<Action> {
        self.actions.get(index as usize).copied()
    }
}

/// Resolves function slots to actions.
///
/// The layer tables are checked in order, the first table registered for the active layer is used.
/// Adding a layer only needs a new [`FnTable`].
#[derive(Debug, Clone, Copy)]
pub struct FnResolver<'a> {
    default: &'a [Action],
    layers: &'a [FnTable<'a>],
}

impl<'a> FnResolver<'a> {
    pub const fn new(default: &'a [Action], layers: &'a [FnTable<'a>]) -> Self {
        Self { default, layers }
    }

    /// Resolve a keycode with the given active layer.
    ///
    /// Keycodes which are not function slots resolve to [`Action::No`].
    pub fn resolve(&self, keycode: KeyCode, active_layer: u8) -> Action {
        match keycode.as_fn_index() {
            Some(index) => self.resolve_index(index, active_layer),
            None => Action::No,
        }
    }

    /// Resolve a function slot index with the given active layer.
    pub fn resolve_index(&self, index: u8, active_layer: u8) -> Action {
        let mut action = self
            .layer_table(active_layer)
            .and_then(|table| table.get(index))
            .unwrap_or(Action::No);

        // Fallback to the default table, to get the mapping of the key which switched to current layer
        if action.is_no() {
            action = self.default.get(index as usize).copied().unwrap_or(Action::No);
        }

        trace!("Resolved Fn{} on layer {}: {:?}", index, active_layer, action);
        action
    }

    fn layer_table(&self, layer: u8) -> Option<&FnTable<'a>> {
        self.layers.iter().find(|table| table.layer == layer)
    }
}
