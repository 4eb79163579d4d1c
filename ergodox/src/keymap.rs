use crate::layer::LayerState;
use crate::types::keycode::KeyCode;

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// Keymap should be binded to the actual pcb matrix definition.
/// The keyboard uses `(row, col)` and the layer register to retrieve the keycode from Keymap.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    layers: &'a [[[KeyCode; COL]; ROW]; NUM_LAYER],
    /// Current state of each layer
    layer_state: LayerState,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(layers: &'a [[[KeyCode; COL]; ROW]; NUM_LAYER]) -> Self {
        KeyMap {
            layers,
            layer_state: LayerState::new(),
        }
    }

    /// Fetch the keycode stored at the given position of a single layer
    pub fn get_keycode_at(&self, row: usize, col: usize, layer_num: usize) -> KeyCode {
        self.layers
            .get(layer_num)
            .and_then(|layer| layer.get(row))
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(KeyCode::No)
    }

    /// Fetch the keycode at `(row, col)`, through the active layers.
    ///
    /// Iterate from higher layer to lower layer, transparent keys fall through to the next active layer.
    /// The lowest checked layer is layer 0, which is always active.
    pub fn get_keycode(&self, row: usize, col: usize) -> KeyCode {
        if row >= ROW || col >= COL {
            return KeyCode::No;
        }
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            if layer_idx == 0 || self.layer_state.is_on(layer_idx as u8) {
                let keycode = layer[row][col];
                if keycode == KeyCode::Transparent {
                    continue;
                }
                return keycode;
            }
        }

        KeyCode::No
    }

    /// The highest active layer
    pub fn get_activated_layer(&self) -> u8 {
        self.layer_state.highest()
    }

    pub fn layer_state(&self) -> LayerState {
        self.layer_state
    }

    /// Activate given layer
    pub fn activate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state.on(layer_num);
    }

    /// Deactivate given layer
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state.off(layer_num);
    }

    /// Toggle given layer
    pub fn toggle_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state.toggle(layer_num);
    }

    /// Deactivate all layers and activate the given one
    pub fn move_to_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state.move_to(layer_num);
    }
}
