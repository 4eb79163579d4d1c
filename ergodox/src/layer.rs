/// Maximum number of layers the layer register can hold
pub const MAX_LAYER: usize = 32;

/// The layer register, one bit per layer.
///
/// An empty register means only the base layer (layer 0) is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the layer bit is set
    pub fn is_on(&self, layer: u8) -> bool {
        (layer as usize) < MAX_LAYER && self.0 & (1 << layer) != 0
    }

    /// Activate a layer, other layers are kept
    pub fn on(&mut self, layer: u8) {
        if (layer as usize) < MAX_LAYER {
            self.0 |= 1 << layer;
        }
    }

    /// Deactivate a layer, other layers are kept
    pub fn off(&mut self, layer: u8) {
        if (layer as usize) < MAX_LAYER {
            self.0 &= !(1 << layer);
        }
    }

    pub fn toggle(&mut self, layer: u8) {
        if (layer as usize) < MAX_LAYER {
            self.0 ^= 1 << layer;
        }
    }

    /// Make the given layer the only active one
    pub fn move_to(&mut self, layer: u8) {
        if (layer as usize) < MAX_LAYER {
            self.0 = 1 << layer;
        }
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// The highest active layer, `0` if no bit is set
    pub fn highest(&self) -> u8 {
        if self.0 == 0 {
            0
        } else {
            (u32::BITS - 1 - self.0.leading_zeros()) as u8
        }
    }
}
