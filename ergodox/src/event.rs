/// Key event: a physical key at `(row, col)` of the matrix changed its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

impl KeyEvent {
    pub const fn press(row: u8, col: u8) -> Self {
        Self { row, col, pressed: true }
    }

    pub const fn release(row: u8, col: u8) -> Self {
        Self { row, col, pressed: false }
    }

    /// Returns `true` if both events come from the same key
    pub fn same_position(&self, other: &KeyEvent) -> bool {
        self.row == other.row && self.col == other.col
    }
}
