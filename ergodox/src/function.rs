/// Ids of the user functions which can be bound with `Action::Function` or `Action::FunctionTap`
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FunctionId {
    /// Jump to the bootloader
    Bootloader = 0,
    /// Left Alt when held, Ctrl + C when tapped
    CopyOrAlt = 1,
    /// Backspace, or Delete when a Ctrl is held
    BackspaceOrDelete = 2,
}

impl FunctionId {
    pub fn from_u8(id: u8) -> Option<Self> {
        match id {
            0 => Some(FunctionId::Bootloader),
            1 => Some(FunctionId::CopyOrAlt),
            2 => Some(FunctionId::BackspaceOrDelete),
            _ => None,
        }
    }
}

/// Tap information passed to tap functions.
///
/// `count` is 1 if the key was released without another key being pressed in between, 0 otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapRecord {
    pub count: u8,
    pub interrupted: bool,
}

impl TapRecord {
    pub const TAPPED: Self = Self {
        count: 1,
        interrupted: false,
    };
    pub const HELD: Self = Self {
        count: 0,
        interrupted: true,
    };

    pub fn is_tap(&self) -> bool {
        self.count > 0 && !self.interrupted
    }
}
