use serde::Deserialize;
use serde_inline_default::serde_inline_default;

/// Configurations for the timing and step sizes of keyboard actions.
///
/// Every field has a default, so a partial table such as `bootloader_delay_ms = 100` is a valid config.
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BehaviorConfig {
    /// A tap/hold key pressed longer than this is held, even if no other key is pressed, in ms
    #[serde_inline_default(200)]
    pub hold_timeout_ms: u16,
    /// Interval between the steps of the clipboard macros, in ms
    #[serde_inline_default(15)]
    pub macro_interval_ms: u16,
    /// Wait before jumping to the bootloader, gives the host time to receive the cleared report, in ms
    #[serde_inline_default(50)]
    pub bootloader_delay_ms: u16,
    /// Pointer movement of a single mouse key press
    #[serde_inline_default(8)]
    pub mouse_move_delta: i8,
    /// Wheel movement of a single wheel key press
    #[serde_inline_default(1)]
    pub mouse_wheel_delta: i8,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            hold_timeout_ms: 200,
            macro_interval_ms: 15,
            bootloader_delay_ms: 50,
            mouse_move_delta: 8,
            mouse_wheel_delta: 1,
        }
    }
}
