/// Jump to the bootloader.
///
/// Doesn't return on a supported platform. Without a bootloader feature enabled it returns immediately,
/// the caller keeps running.
pub fn jump_to_bootloader() {
    #[cfg(feature = "rp2040_bl")]
    // Jump to RP2040 bootloader
    embassy_rp::rom_data::reset_to_usb_boot(0, 0);

    #[cfg(not(feature = "rp2040_bl"))]
    warn!("Please specified a bootloader to jump to!");
}
