//! g400-config-core: device discovery, feature-report protocol, and trace
//! decoding for the Logitech G400/G400s gaming mouse.
//!
//! This crate provides the cross-platform core logic for reading and writing
//! the mouse's polling-rate and DPI registers over USB HID feature reports,
//! and for decoding the raw button-event frames on the interrupt channel.

pub mod commands;
pub mod device;
pub mod error;
pub mod feature;
#[cfg(test)]
mod integration_tests;
pub mod settings;
pub mod trace;
pub mod transport;

/// Logitech USB Vendor ID.
pub const LOGITECH_VID: u16 = 0x046D;

/// Known G400-family product IDs.
pub mod pids {
    /// G400 (wired).
    pub const G400: u16 = 0xC245;
    /// G400s (wired, HERO-era revision).
    pub const G400S: u16 = 0xC24C;
}
