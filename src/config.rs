//! Construction-time options.
//!
//! Older revisions of this driver disagreed on a couple of details: the byte
//! written to the reset register and how many bytes are read from the firmware
//! version register. Both are selectable here instead of living in separate
//! drivers.

use crate::commands;

/// AT42QT2120 default 7-bit address.
pub const DEFAULT_ADDR: u8 = 0x1C;

/// How many bytes to read starting at FIRMWARE_VERSION.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VersionWidth {
    #[default]
    Single,
    /// Also reads DETECTION_STATUS in the same transfer, which clears a
    /// pending change on the device.
    Double,
}

impl VersionWidth {
    pub const fn bytes(self) -> usize {
        match self {
            VersionWidth::Single => 1,
            VersionWidth::Double => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub address: u8,
    pub reset_value: u8,
    pub version_width: VersionWidth,
}

impl Config {
    pub const fn new() -> Self {
        Config {
            address: DEFAULT_ADDR,
            reset_value: commands::RESET,
            version_width: VersionWidth::Single,
        }
    }

    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Any non-zero value resets the device, see [`commands::RESET_ALTERNATE`].
    pub const fn with_reset_value(mut self, reset_value: u8) -> Self {
        self.reset_value = reset_value;
        self
    }

    pub const fn with_version_width(mut self, version_width: VersionWidth) -> Self {
        self.version_width = version_width;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
