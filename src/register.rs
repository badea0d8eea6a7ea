//! Register Mapping
//!
//! Addresses from the AT42QT2120 datasheet, section "I2C-compatible bus
//! memory map".

/// Number of touch channels on the device.
pub const NUM_KEYS: u8 = 12;

// Start of the per-key register blocks.
pub(crate) const KEY_THRESHOLD_BASE: u8 = 16;
pub(crate) const KEY_CONTROL_BASE: u8 = 28;
pub(crate) const KEY_SIGNAL_BASE: u8 = 52;

#[allow(non_camel_case_types)]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registers {
    /// Firmware version, major in the high nibble.
    FIRMWARE_VERSION = 0x01,
    /// Keys / slider in detect.
    DETECTION_STATUS = 0x02,
    /// Keys 0-7, one bit each.
    KEY_STATUS_A = 0x03,
    /// Keys 8-11 in the low nibble.
    KEY_STATUS_B = 0x04,
    SLIDER_POSITION = 0x05,
    CALIBRATE = 0x06,
    RESET = 0x07,
    LOW_POWER = 0x08,
    /// Slider/wheel enable, applies to keys 0-2.
    SLIDER_OPTIONS = 0x0E,
}

impl Registers {
    pub fn addr(self) -> u8 {
        self as u8
    }
}

impl From<Registers> for u8 {
    #[inline]
    fn from(r: Registers) -> Self {
        r as u8
    }
}

/// A validated key index in `0..=11`.
///
/// Every key owns a threshold, a control and a two byte signal register, all
/// of which are computed from the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Key(u8);

impl Key {
    /// Returns `None` when `index` is not a key on this device.
    pub const fn new(index: u8) -> Option<Self> {
        if index < NUM_KEYS {
            Some(Key(index))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Negative threshold register, 16..=27.
    pub const fn threshold_register(self) -> u8 {
        KEY_THRESHOLD_BASE + self.0
    }

    /// Key control register, 28..=39.
    pub const fn control_register(self) -> u8 {
        KEY_CONTROL_BASE + self.0
    }

    /// First byte of the big-endian key signal, 52..=74 in steps of two.
    pub const fn signal_register(self) -> u8 {
        KEY_SIGNAL_BASE + 2 * self.0
    }
}

impl TryFrom<u8> for Key {
    type Error = u8;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Key::new(index).ok_or(index)
    }
}
