//Bits and their meanings, check the AT42QT2120 datasheet.
/*
 * DETECTION_STATUS (0x02)
 * bit[7]: CAL, calibrating
 * bit[6]: OVERFLOW
 * bit[5:2]: reserved
 * bit[1]: SDET, slider/wheel in detect
 * bit[0]: TDET, any key in detect
 *
 * KEY_STATUS_A (0x03): keys 0-7, bit n -> key n
 * KEY_STATUS_B (0x04): keys 8-11 in bit[3:0]
*/

use core::fmt;

use crate::register::{Key, NUM_KEYS};

#[repr(u8)]
pub enum BitMasks {
    KeysInDetect = 1 << 0,
    SliderInDetect = 1 << 1,
}

/// Decoded DETECTION_STATUS register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DetectionStatus {
    /// Slider or wheel is being touched.
    pub slider: bool,
    /// At least one key is being touched.
    pub keys: bool,
}

impl DetectionStatus {
    pub const fn from_byte(status: u8) -> Self {
        DetectionStatus {
            slider: status & BitMasks::SliderInDetect as u8 != 0,
            keys: status & BitMasks::KeysInDetect as u8 != 0,
        }
    }
}

impl From<u8> for DetectionStatus {
    fn from(status: u8) -> Self {
        DetectionStatus::from_byte(status)
    }
}

/// Touch state of all twelve keys, index 0 is key 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyStatus {
    keys: [bool; NUM_KEYS as usize],
}

impl KeyStatus {
    /// Decode KEY_STATUS_A and KEY_STATUS_B. The upper nibble of the second
    /// byte is reserved and ignored.
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        let mut keys = [false; NUM_KEYS as usize];
        for (n, key) in keys.iter_mut().enumerate() {
            let byte = bytes[n / 8];
            *key = byte & (1 << (n % 8)) != 0;
        }
        KeyStatus { keys }
    }

    pub fn is_touched(&self, key: Key) -> bool {
        self.keys[key.index() as usize]
    }

    pub fn any(&self) -> bool {
        self.keys.iter().any(|&k| k)
    }

    pub fn as_array(&self) -> &[bool; NUM_KEYS as usize] {
        &self.keys
    }

    /// Iterate over `(key index, touched)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u8, bool)> + '_ {
        self.keys.iter().enumerate().map(|(i, &t)| (i as u8, t))
    }
}

/// Firmware version from the FIRMWARE_VERSION register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FirmwareVersion {
    pub major: u8,
    pub minor: u8,
}

impl FirmwareVersion {
    pub const fn from_byte(version: u8) -> Self {
        FirmwareVersion {
            major: version >> 4,
            minor: version & 0x0F,
        }
    }
}

impl From<u8> for FirmwareVersion {
    fn from(version: u8) -> Self {
        FirmwareVersion::from_byte(version)
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
