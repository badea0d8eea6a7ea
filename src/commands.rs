//Bytes written to the command and control registers. The consts are the
//raw values, the enums and helpers are what the driver passes around.

/// Any non-zero value starts a calibration cycle.
pub const CALIBRATE: u8 = 0x01;
/// Default value written to the reset register.
pub const RESET: u8 = 0x01;
/// Reset value used by the older revision of this driver.
pub const RESET_ALTERNATE: u8 = 0x63;

pub const SLIDER_ENABLE: u8 = 0x80;
pub const WHEEL_ENABLE: u8 = 0xC0;

/// Byte written to SLIDER_OPTIONS to turn keys 0-2 into a slider or wheel.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderMode {
    Slider = SLIDER_ENABLE,
    Wheel = WHEEL_ENABLE,
}

/*
 * Key control register bits, check the datasheet.
 * bit[1]: output level when EN is set
 * bit[0]: EN, 1 = key is a GPO instead of a touch channel
 * The remaining bits (AKS group, guard) are written as zero.
 */
#[repr(u8)]
pub enum KeyControl {
    Enable = 1 << 0,
    OutputHigh = 1 << 1,
}

/// Control byte for a key used as a touch channel (`enabled`) or as an
/// output driven low.
pub const fn touch_control(enabled: bool) -> u8 {
    if enabled {
        0
    } else {
        KeyControl::Enable as u8
    }
}

/// Control byte for a key used as a GPO. `level` must be 0 or 1.
pub const fn gpo_control(level: u8) -> Option<u8> {
    match level {
        0 => Some(KeyControl::Enable as u8),
        1 => Some(KeyControl::Enable as u8 | KeyControl::OutputHigh as u8),
        _ => None,
    }
}


#[cfg(test)]
mod command_tests {
    use super::*;

    #[test]
    fn slider_mode_bytes() {
        assert_eq!(SliderMode::Slider as u8, 0x80);
        assert_eq!(SliderMode::Wheel as u8, 0xC0);
    }

    #[test]
    fn touch_control_low_bit() {
        assert_eq!(touch_control(true), 0b0000_0000);
        assert_eq!(touch_control(false), 0b0000_0001);
    }

    #[test]
    fn gpo_levels() {
        assert_eq!(gpo_control(0), Some(0b0000_0001));
        assert_eq!(gpo_control(1), Some(0b0000_0011));
        assert_eq!(gpo_control(2), None);
        assert_eq!(gpo_control(0xFF), None);
    }
}
