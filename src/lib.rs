#![no_std]

//! Driver for the Microchip AT42QT2120 12-key capacitive touch sensor.
//!
//! The device is a plain register file on the I2C bus. Every operation in
//! this crate is one register transfer: write the register address, then
//! either write one value byte or read one or two bytes back.
//!
//! The CHANGE line is an open-drain output the device pulls low while it has
//! unread touch data. Reading it with [`At42qt2120::change_detected`] does
//! not clear it. The device releases the line after the host reads one of
//! its status registers, e.g. with [`At42qt2120::key_status`] or
//! [`At42qt2120::detection_status`].
//!
//! ```ignore
//! let mut touch = At42qt2120::new(i2c, change_pin);
//! let version = touch.firmware_version()?;
//! touch.enable_slider()?;
//!
//! loop {
//!     if touch.change_detected()? {
//!         let keys = touch.key_status()?;
//!         let position = touch.slider_wheel_position()?;
//!     }
//! }
//! ```

use embedded_hal::digital::InputPin;
use embedded_hal::i2c;


//Register addresses and the per-key register blocks.
pub mod register;
pub use crate::register::{Key, Registers, NUM_KEYS};

//Values written to the command and control registers.
pub mod commands;
pub use crate::commands::SliderMode;

//Decoders for the status registers.
mod status;
pub use crate::status::{DetectionStatus, FirmwareVersion, KeyStatus};

mod data;

mod config;
pub use crate::config::{Config, VersionWidth, DEFAULT_ADDR};

mod transport;
use crate::transport::Transport;


/// Errors returned by the driver.
///
/// Nothing is retried internally, every error is reported from the call that
/// caused it and leaves the driver usable.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error<E> {
    /// The I2C bus reported an error (NACK, arbitration loss, ...).
    #[error("I2C bus error: {0:?}")]
    I2C(E),
    /// Key index was not in `0..=11`. Raised before any bus traffic.
    #[error("key {0} is out of range (0-11)")]
    OutOfRangeKey(u8),
    /// An argument had a value the device can't take.
    #[error("invalid argument")]
    InvalidArgument,
    /// Slider/wheel position was requested before a slider or wheel mode
    /// was enabled.
    #[error("slider or wheel mode has not been enabled")]
    PreconditionNotMet,
    /// Reading the CHANGE pin failed.
    #[error("failed to read the CHANGE pin")]
    ChangePin,
}


/// AT42QT2120 driver, owns the I2C bus and the CHANGE pin.
pub struct At42qt2120<I2C, CHANGE>
where I2C: i2c::I2c
{
    transport: Transport<I2C>,
    change: CHANGE,
    config: Config,
    slider_mode: Option<SliderMode>,
}

impl<E, I2C, CHANGE> At42qt2120<I2C, CHANGE>
where
    I2C: i2c::I2c<Error = E>,
    CHANGE: InputPin,
{
    /// Driver at the default address [`DEFAULT_ADDR`].
    ///
    /// `change` must already be configured as an input.
    pub fn new(i2c: I2C, change: CHANGE) -> Self {
        Self::with_config(i2c, change, Config::default())
    }

    pub fn with_config(i2c: I2C, change: CHANGE, config: Config) -> Self {
        log::debug!("at42qt2120 at 0x{:02X}", config.address);
        At42qt2120 {
            transport: Transport::new(i2c, config.address),
            change,
            config,
            slider_mode: None,
        }
    }

    /// Give back the bus and the CHANGE pin.
    pub fn release(self) -> (I2C, CHANGE) {
        (self.transport.release(), self.change)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The mode last enabled through this driver, if any.
    pub fn slider_mode(&self) -> Option<SliderMode> {
        self.slider_mode
    }

    /// `true` while the CHANGE line is low.
    ///
    /// This only samples the pin. The device keeps the line asserted until a
    /// status register is read.
    pub fn change_detected(&mut self) -> Result<bool, Error<E>> {
        self.change.is_low().map_err(|_| Error::ChangePin)
    }

    pub fn firmware_version(&mut self) -> Result<FirmwareVersion, Error<E>> {
        let len = self.config.version_width.bytes();
        let bytes = self
            .transport
            .read_bytes(Registers::FIRMWARE_VERSION.addr(), len)?;
        Ok(FirmwareVersion::from_byte(bytes[0]))
    }

    pub fn detection_status(&mut self) -> Result<DetectionStatus, Error<E>> {
        let status = self.transport.read_u8(Registers::DETECTION_STATUS.addr())?;
        Ok(DetectionStatus::from_byte(status))
    }

    /// Touch state of every key.
    ///
    /// KEY_STATUS_A and KEY_STATUS_B are read in a single two byte transfer.
    pub fn key_status(&mut self) -> Result<KeyStatus, Error<E>> {
        let bytes = self.transport.read_pair(Registers::KEY_STATUS_A.addr())?;
        Ok(KeyStatus::from_bytes(bytes))
    }

    pub fn enable_slider(&mut self) -> Result<(), Error<E>> {
        self.set_slider_mode(SliderMode::Slider)
    }

    pub fn enable_wheel(&mut self) -> Result<(), Error<E>> {
        self.set_slider_mode(SliderMode::Wheel)
    }

    /// Use keys 0-2 as a slider or wheel.
    pub fn set_slider_mode(&mut self, mode: SliderMode) -> Result<(), Error<E>> {
        self.transport
            .write_byte(Registers::SLIDER_OPTIONS.addr(), mode as u8)?;
        log::debug!("slider mode {:?}", mode);
        self.slider_mode = Some(mode);
        Ok(())
    }

    /// Raw slider or wheel position, 0-255.
    ///
    /// Fails with [`Error::PreconditionNotMet`] unless [`Self::enable_slider`]
    /// or [`Self::enable_wheel`] succeeded earlier.
    pub fn slider_wheel_position(&mut self) -> Result<u8, Error<E>> {
        if self.slider_mode.is_none() {
            log::warn!("slider position read without slider or wheel mode");
            return Err(Error::PreconditionNotMet);
        }
        self.transport.read_u8(Registers::SLIDER_POSITION.addr())
    }

    /// Start a calibration cycle. Does not wait for it to finish, watch the
    /// CAL bit in DETECTION_STATUS for that.
    pub fn calibrate(&mut self) -> Result<(), Error<E>> {
        log::debug!("calibrate");
        self.transport
            .write_byte(Registers::CALIBRATE.addr(), commands::CALIBRATE)
    }

    /// Reset the device. Does not wait for it to come back.
    pub fn reset(&mut self) -> Result<(), Error<E>> {
        log::debug!("reset with 0x{:02X}", self.config.reset_value);
        self.transport
            .write_byte(Registers::RESET.addr(), self.config.reset_value)
    }

    /// Set the LOW_POWER register, the sleep time between measurements in
    /// 8ms steps. 0 means measure continuously.
    pub fn set_low_power(&mut self, value: u8) -> Result<(), Error<E>> {
        self.transport.write_byte(Registers::LOW_POWER.addr(), value)
    }

    /// Enable or disable touch on `key`. A disabled key becomes an output
    /// driven low.
    pub fn set_touch_enabled(&mut self, key: u8, enabled: bool) -> Result<(), Error<E>> {
        let key = Self::key(key)?;
        self.transport
            .write_byte(key.control_register(), commands::touch_control(enabled))
    }

    /// Use `key` as a general purpose output at `level` (0 or 1).
    pub fn set_key_gpo(&mut self, key: u8, level: u8) -> Result<(), Error<E>> {
        let key = Self::key(key)?;
        let value = commands::gpo_control(level).ok_or_else(|| {
            log::warn!("gpo level {} is not 0 or 1", level);
            Error::InvalidArgument
        })?;
        self.transport.write_byte(key.control_register(), value)
    }

    pub fn key_control(&mut self, key: u8) -> Result<u8, Error<E>> {
        let key = Self::key(key)?;
        self.transport.read_u8(key.control_register())
    }

    pub fn key_detect_threshold(&mut self, key: u8) -> Result<u8, Error<E>> {
        let key = Self::key(key)?;
        self.transport.read_u8(key.threshold_register())
    }

    /// Signal level of `key`.
    pub fn key_signal(&mut self, key: u8) -> Result<u16, Error<E>> {
        let key = Self::key(key)?;
        let bytes = self.transport.read_pair(key.signal_register())?;
        Ok(data::key_signal(bytes))
    }

    fn key(index: u8) -> Result<Key, Error<E>> {
        Key::new(index).ok_or_else(|| {
            log::warn!("key {} out of range", index);
            Error::OutOfRangeKey(index)
        })
    }
}
