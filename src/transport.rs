//! Register transfers over the I2C bus.
//!
//! Each call is exactly one bus transaction. Reads use `write_read`, so the
//! register address and the data phase are joined by a repeated start and no
//! other traffic can land between them. The bus is borrowed mutably for the
//! duration of the call and is free again on every return path.
//!
//! Nothing here retries. Bus errors go straight back to the caller.

use embedded_hal::i2c;

use crate::Error;

/// Largest register read the driver performs.
pub(crate) const MAX_READ: usize = 2;

pub(crate) struct Transport<I2C>
where I2C: i2c::I2c
{
    i2c: I2C,
    address: u8,
    buffer: [u8; MAX_READ],
}

impl<E, I2C> Transport<I2C>
where I2C: i2c::I2c<Error = E>
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        Transport{i2c, address, buffer: [0; MAX_READ]}
    }

    /// Write `value` into `register`: START, addr+W, register, value, STOP.
    pub fn write_byte(&mut self, register: u8, value: u8) -> Result<(), Error<E>> {
        log::trace!("write reg 0x{:02X} <- 0x{:02X}", register, value);
        self.i2c
            .write(self.address, &[register, value])
            .map_err(Error::I2C)
    }

    /// Read `len` consecutive bytes starting at `register`.
    ///
    /// The returned slice borrows the transport's buffer, copy out what you
    /// need before the next transfer.
    pub fn read_bytes(&mut self, register: u8, len: usize) -> Result<&[u8], Error<E>> {
        debug_assert!(len > 0 && len <= MAX_READ);
        let buf = &mut self.buffer[..len];

        self.i2c
            .write_read(self.address, &[register], buf)
            .map_err(Error::I2C)?;

        log::trace!("read reg 0x{:02X} -> {:02X?}", register, buf);
        Ok(buf)
    }

    pub fn read_u8(&mut self, register: u8) -> Result<u8, Error<E>> {
        Ok(self.read_bytes(register, 1)?[0])
    }

    pub fn read_pair(&mut self, register: u8) -> Result<[u8; 2], Error<E>> {
        let b = self.read_bytes(register, 2)?;
        Ok([b[0], b[1]])
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}
