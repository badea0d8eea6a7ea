//! Shared setup for the demos: /dev/i2c-1 and the CHANGE line on sysfs
//! GPIO 7. Override with AT42_I2C and AT42_CHANGE_GPIO.

use std::env;
use std::error::Error;

use linux_embedded_hal::sysfs_gpio::Direction;
use linux_embedded_hal::{I2cdev, SysfsPin};

pub fn open() -> Result<(I2cdev, SysfsPin), Box<dyn Error>> {
    let bus = env::var("AT42_I2C").unwrap_or_else(|_| "/dev/i2c-1".into());
    let gpio: u64 = match env::var("AT42_CHANGE_GPIO") {
        Ok(v) => v.parse()?,
        Err(_) => 7,
    };

    let i2c = I2cdev::new(&bus)?;
    let change = SysfsPin::new(gpio);
    change.export()?;
    change.set_direction(Direction::In)?;
    log::info!("using {} and gpio {}", bus, gpio);

    Ok((i2c, change))
}
