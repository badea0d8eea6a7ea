//! Wait for the CHANGE line, then read key status to release it.
use std::error::Error;
use std::thread;
use std::time::Duration;

use at42qt2120::At42qt2120;

mod common;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let (i2c, change) = common::open()?;
    let mut at42 = At42qt2120::new(i2c, change);

    thread::sleep(Duration::from_secs(1));
    println!("AT42QT2120 with firmware version {}", at42.firmware_version()?);

    loop {
        if at42.change_detected()? {
            println!("Touch detected");
            // CHANGE stays low until a status register is read.
            let _ = at42.key_status()?;
        }
        thread::sleep(Duration::from_millis(50));
    }
}
