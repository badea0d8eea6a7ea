//! Poll all keys and print the ones being touched.
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
        let keys = at42.key_status()?;
        for (index, touched) in keys.iter() {
            if touched {
                println!("{} key pressed", index);
            }
        }
        thread::sleep(Duration::from_millis(50));
    }
}
