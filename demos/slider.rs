//! Use keys 0-2 as a slider and print the raw position.
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

    at42.enable_slider()?;

    loop {
        // Electrode layout for the slider is in the datasheet.
        println!("{}", at42.slider_wheel_position()?);
        thread::sleep(Duration::from_millis(100));
    }
}
