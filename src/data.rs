/*
 * Filename: data.rs
 * Description: raw measurement data read back from the sensor.
 */

/// Combine the two KEY_SIGNAL bytes, most significant byte first.
pub const fn key_signal(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}
