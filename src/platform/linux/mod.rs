//! Linux host platform implementation
//!
//! Provides the platform traits over a Linux `/dev/i2c-N` character device via
//! `linux-embedded-hal`, for running the motor HAT from a Raspberry Pi or any
//! other Linux board with an exposed I2C bus.

use crate::platform::hal::{HalI2c, HalTimer};
use crate::platform::{PlatformError, Result};
use linux_embedded_hal::{Delay, I2cdev};

/// I2C interface over a Linux i2cdev device
pub type LinuxI2c = HalI2c<I2cdev>;

/// Timer interface over host sleeps
pub type LinuxTimer = HalTimer<Delay>;

/// Open `/dev/i2c-{bus}`
///
/// # Errors
///
/// Returns `PlatformError::InitializationFailed` if the device node cannot be
/// opened. Nothing is written to the bus by this call.
pub fn open_bus(bus: u8) -> Result<LinuxI2c> {
    let path = std::format!("/dev/i2c-{}", bus);
    let dev = I2cdev::new(path).map_err(|_| PlatformError::InitializationFailed)?;
    Ok(HalI2c::new(dev))
}

/// Create a host timer
pub fn timer() -> LinuxTimer {
    HalTimer::new(Delay)
}
