//! `embedded-hal` adapters
//!
//! Wraps any `embedded-hal` 1.0 I2C bus or delay provider in the platform
//! traits, so the device drivers run on top of whatever HAL a target already
//! uses.

use crate::platform::{
    traits::{I2cInterface, TimerInterface},
    I2cError, PlatformError, Result,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, I2c};

/// Platform I2C interface over an `embedded-hal` bus
#[derive(Debug)]
pub struct HalI2c<B> {
    bus: B,
}

impl<B> HalI2c<B> {
    /// Wrap an `embedded-hal` I2C bus
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Release the underlying bus
    pub fn release(self) -> B {
        self.bus
    }
}

fn map_i2c_error<E: embedded_hal::i2c::Error>(e: E) -> PlatformError {
    let cause = match e.kind() {
        ErrorKind::NoAcknowledge(_) => I2cError::Nack,
        _ => I2cError::BusError,
    };
    PlatformError::I2c(cause)
}

impl<B: I2c> I2cInterface for HalI2c<B> {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.bus.write(addr, data).map_err(map_i2c_error)
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        self.bus.read(addr, buffer).map_err(map_i2c_error)
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        self.bus
            .write_read(addr, write_data, read_buffer)
            .map_err(map_i2c_error)
    }
}

/// Platform timer interface over an `embedded-hal` delay provider
#[derive(Debug)]
pub struct HalTimer<D> {
    delay: D,
}

impl<D> HalTimer<D> {
    /// Wrap an `embedded-hal` delay provider
    pub fn new(delay: D) -> Self {
        Self { delay }
    }
}

impl<D: DelayNs> TimerInterface for HalTimer<D> {
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}
