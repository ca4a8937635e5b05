//! DC motor HAT driver
//!
//! Maps logical motor numbers (1..=4) onto the PCA9685 channels of an
//! Adafruit-style motor HAT and exposes speed and direction control on top
//! of the [`crate::devices::pca9685`] driver.

mod driver;

pub use driver::MotorHat;

use crate::platform::PlatformError;
use core::fmt;

/// Motor HAT error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorHatError {
    /// The bus transport could not be opened; no chip state was touched
    BusUnavailable,
    /// A register transaction failed mid-sequence; remaining writes in that
    /// operation were skipped
    Bus(PlatformError),
    /// Motor id outside 1..=4, detected before any I/O
    UnknownMotor(u8),
}

impl fmt::Display for MotorHatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorHatError::BusUnavailable => write!(f, "I2C bus unavailable"),
            MotorHatError::Bus(e) => write!(f, "bus transaction failed: {}", e),
            MotorHatError::UnknownMotor(m) => write!(f, "unknown motor id {}", m),
        }
    }
}

impl From<PlatformError> for MotorHatError {
    fn from(e: PlatformError) -> Self {
        MotorHatError::Bus(e)
    }
}

/// Channel assignment of one motor terminal block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MotorChannels {
    /// PWM (speed) channel
    pub pwm: u8,
    /// First direction channel
    pub in1: u8,
    /// Second direction channel
    pub in2: u8,
}

/// Fixed motor-to-channel wiring of the HAT, indexed by motor id - 1
pub(crate) const MOTOR_CHANNELS: [MotorChannels; 4] = [
    MotorChannels { pwm: 8, in1: 10, in2: 9 },
    MotorChannels { pwm: 13, in1: 11, in2: 12 },
    MotorChannels { pwm: 2, in1: 4, in2: 3 },
    MotorChannels { pwm: 7, in1: 5, in2: 6 },
];

/// Look up a motor's channels, rejecting ids outside 1..=4
pub(crate) fn motor_channels(motor: u8) -> Result<MotorChannels, MotorHatError> {
    MOTOR_CHANNELS
        .get(motor.wrapping_sub(1) as usize)
        .copied()
        .ok_or(MotorHatError::UnknownMotor(motor))
}
