//! Motor HAT driver implementation
//!
//! Speed and direction control for up to four DC motors, composed from
//! PCA9685 channel operations.
//!
//! ## Direction pins
//!
//! Each motor's H-bridge is steered by two channels driven as digital pins:
//!
//! | in1 | in2 | Motor state |
//! |-----|-----|-------------|
//! | 0   | 0   | Stopped     |
//! | 1   | 0   | Forward     |
//! | 0   | 1   | Backward    |
//!
//! There is no interlock between direction calls; reversing under load is
//! the caller's responsibility, mirroring the permissive hardware.

use super::{motor_channels, MotorHatError};
use crate::devices::pca9685::{Pca9685, Pca9685Config};
use crate::platform::{I2cInterface, TimerInterface};

/// DC motor HAT driver
///
/// Exclusive owner of one PCA9685 (and therefore one bus connection).
/// Construction initializes the chip; motor commands are accepted only on a
/// successfully constructed handle. Direction and speed are write-only to
/// the device: no motor state is retained on the host side.
pub struct MotorHat<I2C, TIMER> {
    pwm: Pca9685<I2C, TIMER>,
}

impl<I2C, TIMER> MotorHat<I2C, TIMER>
where
    I2C: I2cInterface,
    TIMER: TimerInterface,
{
    /// Create a motor HAT handle, initializing the PCA9685
    ///
    /// # Errors
    ///
    /// Returns `MotorHatError::Bus` if any initialization register write
    /// fails; the bus handle is dropped in that case.
    pub fn new(i2c: I2C, timer: TIMER, config: Pca9685Config) -> Result<Self, MotorHatError> {
        let pwm = Pca9685::new(i2c, timer, config)?;
        Ok(Self { pwm })
    }

    /// Set a motor's speed
    ///
    /// `speed` is clamped into [0, 255] and mapped linearly onto the 12-bit
    /// duty range (`off = speed * 16`), so 255 yields 4080 of 4096 ticks.
    /// Speed is independent of direction; 0 leaves the motor coasting.
    ///
    /// # Errors
    ///
    /// Returns `MotorHatError::UnknownMotor` before any I/O if `motor` is
    /// not in 1..=4, or the underlying bus failure.
    pub fn set_speed(&mut self, motor: u8, speed: i16) -> Result<(), MotorHatError> {
        let channels = motor_channels(motor)?;
        let speed = speed.clamp(0, 255) as u16;

        crate::log_debug!("motor {} speed {}", motor, speed);
        self.pwm.set_pwm(channels.pwm, 0, speed * 16)?;
        Ok(())
    }

    /// Run a motor forward (in1 high, in2 low)
    pub fn forward(&mut self, motor: u8) -> Result<(), MotorHatError> {
        let channels = motor_channels(motor)?;
        self.pwm.set_pin(channels.in1, 1)?;
        self.pwm.set_pin(channels.in2, 0)?;
        Ok(())
    }

    /// Run a motor backward (in1 low, in2 high)
    pub fn backward(&mut self, motor: u8) -> Result<(), MotorHatError> {
        let channels = motor_channels(motor)?;
        self.pwm.set_pin(channels.in1, 0)?;
        self.pwm.set_pin(channels.in2, 1)?;
        Ok(())
    }

    /// Stop a motor (both direction pins low)
    pub fn stop(&mut self, motor: u8) -> Result<(), MotorHatError> {
        let channels = motor_channels(motor)?;
        self.pwm.set_pin(channels.in1, 0)?;
        self.pwm.set_pin(channels.in2, 0)?;
        Ok(())
    }

    /// Release the bus and timer, closing the handle
    pub fn release(self) -> (I2C, TIMER) {
        self.pwm.release()
    }
}

#[cfg(feature = "linux")]
impl MotorHat<crate::platform::linux::LinuxI2c, crate::platform::linux::LinuxTimer> {
    /// Open a motor HAT on a Linux I2C bus
    ///
    /// Opens `/dev/i2c-{bus}` and initializes the chip at `address`.
    ///
    /// # Errors
    ///
    /// Returns `MotorHatError::BusUnavailable` if the device node cannot be
    /// opened (no chip state touched), or `MotorHatError::Bus` if
    /// initialization fails on the wire.
    pub fn open(address: u8, bus: u8) -> Result<Self, MotorHatError> {
        let i2c =
            crate::platform::linux::open_bus(bus).map_err(|_| MotorHatError::BusUnavailable)?;
        Self::new(
            i2c,
            crate::platform::linux::timer(),
            Pca9685Config {
                address,
                ..Pca9685Config::default()
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{I2cTransaction, MockI2c, MockTimer};

    const ADDR: u8 = 0x60;

    /// Bus transactions issued by chip initialization
    const INIT_LEN: usize = 13;

    fn w(reg: u8, value: u8) -> I2cTransaction {
        I2cTransaction::Write {
            addr: ADDR,
            data: vec![reg, value],
        }
    }

    /// The four writes encoding a full-on channel (on=4096, off=0)
    fn pin_high(channel: u8) -> [I2cTransaction; 4] {
        let base = 0x06 + 4 * channel;
        [
            w(base, 0x00),
            w(base + 1, 0x10),
            w(base + 2, 0x00),
            w(base + 3, 0x00),
        ]
    }

    /// The four writes encoding a full-off channel (on=0, off=4096)
    fn pin_low(channel: u8) -> [I2cTransaction; 4] {
        let base = 0x06 + 4 * channel;
        [
            w(base, 0x00),
            w(base + 1, 0x00),
            w(base + 2, 0x00),
            w(base + 3, 0x10),
        ]
    }

    fn new_hat() -> MotorHat<MockI2c, MockTimer> {
        MotorHat::new(MockI2c::new(), MockTimer::new(), Pca9685Config::default()).unwrap()
    }

    fn commands(hat: MotorHat<MockI2c, MockTimer>) -> Vec<I2cTransaction> {
        let (i2c, _) = hat.release();
        i2c.transactions().split_off(INIT_LEN)
    }

    #[test]
    fn test_set_speed_duty_encoding() {
        let mut hat = new_hat();
        hat.set_speed(1, 128).unwrap();

        // motor 1 PWM channel is 8, base register 0x26; off = 128 * 16 = 2048
        assert_eq!(
            commands(hat),
            vec![w(0x26, 0x00), w(0x27, 0x00), w(0x28, 0x00), w(0x29, 0x08)]
        );
    }

    #[test]
    fn test_set_speed_clamps_low() {
        let mut hat = new_hat();
        hat.set_speed(1, -42).unwrap();

        assert_eq!(
            commands(hat),
            vec![w(0x26, 0x00), w(0x27, 0x00), w(0x28, 0x00), w(0x29, 0x00)]
        );
    }

    #[test]
    fn test_set_speed_clamps_high() {
        let mut hat = new_hat();
        hat.set_speed(1, 300).unwrap();

        // clamped to 255, off = 4080 = 0x0FF0
        assert_eq!(
            commands(hat),
            vec![w(0x26, 0x00), w(0x27, 0x00), w(0x28, 0xF0), w(0x29, 0x0F)]
        );
    }

    #[test]
    fn test_forward_motor3() {
        let mut hat = new_hat();
        hat.forward(3).unwrap();

        // motor 3: in1 = channel 4, in2 = channel 3
        let mut expected = Vec::new();
        expected.extend(pin_high(4));
        expected.extend(pin_low(3));
        assert_eq!(commands(hat), expected);
    }

    #[test]
    fn test_backward_motor3() {
        let mut hat = new_hat();
        hat.backward(3).unwrap();

        let mut expected = Vec::new();
        expected.extend(pin_low(4));
        expected.extend(pin_high(3));
        assert_eq!(commands(hat), expected);
    }

    #[test]
    fn test_stop_motor3() {
        let mut hat = new_hat();
        hat.stop(3).unwrap();

        let mut expected = Vec::new();
        expected.extend(pin_low(4));
        expected.extend(pin_low(3));
        assert_eq!(commands(hat), expected);
    }

    #[test]
    fn test_unknown_motor_issues_no_io() {
        let mut hat = new_hat();

        assert_eq!(hat.set_speed(0, 100), Err(MotorHatError::UnknownMotor(0)));
        assert_eq!(hat.forward(5), Err(MotorHatError::UnknownMotor(5)));
        assert_eq!(hat.backward(0), Err(MotorHatError::UnknownMotor(0)));
        assert_eq!(hat.stop(5), Err(MotorHatError::UnknownMotor(5)));

        assert!(commands(hat).is_empty());
    }
}
