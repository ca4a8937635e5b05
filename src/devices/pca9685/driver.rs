//! PCA9685 I2C Driver Implementation
//!
//! Register-level driver for the 16-channel, 12-bit PWM controller.

use super::registers;
use crate::platform::{I2cInterface, Result, TimerInterface};

/// Oscillator stabilization time after waking the chip
const OSC_STABILIZE_MS: u32 = 5;

/// PCA9685 driver configuration
#[derive(Debug, Clone, Copy)]
pub struct Pca9685Config {
    /// 7-bit I2C device address
    pub address: u8,
    /// Base PWM frequency applied during initialization, in Hz
    pub pwm_freq_hz: u16,
}

impl Default for Pca9685Config {
    fn default() -> Self {
        Self {
            address: registers::DEFAULT_ADDRESS,
            pwm_freq_hz: 1600,
        }
    }
}

/// PCA9685 16-channel PWM controller driver
///
/// Owns its bus and timer exclusively; every operation is a bounded sequence
/// of blocking register transactions. Construction runs the full chip
/// initialization, so no channel operation is reachable on an uninitialized
/// chip.
///
/// Multi-register sequences short-circuit on the first bus failure: remaining
/// writes are skipped and the error surfaces to the caller. The chip may be
/// left with a partially-applied state in that case; the bus failure itself
/// means the device is not reliably reachable.
pub struct Pca9685<I2C, TIMER> {
    /// I2C bus handle
    i2c: I2C,

    /// Delay provider for oscillator stabilization waits
    timer: TIMER,

    /// Resolved 7-bit device address
    address: u8,
}

impl<I2C, TIMER> Pca9685<I2C, TIMER>
where
    I2C: I2cInterface,
    TIMER: TimerInterface,
{
    /// Create and initialize a new PCA9685 driver
    ///
    /// Clears every channel, configures the mode registers, wakes the
    /// oscillator and applies the configured base PWM frequency.
    ///
    /// # Errors
    ///
    /// Returns the first bus failure encountered. The consumed bus handle is
    /// dropped (and thereby released) on failure; the chip may be left in an
    /// indeterminate low-power state.
    pub fn new(i2c: I2C, timer: TIMER, config: Pca9685Config) -> Result<Self> {
        let mut driver = Self {
            i2c,
            timer,
            address: config.address,
        };

        driver.init(config.pwm_freq_hz)?;
        Ok(driver)
    }

    /// Initialize the PCA9685
    fn init(&mut self, freq_hz: u16) -> Result<()> {
        // Step 1: Force every channel off regardless of prior chip state
        self.set_all_pwm(0, 0)?;

        // Step 2: Totem-pole outputs, respond to all-call
        self.write_register(registers::MODE2, registers::MODE2_OUTDRV)?;
        self.write_register(registers::MODE1, registers::MODE1_ALLCALL)?;
        self.timer.delay_ms(OSC_STABILIZE_MS);

        // Step 3: Wake the oscillator
        let mode1 = self.read_register(registers::MODE1)?;
        self.write_register(registers::MODE1, mode1 & !registers::MODE1_SLEEP)?;
        self.timer.delay_ms(OSC_STABILIZE_MS);

        // Step 4: Apply the base PWM frequency
        self.set_pwm_freq(freq_hz)?;

        crate::log_info!("PCA9685 at {:#x} initialized ({} Hz)", self.address, freq_hz);
        Ok(())
    }

    /// Set the chip-wide PWM frequency
    ///
    /// The prescaler can only be written while the chip sleeps, so this
    /// performs the full sleep / write / restore / restart sequence with the
    /// required oscillator stabilization wait.
    ///
    /// # Errors
    ///
    /// Returns the first bus failure; later steps are skipped, so the chip is
    /// not guaranteed to have been woken back up. Callers must treat a
    /// failure here as leaving the chip in an indeterminate low-power state.
    pub fn set_pwm_freq(&mut self, freq_hz: u16) -> Result<()> {
        let prescale = registers::prescale_from_hz(freq_hz);

        let old_mode = self.read_register(registers::MODE1)?;

        // Restart must not be written together with sleep
        let sleep_mode = (old_mode & !registers::MODE1_RESTART) | registers::MODE1_SLEEP;
        self.write_register(registers::MODE1, sleep_mode)?;
        self.write_register(registers::PRESCALE, prescale)?;
        self.write_register(registers::MODE1, old_mode)?;
        self.timer.delay_ms(OSC_STABILIZE_MS);
        self.write_register(registers::MODE1, old_mode | registers::MODE1_RESTART)?;

        Ok(())
    }

    /// Set one channel's 12-bit on/off counters
    ///
    /// `on` and `off` are the tick indices within the 4096-tick period at
    /// which the output turns on and off. Writing [`registers::FULL_SCALE`]
    /// (bit 12) to `on` forces the channel permanently high; to `off`,
    /// permanently low. Bits above the register width are dropped by the
    /// byte encoding.
    ///
    /// `channel` must be in `0..16`.
    pub fn set_pwm(&mut self, channel: u8, on: u16, off: u16) -> Result<()> {
        debug_assert!(channel < registers::CHANNEL_COUNT);
        let base = registers::channel_base(channel);

        self.write_register(base, (on & 0xFF) as u8)?;
        self.write_register(base + 1, (on >> 8) as u8)?;
        self.write_register(base + 2, (off & 0xFF) as u8)?;
        self.write_register(base + 3, (off >> 8) as u8)?;

        Ok(())
    }

    /// Set every channel's counters at once via the broadcast registers
    pub fn set_all_pwm(&mut self, on: u16, off: u16) -> Result<()> {
        self.write_register(registers::ALL_LED_ON_L, (on & 0xFF) as u8)?;
        self.write_register(registers::ALL_LED_ON_H, (on >> 8) as u8)?;
        self.write_register(registers::ALL_LED_OFF_L, (off & 0xFF) as u8)?;
        self.write_register(registers::ALL_LED_OFF_H, (off >> 8) as u8)?;

        Ok(())
    }

    /// Drive a channel as a digital pin
    ///
    /// `1` forces the output permanently high, `0` permanently low. Any other
    /// value leaves the channel unchanged; only binary direction pins use
    /// this call, so out-of-range values are deliberately ignored rather
    /// than rejected.
    pub fn set_pin(&mut self, channel: u8, value: u8) -> Result<()> {
        match value {
            1 => self.set_pwm(channel, registers::FULL_SCALE, 0),
            0 => self.set_pwm(channel, 0, registers::FULL_SCALE),
            _ => {
                crate::log_warn!("ignoring non-binary value {} for channel {}", value, channel);
                Ok(())
            }
        }
    }

    /// Release the bus and timer
    pub fn release(self) -> (I2C, TIMER) {
        (self.i2c, self.timer)
    }

    /// Write a single register
    fn write_register(&mut self, reg: u8, value: u8) -> Result<()> {
        self.i2c.write(self.address, &[reg, value])
    }

    /// Read a single register
    fn read_register(&mut self, reg: u8) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(self.address, &[reg], &mut buf)?;
        Ok(buf[0])
    }
}
