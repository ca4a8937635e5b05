#![cfg_attr(not(test), no_std)]

//! motor_hat - PCA9685-based DC motor HAT driver
//!
//! This library drives up to four DC motors through a PCA9685 16-channel PWM
//! controller reachable over I2C, as found on Adafruit-style motor HATs.
//! It is split into a platform abstraction layer (bus and timer traits with
//! mock implementations for host testing) and device drivers built on top of
//! those traits.

#[cfg(any(test, feature = "mock"))]
extern crate alloc;

#[cfg(feature = "linux")]
extern crate std;

// Platform abstraction layer (I2C bus, timers, mocks)
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;

// Core systems (logging)
pub mod core;

pub use devices::motor_hat::{MotorHat, MotorHatError};
pub use devices::pca9685::{Pca9685, Pca9685Config};
