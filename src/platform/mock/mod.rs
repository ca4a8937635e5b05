//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! The mock types allocate, so embedded targets should leave the `mock`
//! feature disabled.
//!
//! # Example
//!
//! ```
//! use motor_hat::platform::mock::MockI2c;
//! use motor_hat::platform::traits::I2cInterface;
//!
//! let mut i2c = MockI2c::new();
//! i2c.write(0x60, &[0x00, 0x01]).unwrap();
//! assert_eq!(i2c.transactions().len(), 1);
//! ```

#![cfg(any(test, feature = "mock"))]

mod i2c;
mod timer;

pub use i2c::{I2cTransaction, MockI2c};
pub use timer::MockTimer;
