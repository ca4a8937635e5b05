//! Device drivers
//!
//! This module contains device drivers that use platform abstraction traits,
//! so the same driver code runs against real hardware and the mock platform.
//!
//! ## Modules
//!
//! - `pca9685`: PCA9685 16-channel PWM controller driver
//! - `motor_hat`: DC motor HAT built on the PCA9685
pub mod motor_hat;
pub mod pca9685;
