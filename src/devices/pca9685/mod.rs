//! PCA9685 16-channel PWM controller driver
//!
//! Split into `registers` (register map and prescale math) and `driver`
//! (the bus-facing driver), mirroring the other register-addressed device
//! drivers in this crate's lineage.

pub mod driver;
pub mod registers;

pub use driver::{Pca9685, Pca9685Config};
