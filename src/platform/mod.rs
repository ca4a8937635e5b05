//! Platform abstraction layer
//!
//! This module provides hardware abstraction so the device drivers can run
//! unchanged against a real I2C bus, an `embedded-hal` implementation, a
//! Linux `/dev/i2c-N` device, or the mock platform used in tests.

pub mod error;
pub mod hal;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "linux")]
pub mod linux;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{I2cError, PlatformError, Result};
pub use traits::{I2cInterface, TimerInterface};
