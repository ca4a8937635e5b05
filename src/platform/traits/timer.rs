//! Timer interface trait
//!
//! This module defines the blocking delay interface that platform
//! implementations must provide. The PCA9685 requires fixed waits for
//! oscillator stabilization during initialization and frequency changes,
//! which go through this trait so tests can substitute simulated time.

/// Timer interface trait
///
/// Delays are real-time constraints on hardware; implementations must block
/// for at least the requested duration.
pub trait TimerInterface {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        self.delay_us(ms.saturating_mul(1000));
    }
}
