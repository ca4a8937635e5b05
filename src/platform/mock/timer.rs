//! Mock Timer implementation for testing

use crate::platform::traits::TimerInterface;

/// Mock Timer implementation
///
/// Uses simulated time for delays in test environment. The accumulated delay
/// total can be inspected to verify timing-sensitive register sequences.
#[derive(Debug, Default)]
pub struct MockTimer {
    elapsed_us: u64,
}

impl MockTimer {
    /// Create a new mock timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Total simulated delay issued so far, in microseconds
    pub fn elapsed_us(&self) -> u64 {
        self.elapsed_us
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u32) {
        // Simulated time only; no real blocking in tests
        self.elapsed_us = self.elapsed_us.wrapping_add(us as u64);
    }
}
