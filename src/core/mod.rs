//! Core systems
//!
//! Target-independent support code shared by the device drivers.

pub mod logging;
