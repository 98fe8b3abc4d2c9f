//! Shared utilities.
//!
//! Currently just frame timing for hosts that don't measure their own step.

/// Frame step measurement.
pub mod frame_timing;

pub use frame_timing::FrameClock;
