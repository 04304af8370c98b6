//! Simulation driver and program loading.
//!
//! Provides the loader that turns files into memory images and the simulator that clocks the
//! core against the reference memory side.

/// Flat-binary and ELF image loading.
pub mod loader;

/// Top-level simulator and run loop.
pub mod simulator;

pub use loader::{Image, load_image};
pub use simulator::{RunOutcome, Simulator};
