//! Common utilities and types used throughout the RV32I sequencer core.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Word width, reset address and register count.
//! 2. **Memory Access:** Access kinds, widths and byte-lane masks for the data port.
//! 3. **Error Handling:** The host-side `SimError` type for loading and configuration.
//! 4. **Register Management:** The 32-entry general-purpose register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types for host-side operations.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{INSTRUCTION_SIZE, NUM_REGS, RESET_PC};
pub use data::{AccessType, MemWidth};
pub use error::SimError;
pub use reg::RegisterFile;
