//! Execution core.
//!
//! This module contains the single-cycle RV32I core: its run states, the control-signal
//! generator, the stateless functional units, the port handshake, and the `Core` that ties
//! them together one clock edge at a time.

/// Architectural state definitions (run states).
pub mod arch;

/// Instruction and data port request/response types and the `CoreBus` trait.
pub mod bus;

/// Control-signal generation from decoded instructions.
pub mod control;

/// Core state and the per-cycle step function.
pub mod cpu;

/// Functional units (ALU, branch conditions, load/store lanes).
pub mod units;

pub use self::bus::CoreBus;
pub use self::cpu::Core;
