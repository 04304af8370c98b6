//! RV32I sequencer core library.
//!
//! This crate implements a cycle-accurate, single-cycle RV32I execution core with the following:
//! 1. **Core:** Fetch, decode, execute and writeback committed on one clock edge, with a
//!    stallable request/ready handshake on the instruction and data ports.
//! 2. **Run control:** Run-enable gating, a wait-for-interrupt state machine woken by a level
//!    check on the interrupt vector or debug request, and a scan override that freezes execution.
//! 3. **ISA:** Decoding, disassembly and field extraction for the RV32I base integer set.
//! 4. **SoC:** A reference memory side (flat memory, wait states, error injection).
//! 5. **Simulation:** Loader, configuration, and statistics collection.

/// Common types and constants (register file, access widths, errors).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// Execution core (run state, control signals, functional units, port handshake).
pub mod core;
/// Instruction set (decode, instruction fields, ABI names, RV32I, privileged).
pub mod isa;
/// Binary loader and the top-level simulator.
pub mod sim;
/// Reference memory side (flat memory, wait-state model, `CoreBus` implementation).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main core type; holds the register file, program counter and run state.
pub use crate::core::Core;
/// Top-level simulator (core + memory side + statistics).
pub use crate::sim::Simulator;
/// Reference memory side implementing both ports.
pub use crate::soc::System;
