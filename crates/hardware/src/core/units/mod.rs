//! Execution units.
//!
//! Stateless combinational units of the single-cycle datapath: the integer
//! ALU, the branch condition evaluator, and the load/store lane logic.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch resolution unit (condition evaluation).
pub mod bru;

/// Load/Store Unit (byte lanes and load extension).
pub mod lsu;
