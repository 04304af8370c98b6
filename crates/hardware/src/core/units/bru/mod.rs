//! Branch resolution unit (BRU).
//!
//! Evaluates the six RV32I branch conditions on two register values. The
//! single-cycle core has no predictor: every branch is resolved in the cycle
//! it executes, and the result feeds next-PC selection directly.

use crate::isa::rv32i::funct3;

/// Evaluates a conditional branch.
///
/// Returns `None` for the two reserved `funct3` encodings (`0b010`, `0b011`).
///
/// # Arguments
///
/// * `f3` - Branch `funct3` field.
/// * `a`  - Value of `rs1`.
/// * `b`  - Value of `rs2`.
pub const fn taken(f3: u32, a: u32, b: u32) -> Option<bool> {
    let cond = match f3 {
        funct3::BEQ => a == b,
        funct3::BNE => a != b,
        funct3::BLT => (a as i32) < (b as i32),
        funct3::BGE => (a as i32) >= (b as i32),
        funct3::BLTU => a < b,
        funct3::BGEU => a >= b,
        _ => return None,
    };
    Some(cond)
}
