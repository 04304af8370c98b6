//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU of the single-cycle datapath.
//! It handles addition, subtraction, bitwise logic, comparisons and shifts for
//! the RV32I base set; every result wraps modulo 2^32.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::core::control::signals::AluOp;
use crate::isa::instruction::OpClass;
use crate::isa::rv32i::funct3;

/// Selects the ALU operation for an instruction class and function code.
///
/// Register-register forms honour the alternate bit for `ADD/SUB` and `SRL/SRA`;
/// register-immediate forms honour it only for `SRLI/SRAI`, since `ADDI` has no
/// subtracting twin. Every other class computes an address or sum and uses `Add`.
pub const fn op_for(class: OpClass, f3: u32, alt: bool) -> AluOp {
    match class {
        OpClass::RegReg | OpClass::RegImm => match f3 {
            funct3::ADD_SUB if alt && matches!(class, OpClass::RegReg) => AluOp::Sub,
            funct3::ADD_SUB => AluOp::Add,
            funct3::SLL => AluOp::Sll,
            funct3::SLT => AluOp::Slt,
            funct3::SLTU => AluOp::Sltu,
            funct3::XOR => AluOp::Xor,
            funct3::SRL_SRA if alt => AluOp::Sra,
            funct3::SRL_SRA => AluOp::Srl,
            funct3::OR => AluOp::Or,
            _ => AluOp::And,
        },
        _ => AluOp::Add,
    }
}

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// Stateless; both operands and the result are 32-bit words.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (only the low five bits are used as a shift amount)
    ///
    /// # Examples
    ///
    /// ```
    /// use rvseq_core::core::units::alu::Alu;
    /// use rvseq_core::core::control::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1), 0);
    /// assert_eq!(Alu::execute(AluOp::Sll, 0x1, 36), 0x10);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10), 1);
    /// assert_eq!(Alu::execute(AluOp::Sltu, -5_i32 as u32, 10), 0);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }

    /// Computes a result directly from the instruction class and function code.
    ///
    /// Equivalent to `Alu::execute(op_for(class, f3, alt), op1, op2)`.
    pub fn evaluate(op1: u32, op2: u32, class: OpClass, f3: u32, alt: bool) -> u32 {
        Self::execute(op_for(class, f3, alt), op1, op2)
    }
}
