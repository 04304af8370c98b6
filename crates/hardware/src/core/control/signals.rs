//! Execution control signals and operation types.
//!
//! This module defines the signals that steer one instruction through the single-cycle datapath.
//! It performs:
//! 1. **Operation Classification:** The ALU operations of the integer subset.
//! 2. **Operand Selection:** Sources for ALU inputs (registers, PC, zero, or the immediate).
//! 3. **Memory Control:** Access widths and sign-extension requirements.
//! 4. **Writeback and PC Control:** Writeback source and next-PC selection.

use crate::common::data::MemWidth;

/// ALU operation types for the RV32I integer subset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Integer addition (also used for address and target generation).
    #[default]
    Add,

    /// Integer subtraction.
    Sub,

    /// Shift left logical.
    Sll,

    /// Set less than (signed).
    Slt,

    /// Set less than unsigned.
    Sltu,

    /// Bitwise XOR.
    Xor,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,

    /// Bitwise OR.
    Or,

    /// Bitwise AND.
    And,
}

/// Source for ALU operand A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpASrc {
    /// Use `rs1` register value.
    #[default]
    Reg1,

    /// Use program counter value.
    Pc,

    /// Use zero.
    Zero,
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Use sign-extended immediate value.
    #[default]
    Imm,

    /// Use `rs2` register value.
    Reg2,
}

/// Source of the value committed to `rd`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WbSrc {
    /// ALU result.
    #[default]
    Alu,

    /// Extended load data from the data port.
    Mem,

    /// Link address (PC + 4) for jumps.
    PcPlus4,
}

/// Next program counter selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PcSrc {
    /// Sequential: PC + 4.
    #[default]
    Next,

    /// PC + immediate if the branch condition holds, PC + 4 otherwise.
    Branch,

    /// PC + immediate unconditionally (JAL).
    Jump,

    /// ALU result (rs1 + immediate) with bit 0 cleared (JALR).
    JumpReg,
}

/// Control signals for single-cycle execution.
///
/// Generated from a decoded instruction; the all-default value is the no-op word used for
/// malformed encodings (no writeback, no memory request, sequential PC).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Width of memory access.
    pub width: MemWidth,
    /// Load should be sign-extended.
    pub signed_load: bool,
    /// ALU operation to perform.
    pub alu: AluOp,
    /// Source selection for ALU operand A.
    pub a_src: OpASrc,
    /// Source selection for ALU operand B.
    pub b_src: OpBSrc,
    /// Source selection for the writeback value.
    pub wb_src: WbSrc,
    /// Next-PC selection.
    pub pc_src: PcSrc,
    /// Instruction is `WFI`.
    pub is_wfi: bool,
    /// Instruction has a defined architectural meaning on this core.
    pub legal: bool,
}

impl ControlSignals {
    /// Control word for an instruction with no architectural effect.
    pub const NOP: Self = Self {
        reg_write: false,
        mem_read: false,
        mem_write: false,
        width: MemWidth::Nop,
        signed_load: false,
        alu: AluOp::Add,
        a_src: OpASrc::Reg1,
        b_src: OpBSrc::Imm,
        wb_src: WbSrc::Alu,
        pc_src: PcSrc::Next,
        is_wfi: false,
        legal: false,
    };

    /// Returns true when the instruction issues a data-port request.
    pub const fn accesses_memory(&self) -> bool {
        self.mem_read || self.mem_write
    }
}
