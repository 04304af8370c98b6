//! Control-signal generation.
//!
//! This module turns a decoded instruction into the signals that steer the single-cycle
//! datapath. It performs the following:
//! 1. **Operand Routing:** Register-register forms read two registers; every other class
//!    substitutes the immediate for operand B, and the upper-immediate classes replace
//!    operand A with zero (LUI) or the PC (AUIPC).
//! 2. **Memory Control:** Access width and signedness from `funct3` for loads and stores.
//! 3. **Flow Control:** Next-PC selection for branches and jumps, and the link writeback.
//! 4. **Legality:** Any encoding outside RV32I + WFI yields [`ControlSignals::NOP`].

/// Control signal and operand-source definitions.
pub mod signals;

use crate::common::data::MemWidth;
use crate::core::units::{alu, bru};
use crate::isa::instruction::{Decoded, OpClass};
use crate::isa::privileged::opcodes as sys_ops;
use crate::isa::rv32i::{funct3 as i_funct3, funct7 as i_funct7};

pub use signals::{AluOp, ControlSignals, OpASrc, OpBSrc, PcSrc, WbSrc};

/// Generates the control signals for a decoded instruction.
///
/// Malformed or unsupported encodings return [`ControlSignals::NOP`] so the controller
/// retires them without architectural effect.
///
/// # Arguments
///
/// * `d` - The decoded instruction.
pub fn generate(d: &Decoded) -> ControlSignals {
    let base = ControlSignals {
        legal: true,
        alu: alu::op_for(d.class, d.funct3, d.alt),
        b_src: if d.class.uses_rs2_operand() {
            OpBSrc::Reg2
        } else {
            OpBSrc::Imm
        },
        ..ControlSignals::NOP
    };

    match d.class {
        OpClass::RegReg => {
            let alt_allowed = matches!(d.funct3, i_funct3::ADD_SUB | i_funct3::SRL_SRA);
            let funct7_ok = d.funct7 == i_funct7::DEFAULT || (alt_allowed && d.funct7 == i_funct7::SUB);
            if !funct7_ok {
                return ControlSignals::NOP;
            }
            ControlSignals {
                reg_write: true,
                ..base
            }
        }
        OpClass::RegImm => {
            // Shift immediates reuse the funct7 slot; only SRAI may set the alternate bit.
            let shift_ok = match d.funct3 {
                i_funct3::SLL => d.funct7 == i_funct7::DEFAULT,
                i_funct3::SRL_SRA => d.funct7 == i_funct7::DEFAULT || d.funct7 == i_funct7::SRA,
                _ => true,
            };
            if !shift_ok {
                return ControlSignals::NOP;
            }
            ControlSignals {
                reg_write: true,
                ..base
            }
        }
        OpClass::Load => {
            let (width, signed_load) = match d.funct3 {
                i_funct3::LB => (MemWidth::Byte, true),
                i_funct3::LH => (MemWidth::Half, true),
                i_funct3::LW => (MemWidth::Word, true),
                i_funct3::LBU => (MemWidth::Byte, false),
                i_funct3::LHU => (MemWidth::Half, false),
                _ => return ControlSignals::NOP,
            };
            ControlSignals {
                reg_write: true,
                mem_read: true,
                width,
                signed_load,
                wb_src: WbSrc::Mem,
                ..base
            }
        }
        OpClass::Store => {
            let width = match d.funct3 {
                i_funct3::SB => MemWidth::Byte,
                i_funct3::SH => MemWidth::Half,
                i_funct3::SW => MemWidth::Word,
                _ => return ControlSignals::NOP,
            };
            ControlSignals {
                mem_write: true,
                width,
                ..base
            }
        }
        OpClass::Branch => {
            if bru::taken(d.funct3, 0, 0).is_none() {
                return ControlSignals::NOP;
            }
            ControlSignals {
                pc_src: PcSrc::Branch,
                ..base
            }
        }
        OpClass::Jal => ControlSignals {
            reg_write: true,
            a_src: OpASrc::Pc,
            wb_src: WbSrc::PcPlus4,
            pc_src: PcSrc::Jump,
            ..base
        },
        OpClass::Jalr => {
            if d.funct3 != i_funct3::JALR {
                return ControlSignals::NOP;
            }
            ControlSignals {
                reg_write: true,
                wb_src: WbSrc::PcPlus4,
                pc_src: PcSrc::JumpReg,
                ..base
            }
        }
        OpClass::Lui => ControlSignals {
            reg_write: true,
            a_src: OpASrc::Zero,
            ..base
        },
        OpClass::Auipc => ControlSignals {
            reg_write: true,
            a_src: OpASrc::Pc,
            ..base
        },
        OpClass::MiscMem => match d.funct3 {
            i_funct3::FENCE | i_funct3::FENCE_I => base,
            _ => ControlSignals::NOP,
        },
        OpClass::System if d.raw == sys_ops::WFI => ControlSignals {
            is_wfi: true,
            ..base
        },
        OpClass::System | OpClass::Invalid => ControlSignals::NOP,
    }
}
