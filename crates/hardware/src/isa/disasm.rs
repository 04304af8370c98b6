//! Instruction Disassembler for RV32I.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, register dumps, and test diagnostics.
//!
//! # Supported Encodings
//!
//! - RV32I (base integer, FENCE, FENCE.I)
//! - SYSTEM (ECALL, EBREAK, MRET, WFI, CSR access)
//!
//! # Usage
//!
//! ```
//! use rvseq_core::isa::disasm::disassemble;
//! let text = disassemble(0x00A00513); // ADDI x10, x0, 10
//! assert_eq!(text, "addi a0, zero, 10");
//! ```

use crate::isa::abi::name as xreg;
use crate::isa::decode::decode;
use crate::isa::instruction::{InstructionBits, OpClass};
use crate::isa::privileged::opcodes as sys_op;
use crate::isa::rv32i::{funct3 as i_f3, funct7 as i_f7};

/// Disassembles a 32-bit RV32I instruction into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"` or `"unknown"` for
/// unrecognised encodings. Branch and jump offsets are printed relative to
/// the instruction's own address.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    let d = decode(inst);
    let (rd, rs1, rs2, f3, imm) = (xreg(d.rd), xreg(d.rs1), xreg(d.rs2), d.funct3, d.imm);

    match d.class {
        OpClass::RegReg => {
            let mn = match (f3, d.funct7) {
                (i_f3::ADD_SUB, i_f7::DEFAULT) => "add",
                (i_f3::ADD_SUB, i_f7::SUB) => "sub",
                (i_f3::SLL, i_f7::DEFAULT) => "sll",
                (i_f3::SLT, i_f7::DEFAULT) => "slt",
                (i_f3::SLTU, i_f7::DEFAULT) => "sltu",
                (i_f3::XOR, i_f7::DEFAULT) => "xor",
                (i_f3::SRL_SRA, i_f7::DEFAULT) => "srl",
                (i_f3::SRL_SRA, i_f7::SRA) => "sra",
                (i_f3::OR, i_f7::DEFAULT) => "or",
                (i_f3::AND, i_f7::DEFAULT) => "and",
                _ => return unknown(inst),
            };
            format!("{mn} {rd}, {rs1}, {rs2}")
        }
        OpClass::RegImm => {
            let shamt = inst.rs2();
            match (f3, d.funct7) {
                (i_f3::SLL, i_f7::DEFAULT) => format!("slli {rd}, {rs1}, {shamt}"),
                (i_f3::SRL_SRA, i_f7::DEFAULT) => format!("srli {rd}, {rs1}, {shamt}"),
                (i_f3::SRL_SRA, i_f7::SRA) => format!("srai {rd}, {rs1}, {shamt}"),
                (i_f3::SLL | i_f3::SRL_SRA, _) => unknown(inst),
                _ => {
                    let mn = match f3 {
                        i_f3::ADD_SUB => "addi",
                        i_f3::SLT => "slti",
                        i_f3::SLTU => "sltiu",
                        i_f3::XOR => "xori",
                        i_f3::OR => "ori",
                        _ => "andi",
                    };
                    format!("{mn} {rd}, {rs1}, {imm}")
                }
            }
        }
        OpClass::Load => {
            let mn = match f3 {
                i_f3::LB => "lb",
                i_f3::LH => "lh",
                i_f3::LW => "lw",
                i_f3::LBU => "lbu",
                i_f3::LHU => "lhu",
                _ => return unknown(inst),
            };
            format!("{mn} {rd}, {imm}({rs1})")
        }
        OpClass::Store => {
            let mn = match f3 {
                i_f3::SB => "sb",
                i_f3::SH => "sh",
                i_f3::SW => "sw",
                _ => return unknown(inst),
            };
            format!("{mn} {rs2}, {imm}({rs1})")
        }
        OpClass::Branch => {
            let mn = match f3 {
                i_f3::BEQ => "beq",
                i_f3::BNE => "bne",
                i_f3::BLT => "blt",
                i_f3::BGE => "bge",
                i_f3::BLTU => "bltu",
                i_f3::BGEU => "bgeu",
                _ => return unknown(inst),
            };
            format!("{mn} {rs1}, {rs2}, {imm:+}")
        }
        OpClass::Jal => format!("jal {rd}, {imm:+}"),
        OpClass::Jalr if f3 == i_f3::JALR => format!("jalr {rd}, {imm}({rs1})"),
        OpClass::Lui => format!("lui {rd}, {:#x}", (imm as u32) >> 12),
        OpClass::Auipc => format!("auipc {rd}, {:#x}", (imm as u32) >> 12),
        OpClass::MiscMem => match f3 {
            i_f3::FENCE => "fence".to_string(),
            i_f3::FENCE_I => "fence.i".to_string(),
            _ => unknown(inst),
        },
        OpClass::System => disasm_system(inst),
        OpClass::Jalr | OpClass::Invalid => unknown(inst),
    }
}

/// Disassembles a SYSTEM-opcode instruction.
fn disasm_system(inst: u32) -> String {
    match inst {
        sys_op::ECALL => return "ecall".to_string(),
        sys_op::EBREAK => return "ebreak".to_string(),
        sys_op::MRET => return "mret".to_string(),
        sys_op::WFI => return "wfi".to_string(),
        _ => {}
    }

    let (rd, rs1, csr) = (xreg(inst.rd()), inst.rs1(), inst.csr());
    match inst.funct3() {
        sys_op::PRIV => unknown(inst),
        sys_op::CSRRW => format!("csrrw {rd}, {csr:#x}, {}", xreg(rs1)),
        sys_op::CSRRS => format!("csrrs {rd}, {csr:#x}, {}", xreg(rs1)),
        sys_op::CSRRC => format!("csrrc {rd}, {csr:#x}, {}", xreg(rs1)),
        sys_op::CSRRWI => format!("csrrwi {rd}, {csr:#x}, {rs1}"),
        sys_op::CSRRSI => format!("csrrsi {rd}, {csr:#x}, {rs1}"),
        sys_op::CSRRCI => format!("csrrci {rd}, {csr:#x}, {rs1}"),
        _ => unknown(inst),
    }
}

/// Placeholder text for encodings the core retires as no-ops.
fn unknown(inst: u32) -> String {
    format!("unknown ({inst:#010x})")
}
