//! RV32I Instruction Decoder.
//!
//! This module handles the decoding of 32-bit RISC-V instruction encodings into
//! a structured `Decoded` format. It extracts opcodes, register indices, function
//! codes, classifies the operation, and handles the sign-extension of immediate
//! values for all instruction formats (R, I, S, B, U, J).
//!
//! Decoding is stateless and infallible: an unrecognized opcode decodes to
//! [`OpClass::Invalid`], which the execution controller retires as a no-op.

use crate::isa::instruction::{Decoded, InstructionBits, OpClass};
use crate::isa::privileged::opcodes as sys_opcodes;
use crate::isa::rv32i::opcodes;

/// Total width of a RISC-V instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

// I-Type: `imm[11:0] | rs1 | funct3 | rd | opcode`. Arithmetic shift of the whole word.
const I_IMM_SHIFT: u32 = 20;

// S-Type: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`.
const S_IMM_LOW_SHIFT: u32 = 7;
const S_IMM_LOW_MASK: u32 = 0x1F;
const S_IMM_HIGH_SHIFT: u32 = 25;
const S_IMM_HIGH_MASK: u32 = 0x7F;
const S_IMM_COMBINED_SHIFT: u32 = 5;
const S_IMM_BITS: u32 = 12;

// B-Type: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`.
// Source positions in the instruction word.
const B_IMM_11_SHIFT: u32 = 7;
const B_IMM_11_MASK: u32 = 1;
const B_IMM_4_1_SHIFT: u32 = 8;
const B_IMM_4_1_MASK: u32 = 0xF;
const B_IMM_10_5_SHIFT: u32 = 25;
const B_IMM_10_5_MASK: u32 = 0x3F;
const B_IMM_12_SHIFT: u32 = 31;
const B_IMM_12_MASK: u32 = 1;
// Destination positions in the reassembled 13-bit offset (bit 0 is always zero).
const B_IMM_BITS: u32 = 13;
const B_IMM_12_POS: u32 = 12;
const B_IMM_11_POS: u32 = 11;
const B_IMM_10_5_POS: u32 = 5;
const B_IMM_4_1_POS: u32 = 1;

// U-Type: `imm[31:12] | rd | opcode`. Upper 20 bits kept in place, low 12 zero.
const U_IMM_MASK: u32 = 0xFFFF_F000;

// J-Type: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`.
const J_IMM_19_12_SHIFT: u32 = 12;
const J_IMM_19_12_MASK: u32 = 0xFF;
const J_IMM_11_SHIFT: u32 = 20;
const J_IMM_11_MASK: u32 = 1;
const J_IMM_10_1_SHIFT: u32 = 21;
const J_IMM_10_1_MASK: u32 = 0x3FF;
const J_IMM_20_SHIFT: u32 = 31;
const J_IMM_20_MASK: u32 = 1;
// Destination positions in the reassembled 21-bit offset (bit 0 is always zero).
const J_IMM_BITS: u32 = 21;
const J_IMM_20_POS: u32 = 20;
const J_IMM_19_12_POS: u32 = 12;
const J_IMM_11_POS: u32 = 11;
const J_IMM_10_1_POS: u32 = 1;

/// Decodes an RV32I instruction into its component fields.
///
/// Extracts opcode, register fields, function codes, the operation class and
/// the extended immediate from a 32-bit instruction encoding.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
///
/// # Returns
///
/// A `Decoded` structure containing all extracted instruction fields.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();

    let (class, imm) = match opcode {
        opcodes::OP_REG => (OpClass::RegReg, 0),
        opcodes::OP_IMM => (OpClass::RegImm, decode_i_type_imm(inst)),
        opcodes::OP_LOAD => (OpClass::Load, decode_i_type_imm(inst)),
        opcodes::OP_JALR => (OpClass::Jalr, decode_i_type_imm(inst)),
        opcodes::OP_STORE => (OpClass::Store, decode_s_type_imm(inst)),
        opcodes::OP_BRANCH => (OpClass::Branch, decode_b_type_imm(inst)),
        opcodes::OP_LUI => (OpClass::Lui, decode_u_type_imm(inst)),
        opcodes::OP_AUIPC => (OpClass::Auipc, decode_u_type_imm(inst)),
        opcodes::OP_JAL => (OpClass::Jal, decode_j_type_imm(inst)),
        opcodes::OP_MISC_MEM => (OpClass::MiscMem, decode_i_type_imm(inst)),
        sys_opcodes::OP_SYSTEM => (OpClass::System, decode_i_type_imm(inst)),
        _ => (OpClass::Invalid, 0),
    };

    Decoded {
        raw: inst,
        opcode,
        class,
        rd: InstructionBits::rd(&inst),
        rs1: InstructionBits::rs1(&inst),
        rs2: InstructionBits::rs2(&inst),
        funct3: InstructionBits::funct3(&inst),
        funct7: InstructionBits::funct7(&inst),
        alt: InstructionBits::alt(&inst),
        imm,
    }
}

/// Decodes the immediate value for I-Type instructions.
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
/// Used for Load, JALR, and Immediate Arithmetic instructions.
fn decode_i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> I_IMM_SHIFT
}

/// Decodes the immediate value for S-Type instructions.
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
/// Used for Store instructions.
fn decode_s_type_imm(inst: u32) -> i32 {
    let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (inst >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    let combined = (high << S_IMM_COMBINED_SHIFT) | low;
    sign_extend(combined, S_IMM_BITS)
}

/// Decodes the immediate value for B-Type instructions.
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
/// Used for Conditional Branch instructions. The immediate represents an even offset.
fn decode_b_type_imm(inst: u32) -> i32 {
    let bit_11 = (inst >> B_IMM_11_SHIFT) & B_IMM_11_MASK;
    let bits_4_1 = (inst >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (inst >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = (inst >> B_IMM_12_SHIFT) & B_IMM_12_MASK;

    let combined = (bit_12 << B_IMM_12_POS)
        | (bit_11 << B_IMM_11_POS)
        | (bits_10_5 << B_IMM_10_5_POS)
        | (bits_4_1 << B_IMM_4_1_POS);
    sign_extend(combined, B_IMM_BITS)
}

/// Decodes the immediate value for U-Type instructions.
///
/// U-Type format: `imm[31:12] | rd | opcode`
/// Used for LUI and AUIPC. The low 12 bits are zero.
fn decode_u_type_imm(inst: u32) -> i32 {
    (inst & U_IMM_MASK) as i32
}

/// Decodes the immediate value for J-Type instructions.
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
/// Used for JAL (Unconditional Jump).
fn decode_j_type_imm(inst: u32) -> i32 {
    let bits_19_12 = (inst >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
    let bit_11 = (inst >> J_IMM_11_SHIFT) & J_IMM_11_MASK;
    let bits_10_1 = (inst >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = (inst >> J_IMM_20_SHIFT) & J_IMM_20_MASK;

    let combined = (bit_20 << J_IMM_20_POS)
        | (bits_19_12 << J_IMM_19_12_POS)
        | (bit_11 << J_IMM_11_POS)
        | (bits_10_1 << J_IMM_10_1_POS);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val`.
fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    (val as i32) << shift >> shift
}
