//! Instruction decode properties.
//!
//! Verifies that `decode()` classifies every RV32I opcode and reproduces the
//! R, I, S, B, U and J immediate permutations exactly. Encodings are built
//! with the test builders and decoded back; the fields must survive the trip.

use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction::{b_type, i_type, j_type, r_type, s_type, u_type};
use rvseq_core::isa::decode::decode;
use rvseq_core::isa::instruction::{InstructionBits, OpClass};
use rvseq_core::isa::privileged::opcodes::{OP_SYSTEM, WFI};
use rvseq_core::isa::rv32i::opcodes::*;

#[rstest]
#[case(OP_REG, OpClass::RegReg)]
#[case(OP_IMM, OpClass::RegImm)]
#[case(OP_LOAD, OpClass::Load)]
#[case(OP_STORE, OpClass::Store)]
#[case(OP_BRANCH, OpClass::Branch)]
#[case(OP_JAL, OpClass::Jal)]
#[case(OP_JALR, OpClass::Jalr)]
#[case(OP_LUI, OpClass::Lui)]
#[case(OP_AUIPC, OpClass::Auipc)]
#[case(OP_SYSTEM, OpClass::System)]
#[case(OP_MISC_MEM, OpClass::MiscMem)]
fn opcode_selects_class(#[case] opcode: u32, #[case] class: OpClass) {
    assert_eq!(decode(opcode | 0x0000_1000).class, class);
}

#[rstest]
#[case(0b0000000)]
#[case(0b1010011)] // OP-FP
#[case(0b0101111)] // AMO
#[case(0b0011011)] // OP-IMM-32
#[case(0b1111111)]
fn unknown_opcodes_decode_invalid(#[case] opcode: u32) {
    let d = decode(0xFFFF_F000 | opcode);
    assert_eq!(d.class, OpClass::Invalid);
    assert_eq!(d.imm, 0);
}

#[test]
fn all_zero_word_is_invalid() {
    assert_eq!(decode(0).class, OpClass::Invalid);
}

/// Words produced by the GNU assembler, with the fields they must decode to.
#[rstest]
#[case::beq_a0_a1_minus_8(0xfeb50ce3, OpClass::Branch, 0, 10, 11, -8)]
#[case::jal_ra_minus_4(0xffdff0ef, OpClass::Jal, 1, 0, 0, -4)]
#[case::sw_a0_minus_4_sp(0xfea12e23, OpClass::Store, 0, 2, 10, -4)]
#[case::addi_a0_zero_10(0x00a00513, OpClass::RegImm, 10, 0, 0, 10)]
#[case::lui_a0_0x12345(0x12345537, OpClass::Lui, 10, 0, 0, 0x1234_5000)]
#[case::jalr_zero_ra_0(0x00008067, OpClass::Jalr, 0, 1, 0, 0)]
fn assembler_vectors(
    #[case] inst: u32,
    #[case] class: OpClass,
    #[case] rd: usize,
    #[case] rs1: usize,
    #[case] rs2: usize,
    #[case] imm: i32,
) {
    let d = decode(inst);
    assert_eq!(d.class, class);
    assert_eq!(d.imm, imm);
    if matches!(class, OpClass::RegImm | OpClass::Lui | OpClass::Jal | OpClass::Jalr) {
        assert_eq!(d.rd, rd);
    }
    if !matches!(class, OpClass::Lui | OpClass::Jal) {
        assert_eq!(d.rs1, rs1);
    }
    if matches!(class, OpClass::Branch | OpClass::Store) {
        assert_eq!(d.rs2, rs2);
    }
}

#[test]
fn wfi_decodes_as_system() {
    let d = decode(WFI);
    assert_eq!(d.class, OpClass::System);
    assert_eq!(d.raw, WFI);
    assert_eq!(WFI.csr(), 0x105);
}

#[test]
fn i_type_immediate_extremes() {
    assert_eq!(decode(i_type(OP_IMM, 1, 0, 0, 2047)).imm, 2047);
    assert_eq!(decode(i_type(OP_IMM, 1, 0, 0, -2048)).imm, -2048);
    assert_eq!(decode(i_type(OP_IMM, 1, 0, 0, -1)).imm, -1);
}

#[test]
fn b_type_immediate_extremes() {
    assert_eq!(decode(b_type(OP_BRANCH, 0, 1, 2, 4094)).imm, 4094);
    assert_eq!(decode(b_type(OP_BRANCH, 0, 1, 2, -4096)).imm, -4096);
}

#[test]
fn j_type_immediate_extremes() {
    assert_eq!(decode(j_type(OP_JAL, 1, 1_048_574)).imm, 1_048_574);
    assert_eq!(decode(j_type(OP_JAL, 1, -1_048_576)).imm, -1_048_576);
}

#[test]
fn u_type_keeps_upper_bits_in_place() {
    let d = decode(u_type(OP_LUI, 5, 0xFFFFF));
    assert_eq!(d.imm as u32, 0xFFFF_F000);
    assert_eq!(d.rd, 5);
}

#[test]
fn alt_bit_is_instruction_bit_30() {
    assert!(decode(r_type(OP_REG, 1, 0, 2, 3, 0b0100000)).alt);
    assert!(!decode(r_type(OP_REG, 1, 0, 2, 3, 0b0000000)).alt);
}

proptest! {
    #[test]
    fn r_type_round_trip(rd in 0u32..32, rs1 in 0u32..32, rs2 in 0u32..32, f3 in 0u32..8, f7 in 0u32..128) {
        let d = decode(r_type(OP_REG, rd, f3, rs1, rs2, f7));
        prop_assert_eq!(d.class, OpClass::RegReg);
        prop_assert_eq!((d.rd, d.rs1, d.rs2), (rd as usize, rs1 as usize, rs2 as usize));
        prop_assert_eq!((d.funct3, d.funct7), (f3, f7));
    }

    #[test]
    fn i_type_round_trip(rd in 0u32..32, rs1 in 0u32..32, f3 in 0u32..8, imm in -2048i32..2048) {
        let d = decode(i_type(OP_LOAD, rd, f3, rs1, imm));
        prop_assert_eq!(d.class, OpClass::Load);
        prop_assert_eq!((d.rd, d.rs1, d.funct3), (rd as usize, rs1 as usize, f3));
        prop_assert_eq!(d.imm, imm);
    }

    #[test]
    fn s_type_round_trip(rs1 in 0u32..32, rs2 in 0u32..32, f3 in 0u32..8, imm in -2048i32..2048) {
        let d = decode(s_type(OP_STORE, f3, rs1, rs2, imm));
        prop_assert_eq!(d.class, OpClass::Store);
        prop_assert_eq!((d.rs1, d.rs2), (rs1 as usize, rs2 as usize));
        prop_assert_eq!(d.imm, imm);
    }

    #[test]
    fn b_type_round_trip(rs1 in 0u32..32, rs2 in 0u32..32, f3 in 0u32..8, half in -2048i32..2048) {
        let imm = half * 2;
        let d = decode(b_type(OP_BRANCH, f3, rs1, rs2, imm));
        prop_assert_eq!(d.class, OpClass::Branch);
        prop_assert_eq!((d.rs1, d.rs2, d.funct3), (rs1 as usize, rs2 as usize, f3));
        prop_assert_eq!(d.imm, imm);
    }

    #[test]
    fn u_type_round_trip(rd in 0u32..32, imm20 in 0u32..(1 << 20)) {
        let d = decode(u_type(OP_AUIPC, rd, imm20));
        prop_assert_eq!(d.class, OpClass::Auipc);
        prop_assert_eq!(d.rd, rd as usize);
        prop_assert_eq!(d.imm as u32, imm20 << 12);
    }

    #[test]
    fn j_type_round_trip(rd in 0u32..32, half in -(1i32 << 19)..(1i32 << 19)) {
        let imm = half * 2;
        let d = decode(j_type(OP_JAL, rd, imm));
        prop_assert_eq!(d.class, OpClass::Jal);
        prop_assert_eq!(d.rd, rd as usize);
        prop_assert_eq!(d.imm, imm);
    }

    #[test]
    fn decode_never_panics(inst in any::<u32>()) {
        let d = decode(inst);
        prop_assert_eq!(d.raw, inst);
        prop_assert!(d.rd < 32 && d.rs1 < 32 && d.rs2 < 32);
    }
}
