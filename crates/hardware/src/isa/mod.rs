//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, and decoding logic for the
//! instruction subset executed by the sequencer core.
//!
//! # Extensions
//!
//! * `rv32i`: Base Integer Instruction Set (32-bit), no compressed encodings.
//! * `privileged`: SYSTEM encodings (WFI; ECALL/EBREAK/CSR decode as no-ops).

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding logic for all RV32I instruction formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Privileged architecture definitions (SYSTEM opcode, WFI).
pub mod privileged;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;
