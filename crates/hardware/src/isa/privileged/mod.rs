//! Privileged Architecture Definitions.
//!
//! The sequencer core implements no privilege modes, CSRs or traps. The only privileged
//! instruction with an architectural effect is WFI; the remaining SYSTEM encodings are
//! recognised so they can be disassembled and retired as no-ops.
//!
//! # Modules
//!
//! - `opcodes`: System instruction opcodes (ECALL, EBREAK, WFI, CSR funct3 codes).

/// System instruction opcodes (ECALL, EBREAK, WFI, CSR access).
pub mod opcodes;
