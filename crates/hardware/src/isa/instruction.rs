//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and structures for decoding
//! RV32I instruction fields from 32-bit instruction encodings.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for extracting the CSR address / funct12 field (bits 20-31).
pub const CSR_MASK: u32 = 0xFFF;
/// Bit position of the alternate-operation bit (SUB, SRA).
pub const ALT_BIT_SHIFT: u32 = 30;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Provides methods to extract all standard RISC-V instruction fields
/// from a 32-bit instruction encoding.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Register 0 (x0) is hardwired to zero and writes are discarded at writeback.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    ///
    /// Used to distinguish between different operations within the same opcode.
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Used to distinguish between standard and alternate encodings
    /// (e.g., ADD vs SUB when bit 5 is set).
    fn funct7(&self) -> u32;

    /// Extracts the CSR address field (bits 20-31), also the SYSTEM funct12.
    fn csr(&self) -> u32;

    /// Extracts instruction bit 30, the alternate-operation select bit.
    fn alt(&self) -> bool;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn csr(&self) -> u32 {
        (self >> 20) & CSR_MASK
    }

    #[inline(always)]
    fn alt(&self) -> bool {
        (self >> ALT_BIT_SHIFT) & 1 == 1
    }
}

/// Operation class of a decoded instruction, one per instruction-format family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OpClass {
    /// Register-register ALU operation (`OP`, R-type).
    RegReg,
    /// Register-immediate ALU operation (`OP-IMM`, I-type).
    RegImm,
    /// Load (`LOAD`, I-type).
    Load,
    /// Store (`STORE`, S-type).
    Store,
    /// Conditional branch (`BRANCH`, B-type).
    Branch,
    /// Jump and link, PC-relative (`JAL`, J-type).
    Jal,
    /// Jump and link, register-indirect (`JALR`, I-type).
    Jalr,
    /// Load upper immediate (`LUI`, U-type).
    Lui,
    /// Add upper immediate to PC (`AUIPC`, U-type).
    Auipc,
    /// SYSTEM opcode (WFI; other encodings have no effect on this core).
    System,
    /// Memory ordering (`FENCE`, `FENCE.I`); no effect on a single-cycle core.
    MiscMem,
    /// Unrecognized opcode: retires with no architectural effect.
    #[default]
    Invalid,
}

impl OpClass {
    /// Returns true for classes whose ALU operand B comes from `rs2`.
    pub const fn uses_rs2_operand(self) -> bool {
        matches!(self, Self::RegReg)
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Contains all instruction fields extracted during decoding, including
/// operation class, register indices, function codes, and extended immediate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Operation class derived from the opcode.
    pub class: OpClass,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// Alternate-operation bit (instruction bit 30).
    pub alt: bool,
    /// Sign-extended (or upper-placed, for U-type) immediate value.
    pub imm: i32,
}
