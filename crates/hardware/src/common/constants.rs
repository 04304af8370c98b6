//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Architectural Constants:** Register count, word width and the boot address.
//! 2. **Instruction Constants:** Instruction size and program counter alignment.
//! 3. **Bus Constants:** Byte-lane layout of the data port.

/// Number of general-purpose registers (`x0`-`x31`).
pub const NUM_REGS: usize = 32;

/// Size of an RV32I instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Program counter value after reset (fixed boot address).
pub const RESET_PC: u32 = 0;

/// Mask of the program counter bits that must stay zero (word alignment).
pub const PC_ALIGN_MASK: u32 = INSTRUCTION_SIZE - 1;

/// Number of byte lanes on the 32-bit data port.
pub const BYTE_LANES: u32 = 4;

/// Mask selecting the byte offset of an address within its word.
pub const BYTE_OFFSET_MASK: u32 = BYTE_LANES - 1;

/// Byte-lane mask with every lane enabled.
pub const ALL_LANES: u8 = 0b1111;
