//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout the simulator.
//! These types are used for the following:
//! 1. **Port Selection:** Distinguishing instruction fetches from data reads and writes.
//! 2. **Lane Generation:** Deriving byte-lane enables from the access width.
//! 3. **Diagnostics:** Labelling port errors in the log.

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch on the instruction port.
    Fetch,

    /// Data read on the data port (load instructions).
    Read,

    /// Data write on the data port (store instructions).
    Write,
}

/// Memory access width for load and store operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemWidth {
    /// No memory operation.
    #[default]
    Nop,

    /// 8-bit byte access.
    Byte,

    /// 16-bit half-word access.
    Half,

    /// 32-bit word access.
    Word,
}

impl MemWidth {
    /// Returns the contiguous lane mask for this width at byte offset 0.
    pub const fn lane_mask(self) -> u8 {
        match self {
            Self::Nop => 0b0000,
            Self::Byte => 0b0001,
            Self::Half => 0b0011,
            Self::Word => 0b1111,
        }
    }
}
