//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the 32 integer registers of the core.
//! It provides:
//! 1. **Uniform Storage:** A plain fixed-length array of words, reset to zero.
//! 2. **Access:** Indexed reads and writes.
//! 3. **Observability:** Debugging utilities for dumping register state.
//!
//! The array itself does not special-case `x0`. The hardwired-zero property is enforced by the
//! writeback step of the execution controller, which discards every write addressed to index 0.

use std::fmt;

use super::constants::NUM_REGS;
use crate::isa::abi;

/// General-purpose register file (`x0`-`x31`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    pub fn read(&self, idx: usize) -> u32 {
        self.regs[idx]
    }

    /// Writes a general-purpose register.
    ///
    /// No index is protected here; callers that model architectural writeback must skip
    /// index 0 themselves.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        self.regs[idx] = val;
    }

    /// Clears every register to zero.
    pub fn reset(&mut self) {
        self.regs = [0; NUM_REGS];
    }

    /// Returns a copy of all 32 registers.
    pub fn snapshot(&self) -> [u32; NUM_REGS] {
        self.regs
    }

    /// Dumps the contents of all registers to stdout.
    pub fn dump(&self) {
        print!("{self}");
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_REGS).step_by(4) {
            for j in i..i + 4 {
                write!(f, "x{:<2} {:>4}={:#010x}  ", j, abi::name(j), self.regs[j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
