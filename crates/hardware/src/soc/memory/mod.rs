//! Flat Little-Endian Memory.
//!
//! This module implements the memory that answers both core ports. It provides:
//! 1. **Storage:** A byte vector mapped at a base address.
//! 2. **Word Access:** Word reads at the aligned address and byte-lane writes.
//! 3. **Wait States:** The per-port handshake model in [`controller`].
//!
//! Accesses outside the window never fault: reads return zero and writes are dropped.

/// Per-port ready/wait-state handshake model.
pub mod controller;

use crate::common::constants::{BYTE_LANES, BYTE_OFFSET_MASK};
use crate::common::SimError;

/// Flat memory window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    data: Vec<u8>,
    base: u32,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes mapped at `base`.
    pub fn new(base: u32, size: usize) -> Self {
        Self {
            data: vec![0; size],
            base,
        }
    }

    /// Returns the base address of the window.
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Returns the size of the window in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Translates an address to an offset into the backing store.
    fn offset(&self, addr: u32) -> Option<usize> {
        let off = addr.checked_sub(self.base)? as usize;
        (off < self.data.len()).then_some(off)
    }

    /// Reads one byte; zero outside the window.
    pub fn read_u8(&self, addr: u32) -> u8 {
        self.offset(addr).map_or(0, |off| self.data[off])
    }

    /// Reads the little-endian word containing `addr`.
    pub fn read_word(&self, addr: u32) -> u32 {
        let aligned = addr & !BYTE_OFFSET_MASK;
        let mut bytes = [0u8; BYTE_LANES as usize];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = self.read_u8(aligned.wrapping_add(i as u32));
        }
        u32::from_le_bytes(bytes)
    }

    /// Writes the enabled byte lanes of the word containing `addr`.
    ///
    /// Lane `i` takes byte `i` of `data`; disabled lanes keep their contents.
    pub fn write_lanes(&mut self, addr: u32, lanes: u8, data: u32) {
        let aligned = addr & !BYTE_OFFSET_MASK;
        for (i, byte) in data.to_le_bytes().into_iter().enumerate() {
            if lanes & (1 << i) == 0 {
                continue;
            }
            if let Some(off) = self.offset(aligned.wrapping_add(i as u32)) {
                self.data[off] = byte;
            }
        }
    }

    /// Copies an image into memory at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageOutOfRange`] if any byte would fall outside the window; memory
    /// is left untouched in that case.
    pub fn load_at(&mut self, addr: u32, bytes: &[u8]) -> Result<(), SimError> {
        let out_of_range = || SimError::ImageOutOfRange {
            addr: u64::from(addr),
            len: bytes.len(),
        };
        let start = addr.checked_sub(self.base).ok_or_else(out_of_range)? as usize;
        let end = start.checked_add(bytes.len()).ok_or_else(out_of_range)?;
        self.data
            .get_mut(start..end)
            .ok_or_else(out_of_range)?
            .copy_from_slice(bytes);
        Ok(())
    }
}
