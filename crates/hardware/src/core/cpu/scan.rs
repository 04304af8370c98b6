//! Debug scan chain.
//!
//! While scan mode is active the core stops executing and instead clocks a 32-bit serial
//! shift register. On the first scan cycle the register captures the program counter; every
//! scan cycle then presents bit 31 on `scan_out` and shifts `scan_in` into bit 0. The
//! register contents are discarded when scan mode ends, so scanning never alters the PC or
//! the register file.

/// Serial-in/serial-out shift register over an internal state word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanChain {
    word: u32,
    active: bool,
}

impl ScanChain {
    /// Clocks the chain once and returns the bit shifted out.
    ///
    /// # Arguments
    ///
    /// * `capture` - State word loaded into the chain on the first scan cycle.
    /// * `scan_in` - Serial input bit.
    pub const fn shift(&mut self, capture: u32, scan_in: bool) -> bool {
        if !self.active {
            self.word = capture;
            self.active = true;
        }
        let out = self.word >> 31 != 0;
        self.word = (self.word << 1) | scan_in as u32;
        out
    }

    /// Leaves scan mode and drops the shifted contents.
    pub const fn release(&mut self) {
        *self = Self {
            word: 0,
            active: false,
        };
    }

    /// Returns true while scan mode is active.
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the current contents of the chain.
    pub const fn contents(&self) -> u32 {
        self.word
    }
}
