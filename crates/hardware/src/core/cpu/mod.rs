//! Core Definition and Initialization.
//!
//! This module defines the `Core` structure, the container for all state the sequencer keeps
//! between clock edges. It coordinates the following:
//! 1. **State Management:** Register file, program counter and run state.
//! 2. **Debug Access:** The scan chain that replaces execution while scan mode is active.
//! 3. **Cycle Stepping:** The `tick` step function, implemented in [`execution`].

/// Per-cycle step function, control inputs and tick outputs.
pub mod execution;

/// Serial scan chain over the internal state word.
pub mod scan;

use crate::common::constants::PC_ALIGN_MASK;
use crate::common::{RESET_PC, RegisterFile};
use crate::core::arch::mode::RunState;

use self::scan::ScanChain;

pub use self::execution::{ControlInputs, PortErrors, Retired, Stall, TickOutputs, Writeback};

/// Single-cycle RV32I core.
///
/// All architectural effects of an instruction (register writeback, PC update, data request,
/// run-state change) commit together in one call to [`Core::tick`]. Nothing is latched between
/// cycles except the state held here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Core {
    /// General-purpose registers.
    pub regs: RegisterFile,
    pc: u32,
    state: RunState,
    scan: ScanChain,
}

impl Core {
    /// Creates a core in its reset state: PC at the reset vector, registers cleared, `Halted`
    /// until run-enable is observed.
    pub fn new() -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: RESET_PC,
            state: RunState::Halted,
            scan: ScanChain::default(),
        }
    }

    /// Returns the core to its reset state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the program counter.
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Overrides the program counter, clearing the two low bits.
    pub const fn set_pc(&mut self, pc: u32) {
        self.pc = pc & !PC_ALIGN_MASK;
    }

    /// Returns the current run state.
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Returns true while the core waits for an interrupt (the `sleeping` output).
    pub fn sleeping(&self) -> bool {
        self.state == RunState::Waiting
    }

    /// Returns the scan chain.
    pub const fn scan(&self) -> &ScanChain {
        &self.scan
    }
}
