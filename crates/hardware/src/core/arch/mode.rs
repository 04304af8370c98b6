//! Core Run States.
//!
//! This module defines the run states of the execution controller. It implements the following:
//! 1. **State Classification:** RUNNING, HALTED (fetch disabled) and WAITING (WFI asserted).
//! 2. **Transitions:** Run-enable gating and the level-sensitive wake check.
//! 3. **Observability:** Human-readable naming and display formatting.

use std::fmt;

/// Run state of the execution controller.
///
/// Only the controller changes the run state. After reset the core is `Halted` until the
/// external run-enable is observed asserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RunState {
    /// Fetching and executing one instruction per cycle.
    Running,

    /// Fetch disabled by a de-asserted run-enable; the PC is frozen.
    #[default]
    Halted,

    /// Asleep after retiring WFI; left only when an interrupt or debug request is observed.
    Waiting,
}

impl RunState {
    /// Resolves the state for the current cycle from the sampled control inputs.
    ///
    /// `Waiting` is left the instant `wake` is observed; it is not left because of
    /// run-enable. Every other state simply follows run-enable.
    ///
    /// # Arguments
    ///
    /// * `run_enable` - Level of the external run-enable input.
    /// * `wake` - True when any interrupt vector bit or the debug request is asserted.
    pub const fn resolve(self, run_enable: bool, wake: bool) -> Self {
        match self {
            Self::Waiting if !wake => Self::Waiting,
            _ if run_enable => Self::Running,
            _ => Self::Halted,
        }
    }

    /// Returns true when the core issues an instruction fetch in this state.
    pub const fn fetches(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Returns the human-readable name of the run state.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Running => "RUNNING",
            Self::Halted => "HALTED",
            Self::Waiting => "WAITING",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
