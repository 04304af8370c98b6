//! Simulator: owns the core and the memory side side-by-side.
//!
//! The core borrows the memory side only for the duration of a tick, so both live here as
//! plain fields and the simulator clocks them together, applying scheduled interrupt pulses
//! and collecting statistics.

use std::collections::BTreeMap;

use tracing::warn;

use crate::common::SimError;
use crate::config::Config;
use crate::core::Core;
use crate::core::arch::mode::RunState;
use crate::core::cpu::{ControlInputs, TickOutputs};
use crate::sim::loader::Image;
use crate::soc::System;
use crate::stats::SimStats;

/// Why [`Simulator::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The core is waiting for an interrupt and nothing is scheduled to wake it.
    Sleeping {
        /// PC the core will resume from.
        pc: u32,
    },
    /// Run-enable is low; the core will not fetch again.
    Halted,
    /// The cycle limit was reached first.
    CycleLimit,
}

/// Top-level simulator: core + memory side + statistics.
#[derive(Debug)]
pub struct Simulator {
    /// Core architectural state.
    pub core: Core,
    /// Memory side answering both ports.
    pub system: System,
    /// Static control input levels applied every cycle.
    pub inputs: ControlInputs,
    /// Run statistics.
    pub stats: SimStats,
    irq_pulses: BTreeMap<u64, u32>,
}

impl Simulator {
    /// Creates a simulator from configuration.
    pub fn new(config: &Config) -> Self {
        let mut sim = Self::with_system(System::new(config));
        sim.inputs.run_enable = config.control.run_enable;
        sim
    }

    /// Creates a simulator around an existing memory side, with run-enable asserted.
    pub fn with_system(system: System) -> Self {
        Self {
            core: Core::new(),
            system,
            inputs: ControlInputs::RUN,
            stats: SimStats::default(),
            irq_pulses: BTreeMap::new(),
        }
    }

    /// Installs a program image in memory.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageOutOfRange`] if the image does not fit.
    pub fn load(&mut self, image: &Image) -> Result<(), SimError> {
        image.install(&mut self.system.memory)
    }

    /// Schedules a one-cycle pulse on the interrupt vector.
    ///
    /// Cycles are counted from 0; pulses for the same cycle are OR-ed together. A cycle that
    /// has already been clocked cannot be driven any more, so such a pulse is dropped with a
    /// warning and `false` is returned.
    pub fn schedule_interrupt(&mut self, cycle: u64, mask: u32) -> bool {
        if cycle < self.stats.cycles {
            warn!(
                cycle,
                now = self.stats.cycles,
                mask = format_args!("{mask:#x}"),
                "interrupt pulse scheduled in the past, dropped"
            );
            return false;
        }
        *self.irq_pulses.entry(cycle).or_default() |= mask;
        true
    }

    /// Returns the number of pulses still waiting to be driven.
    pub fn pending_interrupts(&self) -> usize {
        self.irq_pulses.len()
    }

    /// Returns true if a pulse is scheduled for the current cycle or later.
    fn wake_pending(&self) -> bool {
        self.inputs.wake() || self.irq_pulses.range(self.stats.cycles..).next().is_some()
    }

    /// Advances the simulator by one clock cycle.
    pub fn tick(&mut self) -> TickOutputs {
        let now = self.stats.cycles;
        let pulse = self.irq_pulses.remove(&now).unwrap_or(0);
        self.irq_pulses.retain(|&cycle, _| cycle > now);
        let inputs = ControlInputs {
            interrupt_vector: self.inputs.interrupt_vector | pulse,
            ..self.inputs
        };
        let out = self.core.tick(&inputs, &mut self.system);
        self.stats.record(&out);
        out
    }

    /// Runs until the core can make no further progress or `max_cycles` elapse.
    pub fn run(&mut self, max_cycles: u64) -> RunOutcome {
        for _ in 0..max_cycles {
            let out = self.tick();
            if out.scanning {
                continue;
            }
            match out.state {
                RunState::Waiting if !self.wake_pending() => {
                    return RunOutcome::Sleeping { pc: self.core.pc() };
                }
                RunState::Halted if !self.inputs.run_enable => return RunOutcome::Halted,
                _ => {}
            }
        }
        RunOutcome::CycleLimit
    }
}
