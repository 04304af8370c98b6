//! Simulation statistics collection and reporting.
//!
//! This module tracks run metrics for the sequencer core. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and cycles per instruction.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump, system, no-op).
//! 3. **Stalls:** Cycles held by the instruction and data ports.
//! 4. **Run control:** Cycles spent waiting, halted and in scan mode, and port errors.

use std::fmt;
use std::time::Instant;

use crate::core::arch::mode::RunState;
use crate::core::cpu::{Stall, TickOutputs};
use crate::isa::instruction::OpClass;

/// Simulation statistics structure.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total cycles clocked.
    pub cycles: u64,
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Register-register and register-immediate ALU instructions, plus LUI and AUIPC.
    pub inst_alu: u64,
    /// Loads retired.
    pub inst_load: u64,
    /// Stores retired.
    pub inst_store: u64,
    /// Conditional branches retired.
    pub inst_branch: u64,
    /// JAL and JALR retired.
    pub inst_jump: u64,
    /// WFI retired.
    pub inst_system: u64,
    /// Encodings retired without architectural effect (including FENCE).
    pub inst_nop: u64,

    /// Branches that redirected the PC.
    pub branches_taken: u64,

    /// Cycles held by the instruction port.
    pub stalls_fetch: u64,
    /// Cycles held by the data port.
    pub stalls_data: u64,

    /// Cycles spent in WAITING.
    pub cycles_waiting: u64,
    /// Cycles spent in HALTED.
    pub cycles_halted: u64,
    /// Cycles spent in scan mode.
    pub cycles_scan: u64,

    /// Instruction-port error responses.
    pub errors_fetch: u64,
    /// Data-port error responses.
    pub errors_data: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_system: 0,
            inst_nop: 0,
            branches_taken: 0,
            stalls_fetch: 0,
            stalls_data: 0,
            cycles_waiting: 0,
            cycles_halted: 0,
            cycles_scan: 0,
            errors_fetch: 0,
            errors_data: 0,
        }
    }
}

impl SimStats {
    /// Accounts for one clocked cycle.
    pub fn record(&mut self, out: &TickOutputs) {
        self.cycles += 1;
        self.errors_fetch += u64::from(out.errors.fetch);
        self.errors_data += u64::from(out.errors.data);

        if out.scanning {
            self.cycles_scan += 1;
            return;
        }
        match out.stall {
            Some(Stall::Fetch) => self.stalls_fetch += 1,
            Some(Stall::Data) => self.stalls_data += 1,
            None => {}
        }

        if let Some(r) = out.retired {
            self.instructions_retired += 1;
            let counter = match r.class {
                _ if !r.legal => &mut self.inst_nop,
                OpClass::RegReg | OpClass::RegImm | OpClass::Lui | OpClass::Auipc => {
                    &mut self.inst_alu
                }
                OpClass::Load => &mut self.inst_load,
                OpClass::Store => &mut self.inst_store,
                OpClass::Branch => {
                    self.branches_taken += u64::from(r.taken);
                    &mut self.inst_branch
                }
                OpClass::Jal | OpClass::Jalr => &mut self.inst_jump,
                OpClass::System => &mut self.inst_system,
                OpClass::MiscMem | OpClass::Invalid => &mut self.inst_nop,
            };
            *counter += 1;
        } else if out.stall.is_none() {
            match out.state {
                RunState::Waiting => self.cycles_waiting += 1,
                RunState::Halted => self.cycles_halted += 1,
                RunState::Running => {}
            }
        }
    }

    /// Returns cycles per retired instruction, or 0 before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;
        let pct = |n: u64| (n as f64 / cyc) * 100.0;
        let instr = self.instructions_retired.max(1) as f64;
        let mix = |n: u64| (n as f64 / instr) * 100.0;

        writeln!(f, "==========================================================")?;
        writeln!(f, "RV32I SEQUENCER SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host_seconds             {seconds:.4} s")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_cpi                  {:.4}", self.cpi())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, n) in [
            ("alu", self.inst_alu),
            ("load", self.inst_load),
            ("store", self.inst_store),
            ("branch", self.inst_branch),
            ("jump", self.inst_jump),
            ("system", self.inst_system),
            ("nop", self.inst_nop),
        ] {
            writeln!(f, "  op.{name:<20} {n} ({:.2}%)", mix(n))?;
        }
        writeln!(f, "  branch.taken           {}", self.branches_taken)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "CORE BREAKDOWN")?;
        for (name, n) in [
            ("stall.fetch", self.stalls_fetch),
            ("stall.data", self.stalls_data),
            ("cycles.waiting", self.cycles_waiting),
            ("cycles.halted", self.cycles_halted),
            ("cycles.scan", self.cycles_scan),
        ] {
            writeln!(f, "  {name:<22} {n} ({:.2}%)", pct(n))?;
        }
        writeln!(f, "  error.fetch            {}", self.errors_fetch)?;
        writeln!(f, "  error.data             {}", self.errors_data)?;
        writeln!(f, "==========================================================")
    }
}
