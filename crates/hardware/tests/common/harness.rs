use rvseq_core::config::Config;
use rvseq_core::core::Core;
use rvseq_core::core::cpu::{ControlInputs, TickOutputs};
use rvseq_core::sim::Simulator;

/// Installs a `tracing` subscriber that writes through the test harness.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// A simulator with default configuration: 64 KiB at 0, no wait states, run-enable high.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        init_tracing();
        Self {
            sim: Simulator::new(config),
        }
    }

    /// Convenience accessor for the core.
    pub fn core(&self) -> &Core {
        &self.sim.core
    }

    /// Load a sequence of 32-bit instructions into memory at `addr`.
    pub fn load_program(mut self, addr: u32, instructions: &[u32]) -> Self {
        let bytes: Vec<u8> = instructions.iter().flat_map(|i| i.to_le_bytes()).collect();
        self.sim.system.memory.load_at(addr, &bytes).unwrap();
        self
    }

    pub fn write_word(&mut self, addr: u32, value: u32) {
        self.sim.system.memory.write_lanes(addr, 0b1111, value);
    }

    pub fn read_word(&self, addr: u32) -> u32 {
        self.sim.system.memory.read_word(addr)
    }

    pub fn set_reg(&mut self, reg: usize, val: u32) {
        self.sim.core.regs.write(reg, val);
    }

    pub fn get_reg(&self, reg: usize) -> u32 {
        self.sim.core.regs.read(reg)
    }

    pub fn inputs_mut(&mut self) -> &mut ControlInputs {
        &mut self.sim.inputs
    }

    /// Clock one cycle.
    pub fn tick(&mut self) -> TickOutputs {
        self.sim.tick()
    }

    /// Clock `cycles` cycles, returning the last outputs.
    pub fn run(&mut self, cycles: u64) -> TickOutputs {
        let mut last = TickOutputs::default();
        for _ in 0..cycles {
            last = self.sim.tick();
        }
        last
    }
}
