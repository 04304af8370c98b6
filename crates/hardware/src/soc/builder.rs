//! Reference memory side and top-level `System` type.
//!
//! This module assembles the memory side that answers the core's ports. It performs:
//! 1. **Memory setup:** A single flat window shared by the instruction and data ports.
//! 2. **Timing:** Independent wait-state trackers for each port.
//! 3. **Fault injection:** Address sets that answer with the `error` flag raised.

use std::collections::HashSet;

use crate::common::constants::BYTE_OFFSET_MASK;
use crate::config::Config;
use crate::core::bus::{CoreBus, DataRequest, DataResponse, FetchRequest, FetchResponse};
use crate::soc::memory::Memory;
use crate::soc::memory::controller::WaitStates;

/// Memory side implementing both core ports.
#[derive(Clone, Debug)]
pub struct System {
    /// Flat memory answering both ports.
    pub memory: Memory,
    fetch_timing: WaitStates<FetchRequest>,
    data_timing: WaitStates<DataRequest>,
    fetch_faults: HashSet<u32>,
    data_faults: HashSet<u32>,
}

impl System {
    /// Builds the memory side from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_memory(
            Memory::new(config.memory.base, config.memory.size),
            config.memory.fetch_wait_states,
            config.memory.data_wait_states,
        )
    }

    /// Builds a memory side around an existing memory.
    pub fn with_memory(memory: Memory, fetch_wait_states: u32, data_wait_states: u32) -> Self {
        Self {
            memory,
            fetch_timing: WaitStates::new(fetch_wait_states),
            data_timing: WaitStates::new(data_wait_states),
            fetch_faults: HashSet::new(),
            data_faults: HashSet::new(),
        }
    }

    /// Makes fetches from the word containing `addr` complete with `error` raised.
    pub fn inject_fetch_error(&mut self, addr: u32) {
        let _ = self.fetch_faults.insert(addr & !BYTE_OFFSET_MASK);
    }

    /// Makes data accesses to the word containing `addr` complete with `error` raised.
    pub fn inject_data_error(&mut self, addr: u32) {
        let _ = self.data_faults.insert(addr & !BYTE_OFFSET_MASK);
    }

    /// Removes every injected error.
    pub fn clear_errors(&mut self) {
        self.fetch_faults.clear();
        self.data_faults.clear();
    }
}

impl CoreBus for System {
    fn fetch(&mut self, req: &FetchRequest) -> FetchResponse {
        if !self.fetch_timing.poll(req) {
            return FetchResponse::NOT_READY;
        }
        FetchResponse {
            read_data: self.memory.read_word(req.address),
            ready: true,
            error: self.fetch_faults.contains(&(req.address & !BYTE_OFFSET_MASK)),
        }
    }

    fn data(&mut self, req: &DataRequest) -> DataResponse {
        if !self.data_timing.poll(req) {
            return DataResponse::NOT_READY;
        }
        let error = self.data_faults.contains(&(req.address & !BYTE_OFFSET_MASK));
        if req.write_enable {
            if !error {
                self.memory.write_lanes(req.address, req.byte_enable, req.write_data);
            }
            return DataResponse {
                read_data: 0,
                ready: true,
                error,
            };
        }
        DataResponse {
            read_data: if error { 0 } else { self.memory.read_word(req.address) },
            ready: true,
            error,
        }
    }
}
