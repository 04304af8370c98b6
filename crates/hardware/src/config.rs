//! Configuration system for the RV32I sequencer simulator.
//!
//! This module defines the configuration structures used to parameterize a simulation run.
//! It provides:
//! 1. **Defaults:** Baseline memory window, wait states and run limits.
//! 2. **Structures:** Hierarchical config for general, memory and control settings.
//! 3. **Loading:** Parsing from a JSON string or file; missing fields take their defaults.
//!
//! Use `Config::default()` for the CLI, or deserialize from JSON.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Base address of the memory window.
    pub const MEMORY_BASE: u32 = 0x0000_0000;

    /// Size of the memory window (64 KiB).
    pub const MEMORY_SIZE: usize = 64 * 1024;

    /// Cycle limit for a run before it is reported as not terminating.
    pub const MAX_CYCLES: u64 = 1_000_000;
}

/// Root configuration structure for the simulator.
///
/// # Examples
///
/// ```
/// use rvseq_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "memory": { "size": 4096, "data_wait_states": 2 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, 1_000_000);
/// assert_eq!(config.memory.size, 4096);
/// assert_eq!(config.memory.data_wait_states, 2);
/// assert!(config.control.run_enable);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation settings
    pub general: GeneralConfig,
    /// Memory window and port timing
    pub memory: MemoryConfig,
    /// Levels applied to the core's control inputs
    pub control: ControlConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the document is not valid JSON for this structure.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read, or [`SimError::Config`] if it
    /// does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log every retired instruction at TRACE level
    pub trace_instructions: bool,

    /// Cycle limit for `Simulator::run`
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    /// Returns the default cycle limit.
    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Memory window and per-port wait states.
///
/// A single flat memory answers both ports; addresses outside `[base, base + size)` read as
/// zero and drop writes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// First byte address of the memory window
    #[serde(default = "MemoryConfig::default_base")]
    pub base: u32,

    /// Size of the memory window in bytes
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,

    /// Cycles the instruction port holds `ready` low for each request.
    ///
    /// Nothing is latched inside the core, so while the data port holds a load or store the
    /// fetch is presented again every cycle and pays these wait states again before each data
    /// attempt. A load or store with `f` fetch and `d` data wait states takes
    /// `(f + 1) * (d + 1)` cycles.
    pub fetch_wait_states: u32,

    /// Cycles the data port holds `ready` low for each request
    pub data_wait_states: u32,
}

impl MemoryConfig {
    /// Returns the default memory base address.
    const fn default_base() -> u32 {
        defaults::MEMORY_BASE
    }

    /// Returns the default memory size in bytes.
    const fn default_size() -> usize {
        defaults::MEMORY_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            base: defaults::MEMORY_BASE,
            size: defaults::MEMORY_SIZE,
            fetch_wait_states: 0,
            data_wait_states: 0,
        }
    }
}

/// Static levels of the core's control inputs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Run-enable level applied from cycle 0
    #[serde(default = "ControlConfig::default_run_enable")]
    pub run_enable: bool,
}

impl ControlConfig {
    /// Run-enable defaults to asserted so a loaded image starts executing.
    const fn default_run_enable() -> bool {
        true
    }
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self { run_enable: true }
    }
}
