//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! core. It provides:
//! 1. **Defaults:** Baseline hardware constants (RDRAM size, vectors, frame
//!    cycle count) matching the pipelined machine.
//! 2. **Structures:** Hierarchical config for the system and the CPU.
//! 3. **Presets:** `Config::unpipelined()` for the flat single-stage variant.
//!
//! Configuration is supplied as JSON by a frontend or built in code; use
//! `Config::default()` for the standard machine.
//!
//! # Examples
//!
//! ```
//! use n64sim_core::config::{Config, FetchStrategy};
//!
//! let config = Config::default();
//! assert_eq!(config.cpu.pipeline_depth, 5);
//! assert_eq!(config.cpu.fetch, FetchStrategy::Bus);
//!
//! let json = r#"{
//!     "system": { "ram_size_mib": 8, "cycles_per_frame": 2000 },
//!     "cpu": { "pipeline_depth": 5, "fetch": "Bus" }
//! }"#;
//! let config: Config = serde_json::from_str(json).unwrap();
//! assert_eq!(config.system.ram_size_mib, 8);
//! assert_eq!(config.system.ram_base, 0x8000_0000);
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::SimError;
use crate::common::constants;

/// How the CPU fetches instruction words each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum FetchStrategy {
    /// Route every fetch through the bus's address-range dispatch.
    #[default]
    Bus,
    /// Read the RAM backing store directly, bypassing range dispatch.
    Direct,
}

/// System memory map and frame pacing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// RDRAM size in whole mebibytes.
    pub ram_size_mib: usize,
    /// Physical base address where RDRAM claims the bus.
    pub ram_base: u32,
    /// CPU cycles executed by one `step_frame` call.
    pub cycles_per_frame: u64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            ram_size_mib: constants::DEFAULT_RDRAM_MIB,
            ram_base: constants::RDRAM_BASE,
            cycles_per_frame: constants::CYCLES_PER_FRAME,
        }
    }
}

/// CPU core parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CpuConfig {
    /// Program counter value installed by `reset`.
    pub reset_pc: u32,
    /// Entry vector the core jumps to on its first step.
    pub boot_vector: u32,
    /// Number of pipeline stages (1 = unpipelined stepper, 5 = classic).
    pub pipeline_depth: usize,
    /// Instruction fetch strategy.
    pub fetch: FetchStrategy,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            reset_pc: constants::RESET_PC,
            boot_vector: constants::BOOT_VECTOR,
            pipeline_depth: constants::PIPELINE_DEPTH,
            fetch: FetchStrategy::Bus,
        }
    }
}

/// Root configuration structure containing all simulator settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// System memory map and frame pacing.
    pub system: SystemConfig,
    /// CPU core parameters.
    pub cpu: CpuConfig,
}

impl Config {
    /// Preset for the unpipelined variant: a single-stage core fetching
    /// straight from the backing store, starting at the IPL3 entry.
    pub fn unpipelined() -> Self {
        Self {
            system: SystemConfig {
                cycles_per_frame: constants::CYCLES_PER_FRAME_DIRECT,
                ..SystemConfig::default()
            },
            cpu: CpuConfig {
                reset_pc: constants::RESET_PC_DIRECT,
                pipeline_depth: 1,
                fetch: FetchStrategy::Direct,
                ..CpuConfig::default()
            },
        }
    }

    /// Deserializes a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `SimError::ConfigParse` when the JSON is malformed or has
    /// fields of the wrong shape.
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and deserializes a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `SimError::ConfigRead` when the file cannot be read and
    /// `SimError::ConfigParse` when its contents are not valid config JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
