//! Top-level system: owns the CPU and the bus/RDRAM pair side-by-side.
//!
//! Holding the two next to each other (rather than nesting the bus inside
//! the CPU) lets `step` hand the pipeline a plain `&mut Bus` with no
//! borrow-splitting gymnastics. Frontends drive exactly this surface:
//! `load_rom`, `reset`, `step_frame`, and read access to the public fields.

use std::path::Path;

use crate::common::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::loader;
use crate::sim::rom::RomInfo;
use crate::soc::interconnect::Bus;
use crate::soc::memory::Rdram;

/// Complete simulated system: one CPU core, one bus, one RDRAM device.
pub struct System {
    /// CPU core (registers, pipeline, counters).
    pub cpu: Cpu,
    /// System bus owning the registered devices.
    pub bus: Bus,
    cycles_per_frame: u64,
}

impl System {
    /// Builds a system from configuration: constructs the bus, registers
    /// RDRAM at the configured base, and creates the CPU in reset state.
    pub fn new(config: &Config) -> Self {
        let mut bus = Bus::new();
        bus.add_device(Box::new(Rdram::new(
            config.system.ram_size_mib,
            config.system.ram_base,
        )));

        Self {
            cpu: Cpu::new(&config.cpu),
            bus,
            cycles_per_frame: config.system.cycles_per_frame,
        }
    }

    /// Resets the CPU core. Memory contents (including a loaded ROM) are
    /// left in place, as on the real machine's reset line.
    pub fn reset(&mut self) {
        self.cpu.reset();
        tracing::debug!("system reset complete");
    }

    /// Loads a ROM image into memory and returns its descriptor.
    pub fn load_rom(&mut self, data: &[u8]) -> RomInfo {
        match self.bus.rdram_mut() {
            Some(ram) => ram.load_rom(data),
            None => {
                tracing::warn!("no RDRAM registered; ROM load dropped");
                RomInfo::default()
            }
        }
    }

    /// Reads a ROM image from disk and loads it.
    ///
    /// # Errors
    ///
    /// Returns `SimError::RomRead` when the file cannot be read; no system
    /// state changes on failure.
    pub fn load_rom_file(&mut self, path: impl AsRef<Path>) -> Result<RomInfo, SimError> {
        let data = loader::read_rom_file(path)?;
        Ok(self.load_rom(&data))
    }

    /// Descriptor of the most recently loaded ROM image.
    pub fn rom_info(&mut self) -> RomInfo {
        self.bus
            .rdram_mut()
            .map_or_else(RomInfo::default, |ram| ram.rom_info().clone())
    }

    /// Executes one cycle. Exposed for debugger-style frontends.
    pub fn step(&mut self, logger: Option<&mut dyn FnMut(&str)>) -> u32 {
        self.cpu.step(&mut self.bus, logger)
    }

    /// Executes one video frame's worth of CPU cycles.
    ///
    /// This is the operation a frontend calls on a timer to advance
    /// emulation; the cycle count per call comes from configuration.
    pub fn step_frame(&mut self, mut logger: Option<&mut dyn FnMut(&str)>) {
        for _ in 0..self.cycles_per_frame {
            let sink: Option<&mut dyn FnMut(&str)> = logger.as_deref_mut();
            self.cpu.step(&mut self.bus, sink);
        }
    }

    /// Cycles one `step_frame` call executes.
    pub fn cycles_per_frame(&self) -> u64 {
        self.cycles_per_frame
    }
}
