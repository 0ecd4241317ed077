//! CPU core: the per-cycle fetch/decode/pipeline-advance state machine.
//!
//! One `step` call performs one cycle: bump counters, fetch and decode (or
//! synthesize a no-op while unbooted), hand the instruction to the pipeline,
//! and emit a periodic trace line. The boot transition is one-way: the first
//! cycle after reset forces the program counter to the entry vector instead
//! of fetching.

use crate::common::VirtAddr;
use crate::common::constants::{TRACE_INTERVAL, WORD_BYTES};
use crate::config::{CpuConfig, FetchStrategy};
use crate::core::arch::RegisterFile;
use crate::core::pipeline::Pipeline;
use crate::isa::Instruction;
use crate::soc::interconnect::Bus;

/// CPU core state: registers, pipeline, counters, and the boot latch.
///
/// Fields are public so frontends can display register and counter state and
/// drive the pipeline's stall flag directly.
#[derive(Debug)]
pub struct Cpu {
    /// Architectural register state.
    pub regs: RegisterFile,
    /// Execution pipeline.
    pub pipeline: Pipeline,
    /// Cycles executed since the last reset.
    pub cycles: u64,
    /// Instructions entered into the pipeline since the last reset.
    pub instructions_executed: u64,
    /// Reserved exception latch; present as state, never raised by this core.
    pub exception_pending: bool,
    /// Whether the one-time boot jump to the entry vector has happened.
    pub booted: bool,

    reset_pc: u32,
    boot_vector: u32,
    pipeline_depth: usize,
    fetch: FetchStrategy,
}

impl Cpu {
    /// Creates a core in its reset state from configuration.
    pub fn new(config: &CpuConfig) -> Self {
        Self {
            regs: RegisterFile::new(config.reset_pc),
            pipeline: Pipeline::new(config.pipeline_depth),
            cycles: 0,
            instructions_executed: 0,
            exception_pending: false,
            booted: false,
            reset_pc: config.reset_pc,
            boot_vector: config.boot_vector,
            pipeline_depth: config.pipeline_depth,
            fetch: config.fetch,
        }
    }

    /// Reinitializes registers, pipeline, counters, and the boot latch to
    /// their construction-time defaults.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::new(self.reset_pc);
        self.pipeline = Pipeline::new(self.pipeline_depth);
        self.cycles = 0;
        self.instructions_executed = 0;
        self.exception_pending = false;
        self.booted = false;
        tracing::debug!(reset_pc = self.reset_pc, "cpu core reset");
    }

    /// Executes one cycle.
    ///
    /// While unbooted the fetch is a synthesized no-op; the very first cycle
    /// also installs the entry vector into the PC and latches `booted`. Once
    /// booted, the fetch address is `pc - 4` (compensating for the pipeline's
    /// pre-incremented PC), translated through the segment mask and read as
    /// one 32-bit word via the configured fetch strategy.
    ///
    /// Every [`TRACE_INTERVAL`] cycles a trace line goes to the optional
    /// `logger` sink; a missing sink changes nothing else.
    ///
    /// # Returns
    ///
    /// The program counter after this cycle (unchanged when stalled).
    pub fn step<'l>(&mut self, bus: &mut Bus, mut logger: Option<&mut (dyn FnMut(&str) + 'l)>) -> u32 {
        self.cycles += 1;
        self.instructions_executed += 1;

        let instr = if self.booted {
            let fetch_addr = VirtAddr::new(self.regs.pc.wrapping_sub(WORD_BYTES)).to_phys();
            let word = match self.fetch {
                FetchStrategy::Bus => bus.read32(fetch_addr),
                FetchStrategy::Direct => bus.ram_read32(fetch_addr),
            };
            Instruction::decode(word)
        } else {
            if self.cycles == 1 {
                self.regs.pc = self.boot_vector;
                self.booted = true;
                tracing::debug!(vector = self.boot_vector, "booted to entry vector");
                if let Some(log) = logger.as_mut() {
                    log(&format!("[CPU] booted to {:#010X}", self.boot_vector));
                }
            }
            Instruction::nop()
        };

        let pc_new = self.pipeline.advance(instr, &mut self.regs, bus);

        if self.cycles % TRACE_INTERVAL == 0 {
            tracing::trace!(cycle = self.cycles, pc = self.regs.pc, "cycle trace");
            if let Some(log) = logger.as_mut() {
                log(&format!(
                    "[CPU] cycle {:08} | pc={:#010X}",
                    self.cycles, self.regs.pc
                ));
            }
        }

        pc_new.unwrap_or(self.regs.pc)
    }
}
