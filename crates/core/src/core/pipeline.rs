//! Execution pipeline: a fixed-depth shift register of in-flight instructions.
//!
//! This module implements the stage machinery the CPU advances once per
//! cycle. It provides:
//! 1. **Stages:** Slots holding an optional instruction plus its computed
//!    value; index 0 is the newest, the last index is about to retire.
//! 2. **Writeback:** Retiring the oldest stage into the register file.
//! 3. **Stall:** A single-cycle invoker-controlled freeze that skips shifting
//!    and writeback entirely.
//!
//! There is no forwarding and no hazard detection between stages:
//! back-to-back dependent instructions read stale register values. The stall
//! flag is the only hazard primitive, and raising it is the caller's job.

use crate::core::arch::RegisterFile;
use crate::isa::{Instruction, opcodes};
use crate::soc::interconnect::Bus;

/// One pipeline slot: an in-flight instruction and the value it will write
/// back when it retires.
#[derive(Clone, Copy, Debug, Default)]
pub struct PipelineStage {
    /// Instruction occupying this slot, if any.
    pub instr: Option<Instruction>,
    /// Result value carried toward writeback.
    pub value: u32,
}

/// Fixed-depth instruction pipeline.
///
/// Depth 5 models the classic fetch/decode/execute/memory/writeback chain;
/// depth 1 degenerates into an unpipelined stepper that retires each
/// instruction on the following cycle. Retirement latency always equals the
/// stage count.
#[derive(Clone, Debug)]
pub struct Pipeline {
    stages: Vec<PipelineStage>,
    stall: bool,
}

impl Pipeline {
    /// Creates an empty pipeline with the given stage count (minimum 1).
    pub fn new(depth: usize) -> Self {
        Self {
            stages: vec![PipelineStage::default(); depth.max(1)],
            stall: false,
        }
    }

    /// Number of stages.
    pub fn depth(&self) -> usize {
        self.stages.len()
    }

    /// Returns the stage at `idx` (0 = newest).
    pub fn stage(&self, idx: usize) -> &PipelineStage {
        &self.stages[idx]
    }

    /// Requests a one-cycle stall: the next `advance` call consumes the flag
    /// and performs no stage shift and no writeback.
    pub fn set_stall(&mut self) {
        self.stall = true;
    }

    /// Whether a stall is pending for the next cycle.
    pub fn is_stalled(&self) -> bool {
        self.stall
    }

    /// Advances the pipeline by one cycle.
    ///
    /// In order: consume a pending stall (doing nothing else), retire the
    /// oldest stage into the register file (skipping destination register 0),
    /// shift every stage one slot toward retirement, place `new_instr` in the
    /// newest slot, advance the PC by one word, and run the minimal
    /// decode+execute on the second-newest stage. Only the immediate-add
    /// opcode computes anything; every other instruction carries value 0.
    ///
    /// The bus handle is the seam for the memory stage; the current execute
    /// stage issues no loads or stores through it.
    ///
    /// # Returns
    ///
    /// The updated program counter, or `None` when the cycle was consumed by
    /// a stall.
    pub fn advance(
        &mut self,
        new_instr: Instruction,
        regs: &mut RegisterFile,
        _bus: &mut Bus,
    ) -> Option<u32> {
        if self.stall {
            self.stall = false;
            return None;
        }

        let depth = self.stages.len();

        // Writeback: commit the oldest stage. Destination register 0 is the
        // one place the zero register is protected in this machine.
        if let Some(instr) = self.stages[depth - 1].instr {
            let rd = instr.rd as usize;
            if rd != 0 {
                regs.gpr.write(rd, self.stages[depth - 1].value);
            }
        }

        // Shift toward retirement, newest slot takes the incoming instruction.
        for i in (1..depth).rev() {
            self.stages[i] = self.stages[i - 1];
        }
        self.stages[0] = PipelineStage {
            instr: Some(new_instr),
            value: 0,
        };

        regs.pc = regs.pc.wrapping_add(4);

        // Minimal decode + execute. With a single stage this runs on the slot
        // that was just filled, preserving retire-after-depth latency.
        let exec_idx = if depth > 1 { 1 } else { 0 };
        if let Some(instr) = self.stages[exec_idx].instr {
            if instr.opcode == opcodes::ADDIU {
                let lhs = regs.gpr.read(instr.rs as usize);
                self.stages[exec_idx].value = lhs.wrapping_add(u32::from(instr.immediate));
            }
        }

        Some(regs.pc)
    }
}
