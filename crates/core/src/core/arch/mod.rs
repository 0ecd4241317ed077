//! Architectural register state.
//!
//! This module provides the `RegisterFile`, a unified container for all
//! processor-visible register state:
//! 1. **Integer:** 32 general-purpose registers plus HI/LO accumulators.
//! 2. **Floating-Point:** 32 coprocessor registers.
//! 3. **Control:** The CP0 block and the program counter.
//!
//! All integer and PC values carry unsigned 32-bit wraparound semantics;
//! mutation happens through `u32` wrapping arithmetic so the modulo-2^32
//! invariant holds structurally.

/// System control coprocessor registers.
pub mod cp0;
/// Floating-point register file.
pub mod fpr;
/// General-purpose register file.
pub mod gpr;

use cp0::Cp0;
use fpr::Fpr;
use gpr::Gpr;

/// Unified register file: GPRs, FPRs, CP0, program counter, HI/LO.
///
/// Created at core construction and on every reset; mutated only by the
/// pipeline's writeback step (and the boot transition, which installs the
/// entry vector into `pc`).
#[derive(Clone, Debug)]
pub struct RegisterFile {
    /// General-purpose integer registers.
    pub gpr: Gpr,
    /// Floating-point registers.
    pub fpr: Fpr,
    /// System control coprocessor block.
    pub cp0: Cp0,
    /// Program counter.
    pub pc: u32,
    /// Multiply/divide HI accumulator.
    pub hi: u32,
    /// Multiply/divide LO accumulator.
    pub lo: u32,
}

impl RegisterFile {
    /// Creates a register file in its reset state with the given PC.
    pub fn new(reset_pc: u32) -> Self {
        Self {
            gpr: Gpr::new(),
            fpr: Fpr::new(),
            cp0: Cp0::new(),
            pc: reset_pc,
            hi: 0,
            lo: 0,
        }
    }
}
