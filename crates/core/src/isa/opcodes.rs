//! Primary opcode values.
//!
//! Only `ADDIU` has execute semantics in this core; the rest of the primary
//! opcode space decodes but passes through the pipeline with value 0.

/// SPECIAL opcode class; the all-zero word doubles as the no-op.
pub const SPECIAL: u8 = 0x00;

/// Immediate add. The one opcode family the execute stage implements:
/// `gpr[rd] <- gpr[rs] + immediate`, 32-bit wraparound.
pub const ADDIU: u8 = 0x08;
