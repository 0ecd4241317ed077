//! N64-style system simulator library.
//!
//! This crate implements an instruction-level simulator of a simplified
//! pipelined R4300i-class CPU attached to a memory-mapped bus:
//! 1. **Core:** Five-stage pipeline shift register, GPR/FPR/CP0 state, and the
//!    one-way boot transition.
//! 2. **ISA:** Reduced MIPS-style instruction word decoding (one implemented
//!    opcode family; everything else passes through as a no-op).
//! 3. **SoC:** Device-registration bus and the RDRAM memory device.
//! 4. **Simulation:** ROM loading, configuration, and the frame-stepping
//!    `System` facade consumed by frontends.
//!
//! The simulator is deliberately not cycle-accurate: it reproduces the
//! behavior of a small HLE core, stubs included, rather than real hardware.

/// Common types and constants (addresses, errors, field masks).
pub mod common;
/// Simulator configuration (defaults, fetch strategy, hierarchical structure).
pub mod config;
/// CPU core (register file, pipeline, step/boot/reset logic).
pub mod core;
/// Instruction word decoding and opcode constants.
pub mod isa;
/// ROM ingestion and the top-level `System`.
pub mod sim;
/// System-on-chip pieces (bus, device trait, RDRAM).
pub mod soc;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, pipeline, and cycle counters.
pub use crate::core::Cpu;
/// Top-level system (CPU plus bus/RDRAM pair); construct with `System::new`.
pub use crate::sim::System;
