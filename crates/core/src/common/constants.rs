//! Global system constants.
//!
//! This module defines system-wide constants used across the simulator:
//! 1. **Memory Map:** RDRAM base, default size, and segment masking.
//! 2. **Boot Constants:** Reset vectors and the post-boot entry point.
//! 3. **Instruction Constants:** Field shifts and masks for decoding.
//! 4. **Simulation Constants:** Frame cycle counts and the trace interval.
//! 5. **ROM Header Constants:** Offsets of the descriptor fields.

/// Mask translating a kernel-segment virtual address to physical (KSEG0/KSEG1
/// both mirror the low 512 MiB).
pub const SEGMENT_MASK: u32 = 0x1FFF_FFFF;

/// Physical base address where RDRAM is registered on the bus.
pub const RDRAM_BASE: u32 = 0x8000_0000;

/// Default RDRAM size in whole mebibytes.
pub const DEFAULT_RDRAM_MIB: usize = 4;

/// Program counter value at cold reset (PIF ROM vector).
pub const RESET_PC: u32 = 0xBFC0_0000;

/// Program counter value at reset for the direct (unpipelined) variant,
/// which skips the PIF and starts at the IPL3 entry in SP DMEM.
pub const RESET_PC_DIRECT: u32 = 0xA400_0040;

/// Entry vector the core jumps to on its first step (firmware hand-off).
pub const BOOT_VECTOR: u32 = 0x8000_0400;

/// Size of one instruction word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Number of general-purpose integer registers.
pub const GPR_COUNT: usize = 32;

/// Number of floating-point registers.
pub const FPR_COUNT: usize = 32;

/// CP0 status register value at reset.
pub const STATUS_RESET: u32 = 0x3400_0000;

/// Classic pipeline depth (fetch, decode, execute, memory, writeback).
pub const PIPELINE_DEPTH: usize = 5;

/// CPU cycles executed per video frame by the pipelined core.
pub const CYCLES_PER_FRAME: u64 = 1000;

/// CPU cycles executed per video frame by the unpipelined variant
/// (93.75 MHz NTSC clock / 60 frames, scaled down by the stub core).
pub const CYCLES_PER_FRAME_DIRECT: u64 = 1562;

/// Number of cycles between periodic trace lines.
pub const TRACE_INTERVAL: u64 = 500;

/// Bit position shift for the opcode field of an instruction word.
pub const OPCODE_SHIFT: u32 = 26;

/// Bit mask for the opcode field after shifting.
pub const OPCODE_MASK: u32 = 0x3F;

/// Bit position shift for the rs (source) register field.
pub const RS_SHIFT: u32 = 21;

/// Bit position shift for the rt (target) register field.
pub const RT_SHIFT: u32 = 16;

/// Bit position shift for the rd (destination) register field.
pub const RD_SHIFT: u32 = 11;

/// Bit mask for a 5-bit register index field after shifting.
pub const REG_MASK: u32 = 0x1F;

/// Bit mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;

/// Bit mask for the 26-bit jump target field.
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Length of the ROM header region a descriptor can be parsed from.
pub const ROM_HEADER_LEN: usize = 0x40;

/// Byte offset of the first CRC word in the ROM header.
pub const ROM_CRC1_OFFSET: usize = 0x10;

/// Byte offset of the second CRC word in the ROM header.
pub const ROM_CRC2_OFFSET: usize = 0x14;

/// Byte offset of the internal name field in the ROM header.
pub const ROM_NAME_OFFSET: usize = 0x20;

/// Length in bytes of the internal name field.
pub const ROM_NAME_LEN: usize = 0x14;
