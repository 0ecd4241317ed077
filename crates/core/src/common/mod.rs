//! Common types and constants shared across the simulator.

/// Virtual and physical address types with segment translation.
pub mod addr;
/// Global system constants (memory map, decode fields, trace interval).
pub mod constants;
/// Error types for fallible operations.
pub mod error;

pub use addr::{PhysAddr, VirtAddr};
pub use error::SimError;
