//! System-on-chip components: bus, device trait, and main memory.

/// System bus interconnect and routing.
pub mod interconnect;
/// RDRAM main memory device.
pub mod memory;
/// Device trait definition for memory-mapped access.
pub mod traits;

pub use interconnect::Bus;
pub use memory::Rdram;
pub use traits::Device;
