//! System interconnect (bus) for memory-mapped access.
//!
//! This module implements the bus that routes 32-bit word accesses to
//! devices. It provides:
//! 1. **Device registration:** Devices claim an address range; overlapping
//!    registrations resolve to the most recently added device.
//! 2. **Access routing:** Word read/write by physical address, with unmapped
//!    reads returning 0 and unmapped writes silently dropped.
//! 3. **RAM fast path:** Direct backing-store access bypassing range
//!    dispatch, for the direct fetch strategy and for ROM loading.

use crate::common::PhysAddr;
use crate::common::constants::WORD_BYTES;
use crate::soc::memory::Rdram;
use crate::soc::traits::Device;

/// System bus connecting the CPU and devices; routes accesses by physical
/// address range.
pub struct Bus {
    /// Registered devices, in registration order (boxed for dynamic
    /// dispatch). Lookup scans newest-first so later registrations win at
    /// overlapping addresses.
    devices: Vec<Box<dyn Device>>,
    ram_idx: Option<usize>,
}

impl Bus {
    /// Creates an empty bus with no devices; add devices with `add_device`.
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
            ram_idx: None,
        }
    }

    /// Registers a device over the address range it reports.
    ///
    /// Registration order is precedence order: where ranges overlap, the
    /// device registered last claims the address. No overlap detection is
    /// performed.
    pub fn add_device(&mut self, dev: Box<dyn Device>) {
        self.devices.push(dev);
        self.ram_idx = self.devices.iter().position(|d| d.name() == "RDRAM");
    }

    /// Number of registered devices.
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    fn find_device(&mut self, paddr: PhysAddr) -> Option<(&mut Box<dyn Device>, u32)> {
        // Word accesses are masked to 4-byte alignment before matching; this
        // is the documented policy for caller-supplied unaligned addresses.
        let addr = paddr.val() & !(WORD_BYTES - 1);
        for dev in self.devices.iter_mut().rev() {
            let (start, size) = dev.address_range();
            if addr >= start && (addr - start) < size {
                return Some((dev, addr - start));
            }
        }
        None
    }

    /// Reads a 32-bit word at the given physical address.
    ///
    /// # Returns
    ///
    /// The mapped device's value, or 0 when no device claims the address.
    pub fn read32(&mut self, paddr: PhysAddr) -> u32 {
        match self.find_device(paddr) {
            Some((dev, offset)) => dev.read_u32(offset),
            None => 0,
        }
    }

    /// Writes a 32-bit word at the given physical address.
    ///
    /// A write to an address no device claims is a silent no-op.
    pub fn write32(&mut self, paddr: PhysAddr, val: u32) {
        if let Some((dev, offset)) = self.find_device(paddr) {
            dev.write_u32(offset, val);
        }
    }

    /// Reads a 32-bit word straight from the RAM backing store, bypassing
    /// range dispatch (the physical address is used as a store offset and
    /// wraps within it).
    ///
    /// # Returns
    ///
    /// The stored word, or 0 when no RAM device is registered.
    pub fn ram_read32(&mut self, paddr: PhysAddr) -> u32 {
        let addr = paddr.val() & !(WORD_BYTES - 1);
        match self.ram_idx {
            Some(idx) => self.devices[idx].read_u32(addr),
            None => 0,
        }
    }

    /// Returns the RAM device for ROM loading and descriptor access, if one
    /// is registered.
    pub fn rdram_mut(&mut self) -> Option<&mut Rdram> {
        let idx = self.ram_idx?;
        self.devices[idx].as_rdram_mut()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}
