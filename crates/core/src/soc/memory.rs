//! RDRAM: the main memory device.
//!
//! This module implements the system's backing byte store. It provides:
//! 1. **Storage:** A fixed-size store, sized in whole mebibytes at
//!    construction.
//! 2. **Word access:** Big-endian 32-bit reads and writes; every byte
//!    address wraps modulo the store size, approximating the hardware's
//!    segment mirroring. No access can go out of bounds by construction.
//! 3. **ROM ingestion:** `load_rom` copies an image byte-for-byte from
//!    offset 0 (wrapping likewise) and retains the raw image alongside its
//!    parsed descriptor for frontend display.

use crate::sim::rom::RomInfo;
use crate::soc::traits::Device;

const MIB: usize = 1024 * 1024;

/// Main memory device with ROM-image ownership.
pub struct Rdram {
    bytes: Vec<u8>,
    base: u32,
    rom: Vec<u8>,
    rom_info: RomInfo,
}

impl Rdram {
    /// Creates a zero-filled store of `size_mib` mebibytes, claiming the bus
    /// range starting at `base`.
    pub fn new(size_mib: usize, base: u32) -> Self {
        Self {
            bytes: vec![0; size_mib.max(1) * MIB],
            base,
            rom: Vec::new(),
            rom_info: RomInfo::default(),
        }
    }

    /// Store size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the store is empty (never true; a store is at least 1 MiB).
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Copies a ROM image into the store starting at offset 0, each byte
    /// offset wrapped modulo the store size, and retains the raw image.
    ///
    /// # Returns
    ///
    /// The descriptor parsed from the image header.
    pub fn load_rom(&mut self, data: &[u8]) -> RomInfo {
        let size = self.bytes.len();
        for (i, byte) in data.iter().enumerate() {
            self.bytes[i % size] = *byte;
        }
        self.rom = data.to_vec();
        self.rom_info = RomInfo::parse(data);
        tracing::info!(bytes = data.len(), name = %self.rom_info.name, "loaded ROM");
        self.rom_info.clone()
    }

    /// The most recently loaded raw ROM image.
    pub fn rom(&self) -> &[u8] {
        &self.rom
    }

    /// Descriptor of the most recently loaded ROM image.
    pub fn rom_info(&self) -> &RomInfo {
        &self.rom_info
    }

    /// Reads one byte at a wrapped offset.
    pub fn read_u8(&self, offset: u32) -> u8 {
        self.bytes[offset as usize % self.bytes.len()]
    }

    /// Writes one byte at a wrapped offset.
    pub fn write_u8(&mut self, offset: u32, val: u8) {
        let size = self.bytes.len();
        self.bytes[offset as usize % size] = val;
    }
}

impl Device for Rdram {
    fn name(&self) -> &str {
        "RDRAM"
    }

    fn address_range(&self) -> (u32, u32) {
        (self.base, self.bytes.len() as u32)
    }

    /// Reads a word (32-bit) from memory, big-endian.
    fn read_u32(&mut self, offset: u32) -> u32 {
        let size = self.bytes.len();
        let mut word = [0u8; 4];
        for (i, byte) in word.iter_mut().enumerate() {
            *byte = self.bytes[(offset as usize + i) % size];
        }
        u32::from_be_bytes(word)
    }

    /// Writes a word (32-bit) to memory, big-endian.
    fn write_u32(&mut self, offset: u32, val: u32) {
        let size = self.bytes.len();
        for (i, byte) in val.to_be_bytes().iter().enumerate() {
            self.bytes[(offset as usize + i) % size] = *byte;
        }
    }

    fn as_rdram_mut(&mut self) -> Option<&mut Rdram> {
        Some(self)
    }
}
