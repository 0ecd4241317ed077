//! ROM image descriptor.
//!
//! A loaded image carries a 64-byte header with an internal name and two
//! checksum words. The descriptor is a pure pass-through of those fields for
//! frontend display; nothing here validates or recomputes them. Images too
//! short to carry a header are still accepted and yield the placeholder
//! descriptor.

use serde::Serialize;

use crate::common::constants::{
    ROM_CRC1_OFFSET, ROM_CRC2_OFFSET, ROM_HEADER_LEN, ROM_NAME_LEN, ROM_NAME_OFFSET,
};

/// Descriptor of a loaded ROM image, extracted from its header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RomInfo {
    /// Internal name from the header, ASCII, NUL/space-trimmed.
    pub name: String,
    /// Region code. The modeled machine is NTSC-only.
    pub region: String,
    /// Header version string.
    pub version: String,
    /// First checksum word, as stored in the header.
    pub crc1: u32,
    /// Second checksum word, as stored in the header.
    pub crc2: u32,
    /// Lockout chip variant.
    pub cic: String,
    /// Image length in bytes.
    pub size: usize,
}

impl Default for RomInfo {
    fn default() -> Self {
        Self {
            name: "No ROM".to_string(),
            region: "NTSC".to_string(),
            version: "1.0".to_string(),
            crc1: 0,
            crc2: 0,
            cic: "6102".to_string(),
            size: 0,
        }
    }
}

impl RomInfo {
    /// Parses the descriptor out of an image's header.
    ///
    /// Images shorter than the header length get the placeholder descriptor
    /// (with the real size filled in); an empty name field falls back to a
    /// generic one.
    pub fn parse(data: &[u8]) -> Self {
        if data.len() < ROM_HEADER_LEN {
            return Self {
                size: data.len(),
                ..Self::default()
            };
        }

        let name: String = data[ROM_NAME_OFFSET..ROM_NAME_OFFSET + ROM_NAME_LEN]
            .iter()
            .filter(|b| b.is_ascii() && **b != 0)
            .map(|b| *b as char)
            .collect();
        let name = name.trim().to_string();

        let crc1 = word_at(data, ROM_CRC1_OFFSET);
        let crc2 = word_at(data, ROM_CRC2_OFFSET);

        Self {
            name: if name.is_empty() {
                "Demo ROM".to_string()
            } else {
                name
            },
            crc1,
            crc2,
            size: data.len(),
            ..Self::default()
        }
    }
}

fn word_at(data: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&data[offset..offset + 4]);
    u32::from_be_bytes(word)
}
