//! ROM file loading.
//!
//! Reads raw image bytes from disk. No format validation happens here: any
//! byte sequence is a loadable image, and header interpretation is the
//! descriptor's job.

use std::fs;
use std::path::Path;

use crate::common::SimError;

/// Reads a ROM image file into a byte vector.
///
/// # Errors
///
/// Returns `SimError::RomRead` when the file cannot be read. The caller's
/// simulator state is untouched by a failed read.
pub fn read_rom_file(path: impl AsRef<Path>) -> Result<Vec<u8>, SimError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| SimError::RomRead {
        path: path.to_path_buf(),
        source,
    })
}
