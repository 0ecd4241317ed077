//! ROM file loading tests.

use n64sim_core::common::SimError;
use n64sim_core::sim::loader;
use std::io::Write;

#[test]
fn reads_raw_bytes_without_validation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let payload: Vec<u8> = (0u16..300).map(|i| (i % 256) as u8).collect();
    file.write_all(&payload).unwrap();

    let data = loader::read_rom_file(file.path()).unwrap();
    assert_eq!(data, payload);
}

#[test]
fn empty_file_is_a_valid_image() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let data = loader::read_rom_file(file.path()).unwrap();
    assert!(data.is_empty());
}

#[test]
fn missing_file_reports_path_and_cause() {
    let err = loader::read_rom_file("/nonexistent/image.z64").unwrap_err();
    match &err {
        SimError::RomRead { path, .. } => {
            assert_eq!(path.to_string_lossy(), "/nonexistent/image.z64");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
    assert!(err.to_string().contains("could not read ROM file"));
}
