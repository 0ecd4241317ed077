//! ROM descriptor parsing tests.

use n64sim_core::sim::rom::RomInfo;
use pretty_assertions::assert_eq;

fn image_with_header() -> Vec<u8> {
    let mut image = vec![0u8; 0x1000];
    image[0x10..0x14].copy_from_slice(&0xDEAD_BEEFu32.to_be_bytes());
    image[0x14..0x18].copy_from_slice(&0xCAFE_D00Du32.to_be_bytes());
    image[0x20..0x2D].copy_from_slice(b"SUPER TESTER ");
    image
}

#[test]
fn header_fields_pass_through_unmodified() {
    let info = RomInfo::parse(&image_with_header());
    assert_eq!(info.name, "SUPER TESTER");
    assert_eq!(info.crc1, 0xDEAD_BEEF);
    assert_eq!(info.crc2, 0xCAFE_D00D);
    assert_eq!(info.region, "NTSC");
    assert_eq!(info.cic, "6102");
    assert_eq!(info.size, 0x1000);
}

#[test]
fn short_image_yields_the_placeholder_descriptor() {
    let info = RomInfo::parse(&[1, 2, 3]);
    assert_eq!(info.name, "No ROM");
    assert_eq!(info.crc1, 0);
    assert_eq!(info.crc2, 0);
    assert_eq!(info.size, 3);
}

#[test]
fn empty_name_field_falls_back_to_generic() {
    let mut image = vec![0u8; 0x40];
    image[0x20..0x34].fill(0);
    let info = RomInfo::parse(&image);
    assert_eq!(info.name, "Demo ROM");
}

#[test]
fn nul_padding_is_trimmed_from_the_name() {
    let mut image = vec![0u8; 0x40];
    image[0x20..0x24].copy_from_slice(b"PONG");
    let info = RomInfo::parse(&image);
    assert_eq!(info.name, "PONG");
}

#[test]
fn default_descriptor_is_the_no_rom_placeholder() {
    let info = RomInfo::default();
    assert_eq!(info.name, "No ROM");
    assert_eq!(info.size, 0);
}
