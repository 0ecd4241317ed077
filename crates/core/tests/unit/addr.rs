//! Address type and segment translation tests.

use n64sim_core::common::{PhysAddr, VirtAddr};
use rstest::rstest;

#[rstest]
#[case(0x8000_0400, 0x0000_0400)] // KSEG0
#[case(0xA400_0040, 0x0400_0040)] // KSEG1
#[case(0xBFC0_0000, 0x1FC0_0000)] // PIF ROM vector
#[case(0x0000_1000, 0x0000_1000)] // already physical
#[case(0xFFFF_FFFF, 0x1FFF_FFFF)]
fn segment_translation_masks_high_bits(#[case] vaddr: u32, #[case] paddr: u32) {
    assert_eq!(VirtAddr::new(vaddr).to_phys(), PhysAddr::new(paddr));
}

#[test]
fn raw_value_roundtrip() {
    assert_eq!(VirtAddr::new(0x1234_5678).val(), 0x1234_5678);
    assert_eq!(PhysAddr::new(0x0BAD_F00D).val(), 0x0BAD_F00D);
}
