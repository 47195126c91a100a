//! Synthetic ROM images for machine-level tests.

/// Where [`rom_only`] places the program.
pub(crate) const PROGRAM_START: u16 = 0x0150;

/// 32 KiB ROM-only image titled "TEST" with a valid header checksum.
/// Execution starts at 0x0100 with `NOP; JP 0x0150`, and `program` is
/// copied to 0x0150.
pub(crate) fn rom_only(program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0100..0x0104].copy_from_slice(&[0x00, 0xC3, 0x50, 0x01]);
    rom[0x0134..0x0138].copy_from_slice(b"TEST");
    rom[0x0147] = 0x00;
    rom[0x0148] = 0x00;
    rom[0x0149] = 0x00;
    let start = usize::from(PROGRAM_START);
    rom[start..start + program.len()].copy_from_slice(program);
    fix_header_checksum(&mut rom);
    rom
}

pub(crate) fn fix_header_checksum(rom: &mut [u8]) {
    rom[0x014D] = rom[0x0134..=0x014C]
        .iter()
        .fold(0u8, |x, &b| x.wrapping_sub(b).wrapping_sub(1));
}
