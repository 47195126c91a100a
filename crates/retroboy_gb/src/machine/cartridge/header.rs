use crate::error::{GbError, Result};

/// Cartridge header fields at 0x0100-0x014F.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CartridgeHeader {
    /// Title from 0x0134-0x0143, cut at the first NUL.
    pub title: String,
    /// Controller type byte at 0x0147.
    pub cartridge_type: u8,
    pub rom_size_code: u8,
    pub ram_size_code: u8,
    /// Checksum stored at 0x014D.
    pub header_checksum: u8,
    /// Big-endian checksum at 0x014E-0x014F. Not verified by hardware.
    pub global_checksum: u16,
    computed_checksum: u8,
}

impl CartridgeHeader {
    pub const END: usize = 0x0150;

    pub fn parse(rom: &[u8]) -> Result<Self> {
        if rom.len() < Self::END {
            return Err(GbError::RomTooSmall { len: rom.len() });
        }

        let title = rom[0x0134..=0x0143]
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '?'
                }
            })
            .collect::<String>();

        let rom_size_code = rom[0x0148];
        if rom_size_code > 0x08 {
            return Err(GbError::InvalidRomSize(rom_size_code));
        }
        let ram_size_code = rom[0x0149];
        if ram_size_code > 0x05 {
            return Err(GbError::InvalidRamSize(ram_size_code));
        }

        Ok(Self {
            title,
            cartridge_type: rom[0x0147],
            rom_size_code,
            ram_size_code,
            header_checksum: rom[0x014D],
            global_checksum: u16::from_be_bytes([rom[0x014E], rom[0x014F]]),
            computed_checksum: header_checksum(rom),
        })
    }

    /// ROM size in KiB: 32 KiB shifted left by the size code.
    pub fn rom_size_kb(&self) -> usize {
        32 << self.rom_size_code
    }

    pub fn ram_size_kb(&self) -> usize {
        match self.ram_size_code {
            0x01 => 2,
            0x02 => 8,
            0x03 => 32,
            0x04 => 128,
            0x05 => 64,
            _ => 0,
        }
    }

    /// Number of 16 KiB ROM banks.
    pub fn rom_bank_count(&self) -> usize {
        self.rom_size_kb() / 16
    }

    /// Number of 8 KiB RAM banks. A 2 KiB RAM still occupies one bank.
    pub fn ram_bank_count(&self) -> usize {
        self.ram_size_kb().div_ceil(8)
    }

    pub fn header_checksum_ok(&self) -> bool {
        self.computed_checksum == self.header_checksum
    }

    pub fn type_name(&self) -> &'static str {
        match self.cartridge_type {
            0x00 => "ROM ONLY",
            0x01 => "MBC1",
            0x02 => "MBC1+RAM",
            0x03 => "MBC1+RAM+BATTERY",
            _ => "UNKNOWN",
        }
    }
}

/// Boot ROM header checksum over 0x0134..=0x014C.
pub(super) fn header_checksum(rom: &[u8]) -> u8 {
    rom[0x0134..=0x014C]
        .iter()
        .fold(0u8, |x, &b| x.wrapping_sub(b).wrapping_sub(1))
}
