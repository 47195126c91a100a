mod header;
mod mbc1;

pub use header::CartridgeHeader;
use mbc1::Mbc1;

use crate::error::{GbError, Result};

/// Bank-register state for the supported controllers.
#[derive(Clone, Debug)]
enum Mapper {
    RomOnly,
    Mbc1(Mbc1),
}

/// Cartridge ROM plus external RAM behind its memory bank controller.
pub(crate) struct Cartridge {
    header: CartridgeHeader,
    rom: Vec<u8>,
    ram: Vec<u8>,
    mapper: Mapper,
}

impl Cartridge {
    pub(crate) fn new(rom: &[u8]) -> Result<Self> {
        let header = CartridgeHeader::parse(rom)?;

        let mapper = match header.cartridge_type {
            0x00 => Mapper::RomOnly,
            0x01..=0x03 => Mapper::Mbc1(Mbc1::new(header.rom_bank_count(), header.ram_bank_count())),
            other => return Err(GbError::UnsupportedCartridgeType(other)),
        };

        if !header.header_checksum_ok() {
            log::warn!(
                "GB cartridge: header checksum mismatch (stored 0x{:02X})",
                header.header_checksum
            );
        }
        if rom.len() < header.rom_size_kb() * 1024 {
            log::warn!(
                "GB cartridge: ROM is {} bytes but the header declares {} KiB",
                rom.len(),
                header.rom_size_kb()
            );
        }

        let ram = match mapper {
            Mapper::RomOnly => Vec::new(),
            Mapper::Mbc1(_) => vec![0xFF; header.ram_size_kb() * 1024],
        };

        log::info!(
            "GB cartridge: \"{}\" type=0x{:02X} ({}) rom={}KiB ram={}KiB",
            header.title,
            header.cartridge_type,
            header.type_name(),
            header.rom_size_kb(),
            header.ram_size_kb(),
        );

        Ok(Self {
            header,
            rom: rom.to_vec(),
            ram,
            mapper,
        })
    }

    pub(crate) fn header(&self) -> &CartridgeHeader {
        &self.header
    }

    /// Read from 0x0000-0x7FFF. Bytes past the end of the image read 0xFF.
    pub(crate) fn rom_read(&self, addr: u16) -> u8 {
        let offset = match &self.mapper {
            Mapper::RomOnly => usize::from(addr),
            Mapper::Mbc1(mbc) => mbc.rom_offset(addr),
        };
        self.rom.get(offset).copied().unwrap_or(0xFF)
    }

    /// Writes to the ROM window program the bank registers.
    pub(crate) fn rom_write(&mut self, addr: u16, value: u8) {
        match &mut self.mapper {
            Mapper::RomOnly => {
                log::trace!("GB cartridge: ignored ROM write 0x{addr:04X}=0x{value:02X}");
            }
            Mapper::Mbc1(mbc) => mbc.write_register(addr, value),
        }
    }

    pub(crate) fn ram_read(&self, addr: u16) -> u8 {
        match self.ram_index(addr) {
            Some(index) => self.ram[index],
            None => 0xFF,
        }
    }

    pub(crate) fn ram_write(&mut self, addr: u16, value: u8) {
        if let Some(index) = self.ram_index(addr) {
            self.ram[index] = value;
        }
    }

    /// Index into `ram` for 0xA000-0xBFFF. RAM smaller than the window
    /// mirrors within it.
    fn ram_index(&self, addr: u16) -> Option<usize> {
        if self.ram.is_empty() {
            return None;
        }
        let offset = match &self.mapper {
            Mapper::RomOnly => return None,
            Mapper::Mbc1(mbc) => mbc.ram_offset(addr)?,
        };
        Some(offset % self.ram.len())
    }
}
