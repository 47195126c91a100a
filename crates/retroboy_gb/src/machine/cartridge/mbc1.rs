/// MBC1 bank registers.
///
/// The 5-bit register at 0x2000-0x3FFF selects the low ROM bank bits (0 is
/// remapped to 1). The 2-bit register at 0x4000-0x5FFF supplies ROM bank
/// bits 5-6, or the RAM bank in advanced mode. The mode bit at 0x6000-0x7FFF
/// also lets the secondary register bank the 0x0000-0x3FFF window.
#[derive(Clone, Debug)]
pub(super) struct Mbc1 {
    ram_enabled: bool,
    bank_low: u8,
    bank_high: u8,
    advanced_mode: bool,
    rom_bank_mask: usize,
    ram_bank_mask: usize,
}

impl Mbc1 {
    pub(super) fn new(rom_banks: usize, ram_banks: usize) -> Self {
        Self {
            ram_enabled: false,
            bank_low: 1,
            bank_high: 0,
            advanced_mode: false,
            rom_bank_mask: rom_banks.max(1) - 1,
            ram_bank_mask: ram_banks.max(1) - 1,
        }
    }

    pub(super) fn write_register(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram_enabled = value & 0x0F == 0x0A,
            0x2000..=0x3FFF => {
                self.bank_low = match value & 0x1F {
                    0 => 1,
                    bank => bank,
                };
                log::debug!("GB MBC1: ROM bank -> {}", self.rom_bank());
            }
            0x4000..=0x5FFF => self.bank_high = value & 0x03,
            0x6000..=0x7FFF => self.advanced_mode = value & 0x01 != 0,
            _ => {}
        }
    }

    /// Bank mapped into 0x4000-0x7FFF.
    pub(super) fn rom_bank(&self) -> usize {
        ((usize::from(self.bank_high) << 5) | usize::from(self.bank_low)) & self.rom_bank_mask
    }

    /// Byte offset into ROM for a CPU address in 0x0000-0x7FFF.
    pub(super) fn rom_offset(&self, addr: u16) -> usize {
        let bank = if addr < 0x4000 {
            if self.advanced_mode {
                (usize::from(self.bank_high) << 5) & self.rom_bank_mask
            } else {
                0
            }
        } else {
            self.rom_bank()
        };
        debug_assert!(bank <= self.rom_bank_mask);
        bank * 0x4000 + usize::from(addr & 0x3FFF)
    }

    /// Byte offset into external RAM for 0xA000-0xBFFF, or `None` while RAM
    /// is disabled.
    pub(super) fn ram_offset(&self, addr: u16) -> Option<usize> {
        if !self.ram_enabled {
            return None;
        }
        let bank = if self.advanced_mode {
            usize::from(self.bank_high) & self.ram_bank_mask
        } else {
            0
        };
        Some(bank * 0x2000 + usize::from(addr - 0xA000))
    }
}
