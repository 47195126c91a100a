use super::{Mode, Ppu};

impl Ppu {
    /// VRAM is blocked for the CPU during pixel transfer (mode 3). While the
    /// LCD is off it is always accessible.
    fn vram_accessible(&self) -> bool {
        !self.lcd_enabled() || self.mode != Mode::Drawing
    }

    /// OAM is blocked during OAM scan and pixel transfer (modes 2 and 3).
    fn oam_accessible(&self) -> bool {
        !self.lcd_enabled() || matches!(self.mode, Mode::HBlank | Mode::VBlank)
    }

    pub(in crate::machine) fn cpu_read_vram(&self, addr: u16) -> u8 {
        if self.vram_accessible() {
            self.vram[usize::from(addr & 0x1FFF)]
        } else {
            0xFF
        }
    }

    pub(in crate::machine) fn cpu_write_vram(&mut self, addr: u16, value: u8) {
        if self.vram_accessible() {
            self.vram[usize::from(addr & 0x1FFF)] = value;
        }
    }

    pub(in crate::machine) fn cpu_read_oam(&self, addr: u16) -> u8 {
        if self.oam_accessible() {
            self.oam[usize::from(addr - 0xFE00)]
        } else {
            0xFF
        }
    }

    pub(in crate::machine) fn cpu_write_oam(&mut self, addr: u16, value: u8) {
        if self.oam_accessible() {
            self.oam[usize::from(addr - 0xFE00)] = value;
        }
    }

    /// VRAM as seen by OAM DMA, which ignores the mode lock.
    pub(in crate::machine) fn dma_read_vram(&self, addr: u16) -> u8 {
        self.vram[usize::from(addr & 0x1FFF)]
    }

    pub(in crate::machine) fn dma_write_oam(&mut self, index: u8, value: u8) {
        self.oam[usize::from(index)] = value;
    }
}
