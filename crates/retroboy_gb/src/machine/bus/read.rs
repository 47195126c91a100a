use super::GameBoyBus;

impl GameBoyBus {
    /// CPU-visible read, honouring the PPU and DMA access locks.
    pub(super) fn cpu_read(&self, addr: u16) -> u8 {
        match addr {
            // Cartridge ROM, routed through the mapper.
            0x0000..=0x7FFF => self.cartridge.rom_read(addr),

            // VRAM reads 0xFF while the PPU is drawing.
            0x8000..=0x9FFF => self.ppu.cpu_read_vram(addr),

            0xA000..=0xBFFF => self.cartridge.ram_read(addr),

            0xC000..=0xDFFF => self.wram[usize::from(addr - 0xC000)],

            // Echo RAM: 0xE000..0xFDFF mirrors 0xC000..0xDDFF.
            0xE000..=0xFDFF => self.wram[usize::from(addr - 0xE000)],

            0xFE00..=0xFE9F => {
                if self.dma.blocks_oam() {
                    0xFF
                } else {
                    self.ppu.cpu_read_oam(addr)
                }
            }

            // Unusable area.
            0xFEA0..=0xFEFF => 0xFF,

            0xFF00 => self.joypad.read(),
            0xFF01 | 0xFF02 => self.serial.read(addr),
            0xFF04..=0xFF07 => self.timer.read(addr),
            0xFF0F => self.iflags.bits() | 0xE0,
            0xFF10..=0xFF3F => self.apu.read_register(addr),
            0xFF46 => self.dma.register(),
            0xFF40..=0xFF4B => self.ppu.read_register(addr),

            0xFF80..=0xFFFE => self.hram[usize::from(addr - 0xFF80)],
            0xFFFF => self.ie,

            // Unmapped I/O, including the colour-console registers.
            _ => 0xFF,
        }
    }
}
