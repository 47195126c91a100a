use super::GameBoyBus;
use crate::machine::InterruptFlags;

impl GameBoyBus {
    pub(super) fn cpu_write(&mut self, addr: u16, value: u8) {
        match addr {
            // ROM area writes drive the mapper's bank registers.
            0x0000..=0x7FFF => self.cartridge.rom_write(addr, value),

            // Dropped while the PPU is drawing.
            0x8000..=0x9FFF => self.ppu.cpu_write_vram(addr, value),

            0xA000..=0xBFFF => self.cartridge.ram_write(addr, value),

            0xC000..=0xDFFF => self.wram[usize::from(addr - 0xC000)] = value,
            0xE000..=0xFDFF => self.wram[usize::from(addr - 0xE000)] = value,

            0xFE00..=0xFE9F => {
                if !self.dma.blocks_oam() {
                    self.ppu.cpu_write_oam(addr, value);
                }
            }

            0xFF00 => self.joypad.write(value),
            0xFF01 | 0xFF02 => self.serial.write(addr, value),
            0xFF04..=0xFF07 => self.timer.write(addr, value),

            // Only the five request bits are writable.
            0xFF0F => self.iflags = InterruptFlags::from_bits_truncate(value),

            0xFF10..=0xFF3F => self.apu.write_register(addr, value),
            0xFF46 => self.dma.start(value),
            0xFF40..=0xFF4B => self.ppu.write_register(addr, value, &mut self.iflags),

            0xFF80..=0xFFFE => self.hram[usize::from(addr - 0xFF80)] = value,
            0xFFFF => self.ie = value,

            // Unusable area and undefined I/O: accepted without effect.
            _ => log::trace!("GB bus: ignored write 0x{value:02X} to 0x{addr:04X}"),
        }
    }
}
