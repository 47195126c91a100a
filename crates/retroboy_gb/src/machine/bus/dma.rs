use super::GameBoyBus;

/// T-cycles before the first byte moves.
const STARTUP_TCYCLES: u16 = 4;
const OAM_BYTES: u16 = 0xA0;
/// Start-up plus one byte per M-cycle.
const DURATION_TCYCLES: u16 = STARTUP_TCYCLES + OAM_BYTES * 4;

/// OAM DMA (0xFF46): copies 160 bytes from `XX00` into OAM, one byte per
/// M-cycle after a one M-cycle start-up delay.
#[derive(Clone, Debug, Default)]
pub(super) struct OamDma {
    /// Last value written to 0xFF46.
    register: u8,
    source: u16,
    /// T-cycles since the transfer was requested.
    elapsed: u16,
    active: bool,
}

impl OamDma {
    pub(super) fn register(&self) -> u8 {
        self.register
    }

    /// Start (or restart) a transfer from page `value`.
    pub(super) fn start(&mut self, value: u8) {
        let mut source = u16::from(value) << 8;
        // Pages 0xE0-0xFF fold back into work RAM.
        if source >= 0xE000 {
            source &= !0x2000;
        }
        log::debug!("GB DMA: OAM transfer from 0x{source:04X}");
        self.register = value;
        self.source = source;
        self.elapsed = 0;
        self.active = true;
    }

    /// Whether the CPU is locked out of OAM.
    pub(super) fn blocks_oam(&self) -> bool {
        self.active && self.elapsed >= STARTUP_TCYCLES
    }

    /// Advance one T-cycle. Returns `(source address, OAM index)` when a
    /// byte is due.
    fn tick(&mut self) -> Option<(u16, u8)> {
        if !self.active {
            return None;
        }
        self.elapsed += 1;
        if self.elapsed <= STARTUP_TCYCLES || (self.elapsed - STARTUP_TCYCLES) % 4 != 0 {
            return None;
        }

        let index = (self.elapsed - STARTUP_TCYCLES) / 4 - 1;
        if self.elapsed == DURATION_TCYCLES {
            self.active = false;
        }
        Some((self.source + index, index as u8))
    }
}

impl GameBoyBus {
    pub(super) fn tick_dma(&mut self) {
        if let Some((source, index)) = self.dma.tick() {
            let byte = self.dma_source_read(source);
            self.ppu.dma_write_oam(index, byte);
        }
    }

    /// Source read for OAM DMA; it bypasses the PPU's VRAM lock.
    fn dma_source_read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7FFF => self.cartridge.rom_read(addr),
            0x8000..=0x9FFF => self.ppu.dma_read_vram(addr),
            0xA000..=0xBFFF => self.cartridge.ram_read(addr),
            0xC000..=0xDFFF => self.wram[usize::from(addr - 0xC000)],
            _ => 0xFF,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(dma: &mut OamDma, tcycles: u16) -> Vec<(u16, u8)> {
        (0..tcycles).filter_map(|_| dma.tick()).collect()
    }

    #[test]
    fn copies_one_byte_per_mcycle_after_startup() {
        let mut dma = OamDma::default();
        dma.start(0xC1);

        assert!(run(&mut dma, 7).is_empty());
        assert!(dma.blocks_oam());
        assert_eq!(run(&mut dma, 1), vec![(0xC100, 0)]);

        let rest = run(&mut dma, DURATION_TCYCLES - 8);
        assert_eq!(rest.len(), 159);
        assert_eq!(rest.last(), Some(&(0xC19F, 159)));
        assert!(!dma.blocks_oam());
        assert_eq!(dma.register(), 0xC1);
    }

    #[test]
    fn echo_pages_fold_into_work_ram() {
        let mut dma = OamDma::default();
        dma.start(0xFE);
        assert_eq!(run(&mut dma, 8), vec![(0xDE00, 0)]);
    }

    #[test]
    fn restart_begins_again() {
        let mut dma = OamDma::default();
        dma.start(0xC0);
        run(&mut dma, 100);
        dma.start(0xD0);
        assert!(run(&mut dma, 7).is_empty());
        assert_eq!(run(&mut dma, 1), vec![(0xD000, 0)]);
    }
}
