use bitflags::bitflags;

use super::{Mode, Ppu};
use crate::machine::InterruptFlags;

bitflags! {
    /// LCDC (0xFF40).
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub(crate) struct Lcdc: u8 {
        const LCD_ENABLE = 1 << 7;
        /// Window tile map at 0x9C00 instead of 0x9800.
        const WINDOW_MAP = 1 << 6;
        const WINDOW_ENABLE = 1 << 5;
        /// Unsigned tile data at 0x8000 instead of signed at 0x8800.
        const TILE_DATA = 1 << 4;
        /// Background tile map at 0x9C00 instead of 0x9800.
        const BG_MAP = 1 << 3;
        /// 8×16 sprites.
        const OBJ_SIZE = 1 << 2;
        const OBJ_ENABLE = 1 << 1;
        /// On DMG: background and window enable.
        const BG_ENABLE = 1 << 0;
    }
}

bitflags! {
    /// Writable STAT (0xFF41) interrupt selects.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub(crate) struct StatSelect: u8 {
        const LYC = 1 << 6;
        const OAM = 1 << 5;
        const VBLANK = 1 << 4;
        const HBLANK = 1 << 3;
    }
}

impl Ppu {
    /// Read an LCD register (0xFF40-0xFF4B, excluding DMA at 0xFF46).
    pub(in crate::machine) fn read_register(&self, addr: u16) -> u8 {
        match addr {
            0xFF40 => self.lcdc.bits(),
            0xFF41 => self.read_stat(),
            0xFF42 => self.scy,
            0xFF43 => self.scx,
            0xFF44 => self.ly,
            0xFF45 => self.lyc,
            0xFF47 => self.bgp,
            0xFF48 => self.obp0,
            0xFF49 => self.obp1,
            0xFF4A => self.wy,
            0xFF4B => self.wx,
            _ => 0xFF,
        }
    }

    pub(in crate::machine) fn write_register(
        &mut self,
        addr: u16,
        value: u8,
        iflags: &mut InterruptFlags,
    ) {
        match addr {
            0xFF40 => self.write_lcdc(value, iflags),
            0xFF41 => {
                // Only the interrupt selects are writable; mode and the
                // coincidence flag are driven by the PPU.
                self.stat_select = StatSelect::from_bits_truncate(value);
                self.update_lcd_status(iflags);
            }
            0xFF42 => self.scy = value,
            0xFF43 => self.scx = value,
            0xFF44 => {
                #[cfg(debug_assertions)]
                log::debug!("GB PPU: ignored write 0x{value:02X} to read-only LY");
            }
            0xFF45 => {
                self.lyc = value;
                self.update_lcd_status(iflags);
            }
            0xFF47 => self.bgp = value,
            0xFF48 => self.obp0 = value,
            0xFF49 => self.obp1 = value,
            0xFF4A => self.wy = value,
            0xFF4B => self.wx = value,
            _ => {}
        }
    }

    fn read_stat(&self) -> u8 {
        // LCD off reports mode 0 with the coincidence flag still live.
        let mode = if self.lcd_enabled() { self.mode as u8 } else { 0 };
        0x80 | self.stat_select.bits() | (u8::from(self.ly == self.lyc) << 2) | mode
    }

    /// Turning the LCD off parks the PPU at the start of line 0 in HBlank;
    /// turning it back on restarts from OAM scan of line 0.
    fn write_lcdc(&mut self, value: u8, iflags: &mut InterruptFlags) {
        let was_enabled = self.lcd_enabled();
        self.lcdc = Lcdc::from_bits_retain(value);
        let now_enabled = self.lcd_enabled();

        if was_enabled && !now_enabled {
            log::debug!("GB PPU: LCD off at LY={}", self.ly);
            self.ly = 0;
            self.dot = 0;
            self.mode = Mode::HBlank;
            self.stat_line = false;
            self.blank_screen();
        } else if !was_enabled && now_enabled {
            log::debug!("GB PPU: LCD on");
            self.ly = 0;
            self.dot = 0;
            self.window_line = 0;
            self.mode = Mode::OamScan;
            self.stat_line = false;
        }

        self.update_lcd_status(iflags);
    }
}
