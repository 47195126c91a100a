use super::registers::StatSelect;
use super::{Mode, Ppu};
use crate::machine::InterruptFlags;

const DOTS_PER_LINE: u16 = 456;
const OAM_SCAN_DOTS: u16 = 80;
const VISIBLE_LINES: u8 = 144;
const LAST_LINE: u8 = 153;

/// HBlank length by `SCX % 8`; fine scroll stretches pixel transfer.
const HBLANK_DOTS: [u16; 8] = [204, 200, 200, 200, 200, 196, 196, 196];

/// Pixel transfer length for a line with the given SCX.
pub(super) fn drawing_dots(scx: u8) -> u16 {
    DOTS_PER_LINE - OAM_SCAN_DOTS - HBLANK_DOTS[usize::from(scx & 0x07)]
}

impl Ppu {
    /// Advance the PPU by one dot.
    pub(in crate::machine) fn tick_dot(&mut self, iflags: &mut InterruptFlags) {
        if !self.lcd_enabled() {
            return;
        }

        self.dot += 1;
        match self.mode {
            Mode::OamScan => {
                if self.dot == OAM_SCAN_DOTS {
                    self.drawing_dots = drawing_dots(self.scx);
                    self.mode = Mode::Drawing;
                }
            }
            Mode::Drawing => {
                if self.dot == OAM_SCAN_DOTS + self.drawing_dots {
                    self.render_line();
                    self.mode = Mode::HBlank;
                }
            }
            Mode::HBlank => {
                if self.dot == DOTS_PER_LINE {
                    self.dot = 0;
                    self.ly += 1;
                    if self.ly == VISIBLE_LINES {
                        self.enter_vblank(iflags);
                    } else {
                        self.mode = Mode::OamScan;
                    }
                }
            }
            Mode::VBlank => {
                if self.dot == DOTS_PER_LINE {
                    self.dot = 0;
                    if self.ly == LAST_LINE {
                        self.ly = 0;
                        self.window_line = 0;
                        self.mode = Mode::OamScan;
                    } else {
                        self.ly += 1;
                    }
                }
            }
        }

        self.update_lcd_status(iflags);
    }

    fn enter_vblank(&mut self, iflags: &mut InterruptFlags) {
        self.mode = Mode::VBlank;
        *iflags |= InterruptFlags::VBLANK;

        self.frame.publish(&mut self.back);
        log::debug!(
            "GB PPU: VBlank edge, frame {} published",
            self.frame.frame_number()
        );
    }

    fn vblank_first_dot(&self) -> bool {
        self.mode == Mode::VBlank && self.ly == VISIBLE_LINES && self.dot == 0
    }

    /// Recompute the STAT interrupt line and request INT $48 on its rising
    /// edge.
    ///
    /// All enabled sources (LY=LYC, OAM scan, VBlank, HBlank) are ORed into
    /// one line, so a second source becoming active while the line is
    /// already high does not interrupt again.
    pub(super) fn update_lcd_status(&mut self, iflags: &mut InterruptFlags) {
        if !self.lcd_enabled() {
            self.stat_line = false;
            return;
        }

        let select = self.stat_select;
        let line = (select.contains(StatSelect::LYC) && self.ly == self.lyc)
            || (select.contains(StatSelect::OAM) && self.mode == Mode::OamScan)
            || (select.contains(StatSelect::VBLANK) && self.mode == Mode::VBlank)
            // DMG quirk: the OAM select also drives the line on the first dot
            // of VBlank.
            || (select.contains(StatSelect::OAM) && self.vblank_first_dot())
            || (select.contains(StatSelect::HBLANK) && self.mode == Mode::HBlank);

        if line && !self.stat_line {
            *iflags |= InterruptFlags::STAT;
            log::debug!(
                "GB PPU: STAT IRQ rising edge (select=0x{:02X} LY={} mode={:?})",
                select.bits(),
                self.ly,
                self.mode
            );
        }
        self.stat_line = line;
    }
}
