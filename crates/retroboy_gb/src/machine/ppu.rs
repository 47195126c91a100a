//! Pixel processing unit.
//!
//! The PPU advances one dot per T-cycle through OAM scan (80 dots), pixel
//! transfer (172-180 dots depending on SCX) and HBlank for each of the 144
//! visible lines, followed by ten VBlank lines. A line is rendered into the
//! back buffer when its pixel transfer ends.

mod access;
mod framebuffer;
mod registers;
mod render;
mod timing;

pub use framebuffer::{FrameBuffer, FrameSnapshot};
use registers::{Lcdc, StatSelect};

use crate::config::Palette;
use framebuffer::FRAME_BYTES;

/// PPU mode as reported in STAT bits 0-1.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Mode {
    HBlank = 0,
    VBlank = 1,
    OamScan = 2,
    Drawing = 3,
}

pub(super) struct Ppu {
    vram: Box<[u8; 0x2000]>,
    oam: [u8; 0xA0],

    lcdc: Lcdc,
    stat_select: StatSelect,
    scy: u8,
    scx: u8,
    ly: u8,
    lyc: u8,
    bgp: u8,
    obp0: u8,
    obp1: u8,
    wy: u8,
    wx: u8,

    mode: Mode,
    /// Dot within the current line (0..456).
    dot: u16,
    /// Length of pixel transfer on the current line, latched from SCX.
    drawing_dots: u16,
    /// Logical OR of all enabled STAT sources, for edge detection.
    stat_line: bool,
    /// Internal window line counter; only advances on lines that drew the
    /// window.
    window_line: u8,

    palette: Palette,
    back: Vec<u8>,
    frame: FrameBuffer,
}

impl Ppu {
    pub(super) fn new(palette: Palette) -> Self {
        let blank = palette.shade(0);
        Self {
            vram: Box::new([0; 0x2000]),
            oam: [0; 0xA0],
            lcdc: Lcdc::from_bits_retain(0x91),
            stat_select: StatSelect::empty(),
            scy: 0,
            scx: 0,
            ly: 0,
            lyc: 0,
            bgp: 0xFC,
            obp0: 0xFF,
            obp1: 0xFF,
            wy: 0,
            wx: 0,
            mode: Mode::OamScan,
            dot: 0,
            drawing_dots: timing::drawing_dots(0),
            stat_line: false,
            window_line: 0,
            palette,
            back: blank.repeat(FRAME_BYTES / 4),
            frame: FrameBuffer::new(blank),
        }
    }

    pub(super) fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame
    }

    #[inline]
    pub(super) fn lcd_enabled(&self) -> bool {
        self.lcdc.contains(Lcdc::LCD_ENABLE)
    }

    #[cfg(test)]
    pub(super) fn mode(&self) -> Mode {
        self.mode
    }

    #[cfg(test)]
    pub(super) fn ly(&self) -> u8 {
        self.ly
    }
}
