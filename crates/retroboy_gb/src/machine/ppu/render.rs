use super::registers::Lcdc;
use super::Ppu;
use crate::SCREEN_WIDTH;

/// Sprites drawn per line at most.
const MAX_SPRITES_PER_LINE: usize = 10;

/// Object attribute bits.
const ATTR_BEHIND_BG: u8 = 1 << 7;
const ATTR_FLIP_Y: u8 = 1 << 6;
const ATTR_FLIP_X: u8 = 1 << 5;
const ATTR_PALETTE: u8 = 1 << 4;

#[derive(Clone, Copy, Debug)]
pub(super) struct Sprite {
    pub(super) index: u8,
    y: i16,
    x: i16,
    tile: u8,
    attrs: u8,
}

impl Ppu {
    /// Render the current line (LY) into the back buffer.
    pub(super) fn render_line(&mut self) {
        let mut colors = [0u8; SCREEN_WIDTH];
        let mut bg_opaque = [false; SCREEN_WIDTH];

        if self.lcdc.contains(Lcdc::BG_ENABLE) {
            self.render_background(&mut colors, &mut bg_opaque);
        }
        if self.lcdc.contains(Lcdc::OBJ_ENABLE) {
            self.render_sprites(&mut colors, &bg_opaque);
        }

        let row = usize::from(self.ly) * SCREEN_WIDTH * 4;
        for (x, &shade) in colors.iter().enumerate() {
            let offset = row + x * 4;
            self.back[offset..offset + 4].copy_from_slice(&self.palette.shade(shade));
        }
    }

    /// Fill the back buffer with colour 0 and publish it, as the screen
    /// shows while the LCD is off.
    pub(super) fn blank_screen(&mut self) {
        let blank = self.palette.shade(0);
        for pixel in self.back.chunks_exact_mut(4) {
            pixel.copy_from_slice(&blank);
        }
        self.frame.publish(&mut self.back);
    }

    /// 2-bit colour index of pixel (`x`, `row`) of a tile.
    fn tile_pixel(&self, tile_addr: u16, row: u8, x: u8) -> u8 {
        let base = usize::from(tile_addr & 0x1FFF) + usize::from(row) * 2;
        let lo = self.vram[base];
        let hi = self.vram[base + 1];
        let bit = 7 - x;
        (((hi >> bit) & 1) << 1) | ((lo >> bit) & 1)
    }

    /// Address of a background/window tile, honouring the LCDC.4 addressing
    /// mode: unsigned from 0x8000, or signed from 0x9000.
    fn bg_tile_addr(&self, tile: u8) -> u16 {
        if self.lcdc.contains(Lcdc::TILE_DATA) {
            0x8000 + u16::from(tile) * 16
        } else {
            0x9000u16.wrapping_add((i16::from(tile as i8) * 16) as u16)
        }
    }

    fn map_tile(&self, map_base: u16, col: u8, row: u8) -> u8 {
        let addr = map_base + u16::from(row / 8) * 32 + u16::from(col / 8);
        self.vram[usize::from(addr & 0x1FFF)]
    }

    fn render_background(&mut self, colors: &mut [u8; SCREEN_WIDTH], opaque: &mut [bool; SCREEN_WIDTH]) {
        let bg_map = if self.lcdc.contains(Lcdc::BG_MAP) { 0x9C00 } else { 0x9800 };
        let win_map = if self.lcdc.contains(Lcdc::WINDOW_MAP) { 0x9C00 } else { 0x9800 };

        let window_visible =
            self.lcdc.contains(Lcdc::WINDOW_ENABLE) && self.ly >= self.wy && self.wx <= 166;
        let window_start = i16::from(self.wx) - 7;

        let bg_y = self.ly.wrapping_add(self.scy);
        let mut window_drawn = false;

        for x in 0..SCREEN_WIDTH {
            let (map, col, row) = if window_visible && x as i16 >= window_start {
                window_drawn = true;
                (win_map, (x as i16 - window_start) as u8, self.window_line)
            } else {
                (bg_map, (x as u8).wrapping_add(self.scx), bg_y)
            };

            let tile = self.map_tile(map, col, row);
            let index = self.tile_pixel(self.bg_tile_addr(tile), row & 7, col & 7);
            opaque[x] = index != 0;
            colors[x] = (self.bgp >> (index * 2)) & 0x03;
        }

        if window_drawn {
            self.window_line = self.window_line.wrapping_add(1);
        }
    }

    /// Sprites on the current line: every OAM entry intersecting LY, of which
    /// the ten with the highest priority (lowest X, then lowest OAM index)
    /// are kept, in priority order.
    pub(super) fn line_sprites(&self, height: i16) -> Vec<Sprite> {
        let ly = i16::from(self.ly);
        let mut sprites: Vec<Sprite> = self
            .oam
            .chunks_exact(4)
            .enumerate()
            .map(|(index, entry)| Sprite {
                index: index as u8,
                y: i16::from(entry[0]) - 16,
                x: i16::from(entry[1]) - 8,
                tile: entry[2],
                attrs: entry[3],
            })
            .filter(|sprite| ly >= sprite.y && ly < sprite.y + height)
            .collect();

        sprites.sort_by_key(|sprite| (sprite.x, sprite.index));
        sprites.truncate(MAX_SPRITES_PER_LINE);
        sprites
    }

    fn render_sprites(&self, colors: &mut [u8; SCREEN_WIDTH], bg_opaque: &[bool; SCREEN_WIDTH]) {
        let height: i16 = if self.lcdc.contains(Lcdc::OBJ_SIZE) { 16 } else { 8 };
        // A column belongs to the highest-priority sprite with an opaque
        // pixel there, even when that pixel ends up hidden behind BG.
        let mut claimed = [false; SCREEN_WIDTH];

        for sprite in self.line_sprites(height) {
            let mut row = (i16::from(self.ly) - sprite.y) as u8;
            if sprite.attrs & ATTR_FLIP_Y != 0 {
                row = (height as u8 - 1) - row;
            }
            let tile = if height == 16 { sprite.tile & 0xFE } else { sprite.tile };
            let tile_addr = 0x8000 + u16::from(tile) * 16;
            let palette = if sprite.attrs & ATTR_PALETTE != 0 {
                self.obp1
            } else {
                self.obp0
            };

            for px in 0..8u8 {
                let x = sprite.x + i16::from(px);
                if !(0..SCREEN_WIDTH as i16).contains(&x) {
                    continue;
                }
                let x = x as usize;
                if claimed[x] {
                    continue;
                }

                let tile_x = if sprite.attrs & ATTR_FLIP_X != 0 { 7 - px } else { px };
                let index = self.tile_pixel(tile_addr, row, tile_x);
                if index == 0 {
                    continue;
                }
                claimed[x] = true;

                if sprite.attrs & ATTR_BEHIND_BG != 0 && bg_opaque[x] {
                    continue;
                }
                colors[x] = (palette >> (index * 2)) & 0x03;
            }
        }
    }
}
