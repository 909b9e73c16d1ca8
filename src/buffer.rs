/// Pixel buffer and sprite blitter — a pure drawing surface with no game
/// logic. Coordinates are y-up with the origin at the bottom-left, and
/// sprites are anchored at their bottom-left corner, so "higher y" means
/// closer to the top of the screen.
use crate::sprites::{Sprite, SpriteStore};

/// Pack an RGB triple into a 32-bit RGBA word (alpha fixed at 255).
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | 255
}

/// Framebuffer of packed RGBA words, row-major from the bottom row up.
pub struct Buffer {
    width: i32,
    height: i32,
    data: Vec<u32>,
}

impl Buffer {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Color at (x, y). Callers are expected to stay in bounds.
    pub fn get(&self, x: i32, y: i32) -> u32 {
        debug_assert!(x >= 0 && x < self.width && y >= 0 && y < self.height);
        self.data[(y * self.width + x) as usize]
    }

    pub fn clear(&mut self, color: u32) {
        self.data.fill(color);
    }

    /// Paint one full horizontal row.
    pub fn fill_row(&mut self, y: i32, color: u32) {
        if y < 0 || y >= self.height {
            return;
        }
        let start = (y * self.width) as usize;
        self.data[start..start + self.width as usize].fill(color);
    }

    /// Blit a 1-bit sprite at (x, y), its bottom-left corner. Zero texels
    /// are transparent and off-buffer texels are clipped.
    pub fn draw_sprite(&mut self, sprite: &Sprite, x: i32, y: i32, color: u32) {
        for yi in 0..sprite.height {
            // Bitmap rows are stored top-first; flip into y-up space.
            let sy = y + sprite.height - 1 - yi;
            if sy < 0 || sy >= self.height {
                continue;
            }
            for xi in 0..sprite.width {
                let sx = x + xi;
                if sx < 0 || sx >= self.width {
                    continue;
                }
                if sprite.data[(yi * sprite.width + xi) as usize] != 0 {
                    self.data[(sy * self.width + sx) as usize] = color;
                }
            }
        }
    }

    /// Draw a text run glyph by glyph with one pixel of spacing.
    /// Characters off the font sheet still advance the cursor.
    pub fn draw_text(&mut self, sprites: &SpriteStore, text: &str, x: i32, y: i32, color: u32) {
        let mut xp = x;
        for c in text.chars() {
            if let Some(id) = sprites.glyph(c) {
                let glyph = sprites.get(id);
                self.draw_sprite(glyph, xp, y, color);
                xp += glyph.width + 1;
            } else {
                xp += 6;
            }
        }
    }

    /// Draw an unsigned decimal number, most significant digit at (x, y).
    pub fn draw_number(&mut self, sprites: &SpriteStore, value: u32, x: i32, y: i32, color: u32) {
        let mut digits = [0u32; 10];
        let mut count = 0;
        let mut rest = value;
        loop {
            digits[count] = rest % 10;
            count += 1;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }

        let mut xp = x;
        for i in (0..count).rev() {
            let glyph = sprites.get(sprites.digit(digits[i]));
            self.draw_sprite(glyph, xp, y, color);
            xp += glyph.width + 1;
        }
    }
}
