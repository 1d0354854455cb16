//! Sprite blitting from an atlas image

use super::framebuffer::Framebuffer;
use super::types::{Color, DrawOptions, Image, Rect, SpriteOptions};

impl Framebuffer {
    /// Copy `rect` from `sheet` to (x, y). Transparent source pixels are
    /// skipped; any non-zero alpha is drawn fully opaque.
    pub fn blit(&mut self, sheet: &Image, x: f32, y: f32, rect: Rect, opt: SpriteOptions) {
        for sy in 0..rect.h {
            for sx in 0..rect.w {
                let Some([r, g, b, a]) = sheet.pixel(rect.x + sx, rect.y + sy) else {
                    continue;
                };
                if a == 0 {
                    continue;
                }

                // Flips mirror around the sprite's centre line
                let dx = if opt.flip_x { rect.w - sx } else { sx };
                let dy = if opt.flip_y { rect.h - sy } else { sy };

                self.pixel(
                    x + dx as f32,
                    y + dy as f32,
                    DrawOptions {
                        color: Color::new(r, g, b),
                        depth: opt.depth,
                    },
                );
            }
        }
    }
}
