//! Bitmap font atlas
//!
//! Glyphs live on a fixed grid inside one image, in the order given by the
//! font's character sequence. Each glyph is trimmed horizontally to the
//! columns that contain opaque pixels.

use std::collections::HashMap;

use crate::rasterizer::Image;

/// Width used for spaces and characters missing from the atlas
pub const DEFAULT_SPACE_WIDTH: i32 = 3;

/// Location of one glyph inside the atlas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

pub struct Font {
    pub image: Image,
    pub letters: HashMap<char, Glyph>,
    pub space_width: i32,
    pub line_height: i32,
}

impl Font {
    /// Scan `image` as a grid of `cell_w` x `cell_h` cells labelled by `sequence`
    pub fn new(image: Image, cell_w: i32, cell_h: i32, sequence: &str) -> Self {
        let letters = scan_glyphs(&image, cell_w, cell_h, sequence);
        tracing::debug!(glyphs = letters.len(), "scanned font atlas");

        Self {
            image,
            letters,
            space_width: DEFAULT_SPACE_WIDTH,
            line_height: cell_h,
        }
    }

    pub fn glyph(&self, c: char) -> Option<Glyph> {
        self.letters.get(&c).copied()
    }
}

fn scan_glyphs(image: &Image, cell_w: i32, cell_h: i32, sequence: &str) -> HashMap<char, Glyph> {
    let mut letters = HashMap::new();
    if cell_w <= 0 || cell_h <= 0 {
        return letters;
    }

    let mut x = 0;
    let mut y = 0;

    for c in sequence.chars() {
        if c != ' ' {
            let mut left = x + cell_w;
            let mut right = x;

            for x0 in x..x + cell_w {
                for y0 in y..y + cell_h {
                    if matches!(image.pixel(x0, y0), Some([_, _, _, a]) if a > 0) {
                        left = left.min(x0);
                        right = right.max(x0);
                    }
                }
            }

            // Blank cells get no entry and render as spaces
            if left <= right {
                letters.insert(c, Glyph { x: left, y, w: right - left + 1, h: cell_h });
            }
        }

        x += cell_w;
        if x >= image.width as i32 {
            x = 0;
            y += cell_h;
        }
    }

    letters
}
