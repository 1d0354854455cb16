//! Text measurement, word wrapping and rendering

use super::glyphs::Font;
use crate::rasterizer::{Framebuffer, TextAlign, TextOptions, VerticalAlign};

/// Running width of a line of text. Glyphs after the first get one pixel of
/// spacing; spaces and unknown characters advance by `space_width`.
struct Measure<'a> {
    font: &'a Font,
    width: i32,
}

impl<'a> Measure<'a> {
    fn new(font: &'a Font) -> Self {
        Self { font, width: 0 }
    }

    /// Advance by one character, returning the x offset its glyph starts at
    fn push(&mut self, c: char) -> i32 {
        match self.font.glyph(c) {
            Some(g) => {
                if self.width > 0 {
                    self.width += 1;
                }
                let start = self.width;
                self.width += g.w;
                start
            }
            None => {
                let start = self.width;
                self.width += self.font.space_width;
                start
            }
        }
    }
}

impl Font {
    pub fn text_width(&self, text: &str) -> i32 {
        let mut m = Measure::new(self);
        for c in text.chars() {
            m.push(c);
        }
        m.width
    }

    /// Greedy word wrap.
    ///
    /// Characters are appended until a space or newline. A space is kept if
    /// the line still fits afterwards. Otherwise the line ends there, or, if
    /// it has already overflowed, at the last space it contains, carrying the
    /// trailing word over to the next line.
    pub fn break_into_lines(&self, text: &str, width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let mut line = String::new();
        let mut line_width = 0;

        let fits = |w: i32| w as f32 <= width;

        for c in text.chars() {
            if c != ' ' && c != '\n' {
                let mut m = Measure { font: self, width: line_width };
                m.push(c);
                line_width = m.width;
                line.push(c);
                continue;
            }

            if c == ' ' && fits(line_width + self.space_width) {
                line.push(' ');
                line_width += self.space_width;
                continue;
            }

            if !fits(line_width) {
                if let Some(i) = line.rfind(' ') {
                    let rest = line.split_off(i + 1);
                    line.pop();
                    lines.push(std::mem::replace(&mut line, rest));
                    line_width = self.text_width(&line);
                }
            }

            if c == ' ' && fits(line_width + self.space_width) {
                line.push(' ');
                line_width += self.space_width;
            } else {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
        }

        if !fits(line_width) {
            if let Some(i) = line.rfind(' ') {
                let rest = line.split_off(i + 1);
                line.pop();
                lines.push(std::mem::replace(&mut line, rest));
            }
        }
        lines.push(line);

        lines
    }

    /// Render `text` with its anchor at (x, y)
    pub fn draw_text(&self, fb: &mut Framebuffer, text: &str, x: f32, y: f32, opt: TextOptions) {
        let lines: Vec<String> = match opt.width {
            Some(w) => self.break_into_lines(text, w),
            None => text.split('\n').map(str::to_owned).collect(),
        };

        let count = lines.len() as i32;
        let block_height = count * self.line_height + (count - 1);
        let top = y + vertical_offset(opt.vertical_align, block_height) as f32;
        let draw = opt.draw();

        for (row, line) in lines.iter().enumerate() {
            let left = x + horizontal_offset(opt.align, self.text_width(line)) as f32;
            let line_y = top + (row as i32 * (self.line_height + 1)) as f32;

            let mut m = Measure::new(self);
            for c in line.chars() {
                let start = m.push(c);
                let Some(g) = self.glyph(c) else {
                    continue;
                };

                for gy in 0..g.h {
                    for gx in 0..g.w {
                        if matches!(self.image.pixel(g.x + gx, g.y + gy), Some([_, _, _, a]) if a > 0) {
                            fb.pixel(left + (start + gx) as f32, line_y + gy as f32, draw);
                        }
                    }
                }
            }
        }
    }
}

fn horizontal_offset(align: TextAlign, width: i32) -> i32 {
    match align {
        TextAlign::Left => 0,
        TextAlign::Center => -width.div_euclid(2),
        TextAlign::Right => -(width + 1),
    }
}

fn vertical_offset(align: VerticalAlign, height: i32) -> i32 {
    match align {
        VerticalAlign::Top => 0,
        VerticalAlign::Middle => -height.div_euclid(2),
        VerticalAlign::Bottom => -(height + 1),
    }
}
