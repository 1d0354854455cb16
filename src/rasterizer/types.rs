//! Core types for the rasterizer

/// RGB color (0-255 per channel). Alpha is implicit: every draw is opaque.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Apply shading (multiply by intensity 0.0-1.0)
    pub fn shade(self, intensity: f32) -> Self {
        let i = intensity.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * i) as u8,
            g: (self.g as f32 * i) as u8,
            b: (self.b as f32 * i) as u8,
        }
    }

    /// Convert to [u8; 4] for the framebuffer (always fully opaque)
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Self {
        Color::new(c[0], c[1], c[2])
    }
}

/// Options shared by every draw call.
///
/// A bare `Color` converts into options without a depth, which always
/// overwrites the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawOptions {
    pub color: Color,
    pub depth: Option<f32>,
}

impl DrawOptions {
    pub fn new(color: Color) -> Self {
        Self { color, depth: None }
    }

    pub fn with_depth(color: Color, depth: f32) -> Self {
        Self { color, depth: Some(depth) }
    }
}

impl From<Color> for DrawOptions {
    fn from(color: Color) -> Self {
        DrawOptions::new(color)
    }
}

/// Options for filled shapes (rect, circle)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeOptions {
    pub color: Color,
    pub depth: Option<f32>,
    /// `false` requests an outline. Outlines are not rasterized yet.
    pub fill: bool,
}

impl ShapeOptions {
    pub fn stroke(color: Color) -> Self {
        Self { color, depth: None, fill: false }
    }

    pub fn draw(&self) -> DrawOptions {
        DrawOptions { color: self.color, depth: self.depth }
    }
}

impl From<Color> for ShapeOptions {
    fn from(color: Color) -> Self {
        Self { color, depth: None, fill: true }
    }
}

impl From<DrawOptions> for ShapeOptions {
    fn from(opt: DrawOptions) -> Self {
        Self { color: opt.color, depth: opt.depth, fill: true }
    }
}

/// Options for sprite blits
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpriteOptions {
    pub flip_x: bool,
    pub flip_y: bool,
    pub depth: Option<f32>,
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical text alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Options for text rendering
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextOptions {
    pub color: Color,
    pub depth: Option<f32>,
    pub align: TextAlign,
    pub vertical_align: VerticalAlign,
    /// Wrap width in pixels. `None` splits on newlines only.
    pub width: Option<f32>,
}

impl TextOptions {
    pub fn draw(&self) -> DrawOptions {
        DrawOptions { color: self.color, depth: self.depth }
    }
}

impl From<Color> for TextOptions {
    fn from(color: Color) -> Self {
        Self { color, ..Default::default() }
    }
}

impl From<DrawOptions> for TextOptions {
    fn from(opt: DrawOptions) -> Self {
        Self { color: opt.color, depth: opt.depth, ..Default::default() }
    }
}

/// Integer pixel rectangle inside an atlas image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Decoded RGBA image (4 bytes per pixel, row-major)
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl Image {
    /// Fully transparent image
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * 4],
        }
    }

    /// Wrap an existing RGBA buffer. Returns `None` if the length is wrong.
    pub fn from_rgba(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        if data.len() != width * height * 4 {
            return None;
        }
        Some(Self { width, height, data })
    }

    /// Get pixel at x,y coordinates
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        let i = (y as usize * self.width + x as usize) * 4;
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        if x < self.width && y < self.height {
            let i = (y * self.width + x) * 4;
            self.data[i..i + 4].copy_from_slice(&rgba);
        }
    }
}
