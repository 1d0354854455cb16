//! Renderer: owns the framebuffer and the atlases it draws from, and hands
//! finished frames to the display surface.

use super::framebuffer::Framebuffer;
use super::types::{Color, DrawOptions, Image, Rect, ShapeOptions, SpriteOptions, TextOptions};
use crate::font::Font;

/// Per-pixel color transform applied at present time: (color, row, col)
pub type Postprocess = Box<dyn Fn(Color, usize, usize) -> Color>;

/// Display target supplied by the host
pub trait Surface {
    /// Current size in pixels
    fn size(&self) -> (usize, usize);

    /// Show a finished RGBA frame
    fn present(&mut self, pixels: &[u8], width: usize, height: usize);
}

/// Error type for renderer construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererError {
    SurfaceUnavailable { width: usize, height: usize },
}

impl std::fmt::Display for RendererError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RendererError::SurfaceUnavailable { width, height } => {
                write!(f, "Unable to create drawing surface ({}x{})", width, height)
            }
        }
    }
}

impl std::error::Error for RendererError {}

pub struct Renderer {
    pub fb: Framebuffer,
    pub spritesheet: Option<Image>,
    pub font: Option<Font>,
    pub postprocess: Option<Postprocess>,
    /// Postprocessed copy of the last presented frame
    output: Vec<u8>,
}

impl Renderer {
    pub fn new(surface: &dyn Surface) -> Result<Self, RendererError> {
        let (width, height) = surface.size();
        if width == 0 || height == 0 {
            return Err(RendererError::SurfaceUnavailable { width, height });
        }

        Ok(Self {
            fb: Framebuffer::new(width, height),
            spritesheet: None,
            font: None,
            postprocess: None,
            output: Vec::new(),
        })
    }

    pub fn with_spritesheet(mut self, sheet: Image) -> Self {
        self.spritesheet = Some(sheet);
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_postprocess(mut self, f: impl Fn(Color, usize, usize) -> Color + 'static) -> Self {
        self.postprocess = Some(Box::new(f));
        self
    }

    pub fn width(&self) -> usize {
        self.fb.width
    }

    pub fn height(&self) -> usize {
        self.fb.height
    }

    /// Reallocate buffers to the surface's current size
    pub fn resize(&mut self, surface: &dyn Surface) {
        let (width, height) = surface.size();
        self.fb.resize(width, height);
    }

    pub fn clear(&mut self, color: Color) {
        self.fb.clear(color);
    }

    pub fn center(&mut self, x: f32, y: f32) {
        self.fb.center(x, y);
    }

    pub fn pixel(&mut self, x: f32, y: f32, opt: impl Into<DrawOptions>) {
        self.fb.pixel(x, y, opt.into());
    }

    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, opt: impl Into<DrawOptions>) {
        self.fb.line(x0, y0, x1, y1, opt);
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, opt: impl Into<ShapeOptions>) {
        self.fb.rect(x, y, w, h, opt);
    }

    pub fn circle(&mut self, x: f32, y: f32, r: f32, opt: impl Into<ShapeOptions>) {
        self.fb.circle(x, y, r, opt);
    }

    pub fn sprite(&mut self, x: f32, y: f32, rect: Rect, opt: SpriteOptions) {
        let Some(sheet) = &self.spritesheet else {
            tracing::warn!("sprite() called without a sprite sheet");
            return;
        };
        self.fb.blit(sheet, x, y, rect, opt);
    }

    pub fn text(&mut self, text: &str, x: f32, y: f32, opt: impl Into<TextOptions>) {
        let Some(font) = &self.font else {
            tracing::warn!("text() called without a font");
            return;
        };
        font.draw_text(&mut self.fb, text, x, y, opt.into());
    }

    /// Width of `text` in pixels, 0 without a font
    pub fn text_width(&self, text: &str) -> i32 {
        self.font.as_ref().map_or(0, |font| font.text_width(text))
    }

    /// Finish the frame: run the postprocess and present to the surface
    pub fn update(&mut self, surface: &mut dyn Surface) {
        let Some(post) = &self.postprocess else {
            surface.present(&self.fb.pixels, self.fb.width, self.fb.height);
            return;
        };

        self.output.clear();
        self.output.reserve(self.fb.pixels.len());
        for (i, px) in self.fb.pixels.chunks_exact(4).enumerate() {
            let row = i / self.fb.width;
            let col = i % self.fb.width;
            let c = post(Color::new(px[0], px[1], px[2]), row, col);
            self.output.extend_from_slice(&[c.r, c.g, c.b, px[3]]);
        }

        surface.present(&self.output, self.fb.width, self.fb.height);
    }
}
