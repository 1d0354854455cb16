//! Pixelframe: fixed-resolution software rasterizer for pixel-art games
//!
//! The host owns the window and the main loop. Once per frame it clears the
//! renderer, issues draw calls, and calls `Renderer::update` to present:
//! - Depth-tested framebuffer with a camera offset
//! - Lines, rectangles and circles
//! - Sprites from an atlas image
//! - Bitmap-font text with wrapping and alignment

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod assets;
pub mod clock;
pub mod config;
pub mod font;
pub mod rasterizer;

pub use clock::FrameClock;
pub use config::{Config, Viewport};
pub use font::Font;
pub use rasterizer::{
    Color, DrawOptions, Image, Rect, Renderer, ShapeOptions, SpriteOptions, Surface, TextAlign,
    TextOptions, VerticalAlign,
};
