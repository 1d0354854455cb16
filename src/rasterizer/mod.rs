//! Pixel-art software rasterizer
//!
//! Features:
//! - Depth-tested RGBA framebuffer with a camera offset
//! - Bresenham lines, filled rectangles, midpoint circles
//! - Sprite blitting from an atlas with flips and binary transparency
//! - Optional per-pixel postprocess when the frame is presented

mod framebuffer;
mod primitives;
mod renderer;
mod sprite;
mod types;

pub use framebuffer::*;
pub use renderer::*;
pub use types::*;
