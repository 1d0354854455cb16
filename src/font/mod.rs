//! Bitmap fonts: glyph atlas scanning and text layout

mod glyphs;
mod layout;

pub use glyphs::*;
