//! Host configuration
//!
//! Uses RON (Rusty Object Notation) for human-readable config files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default minimum resolution along the smallest screen dimension
pub const DEFAULT_DIMENSION: u32 = 196;

/// Minimum logical resolution: one value for both axes, or (w, h)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimensions {
    Square(u32),
    Pair(u32, u32),
}

impl Dimensions {
    pub fn size(self) -> (u32, u32) {
        match self {
            Dimensions::Square(d) => (d, d),
            Dimensions::Pair(w, h) => (w, h),
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::Square(DEFAULT_DIMENSION)
    }
}

/// Bitmap font atlas description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
    /// Path to the atlas image
    pub src: String,
    /// Characters in atlas order, left to right, top to bottom
    pub letters: String,
    /// Glyph cell size
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dimensions: Dimensions,
    /// Use exactly `dimensions` instead of filling the window
    pub crop: bool,
    pub max_scale: Option<u32>,
    pub show_fps: bool,
    pub spritesheet: Option<String>,
    pub font: Option<FontConfig>,
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load a config from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(s)?)
    }
}

/// Where the logical surface sits inside the host window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Logical surface size in pixels
    pub width: usize,
    pub height: usize,
    /// Integer upscale factor
    pub scale: u32,
    /// Top-left corner of the scaled surface in window pixels
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Viewport {
    /// Pick the largest integer scale that fits `dimensions` in the window
    pub fn compute(window_w: f32, window_h: f32, config: &Config) -> Self {
        let (w, h) = config.dimensions.size();
        let (w, h) = (w.max(1), h.max(1));

        let mut scale = ((window_w / w as f32).floor()).min((window_h / h as f32).floor()) as u32;
        if let Some(max) = config.max_scale {
            scale = scale.min(max);
        }
        let scale = scale.max(1);

        let (width, height) = if config.crop {
            (w as usize, h as usize)
        } else {
            (
                (window_w / scale as f32) as usize,
                (window_h / scale as f32) as usize,
            )
        };

        Self {
            width,
            height,
            scale,
            offset_x: (window_w - (width as u32 * scale) as f32) / 2.0,
            offset_y: (window_h - (height as u32 * scale) as f32) / 2.0,
        }
    }
}
