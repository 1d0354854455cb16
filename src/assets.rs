//! Image loading for sprite sheets and font atlases
//!
//! Decoding is done by the `image` crate; the rasterizer only ever sees
//! plain RGBA buffers.

use std::path::Path;

use crate::rasterizer::Image;

/// Error type for asset loading
#[derive(Debug)]
pub enum AssetError {
    IoError(std::io::Error),
    DecodeError(image::ImageError),
}

impl From<std::io::Error> for AssetError {
    fn from(e: std::io::Error) -> Self {
        AssetError::IoError(e)
    }
}

impl From<image::ImageError> for AssetError {
    fn from(e: image::ImageError) -> Self {
        AssetError::DecodeError(e)
    }
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::IoError(e) => write!(f, "IO error: {}", e),
            AssetError::DecodeError(e) => write!(f, "Decode error: {}", e),
        }
    }
}

impl std::error::Error for AssetError {}

/// Load an image from a PNG/JPEG/BMP file
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Image, AssetError> {
    let bytes = std::fs::read(path.as_ref())?;
    let img = load_image_from_bytes(&bytes)?;
    tracing::debug!(path = %path.as_ref().display(), width = img.width, height = img.height, "loaded image");
    Ok(img)
}

/// Decode an image from raw file bytes
pub fn load_image_from_bytes(bytes: &[u8]) -> Result<Image, AssetError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Image {
        width: width as usize,
        height: height as usize,
        data: rgba.into_raw(),
    })
}
