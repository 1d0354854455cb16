//! Depth-tested framebuffer
//! Every draw call ends up in `Framebuffer::pixel`.

use super::types::{Color, DrawOptions};

/// Framebuffer for software rendering
pub struct Framebuffer {
    pub pixels: Vec<u8>,   // RGBA, 4 bytes per pixel
    pub depth: Vec<f32>,   // Depth buffer, larger values are closer
    pub width: usize,
    pub height: usize,
    camera_x: i32,
    camera_y: i32,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            depth: vec![f32::NEG_INFINITY; width * height],
            width,
            height,
            camera_x: 0,
            camera_y: 0,
        }
    }

    /// Reallocate both buffers. Pixel and depth contents are discarded,
    /// the camera offset is kept.
    pub fn resize(&mut self, width: usize, height: usize) {
        tracing::debug!(width, height, "reallocating framebuffer");
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width * height * 4];
        self.depth = vec![f32::NEG_INFINITY; width * height];
    }

    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
        self.depth.fill(f32::NEG_INFINITY);
    }

    /// Write a single pixel in world coordinates.
    ///
    /// Coordinates are truncated toward zero, then shifted by the camera.
    /// Writes outside the buffer are dropped. With a depth, the write only
    /// lands if the stored depth is less than or equal to it, so ties go to
    /// the newest draw.
    pub fn pixel(&mut self, x: f32, y: f32, opt: DrawOptions) {
        self.put(x as i64, y as i64, opt);
    }

    /// `pixel` for coordinates that are already integers
    pub(super) fn put(&mut self, x: i64, y: i64, opt: DrawOptions) {
        let x = x.saturating_sub(self.camera_x as i64);
        let y = y.saturating_sub(self.camera_y as i64);

        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }

        let idx = y as usize * self.width + x as usize;

        if let Some(depth) = opt.depth {
            if self.depth[idx] > depth {
                return;
            }
            self.depth[idx] = depth;
        }

        let pixel_idx = idx * 4;
        self.pixels[pixel_idx..pixel_idx + 4].copy_from_slice(&opt.color.to_bytes());
    }

    /// Move the camera so world point (x, y) lands in the middle of the buffer
    pub fn center(&mut self, x: f32, y: f32) {
        self.camera_x = (x - self.width as f32 / 2.0) as i32;
        self.camera_y = (y - self.height as f32 / 2.0) as i32;
    }

    pub fn camera(&self) -> (i32, i32) {
        (self.camera_x, self.camera_y)
    }

    /// Inclusive world-space bounds currently on screen: (min_x, min_y, max_x, max_y)
    pub(super) fn visible_bounds(&self) -> (i64, i64, i64, i64) {
        let (cx, cy) = (self.camera_x as i64, self.camera_y as i64);
        (cx, cy, cx + self.width as i64 - 1, cy + self.height as i64 - 1)
    }

    /// Read back a pixel in buffer coordinates (camera not applied)
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]])
    }

    pub fn depth_at(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.depth[y * self.width + x])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_writes_opaque_color() {
        let mut fb = Framebuffer::new(4, 4);
        let c = Color::new(10, 20, 30);
        fb.pixel(2.0, 3.0, c.into());
        assert_eq!(fb.get_pixel(2, 3), Some([10, 20, 30, 255]));
    }

    #[test]
    fn test_pixel_truncates_toward_zero() {
        let mut fb = Framebuffer::new(4, 4);
        fb.pixel(1.9, 2.7, Color::RED.into());
        assert_eq!(fb.get_pixel(1, 2), Some([255, 0, 0, 255]));

        // -0.5 truncates to 0, not -1
        fb.pixel(-0.5, 0.0, Color::GREEN.into());
        assert_eq!(fb.get_pixel(0, 0), Some([0, 255, 0, 255]));
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let mut fb = Framebuffer::new(3, 3);
        fb.clear(Color::BLACK);
        let before = fb.pixels.clone();
        for (x, y) in [(-1.0, 0.0), (0.0, -1.0), (3.0, 0.0), (0.0, 3.0), (100.0, 100.0)] {
            fb.pixel(x, y, Color::WHITE.into());
        }
        assert_eq!(fb.pixels, before);
    }

    #[test]
    fn test_depth_lower_does_not_overwrite() {
        let mut fb = Framebuffer::new(2, 2);
        fb.clear(Color::BLACK);
        fb.pixel(0.0, 0.0, DrawOptions::with_depth(Color::RED, 1.0));
        fb.pixel(0.0, 0.0, DrawOptions::with_depth(Color::BLUE, 0.0));
        assert_eq!(fb.get_pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(fb.depth_at(0, 0), Some(1.0));
    }

    #[test]
    fn test_depth_tie_overwrites() {
        let mut fb = Framebuffer::new(2, 2);
        fb.clear(Color::BLACK);
        fb.pixel(0.0, 0.0, DrawOptions::with_depth(Color::RED, 1.0));
        fb.pixel(0.0, 0.0, DrawOptions::with_depth(Color::BLUE, 1.0));
        assert_eq!(fb.get_pixel(0, 0), Some([0, 0, 255, 255]));
    }

    #[test]
    fn test_no_depth_ignores_occlusion() {
        let mut fb = Framebuffer::new(2, 2);
        fb.clear(Color::BLACK);
        fb.pixel(1.0, 1.0, DrawOptions::with_depth(Color::RED, 5.0));
        fb.pixel(1.0, 1.0, Color::GREEN.into());
        assert_eq!(fb.get_pixel(1, 1), Some([0, 255, 0, 255]));
        // depth untouched by a depthless write
        assert_eq!(fb.depth_at(1, 1), Some(5.0));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut fb = Framebuffer::new(3, 2);
        fb.pixel(0.0, 0.0, DrawOptions::with_depth(Color::RED, 3.0));
        fb.clear(Color::new(1, 2, 3));
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(fb.get_pixel(x, y), Some([1, 2, 3, 255]));
                assert_eq!(fb.depth_at(x, y), Some(f32::NEG_INFINITY));
            }
        }
    }

    #[test]
    fn test_center_shifts_camera() {
        let mut fb = Framebuffer::new(10, 6);
        fb.center(50.0, 40.0);
        assert_eq!(fb.camera(), (45, 37));
        fb.pixel(50.0, 40.0, Color::WHITE.into());
        assert_eq!(fb.get_pixel(5, 3), Some([255, 255, 255, 255]));
        // world origin is now off screen
        fb.pixel(0.0, 0.0, Color::RED.into());
        assert!(fb.pixels.chunks_exact(4).all(|p| p != [255, 0, 0, 255]));
    }

    #[test]
    fn test_far_offscreen_with_camera_is_noop() {
        let mut fb = Framebuffer::new(4, 4);
        fb.clear(Color::BLACK);
        fb.center(50.0, 50.0);
        let before = fb.pixels.clone();
        fb.pixel(-3.0e9, 0.0, Color::WHITE.into());
        fb.pixel(3.0e9, 3.0e9, Color::WHITE.into());
        fb.center(-50.0, -50.0);
        fb.pixel(3.0e9, 0.0, Color::WHITE.into());
        fb.pixel(f32::MIN, f32::MAX, Color::WHITE.into());
        assert_eq!(fb.pixels, before);
    }

    #[test]
    fn test_resize_discards_state() {
        let mut fb = Framebuffer::new(2, 2);
        fb.clear(Color::WHITE);
        fb.resize(3, 1);
        assert_eq!(fb.pixels.len(), 12);
        assert_eq!(fb.depth.len(), 3);
        assert_eq!(fb.get_pixel(0, 0), Some([0, 0, 0, 0]));
    }
}
