//! Line, rectangle and circle rasterization
//! All shapes are written through `Framebuffer::pixel`, so they share
//! clipping, camera offset and depth testing.

use super::framebuffer::Framebuffer;
use super::types::{DrawOptions, ShapeOptions};

/// Integer coordinates are kept within this range so Bresenham and midpoint
/// arithmetic cannot overflow.
const COORD_LIMIT: i64 = 1 << 60;

fn to_coord(v: f32) -> i64 {
    (v as i64).clamp(-COORD_LIMIT, COORD_LIMIT)
}

impl Framebuffer {
    /// Draw a line from (x0, y0) to (x1, y1) using Bresenham's algorithm.
    /// Both endpoints are drawn.
    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, opt: impl Into<DrawOptions>) {
        let opt = opt.into();
        let (mut x0, mut y0, mut x1, mut y1) = (to_coord(x0), to_coord(y0), to_coord(x1), to_coord(y1));

        // Always walk in the same direction so a line and its reverse cover
        // the same pixels.
        if (x1, y1) < (x0, y0) {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let (min_x, min_y, max_x, max_y) = self.visible_bounds();
        if x0.max(x1) < min_x || x0.min(x1) > max_x || y0.max(y1) < min_y || y0.min(y1) > max_y {
            return;
        }

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            self.put(x, y, opt);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }

            // x never decreases and y only moves towards y1, so once past the
            // visible area the rest of the line stays outside it
            if x > max_x || (sy > 0 && y > max_y) || (sy < 0 && y < min_y) {
                break;
            }
        }
    }

    /// Fill every pixel in [x, x + w) x [y, y + h)
    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, opt: impl Into<ShapeOptions>) {
        let opt = opt.into();
        if !opt.fill {
            // TODO: outline rasterization for stroke-only rects
            return;
        }

        let draw = opt.draw();
        for j in 0..h.ceil() as i64 {
            for i in 0..w.ceil() as i64 {
                self.pixel(x + i as f32, y + j as f32, draw);
            }
        }
    }

    /// Draw a filled circle using the midpoint algorithm, one horizontal span
    /// per scanline.
    pub fn circle(&mut self, x: f32, y: f32, r: f32, opt: impl Into<ShapeOptions>) {
        let opt = opt.into();
        if !opt.fill {
            // TODO: outline rasterization for stroke-only circles
            return;
        }

        let draw = opt.draw();
        let (x, y, r) = (to_coord(x), to_coord(y), to_coord(r));

        let (min_x, min_y, max_x, max_y) = self.visible_bounds();
        let reach = r.abs();
        if x + reach < min_x || x - reach > max_x || y + reach < min_y || y - reach > max_y {
            return;
        }

        let mut cx = r;
        let mut cy = 0;
        let mut f = 1 - r;
        let mut ddf_x = -2 * r;
        let mut ddf_y = 1;

        // Poles and the full diameter
        self.put(x, y + r, draw);
        self.put(x, y - r, draw);
        self.span(x - r, x + r, y, draw);

        while cy < cx {
            if f >= 0 {
                cx -= 1;
                ddf_x += 2;
                f += ddf_x;
            }

            cy += 1;
            ddf_y += 2;
            f += ddf_y;

            self.span(x - cx, x + cx, y + cy, draw);
            self.span(x - cx, x + cx, y - cy, draw);
            self.span(x - cy, x + cy, y + cx, draw);
            self.span(x - cy, x + cy, y - cx, draw);
        }
    }

    /// Horizontal run [x0, x1] at row y, trimmed to the visible columns
    fn span(&mut self, x0: i64, x1: i64, y: i64, opt: DrawOptions) {
        let (min_x, min_y, max_x, max_y) = self.visible_bounds();
        if y < min_y || y > max_y {
            return;
        }
        for x in x0.max(min_x)..=x1.min(max_x) {
            self.put(x, y, opt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::Color;
    use super::*;
    use std::collections::BTreeSet;

    const MARK: [u8; 4] = [255, 255, 255, 255];

    fn lit(fb: &Framebuffer) -> BTreeSet<(usize, usize)> {
        let mut set = BTreeSet::new();
        for y in 0..fb.height {
            for x in 0..fb.width {
                if fb.get_pixel(x, y) == Some(MARK) {
                    set.insert((x, y));
                }
            }
        }
        set
    }

    fn canvas() -> Framebuffer {
        let mut fb = Framebuffer::new(16, 16);
        fb.clear(Color::BLACK);
        fb
    }

    #[test]
    fn test_degenerate_line_is_one_pixel() {
        let mut fb = canvas();
        fb.line(3.0, 4.0, 3.0, 4.0, Color::WHITE);
        assert_eq!(lit(&fb), BTreeSet::from([(3, 4)]));
    }

    #[test]
    fn test_line_draws_both_endpoints() {
        let mut fb = canvas();
        fb.line(1.0, 1.0, 9.0, 4.0, Color::WHITE);
        let set = lit(&fb);
        assert!(set.contains(&(1, 1)));
        assert!(set.contains(&(9, 4)));
        // x-major line: one pixel per column
        assert_eq!(set.len(), 9);
    }

    #[test]
    fn test_line_exact_pixels() {
        let mut fb = canvas();
        fb.line(0.0, 0.0, 2.0, 1.0, Color::WHITE);
        assert_eq!(lit(&fb), BTreeSet::from([(0, 0), (1, 0), (2, 1)]));
    }

    #[test]
    fn test_line_is_symmetric() {
        let cases = [
            (0.0, 0.0, 2.0, 1.0),
            (1.0, 7.0, 12.0, 2.0),
            (5.0, 5.0, 5.0, 12.0),
            (14.0, 3.0, 2.0, 9.0),
            (3.0, 3.0, 8.0, 8.0),
        ];
        for (x0, y0, x1, y1) in cases {
            let mut a = canvas();
            a.line(x0, y0, x1, y1, Color::WHITE);
            let mut b = canvas();
            b.line(x1, y1, x0, y0, Color::WHITE);
            assert_eq!(lit(&a), lit(&b), "line {:?}", (x0, y0, x1, y1));
        }
    }

    #[test]
    fn test_rect_fills_half_open_area() {
        let mut fb = canvas();
        fb.rect(2.0, 3.0, 3.0, 2.0, Color::WHITE);
        let expected: BTreeSet<_> = (3..5).flat_map(|y| (2..5).map(move |x| (x, y))).collect();
        assert_eq!(lit(&fb), expected);
    }

    #[test]
    fn test_rect_stroke_draws_nothing() {
        let mut fb = canvas();
        fb.rect(0.0, 0.0, 4.0, 4.0, ShapeOptions::stroke(Color::WHITE));
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn test_rect_respects_depth() {
        let mut fb = canvas();
        fb.rect(0.0, 0.0, 2.0, 2.0, DrawOptions::with_depth(Color::RED, 2.0));
        fb.rect(0.0, 0.0, 4.0, 4.0, DrawOptions::with_depth(Color::WHITE, 1.0));
        assert_eq!(fb.get_pixel(1, 1), Some([255, 0, 0, 255]));
        assert_eq!(fb.get_pixel(3, 3), Some(MARK));
    }

    #[test]
    fn test_far_offscreen_line_is_noop() {
        let mut fb = canvas();
        fb.center(8.0, 8.0);
        fb.line(-3.0e9, -5.0, 3.0e9, -5.0, Color::WHITE);
        fb.line(-3.0e9, 0.0, -3.0e9, 3.0e9, Color::WHITE);
        fb.line(f32::MAX, f32::MAX, f32::MAX, f32::MIN, Color::WHITE);
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn test_rect_fractional_start_and_huge_origin() {
        let mut fb = canvas();
        // 0.5, 1.5 truncate to columns 0 and 1
        fb.rect(0.5, 0.0, 2.0, 1.0, Color::WHITE);
        assert_eq!(lit(&fb), BTreeSet::from([(0, 0), (1, 0)]));

        // past 2^24 the coordinate stops changing, the loop must still end
        let mut fb = canvas();
        fb.rect(3.0e7, 0.0, 3.0, 2.0, Color::WHITE);
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn test_huge_circle_is_safe() {
        let mut fb = canvas();
        fb.center(8.0, 8.0);
        fb.circle(-3.0e9, 5.0, 1.0e9, Color::WHITE);
        fb.circle(5.0, -3.0e9, 1.0e6, Color::WHITE);
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn test_line_with_far_endpoint_clips() {
        let mut fb = canvas();
        fb.line(2.0, 2.0, 2.0, 1.0e6, Color::WHITE);
        let expected: BTreeSet<_> = (2..16).map(|y| (2, y)).collect();
        assert_eq!(lit(&fb), expected);
    }

    #[test]
    fn test_line_crossing_screen_from_far_away() {
        let mut fb = canvas();
        fb.center(8.0, 8.0);
        fb.line(1.0e5, 3.0, -1.0e5, 3.0, Color::WHITE);
        let expected: BTreeSet<_> = (0..16).map(|x| (x, 3)).collect();
        assert_eq!(lit(&fb), expected);
    }

    #[test]
    fn test_zero_radius_circle_is_one_pixel() {
        let mut fb = canvas();
        fb.circle(6.0, 7.0, 0.0, Color::WHITE);
        assert_eq!(lit(&fb), BTreeSet::from([(6, 7)]));
    }

    #[test]
    fn test_circle_radius_one_is_plus_shape() {
        let mut fb = canvas();
        fb.circle(5.0, 5.0, 1.0, Color::WHITE);
        assert_eq!(
            lit(&fb),
            BTreeSet::from([(5, 4), (4, 5), (5, 5), (6, 5), (5, 6)])
        );
    }

    #[test]
    fn test_circle_is_filled_and_symmetric() {
        let mut fb = canvas();
        fb.circle(8.0, 8.0, 4.0, Color::WHITE);
        let set = lit(&fb);
        assert!(set.contains(&(8, 8)));
        assert!(set.contains(&(8, 4)));
        assert!(set.contains(&(12, 8)));
        assert!(!set.contains(&(12, 12)));
        for &(x, y) in &set {
            assert!(set.contains(&(16 - x, y)));
            assert!(set.contains(&(x, 16 - y)));
        }
    }
}
