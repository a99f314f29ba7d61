//! Lines and rectangles
//!
//! Primitives are built only on the framebuffer's pixel operations, and are clipped
//! the same way: any part that falls outside the buffer is dropped.
//!
//! Note the footprints differ between the rectangle operations:
//! [`draw_filled_rect`](Framebuffer::draw_filled_rect) and
//! [`invert_rect`](Framebuffer::invert_rect) cover the half-open area
//! `[x, x + width) x [y, y + height)`, while
//! [`draw_empty_rect`](Framebuffer::draw_empty_rect) outlines the closed area
//! `[x, x + width] x [y, y + height]`, one pixel wider and taller.
//!
//! ## Example
//!
//! ```
//! use ssd1309::{Dimensions, Framebuffer};
//!
//! let dims = match Dimensions::new(32, 16) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let mut fb = match Framebuffer::new(dims) {
//!     Some(fb) => fb,
//!     None => return,
//! };
//!
//! fb.draw_filled_rect(0, 0, 4, 4);
//! assert!(fb.get_pixel(3, 3));
//! assert!(!fb.get_pixel(4, 4));
//!
//! fb.clear();
//! fb.draw_empty_rect(0, 0, 4, 4);
//! assert!(fb.get_pixel(4, 4));
//! assert!(!fb.get_pixel(2, 2));
//! ```

use core::ops::Range;

use crate::framebuffer::Framebuffer;

impl Framebuffer {
    /// Draw a line between two points, both inclusive
    ///
    /// Vertical lines plot every row between the endpoints. Any other line is walked
    /// one column at a time from the left endpoint, plotting
    /// `y = trunc(m * (x - x1) + y1)` with `m = (y2 - y1) / (x2 - x1)`. Steep lines
    /// therefore plot one pixel per column and leave gaps.
    #[allow(clippy::many_single_char_names, clippy::cast_precision_loss)]
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let (x1, y1, x2, y2) = if x1 > x2 {
            (x2, y2, x1, y1)
        } else {
            (x1, y1, x2, y2)
        };

        if x1 == x2 {
            let (top, bottom) = (y1.min(y2), y1.max(y2));
            for y in clip(top, span(top, bottom), self.height()) {
                self.plot(x1, y);
            }
            return;
        }

        let m = (i64::from(y2) - i64::from(y1)) as f32 / (i64::from(x2) - i64::from(x1)) as f32;

        for x in clip(x1, span(x1, x2), self.width()) {
            let y = m * (i64::from(x) - i64::from(x1)) as f32 + y1 as f32;
            // `as` truncates toward zero
            self.plot(x, y as i32);
        }
    }

    /// Set every pixel in `[x, x + width) x [y, y + height)`
    pub fn draw_filled_rect(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let columns = clip(x, width, self.width());
        let rows = clip(y, height, self.height());
        for px in columns {
            for py in rows.clone() {
                self.plot(px, py);
            }
        }
    }

    /// Outline `[x, x + width] x [y, y + height]`
    ///
    /// The far edges are inclusive, so the outline is one pixel wider and taller
    /// than the area covered by [`draw_filled_rect`](Self::draw_filled_rect) with the
    /// same arguments.
    pub fn draw_empty_rect(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let right = x.saturating_add(i32::try_from(width).unwrap_or(i32::MAX));
        let bottom = y.saturating_add(i32::try_from(height).unwrap_or(i32::MAX));

        self.draw_line(x, y, right, y);
        self.draw_line(x, bottom, right, bottom);
        self.draw_line(x, y, x, bottom);
        self.draw_line(right, y, right, bottom);
    }

    /// Invert every pixel in `[x, x + width) x [y, y + height)`
    pub fn invert_rect(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let columns = clip(x, width, self.width());
        let rows = clip(y, height, self.height());
        for px in columns {
            for py in rows.clone() {
                self.toggle(px, py);
            }
        }
    }
}

/// Number of coordinates in the closed interval `[from, to]`
fn span(from: i32, to: i32) -> u32 {
    (i64::from(to) - i64::from(from) + 1).clamp(0, i64::from(u32::MAX)) as u32
}

/// Intersect `[start, start + len)` with `[0, limit)`
fn clip(start: i32, len: u32, limit: u32) -> Range<i32> {
    let lo = i64::from(start).max(0);
    let hi = (i64::from(start) + i64::from(len))
        .min(i64::from(limit))
        .max(lo);
    // Both bounds lie in [0, limit], and limit fits in i32
    (lo as i32)..(hi as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dimensions;
    use alloc::vec::Vec;

    fn framebuffer(width: u16, height: u16) -> Framebuffer {
        Framebuffer::new(Dimensions::new(width, height).unwrap()).unwrap()
    }

    fn lit(fb: &Framebuffer) -> Vec<(u32, u32)> {
        let mut pixels = Vec::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get_pixel(x, y) {
                    pixels.push((x, y));
                }
            }
        }
        pixels
    }

    #[test]
    fn test_vertical_line() {
        let mut fb = framebuffer(8, 8);
        fb.draw_line(0, 0, 0, 5);
        assert_eq!(
            lit(&fb),
            [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]
        );
    }

    #[test]
    fn test_vertical_line_reversed_endpoints() {
        let mut fb = framebuffer(8, 8);
        fb.draw_line(2, 6, 2, 3);
        assert_eq!(lit(&fb), [(2, 3), (2, 4), (2, 5), (2, 6)]);
    }

    #[test]
    fn test_sloped_line_matches_truncation() {
        let mut fb = framebuffer(8, 8);
        fb.draw_line(0, 0, 4, 2);

        let m = 2.0f32 / 4.0;
        let mut expected: Vec<(u32, u32)> = (0..=4u32)
            .map(|x| (x, (m * x as f32) as u32))
            .collect();
        expected.sort_by_key(|&(x, y)| (y, x));
        assert_eq!(lit(&fb), expected);
        assert_eq!(lit(&fb), [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]);
    }

    #[test]
    fn test_line_endpoints_swapped_together() {
        let mut a = framebuffer(16, 16);
        let mut b = framebuffer(16, 16);
        a.draw_line(1, 9, 10, 2);
        b.draw_line(10, 2, 1, 9);
        assert_eq!(a, b);
        assert!(a.get_pixel(1, 9));
        assert!(a.get_pixel(10, 2));
    }

    #[test]
    fn test_steep_line_plots_one_pixel_per_column() {
        let mut fb = framebuffer(8, 16);
        fb.draw_line(0, 0, 1, 10);
        assert_eq!(lit(&fb), [(0, 0), (1, 10)]);
    }

    #[test]
    fn test_line_clipped_at_edges() {
        let mut fb = framebuffer(8, 8);
        fb.draw_line(-4, 3, 20, 3);
        assert_eq!(lit(&fb).len(), 8);
        assert!((0..8).all(|x| fb.get_pixel(x, 3)));
    }

    #[test]
    fn test_descending_line_truncates_toward_zero() {
        let mut fb = framebuffer(8, 8);
        // m = -0.5 from (0, 1): y = 1, 0.5, 0, -0.5, -1
        fb.draw_line(0, 1, 4, -1);
        assert_eq!(lit(&fb), [(1, 0), (2, 0), (3, 0), (0, 1)]);
    }

    #[test]
    fn test_filled_rect_is_half_open() {
        let mut fb = framebuffer(8, 8);
        fb.draw_filled_rect(1, 2, 3, 2);
        assert_eq!(
            lit(&fb),
            [(1, 2), (2, 2), (3, 2), (1, 3), (2, 3), (3, 3)]
        );
    }

    #[test]
    fn test_filled_rect_zero_size_draws_nothing() {
        let mut fb = framebuffer(8, 8);
        fb.draw_filled_rect(1, 1, 0, 5);
        fb.draw_filled_rect(1, 1, 5, 0);
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn test_filled_rect_clipped() {
        let mut fb = framebuffer(8, 8);
        fb.draw_filled_rect(-2, 6, 4, u32::MAX);
        assert_eq!(lit(&fb), [(0, 6), (1, 6), (0, 7), (1, 7)]);
    }

    #[test]
    fn test_empty_rect_includes_far_edge() {
        let mut fb = framebuffer(8, 8);
        fb.draw_empty_rect(1, 1, 3, 2);
        assert_eq!(
            lit(&fb),
            [
                (1, 1),
                (2, 1),
                (3, 1),
                (4, 1),
                (1, 2),
                (4, 2),
                (1, 3),
                (2, 3),
                (3, 3),
                (4, 3)
            ]
        );
    }

    #[test]
    fn test_invert_rect_twice_restores() {
        let mut fb = framebuffer(16, 16);
        fb.draw_line(0, 0, 15, 15);
        let before = fb.clone();
        fb.invert_rect(2, 3, 7, 5);
        assert!(!fb.get_pixel(3, 3));
        assert!(fb.get_pixel(2, 4));
        fb.invert_rect(2, 3, 7, 5);
        assert_eq!(fb, before);
    }

    #[test]
    fn test_invert_rect_clips_negative_origin() {
        let mut fb = framebuffer(8, 8);
        fb.invert_rect(-1, -1, 3, 3);
        assert_eq!(lit(&fb), [(0, 0), (1, 0), (0, 1), (1, 1)]);
    }
}
