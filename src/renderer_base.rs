//! Base renderer with clipping.
//!
//! Wraps a pixel format with a clip rectangle so every drawing operation is
//! bounded to the visible area. Out-of-bounds coordinates are silently
//! skipped, never reported.

use crate::basics::RectI;
use crate::pixfmt_rgba::PixelFormat;

// ============================================================================
// RendererBase: clip-and-delegate renderer
// ============================================================================

/// Base renderer that clips all operations to a rectangle before delegating
/// to the underlying pixel format.
pub struct RendererBase<PF: PixelFormat> {
    ren: PF,
    clip_box: RectI,
}

impl<PF: PixelFormat> RendererBase<PF> {
    /// Create a new renderer wrapping the given pixel format.
    /// The clip box is initialized to the full buffer extent.
    pub fn new(ren: PF) -> Self {
        let w = ren.width() as i32;
        let h = ren.height() as i32;
        Self {
            ren,
            clip_box: RectI::new(0, 0, w - 1, h - 1),
        }
    }

    pub fn width(&self) -> u32 {
        self.ren.width()
    }

    pub fn height(&self) -> u32 {
        self.ren.height()
    }

    pub fn clip_box(&self) -> &RectI {
        &self.clip_box
    }

    #[inline]
    pub fn inbox(&self, x: i32, y: i32) -> bool {
        self.clip_box.hit_test(x, y)
    }

    /// Get a reference to the underlying pixel format.
    pub fn ren(&self) -> &PF {
        &self.ren
    }

    // ========================================================================
    // Rendering operations (clip then delegate)
    // ========================================================================

    /// Clear the entire buffer to a solid color.
    pub fn clear(&mut self, c: &PF::ColorType) {
        let w = self.ren.width();
        for y in 0..self.ren.height() as i32 {
            self.ren.copy_hline(0, y, w, c);
        }
    }

    /// Copy a single pixel (clipped).
    pub fn copy_pixel(&mut self, x: i32, y: i32, c: &PF::ColorType) {
        if self.inbox(x, y) {
            self.ren.copy_pixel(x, y, c);
        }
    }

    /// Get the pixel at (x, y), or `None` outside the clip box.
    pub fn pixel(&self, x: i32, y: i32) -> Option<PF::ColorType> {
        self.inbox(x, y).then(|| self.ren.pixel(x, y))
    }

    /// Copy a horizontal line (clipped). x1, x2 are inclusive endpoints.
    pub fn copy_hline(&mut self, mut x1: i32, y: i32, mut x2: i32, c: &PF::ColorType) {
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
        }
        let cb = self.clip_box;
        if y > cb.y2 || y < cb.y1 || x1 > cb.x2 || x2 < cb.x1 {
            return;
        }
        x1 = x1.max(cb.x1);
        x2 = x2.min(cb.x2);
        self.ren.copy_hline(x1, y, (x2 - x1 + 1) as u32, c);
    }

    /// Copy a vertical line (clipped). y1, y2 are inclusive endpoints.
    pub fn copy_vline(&mut self, x: i32, mut y1: i32, mut y2: i32, c: &PF::ColorType) {
        if y1 > y2 {
            std::mem::swap(&mut y1, &mut y2);
        }
        let cb = self.clip_box;
        if x > cb.x2 || x < cb.x1 || y1 > cb.y2 || y2 < cb.y1 {
            return;
        }
        y1 = y1.max(cb.y1);
        y2 = y2.min(cb.y2);
        self.ren.copy_vline(x, y1, (y2 - y1 + 1) as u32, c);
    }

    /// Fill a solid rectangle (clipped). Corners are inclusive and may be
    /// given in any order.
    pub fn copy_bar(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, c: &PF::ColorType) {
        let mut rc = RectI::new(x1, y1, x2, y2);
        rc.normalize();
        if rc.clip(&self.clip_box) {
            for y in rc.y1..=rc.y2 {
                self.ren.copy_hline(rc.x1, y, (rc.x2 - rc.x1 + 1) as u32, c);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba8;
    use crate::pixfmt_rgba::PixfmtRgba32;
    use crate::rendering_buffer::RenderingBuffer;

    fn make_buffer(w: u32, h: u32) -> RenderingBuffer {
        RenderingBuffer::new(w, h).unwrap()
    }

    #[test]
    fn test_new() {
        let mut buf = make_buffer(100, 80);
        let ren = RendererBase::new(PixfmtRgba32::new(&mut buf));
        assert_eq!(ren.width(), 100);
        assert_eq!(ren.height(), 80);
        assert_eq!(*ren.clip_box(), RectI::new(0, 0, 99, 79));
    }

    #[test]
    fn test_clear() {
        let mut buf = make_buffer(10, 10);
        let mut ren = RendererBase::new(PixfmtRgba32::new(&mut buf));
        ren.clear(&Rgba8::WHITE);
        assert_eq!(ren.pixel(5, 5), Some(Rgba8::WHITE));
    }

    #[test]
    fn test_copy_pixel_clipped() {
        let mut buf = make_buffer(10, 10);
        let mut ren = RendererBase::new(PixfmtRgba32::new(&mut buf));
        let red = Rgba8::new_opaque(255, 0, 0);
        ren.copy_pixel(5, 5, &red);
        assert_eq!(ren.pixel(5, 5), Some(red));
        // Outside the clip box: silently ignored.
        ren.copy_pixel(-1, 5, &red);
        ren.copy_pixel(100, 5, &red);
        assert_eq!(ren.pixel(-1, 5), None);
    }

    #[test]
    fn test_copy_hline_clipped() {
        let mut buf = make_buffer(20, 10);
        let mut ren = RendererBase::new(PixfmtRgba32::new(&mut buf));
        let green = Rgba8::new_opaque(0, 255, 0);
        ren.copy_hline(25, 5, 15, &green);
        assert_eq!(ren.pixel(14, 5), Some(Rgba8::default()));
        assert_eq!(ren.pixel(15, 5), Some(green));
        assert_eq!(ren.pixel(19, 5), Some(green));
        // Entirely above the surface.
        ren.copy_hline(0, -1, 19, &green);
        assert_eq!(ren.pixel(0, 0), Some(Rgba8::default()));
    }

    #[test]
    fn test_copy_vline_clipped() {
        let mut buf = make_buffer(10, 10);
        let mut ren = RendererBase::new(PixfmtRgba32::new(&mut buf));
        let blue = Rgba8::new_opaque(0, 0, 255);
        ren.copy_vline(3, -5, 2, &blue);
        assert_eq!(ren.pixel(3, 0), Some(blue));
        assert_eq!(ren.pixel(3, 2), Some(blue));
        assert_eq!(ren.pixel(3, 3), Some(Rgba8::default()));
        ren.copy_vline(10, 0, 9, &blue);
    }

    #[test]
    fn test_copy_bar_reversed_corners() {
        let mut buf = make_buffer(10, 10);
        let mut ren = RendererBase::new(PixfmtRgba32::new(&mut buf));
        let c = Rgba8::new_opaque(1, 2, 3);
        ren.copy_bar(6, 6, 2, 3, &c);
        for y in 0..10 {
            for x in 0..10 {
                let inside = (2..=6).contains(&x) && (3..=6).contains(&y);
                let expect = if inside { c } else { Rgba8::default() };
                assert_eq!(ren.pixel(x, y), Some(expect), "({x},{y})");
            }
        }
    }

    #[test]
    fn test_copy_bar_fully_clipped() {
        let mut buf = make_buffer(10, 10);
        let mut ren = RendererBase::new(PixfmtRgba32::new(&mut buf));
        ren.copy_bar(20, 20, 30, 30, &Rgba8::WHITE);
        assert!((0..10).all(|i| ren.pixel(i, i) == Some(Rgba8::default())));
    }
}
