//! Basic shape primitives renderer.
//!
//! Draws aliased 1-pixel shapes (rectangles, ellipses, lines, polylines)
//! directly into a [`RendererBase`]. Every coordinate is an integer pixel
//! position and every write is clipped by the base renderer.

use crate::basics::{Point, RectI};
use crate::dda_line::LinePixels;
use crate::ellipse_bresenham::QuadrantPoints;
use crate::pixfmt_rgba::PixelFormat;
use crate::renderer_base::RendererBase;

// ============================================================================
// RendererPrimitives
// ============================================================================

/// Basic shape primitives renderer.
///
/// Outlines use the line colour, solid shapes the fill colour.
pub struct RendererPrimitives<'a, PF: PixelFormat> {
    ren: &'a mut RendererBase<PF>,
    fill_color: PF::ColorType,
    line_color: PF::ColorType,
}

impl<'a, PF: PixelFormat> RendererPrimitives<'a, PF>
where
    PF::ColorType: Default + Copy,
{
    pub fn new(ren: &'a mut RendererBase<PF>) -> Self {
        Self {
            ren,
            fill_color: PF::ColorType::default(),
            line_color: PF::ColorType::default(),
        }
    }

    pub fn set_fill_color(&mut self, c: PF::ColorType) {
        self.fill_color = c;
    }

    pub fn set_line_color(&mut self, c: PF::ColorType) {
        self.line_color = c;
    }

    pub fn fill_color(&self) -> &PF::ColorType {
        &self.fill_color
    }

    pub fn line_color(&self) -> &PF::ColorType {
        &self.line_color
    }

    /// Plot one pixel in the line colour.
    pub fn pixel(&mut self, x: i32, y: i32) {
        let lc = self.line_color;
        self.ren.copy_pixel(x, y, &lc);
    }

    /// Outline of the rectangle spanned by two corners, both inclusive.
    pub fn rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let rc = RectI::from_corners(Point::new(x1, y1), Point::new(x2, y2));
        let lc = self.line_color;
        self.ren.copy_hline(rc.x1, rc.y1, rc.x2, &lc);
        self.ren.copy_hline(rc.x1, rc.y2, rc.x2, &lc);
        self.ren.copy_vline(rc.x1, rc.y1, rc.y2, &lc);
        self.ren.copy_vline(rc.x2, rc.y1, rc.y2, &lc);
    }

    /// Solid rectangle spanned by two corners, both inclusive.
    pub fn solid_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let fc = self.fill_color;
        self.ren.copy_bar(x1, y1, x2, y2, &fc);
    }

    /// Outline of an axis-aligned ellipse centred on (x, y).
    ///
    /// A zero radius collapses the ellipse to a segment along the other
    /// axis, and to a single pixel when both radii are zero.
    pub fn ellipse(&mut self, x: i32, y: i32, rx: i32, ry: i32) {
        let lc = self.line_color;
        for (dx, dy) in QuadrantPoints::new(rx.abs(), ry.abs()) {
            self.ren.copy_pixel(x + dx, y + dy, &lc);
            self.ren.copy_pixel(x + dx, y - dy, &lc);
            self.ren.copy_pixel(x - dx, y - dy, &lc);
            self.ren.copy_pixel(x - dx, y + dy, &lc);
        }
    }

    /// Circle outline; radius 0 plots the centre pixel.
    pub fn circle(&mut self, x: i32, y: i32, r: i32) {
        self.ellipse(x, y, r, r);
    }

    /// Bresenham line from `from` to `to`, both endpoints inclusive.
    pub fn line(&mut self, from: Point, to: Point) {
        let lc = self.line_color;
        for p in LinePixels::new(from, to) {
            self.ren.copy_pixel(p.x, p.y, &lc);
        }
    }

    /// Connected segments through `points`. Fewer than two points draw nothing.
    pub fn polyline(&mut self, points: &[Point]) {
        for w in points.windows(2) {
            self.line(w[0], w[1]);
        }
    }

    pub fn ren(&self) -> &RendererBase<PF> {
        self.ren
    }
}

// ============================================================================
// Tests
// ============================================================================
