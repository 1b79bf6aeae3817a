//! RGBA pixel format.
//!
//! Provides the `PixelFormat` trait and the `PixfmtRgba32` implementation
//! over a [`RenderingBuffer`]. Palette colours are always opaque, so the
//! format only overwrites pixels; there is no blending.

use crate::color::Rgba8;
use crate::rendering_buffer::{RenderingBuffer, BPP};

// ============================================================================
// PixelFormat trait
// ============================================================================

/// Abstraction between the clipping renderer and raw pixel bytes.
///
/// Implementations perform no bounds checks; `RendererBase` clips first.
pub trait PixelFormat {
    type ColorType;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Overwrite a single pixel at (x, y) with color `c`.
    fn copy_pixel(&mut self, x: i32, y: i32, c: &Self::ColorType);

    /// Overwrite a horizontal run of `len` pixels starting at (x, y).
    fn copy_hline(&mut self, x: i32, y: i32, len: u32, c: &Self::ColorType);

    /// Overwrite a vertical run of `len` pixels starting at (x, y).
    fn copy_vline(&mut self, x: i32, y: i32, len: u32, c: &Self::ColorType);

    /// Get the pixel color at (x, y).
    fn pixel(&self, x: i32, y: i32) -> Self::ColorType;
}

// ============================================================================
// PixfmtRgba32: straight RGBA, 8 bits per channel
// ============================================================================

/// Pixel format for RGBA32 (4 bytes per pixel, R=0, G=1, B=2, A=3).
pub struct PixfmtRgba32<'a> {
    rbuf: &'a mut RenderingBuffer,
}

impl<'a> PixfmtRgba32<'a> {
    pub fn new(rbuf: &'a mut RenderingBuffer) -> Self {
        Self { rbuf }
    }

    #[inline]
    fn put(p: &mut [u8], c: &Rgba8) {
        p[0] = c.r;
        p[1] = c.g;
        p[2] = c.b;
        p[3] = c.a;
    }
}

impl<'a> PixelFormat for PixfmtRgba32<'a> {
    type ColorType = Rgba8;

    fn width(&self) -> u32 {
        self.rbuf.width()
    }

    fn height(&self) -> u32 {
        self.rbuf.height()
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba8 {
        let row = self.rbuf.row_slice(y as u32);
        let off = x as usize * BPP;
        Rgba8::new(row[off], row[off + 1], row[off + 2], row[off + 3])
    }

    fn copy_pixel(&mut self, x: i32, y: i32, c: &Rgba8) {
        let row = self.rbuf.row_slice_mut(y as u32);
        let off = x as usize * BPP;
        Self::put(&mut row[off..off + BPP], c);
    }

    fn copy_hline(&mut self, x: i32, y: i32, len: u32, c: &Rgba8) {
        let row = self.rbuf.row_slice_mut(y as u32);
        let start = x as usize * BPP;
        let end = start + len as usize * BPP;
        for px in row[start..end].chunks_exact_mut(BPP) {
            Self::put(px, c);
        }
    }

    fn copy_vline(&mut self, x: i32, y: i32, len: u32, c: &Rgba8) {
        for row in y..y + len as i32 {
            self.copy_pixel(x, row, c);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
