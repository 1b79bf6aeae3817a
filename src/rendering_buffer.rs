//! Rendering buffer: the raster surface's pixel memory.
//!
//! A [`RenderingBuffer`] owns a top-down, row-major RGBA8 byte buffer
//! (4 bytes per pixel, stride `width * 4`). Pixel formats borrow it to draw;
//! the flood-fill engine reads and writes its bytes directly.

use crate::color::Rgba8;
use crate::error::RasterError;

/// Bytes per pixel.
pub const BPP: usize = 4;

/// Owned RGBA8 pixel memory for one render session.
#[derive(Clone, PartialEq, Eq)]
pub struct RenderingBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl RenderingBuffer {
    /// Allocate a zeroed (transparent black) buffer.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let invalid = RasterError::InvalidDimensions { width, height };
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(invalid);
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BPP))
            .ok_or(invalid)?;
        Ok(Self {
            data: vec![0u8; len],
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row length in bytes.
    pub fn stride(&self) -> usize {
        self.width as usize * BPP
    }

    /// True if (x, y) addresses a pixel of this buffer.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Byte offset of pixel (x, y). The caller guarantees it is in bounds.
    #[inline]
    pub fn offset(&self, x: i32, y: i32) -> usize {
        y as usize * self.stride() + x as usize * BPP
    }

    /// Immutable slice for row `y`.
    pub fn row_slice(&self, y: u32) -> &[u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let start = y as usize * self.stride();
        &self.data[start..start + self.stride()]
    }

    /// Mutable slice for row `y`.
    pub fn row_slice_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let stride = self.stride();
        let start = y as usize * stride;
        &mut self.data[start..start + stride]
    }

    /// Pixel at (x, y), or `None` outside the buffer.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba8> {
        if !self.contains(x, y) {
            return None;
        }
        let off = self.offset(x, y);
        let p = &self.data[off..off + BPP];
        Some(Rgba8::new(p[0], p[1], p[2], p[3]))
    }

    /// Overwrite pixel (x, y); out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, c: Rgba8) {
        if self.contains(x, y) {
            let off = self.offset(x, y);
            self.data[off..off + BPP].copy_from_slice(&c.to_array());
        }
    }

    /// Fill every pixel with `c`.
    pub fn fill(&mut self, c: Rgba8) {
        let px = c.to_array();
        for chunk in self.data.chunks_exact_mut(BPP) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Raw RGBA bytes, row-major, top to bottom.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl std::fmt::Debug for RenderingBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderingBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
