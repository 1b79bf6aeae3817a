//! Seeded flood fill over raw surface memory.
//!
//! Depth-first with an explicit stack. The stack is bounded: once it holds
//! `max_pending` entries no further neighbours are queued, so very large
//! regions may be filled only partially. [`FillStats::truncated`] reports
//! when that happened.

use tracing::debug;

use crate::color::Rgba8;
use crate::error::RasterError;
use crate::rendering_buffer::{RenderingBuffer, BPP};

/// Flood-fill parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FloodFill {
    /// Stack size at which neighbour expansion stops.
    pub max_pending: usize,
    /// Per-channel distance from the seed colour still treated as inside.
    pub tolerance: u8,
}

impl FloodFill {
    pub const DEFAULT_MAX_PENDING: usize = 100_000;
    pub const DEFAULT_TOLERANCE: u8 = 1;

    pub fn new(max_pending: usize, tolerance: u8) -> Self {
        Self {
            max_pending,
            tolerance,
        }
    }

    pub fn validate(&self) -> Result<(), RasterError> {
        if self.max_pending == 0 {
            return Err(RasterError::InvalidConfig(
                "flood_fill.max_pending must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Fill the region connected to (x, y) with `color`.
    ///
    /// Written pixels get `color`'s RGB with full alpha.
    pub fn fill(&self, buf: &mut RenderingBuffer, x: i32, y: i32, color: Rgba8) -> FillStats {
        let mut stats = FillStats::default();
        let Some(target) = buf.get(x, y) else {
            return stats;
        };
        if target.rgb_eq(&color) {
            return stats;
        }

        let width = buf.width() as usize;
        let fill = Rgba8::new(color.r, color.g, color.b, 255).to_array();
        let mut visited = vec![false; width * buf.height() as usize];
        let mut stack: Vec<(i32, i32)> = vec![(x, y)];

        while let Some((px, py)) = stack.pop() {
            if !buf.contains(px, py) {
                continue;
            }
            let idx = py as usize * width + px as usize;
            if visited[idx] {
                continue;
            }

            let off = buf.offset(px, py);
            let bytes = buf.as_bytes_mut();
            let p = &mut bytes[off..off + BPP];
            let current = Rgba8::new(p[0], p[1], p[2], p[3]);
            if !current.rgb_within(&target, self.tolerance) {
                continue;
            }
            visited[idx] = true;
            p.copy_from_slice(&fill);
            stats.written += 1;

            if stack.len() < self.max_pending {
                stack.push((px + 1, py));
                stack.push((px - 1, py));
                stack.push((px, py + 1));
                stack.push((px, py - 1));
            } else {
                stats.truncated = true;
            }
        }

        if stats.truncated {
            debug!(
                x,
                y,
                written = stats.written,
                max_pending = self.max_pending,
                "flood fill truncated"
            );
        }
        stats
    }
}

impl Default for FloodFill {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_PENDING, Self::DEFAULT_TOLERANCE)
    }
}

/// Outcome of one fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillStats {
    /// Pixels painted.
    pub written: usize,
    /// True if neighbour expansion was cut off by the stack bound.
    pub truncated: bool,
}

// ============================================================================
// Tests
// ============================================================================
