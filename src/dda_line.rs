//! Integer line interpolation for aliased 1-pixel strokes.
//!
//! Lines are stepped along their dominant axis one pixel at a time while a
//! [`Dda2LineInterpolator`] distributes the minor-axis error evenly. The
//! minor axis is tracked in 8-bit subpixel units anchored at pixel centres,
//! so every step lands on the pixel nearest the ideal line.

use crate::basics::Point;

// ============================================================================
// DDA2 line interpolator (Bresenham-style integer)
// ============================================================================

/// Integer DDA line interpolator using Bresenham-style remainder tracking.
///
/// Distributes rounding error evenly across all steps.
#[derive(Debug, Clone)]
pub struct Dda2LineInterpolator {
    cnt: i32,
    lft: i32,
    rem: i32,
    mod_val: i32,
    y: i32,
}

impl Dda2LineInterpolator {
    /// Forward-adjusted line from y1 to y2 over `count` steps.
    pub fn new_forward(y1: i32, y2: i32, count: i32) -> Self {
        let cnt = count.max(1);
        let mut lft = (y2 - y1) / cnt;
        let mut rem = (y2 - y1) % cnt;
        let mut mod_val = rem;

        if mod_val <= 0 {
            mod_val += cnt;
            rem += cnt;
            lft -= 1;
        }
        mod_val -= cnt;

        Self {
            cnt,
            lft,
            rem,
            mod_val,
            y: y1,
        }
    }

    /// Step forward one unit.
    #[inline]
    pub fn inc(&mut self) {
        self.mod_val += self.rem;
        self.y += self.lft;
        if self.mod_val > 0 {
            self.mod_val -= self.cnt;
            self.y += 1;
        }
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }
}

// ============================================================================
// Bresenham line interpolator
// ============================================================================

/// Subpixel precision of the minor axis.
pub const SUBPIXEL_SHIFT: i32 = 8;
pub const SUBPIXEL_SCALE: i32 = 1 << SUBPIXEL_SHIFT;

/// Pixel coordinate to subpixel coordinate at the pixel centre.
#[inline]
pub fn to_subpixel(v: i32) -> i32 {
    (v << SUBPIXEL_SHIFT) + SUBPIXEL_SCALE / 2
}

/// Subpixel coordinate back to the pixel containing it.
#[inline]
pub fn line_lr(v: i32) -> i32 {
    v >> SUBPIXEL_SHIFT
}

/// Bresenham line interpolator between two pixel positions.
pub struct LineBresenhamInterpolator {
    x1_lr: i32,
    y1_lr: i32,
    ver: bool,
    len: u32,
    inc: i32,
    interpolator: Dda2LineInterpolator,
}

impl LineBresenhamInterpolator {
    pub fn new(from: Point, to: Point) -> Self {
        let ver = (to.x - from.x).abs() < (to.y - from.y).abs();
        let (len, inc) = if ver {
            ((to.y - from.y).unsigned_abs(), if to.y > from.y { 1 } else { -1 })
        } else {
            ((to.x - from.x).unsigned_abs(), if to.x > from.x { 1 } else { -1 })
        };

        let (minor_from, minor_to) = if ver { (from.x, to.x) } else { (from.y, to.y) };
        let interpolator =
            Dda2LineInterpolator::new_forward(to_subpixel(minor_from), to_subpixel(minor_to), len as i32);

        Self {
            x1_lr: from.x,
            y1_lr: from.y,
            ver,
            len,
            inc,
            interpolator,
        }
    }

    /// True if the line is vertical-major.
    #[inline]
    pub fn is_ver(&self) -> bool {
        self.ver
    }

    /// Number of steps in the dominant axis.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Direction increment (+1 or -1).
    #[inline]
    pub fn inc(&self) -> i32 {
        self.inc
    }

    /// Current pixel on the line.
    #[inline]
    pub fn current(&self) -> Point {
        let minor = line_lr(self.interpolator.y());
        if self.ver {
            Point::new(minor, self.y1_lr)
        } else {
            Point::new(self.x1_lr, minor)
        }
    }

    /// Advance one pixel along the dominant axis.
    #[inline]
    pub fn step(&mut self) {
        self.interpolator.inc();
        if self.ver {
            self.y1_lr += self.inc;
        } else {
            self.x1_lr += self.inc;
        }
    }
}

// ============================================================================
// LinePixels: iterator over a stroked segment
// ============================================================================

/// Every pixel of the segment from `from` to `to`, both endpoints included.
pub struct LinePixels {
    li: LineBresenhamInterpolator,
    remaining: u32,
}

impl LinePixels {
    pub fn new(from: Point, to: Point) -> Self {
        let li = LineBresenhamInterpolator::new(from, to);
        let remaining = li.len() + 1;
        Self { li, remaining }
    }
}

impl Iterator for LinePixels {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let p = self.li.current();
        self.li.step();
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl ExactSizeIterator for LinePixels {}

// ============================================================================
// Tests
// ============================================================================
