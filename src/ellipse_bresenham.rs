//! Bresenham ellipse interpolator.
//!
//! Discrete pixel stepping around one quadrant of an axis-aligned ellipse.
//! The renderers mirror each quadrant offset into the other three.

// ============================================================================
// EllipseBresenhamInterpolator
// ============================================================================

/// Bresenham ellipse interpolator.
///
/// Steps through discrete pixel positions on the first quadrant of an
/// ellipse (dx >= 0, dy moving from -ry toward 0). Error terms are kept in
/// `i64` so radii up to the largest coordinate token cannot overflow.
#[derive(Debug, Clone)]
pub struct EllipseBresenhamInterpolator {
    rx2: i64,
    ry2: i64,
    two_rx2: i64,
    two_ry2: i64,
    dx: i32,
    dy: i32,
    inc_x: i64,
    inc_y: i64,
    cur_f: i64,
}

impl EllipseBresenhamInterpolator {
    pub fn new(rx: i32, ry: i32) -> Self {
        let rx2 = rx as i64 * rx as i64;
        let ry2 = ry as i64 * ry as i64;
        Self {
            rx2,
            ry2,
            two_rx2: rx2 << 1,
            two_ry2: ry2 << 1,
            dx: 0,
            dy: 0,
            inc_x: 0,
            inc_y: -(ry as i64) * (rx2 << 1),
            cur_f: 0,
        }
    }

    /// X step from the previous position (0 or 1).
    pub fn dx(&self) -> i32 {
        self.dx
    }

    /// Y step from the previous position (0 or 1).
    pub fn dy(&self) -> i32 {
        self.dy
    }

    /// Advance to the next pixel position on the ellipse.
    pub fn advance(&mut self) {
        let fx = self.cur_f + self.inc_x + self.ry2;
        let fy = self.cur_f + self.inc_y + self.rx2;
        let fxy = fx + self.inc_y + self.rx2;

        let mx = fx.abs();
        let my = fy.abs();
        let mxy = fxy.abs();

        self.dx = 0;
        self.dy = 0;

        let x_wins = mx <= my;
        let min_m = mx.min(my);

        if min_m > mxy {
            self.inc_x += self.two_ry2;
            self.inc_y += self.two_rx2;
            self.cur_f = fxy;
            self.dx = 1;
            self.dy = 1;
        } else if x_wins {
            self.inc_x += self.two_ry2;
            self.cur_f = fx;
            self.dx = 1;
        } else {
            self.inc_y += self.two_rx2;
            self.cur_f = fy;
            self.dy = 1;
        }
    }
}

// ============================================================================
// QuadrantPoints: iterator over one quadrant
// ============================================================================

/// Offsets `(dx, dy)` from the centre along the upper-right quadrant,
/// starting at `(0, -ry)` and ending at `(rx, 0)`.
///
/// Very flat ellipses reach `dy == 0` before `dx == rx`; the remaining
/// run along the major axis is emitted so the outline is closed.
#[derive(Debug, Clone)]
pub struct QuadrantPoints {
    ei: EllipseBresenhamInterpolator,
    rx: i32,
    dx: i32,
    dy: i32,
    started: bool,
    done: bool,
}

impl QuadrantPoints {
    pub fn new(rx: i32, ry: i32) -> Self {
        Self {
            ei: EllipseBresenhamInterpolator::new(rx, ry),
            rx,
            dx: 0,
            dy: -ry,
            started: false,
            done: false,
        }
    }
}

impl Iterator for QuadrantPoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            if self.dx >= self.rx {
                return None;
            }
            self.dx += 1;
            return Some((self.dx, self.dy));
        }
        if self.started {
            self.ei.advance();
            self.dx += self.ei.dx();
            self.dy += self.ei.dy();
        }
        self.started = true;
        if self.dy >= 0 {
            self.done = true;
        }
        Some((self.dx, self.dy))
    }
}

// ============================================================================
// Tests
// ============================================================================
