//! Command rasterizer.
//!
//! Maps one decoded [`Command`] onto the surface. Stateless: colours come
//! from the command itself, resolved through the palette at draw time.

use crate::basics::Point;
use crate::command::Command;
use crate::flood_fill::{FillStats, FloodFill};
use crate::palette;
use crate::pixfmt_rgba::PixfmtRgba32;
use crate::renderer_base::RendererBase;
use crate::renderer_primitives::RendererPrimitives;
use crate::rendering_buffer::RenderingBuffer;

/// What executing a command did to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing was drawn.
    StateOnly,
    /// Shape pixels were written.
    Drawn,
    /// A flood fill ran.
    Filled(FillStats),
    /// The whole surface was cleared to the background colour.
    Cleared,
}

/// Execute `cmd` against `surface`.
pub fn execute(surface: &mut RenderingBuffer, cmd: &Command, fill: &FloodFill) -> Effect {
    if cmd.is_state_only() {
        return Effect::StateOnly;
    }
    match *cmd {
        Command::FloodFill {
            x, y, fill_color, ..
        } => Effect::Filled(fill.fill(surface, x, y, palette::color(fill_color))),

        _ => {
            let mut rb = RendererBase::new(PixfmtRgba32::new(surface));
            if let Command::Reset = cmd {
                rb.clear(&palette::color(palette::BACKGROUND_INDEX));
                return Effect::Cleared;
            }
            let mut prim = RendererPrimitives::new(&mut rb);
            draw_shape(&mut prim, cmd);
            Effect::Drawn
        }
    }
}

fn draw_shape(prim: &mut RendererPrimitives<'_, PixfmtRgba32<'_>>, cmd: &Command) {
    match cmd {
        Command::Line {
            x0,
            y0,
            x1,
            y1,
            color,
        }
        | Command::LineTo {
            x0,
            y0,
            x1,
            y1,
            color,
        } => {
            prim.set_line_color(palette::color(*color));
            prim.line(Point::new(*x0, *y0), Point::new(*x1, *y1));
        }
        Command::Rect {
            x0,
            y0,
            x1,
            y1,
            color,
        } => {
            prim.set_line_color(palette::color(*color));
            prim.rectangle(*x0, *y0, *x1, *y1);
        }
        Command::FillRect {
            x0,
            y0,
            x1,
            y1,
            color,
        } => {
            prim.set_fill_color(palette::color(*color));
            prim.solid_rectangle(*x0, *y0, *x1, *y1);
        }
        Command::Circle { cx, cy, r, color } => {
            prim.set_line_color(palette::color(*color));
            prim.circle(*cx, *cy, *r);
        }
        // Arc angles are not honoured; the full outline is drawn.
        Command::Ellipse {
            cx,
            cy,
            rx,
            ry,
            color,
            ..
        } => {
            prim.set_line_color(palette::color(*color));
            prim.ellipse(*cx, *cy, *rx, *ry);
        }
        Command::Pixel { x, y, color } => {
            prim.set_line_color(palette::color(*color));
            prim.pixel(*x, *y);
        }
        Command::Polyline { points, color } => {
            prim.set_line_color(palette::color(*color));
            prim.polyline(points);
        }
        _ => {}
    }
}

// ============================================================================
// Tests
// ============================================================================
