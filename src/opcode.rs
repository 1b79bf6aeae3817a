//! Opcode dispatch table.
//!
//! Each opcode letter maps to one [`Opcode`] entry declaring the minimum
//! number of parameter characters it needs and a pure handler turning those
//! characters plus the current [`DrawingState`] into a [`Command`] and the
//! [`StateDelta`] to apply afterwards. The decoder owns the scan and the
//! state; handlers own nothing.

use crate::base36::{self, COORD_WIDTH};
use crate::basics::Point;
use crate::command::Command;
use crate::draw_state::{DrawingState, StateDelta};

// ============================================================================
// Params: cursor over a parameter window
// ============================================================================

/// Cursor over the characters following an opcode letter on one line.
///
/// Reads never fail: a read past the end decodes only the characters that
/// exist. Handlers are only invoked once the window holds at least the
/// opcode's declared minimum, so required reads are always complete.
#[derive(Debug, Clone)]
pub struct Params<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Params<'a> {
    pub fn new(chars: &'a [char]) -> Self {
        Self { chars, pos: 0 }
    }

    /// Characters not consumed yet.
    pub fn remaining(&self) -> usize {
        self.chars.len() - self.pos
    }

    /// Characters consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    fn take(&mut self, width: usize) -> u32 {
        let end = (self.pos + width).min(self.chars.len());
        let value = base36::decode(self.chars[self.pos..end].iter().copied());
        self.pos = end;
        value
    }

    /// A two-character coordinate token.
    pub fn coord(&mut self) -> i32 {
        // Two digits never exceed 1295.
        self.take(COORD_WIDTH) as i32
    }

    /// A single-character token (colours, styles, counts).
    pub fn digit(&mut self) -> u8 {
        // One digit never exceeds 35.
        self.take(1) as u8
    }

    /// A coordinate pair.
    pub fn point(&mut self) -> Point {
        let x = self.coord();
        let y = self.coord();
        Point::new(x, y)
    }
}

// ============================================================================
// Opcode table
// ============================================================================

type Handler = fn(&mut Params<'_>, &DrawingState) -> (Command, StateDelta);

/// One entry of the dispatch table.
pub struct Opcode {
    pub letter: char,
    pub name: &'static str,
    /// Minimum parameter characters; fewer drops the command.
    pub min_len: usize,
    /// Parameter layout, for listings.
    pub layout: &'static str,
    handler: Handler,
}

impl Opcode {
    /// Run the handler over `params`.
    ///
    /// Returns `None` when the window is shorter than `min_len`.
    pub fn decode(&self, params: &mut Params<'_>, state: &DrawingState) -> Option<(Command, StateDelta)> {
        if params.remaining() < self.min_len {
            return None;
        }
        Some((self.handler)(params, state))
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Opcode")
            .field("letter", &self.letter)
            .field("name", &self.name)
            .field("min_len", &self.min_len)
            .finish()
    }
}

/// Every supported opcode.
pub static OPCODES: &[Opcode] = &[
    Opcode {
        letter: 'c',
        name: "color",
        min_len: 2,
        layout: "fg(1) bg(1)",
        handler: set_color,
    },
    Opcode {
        letter: 'L',
        name: "line",
        min_len: 8,
        layout: "x0 y0 x1 y1",
        handler: line,
    },
    Opcode {
        letter: 'R',
        name: "rectangle",
        min_len: 8,
        layout: "x0 y0 x1 y1",
        handler: rect,
    },
    Opcode {
        letter: 'B',
        name: "bar",
        min_len: 8,
        layout: "x0 y0 x1 y1",
        handler: fill_rect,
    },
    Opcode {
        letter: 'C',
        name: "circle",
        min_len: 6,
        layout: "cx cy r",
        handler: circle,
    },
    Opcode {
        letter: 'O',
        name: "oval",
        min_len: 10,
        layout: "cx cy sa ea rx [ry]",
        handler: ellipse,
    },
    Opcode {
        letter: 'X',
        name: "pixel",
        min_len: 4,
        layout: "x y",
        handler: pixel,
    },
    Opcode {
        letter: 'm',
        name: "move",
        min_len: 4,
        layout: "x y",
        handler: move_to,
    },
    Opcode {
        letter: 'l',
        name: "line to",
        min_len: 4,
        layout: "x y",
        handler: line_to,
    },
    Opcode {
        letter: 'P',
        name: "polyline",
        min_len: 1,
        layout: "count(1) {x y}*count",
        handler: polyline,
    },
    Opcode {
        letter: 'S',
        name: "fill style",
        min_len: 2,
        layout: "style(1) color(1)",
        handler: fill_style,
    },
    Opcode {
        letter: 'F',
        name: "flood fill",
        min_len: 5,
        layout: "x y border(1)",
        handler: flood_fill,
    },
    Opcode {
        letter: '*',
        name: "reset",
        min_len: 0,
        layout: "",
        handler: reset,
    },
    Opcode {
        letter: 'w',
        name: "text window",
        min_len: 8,
        layout: "x0 y0 x1 y1",
        handler: define_window,
    },
];

/// Look up the table entry for an opcode letter.
pub fn lookup(letter: char) -> Option<&'static Opcode> {
    OPCODES.iter().find(|op| op.letter == letter)
}

/// True for the characters that introduce a command.
#[inline]
pub fn is_introducer(ch: char) -> bool {
    ch == '|' || ch == '!'
}

// ============================================================================
// Handlers
// ============================================================================

fn set_color(p: &mut Params<'_>, _: &DrawingState) -> (Command, StateDelta) {
    let fg = p.digit();
    let bg = p.digit();
    (Command::SetColor { fg, bg }, StateDelta::Colors { fg, bg })
}

fn line(p: &mut Params<'_>, s: &DrawingState) -> (Command, StateDelta) {
    let (x0, y0, x1, y1) = (p.coord(), p.coord(), p.coord(), p.coord());
    let color = s.fg;
    (Command::Line { x0, y0, x1, y1, color }, StateDelta::None)
}

fn rect(p: &mut Params<'_>, s: &DrawingState) -> (Command, StateDelta) {
    let (x0, y0, x1, y1) = (p.coord(), p.coord(), p.coord(), p.coord());
    let color = s.fg;
    (Command::Rect { x0, y0, x1, y1, color }, StateDelta::None)
}

fn fill_rect(p: &mut Params<'_>, s: &DrawingState) -> (Command, StateDelta) {
    let (x0, y0, x1, y1) = (p.coord(), p.coord(), p.coord(), p.coord());
    let color = s.fg;
    (Command::FillRect { x0, y0, x1, y1, color }, StateDelta::None)
}

fn circle(p: &mut Params<'_>, s: &DrawingState) -> (Command, StateDelta) {
    let (cx, cy, r) = (p.coord(), p.coord(), p.coord());
    (Command::Circle { cx, cy, r, color: s.fg }, StateDelta::None)
}

fn ellipse(p: &mut Params<'_>, s: &DrawingState) -> (Command, StateDelta) {
    let cx = p.coord();
    let cy = p.coord();
    let start_angle = p.coord();
    let end_angle = p.coord();
    let rx = p.coord();
    let ry = if p.remaining() >= COORD_WIDTH { p.coord() } else { rx };
    let cmd = Command::Ellipse {
        cx,
        cy,
        start_angle,
        end_angle,
        rx,
        ry,
        color: s.fg,
    };
    (cmd, StateDelta::None)
}

fn pixel(p: &mut Params<'_>, s: &DrawingState) -> (Command, StateDelta) {
    let Point { x, y } = p.point();
    (Command::Pixel { x, y, color: s.fg }, StateDelta::None)
}

fn move_to(p: &mut Params<'_>, _: &DrawingState) -> (Command, StateDelta) {
    let to = p.point();
    (Command::MoveTo { x: to.x, y: to.y }, StateDelta::Cursor(to))
}

fn line_to(p: &mut Params<'_>, s: &DrawingState) -> (Command, StateDelta) {
    let to = p.point();
    let cmd = Command::LineTo {
        x0: s.cursor.x,
        y0: s.cursor.y,
        x1: to.x,
        y1: to.y,
        color: s.fg,
    };
    (cmd, StateDelta::Cursor(to))
}

fn polyline(p: &mut Params<'_>, s: &DrawingState) -> (Command, StateDelta) {
    let count = p.digit() as usize;
    let mut points = Vec::with_capacity(count);
    // Only whole points present on the line are taken.
    while points.len() < count && p.remaining() >= 2 * COORD_WIDTH {
        points.push(p.point());
    }
    (Command::Polyline { points, color: s.fg }, StateDelta::None)
}

fn fill_style(p: &mut Params<'_>, _: &DrawingState) -> (Command, StateDelta) {
    let style = p.digit();
    let color = p.digit();
    (
        Command::SetFillStyle { style, color },
        StateDelta::Fill { style, color },
    )
}

fn flood_fill(p: &mut Params<'_>, s: &DrawingState) -> (Command, StateDelta) {
    let Point { x, y } = p.point();
    let border = p.digit();
    let cmd = Command::FloodFill {
        x,
        y,
        border,
        fill_color: s.fill_color,
    };
    (cmd, StateDelta::None)
}

fn reset(_: &mut Params<'_>, _: &DrawingState) -> (Command, StateDelta) {
    (Command::Reset, StateDelta::Reset)
}

fn define_window(p: &mut Params<'_>, _: &DrawingState) -> (Command, StateDelta) {
    let (x0, y0, x1, y1) = (p.coord(), p.coord(), p.coord(), p.coord());
    (Command::DefineWindow { x0, y0, x1, y1 }, StateDelta::None)
}

// ============================================================================
// Tests
// ============================================================================
