//! Decoded drawing commands.
//!
//! A [`Command`] is fully resolved when it leaves the decoder: coordinates
//! are plain integers and every colour is the palette index that was active
//! at that point in the stream. Playback never consults drawing state.

use crate::basics::Point;

/// Palette index as decoded. Values above 15 are kept as-is and rendered
/// with the palette fallback colour.
pub type ColorIndex = u8;

/// One immutable drawing instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Command {
    /// `c`: new foreground/background colours.
    SetColor { fg: ColorIndex, bg: ColorIndex },
    /// `L`: straight line.
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: ColorIndex,
    },
    /// `R`: rectangle outline.
    Rect {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: ColorIndex,
    },
    /// `B`: filled rectangle (bar).
    FillRect {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: ColorIndex,
    },
    /// `C`: circle outline.
    Circle {
        cx: i32,
        cy: i32,
        r: i32,
        color: ColorIndex,
    },
    /// `O`: ellipse outline. The angles are carried but the full ellipse is drawn.
    Ellipse {
        cx: i32,
        cy: i32,
        start_angle: i32,
        end_angle: i32,
        rx: i32,
        ry: i32,
        color: ColorIndex,
    },
    /// `X`: single pixel.
    Pixel { x: i32, y: i32, color: ColorIndex },
    /// `m`: pen move, no drawing.
    MoveTo { x: i32, y: i32 },
    /// `l`: line from the pen position captured at decode time.
    LineTo {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: ColorIndex,
    },
    /// `P`: open polyline through the listed points.
    Polyline { points: Vec<Point>, color: ColorIndex },
    /// `S`: fill style and fill colour.
    SetFillStyle { style: u8, color: ColorIndex },
    /// `F`: seeded flood fill painting `fill_color`.
    ///
    /// `border` is decoded for completeness; the fill replaces the seed's
    /// colour region and does not stop at a border colour.
    FloodFill {
        x: i32,
        y: i32,
        border: ColorIndex,
        fill_color: ColorIndex,
    },
    /// `*`: clear the surface and reset drawing state.
    Reset,
    /// `w`: text window definition. Reserved, never rendered.
    DefineWindow { x0: i32, y0: i32, x1: i32, y1: i32 },
}

impl Command {
    /// The opcode letter this command was decoded from.
    pub fn opcode(&self) -> char {
        match self {
            Command::SetColor { .. } => 'c',
            Command::Line { .. } => 'L',
            Command::Rect { .. } => 'R',
            Command::FillRect { .. } => 'B',
            Command::Circle { .. } => 'C',
            Command::Ellipse { .. } => 'O',
            Command::Pixel { .. } => 'X',
            Command::MoveTo { .. } => 'm',
            Command::LineTo { .. } => 'l',
            Command::Polyline { .. } => 'P',
            Command::SetFillStyle { .. } => 'S',
            Command::FloodFill { .. } => 'F',
            Command::Reset => '*',
            Command::DefineWindow { .. } => 'w',
        }
    }

    /// Pixel-level commands are paced with the short playback delay.
    pub fn is_pixel_level(&self) -> bool {
        matches!(self, Command::Pixel { .. })
    }

    /// True for commands that never touch the raster surface.
    pub fn is_state_only(&self) -> bool {
        matches!(
            self,
            Command::SetColor { .. }
                | Command::SetFillStyle { .. }
                | Command::MoveTo { .. }
                | Command::DefineWindow { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_letters() {
        assert_eq!(Command::Reset.opcode(), '*');
        assert_eq!(Command::MoveTo { x: 0, y: 0 }.opcode(), 'm');
        let poly = Command::Polyline {
            points: vec![],
            color: 1,
        };
        assert_eq!(poly.opcode(), 'P');
    }

    #[test]
    fn test_pixel_level() {
        assert!(Command::Pixel { x: 1, y: 1, color: 2 }.is_pixel_level());
        assert!(!Command::Reset.is_pixel_level());
        assert!(!Command::Circle {
            cx: 1,
            cy: 1,
            r: 1,
            color: 1
        }
        .is_pixel_level());
    }

    #[test]
    fn test_state_only() {
        assert!(Command::SetColor { fg: 1, bg: 0 }.is_state_only());
        assert!(Command::DefineWindow {
            x0: 0,
            y0: 0,
            x1: 1,
            y1: 1
        }
        .is_state_only());
        assert!(!Command::Reset.is_state_only());
    }
}
