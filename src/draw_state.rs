//! Drawing state threaded through a single decode pass.

use crate::basics::Point;
use crate::command::ColorIndex;

/// Active colours, fill settings and pen position.
///
/// Owned by exactly one decode call. Opcode handlers never mutate it
/// directly; they return a [`StateDelta`] that the decoder applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawingState {
    pub fg: ColorIndex,
    pub bg: ColorIndex,
    pub fill_style: u8,
    pub fill_color: ColorIndex,
    pub cursor: Point,
}

impl DrawingState {
    pub const DEFAULT_FG: ColorIndex = 15;
    pub const DEFAULT_BG: ColorIndex = 0;
    pub const DEFAULT_FILL_STYLE: u8 = 1;
    pub const DEFAULT_FILL_COLOR: ColorIndex = 15;

    pub fn new() -> Self {
        Self {
            fg: Self::DEFAULT_FG,
            bg: Self::DEFAULT_BG,
            fill_style: Self::DEFAULT_FILL_STYLE,
            fill_color: Self::DEFAULT_FILL_COLOR,
            cursor: Point::ORIGIN,
        }
    }

    /// Restore every field to its default.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn apply(&mut self, delta: StateDelta) {
        match delta {
            StateDelta::None => {}
            StateDelta::Colors { fg, bg } => {
                self.fg = fg;
                self.bg = bg;
            }
            StateDelta::Fill { style, color } => {
                self.fill_style = style;
                self.fill_color = color;
            }
            StateDelta::Cursor(p) => self.cursor = p,
            StateDelta::Reset => self.reset(),
        }
    }
}

impl Default for DrawingState {
    fn default() -> Self {
        Self::new()
    }
}

/// The change an opcode makes to the drawing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateDelta {
    None,
    Colors { fg: ColorIndex, bg: ColorIndex },
    Fill { style: u8, color: ColorIndex },
    Cursor(Point),
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = DrawingState::new();
        assert_eq!(s.fg, 15);
        assert_eq!(s.bg, 0);
        assert_eq!(s.fill_style, 1);
        assert_eq!(s.fill_color, 15);
        assert_eq!(s.cursor, Point::ORIGIN);
        assert_eq!(s, DrawingState::default());
    }

    #[test]
    fn test_apply_deltas() {
        let mut s = DrawingState::new();
        s.apply(StateDelta::Colors { fg: 4, bg: 1 });
        s.apply(StateDelta::Fill { style: 3, color: 9 });
        s.apply(StateDelta::Cursor(Point::new(10, 20)));
        assert_eq!((s.fg, s.bg), (4, 1));
        assert_eq!((s.fill_style, s.fill_color), (3, 9));
        assert_eq!(s.cursor, Point::new(10, 20));

        s.apply(StateDelta::None);
        assert_eq!(s.fg, 4);

        s.apply(StateDelta::Reset);
        assert_eq!(s, DrawingState::new());
    }
}
