//! Protocol decoder: command text in, ordered [`Command`] list out.
//!
//! The text is processed line by line. Blank lines and lines starting with
//! `#` or `//` are skipped. Within a line, `|` or `!` introduces a command,
//! the following character selects an entry of the opcode table, and the
//! entry consumes its parameters from the rest of that line only.
//!
//! Nothing here fails. A command whose parameters run past the end of the
//! line is dropped and scanning resumes right after its opcode letter;
//! unknown opcode letters are skipped the same way.

use tracing::{debug, trace};

use crate::command::Command;
use crate::draw_state::DrawingState;
use crate::opcode::{self, Params};

/// Counters collected while decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeStats {
    pub lines: usize,
    pub skipped_lines: usize,
    pub emitted: usize,
    /// Known opcodes dropped for lack of parameter characters.
    pub dropped: usize,
    pub unknown: usize,
}

/// Single-pass decoder.
///
/// Owns the [`DrawingState`] for exactly one stream. Use [`decode`] for the
/// common case of decoding a whole text with fresh state.
#[derive(Debug, Default)]
pub struct Decoder {
    state: DrawingState,
    commands: Vec<Command>,
    stats: DecodeStats,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current drawing state.
    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn stats(&self) -> &DecodeStats {
        &self.stats
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Decode every line of `text`.
    pub fn feed(&mut self, text: &str) {
        for line in text.lines() {
            self.decode_line(line);
        }
    }

    /// Decode a single line; parameters never continue onto another line.
    pub fn decode_line(&mut self, line: &str) {
        self.stats.lines += 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            self.stats.skipped_lines += 1;
            return;
        }

        let chars: Vec<char> = line.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            if !opcode::is_introducer(chars[i]) {
                i += 1;
                continue;
            }
            i += 1;
            let Some(&letter) = chars.get(i) else {
                break;
            };
            i += 1;

            let Some(op) = opcode::lookup(letter) else {
                trace!(opcode = %letter, column = i - 1, "ignoring unknown opcode");
                self.stats.unknown += 1;
                continue;
            };

            let mut params = Params::new(&chars[i..]);
            match op.decode(&mut params, &self.state) {
                Some((command, delta)) => {
                    self.state.apply(delta);
                    self.commands.push(command);
                    self.stats.emitted += 1;
                    i += params.consumed();
                }
                None => {
                    trace!(
                        opcode = %letter,
                        needed = op.min_len,
                        available = chars.len() - i,
                        "dropping command with truncated parameters"
                    );
                    self.stats.dropped += 1;
                }
            }
        }
    }

    /// Finish decoding and hand back the commands in stream order.
    pub fn finish(self) -> (Vec<Command>, DecodeStats) {
        debug!(
            lines = self.stats.lines,
            emitted = self.stats.emitted,
            dropped = self.stats.dropped,
            unknown = self.stats.unknown,
            "decoded command stream"
        );
        (self.commands, self.stats)
    }
}

/// Decode `text` with fresh drawing state.
pub fn decode(text: &str) -> Vec<Command> {
    decode_with_stats(text).0
}

/// Decode `text` with fresh drawing state, also returning the counters.
pub fn decode_with_stats(text: &str) -> (Vec<Command>, DecodeStats) {
    let mut decoder = Decoder::new();
    decoder.feed(text);
    decoder.finish()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::Point;

    #[test]
    fn test_reset_color_line() {
        let cmds = decode("|*|c0F|L00002S1E");
        assert_eq!(
            cmds,
            vec![
                Command::Reset,
                Command::SetColor { fg: 0, bg: 15 },
                Command::Line {
                    x0: 0,
                    y0: 0,
                    x1: 100,
                    y1: 50,
                    color: 0
                },
            ]
        );
    }

    #[test]
    fn test_short_parameters_are_dropped() {
        let (cmds, stats) = decode_with_stats("|L0000");
        assert!(cmds.is_empty());
        assert_eq!(stats.dropped, 1);
    }

    #[test]
    fn test_scan_resumes_after_dropped_opcode() {
        // The line command only has six characters before the end, so the
        // scanner picks up the colour command that sits inside its window.
        let cmds = decode("|L00|c0F");
        assert_eq!(cmds, vec![Command::SetColor { fg: 0, bg: 15 }]);
    }

    #[test]
    fn test_move_then_line_to() {
        let cmds = decode("|m0A0A|l1414");
        assert_eq!(
            cmds,
            vec![
                Command::MoveTo { x: 10, y: 10 },
                Command::LineTo {
                    x0: 10,
                    y0: 10,
                    x1: 40,
                    y1: 40,
                    color: 15
                },
            ]
        );
    }

    #[test]
    fn test_line_to_chain_updates_cursor() {
        let cmds = decode("|l0505|l0A05");
        assert_eq!(
            cmds[1],
            Command::LineTo {
                x0: 5,
                y0: 5,
                x1: 10,
                y1: 5,
                color: 15
            }
        );
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let text = "# header\n\n   // note |X0101\n  |X0202  \n";
        let (cmds, stats) = decode_with_stats(text);
        assert_eq!(cmds, vec![Command::Pixel { x: 2, y: 2, color: 15 }]);
        assert_eq!(stats.skipped_lines, 3);
        assert_eq!(stats.lines, 4);
    }

    #[test]
    fn test_parameters_do_not_span_lines() {
        let (cmds, stats) = decode_with_stats("|L0000\n00002S1E");
        assert!(cmds.is_empty());
        assert_eq!(stats.dropped, 1);
    }

    #[test]
    fn test_unknown_opcode_is_ignored() {
        let (cmds, stats) = decode_with_stats("|Q1234|X0101");
        assert_eq!(cmds, vec![Command::Pixel { x: 1, y: 1, color: 15 }]);
        assert_eq!(stats.unknown, 1);
    }

    #[test]
    fn test_bang_introducer_and_trailing_pipe() {
        let cmds = decode("!X0101 |");
        assert_eq!(cmds, vec![Command::Pixel { x: 1, y: 1, color: 15 }]);
    }

    #[test]
    fn test_reset_restores_defaults_mid_stream() {
        let cmds = decode("|c40|S2C|m0101|*|X0000|F0000F|l0202");
        assert_eq!(cmds[4], Command::Pixel { x: 0, y: 0, color: 15 });
        assert_eq!(
            cmds[5],
            Command::FloodFill {
                x: 0,
                y: 0,
                border: 15,
                fill_color: 15
            }
        );
        assert_eq!(
            cmds[6],
            Command::LineTo {
                x0: 0,
                y0: 0,
                x1: 2,
                y1: 2,
                color: 15
            }
        );
    }

    #[test]
    fn test_each_decode_starts_fresh() {
        let first = decode("|c4F|m0505");
        assert_eq!(first.len(), 2);
        // No colour or cursor leaks from the previous call.
        let second = decode("|X0000|l0101");
        assert_eq!(second[0], Command::Pixel { x: 0, y: 0, color: 15 });
        assert_eq!(
            second[1],
            Command::LineTo {
                x0: 0,
                y0: 0,
                x1: 1,
                y1: 1,
                color: 15
            }
        );
    }

    #[test]
    fn test_colors_are_baked_at_decode_time() {
        let cmds = decode("|c20|X0101|cC0|X0202");
        assert_eq!(cmds[1], Command::Pixel { x: 1, y: 1, color: 2 });
        assert_eq!(cmds[3], Command::Pixel { x: 2, y: 2, color: 12 });
    }

    #[test]
    fn test_out_of_palette_color_passes_through() {
        let cmds = decode("|cZ0|X0101");
        assert_eq!(cmds[1], Command::Pixel { x: 1, y: 1, color: 35 });
    }

    #[test]
    fn test_polyline_stops_at_end_of_line() {
        let cmds = decode("|P30000050A\n|X0101");
        assert_eq!(
            cmds[0],
            Command::Polyline {
                points: vec![Point::new(0, 0), Point::new(5, 10)],
                color: 15
            }
        );
        assert_eq!(cmds.len(), 2);
    }

    #[test]
    fn test_decoder_state_accessor() {
        let mut d = Decoder::new();
        d.decode_line("|c12|S3A|m0C0D");
        assert_eq!(d.state().fg, 1);
        assert_eq!(d.state().bg, 2);
        assert_eq!(d.state().fill_color, 10);
        assert_eq!(d.state().cursor, Point::new(12, 13));
        assert_eq!(d.commands().len(), 3);
    }

    #[test]
    fn test_ellipse_ry_reads_the_next_two_characters() {
        // Twelve characters remain after the radius, so `|X` is taken as ry
        // and the pixel command is swallowed.
        let (cmds, stats) = decode_with_stats("|O0A0A00A005|X0101");
        assert_eq!(
            cmds,
            vec![Command::Ellipse {
                cx: 10,
                cy: 10,
                start_angle: 0,
                end_angle: 360,
                rx: 5,
                ry: 33,
                color: 15
            }]
        );
        assert_eq!(stats.emitted, 1);
    }

    #[test]
    fn test_identical_commands_are_all_kept() {
        let cmds = decode("|X0101|X0101\n|X0101");
        let pixel = Command::Pixel {
            x: 1,
            y: 1,
            color: 15,
        };
        assert_eq!(cmds, vec![pixel.clone(), pixel.clone(), pixel]);
    }

    #[test]
    fn test_empty_input() {
        let (cmds, stats) = decode_with_stats("");
        assert!(cmds.is_empty());
        assert_eq!(stats, DecodeStats::default());
    }
}
