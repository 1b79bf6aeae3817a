//! # rip-raster
//!
//! Decoder and software rasterizer for RIPscrip-style vector command text.
//!
//! Command text is a stream of `|`-introduced, one-letter opcodes with
//! base-36 parameters, e.g. `|c0F|L00002S1E`. The crate:
//!
//! - decodes it into an ordered list of fully resolved [`Command`]s
//! - plays the list back one command per step onto an RGBA surface, with
//!   pacing and cancellation
//! - rasterizes aliased 1-pixel lines, rectangles, circles and ellipses
//! - fills regions with a bounded-stack flood fill
//!
//! ## Pipeline
//!
//! 1. **Source**: optional cleanup of generated text ([`source::prepare`])
//! 2. **Decoder**: text to commands, owning the drawing state
//! 3. **Scheduler**: a cancellable [`Playback`] session per render
//! 4. **Rasterizer**: command to pixels through the renderer stack
//!
//! ```
//! use rip_raster::{decode, Scheduler};
//!
//! let commands = decode("|*|c0F|L00002S1E");
//! let mut playback = Scheduler::new().start(commands, 640, 350).unwrap();
//! playback.finish();
//! let surface = playback.into_surface();
//! assert_eq!(surface.width(), 640);
//! ```

// Protocol
pub mod base36;
pub mod command;
pub mod decoder;
pub mod draw_state;
pub mod opcode;
pub mod source;

// Foundation types
pub mod basics;
pub mod color;
pub mod error;
pub mod palette;

// Surface & renderers
pub mod pixfmt_rgba;
pub mod renderer_base;
pub mod renderer_primitives;
pub mod rendering_buffer;

// Primitive geometry
pub mod dda_line;
pub mod ellipse_bresenham;

// Execution
pub mod config;
pub mod flood_fill;
pub mod playback;
pub mod rasterizer;

pub use basics::Point;
pub use color::Rgba8;
pub use command::{ColorIndex, Command};
pub use config::RenderConfig;
pub use decoder::{decode, decode_with_stats, DecodeStats, Decoder};
pub use draw_state::DrawingState;
pub use error::RasterError;
pub use flood_fill::{FillStats, FloodFill};
pub use playback::{Pacing, Playback, Scheduler, Step};
pub use rasterizer::Effect;
pub use rendering_buffer::RenderingBuffer;
