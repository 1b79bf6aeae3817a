//! Paced, cancellable playback of a decoded command list.
//!
//! A [`Scheduler`] hands out [`Playback`] sessions. Each session owns a fresh
//! surface and executes one command per [`Playback::step`]. Starting a new
//! session bumps a shared generation counter; an older session sees the
//! mismatch on its next step and stops without touching its surface again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::command::Command;
use crate::config::RenderConfig;
use crate::error::RasterError;
use crate::flood_fill::FloodFill;
use crate::palette;
use crate::rasterizer;
use crate::rendering_buffer::RenderingBuffer;

// ============================================================================
// Pacing
// ============================================================================

/// Delays inserted between playback steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Pacing {
    /// Delay after a pixel-level command, in milliseconds.
    pub pixel_delay_ms: u64,
    /// Delay after any other command, in milliseconds.
    pub step_delay_ms: u64,
}

impl Pacing {
    pub const DEFAULT_PIXEL_DELAY_MS: u64 = 1;
    pub const DEFAULT_STEP_DELAY_MS: u64 = 20;

    /// No delays at all.
    pub const IMMEDIATE: Pacing = Pacing {
        pixel_delay_ms: 0,
        step_delay_ms: 0,
    };

    pub fn delay_for(&self, cmd: &Command) -> Duration {
        if cmd.is_pixel_level() {
            Duration::from_millis(self.pixel_delay_ms)
        } else {
            Duration::from_millis(self.step_delay_ms)
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            pixel_delay_ms: Self::DEFAULT_PIXEL_DELAY_MS,
            step_delay_ms: Self::DEFAULT_STEP_DELAY_MS,
        }
    }
}

// ============================================================================
// Scheduler
// ============================================================================

/// Starts playback sessions and invalidates the previous one.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    generation: Arc<AtomicU64>,
    pacing: Pacing,
    fill: FloodFill,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &RenderConfig) -> Self {
        Self {
            generation: Arc::default(),
            pacing: config.pacing,
            fill: config.flood_fill,
        }
    }

    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    /// Start a new session, cancelling any session started earlier.
    ///
    /// Earlier sessions are invalidated before the surface is created, so
    /// they stop even when this start fails. The surface is cleared to the
    /// background colour.
    pub fn start(
        &self,
        commands: Vec<Command>,
        width: u32,
        height: u32,
    ) -> Result<Playback, RasterError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut surface = RenderingBuffer::new(width, height)?;
        surface.fill(palette::color(palette::BACKGROUND_INDEX));
        debug!(generation, commands = commands.len(), width, height, "playback started");
        Ok(Playback {
            token: SessionToken {
                current: Arc::clone(&self.generation),
                generation,
            },
            commands,
            next: 0,
            surface,
            pacing: self.pacing,
            fill: self.fill,
        })
    }

    /// Cancel the current session without starting another.
    pub fn cancel(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst);
        debug!(generation, "playback cancelled");
    }
}

/// Identifies one session against the scheduler's generation counter.
#[derive(Debug, Clone)]
pub struct SessionToken {
    current: Arc<AtomicU64>,
    generation: u64,
}

impl SessionToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

// ============================================================================
// Playback
// ============================================================================

/// Result of one playback step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One command was executed. Wait `delay` before the next step.
    Drawn { progress: u8, delay: Duration },
    /// Every command has been executed.
    Finished { progress: u8 },
    /// A newer session started; this one will not draw again.
    Cancelled,
}

/// One running playback session.
#[derive(Debug)]
pub struct Playback {
    token: SessionToken,
    commands: Vec<Command>,
    next: usize,
    surface: RenderingBuffer,
    pacing: Pacing,
    fill: FloodFill,
}

impl Playback {
    pub fn token(&self) -> &SessionToken {
        &self.token
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of commands executed so far.
    pub fn executed(&self) -> usize {
        self.next
    }

    /// Percentage of commands executed, rounded down.
    pub fn progress(&self) -> u8 {
        if self.commands.is_empty() {
            return 100;
        }
        (self.next * 100 / self.commands.len()) as u8
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.commands.len()
    }

    /// Execute the next command.
    pub fn step(&mut self) -> Step {
        if !self.token.is_current() {
            return Step::Cancelled;
        }
        let Some(cmd) = self.commands.get(self.next) else {
            return Step::Finished { progress: 100 };
        };
        let effect = rasterizer::execute(&mut self.surface, cmd, &self.fill);
        tracing::trace!(index = self.next, opcode = %cmd.opcode(), ?effect, "executed");
        let delay = self.pacing.delay_for(cmd);
        self.next += 1;
        Step::Drawn {
            progress: self.progress(),
            delay,
        }
    }

    /// Drive the session to the end, pausing through `sleep` between steps.
    ///
    /// `on_progress` sees the percentage after every executed command.
    /// Returns the last step, either `Finished` or `Cancelled`.
    pub fn run<S, P>(&mut self, mut sleep: S, mut on_progress: P) -> Step
    where
        S: FnMut(Duration),
        P: FnMut(u8),
    {
        loop {
            match self.step() {
                Step::Drawn { progress, delay } => {
                    on_progress(progress);
                    if !delay.is_zero() {
                        sleep(delay);
                    }
                }
                done => return done,
            }
        }
    }

    /// Execute every remaining command without pacing.
    pub fn finish(&mut self) -> Step {
        self.run(|_| {}, |_| {})
    }

    pub fn surface(&self) -> &RenderingBuffer {
        &self.surface
    }

    pub fn into_surface(self) -> RenderingBuffer {
        self.surface
    }
}

// ============================================================================
// Tests
// ============================================================================
