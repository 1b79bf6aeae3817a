//! PNG output and the terminal progress bar.

use anyhow::{Context, Result};
use rip_raster::RenderingBuffer;
use std::io::Write;
use std::path::Path;

/// Write the surface as an 8-bit RGBA PNG.
pub fn save_png(surface: &RenderingBuffer, path: &Path) -> Result<()> {
    let (w, h) = (surface.width(), surface.height());
    let img = image::RgbaImage::from_raw(w, h, surface.as_bytes().to_vec())
        .context("Surface size does not match its pixel data")?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Cells in the drawn bar.
pub const BAR_WIDTH: usize = 20;

/// `DRAW: ████████░░░░░░░░░░░░ 45%`
pub fn render_bar(progress: u8, width: usize) -> String {
    let progress = progress.min(100) as usize;
    let filled = progress * width / 100;
    format!(
        "DRAW: {}{} {}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        progress
    )
}

/// Redraws the bar in place on a terminal stream.
pub struct ProgressBar<W: Write> {
    out: W,
    last: Option<u8>,
}

impl<W: Write> ProgressBar<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    /// Show `progress`; repeated values are not redrawn.
    pub fn update(&mut self, progress: u8) {
        if self.last == Some(progress) {
            return;
        }
        self.last = Some(progress);
        // Progress output is best effort.
        let _ = write!(self.out, "\r{}", render_bar(progress, BAR_WIDTH));
        let _ = self.out.flush();
    }

    /// End the bar line.
    pub fn finish(mut self) {
        let _ = writeln!(self.out);
    }
}
