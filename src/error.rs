//! Error types.
//!
//! Decoding and drawing never fail; only surface allocation and
//! configuration validation do.

use thiserror::Error;

/// Errors raised when creating a raster surface or validating configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// Zero-sized surface, or one whose byte size does not fit in memory.
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A configuration value outside its accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
