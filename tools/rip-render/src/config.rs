//! Render configuration files.
//!
//! A config file is TOML with the fields of [`RenderConfig`]; anything left
//! out keeps its default:
//!
//! ```toml
//! width = 640
//! height = 350
//!
//! [pacing]
//! pixel_delay_ms = 1
//! step_delay_ms = 20
//!
//! [flood_fill]
//! max_pending = 100000
//! tolerance = 1
//! ```

use anyhow::{Context, Result};
use rip_raster::RenderConfig;
use std::fs;
use std::path::Path;

/// Parse a configuration from TOML text and validate it.
pub fn parse(text: &str) -> Result<RenderConfig> {
    let config: RenderConfig = toml::from_str(text).context("Failed to parse render config")?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a configuration file.
pub fn load(path: &Path) -> Result<RenderConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse(&text).with_context(|| format!("Invalid config in {}", path.display()))
}

/// Start from the file (or defaults) and apply command-line size overrides.
pub fn resolve(
    path: Option<&Path>,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<RenderConfig> {
    let mut config = match path {
        Some(p) => load(p)?,
        None => RenderConfig::default(),
    };
    if let Some(w) = width {
        config.width = w;
    }
    if let Some(h) = height {
        config.height = h;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = parse("width = 320\n[pacing]\nstep_delay_ms = 5\n").unwrap();
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 350);
        assert_eq!(config.pacing.step_delay_ms, 5);
        assert_eq!(config.pacing.pixel_delay_ms, 1);
        assert_eq!(config.flood_fill.max_pending, 100_000);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(parse("").unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(parse("width = 0").is_err());
        assert!(parse("[flood_fill]\nmax_pending = 0").is_err());
        assert!(parse("width = \"wide\"").is_err());
    }

    #[test]
    fn test_load_and_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "width = 100\nheight = 80\n[flood_fill]\ntolerance = 3").unwrap();

        let config = resolve(Some(file.path()), None, Some(40)).unwrap();
        assert_eq!((config.width, config.height), (100, 40));
        assert_eq!(config.flood_fill.tolerance, 3);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load(Path::new("/nonexistent/render.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/render.toml"));
    }

    #[test]
    fn test_zero_override_rejected() {
        assert!(resolve(None, Some(0), None).is_err());
    }
}
