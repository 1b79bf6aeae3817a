//! Render configuration.

use crate::error::RasterError;
use crate::flood_fill::FloodFill;
use crate::playback::Pacing;

/// Surface size, playback pacing and flood-fill limits for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub pacing: Pacing,
    pub flood_fill: FloodFill,
}

impl RenderConfig {
    pub const DEFAULT_WIDTH: u32 = 640;
    pub const DEFAULT_HEIGHT: u32 = 350;

    pub fn validate(&self) -> Result<(), RasterError> {
        if self.width == 0 || self.height == 0 {
            return Err(RasterError::InvalidConfig(format!(
                "surface size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        self.flood_fill.validate()
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            pacing: Pacing::default(),
            flood_fill: FloodFill::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = RenderConfig::default();
        assert_eq!((c.width, c.height), (640, 350));
        assert_eq!(c.pacing.pixel_delay_ms, 1);
        assert_eq!(c.pacing.step_delay_ms, 20);
        assert_eq!(c.flood_fill.max_pending, 100_000);
        assert_eq!(c.flood_fill.tolerance, 1);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let c = RenderConfig {
            width: 0,
            ..RenderConfig::default()
        };
        assert!(matches!(c.validate(), Err(RasterError::InvalidConfig(_))));

        let c = RenderConfig {
            flood_fill: FloodFill::new(0, 1),
            ..RenderConfig::default()
        };
        assert!(c.validate().is_err());
    }
}
