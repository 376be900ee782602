//! Configuration for tracking and line geometry
//!
//! Defaults reproduce the reference setup: frames normalized to 1020x500
//! before detection, two horizontal count lines at rows 198 and 268, a
//! 20px tolerance band around each, and a 50px centroid match threshold.

use crate::error::{CountError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the centroid tracker
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Maximum centroid distance (pixels) to match a detection to a track
    pub max_distance: f32,
    /// Frames a track survives without a matching detection
    pub grace_frames: u32,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            max_distance: 50.0,
            grace_frames: 0,
        }
    }
}

/// Geometry of the two horizontal reference lines
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    /// Pixel row of the first (red) reference line
    pub red_y: i32,
    /// Pixel row of the second (blue) reference line
    pub blue_y: i32,
    /// Half-width of each line's tolerance band, exclusive at both ends
    pub offset: i32,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            red_y: 198,
            blue_y: 268,
            offset: 20,
        }
    }
}

impl LineConfig {
    /// Reject geometry that breaks the crossing state machine.
    ///
    /// The bands `(line_y - offset, line_y + offset)` must not intersect:
    /// a centroid sitting in both bands at once would set and satisfy the
    /// crossing flags in the same frame.
    pub fn validate(&self) -> Result<()> {
        if self.offset <= 0 {
            return Err(CountError::config(format!(
                "line offset must be positive, got {}",
                self.offset
            )));
        }
        if (self.red_y - self.blue_y).abs() < 2 * self.offset {
            return Err(CountError::BandOverlap {
                red_y: self.red_y,
                blue_y: self.blue_y,
                offset: self.offset,
            });
        }
        Ok(())
    }
}

/// Top-level configuration for a counting run
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CountingConfig {
    pub tracking: TrackingConfig,
    pub lines: LineConfig,
}

impl CountingConfig {
    /// Load and validate a configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.tracking.max_distance.is_finite() && self.tracking.max_distance > 0.0) {
            return Err(CountError::config(format!(
                "max_distance must be a positive finite value, got {}",
                self.tracking.max_distance
            )));
        }
        self.lines.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_setup() {
        let config = CountingConfig::default();
        assert_eq!(config.tracking.max_distance, 50.0);
        assert_eq!(config.tracking.grace_frames, 0);
        assert_eq!(config.lines.red_y, 198);
        assert_eq!(config.lines.blue_y, 268);
        assert_eq!(config.lines.offset, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: CountingConfig =
            serde_json::from_str(r#"{"lines": {"offset": 10}}"#).unwrap();
        assert_eq!(config.lines.offset, 10);
        assert_eq!(config.lines.red_y, 198);
        assert_eq!(config.tracking.max_distance, 50.0);
    }

    #[test]
    fn test_overlapping_bands_rejected() {
        let lines = LineConfig {
            red_y: 198,
            blue_y: 220,
            offset: 20,
        };
        assert!(matches!(
            lines.validate(),
            Err(CountError::BandOverlap { .. })
        ));
    }

    #[test]
    fn test_touching_bands_allowed() {
        // Open intervals: bands (158, 198) and (198, 238) share no row
        let lines = LineConfig {
            red_y: 178,
            blue_y: 218,
            offset: 20,
        };
        assert!(lines.validate().is_ok());
    }

    #[test]
    fn test_bad_offset_rejected() {
        let lines = LineConfig {
            offset: 0,
            ..Default::default()
        };
        assert!(matches!(lines.validate(), Err(CountError::Config(_))));
    }

    #[test]
    fn test_bad_max_distance_rejected() {
        let config = CountingConfig {
            tracking: TrackingConfig {
                max_distance: -1.0,
                grace_frames: 0,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
