//! Editor configuration.

use crate::camera::{MAX_ZOOM, MIN_ZOOM};
use crate::shapes::{LINE_HIT_TOLERANCE, ShapeStyle};
use crate::snap::GRID_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tunables for one editing surface. Every field has a default, so a config
/// file only needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid step applied to committed and moved coordinates.
    pub grid_step: f64,
    /// Lower zoom bound.
    pub min_zoom: f64,
    /// Upper zoom bound.
    pub max_zoom: f64,
    /// Wheel multiplier when scrolling up.
    pub wheel_zoom_in: f64,
    /// Wheel multiplier when scrolling down.
    pub wheel_zoom_out: f64,
    /// Keyboard zoom multiplies (in) or divides (out) by this.
    pub key_zoom_step: f64,
    /// Proximity allowance for line hits, in canvas units.
    pub line_hit_tolerance: f64,
    /// Maximum number of undo entries; `None` keeps everything.
    pub max_history: Option<usize>,
    /// Style given to newly drawn elements.
    pub default_style: ShapeStyle,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_step: GRID_SIZE,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            wheel_zoom_in: 1.05,
            wheel_zoom_out: 0.95,
            key_zoom_step: 1.1,
            line_hit_tolerance: LINE_HIT_TOLERANCE,
            max_history: None,
            default_style: ShapeStyle::default(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )))
            }
        };
        positive("grid_step", self.grid_step)?;
        positive("min_zoom", self.min_zoom)?;
        positive("max_zoom", self.max_zoom)?;
        positive("wheel_zoom_in", self.wheel_zoom_in)?;
        positive("wheel_zoom_out", self.wheel_zoom_out)?;
        positive("key_zoom_step", self.key_zoom_step)?;
        positive("line_hit_tolerance", self.line_hit_tolerance)?;
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::Invalid(format!(
                "min_zoom ({}) exceeds max_zoom ({})",
                self.min_zoom, self.max_zoom
            )));
        }
        Ok(())
    }
}
