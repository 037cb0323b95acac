//! Deck configuration.
//!
//! All fields have defaults from [`crate::constants`], so a RON file only
//! needs to mention what it overrides:
//!
//! ```ron
//! (window_size: 4, swipe_threshold: 120.0)
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::ConfigError;

/// Tuning knobs for the stack look and the swipe feel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Number of cards mounted at once.
    pub window_size: usize,

    // Stacking
    pub scale_step: f32,
    pub min_scale: f32,
    pub offset_step: f32,
    pub opacity_step: f32,
    pub min_opacity: f32,

    // Swipe
    /// Positive-x release displacement that commits an advance.
    pub swipe_threshold: f32,
    /// Drag distance at which the live fade saturates.
    pub fade_distance: f32,
    /// Rotation (radians) for a full-container-width drag.
    pub max_rotation: f32,

    // Transitions
    pub exit_duration_ms: u64,
    pub snap_back_duration_ms: u64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            window_size: constants::DEFAULT_WINDOW_SIZE,
            scale_step: constants::SCALE_STEP,
            min_scale: constants::MIN_SCALE,
            offset_step: constants::OFFSET_STEP,
            opacity_step: constants::OPACITY_STEP,
            min_opacity: constants::MIN_OPACITY,
            swipe_threshold: constants::SWIPE_THRESHOLD,
            fade_distance: constants::FADE_DISTANCE,
            max_rotation: constants::MAX_ROTATION,
            exit_duration_ms: constants::EXIT_DURATION.as_millis() as u64,
            snap_back_duration_ms: constants::SNAP_BACK_DURATION.as_millis() as u64,
        }
    }
}

impl DeckConfig {
    /// Set the window size.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the commit threshold.
    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn exit_duration(&self) -> Duration {
        Duration::from_millis(self.exit_duration_ms)
    }

    pub fn snap_back_duration(&self) -> Duration {
        Duration::from_millis(self.snap_back_duration_ms)
    }

    /// Reject configurations that would break the stack invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 {
            return Err(ConfigError::ZeroWindow);
        }

        for (field, value) in [
            ("scale_step", self.scale_step),
            ("min_scale", self.min_scale),
            ("offset_step", self.offset_step),
            ("opacity_step", self.opacity_step),
            ("min_opacity", self.min_opacity),
            ("swipe_threshold", self.swipe_threshold),
            ("fade_distance", self.fade_distance),
            ("max_rotation", self.max_rotation),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        for (field, value) in [
            ("swipe_threshold", self.swipe_threshold),
            ("fade_distance", self.fade_distance),
            ("min_scale", self.min_scale),
            ("min_opacity", self.min_opacity),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        for (field, value) in [
            ("scale_step", self.scale_step),
            ("min_scale", self.min_scale),
            ("opacity_step", self.opacity_step),
            ("min_opacity", self.min_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { field, value });
            }
        }

        for (field, value) in [
            ("offset_step", self.offset_step),
            ("max_rotation", self.max_rotation),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        Ok(())
    }

    /// Parse and validate a RON document.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: DeckConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }
}
