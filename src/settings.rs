//! Match settings
//!
//! Fixed for the lifetime of a match. Loaded from JSON or built from the
//! stock tuning in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, SettingsError};

/// Match configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    // === Arena ===
    pub width: f32,
    pub height: f32,

    // === Paddles ===
    pub paddle_radius: f32,
    /// Per-axis movement per tick
    pub paddle_speed: f32,
    /// Starting distance from own short wall
    pub paddle_inset: f32,

    // === Puck ===
    pub puck_radius: f32,
    pub base_speed: f32,
    pub max_speed: f32,

    // === Rules ===
    /// First side to reach this score wins (1..=20)
    pub max_score: u32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,

            paddle_radius: PADDLE_RADIUS,
            paddle_speed: PADDLE_SPEED,
            paddle_inset: PADDLE_INSET,

            puck_radius: PUCK_RADIUS,
            base_speed: BASE_PUCK_SPEED,
            max_speed: MAX_PUCK_SPEED,

            max_score: DEFAULT_MAX_SCORE,
        }
    }
}

impl MatchSettings {
    /// Stock settings with a different match length
    pub fn with_max_score(max_score: u32) -> Self {
        Self {
            max_score,
            ..Self::default()
        }
    }

    /// Height of each goal gap, three paddle diameters
    pub fn goal_gap(&self) -> f32 {
        self.paddle_radius * GOAL_GAP_PADDLE_RADII
    }

    /// Step the match length up, saturating at the maximum
    pub fn increase_max_score(&mut self) {
        if self.max_score < MAX_MAX_SCORE {
            self.max_score += 1;
        }
    }

    /// Step the match length down, saturating at the minimum
    pub fn decrease_max_score(&mut self) {
        if self.max_score > MIN_MAX_SCORE {
            self.max_score -= 1;
        }
    }

    /// Reject anything the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_MAX_SCORE..=MAX_MAX_SCORE).contains(&self.max_score) {
            return Err(ConfigError::MaxScoreOutOfRange {
                value: self.max_score,
                min: MIN_MAX_SCORE,
                max: MAX_MAX_SCORE,
            });
        }

        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("paddle_radius", self.paddle_radius),
            ("puck_radius", self.puck_radius),
            ("paddle_speed", self.paddle_speed),
            ("base_speed", self.base_speed),
            ("max_speed", self.max_speed),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.max_speed < self.base_speed {
            return Err(ConfigError::SpeedRange {
                base_speed: self.base_speed,
                max_speed: self.max_speed,
            });
        }

        let goal_gap = self.goal_gap();
        if goal_gap >= self.height {
            return Err(ConfigError::GoalGapTooTall {
                goal_gap,
                height: self.height,
            });
        }

        let diameter = self.paddle_radius * 2.0;
        if diameter > self.width / 2.0 || diameter > self.height {
            return Err(ConfigError::PaddleTooLarge {
                radius: self.paddle_radius,
                width: self.width,
                height: self.height,
            });
        }

        let inset = self.paddle_inset;
        if !inset.is_finite()
            || inset < self.paddle_radius
            || inset > self.width / 2.0 - self.paddle_radius
        {
            return Err(ConfigError::InsetOutOfBounds { inset });
        }

        if self.width <= self.puck_radius * 4.0 {
            return Err(ConfigError::ArenaTooNarrow { width: self.width });
        }

        Ok(())
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings: Self = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }
}
