//! Error types
//!
//! The simulation itself is infallible; these cover match construction,
//! settings files and replay tapes.

use thiserror::Error;

/// Rejected match configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("max score {value} outside {min}..={max}")]
    MaxScoreOutOfRange { value: u32, min: u32, max: u32 },

    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("max speed {max_speed} is below base speed {base_speed}")]
    SpeedRange { base_speed: f32, max_speed: f32 },

    #[error("goal gap {goal_gap} does not fit arena height {height}")]
    GoalGapTooTall { goal_gap: f32, height: f32 },

    #[error("paddle radius {radius} does not fit a {width}x{height} arena half")]
    PaddleTooLarge { radius: f32, width: f32, height: f32 },

    #[error("paddle inset {inset} places the starting paddle outside its half")]
    InsetOutOfBounds { inset: f32 },

    #[error("arena width {width} must exceed twice the puck diameter")]
    ArenaTooNarrow { width: f32 },
}

/// Failure loading a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(#[from] ConfigError),
}

/// Failure decoding or running a replay tape
#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid tape settings: {0}")]
    Config(#[from] ConfigError),

    #[error("Tick {tick}: axis value {value} is not one of -1, 0, 1")]
    InvalidAxis { tick: usize, value: i8 },
}

impl SettingsError {
    /// True when falling back to default settings is reasonable
    pub fn is_recoverable(&self) -> bool {
        match self {
            SettingsError::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            SettingsError::Json(_) => false,
            SettingsError::Invalid(_) => false,
        }
    }
}
