//! Pixel Hockey - a two-player gap-goal air hockey game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, puck, collisions, match state)
//! - `settings`: Match configuration and validation
//! - `replay`: Recorded input tapes for deterministic playback
//! - `error`: Error types for the fallible edges (config, loading, tapes)

pub mod error;
pub mod replay;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, ReplayError, SettingsError};
pub use replay::{ReplayOutcome, Tape};
pub use settings::MatchSettings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate. Physics values are expressed per tick.
    pub const TICK_RATE_HZ: u32 = 60;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1200.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_RADIUS: f32 = 40.0;
    /// Pixels per tick along each axis
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Starting distance of each paddle from its own short wall
    pub const PADDLE_INSET: f32 = 100.0;

    /// Puck defaults
    pub const PUCK_RADIUS: f32 = 15.0;
    /// Minimum speed after any paddle hit (pixels per tick)
    pub const BASE_PUCK_SPEED: f32 = 7.0;
    /// Speed cap applied after paddle hits
    pub const MAX_PUCK_SPEED: f32 = 20.0;
    /// Share of the paddle's velocity transferred to the puck on contact
    pub const PADDLE_PUSH_FACTOR: f32 = 0.5;

    /// Goal gap is three paddle diameters tall
    pub const GOAL_GAP_PADDLE_RADII: f32 = 6.0;

    /// Match length
    pub const DEFAULT_MAX_SCORE: u32 = 5;
    pub const MIN_MAX_SCORE: u32 = 1;
    pub const MAX_MAX_SCORE: u32 = 20;
}
