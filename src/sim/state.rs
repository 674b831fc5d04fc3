//! Match state and core simulation types
//!
//! Everything a tick reads or writes lives here. Renderers only ever see a
//! [`Snapshot`].

use std::fmt;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::field::FieldGeometry;
use crate::error::ConfigError;
use crate::settings::MatchSettings;

/// Which half of the arena a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("LEFT"),
            Side::Right => f.write_str("RIGHT"),
        }
    }
}

/// Per-tick directional input for one paddle
///
/// Axes are independent, each one of -1, 0 or 1. Holding both directions on
/// one axis cancels to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub x: i8,
    pub y: i8,
}

impl Intent {
    pub const IDLE: Intent = Intent { x: 0, y: 0 };

    /// Build an intent, collapsing each axis to its sign
    pub fn new(x: i8, y: i8) -> Self {
        Self {
            x: x.signum(),
            y: y.signum(),
        }
    }

    /// Build an intent from four held buttons (y grows downward)
    pub fn from_buttons(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            x: right as i8 - left as i8,
            y: down as i8 - up as i8,
        }
    }

    /// Axis values as a vector, not normalized
    #[inline]
    pub fn axes(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    /// Velocity applied this tick, recomputed from intent every tick
    pub vel: Vec2,
    pub radius: f32,
    pub score: u32,
}

impl Paddle {
    /// Paddle at its starting spot: `inset` from its own wall, vertically centered
    pub fn new(side: Side, field: &FieldGeometry, inset: f32) -> Self {
        let x = match side {
            Side::Left => inset,
            Side::Right => field.width - inset,
        };
        Self {
            side,
            pos: Vec2::new(x, field.height / 2.0),
            vel: Vec2::ZERO,
            radius: field.paddle_radius,
            score: 0,
        }
    }

    /// Whether the paddle center sits inside its side's allowed area
    pub fn in_bounds(&self, field: &FieldGeometry) -> bool {
        let (min_x, max_x) = field.paddle_x_range(self.side);
        let (min_y, max_y) = field.paddle_y_range();
        (min_x..=max_x).contains(&self.pos.x) && (min_y..=max_y).contains(&self.pos.y)
    }

    /// Apply one tick of movement and keep the paddle in its half
    pub fn update(&mut self, intent: Intent, speed: f32, field: &FieldGeometry) {
        if !self.in_bounds(field) {
            log::warn!(
                "{} paddle found out of bounds at ({}, {}), clamping",
                self.side,
                self.pos.x,
                self.pos.y
            );
        }

        self.vel = intent.axes() * speed;
        self.pos += self.vel;

        // Vertical first, then the half-arena bound
        let (min_y, max_y) = field.paddle_y_range();
        self.pos.y = self.pos.y.clamp(min_y, max_y);

        let (min_x, max_x) = field.paddle_x_range(self.side);
        self.pos.x = self.pos.x.clamp(min_x, max_x);
    }
}

/// The puck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puck {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Puck {
    /// A resting puck at the arena center; call [`Puck::reset`] to serve it
    pub fn new(field: &FieldGeometry) -> Self {
        Self {
            pos: field.center(),
            vel: Vec2::ZERO,
            radius: field.puck_radius,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Re-serve from the center toward a random side
    ///
    /// Horizontal speed is exactly `base_speed`; vertical is `base_speed`
    /// scaled by a uniform draw in [-0.5, 0.5].
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        field: &FieldGeometry,
        base_speed: f32,
        rng: &mut R,
    ) {
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let angle: f32 = rng.random_range(-0.5..=0.5);

        self.pos = field.center();
        self.vel = Vec2::new(direction * base_speed, base_speed * angle);
    }

    /// Advance one tick and bounce off solid wall sections
    ///
    /// Inside a goal gap the short walls are open: the puck keeps going and
    /// its center ends up past x = 0 or x = width. Returns true on a bounce.
    pub fn update(&mut self, field: &FieldGeometry) -> bool {
        self.pos += self.vel;
        let r = self.radius;
        let mut bounced = false;

        if self.pos.y - r <= 0.0 {
            self.pos.y = r;
            self.vel.y = -self.vel.y;
            bounced = true;
        } else if self.pos.y + r >= field.height {
            self.pos.y = field.height - r;
            self.vel.y = -self.vel.y;
            bounced = true;
        }

        let open = field.in_goal_gap(self.pos.y);
        if self.pos.x - r <= 0.0 {
            if !open {
                self.pos.x = r;
                self.vel.x = -self.vel.x;
                bounced = true;
            }
        } else if self.pos.x + r >= field.width && !open {
            self.pos.x = field.width - r;
            self.vel.x = -self.vel.x;
            bounced = true;
        }

        bounced
    }

    /// Pull the puck back inside the solid walls after a paddle push
    ///
    /// Vertical position is clamped into the arena; horizontal position only
    /// outside the goal gap. A component still heading into the wall it was
    /// clamped against is reflected. Returns true if anything changed.
    pub fn keep_in_arena(&mut self, field: &FieldGeometry) -> bool {
        let r = self.radius;
        let mut moved = false;

        if self.pos.y < r {
            self.pos.y = r;
            self.vel.y = self.vel.y.abs();
            moved = true;
        } else if self.pos.y > field.height - r {
            self.pos.y = field.height - r;
            self.vel.y = -self.vel.y.abs();
            moved = true;
        }

        if !field.in_goal_gap(self.pos.y) {
            if self.pos.x < r {
                self.pos.x = r;
                self.vel.x = self.vel.x.abs();
                moved = true;
            } else if self.pos.x > field.width - r {
                self.pos.x = field.width - r;
                self.vel.x = -self.vel.x.abs();
                moved = true;
            }
        }

        moved
    }
}

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Active play
    InProgress,
    /// A side reached the max score
    Finished { winner: Side },
    /// Stopped from outside before anyone won
    Aborted,
}

impl MatchPhase {
    pub fn winner(&self) -> Option<Side> {
        match self {
            MatchPhase::Finished { winner } => Some(*winner),
            _ => None,
        }
    }

    /// True once no further ticks will change anything
    pub fn is_over(&self) -> bool {
        !matches!(self, MatchPhase::InProgress)
    }
}

/// Things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    PaddleHit { side: Side },
    /// `y` is where the puck center crossed the goal line
    Goal { scorer: Side, y: f32 },
    MatchWon { winner: Side },
    Aborted,
}

/// Read-only view handed to the renderer each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub left_pos: Vec2,
    pub left_score: u32,
    pub right_pos: Vec2,
    pub right_score: u32,
    pub puck_pos: Vec2,
    pub phase: MatchPhase,
}

/// Complete state of one match
///
/// Discard after it is over; a rematch is a new instance.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub settings: MatchSettings,
    pub field: FieldGeometry,
    pub left: Paddle,
    pub right: Paddle,
    pub puck: Puck,
    pub phase: MatchPhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl MatchState {
    /// Create a match whose puck serves are drawn from `seed`
    pub fn new(settings: MatchSettings, seed: u64) -> Result<Self, ConfigError> {
        let state = Self::with_rng(settings, Pcg32::seed_from_u64(seed))?;
        log::info!(
            "New match: seed={}, first to {}",
            seed,
            state.settings.max_score
        );
        Ok(state)
    }

    /// Create a match with a caller-supplied random source
    pub fn with_rng(settings: MatchSettings, rng: Pcg32) -> Result<Self, ConfigError> {
        settings.validate()?;

        let field = FieldGeometry::new(&settings);
        let mut state = Self {
            left: Paddle::new(Side::Left, &field, settings.paddle_inset),
            right: Paddle::new(Side::Right, &field, settings.paddle_inset),
            puck: Puck::new(&field),
            phase: MatchPhase::InProgress,
            time_ticks: 0,
            events: Vec::new(),
            settings,
            field,
            rng,
        };
        state.reset_puck();

        Ok(state)
    }

    /// Serve the puck again from the center
    pub fn reset_puck(&mut self) {
        self.puck
            .reset(&self.field, self.settings.base_speed, &mut self.rng);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        self.paddle(side).score
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            left_pos: self.left.pos,
            left_score: self.left.score,
            right_pos: self.right.pos,
            right_score: self.right.score,
            puck_pos: self.puck.pos,
            phase: self.phase,
        }
    }
}
