//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, all speeds are per tick
//! - Seeded RNG only
//! - Stable update order (left before right)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod state;
pub mod tick;

pub use collision::{
    CollisionResult, fallback_normal, puck_paddle_collision, rebound_velocity, resolve_paddle_hit,
};
pub use field::FieldGeometry;
pub use state::{GameEvent, Intent, MatchPhase, MatchState, Paddle, Puck, Side, Snapshot};
pub use tick::{TickInput, check_goal, check_win, tick};
