//! Arena geometry
//!
//! A rectangle with a goal gap centered on each short wall:
//! - x runs from the left wall (0) to the right wall (width)
//! - y runs from the top wall (0) to the bottom wall (height)
//! - the gaps span [goal_top, goal_bottom] on both short walls

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Side;
use crate::settings::MatchSettings;

/// Static arena dimensions for one match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldGeometry {
    pub width: f32,
    pub height: f32,
    pub paddle_radius: f32,
    pub puck_radius: f32,
    /// Vertical extent of each goal gap
    pub goal_gap: f32,
    /// Upper edge of the goal gap (smaller y)
    pub goal_top: f32,
    /// Lower edge of the goal gap (larger y)
    pub goal_bottom: f32,
}

impl FieldGeometry {
    /// Build the geometry from already-validated settings
    pub fn new(settings: &MatchSettings) -> Self {
        let goal_gap = settings.goal_gap();
        let center_y = settings.height / 2.0;
        Self {
            width: settings.width,
            height: settings.height,
            paddle_radius: settings.paddle_radius,
            puck_radius: settings.puck_radius,
            goal_gap,
            goal_top: center_y - goal_gap / 2.0,
            goal_bottom: center_y + goal_gap / 2.0,
        }
    }

    /// Geometric center of the arena
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// x of the center line
    #[inline]
    pub fn midline(&self) -> f32 {
        self.width / 2.0
    }

    /// Whether a y coordinate lies inside the goal gap (edges included)
    #[inline]
    pub fn in_goal_gap(&self, y: f32) -> bool {
        y >= self.goal_top && y <= self.goal_bottom
    }

    /// Allowed range for a paddle center on the given side
    pub fn paddle_x_range(&self, side: Side) -> (f32, f32) {
        let r = self.paddle_radius;
        match side {
            Side::Left => (r, self.midline() - r),
            Side::Right => (self.midline() + r, self.width - r),
        }
    }

    /// Allowed vertical range for a paddle center
    #[inline]
    pub fn paddle_y_range(&self) -> (f32, f32) {
        (self.paddle_radius, self.height - self.paddle_radius)
    }
}
