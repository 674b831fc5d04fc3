//! Collision detection and response between the puck and the paddles
//!
//! Both are circles. On overlap the puck is pushed out along the contact
//! normal and relaunched along it, with part of the paddle's motion added
//! on top. Speed after a hit always lands in [base_speed, max_speed].

use glam::Vec2;

use super::state::{Paddle, Puck, Side};
use crate::consts::PADDLE_PUSH_FACTOR;

/// Result of an overlap check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the circles overlap
    pub hit: bool,
    /// Unit normal from paddle center toward the puck
    pub normal: Vec2,
    /// Overlap depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Normal used when the puck sits exactly on the paddle center: away from
/// the paddle's own goal.
#[inline]
pub fn fallback_normal(side: Side) -> Vec2 {
    match side {
        Side::Left => Vec2::X,
        Side::Right => Vec2::NEG_X,
    }
}

/// Check whether the puck overlaps a paddle
pub fn puck_paddle_collision(puck: &Puck, paddle: &Paddle) -> CollisionResult {
    let offset = puck.pos - paddle.pos;
    let distance = offset.length();
    let reach = paddle.radius + puck.radius;

    if distance >= reach {
        return CollisionResult::miss();
    }

    let normal = if distance > 0.0 {
        offset / distance
    } else {
        fallback_normal(paddle.side)
    };

    CollisionResult {
        hit: true,
        normal,
        penetration: reach - distance,
    }
}

/// Velocity after a paddle hit
///
/// Outgoing speed along the normal is the incoming speed, raised to
/// `base_speed` if slower. Half the paddle velocity is added, then the
/// magnitude is kept within [base_speed, max_speed] without turning it.
pub fn rebound_velocity(
    incoming: Vec2,
    normal: Vec2,
    paddle_vel: Vec2,
    base_speed: f32,
    max_speed: f32,
) -> Vec2 {
    let speed = incoming.length().max(base_speed);
    let vel = normal * speed + paddle_vel * PADDLE_PUSH_FACTOR;

    let total = vel.length();
    if total > max_speed {
        vel * (max_speed / total)
    } else if total < base_speed {
        // The paddle was moving against the normal
        if total > 0.0 {
            vel * (base_speed / total)
        } else {
            normal * base_speed
        }
    } else {
        vel
    }
}

/// Separate the puck from a paddle and relaunch it
///
/// Returns true if they were touching.
pub fn resolve_paddle_hit(
    puck: &mut Puck,
    paddle: &Paddle,
    base_speed: f32,
    max_speed: f32,
) -> bool {
    let result = puck_paddle_collision(puck, paddle);
    if !result.hit {
        return false;
    }

    puck.pos += result.normal * result.penetration;
    puck.vel = rebound_velocity(puck.vel, result.normal, paddle.vel, base_speed, max_speed);

    log::debug!(
        "{} paddle hit: depth={:.2}, speed={:.2}",
        paddle.side,
        result.penetration,
        puck.speed()
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MatchSettings;
    use crate::sim::field::FieldGeometry;

    fn setup() -> (FieldGeometry, Paddle, Puck) {
        let field = FieldGeometry::new(&MatchSettings::default());
        let paddle = Paddle::new(Side::Left, &field, 100.0);
        let puck = Puck::new(&field);
        (field, paddle, puck)
    }

    #[test]
    fn test_no_hit_when_apart() {
        let (_, paddle, mut puck) = setup();
        puck.pos = paddle.pos + Vec2::new(55.0, 0.0);
        puck.vel = Vec2::new(-5.0, 0.0);
        assert!(!puck_paddle_collision(&puck, &paddle).hit);
        assert!(!resolve_paddle_hit(&mut puck, &paddle, 7.0, 20.0));
        assert_eq!(puck.vel, Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn test_overlap_reports_normal_and_depth() {
        let (_, paddle, mut puck) = setup();
        puck.pos = paddle.pos + Vec2::new(0.0, 50.0);
        let result = puck_paddle_collision(&puck, &paddle);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::Y);
        assert_eq!(result.penetration, 5.0);
    }

    #[test]
    fn test_puck_pushed_out_to_contact_distance() {
        let (_, paddle, mut puck) = setup();
        puck.pos = paddle.pos + Vec2::new(30.0, -20.0);
        puck.vel = Vec2::new(-6.0, 2.0);
        assert!(resolve_paddle_hit(&mut puck, &paddle, 7.0, 20.0));
        let distance = (puck.pos - paddle.pos).length();
        assert!(distance >= 55.0 - 1e-3, "residual overlap: {distance}");
    }

    #[test]
    fn test_slow_puck_leaves_at_base_speed() {
        let (_, paddle, mut puck) = setup();
        puck.pos = paddle.pos + Vec2::new(50.0, 0.0);
        puck.vel = Vec2::new(-3.0, 0.0);
        resolve_paddle_hit(&mut puck, &paddle, 7.0, 20.0);
        assert!((puck.speed() - 7.0).abs() < 1e-4);
        assert!(puck.vel.x > 0.0);
    }

    #[test]
    fn test_fast_puck_keeps_speed_along_normal() {
        let (_, paddle, mut puck) = setup();
        puck.pos = paddle.pos + Vec2::new(50.0, 0.0);
        puck.vel = Vec2::new(-12.0, 0.0);
        resolve_paddle_hit(&mut puck, &paddle, 7.0, 20.0);
        assert_eq!(puck.vel, Vec2::new(12.0, 0.0));
    }

    #[test]
    fn test_moving_paddle_adds_half_its_velocity() {
        let (_, mut paddle, mut puck) = setup();
        paddle.vel = Vec2::new(8.0, 8.0);
        puck.pos = paddle.pos + Vec2::new(50.0, 0.0);
        puck.vel = Vec2::new(-7.0, 0.0);
        resolve_paddle_hit(&mut puck, &paddle, 7.0, 20.0);
        assert_eq!(puck.vel, Vec2::new(11.0, 4.0));
    }

    #[test]
    fn test_speed_capped_preserving_direction() {
        let (_, mut paddle, mut puck) = setup();
        paddle.vel = Vec2::new(8.0, 0.0);
        puck.pos = paddle.pos + Vec2::new(50.0, 0.0);
        puck.vel = Vec2::new(-19.0, 0.0);
        resolve_paddle_hit(&mut puck, &paddle, 7.0, 20.0);
        // 19 + 4 = 23, scaled to 20
        assert!((puck.speed() - 20.0).abs() < 1e-4);
        assert!(puck.vel.y.abs() < 1e-6);
    }

    #[test]
    fn test_paddle_moving_against_normal_still_meets_base_speed() {
        let (_, mut paddle, mut puck) = setup();
        paddle.vel = Vec2::new(-8.0, -8.0);
        puck.pos = paddle.pos + Vec2::new(50.0, 0.0);
        puck.vel = Vec2::new(-3.0, 0.0);
        resolve_paddle_hit(&mut puck, &paddle, 7.0, 20.0);
        assert!((puck.speed() - 7.0).abs() < 1e-4);
    }

    #[test]
    fn test_concentric_puck_uses_fallback_normal() {
        let (_, paddle, mut puck) = setup();
        puck.pos = paddle.pos;
        puck.vel = Vec2::ZERO;
        assert!(resolve_paddle_hit(&mut puck, &paddle, 7.0, 20.0));
        assert_eq!(puck.pos, paddle.pos + Vec2::new(55.0, 0.0));
        assert_eq!(puck.vel, Vec2::new(7.0, 0.0));
        assert!(puck.pos.is_finite() && puck.vel.is_finite());
    }

    #[test]
    fn test_fallback_normal_points_away_from_own_goal() {
        assert_eq!(fallback_normal(Side::Left), Vec2::X);
        assert_eq!(fallback_normal(Side::Right), Vec2::NEG_X);
    }
}
