use glam::Vec2;
use pixel_hockey::MatchSettings;
use pixel_hockey::sim::*;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

const BASE_SPEED: f32 = 7.0;
const MAX_SPEED: f32 = 20.0;
const EPS: f32 = 1e-3;

fn field() -> FieldGeometry {
    FieldGeometry::new(&MatchSettings::default())
}

fn axis() -> impl Strategy<Value = i8> {
    -1i8..=1
}

fn intent() -> impl Strategy<Value = Intent> {
    (axis(), axis()).prop_map(|(x, y)| Intent::new(x, y))
}

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Left), Just(Side::Right)]
}

proptest! {
    /// Paddles never leave their half of the arena
    #[test]
    fn prop_paddle_stays_in_its_half(
        side in side(),
        intents in prop::collection::vec(intent(), 1..300)
    ) {
        let field = field();
        let mut paddle = Paddle::new(side, &field, 100.0);
        for intent in intents {
            paddle.update(intent, 8.0, &field);
            prop_assert!(paddle.in_bounds(&field));
        }
    }

    /// Any paddle hit leaves the puck within the speed bounds and clear of the paddle
    #[test]
    fn prop_paddle_hit_bounds_speed_and_overlap(
        side in side(),
        dx in -38.0f32..38.0,
        dy in -38.0f32..38.0,
        vx in -30.0f32..30.0,
        vy in -30.0f32..30.0,
        push in intent(),
    ) {
        let field = field();
        let mut paddle = Paddle::new(side, &field, 100.0);
        paddle.vel = push.axes() * 8.0;
        let mut puck = Puck::new(&field);
        puck.pos = paddle.pos + Vec2::new(dx, dy);
        puck.vel = Vec2::new(vx, vy);

        prop_assert!(resolve_paddle_hit(&mut puck, &paddle, BASE_SPEED, MAX_SPEED));

        let speed = puck.speed();
        prop_assert!(speed >= BASE_SPEED - EPS, "too slow: {}", speed);
        prop_assert!(speed <= MAX_SPEED + EPS, "too fast: {}", speed);

        let distance = (puck.pos - paddle.pos).length();
        prop_assert!(distance >= paddle.radius + puck.radius - EPS, "overlap left: {}", distance);
    }

    /// A serve always starts from the center at base horizontal speed
    #[test]
    fn prop_reset_invariants(seed in any::<u64>()) {
        let field = field();
        let mut puck = Puck::new(&field);
        let mut rng = Pcg32::seed_from_u64(seed);
        puck.reset(&field, BASE_SPEED, &mut rng);

        prop_assert_eq!(puck.pos, field.center());
        prop_assert_eq!(puck.vel.x.abs(), BASE_SPEED);
        prop_assert!(puck.vel.y.abs() <= 0.5 * BASE_SPEED);
    }

    /// The puck center only leaves the arena through a goal gap
    #[test]
    fn prop_puck_exits_only_through_gap(
        near_left in any::<bool>(),
        x in 0.0f32..30.0,
        y in 15.0f32..585.0,
        vx in 0.0f32..20.0,
        vy in -20.0f32..20.0,
    ) {
        let field = field();
        let mut puck = Puck::new(&field);
        if near_left {
            puck.pos = Vec2::new(x, y);
            puck.vel = Vec2::new(-vx, vy);
        } else {
            puck.pos = Vec2::new(field.width - x, y);
            puck.vel = Vec2::new(vx, vy);
        }
        let incoming = puck.vel;
        puck.update(&field);

        if puck.pos.x < 0.0 || puck.pos.x > field.width {
            prop_assert!(field.in_goal_gap(puck.pos.y));
        } else if !field.in_goal_gap(puck.pos.y) && puck.vel.x != incoming.x {
            // Bounced: clamped to the wall and reflected
            prop_assert_eq!(puck.vel.x, -incoming.x);
            prop_assert!(puck.pos.x == puck.radius || puck.pos.x == field.width - puck.radius);
        }
    }

    /// Whole matches under random input keep every per-tick guarantee
    #[test]
    fn prop_match_invariants_hold_every_tick(
        seed in any::<u64>(),
        max_score in 1u32..=20,
        inputs in prop::collection::vec((intent(), intent()), 1..400)
    ) {
        let mut state = MatchState::new(MatchSettings::with_max_score(max_score), seed).unwrap();

        for (left, right) in inputs {
            let before = (state.left.score, state.right.score);
            tick(&mut state, &TickInput::new(left, right));
            let after = (state.left.score, state.right.score);

            prop_assert!(state.left.in_bounds(&state.field));
            prop_assert!(state.right.in_bounds(&state.field));

            let gained = (after.0 - before.0) + (after.1 - before.1);
            prop_assert!(gained <= 1);
            if gained == 1 {
                prop_assert_eq!(state.puck.pos, state.field.center());
            }

            for event in &state.events {
                if let GameEvent::Goal { y, .. } = event {
                    prop_assert!(
                        state.field.in_goal_gap(*y),
                        "goal scored outside the gap at y={}",
                        y
                    );
                }
            }

            let (field, puck) = (&state.field, &state.puck);
            let r = puck.radius;
            prop_assert!(puck.pos.y >= r && puck.pos.y <= field.height - r);
            if field.in_goal_gap(puck.pos.y) {
                prop_assert!(puck.pos.x >= 0.0 && puck.pos.x <= field.width);
            } else {
                prop_assert!(
                    puck.pos.x >= r && puck.pos.x <= field.width - r,
                    "puck inside a solid wall at {:?}",
                    puck.pos
                );
            }

            let hit = state.events.iter().any(|e| matches!(e, GameEvent::PaddleHit { .. }));
            if hit {
                let speed = state.puck.speed();
                prop_assert!(speed >= BASE_SPEED - EPS && speed <= MAX_SPEED + EPS);
            }

            match state.phase {
                MatchPhase::Finished { winner } => {
                    prop_assert!(gained == 1);
                    prop_assert_eq!(state.score(winner), max_score);
                    break;
                }
                MatchPhase::InProgress => {
                    prop_assert!(after.0 < max_score && after.1 < max_score);
                }
                MatchPhase::Aborted => {
                    prop_assert!(false, "no abort was requested");
                }
            }
        }
    }
}
