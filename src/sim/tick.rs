//! Fixed-step match tick
//!
//! One call advances the match by one frame. Order never changes:
//! paddles, puck, paddle collisions (left then right), wall re-clamp, goals,
//! win check.

use super::collision::resolve_paddle_hit;
use super::state::{GameEvent, Intent, MatchPhase, MatchState, Side};

/// Input for a single tick (already decoded from the keyboard)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: Intent,
    pub right: Intent,
    /// Leave the match (Escape). No scoring happens on this tick.
    pub abort: bool,
}

impl TickInput {
    pub fn new(left: Intent, right: Intent) -> Self {
        Self {
            left,
            right,
            abort: false,
        }
    }

    pub fn intent(&self, side: Side) -> Intent {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Advance the match by one fixed tick
pub fn tick(state: &mut MatchState, input: &TickInput) {
    if state.phase.is_over() {
        return;
    }

    state.events.clear();

    if input.abort {
        state.phase = MatchPhase::Aborted;
        state.events.push(GameEvent::Aborted);
        log::info!(
            "Match aborted at {}-{}",
            state.left.score,
            state.right.score
        );
        return;
    }

    state.time_ticks += 1;

    // Paddles
    let speed = state.settings.paddle_speed;
    let field = state.field;
    state.left.update(input.left, speed, &field);
    state.right.update(input.right, speed, &field);

    // Puck
    if state.puck.update(&field) {
        state.events.push(GameEvent::WallBounce);
    }

    // Paddle hits, left first
    let (base_speed, max_speed) = (state.settings.base_speed, state.settings.max_speed);
    for side in [Side::Left, Side::Right] {
        let paddle = match side {
            Side::Left => &state.left,
            Side::Right => &state.right,
        };
        if resolve_paddle_hit(&mut state.puck, paddle, base_speed, max_speed) {
            state.events.push(GameEvent::PaddleHit { side });
        }
    }

    // A paddle push must not carry the puck through a solid wall
    if state.puck.keep_in_arena(&field) && !state.events.contains(&GameEvent::WallBounce) {
        state.events.push(GameEvent::WallBounce);
    }

    if let Some(scorer) = check_goal(state) {
        check_win(state, scorer);
    }
}

/// Score a goal if the puck's center has left the arena
///
/// Returns the side that scored. The puck is re-served in the same tick.
pub fn check_goal(state: &mut MatchState) -> Option<Side> {
    let conceded = if state.puck.pos.x < 0.0 {
        Side::Left
    } else if state.puck.pos.x > state.field.width {
        Side::Right
    } else {
        return None;
    };
    let scorer = conceded.opposite();
    let y = state.puck.pos.y;

    state.paddle_mut(scorer).score += 1;
    state.reset_puck();
    state.events.push(GameEvent::Goal { scorer, y });

    log::info!(
        "Goal {}! {}-{}",
        scorer,
        state.left.score,
        state.right.score
    );
    Some(scorer)
}

/// Finish the match if the side that just scored reached the max score
pub fn check_win(state: &mut MatchState, scorer: Side) {
    if state.score(scorer) >= state.settings.max_score {
        state.phase = MatchPhase::Finished { winner: scorer };
        state.events.push(GameEvent::MatchWon { winner: scorer });
        log::info!("{} PLAYER WINS after {} ticks", scorer, state.time_ticks);
    }
}
