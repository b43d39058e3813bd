//! Idle/demo mode - a simple bot that plays the game
//!
//! Looks a short distance up the runner's lane and reacts to the first thing
//! it sees: jump file stacks, slide under coworkers, change lanes for bosses.

use crate::sim::{GamePhase, GameState, Lane, Obstacle, ObstacleKind, TickInput};

/// How far above the runner's hitbox the bot reacts to obstacles (px)
const REACTION_DISTANCE: f32 = 70.0;
/// Window used to judge whether a lane is safe to move into (px)
const LANE_CLEARANCE: f32 = 260.0;

/// Obstacles in `lane` whose bottom edge is within `window` px above `top`
/// (or already overlapping vertically)
fn threats<'a>(state: &'a GameState, lane: Lane, window: f32) -> impl Iterator<Item = &'a Obstacle> {
    let hitbox = state.player.hitbox();
    state.obstacles.obstacles().iter().filter(move |o| {
        o.lane == lane && o.rect.bottom() >= hitbox.top() - window && o.rect.top() <= hitbox.bottom()
    })
}

/// Pick this frame's input for the bot
pub fn autopilot_input(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    if state.phase != GamePhase::Playing {
        input.start = true;
        return input;
    }

    let lane = state.player.lane;
    let Some(next) = threats(state, lane, REACTION_DISTANCE).max_by(|a, b| a.rect.bottom().total_cmp(&b.rect.bottom()))
    else {
        return input;
    };

    match next.kind() {
        ObstacleKind::FileStack => input.jump = true,
        ObstacleKind::Coworker => input.slide = true,
        ObstacleKind::Boss => {
            let is_clear = |l: Lane| l != lane && threats(state, l, LANE_CLEARANCE).next().is_none();
            if is_clear(lane.left()) {
                input.move_left = true;
            } else if is_clear(lane.right()) {
                input.move_right = true;
            } else if lane != lane.left() {
                input.move_left = true;
            } else {
                input.move_right = true;
            }
        }
    }
    input
}
