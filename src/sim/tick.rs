//! Per-frame simulation step
//!
//! One call advances the game by a (clamped) frame delta. Order within a
//! playing frame is fixed: time, speed level, player, speed, backdrop and
//! spawners, power-ups, obstacles, score.

use super::collision::{collect_powerup, find_obstacle_hit};
use super::events::SimEvent;
use super::powerup::PowerUpKind;
use super::state::{GamePhase, GameState};

/// Input commands for a single frame. Each flag is a discrete trigger, not a
/// held key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub slide: bool,
    /// Start/restart button was pressed
    pub start: bool,
}

impl TickInput {
    pub fn is_empty(&self) -> bool {
        *self == TickInput::default()
    }
}

/// Clamp a raw frame delta into `[0, max_ms]`; garbage becomes 0
pub fn clamp_frame_dt(dt_ms: f32, max_ms: f32) -> f32 {
    if dt_ms.is_finite() {
        dt_ms.clamp(0.0, max_ms)
    } else {
        0.0
    }
}

/// Advance the game state by one frame of `dt_ms` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) -> Vec<SimEvent> {
    let mut events = Vec::new();

    if input.start && state.phase != GamePhase::Playing {
        events.push(state.start_game());
    }

    if state.phase != GamePhase::Playing {
        return events;
    }

    // Inputs only steer an active run
    if input.move_left {
        state.player.move_left();
    }
    if input.move_right {
        state.player.move_right();
    }
    if input.jump {
        state.player.jump();
    }
    if input.slide {
        state.player.slide();
    }

    let dt = clamp_frame_dt(dt_ms, state.tuning.max_frame_dt_ms);

    state.elapsed_ms += dt as f64;
    state.speed_level = state.speed_level_for(state.elapsed_ms);

    state.player.update(dt);

    let speed = state.current_speed();
    let distance = speed * (dt / 1000.0);
    let landmark_speed =
        state.tuning.landmark_base_speed + speed * state.tuning.landmark_speed_ratio;
    let landmark_distance = landmark_speed * (dt / 1000.0);

    state
        .backdrop
        .update(dt, distance, landmark_distance, &mut state.rng);
    state
        .obstacles
        .update(dt, distance, state.speed_level, &mut state.rng);
    state.powerups.update(dt, distance, &mut state.rng);

    if let Some(powerup) = collect_powerup(&state.player, &mut state.powerups) {
        match powerup.kind {
            PowerUpKind::Coffee => state.player.apply_speed_boost(state.tuning.coffee_boost_ms),
            PowerUpKind::MetroCard => state
                .player
                .apply_invincible(state.tuning.metro_card_invincible_ms),
        }
        log::debug!("Collected {:?}", powerup.kind);
        events.push(SimEvent::PowerUpCollected { kind: powerup.kind });
    }

    if let Some(hit) = find_obstacle_hit(&state.player, state.obstacles.obstacles()) {
        if state.player.is_invincible() {
            events.push(SimEvent::HitAbsorbed { obstacle_id: hit.id });
        } else {
            let kind = hit.kind();
            events.push(state.game_over(kind));
            return events;
        }
    }

    state.score += distance as f64 * state.tuning.score_per_px;
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::{Lane, Layout};
    use crate::sim::obstacle::ObstacleKind;
    use crate::tuning::Tuning;

    const START: TickInput = TickInput {
        move_left: false,
        move_right: false,
        jump: false,
        slide: false,
        start: true,
    };

    fn playing() -> GameState {
        let mut state = GameState::new(Layout::default(), Tuning::default(), 0.0, 12345);
        tick(&mut state, &START, 0.0);
        state
    }

    /// Put an obstacle right on top of the runner's hitbox
    fn boss_on_player(state: &mut GameState) {
        let hitbox = state.player.hitbox();
        state
            .obstacles
            .spawn_at(ObstacleKind::Boss, state.player.lane, hitbox.top());
    }

    #[test]
    fn test_tick_start_to_playing() {
        let mut state = GameState::new(Layout::default(), Tuning::default(), 0.0, 1);
        let events = tick(&mut state, &TickInput::default(), 16.0);
        assert!(events.is_empty());
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.elapsed_ms, 0.0);

        let events = tick(&mut state, &START, 16.0);
        assert_eq!(events.first(), Some(&SimEvent::SessionStarted));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.elapsed_ms, 16.0);
    }

    #[test]
    fn test_start_ignored_while_playing() {
        let mut state = playing();
        tick(&mut state, &TickInput::default(), 50.0);
        let events = tick(&mut state, &START, 10.0);
        assert!(!events.contains(&SimEvent::SessionStarted));
        assert_eq!(state.elapsed_ms, 60.0);
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut state = playing();
        tick(&mut state, &TickInput::default(), 5000.0);
        assert_eq!(state.elapsed_ms, 60.0);
        tick(&mut state, &TickInput::default(), -20.0);
        assert_eq!(state.elapsed_ms, 60.0);
        tick(&mut state, &TickInput::default(), f32::NAN);
        assert_eq!(state.elapsed_ms, 60.0);
    }

    #[test]
    fn test_inputs_ignored_outside_play() {
        let mut state = GameState::new(Layout::default(), Tuning::default(), 0.0, 1);
        let input = TickInput {
            move_left: true,
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &input, 16.0);
        assert_eq!(state.player.lane, Lane::Center);
        assert!(!state.player.is_jumping());
    }

    #[test]
    fn test_boss_collision_ends_run_without_scoring() {
        let mut state = playing();
        tick(&mut state, &TickInput::default(), 20.0);
        let score_before = state.score;
        assert!(score_before > 0.0);

        boss_on_player(&mut state);
        let events = tick(&mut state, &TickInput::default(), 20.0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, score_before);
        assert!(matches!(
            events.last(),
            Some(SimEvent::GameOver {
                obstacle: ObstacleKind::Boss,
                new_high_score: true,
                ..
            })
        ));

        // Frozen after game over
        let elapsed = state.elapsed_ms;
        tick(&mut state, &TickInput::default(), 20.0);
        assert_eq!(state.elapsed_ms, elapsed);
    }

    #[test]
    fn test_invincible_absorbs_hits_every_frame() {
        let mut state = playing();
        state.player.apply_invincible(1000.0);
        boss_on_player(&mut state);

        let events = tick(&mut state, &TickInput::default(), 1.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(matches!(events.last(), Some(SimEvent::HitAbsorbed { .. })));
        assert_eq!(state.obstacles.obstacles().len(), 1);

        let events = tick(&mut state, &TickInput::default(), 1.0);
        assert!(matches!(events.last(), Some(SimEvent::HitAbsorbed { .. })));
    }

    #[test]
    fn test_lane_change_dodges_boss() {
        let mut state = playing();
        boss_on_player(&mut state);
        let input = TickInput {
            move_left: true,
            ..Default::default()
        };
        tick(&mut state, &input, 16.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.lane, Lane::Left);
    }

    #[test]
    fn test_coffee_pickup_boosts() {
        let mut state = playing();
        let top = state.player.hitbox().top();
        state
            .powerups
            .spawn_at(PowerUpKind::Coffee, state.player.lane, top);
        let events = tick(&mut state, &TickInput::default(), 16.0);
        assert!(events.contains(&SimEvent::PowerUpCollected {
            kind: PowerUpKind::Coffee
        }));
        assert!(state.player.has_speed_boost());
        assert!(state.powerups.powerups().is_empty());
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = playing();
        boss_on_player(&mut state);
        tick(&mut state, &TickInput::default(), 16.0);
        assert_eq!(state.phase, GamePhase::GameOver);

        let events = tick(&mut state, &START, 16.0);
        assert_eq!(events.first(), Some(&SimEvent::SessionStarted));
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.obstacles.obstacles().is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut s1 = playing();
        let mut s2 = playing();
        let inputs = [
            TickInput {
                move_left: true,
                ..Default::default()
            },
            TickInput {
                jump: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                slide: true,
                move_right: true,
                ..Default::default()
            },
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut s1, input, 16.0);
            tick(&mut s2, input, 16.0);
        }

        assert_eq!(s1.phase, s2.phase);
        assert_eq!(s1.score, s2.score);
        assert_eq!(s1.elapsed_ms, s2.elapsed_ms);
        assert_eq!(
            s1.obstacles.obstacles().len(),
            s2.obstacles.obstacles().len()
        );
    }
}
