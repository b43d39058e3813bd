//! Game state and session lifecycle
//!
//! Everything the simulation mutates lives here, owned by one `GameState`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::events::SimEvent;
use super::geometry::Layout;
use super::landmark::Backdrop;
use super::obstacle::{ObstacleKind, ObstacleSystem};
use super::player::Player;
use super::powerup::PowerUpSystem;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start button
    #[default]
    Start,
    /// Active run
    Playing,
    /// Run ended, waiting for the restart button
    GameOver,
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    /// Distance-based score of the current (or last) run
    pub score: f64,
    /// Best score seen, including previously persisted runs
    pub high_score: f64,
    /// `floor(elapsed / interval) + 1`
    pub speed_level: u32,
    /// Play time of the current run (ms)
    pub elapsed_ms: f64,
    pub player: Player,
    pub obstacles: ObstacleSystem,
    pub powerups: PowerUpSystem,
    pub backdrop: Backdrop,
    pub layout: Layout,
    pub tuning: Tuning,
}

impl GameState {
    /// Create a game sitting on the start screen
    pub fn new(layout: Layout, tuning: Tuning, high_score: f64, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            score: 0.0,
            high_score: sanitize_score(high_score),
            speed_level: 1,
            elapsed_ms: 0.0,
            player: Player::new(&layout),
            obstacles: ObstacleSystem::new(layout, tuning.obstacles),
            powerups: PowerUpSystem::new(layout, tuning.powerups),
            backdrop: Backdrop::new(layout, tuning.landmarks),
            layout,
            tuning,
        }
    }

    /// Begin a fresh run, wiping every per-run value
    pub fn start_game(&mut self) -> SimEvent {
        self.phase = GamePhase::Playing;
        self.player.reset();
        self.obstacles.reset();
        self.powerups.reset();
        self.backdrop.reset();
        self.score = 0.0;
        self.elapsed_ms = 0.0;
        self.speed_level = 1;
        log::info!("Run started (best so far: {:.0})", self.high_score);
        SimEvent::SessionStarted
    }

    /// Speed level implied by an elapsed play time
    pub fn speed_level_for(&self, elapsed_ms: f64) -> u32 {
        (elapsed_ms / self.tuning.speed_increase_interval_ms).floor() as u32 + 1
    }

    /// Road speed in px/s, including the coffee boost
    pub fn current_speed(&self) -> f32 {
        let speed = self.tuning.level_speed(self.speed_level);
        if self.player.has_speed_boost() {
            speed * self.tuning.boost_factor
        } else {
            speed
        }
    }

    /// End the run; records a new best when beaten
    pub(crate) fn game_over(&mut self, obstacle: ObstacleKind) -> SimEvent {
        self.phase = GamePhase::GameOver;
        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
            log::info!("New high score: {:.0}", self.score);
        }
        log::info!(
            "Game over: hit {:?} at level {} with score {:.0}",
            obstacle,
            self.speed_level,
            self.score
        );
        SimEvent::GameOver {
            obstacle,
            score: self.score,
            new_high_score,
        }
    }
}

/// Stored scores can be anything; only finite non-negative values count
pub fn sanitize_score(score: f64) -> f64 {
    if score.is_finite() && score > 0.0 {
        score
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(Layout::default(), Tuning::default(), 0.0, 42)
    }

    #[test]
    fn test_new_state_on_start_screen() {
        let s = state();
        assert_eq!(s.phase, GamePhase::Start);
        assert_eq!(s.speed_level, 1);
        assert_eq!(s.score, 0.0);
    }

    #[test]
    fn test_start_game_resets_run() {
        let mut s = state();
        s.start_game();
        s.score = 120.0;
        s.elapsed_ms = 25_000.0;
        s.speed_level = 3;
        s.player.move_left();
        s.player.apply_invincible(1000.0);
        s.obstacles
            .spawn_at(ObstacleKind::Boss, crate::sim::Lane::Left, 0.0);

        assert_eq!(s.start_game(), SimEvent::SessionStarted);
        assert_eq!(s.phase, GamePhase::Playing);
        assert_eq!(s.score, 0.0);
        assert_eq!(s.elapsed_ms, 0.0);
        assert_eq!(s.speed_level, 1);
        assert_eq!(s.player.lane, crate::sim::Lane::Center);
        assert!(!s.player.is_invincible());
        assert!(s.obstacles.obstacles().is_empty());
    }

    #[test]
    fn test_speed_levels() {
        let s = state();
        assert_eq!(s.speed_level_for(0.0), 1);
        assert_eq!(s.speed_level_for(9_999.0), 1);
        assert_eq!(s.speed_level_for(10_000.0), 2);
        assert_eq!(s.speed_level_for(35_000.0), 4);
    }

    #[test]
    fn test_boosted_speed() {
        let mut s = state();
        s.speed_level = 2;
        assert_eq!(s.current_speed(), 385.0);
        s.player.apply_speed_boost(100.0);
        assert!((s.current_speed() - 385.0 * 1.35).abs() < 1e-3);
    }

    #[test]
    fn test_game_over_only_raises_high_score() {
        let mut s = GameState::new(Layout::default(), Tuning::default(), 500.0, 1);
        s.start_game();
        s.score = 200.0;
        let event = s.game_over(ObstacleKind::Boss);
        assert_eq!(s.phase, GamePhase::GameOver);
        assert_eq!(s.high_score, 500.0);
        assert!(matches!(event, SimEvent::GameOver { new_high_score: false, .. }));

        s.start_game();
        s.score = 800.0;
        let event = s.game_over(ObstacleKind::FileStack);
        assert_eq!(s.high_score, 800.0);
        assert!(matches!(event, SimEvent::GameOver { new_high_score: true, .. }));
    }

    #[test]
    fn test_sanitize_score() {
        assert_eq!(sanitize_score(f64::NAN), 0.0);
        assert_eq!(sanitize_score(-3.0), 0.0);
        assert_eq!(sanitize_score(f64::INFINITY), 0.0);
        assert_eq!(sanitize_score(12.5), 12.5);
    }
}
