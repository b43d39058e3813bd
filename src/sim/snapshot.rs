//! Read-only view of a frame for renderers
//!
//! Borrowed from `GameState` for the duration of a draw call. Serializable so
//! a browser-side renderer can receive it as JSON.

use serde::Serialize;

use super::geometry::{Lane, Layout, Rect};
use super::landmark::Landmark;
use super::obstacle::Obstacle;
use super::player::ActiveEffect;
use super::powerup::PowerUp;
use super::state::{GamePhase, GameState};

/// Everything a renderer needs to draw the runner
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerPose {
    pub lane: Lane,
    /// Sprite bounds (y follows the jump arc)
    pub bounds: Rect,
    pub hitbox: Rect,
    pub jumping: bool,
    pub sliding: bool,
    pub invincible: bool,
    pub boosted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub layout: &'a Layout,
    pub player: PlayerPose,
    pub obstacles: &'a [Obstacle],
    pub powerups: &'a [PowerUp],
    pub landmarks: &'a [Landmark],
    /// Road stripe scroll phase
    pub road_offset: f32,
    pub score: f64,
    pub high_score: f64,
    pub speed_level: u32,
    pub effects: Vec<ActiveEffect>,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot<'_> {
        let player = &self.player;
        Snapshot {
            phase: self.phase,
            layout: &self.layout,
            player: PlayerPose {
                lane: player.lane,
                bounds: player.bounds(),
                hitbox: player.hitbox(),
                jumping: player.is_jumping(),
                sliding: player.is_sliding(),
                invincible: player.is_invincible(),
                boosted: player.has_speed_boost(),
            },
            obstacles: self.obstacles.obstacles(),
            powerups: self.powerups.powerups(),
            landmarks: self.backdrop.landmarks.landmarks(),
            road_offset: self.backdrop.road_offset,
            score: self.score,
            high_score: self.high_score,
            speed_level: self.speed_level,
            effects: player.active_effects(),
        }
    }
}
