//! The runner: lane position, jump/slide stance and power-up timers
//!
//! Vertical position is never stored. It is a pure function of the jump
//! timer, so a given timer value always yields the same pose.

use serde::{Deserialize, Serialize};

use super::geometry::{Lane, Layout, Rect};
use crate::consts::*;

/// What the runner's body is doing. Jumping and sliding exclude each other
/// by construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Stance {
    #[default]
    Running,
    /// Airborne, `remaining_ms` until landing
    Jumping { remaining_ms: f32 },
    /// Ducked, `remaining_ms` until standing up
    Sliding { remaining_ms: f32 },
}

/// Timed power-up effects currently on the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveEffect {
    SpeedBoost,
    Invincible,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub lane: Lane,
    pub stance: Stance,
    /// Remaining coffee boost (ms, never negative)
    speed_boost_ms: f32,
    /// Remaining metro card invincibility (ms, never negative)
    invincible_ms: f32,
    lane_centers: [f32; LANE_COUNT],
    base_y: f32,
}

impl Player {
    pub fn new(layout: &Layout) -> Self {
        Self {
            lane: Lane::Center,
            stance: Stance::Running,
            speed_boost_ms: 0.0,
            invincible_ms: 0.0,
            lane_centers: layout.lane_centers,
            base_y: layout.ground_y,
        }
    }

    /// Back to the center lane, standing, with no effects
    pub fn reset(&mut self) {
        self.lane = Lane::Center;
        self.stance = Stance::Running;
        self.speed_boost_ms = 0.0;
        self.invincible_ms = 0.0;
    }

    pub fn move_left(&mut self) {
        self.lane = self.lane.left();
    }

    pub fn move_right(&mut self) {
        self.lane = self.lane.right();
    }

    /// Start a jump unless already jumping or sliding
    pub fn jump(&mut self) {
        if self.stance == Stance::Running {
            self.stance = Stance::Jumping {
                remaining_ms: JUMP_DURATION_MS,
            };
        }
    }

    /// Start a slide unless already sliding or jumping
    pub fn slide(&mut self) {
        if self.stance == Stance::Running {
            self.stance = Stance::Sliding {
                remaining_ms: SLIDE_DURATION_MS,
            };
        }
    }

    /// Extend (never shorten) the speed boost
    pub fn apply_speed_boost(&mut self, duration_ms: f32) {
        self.speed_boost_ms = self.speed_boost_ms.max(duration_ms);
    }

    /// Extend (never shorten) invincibility
    pub fn apply_invincible(&mut self, duration_ms: f32) {
        self.invincible_ms = self.invincible_ms.max(duration_ms);
    }

    /// Advance all timers by `dt_ms`
    pub fn update(&mut self, dt_ms: f32) {
        self.stance = match self.stance {
            Stance::Jumping { remaining_ms } if remaining_ms - dt_ms > 0.0 => Stance::Jumping {
                remaining_ms: remaining_ms - dt_ms,
            },
            Stance::Sliding { remaining_ms } if remaining_ms - dt_ms > 0.0 => Stance::Sliding {
                remaining_ms: remaining_ms - dt_ms,
            },
            _ => Stance::Running,
        };

        self.speed_boost_ms = (self.speed_boost_ms - dt_ms).max(0.0);
        self.invincible_ms = (self.invincible_ms - dt_ms).max(0.0);
    }

    #[inline]
    pub fn is_jumping(&self) -> bool {
        matches!(self.stance, Stance::Jumping { .. })
    }

    #[inline]
    pub fn is_sliding(&self) -> bool {
        matches!(self.stance, Stance::Sliding { .. })
    }

    #[inline]
    pub fn has_speed_boost(&self) -> bool {
        self.speed_boost_ms > 0.0
    }

    #[inline]
    pub fn is_invincible(&self) -> bool {
        self.invincible_ms > 0.0
    }

    pub fn speed_boost_remaining_ms(&self) -> f32 {
        self.speed_boost_ms
    }

    pub fn invincible_remaining_ms(&self) -> f32 {
        self.invincible_ms
    }

    /// Effects in HUD order
    pub fn active_effects(&self) -> Vec<ActiveEffect> {
        let mut effects = Vec::with_capacity(2);
        if self.has_speed_boost() {
            effects.push(ActiveEffect::SpeedBoost);
        }
        if self.is_invincible() {
            effects.push(ActiveEffect::Invincible);
        }
        effects
    }

    /// Left edge of the sprite
    pub fn x(&self) -> f32 {
        self.lane_centers[self.lane.index()] - PLAYER_WIDTH / 2.0
    }

    /// Top edge of the sprite (parabolic arc while jumping)
    pub fn y(&self) -> f32 {
        match self.stance {
            Stance::Jumping { remaining_ms } => {
                let t = 1.0 - remaining_ms / JUMP_DURATION_MS;
                self.base_y - JUMP_HEIGHT * 4.0 * t * (1.0 - t)
            }
            _ => self.base_y,
        }
    }

    /// Visual bounds of the sprite
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x(), self.y(), PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Collision box: the torso, lowered and shortened while sliding
    pub fn hitbox(&self) -> Rect {
        let (body_height, y_offset) = if self.is_sliding() {
            let body = PLAYER_HEIGHT * 0.50;
            (body, PLAYER_HEIGHT - body)
        } else {
            (PLAYER_HEIGHT * 0.85, PLAYER_HEIGHT * 0.10)
        };

        Rect::new(
            self.x() + PLAYER_WIDTH * 0.25,
            self.y() + y_offset + PLAYER_HEIGHT * 0.05,
            PLAYER_WIDTH * 0.50,
            body_height * 0.90,
        )
    }
}
