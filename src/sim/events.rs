//! Simulation events
//!
//! Emitted by `tick` so the frame driver can forward side effects (storage,
//! ads, audio) without the simulation knowing about any of them.

use serde::{Deserialize, Serialize};

use super::obstacle::ObstacleKind;
use super::powerup::PowerUpKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// A new run began (from Start or GameOver)
    SessionStarted,

    /// Runner picked up a power-up
    PowerUpCollected { kind: PowerUpKind },

    /// Runner hit an obstacle while invincible and kept going
    HitAbsorbed { obstacle_id: u32 },

    /// Run ended
    GameOver {
        obstacle: ObstacleKind,
        score: f64,
        /// True when `score` replaced the previous best
        new_high_score: bool,
    },
}
