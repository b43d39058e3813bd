//! Shared spawn timing for the entity systems

use serde::{Deserialize, Serialize};

/// Accumulates frame time and fires once the current gap is reached
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnClock {
    /// Time since the last spawn (ms)
    pub timer_ms: f32,
    /// Gap that must elapse before the next spawn (ms)
    pub next_gap_ms: f32,
}

impl SpawnClock {
    pub fn new(initial_gap_ms: f32) -> Self {
        Self {
            timer_ms: 0.0,
            next_gap_ms: initial_gap_ms,
        }
    }

    /// Add `dt_ms`; returns true (and rewinds the timer) when a spawn is due.
    /// The caller must then draw a fresh gap with [`SpawnClock::set_gap`].
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        self.timer_ms += dt_ms;
        if self.timer_ms >= self.next_gap_ms {
            self.timer_ms = 0.0;
            true
        } else {
            false
        }
    }

    pub fn set_gap(&mut self, gap_ms: f32) {
        self.next_gap_ms = gap_ms;
    }
}
