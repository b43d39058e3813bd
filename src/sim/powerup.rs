//! Power-ups
//!
//! - Coffee: temporary speed boost
//! - Metro card: temporary invincibility

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{Lane, Layout, Rect};
use super::spawn::SpawnClock;
use crate::consts::*;
use crate::random_int;
use crate::tuning::SpawnCadence;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    Coffee,
    MetroCard,
}

/// A power-up entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub lane: Lane,
    pub rect: Rect,
}

impl PowerUp {
    pub fn new(id: u32, kind: PowerUpKind, lane: Lane, y: f32, layout: &Layout) -> Self {
        let x = layout.lane_center(lane) - POWERUP_SIZE / 2.0;
        Self {
            id,
            kind,
            lane,
            rect: Rect::new(x, y, POWERUP_SIZE, POWERUP_SIZE),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PowerUpSystem {
    powerups: Vec<PowerUp>,
    clock: SpawnClock,
    cadence: SpawnCadence,
    layout: Layout,
    next_id: u32,
}

impl PowerUpSystem {
    pub fn new(layout: Layout, cadence: SpawnCadence) -> Self {
        Self {
            powerups: Vec::new(),
            clock: SpawnClock::new(cadence.initial_gap_ms),
            cadence,
            layout,
            next_id: 1,
        }
    }

    pub fn reset(&mut self) {
        self.powerups.clear();
        self.clock = SpawnClock::new(self.cadence.initial_gap_ms);
    }

    pub fn powerups(&self) -> &[PowerUp] {
        &self.powerups
    }

    pub fn update(&mut self, dt_ms: f32, distance: f32, rng: &mut Pcg32) {
        if self.clock.advance(dt_ms) {
            let gap = self.cadence.base_gap_ms + rng.random::<f32>() * self.cadence.jitter_ms;
            self.clock.set_gap(gap);

            let lane = Lane::from_index(random_int(rng, 0, LANE_COUNT as i32 - 1));
            let kind = if rng.random_bool(0.5) {
                PowerUpKind::Coffee
            } else {
                PowerUpKind::MetroCard
            };
            self.spawn_at(kind, lane, POWERUP_SPAWN_Y);
        }

        for powerup in &mut self.powerups {
            powerup.rect.pos.y += distance;
        }

        let retire_line = self.layout.retire_line();
        self.powerups.retain(|p| p.rect.top() <= retire_line);
    }

    /// Place a power-up with its top edge at `y`; returns its id
    pub fn spawn_at(&mut self, kind: PowerUpKind, lane: Lane, y: f32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        log::debug!("Spawn power-up #{} {:?} in {:?} lane", id, kind, lane);
        self.powerups.push(PowerUp::new(id, kind, lane, y, &self.layout));
        id
    }

    /// Remove and return the power-up at `index`
    pub(crate) fn take(&mut self, index: usize) -> PowerUp {
        self.powerups.remove(index)
    }
}
