//! City backdrop: scrolling road stripes and roadside landmarks
//!
//! Landmarks drift down the side zones at their own parallax speed and never
//! take part in collisions.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{Layout, Rect};
use super::spawn::SpawnClock;
use crate::consts::*;
use crate::random_int;
use crate::tuning::SpawnCadence;

const LANDMARK_MIN_SIZE: i32 = 42;
const LANDMARK_MAX_SIZE: i32 = 68;
/// Horizontal padding inside a side zone
const ZONE_PADDING: i32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// A decorative landmark (square footprint)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Landmark {
    pub id: u32,
    pub side: Side,
    pub rect: Rect,
    /// Which artwork the renderer should use (0 or 1)
    pub variant: u8,
}

impl Landmark {
    #[inline]
    pub fn size(&self) -> f32 {
        self.rect.size.x
    }
}

#[derive(Debug, Clone)]
pub struct LandmarkSystem {
    landmarks: Vec<Landmark>,
    clock: SpawnClock,
    cadence: SpawnCadence,
    layout: Layout,
    next_id: u32,
}

impl LandmarkSystem {
    pub fn new(layout: Layout, cadence: SpawnCadence) -> Self {
        Self {
            landmarks: Vec::new(),
            clock: SpawnClock::new(cadence.initial_gap_ms),
            cadence,
            layout,
            next_id: 1,
        }
    }

    pub fn reset(&mut self) {
        self.landmarks.clear();
        self.clock = SpawnClock::new(self.cadence.initial_gap_ms);
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn update(&mut self, dt_ms: f32, distance: f32, rng: &mut Pcg32) {
        if self.clock.advance(dt_ms) {
            let gap = self.cadence.base_gap_ms + rng.random::<f32>() * self.cadence.jitter_ms;
            self.clock.set_gap(gap);
            self.spawn(rng);
        }

        for landmark in &mut self.landmarks {
            landmark.rect.pos.y += distance;
        }

        let height = self.layout.height;
        self.landmarks
            .retain(|l| l.rect.top() < height + l.size());
    }

    fn spawn(&mut self, rng: &mut Pcg32) {
        let side = if rng.random_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        };
        let zone = match side {
            Side::Left => self.layout.left_zone,
            Side::Right => self.layout.right_zone,
        };

        let size = random_int(rng, LANDMARK_MIN_SIZE, LANDMARK_MAX_SIZE);
        let max_offset = (zone.width as i32 - size - ZONE_PADDING).max(8);
        let x = zone.x + random_int(rng, ZONE_PADDING, max_offset) as f32;
        let variant = if rng.random_bool(0.5) { 0 } else { 1 };

        let size = size as f32;
        let id = self.next_id;
        self.next_id += 1;
        self.landmarks.push(Landmark {
            id,
            side,
            rect: Rect::new(x, -size, size, size),
            variant,
        });
    }
}

/// Road stripes plus landmarks
#[derive(Debug, Clone)]
pub struct Backdrop {
    /// Stripe scroll phase in `[0, ROAD_STRIPE_PERIOD)`
    pub road_offset: f32,
    pub landmarks: LandmarkSystem,
}

impl Backdrop {
    pub fn new(layout: Layout, cadence: SpawnCadence) -> Self {
        Self {
            road_offset: 0.0,
            landmarks: LandmarkSystem::new(layout, cadence),
        }
    }

    pub fn reset(&mut self) {
        self.road_offset = 0.0;
        self.landmarks.reset();
    }

    /// `road_distance` is this frame's road scroll, `landmark_distance` the
    /// slower parallax scroll of the side zones
    pub fn update(&mut self, dt_ms: f32, road_distance: f32, landmark_distance: f32, rng: &mut Pcg32) {
        self.road_offset =
            (self.road_offset + road_distance * ROAD_STRIPE_PARALLAX) % ROAD_STRIPE_PERIOD;
        self.landmarks.update(dt_ms, landmark_distance, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn cadence() -> SpawnCadence {
        crate::Tuning::default().landmarks
    }

    #[test]
    fn test_landmarks_stay_in_their_zone() {
        let layout = Layout::default();
        let mut rng = Pcg32::seed_from_u64(21);
        let mut sys = LandmarkSystem::new(layout, cadence());
        for _ in 0..200 {
            sys.update(4000.0, 0.0, &mut rng);
        }
        assert!(!sys.landmarks().is_empty());
        for l in sys.landmarks() {
            let zone = match l.side {
                Side::Left => layout.left_zone,
                Side::Right => layout.right_zone,
            };
            assert!(l.rect.left() >= zone.x + ZONE_PADDING as f32);
            assert!((42.0..=68.0).contains(&l.size()));
            assert_eq!(l.rect.top(), -l.size());
            assert!(l.variant <= 1);
        }
    }

    #[test]
    fn test_landmarks_retire_below_screen() {
        let layout = Layout::default();
        let mut rng = Pcg32::seed_from_u64(22);
        let mut sys = LandmarkSystem::new(layout, cadence());
        sys.update(2200.0, 0.0, &mut rng);
        assert_eq!(sys.landmarks().len(), 1);
        sys.update(0.0, layout.height + 200.0, &mut rng);
        assert!(sys.landmarks().is_empty());
    }

    #[test]
    fn test_road_offset_wraps() {
        let mut rng = Pcg32::seed_from_u64(23);
        let mut backdrop = Backdrop::new(Layout::default(), cadence());
        backdrop.update(0.0, 600.0, 0.0, &mut rng);
        assert!((backdrop.road_offset - 480.0).abs() < 1e-3);
        backdrop.update(0.0, 200.0, 0.0, &mut rng);
        assert!((backdrop.road_offset - 80.0).abs() < 1e-3);
        backdrop.reset();
        assert_eq!(backdrop.road_offset, 0.0);
    }
}
