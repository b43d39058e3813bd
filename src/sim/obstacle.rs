//! Obstacles on the commute
//!
//! - File stack: low, jump over it
//! - Boss: tall, only a lane change gets you past
//! - Coworker: chest height, slide under

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{Insets, Lane, Layout, Rect};
use super::spawn::SpawnClock;
use crate::consts::*;
use crate::random_int;
use crate::tuning::ObstacleCadence;

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    FileStack,
    Boss,
    Coworker,
}

/// Per-kind footprint and collision forgiveness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleGeometry {
    pub width: f32,
    pub height: f32,
    /// Trimmed off the visual bounds before overlap testing
    pub hitbox_inset: Insets,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::FileStack,
        ObstacleKind::Boss,
        ObstacleKind::Coworker,
    ];

    pub fn geometry(self) -> ObstacleGeometry {
        match self {
            ObstacleKind::FileStack => ObstacleGeometry {
                width: 60.0,
                height: 56.0,
                hitbox_inset: Insets {
                    horizontal: 6.0,
                    top: 6.0,
                    bottom: 4.0,
                },
            },
            ObstacleKind::Boss => ObstacleGeometry {
                width: 70.0,
                height: 110.0,
                hitbox_inset: Insets {
                    horizontal: 8.0,
                    top: 8.0,
                    bottom: 4.0,
                },
            },
            ObstacleKind::Coworker => ObstacleGeometry {
                width: 72.0,
                height: 64.0,
                hitbox_inset: Insets {
                    horizontal: 7.0,
                    top: 4.0,
                    bottom: 6.0,
                },
            },
        }
    }
}

/// An obstacle entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    kind: ObstacleKind,
    pub lane: Lane,
    pub rect: Rect,
}

impl Obstacle {
    /// Create an obstacle centered on `lane`, top edge at `y`
    pub fn new(id: u32, kind: ObstacleKind, lane: Lane, y: f32, layout: &Layout) -> Self {
        let geo = kind.geometry();
        let x = layout.lane_center(lane) - geo.width / 2.0;
        Self {
            id,
            kind,
            lane,
            rect: Rect::new(x, y, geo.width, geo.height),
        }
    }

    /// Kind is fixed at creation
    #[inline]
    pub fn kind(&self) -> ObstacleKind {
        self.kind
    }

    /// Collision box after the per-kind inset
    pub fn hitbox(&self) -> Rect {
        self.rect.inset(self.kind.geometry().hitbox_inset)
    }
}

/// Spawns, scrolls and retires obstacles
#[derive(Debug, Clone)]
pub struct ObstacleSystem {
    obstacles: Vec<Obstacle>,
    clock: SpawnClock,
    cadence: ObstacleCadence,
    layout: Layout,
    next_id: u32,
}

impl ObstacleSystem {
    pub fn new(layout: Layout, cadence: ObstacleCadence) -> Self {
        Self {
            obstacles: Vec::new(),
            clock: SpawnClock::new(cadence.initial_gap_ms),
            cadence,
            layout,
            next_id: 1,
        }
    }

    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.clock = SpawnClock::new(self.cadence.initial_gap_ms);
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Gap before the next spawn, tightening as `speed_level` rises
    pub fn draw_gap(&self, speed_level: u32, rng: &mut Pcg32) -> f32 {
        let jitter = rng.random::<f32>() * self.cadence.jitter_ms;
        let gap = self.cadence.base_gap_ms
            - speed_level as f32 * self.cadence.per_level_reduction_ms
            + jitter;
        gap.max(self.cadence.min_gap_ms)
    }

    /// Advance spawning by `dt_ms` and scroll everything by `distance` px
    pub fn update(&mut self, dt_ms: f32, distance: f32, speed_level: u32, rng: &mut Pcg32) {
        if self.clock.advance(dt_ms) {
            let gap = self.draw_gap(speed_level, rng);
            self.clock.set_gap(gap);
            self.spawn_random(rng);
        }

        for obstacle in &mut self.obstacles {
            obstacle.rect.pos.y += distance;
        }

        let retire_line = self.layout.retire_line();
        self.obstacles.retain(|o| o.rect.top() <= retire_line);
    }

    fn spawn_random(&mut self, rng: &mut Pcg32) {
        let kind = ObstacleKind::ALL[random_int(rng, 0, ObstacleKind::ALL.len() as i32 - 1) as usize];
        let lane = Lane::from_index(random_int(rng, 0, LANE_COUNT as i32 - 1));
        let y = -kind.geometry().height - OBSTACLE_SPAWN_MARGIN;
        self.spawn_at(kind, lane, y);
    }

    /// Place an obstacle with its top edge at `y`; returns its id
    pub fn spawn_at(&mut self, kind: ObstacleKind, lane: Lane, y: f32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        log::debug!("Spawn obstacle #{} {:?} in {:?} lane", id, kind, lane);
        self.obstacles
            .push(Obstacle::new(id, kind, lane, y, &self.layout));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn system() -> ObstacleSystem {
        ObstacleSystem::new(Layout::default(), ObstacleCadence::default())
    }

    #[test]
    fn test_spawns_after_initial_gap() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut sys = system();
        sys.update(1199.0, 0.0, 1, &mut rng);
        assert!(sys.obstacles().is_empty());
        sys.update(1.0, 0.0, 1, &mut rng);
        assert_eq!(sys.obstacles().len(), 1);

        let o = &sys.obstacles()[0];
        let geo = o.kind().geometry();
        assert_eq!(o.rect.top(), -geo.height - OBSTACLE_SPAWN_MARGIN);
        assert_eq!(o.rect.size.x, geo.width);
    }

    #[test]
    fn test_gap_floor_and_scaling() {
        let mut rng = Pcg32::seed_from_u64(2);
        let sys = system();
        for _ in 0..100 {
            let low = sys.draw_gap(1, &mut rng);
            assert!((1120.0..1420.0).contains(&low));
            let high = sys.draw_gap(50, &mut rng);
            assert_eq!(high, 650.0);
        }
    }

    #[test]
    fn test_scroll_and_retire_preserves_order() {
        let mut rng = Pcg32::seed_from_u64(3);
        let layout = Layout::default();
        let mut sys = system();
        let far = sys.spawn_at(ObstacleKind::Boss, Lane::Left, layout.retire_line() - 5.0);
        let near = sys.spawn_at(ObstacleKind::FileStack, Lane::Center, 0.0);
        let next = sys.spawn_at(ObstacleKind::Coworker, Lane::Right, -50.0);

        sys.update(0.0, 10.0, 1, &mut rng);
        let ids: Vec<u32> = sys.obstacles().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![near, next]);
        assert!(!ids.contains(&far));
        assert_eq!(sys.obstacles()[0].rect.top(), 10.0);
        assert_eq!(sys.obstacles()[1].rect.top(), -40.0);
    }

    #[test]
    fn test_obstacle_centered_in_lane() {
        let layout = Layout::default();
        let o = Obstacle::new(1, ObstacleKind::Coworker, Lane::Right, 0.0, &layout);
        let center = o.rect.left() + o.rect.size.x / 2.0;
        assert!((center - layout.lane_centers[2]).abs() < 1e-3);
        assert!(o.hitbox().size.x < o.rect.size.x);
    }

    #[test]
    fn test_reset_restores_initial_gap() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut sys = system();
        sys.update(1300.0, 0.0, 1, &mut rng);
        assert_eq!(sys.obstacles().len(), 1);
        sys.reset();
        assert!(sys.obstacles().is_empty());
        sys.update(1199.0, 0.0, 1, &mut rng);
        assert!(sys.obstacles().is_empty());
    }
}
