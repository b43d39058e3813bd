//! Office Rush - A three-lane commute runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, spawners, collisions, game state)
//! - `game`: Frame driver wiring the simulation to its adapters
//! - `autopilot`: Demo bot for headless runs
//! - `renderer`: Renderer trait and a text renderer for headless runs
//! - `platform`: Input decoding and ad-network adapters
//! - `persistence`: High score storage with corrupt-value fallback
//! - `tuning`: Data-driven game balance
//! - `ui`: Screen layout, buttons and HUD labels

pub mod autopilot;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use game::Game;
pub use tuning::Tuning;

use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Number of lanes on the road
    pub const LANE_COUNT: usize = 3;
    /// Lane centers as fractions of the viewport width
    pub const LANE_CENTER_FRACTIONS: [f32; LANE_COUNT] = [0.22, 0.5, 0.78];

    /// Ground baseline sits this far above the bottom of the viewport
    pub const GROUND_OFFSET: f32 = 180.0;
    /// Entities retire once they scroll this far past the ground line
    pub const OFFSCREEN_SLACK: f32 = 260.0;

    /// Side zones (left and right of the road) as fractions of the width
    pub const SIDE_ZONE_FRACTION: f32 = 0.2;

    /// Player sprite footprint
    pub const PLAYER_WIDTH: f32 = 120.0;
    pub const PLAYER_HEIGHT: f32 = 160.0;
    /// Peak height of a jump above the baseline
    pub const JUMP_HEIGHT: f32 = 120.0;
    /// Jump and slide durations (ms)
    pub const JUMP_DURATION_MS: f32 = 520.0;
    pub const SLIDE_DURATION_MS: f32 = 460.0;

    /// Obstacles spawn this far above their own top edge
    pub const OBSTACLE_SPAWN_MARGIN: f32 = 20.0;

    /// Power-up footprint (square)
    pub const POWERUP_SIZE: f32 = 44.0;
    /// Power-ups spawn at this y (above the visible area)
    pub const POWERUP_SPAWN_Y: f32 = -80.0;

    /// Road stripes repeat with this period (pixels)
    pub const ROAD_STRIPE_PERIOD: f32 = 560.0;
    /// Road stripes scroll slower than the road itself
    pub const ROAD_STRIPE_PARALLAX: f32 = 0.8;

    /// Default viewport (portrait phone)
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 390.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 844.0;
}

/// Clamp a value into `[min, max]`
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Uniform random integer in `[min, max]` (inclusive)
///
/// A collapsed or inverted range yields `min`.
#[inline]
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    rng.random_range(min..=max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-1, 0, 2), 0);
        assert_eq!(clamp(3, 0, 2), 2);
        assert_eq!(clamp(1, 0, 2), 1);
        assert_eq!(clamp(0.5_f32, 0.0, 1.0), 0.5);
    }

    #[test]
    fn test_random_int_inclusive_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let v = random_int(&mut rng, 0, 2);
            assert!((0..=2).contains(&v));
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_random_int_collapsed_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(random_int(&mut rng, 8, 8), 8);
        assert_eq!(random_int(&mut rng, 8, 3), 8);
    }
}
