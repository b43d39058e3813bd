//! Data-driven game balance
//!
//! Every knob that shapes difficulty lives here so a balance pass can be done
//! from a JSON file without touching the simulation. Missing fields fall back
//! to the shipped defaults.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors raised while loading a tuning table
#[derive(Debug, Error)]
pub enum TuningError {
    /// Tuning file could not be read
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    /// Tuning JSON was malformed
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of its allowed range
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Randomized spawn cadence for one spawner system (all values in ms)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnCadence {
    /// Gap before the first spawn after a reset
    pub initial_gap_ms: f32,
    /// Base gap between spawns
    pub base_gap_ms: f32,
    /// Upper bound of the uniform jitter added to the base gap
    pub jitter_ms: f32,
}

impl SpawnCadence {
    pub const POWERUPS: SpawnCadence = SpawnCadence {
        initial_gap_ms: 5000.0,
        base_gap_ms: 4500.0,
        jitter_ms: 3000.0,
    };

    pub const LANDMARKS: SpawnCadence = SpawnCadence {
        initial_gap_ms: 2200.0,
        base_gap_ms: 1800.0,
        jitter_ms: 1600.0,
    };

    fn patched(self, patch: CadencePatch) -> Self {
        Self {
            initial_gap_ms: patch.initial_gap_ms.unwrap_or(self.initial_gap_ms),
            base_gap_ms: patch.base_gap_ms.unwrap_or(self.base_gap_ms),
            jitter_ms: patch.jitter_ms.unwrap_or(self.jitter_ms),
        }
    }
}

/// A cadence as written in JSON; absent fields keep the system's own default
#[derive(Deserialize)]
struct CadencePatch {
    initial_gap_ms: Option<f32>,
    base_gap_ms: Option<f32>,
    jitter_ms: Option<f32>,
}

fn powerup_cadence<'de, D: Deserializer<'de>>(de: D) -> Result<SpawnCadence, D::Error> {
    CadencePatch::deserialize(de).map(|patch| SpawnCadence::POWERUPS.patched(patch))
}

fn landmark_cadence<'de, D: Deserializer<'de>>(de: D) -> Result<SpawnCadence, D::Error> {
    CadencePatch::deserialize(de).map(|patch| SpawnCadence::LANDMARKS.patched(patch))
}

/// Obstacle cadence additionally tightens with the speed level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleCadence {
    pub initial_gap_ms: f32,
    pub base_gap_ms: f32,
    pub jitter_ms: f32,
    /// Gap shrinks by this much per speed level
    pub per_level_reduction_ms: f32,
    /// Gap never drops below this
    pub min_gap_ms: f32,
}

impl Default for ObstacleCadence {
    fn default() -> Self {
        Self {
            initial_gap_ms: 1200.0,
            base_gap_ms: 1200.0,
            jitter_ms: 300.0,
            per_level_reduction_ms: 80.0,
            min_gap_ms: 650.0,
        }
    }
}

/// Complete balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Road speed at level 1 (px/s)
    pub base_speed: f32,
    /// Extra road speed per level above 1 (px/s)
    pub speed_per_level: f32,
    /// Elapsed play time per speed level (ms)
    pub speed_increase_interval_ms: f64,
    /// Road speed multiplier while the coffee boost is active
    pub boost_factor: f32,
    /// Score awarded per pixel travelled
    pub score_per_px: f64,
    /// Upper bound on a single simulation step (ms)
    pub max_frame_dt_ms: f32,

    /// Coffee speed boost duration (ms)
    pub coffee_boost_ms: f32,
    /// Metro card invincibility duration (ms)
    pub metro_card_invincible_ms: f32,

    /// Landmarks scroll at `landmark_base_speed + speed * landmark_speed_ratio`
    pub landmark_base_speed: f32,
    pub landmark_speed_ratio: f32,

    pub obstacles: ObstacleCadence,
    #[serde(deserialize_with = "powerup_cadence")]
    pub powerups: SpawnCadence,
    #[serde(deserialize_with = "landmark_cadence")]
    pub landmarks: SpawnCadence,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_speed: 340.0,
            speed_per_level: 45.0,
            speed_increase_interval_ms: 10_000.0,
            boost_factor: 1.35,
            score_per_px: 0.12,
            max_frame_dt_ms: 60.0,

            coffee_boost_ms: 3500.0,
            metro_card_invincible_ms: 4000.0,

            landmark_base_speed: 110.0,
            landmark_speed_ratio: 0.22,

            obstacles: ObstacleCadence::default(),
            powerups: SpawnCadence::POWERUPS,
            landmarks: SpawnCadence::LANDMARKS,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning table from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a tuning table from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject tables that would stall or break the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f64) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                })
            }
        }

        fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must not be negative",
                })
            }
        }

        positive("base_speed", self.base_speed as f64)?;
        positive("speed_increase_interval_ms", self.speed_increase_interval_ms)?;
        positive("boost_factor", self.boost_factor as f64)?;
        positive("max_frame_dt_ms", self.max_frame_dt_ms as f64)?;

        // A drawn gap is at least its base (or floor), so these keep every gap > 0
        let obstacles = &self.obstacles;
        non_negative("obstacles.initial_gap_ms", obstacles.initial_gap_ms)?;
        positive("obstacles.base_gap_ms", obstacles.base_gap_ms as f64)?;
        non_negative("obstacles.jitter_ms", obstacles.jitter_ms)?;
        non_negative(
            "obstacles.per_level_reduction_ms",
            obstacles.per_level_reduction_ms,
        )?;
        positive("obstacles.min_gap_ms", obstacles.min_gap_ms as f64)?;

        non_negative("powerups.initial_gap_ms", self.powerups.initial_gap_ms)?;
        positive("powerups.base_gap_ms", self.powerups.base_gap_ms as f64)?;
        non_negative("powerups.jitter_ms", self.powerups.jitter_ms)?;

        non_negative("landmarks.initial_gap_ms", self.landmarks.initial_gap_ms)?;
        positive("landmarks.base_gap_ms", self.landmarks.base_gap_ms as f64)?;
        non_negative("landmarks.jitter_ms", self.landmarks.jitter_ms)?;

        if self.speed_per_level < 0.0 || self.score_per_px < 0.0 {
            return Err(TuningError::Invalid {
                field: "speed_per_level/score_per_px",
                reason: "must not be negative",
            });
        }
        Ok(())
    }

    /// Road speed (px/s) for a speed level, before any boost
    pub fn level_speed(&self, speed_level: u32) -> f32 {
        self.base_speed + speed_level.saturating_sub(1) as f32 * self.speed_per_level
    }
}
