//! Deterministic lane-runner simulation
//!
//! Single-threaded and frame driven: the caller owns a `GameState` and feeds
//! it one `tick` per display refresh.

pub mod collision;
pub mod events;
pub mod geometry;
pub mod landmark;
pub mod obstacle;
pub mod player;
pub mod powerup;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{collect_powerup, find_obstacle_hit, is_exempt};
pub use events::SimEvent;
pub use geometry::{Insets, Lane, Layout, Rect};
pub use landmark::{Backdrop, Landmark, Side};
pub use obstacle::{Obstacle, ObstacleKind};
pub use player::{ActiveEffect, Player, Stance};
pub use powerup::{PowerUp, PowerUpKind};
pub use snapshot::{PlayerPose, Snapshot};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, clamp_frame_dt, tick};
