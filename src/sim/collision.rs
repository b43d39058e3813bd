//! Collision resolution between the runner and the road entities
//!
//! Lane equality is checked first; geometry is only tested for entities in
//! the runner's lane. An overlap is not automatically a hit: file stacks are
//! cleared by jumping and coworkers by sliding. Bosses have no exemption.

use super::geometry::Insets;
use super::obstacle::{Obstacle, ObstacleKind};
use super::player::Player;
use super::powerup::{PowerUp, PowerUpSystem};

/// Whether the runner's current stance gets past this obstacle kind
pub fn is_exempt(kind: ObstacleKind, player: &Player) -> bool {
    match kind {
        ObstacleKind::FileStack => player.is_jumping(),
        ObstacleKind::Coworker => player.is_sliding(),
        ObstacleKind::Boss => false,
    }
}

/// Does the runner overlap this obstacle's forgiving hitbox?
pub fn overlaps_obstacle(player: &Player, obstacle: &Obstacle) -> bool {
    let margin = obstacle.kind().geometry().hitbox_inset;
    player
        .hitbox()
        .overlaps_with_margin(&obstacle.rect, margin)
}

/// First obstacle the runner actually runs into this frame, if any
///
/// Invincibility is not considered here; the caller decides whether the hit
/// is fatal.
pub fn find_obstacle_hit<'a>(player: &Player, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    obstacles
        .iter()
        .filter(|o| o.lane == player.lane)
        .find(|o| overlaps_obstacle(player, o) && !is_exempt(o.kind(), player))
}

/// Remove and return at most one power-up the runner touches this frame
///
/// Scans newest first, so when two overlap the most recent spawn wins.
pub fn collect_powerup(player: &Player, system: &mut PowerUpSystem) -> Option<PowerUp> {
    let hitbox = player.hitbox();
    let index = system
        .powerups()
        .iter()
        .rposition(|p| p.lane == player.lane && hitbox.overlaps_with_margin(&p.rect, Insets::ZERO))?;
    Some(system.take(index))
}
