//! Screen layout for menus and the HUD
//!
//! Drawing belongs to the renderer; this module only knows where the buttons
//! are and what the HUD says.

use glam::Vec2;

use crate::sim::{ActiveEffect, GamePhase, Layout, Rect, Snapshot};

const BUTTON_WIDTH: f32 = 240.0;
const BUTTON_HEIGHT: f32 = 82.0;

pub fn start_button_rect(layout: &Layout) -> Rect {
    Rect::new(
        layout.width / 2.0 - BUTTON_WIDTH / 2.0,
        (layout.height * 0.66).floor(),
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    )
}

pub fn restart_button_rect(layout: &Layout) -> Rect {
    Rect::new(
        layout.width / 2.0 - BUTTON_WIDTH / 2.0,
        (layout.height * 0.7).floor(),
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    )
}

/// The button shown in this phase, if any
pub fn active_button(phase: GamePhase, layout: &Layout) -> Option<Rect> {
    match phase {
        GamePhase::Start => Some(start_button_rect(layout)),
        GamePhase::GameOver => Some(restart_button_rect(layout)),
        GamePhase::Playing => None,
    }
}

/// Does a tap at `point` press the start/restart button?
pub fn is_start_tap(phase: GamePhase, layout: &Layout, point: Vec2) -> bool {
    active_button(phase, layout).is_some_and(|button| button.contains(point))
}

pub fn effect_label(effect: ActiveEffect) -> &'static str {
    match effect {
        ActiveEffect::SpeedBoost => "Coffee rush",
        ActiveEffect::Invincible => "Metro card shield",
    }
}

/// HUD text: score, best, level, then one line per active effect
pub fn hud_lines(snapshot: &Snapshot<'_>) -> Vec<String> {
    let mut lines = vec![
        format!("Score: {}", snapshot.score.floor()),
        format!("Best: {}", snapshot.high_score.floor()),
        format!("Level: {}", snapshot.speed_level),
    ];
    lines.extend(
        snapshot
            .effects
            .iter()
            .map(|e| effect_label(*e).to_string()),
    );
    lines
}
