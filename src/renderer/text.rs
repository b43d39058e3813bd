//! Plain-text renderer for terminals and logs
//!
//! Draws the three lanes as columns, top of the screen first:
//! `F` file stack, `B` boss, `C` coworker, `c` coffee, `m` metro card,
//! `@` runner (`^` jumping, `_` sliding). Landmarks show as `#` on the edges.

use crate::consts::LANE_COUNT;
use crate::sim::{GamePhase, ObstacleKind, PowerUpKind, Rect, Side, Snapshot};
use crate::ui;

use super::Renderer;

pub const DEFAULT_ROWS: usize = 16;

#[derive(Debug, Clone)]
pub struct TextRenderer {
    rows: usize,
    frame: String,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS)
    }
}

impl TextRenderer {
    pub fn new(rows: usize) -> Self {
        Self {
            rows: rows.max(2),
            frame: String::new(),
        }
    }

    pub fn frame(&self) -> &str {
        &self.frame
    }

    /// Row for a rect's vertical center, `None` when off screen
    fn row_for(&self, rect: &Rect, height: f32) -> Option<usize> {
        let center = rect.top() + rect.size.y / 2.0;
        if !(0.0..height).contains(&center) {
            return None;
        }
        let row = ((center / height) * self.rows as f32) as usize;
        Some(row.min(self.rows - 1))
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, frame: &Snapshot<'_>) {
        let height = frame.layout.height;
        let mut grid = vec![['.'; LANE_COUNT]; self.rows];
        // Roadside edges: '#' where a landmark passes
        let mut edges = vec![('|', '|'); self.rows];

        for landmark in frame.landmarks {
            if let Some(row) = self.row_for(&landmark.rect, height) {
                match landmark.side {
                    Side::Left => edges[row].0 = '#',
                    Side::Right => edges[row].1 = '#',
                }
            }
        }
        for powerup in frame.powerups {
            if let Some(row) = self.row_for(&powerup.rect, height) {
                grid[row][powerup.lane.index()] = match powerup.kind {
                    PowerUpKind::Coffee => 'c',
                    PowerUpKind::MetroCard => 'm',
                };
            }
        }
        for obstacle in frame.obstacles {
            if let Some(row) = self.row_for(&obstacle.rect, height) {
                grid[row][obstacle.lane.index()] = match obstacle.kind() {
                    ObstacleKind::FileStack => 'F',
                    ObstacleKind::Boss => 'B',
                    ObstacleKind::Coworker => 'C',
                };
            }
        }
        if let Some(row) = self.row_for(&frame.player.hitbox, height) {
            grid[row][frame.player.lane.index()] = if frame.player.jumping {
                '^'
            } else if frame.player.sliding {
                '_'
            } else {
                '@'
            };
        }

        let mut out = String::new();
        for (row, (left, right)) in grid.iter().zip(&edges) {
            out.push(*left);
            for cell in row {
                out.push(' ');
                out.push(*cell);
            }
            out.push(' ');
            out.push(*right);
            out.push('\n');
        }
        out.push_str(&ui::hud_lines(frame).join("  "));
        match frame.phase {
            GamePhase::Start => out.push_str("  [tap START]"),
            GamePhase::GameOver => out.push_str("  [GAME OVER - tap RESTART]"),
            GamePhase::Playing => {}
        }
        self.frame = out;
    }
}
