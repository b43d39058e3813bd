//! Axis-aligned rectangles and viewport layout
//!
//! Screen space: x grows right, y grows down. Entities scroll toward +y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

/// Inward margins applied to a rectangle before overlap testing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    /// Trimmed from both the left and right edges
    pub horizontal: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const ZERO: Insets = Insets {
        horizontal: 0.0,
        top: 0.0,
        bottom: 0.0,
    };
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Shrink the rectangle by the given margins
    ///
    /// Margins larger than the rectangle collapse it to zero size.
    pub fn inset(&self, insets: Insets) -> Rect {
        let width = (self.size.x - 2.0 * insets.horizontal).max(0.0);
        let height = (self.size.y - insets.top - insets.bottom).max(0.0);
        Rect::new(
            self.pos.x + insets.horizontal,
            self.pos.y + insets.top,
            width,
            height,
        )
    }

    /// Strict overlap: touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Overlap after shrinking `other` by a tolerance margin
    ///
    /// Near misses inside the margin are forgiven.
    pub fn overlaps_with_margin(&self, other: &Rect, margin: Insets) -> bool {
        self.overlaps(&other.inset(margin))
    }

    /// Inclusive point containment (used for button hit tests)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

/// One of the three road lanes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lane {
    Left,
    #[default]
    Center,
    Right,
}

impl Lane {
    pub const ALL: [Lane; LANE_COUNT] = [Lane::Left, Lane::Center, Lane::Right];

    /// Lane index (0 = left)
    pub fn index(self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Center => 1,
            Lane::Right => 2,
        }
    }

    /// Lane for an index, clamped into range
    pub fn from_index(index: i32) -> Lane {
        Lane::ALL[crate::clamp(index, 0, LANE_COUNT as i32 - 1) as usize]
    }

    /// Neighbour to the left (stays put at the edge)
    pub fn left(self) -> Lane {
        Lane::from_index(self.index() as i32 - 1)
    }

    /// Neighbour to the right (stays put at the edge)
    pub fn right(self) -> Lane {
        Lane::from_index(self.index() as i32 + 1)
    }
}

/// A vertical strip of the screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub x: f32,
    pub width: f32,
}

/// Screen layout derived from the viewport size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    /// Baseline the player runs on
    pub ground_y: f32,
    /// x of each lane's center line
    pub lane_centers: [f32; LANE_COUNT],
    pub left_zone: Zone,
    pub road_zone: Zone,
    pub right_zone: Zone,
}

impl Layout {
    pub fn new(width: f32, height: f32) -> Self {
        let side = width * SIDE_ZONE_FRACTION;
        Self {
            width,
            height,
            ground_y: height - GROUND_OFFSET,
            lane_centers: LANE_CENTER_FRACTIONS.map(|f| width * f),
            left_zone: Zone { x: 0.0, width: side },
            road_zone: Zone {
                x: side,
                width: width - 2.0 * side,
            },
            right_zone: Zone {
                x: width - side,
                width: side,
            },
        }
    }

    #[inline]
    pub fn lane_center(&self, lane: Lane) -> f32 {
        self.lane_centers[lane.index()]
    }

    /// Entities below this line have left the play area
    pub fn retire_line(&self) -> f32 {
        self.ground_y + OFFSCREEN_SLACK
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}
