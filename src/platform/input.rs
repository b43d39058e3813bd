//! Swipe decoding for touch screens
//!
//! A touch that travels less than the swipe threshold on both axes is a tap;
//! otherwise the dominant axis picks the direction.

use glam::Vec2;

/// Minimum travel (px) for a touch to count as a swipe
pub const MIN_SWIPE_DISTANCE: f32 = 30.0;

/// A decoded discrete input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Left,
    Right,
    Up,
    Down,
    /// Short touch at a screen point
    Tap(Vec2),
}

#[derive(Debug, Clone, Default)]
pub struct SwipeDecoder {
    start: Option<Vec2>,
}

impl SwipeDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_start(&mut self, point: Vec2) {
        self.start = Some(point);
    }

    /// Finish a touch; `None` if no touch was in progress
    pub fn touch_end(&mut self, point: Vec2) -> Option<Gesture> {
        let start = self.start.take()?;
        Some(classify(start, point))
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

/// Classify a touch from its start and end points
pub fn classify(start: Vec2, end: Vec2) -> Gesture {
    let delta = end - start;
    let abs = delta.abs();

    if abs.x < MIN_SWIPE_DISTANCE && abs.y < MIN_SWIPE_DISTANCE {
        return Gesture::Tap(end);
    }

    if abs.x > abs.y {
        if delta.x > 0.0 { Gesture::Right } else { Gesture::Left }
    } else if delta.y > 0.0 {
        Gesture::Down
    } else {
        Gesture::Up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_touch_is_tap() {
        let g = classify(Vec2::new(100.0, 100.0), Vec2::new(110.0, 95.0));
        assert_eq!(g, Gesture::Tap(Vec2::new(110.0, 95.0)));
    }

    #[test]
    fn test_directions() {
        let o = Vec2::new(200.0, 200.0);
        assert_eq!(classify(o, o + Vec2::new(-80.0, 10.0)), Gesture::Left);
        assert_eq!(classify(o, o + Vec2::new(80.0, -10.0)), Gesture::Right);
        assert_eq!(classify(o, o + Vec2::new(5.0, -60.0)), Gesture::Up);
        assert_eq!(classify(o, o + Vec2::new(5.0, 60.0)), Gesture::Down);
    }

    #[test]
    fn test_diagonal_tie_goes_vertical() {
        let o = Vec2::ZERO;
        assert_eq!(classify(o, Vec2::new(40.0, 40.0)), Gesture::Down);
    }

    #[test]
    fn test_end_without_start() {
        let mut decoder = SwipeDecoder::new();
        assert_eq!(decoder.touch_end(Vec2::ZERO), None);
        decoder.touch_start(Vec2::ZERO);
        assert_eq!(decoder.touch_end(Vec2::new(0.0, -50.0)), Some(Gesture::Up));
        assert_eq!(decoder.touch_end(Vec2::new(0.0, -50.0)), None);
    }

    #[test]
    fn test_cancel_drops_touch() {
        let mut decoder = SwipeDecoder::new();
        decoder.touch_start(Vec2::new(10.0, 10.0));
        decoder.cancel();
        assert_eq!(decoder.touch_end(Vec2::new(90.0, 10.0)), None);
    }
}
