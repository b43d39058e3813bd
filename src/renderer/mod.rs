//! Rendering seam
//!
//! The simulation never draws. Renderers receive a borrowed [`Snapshot`] once
//! per frame and do whatever their surface needs with it.

pub mod text;

pub use text::TextRenderer;

use crate::sim::Snapshot;

pub trait Renderer {
    fn render(&mut self, frame: &Snapshot<'_>);
}

/// Serializes each frame to JSON for an out-of-process renderer
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    last: String,
}

impl JsonRenderer {
    /// Most recent frame as JSON (empty before the first frame)
    pub fn last_frame(&self) -> &str {
        &self.last
    }
}

impl Renderer for JsonRenderer {
    fn render(&mut self, frame: &Snapshot<'_>) {
        match serde_json::to_string(frame) {
            Ok(json) => self.last = json,
            Err(err) => log::warn!("Failed to encode frame: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, Layout};
    use crate::tuning::Tuning;

    #[test]
    fn test_json_renderer_keeps_last_frame() {
        let mut renderer = JsonRenderer::default();
        assert!(renderer.last_frame().is_empty());

        let mut state = GameState::new(Layout::default(), Tuning::default(), 42.0, 1);
        renderer.render(&state.snapshot());
        let value: serde_json::Value =
            serde_json::from_str(renderer.last_frame()).expect("valid json");
        assert_eq!(value["phase"], "Start");
        assert_eq!(value["high_score"], 42.0);

        state.start_game();
        renderer.render(&state.snapshot());
        assert!(renderer.last_frame().contains("\"Playing\""));
    }
}
