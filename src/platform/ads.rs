//! Ad network adapter
//!
//! The game only ever says "show the banner" (run ended) or "hide it" (run
//! started). Both are fire-and-forget.

use crate::sim::Layout;

/// Nominal banner width used for centering
pub const BANNER_WIDTH: f32 = 320.0;
/// Banner sits this far above the bottom edge
pub const BANNER_BOTTOM_OFFSET: f32 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerPlacement {
    pub top: f32,
    pub left: f32,
    pub width: f32,
}

impl BannerPlacement {
    /// Centered near the bottom of the screen
    pub fn for_layout(layout: &Layout) -> Self {
        Self {
            top: layout.height - BANNER_BOTTOM_OFFSET,
            left: ((layout.width - BANNER_WIDTH) / 2.0).max(0.0),
            width: BANNER_WIDTH,
        }
    }
}

pub trait AdService {
    fn show_banner(&mut self, placement: BannerPlacement);
    fn hide_banner(&mut self);
}

/// Stand-in used where no ad SDK exists; just logs the requests
#[derive(Debug, Clone, Default)]
pub struct LogAds {
    visible: bool,
}

impl LogAds {
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl AdService for LogAds {
    fn show_banner(&mut self, placement: BannerPlacement) {
        log::debug!(
            "Banner requested at top={} left={}",
            placement.top,
            placement.left
        );
        self.visible = true;
    }

    fn hide_banner(&mut self) {
        if self.visible {
            log::debug!("Banner hidden");
        }
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_centered() {
        let p = BannerPlacement::for_layout(&Layout::new(400.0, 800.0));
        assert_eq!(p.top, 680.0);
        assert_eq!(p.left, 40.0);
    }

    #[test]
    fn test_placement_never_negative() {
        let p = BannerPlacement::for_layout(&Layout::new(300.0, 600.0));
        assert_eq!(p.left, 0.0);
    }
}
