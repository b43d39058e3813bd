//! Platform abstraction layer
//!
//! Adapters between the simulation and the device:
//! - Touch gestures into discrete game triggers
//! - Ad banner notifications

pub mod ads;
pub mod input;

pub use ads::{AdService, BannerPlacement, LogAds};
pub use input::{Gesture, SwipeDecoder};
