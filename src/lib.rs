//! # Pinlet
//!
//! A location picker overlay for egui map widgets.
//!
//! The overlay wraps any [`map::MapSurface`], keeps a pin fixed above the
//! map's visual center and reports the center coordinate to the host each
//! time a pan gesture comes to rest. The pin lifts while the map is being
//! dragged and drops back with a squash-and-stretch bounce.

pub mod animation;
pub mod core;
pub mod input;
pub mod map;
pub mod prelude;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    config::{PickerOptions, PinAppearance},
    geo::{LatLng, LatLngBounds},
};

pub use input::{
    events::MapEvent,
    haptics::{HapticFeedback, HapticKind, LogHaptics},
};

pub use map::{MapCallbacks, MapOptions, MapOutput, MapSurface};

pub use ui::{
    controller::PickerController,
    picker::{CustomIndicator, IndicatorLayer, LocationPicker},
    pin::{PinIndicator, PinSignal, PinState},
};

pub use animation::{controller::AnimationController, tweening::Tween};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, PickerError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    #[error("Invalid appearance: {0}")]
    InvalidAppearance(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Error = PickerError;
