//! Prelude module for common pinlet types and traits
//!
//! Brings the overlay, its controller and the map seam into scope with
//! `use pinlet::prelude::*;`

pub use crate::core::{
    config::{PickerOptions, PinAppearance},
    geo::{LatLng, LatLngBounds},
};

pub use crate::input::{
    events::MapEvent,
    haptics::{HapticFeedback, HapticKind, LogHaptics},
};

pub use crate::map::{MapCallbacks, MapMarker, MapOptions, MapOutput, MapSurface, MapType};

pub use crate::ui::{
    controller::PickerController,
    picker::{CustomIndicator, IndicatorLayer, LocationPicker},
    pin::{PinIndicator, PinMode, PinSignal, PinState},
};

pub use crate::animation::{AnimationController, AnimationStatus, EasingFunction, Tween};

pub use crate::{PickerError, Result};

pub use egui::{Color32, Pos2, Rect, Response, Ui, Vec2};
