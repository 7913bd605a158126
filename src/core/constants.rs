//! Pin geometry and timing defaults.

/// Diameter of the pin head in pixels.
pub const DEFAULT_PIN_DIAMETER: f32 = 30.0;

/// Height of the stem below the pin head in pixels.
pub const DEFAULT_STEM_HEIGHT: f32 = 20.0;

/// Stem corner radius used when the appearance leaves it unset.
pub const DEFAULT_STEM_CORNER_RADIUS: f32 = 2.0;

/// Inner dot diameter as a fraction of the pin diameter.
pub const INNER_CIRCLE_RATIO: f32 = 0.35;

/// Stem width as a fraction of the pin diameter.
pub const STEM_WIDTH_RATIO: f32 = 0.15;

/// How far the shadow travels away from the stem tip when fully lifted.
pub const DEFAULT_SHADOW_DISTANCE: f32 = 20.0;

/// Simple-mode shadow transition.
pub const DEFAULT_SHADOW_DURATION_MS: u64 = 200;

/// Shadow opacity at full lift.
pub const MAX_SHADOW_OPACITY: f32 = 0.4;

pub const SIMPLE_BOUNCE_DURATION_MS: u64 = 400;
pub const ADVANCED_BOUNCE_DURATION_MS: u64 = 450;
pub const LIFT_DURATION_MS: u64 = 200;

/// Upward offset of the indicator from the map center.
/// Half the default pin height, so the stem tip sits on the center point.
pub const DEFAULT_PIN_OFFSET: f32 = (DEFAULT_PIN_DIAMETER + DEFAULT_STEM_HEIGHT) / 2.0;
