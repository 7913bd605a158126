//! Configuration for the picker overlay and its pin indicator
//!
//! Both structs are plain serde values so hosts can build them in code
//! through the builder methods on the widgets, or load them from JSON.

use crate::core::constants::{
    DEFAULT_PIN_DIAMETER, DEFAULT_PIN_OFFSET, DEFAULT_SHADOW_DISTANCE,
    DEFAULT_SHADOW_DURATION_MS, DEFAULT_STEM_CORNER_RADIUS, DEFAULT_STEM_HEIGHT,
};
use crate::ui::pin::PinState;
use crate::{PickerError, Result};
use egui::Color32;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Visual parameters of the built-in pin indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinAppearance {
    /// Fill of the pin head (and of the stem unless `stem_color` is set)
    pub main_color: Color32,
    /// Fill of the small concentric dot
    pub inner_color: Color32,
    pub diameter: f32,
    pub stem_height: f32,
    pub stem_color: Option<Color32>,
    pub stem_corner_radius: Option<f32>,
    pub shadow_color: Color32,
    /// Shadow travel when fully lifted
    pub shadow_distance: f32,
    /// Simple-mode shadow transition length
    pub shadow_duration_ms: u64,
}

impl Default for PinAppearance {
    fn default() -> Self {
        Self {
            main_color: Color32::from_rgb(229, 57, 53),
            inner_color: Color32::WHITE,
            diameter: DEFAULT_PIN_DIAMETER,
            stem_height: DEFAULT_STEM_HEIGHT,
            stem_color: None,
            stem_corner_radius: None,
            shadow_color: Color32::BLACK,
            shadow_distance: DEFAULT_SHADOW_DISTANCE,
            shadow_duration_ms: DEFAULT_SHADOW_DURATION_MS,
        }
    }
}

impl PinAppearance {
    pub fn resolved_stem_color(&self) -> Color32 {
        self.stem_color.unwrap_or(self.main_color)
    }

    pub fn resolved_stem_corner_radius(&self) -> f32 {
        self.stem_corner_radius.unwrap_or(DEFAULT_STEM_CORNER_RADIUS)
    }

    pub fn shadow_duration(&self) -> Duration {
        Duration::from_millis(self.shadow_duration_ms)
    }

    /// Total height of head plus stem
    pub fn pin_height(&self) -> f32 {
        self.diameter + self.stem_height
    }

    pub fn validate(&self) -> Result<()> {
        if !self.diameter.is_finite() || self.diameter <= 0.0 {
            return Err(PickerError::InvalidAppearance(format!(
                "diameter must be positive, got {}",
                self.diameter
            )));
        }
        if !self.stem_height.is_finite() || self.stem_height < 0.0 {
            return Err(PickerError::InvalidAppearance(format!(
                "stem height must not be negative, got {}",
                self.stem_height
            )));
        }
        if !self.shadow_distance.is_finite() || self.shadow_distance < 0.0 {
            return Err(PickerError::InvalidAppearance(format!(
                "shadow distance must not be negative, got {}",
                self.shadow_distance
            )));
        }
        if let Some(radius) = self.stem_corner_radius {
            if !radius.is_finite() || radius < 0.0 {
                return Err(PickerError::InvalidAppearance(format!(
                    "stem corner radius must not be negative, got {}",
                    radius
                )));
            }
        }
        Ok(())
    }
}

/// Host-facing options of the location picker overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerOptions {
    /// Initial (and externally controlled) picking mode
    pub enabled: bool,
    /// Upward pixel offset of the indicator from the map center
    pub pin_offset: f32,
    pub use_haptic_feedback: bool,
    /// Explicit pin state; takes precedence over the panning flag
    pub pin_state: Option<PinState>,
    pub appearance: PinAppearance,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            pin_offset: DEFAULT_PIN_OFFSET,
            use_haptic_feedback: true,
            pin_state: None,
            appearance: PinAppearance::default(),
        }
    }
}

impl PickerOptions {
    /// Parse options from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let options: PickerOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.pin_offset.is_finite() {
            return Err(PickerError::InvalidAppearance(format!(
                "pin offset must be finite, got {}",
                self.pin_offset
            )));
        }
        self.appearance.validate()
    }
}
