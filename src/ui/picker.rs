//! Location picker overlay
//!
//! [`LocationPicker`] wraps a [`MapSurface`] and keeps a pin fixed over the
//! map's visual center. While picking is enabled the pin lifts when a pan
//! gesture starts and drops when the camera comes to rest, at which point the
//! host's `on_location_picked` callback receives the map center.
//!
//! ```rust,ignore
//! let controller = PickerController::new();
//! let mut picker = LocationPicker::new(my_map)
//!     .controller(controller.clone())
//!     .enabled(true)
//!     .on_location_picked(|at| log::info!("picked {}", at));
//!
//! // every frame
//! picker.show(ui);
//! ```

use crate::core::config::{PickerOptions, PinAppearance};
use crate::core::geo::LatLng;
use crate::input::events::MapEvent;
use crate::input::haptics::{HapticFeedback, HapticKind, LogHaptics};
use crate::map::{MapCallbacks, MapOptions, MapSurface};
use crate::ui::controller::PickerController;
use crate::ui::pin::{PinIndicator, PinSignal, PinState};
use crate::Result;
use egui::{vec2, Pos2, Rect, Response, Ui, Vec2};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Enabled and panning flags shared between the overlay and its controller
pub(crate) struct PickerState {
    enabled: Cell<bool>,
    panning: Cell<bool>,
    controller: RefCell<Option<PickerController>>,
    repaint: RefCell<Option<egui::Context>>,
}

impl PickerState {
    pub(crate) fn new(enabled: bool) -> Rc<Self> {
        Rc::new(Self {
            enabled: Cell::new(enabled),
            panning: Cell::new(false),
            controller: RefCell::new(None),
            repaint: RefCell::new(None),
        })
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub(crate) fn is_panning(&self) -> bool {
        self.panning.get()
    }

    pub(crate) fn set_panning(&self, panning: bool) {
        self.panning.set(panning);
    }

    pub(crate) fn enable(&self) {
        self.enabled.set(true);
        self.mirror(true);
        log::debug!("location picking enabled");
        self.request_repaint();
    }

    pub(crate) fn disable(&self) {
        self.enabled.set(false);
        self.panning.set(false);
        self.mirror(false);
        log::debug!("location picking disabled");
        self.request_repaint();
    }

    /// Set the initial flag without treating it as a toggle
    fn seed(&self, enabled: bool) {
        self.enabled.set(enabled);
        if !enabled {
            self.panning.set(false);
        }
        self.mirror(enabled);
    }

    /// Replace the bound controller, detaching the previous one
    pub(crate) fn bind_controller(state: &Rc<Self>, controller: Option<PickerController>) {
        let previous = state.controller.replace(controller.clone());
        if let Some(previous) = previous {
            previous.detach_from(state);
        }
        if let Some(controller) = controller {
            controller.attach(state);
        }
    }

    fn mirror(&self, enabled: bool) {
        if let Some(controller) = self.controller.borrow().as_ref() {
            controller.set_enabled(enabled);
        }
    }

    fn set_context(&self, ctx: &egui::Context) {
        let mut repaint = self.repaint.borrow_mut();
        if repaint.is_none() {
            *repaint = Some(ctx.clone());
        }
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.repaint.borrow().as_ref() {
            ctx.request_repaint();
        }
    }
}

/// Host-supplied replacement for the built-in pin
///
/// A custom indicator is drawn as-is; the overlay does not feed it the
/// panning state.
pub trait CustomIndicator {
    /// Draw the indicator centered on `anchor`
    fn show(&mut self, ui: &mut Ui, anchor: Pos2);
}

impl<F> CustomIndicator for F
where
    F: FnMut(&mut Ui, Pos2),
{
    fn show(&mut self, ui: &mut Ui, anchor: Pos2) {
        self(ui, anchor)
    }
}

/// What the overlay draws above the map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorLayer {
    /// Picking is disabled
    Hidden,
    /// The host's own indicator
    Custom,
    /// The built-in pin with its resolved signal
    BuiltIn(PinSignal),
}

/// Map overlay that turns pan gestures into picked locations
pub struct LocationPicker<M: MapSurface> {
    map: M,
    options: PickerOptions,
    state: Rc<PickerState>,
    controller: Option<PickerController>,
    last_center: LatLng,
    map_options: MapOptions,
    applied_map_options: Option<MapOptions>,
    callbacks: MapCallbacks,
    on_location_picked: Option<Box<dyn FnMut(LatLng)>>,
    haptics: Box<dyn HapticFeedback>,
    custom_indicator: Option<Box<dyn CustomIndicator>>,
    indicator: PinIndicator,
    size: Option<Vec2>,
    /// A pan ended since the indicator was last drawn
    pan_ended: bool,
}

impl<M: MapSurface> LocationPicker<M> {
    /// Wrap `map` with default options (picking disabled)
    pub fn new(map: M) -> Self {
        let options = PickerOptions::default();
        let last_center = map.center();
        let mut picker = Self {
            map,
            state: PickerState::new(options.enabled),
            indicator: PinIndicator::new(options.appearance.clone()),
            options,
            controller: None,
            last_center,
            map_options: MapOptions::default(),
            applied_map_options: None,
            callbacks: MapCallbacks::default(),
            on_location_picked: None,
            haptics: Box::new(LogHaptics),
            custom_indicator: None,
            size: None,
            pan_ended: false,
        };
        picker.forward_map_options();
        picker
    }

    /// Wrap `map` with validated options
    pub fn with_options(map: M, options: PickerOptions) -> Result<Self> {
        options.validate()?;
        let enabled = options.enabled;
        let mut picker = Self::new(map);
        picker.indicator.set_appearance(options.appearance.clone());
        picker.options = options;
        picker.state.seed(enabled);
        Ok(picker)
    }

    /// Initial picking mode
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.options.enabled = enabled;
        self.state.seed(enabled);
        self
    }

    /// Attach an external control handle
    pub fn controller(mut self, controller: PickerController) -> Self {
        self.set_controller(Some(controller));
        self
    }

    pub fn on_location_picked(mut self, callback: impl FnMut(LatLng) + 'static) -> Self {
        self.on_location_picked = Some(Box::new(callback));
        self
    }

    /// Replace the built-in pin
    pub fn custom_indicator(mut self, indicator: impl CustomIndicator + 'static) -> Self {
        self.custom_indicator = Some(Box::new(indicator));
        self
    }

    /// Upward offset of the indicator from the map center
    pub fn pin_offset(mut self, offset: f32) -> Self {
        self.options.pin_offset = offset;
        self
    }

    pub fn haptic_feedback(mut self, enabled: bool) -> Self {
        self.options.use_haptic_feedback = enabled;
        self
    }

    /// Where haptic requests go (logged by default)
    pub fn haptics(mut self, haptics: impl HapticFeedback + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    pub fn appearance(mut self, appearance: PinAppearance) -> Self {
        self.indicator.set_appearance(appearance.clone());
        self.options.appearance = appearance;
        self
    }

    /// Drive the pin from an explicit state instead of the panning flag
    pub fn pin_state(mut self, state: PinState) -> Self {
        self.options.pin_state = Some(state);
        self
    }

    /// Fixed size instead of the available space
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }

    /// Pass-through options for the wrapped map
    pub fn map_options(mut self, options: MapOptions) -> Self {
        self.map_options = options;
        self.forward_map_options();
        self
    }

    pub fn on_camera_move_started(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_camera_move_started = Some(Box::new(callback));
        self
    }

    pub fn on_camera_move(mut self, callback: impl FnMut(LatLng) + 'static) -> Self {
        self.callbacks.on_camera_move = Some(Box::new(callback));
        self
    }

    pub fn on_camera_idle(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_camera_idle = Some(Box::new(callback));
        self
    }

    pub fn on_tap(mut self, callback: impl FnMut(LatLng) + 'static) -> Self {
        self.callbacks.on_tap = Some(Box::new(callback));
        self
    }

    pub fn on_long_press(mut self, callback: impl FnMut(LatLng) + 'static) -> Self {
        self.callbacks.on_long_press = Some(Box::new(callback));
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    pub fn is_panning(&self) -> bool {
        self.state.is_panning()
    }

    /// Most recent map center seen by the overlay
    pub fn last_center(&self) -> LatLng {
        self.last_center
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    /// Pass-through options; changes are forwarded on the next frame
    pub fn map_options_mut(&mut self) -> &mut MapOptions {
        &mut self.map_options
    }

    pub fn callbacks_mut(&mut self) -> &mut MapCallbacks {
        &mut self.callbacks
    }

    pub fn indicator(&self) -> &PinIndicator {
        &self.indicator
    }

    /// Enable picking, as the controller would
    pub fn enable(&self) {
        self.state.enable();
    }

    /// Disable picking, as the controller would
    pub fn disable(&self) {
        self.state.disable();
    }

    /// Apply a new externally supplied enabled flag.
    ///
    /// Only an observed change of the flag toggles the overlay, and only when
    /// the live state differs from it, so a controller call and a flag change
    /// in the same update never toggle twice.
    pub fn set_enabled(&mut self, enabled: bool) {
        let previous = std::mem::replace(&mut self.options.enabled, enabled);
        if previous == enabled || self.state.is_enabled() == enabled {
            return;
        }
        if enabled {
            self.state.enable();
        } else {
            self.state.disable();
        }
    }

    /// Reconfigure the overlay in one go
    pub fn set_options(&mut self, options: PickerOptions) -> Result<()> {
        options.validate()?;
        self.set_enabled(options.enabled);
        self.indicator.set_appearance(options.appearance.clone());
        self.options = options;
        Ok(())
    }

    pub fn set_pin_state(&mut self, state: Option<PinState>) {
        self.options.pin_state = state;
    }

    pub fn set_controller(&mut self, controller: Option<PickerController>) {
        PickerState::bind_controller(&self.state, controller.clone());
        self.controller = controller;
    }

    /// Pin input for this frame
    pub fn pin_signal(&self) -> PinSignal {
        PinSignal::from_inputs(self.options.pin_state, self.state.is_panning())
    }

    pub fn indicator_layer(&self) -> IndicatorLayer {
        if !self.state.is_enabled() {
            IndicatorLayer::Hidden
        } else if self.custom_indicator.is_some() {
            IndicatorLayer::Custom
        } else {
            IndicatorLayer::BuiltIn(self.pin_signal())
        }
    }

    /// React to one map notification, then pass it on to the host callbacks
    pub fn handle_map_event(&mut self, event: &MapEvent) {
        match event {
            MapEvent::CameraMoveStarted => self.on_pan_start(),
            MapEvent::CameraMove { center } => self.cache_center(*center),
            MapEvent::CameraIdle { center } => {
                if let Some(center) = center {
                    self.cache_center(*center);
                }
                self.on_pan_end();
            }
            MapEvent::Tap { .. } | MapEvent::LongPress { .. } => {}
        }
        self.callbacks.dispatch(event);
    }

    /// Draw the map with the indicator on top
    pub fn show(&mut self, ui: &mut Ui) -> Response {
        self.state.set_context(ui.ctx());

        let size = self.size.unwrap_or_else(|| ui.available_size());
        let rect = Rect::from_min_size(ui.available_rect_before_wrap().min, size);

        self.forward_map_options();
        let output = self.map.show(ui, rect);
        for event in &output.events {
            self.handle_map_event(event);
        }

        let anchor = rect.center() - vec2(0.0, self.options.pin_offset);
        match self.indicator_layer() {
            IndicatorLayer::Hidden => self.indicator.reset(),
            IndicatorLayer::Custom => {
                if let Some(indicator) = self.custom_indicator.as_mut() {
                    indicator.show(ui, anchor);
                }
            }
            IndicatorLayer::BuiltIn(signal) => {
                // a pan that started and ended within this frame still drops the pin
                if self.pan_ended && signal == PinSignal::Derived(false) {
                    self.indicator.update(PinSignal::Derived(true));
                }
                self.indicator.show(ui, anchor, signal);
            }
        }
        self.pan_ended = false;

        output.response
    }

    fn on_pan_start(&mut self) {
        if !self.state.is_enabled() {
            return;
        }
        self.state.set_panning(true);
        log::trace!("pan started at {}", self.last_center);
        if self.options.use_haptic_feedback {
            self.haptics.perform(HapticKind::Selection);
        }
        self.state.request_repaint();
    }

    fn on_pan_end(&mut self) {
        // a pan end without a matching start (e.g. disabled mid-gesture) is ignored
        if !self.state.is_enabled() || !self.state.is_panning() {
            return;
        }
        self.state.set_panning(false);
        self.pan_ended = true;
        if self.options.use_haptic_feedback {
            self.haptics.perform(HapticKind::Impact);
        }
        self.state.request_repaint();

        let center = self.last_center;
        if let Some(callback) = self.on_location_picked.as_mut() {
            log::debug!("location picked: {}", center);
            callback(center);
        }
    }

    fn cache_center(&mut self, center: LatLng) {
        match center.checked() {
            Ok(center) => self.last_center = center,
            Err(err) => log::warn!("ignoring camera center: {}", err),
        }
    }

    fn forward_map_options(&mut self) {
        if self.applied_map_options.as_ref() == Some(&self.map_options) {
            return;
        }
        match &self.applied_map_options {
            Some(applied) => log::debug!(
                "forwarding map options: {:?}",
                self.map_options.changed_fields(applied)
            ),
            None => log::debug!("forwarding {} map options", MapOptions::FIELD_NAMES.len()),
        }
        self.map.apply_options(&self.map_options);
        self.applied_map_options = Some(self.map_options.clone());
    }
}

impl<M: MapSurface> Drop for LocationPicker<M> {
    fn drop(&mut self) {
        if let Some(controller) = &self.controller {
            controller.detach_from(&self.state);
        }
        self.indicator.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapOutput;
    use egui::Sense;

    struct StillMap {
        center: LatLng,
        applied: usize,
    }

    impl MapSurface for StillMap {
        fn center(&self) -> LatLng {
            self.center
        }

        fn apply_options(&mut self, _options: &MapOptions) {
            self.applied += 1;
        }

        fn show(&mut self, ui: &mut Ui, rect: Rect) -> MapOutput {
            MapOutput::new(ui.allocate_rect(rect, Sense::drag()))
        }
    }

    fn picker(enabled: bool) -> LocationPicker<StillMap> {
        let map = StillMap {
            center: LatLng::new(48.8566, 2.3522),
            applied: 0,
        };
        LocationPicker::new(map).enabled(enabled)
    }

    fn pan(picker: &mut LocationPicker<StillMap>, to: LatLng) {
        picker.handle_map_event(&MapEvent::CameraMoveStarted);
        picker.handle_map_event(&MapEvent::CameraMove { center: to });
        picker.handle_map_event(&MapEvent::CameraIdle { center: None });
    }

    #[test]
    fn test_last_center_seeded_from_map() {
        let picker = picker(false);
        assert_eq!(picker.last_center(), LatLng::new(48.8566, 2.3522));
        assert_eq!(picker.map().applied, 1);
    }

    #[test]
    fn test_pan_reports_cached_center() {
        let picked = Rc::new(RefCell::new(Vec::new()));
        let sink = picked.clone();
        let mut picker = picker(true).on_location_picked(move |at| sink.borrow_mut().push(at));

        picker.handle_map_event(&MapEvent::CameraMoveStarted);
        assert!(picker.is_panning());
        picker.handle_map_event(&MapEvent::CameraMove {
            center: LatLng::new(1.0, 2.0),
        });
        picker.handle_map_event(&MapEvent::CameraIdle { center: None });

        assert!(!picker.is_panning());
        assert_eq!(*picked.borrow(), vec![LatLng::new(1.0, 2.0)]);
    }

    #[test]
    fn test_idle_center_overrides_cache() {
        let picked = Rc::new(RefCell::new(None));
        let sink = picked.clone();
        let mut picker = picker(true).on_location_picked(move |at| *sink.borrow_mut() = Some(at));

        picker.handle_map_event(&MapEvent::CameraMoveStarted);
        picker.handle_map_event(&MapEvent::CameraIdle {
            center: Some(LatLng::new(-33.8688, 151.2093)),
        });
        assert_eq!(*picked.borrow(), Some(LatLng::new(-33.8688, 151.2093)));
    }

    #[test]
    fn test_invalid_center_keeps_previous() {
        let picked = Rc::new(RefCell::new(None));
        let sink = picked.clone();
        let mut picker = picker(true).on_location_picked(move |at| *sink.borrow_mut() = Some(at));

        picker.handle_map_event(&MapEvent::CameraMoveStarted);
        picker.handle_map_event(&MapEvent::CameraMove {
            center: LatLng::new(10.0, 10.0),
        });
        picker.handle_map_event(&MapEvent::CameraIdle {
            center: Some(LatLng::new(f64::NAN, 10.0)),
        });
        assert_eq!(*picked.borrow(), Some(LatLng::new(10.0, 10.0)));
    }

    #[test]
    fn test_disabled_picker_ignores_pans() {
        let picked = Rc::new(Cell::new(0));
        let sink = picked.clone();
        let mut picker = picker(false).on_location_picked(move |_| sink.set(sink.get() + 1));

        pan(&mut picker, LatLng::new(1.0, 1.0));
        assert!(!picker.is_panning());
        assert_eq!(picked.get(), 0);
        // camera moves are still tracked
        assert_eq!(picker.last_center(), LatLng::new(1.0, 1.0));
    }

    #[test]
    fn test_disabled_pan_start_requests_no_haptics() {
        let kinds = Rc::new(RefCell::new(Vec::new()));
        let sink = kinds.clone();
        let mut picker = picker(false).haptics(move |kind: HapticKind| sink.borrow_mut().push(kind));

        picker.handle_map_event(&MapEvent::CameraMoveStarted);
        assert!(!picker.is_panning());
        picker.handle_map_event(&MapEvent::CameraIdle { center: None });
        assert!(kinds.borrow().is_empty());
    }

    #[test]
    fn test_enable_then_pan_picks_once() {
        let kinds = Rc::new(RefCell::new(Vec::new()));
        let picked = Rc::new(RefCell::new(Vec::new()));
        let haptic_sink = kinds.clone();
        let picked_sink = picked.clone();
        let controller = PickerController::new();
        let mut picker = picker(false)
            .controller(controller.clone())
            .haptics(move |kind: HapticKind| haptic_sink.borrow_mut().push(kind))
            .on_location_picked(move |at| picked_sink.borrow_mut().push(at));
        assert!(!picker.is_enabled());
        assert!(!controller.is_enabled());

        controller.enable();
        assert!(picker.is_enabled());
        assert!(matches!(picker.indicator_layer(), IndicatorLayer::BuiltIn(_)));

        picker.handle_map_event(&MapEvent::CameraMoveStarted);
        assert!(picker.is_panning());
        assert_eq!(*kinds.borrow(), vec![HapticKind::Selection]);

        picker.handle_map_event(&MapEvent::CameraMove {
            center: LatLng::new(37.7749, -122.4194),
        });
        picker.handle_map_event(&MapEvent::CameraIdle { center: None });

        assert!(!picker.is_panning());
        assert_eq!(*kinds.borrow(), vec![HapticKind::Selection, HapticKind::Impact]);
        assert_eq!(*picked.borrow(), vec![LatLng::new(37.7749, -122.4194)]);
    }

    #[test]
    fn test_idle_without_start_is_ignored() {
        let picked = Rc::new(Cell::new(0));
        let sink = picked.clone();
        let mut picker = picker(true).on_location_picked(move |_| sink.set(sink.get() + 1));

        picker.handle_map_event(&MapEvent::CameraIdle { center: None });
        assert_eq!(picked.get(), 0);
    }

    #[test]
    fn test_disable_mid_pan_drops_gesture() {
        let picked = Rc::new(Cell::new(0));
        let sink = picked.clone();
        let mut picker = picker(true).on_location_picked(move |_| sink.set(sink.get() + 1));

        picker.handle_map_event(&MapEvent::CameraMoveStarted);
        picker.disable();
        assert!(!picker.is_panning());
        picker.enable();
        picker.handle_map_event(&MapEvent::CameraIdle { center: None });
        assert_eq!(picked.get(), 0);
    }

    #[test]
    fn test_haptics_follow_gesture() {
        let kinds = Rc::new(RefCell::new(Vec::new()));
        let sink = kinds.clone();
        let mut picker = picker(true).haptics(move |kind: HapticKind| sink.borrow_mut().push(kind));

        pan(&mut picker, LatLng::new(0.5, 0.5));
        assert_eq!(*kinds.borrow(), vec![HapticKind::Selection, HapticKind::Impact]);
    }

    #[test]
    fn test_haptics_can_be_turned_off() {
        let kinds = Rc::new(RefCell::new(Vec::new()));
        let sink = kinds.clone();
        let mut picker = picker(true)
            .haptic_feedback(false)
            .haptics(move |kind: HapticKind| sink.borrow_mut().push(kind));

        pan(&mut picker, LatLng::new(0.5, 0.5));
        assert!(kinds.borrow().is_empty());
    }

    #[test]
    fn test_indicator_layer_resolution() {
        let mut picker = picker(false);
        assert_eq!(picker.indicator_layer(), IndicatorLayer::Hidden);

        picker.enable();
        assert_eq!(
            picker.indicator_layer(),
            IndicatorLayer::BuiltIn(PinSignal::Derived(false))
        );

        picker.handle_map_event(&MapEvent::CameraMoveStarted);
        assert_eq!(
            picker.indicator_layer(),
            IndicatorLayer::BuiltIn(PinSignal::Derived(true))
        );

        picker.set_pin_state(Some(PinState::Idle));
        assert_eq!(
            picker.indicator_layer(),
            IndicatorLayer::BuiltIn(PinSignal::Explicit(PinState::Idle))
        );

        let picker = picker.custom_indicator(|_ui: &mut Ui, _anchor: Pos2| {});
        assert_eq!(picker.indicator_layer(), IndicatorLayer::Custom);
    }

    #[test]
    fn test_set_enabled_toggles_on_flag_change_only() {
        let controller = PickerController::new();
        let mut picker = picker(false).controller(controller.clone());

        // flag unchanged: a controller toggle sticks
        controller.enable();
        picker.set_enabled(false);
        assert!(picker.is_enabled());

        // flag changes to match the live state: no second toggle
        picker.set_enabled(true);
        assert!(picker.is_enabled());

        picker.set_enabled(false);
        assert!(!picker.is_enabled());
        assert!(!controller.is_enabled());
    }

    #[test]
    fn test_set_options_validates() {
        let mut picker = picker(false);
        let mut options = PickerOptions::default();
        options.appearance.diameter = -1.0;
        assert!(picker.set_options(options).is_err());

        let mut options = PickerOptions::default();
        options.enabled = true;
        options.pin_offset = 10.0;
        assert!(picker.set_options(options).is_ok());
        assert!(picker.is_enabled());
        assert_eq!(picker.options().pin_offset, 10.0);
    }

    #[test]
    fn test_replacing_controller_detaches_previous() {
        let first = PickerController::new();
        let second = PickerController::new();
        let mut picker = picker(true).controller(first.clone());
        assert!(first.is_attached());

        picker.set_controller(Some(second.clone()));
        assert!(!first.is_attached());
        assert!(second.is_attached());
        assert!(second.is_enabled());

        first.disable();
        assert!(picker.is_enabled());
    }

    #[test]
    fn test_drop_detaches_controller() {
        let controller = PickerController::new();
        let picker = picker(true).controller(controller.clone());
        drop(picker);
        assert!(!controller.is_attached());
        controller.disable();
        assert!(controller.is_enabled());
    }
}
