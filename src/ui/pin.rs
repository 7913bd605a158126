//! The animated pin indicator
//!
//! The pin is a head (circle with a concentric dot) on a short stem, plus a
//! ground shadow under the stem tip. It plays a squash-and-stretch bounce when
//! it drops and, in advanced mode, lifts its shadow away while elevated.
//!
//! Hosts can render a [`PinIndicator`] on their own with an explicit
//! [`PinSignal`], or let [`crate::ui::picker::LocationPicker`] drive it from
//! the map's pan gestures.

use crate::animation::{
    AnimationController, AnimationStatus, EasingFunction, Interpolatable, Tween, TweenSegment,
    TweenSequence,
};
use crate::core::config::PinAppearance;
use crate::core::constants::{
    ADVANCED_BOUNCE_DURATION_MS, INNER_CIRCLE_RATIO, LIFT_DURATION_MS, MAX_SHADOW_OPACITY,
    SIMPLE_BOUNCE_DURATION_MS, STEM_WIDTH_RATIO,
};
use egui::{pos2, vec2, Color32, Painter, Pos2, Rect, Shape, Stroke, Ui, Vec2};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ELLIPSE_SEGMENTS: usize = 32;

/// Visual state of the pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinState {
    /// Resting on the map
    Idle,
    /// Lifted while the map is being panned
    Elevated,
}

/// Which animation set the pin uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    /// Boolean input: drop bounce plus an implicit shadow transition
    Simple,
    /// Explicit state: stronger bounce plus an animated shadow lift
    Advanced,
}

/// The elevation input of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinSignal {
    /// Explicit state, selects advanced mode
    Explicit(PinState),
    /// Raw elevated flag, selects simple mode
    Derived(bool),
}

impl PinSignal {
    /// Resolve the two possible inputs; an explicit state always wins
    pub fn from_inputs(state: Option<PinState>, elevated: bool) -> Self {
        match state {
            Some(state) => PinSignal::Explicit(state),
            None => PinSignal::Derived(elevated),
        }
    }

    pub fn state(self) -> PinState {
        match self {
            PinSignal::Explicit(state) => state,
            PinSignal::Derived(true) => PinState::Elevated,
            PinSignal::Derived(false) => PinState::Idle,
        }
    }

    pub fn mode(self) -> PinMode {
        match self {
            PinSignal::Explicit(_) => PinMode::Advanced,
            PinSignal::Derived(_) => PinMode::Simple,
        }
    }

    pub fn is_elevated(self) -> bool {
        self.state() == PinState::Elevated
    }
}

impl From<PinState> for PinSignal {
    fn from(state: PinState) -> Self {
        PinSignal::Explicit(state)
    }
}

impl From<bool> for PinSignal {
    fn from(elevated: bool) -> Self {
        PinSignal::Derived(elevated)
    }
}

/// Horizontal and vertical scale curves of the drop bounce
#[derive(Debug, Clone, PartialEq)]
pub struct BounceCurve {
    pub scale_x: TweenSequence,
    pub scale_y: TweenSequence,
    pub duration: Duration,
}

impl BounceCurve {
    pub fn simple() -> Self {
        use EasingFunction::*;
        Self {
            scale_x: TweenSequence::new(vec![
                TweenSegment::new(1.0, 1.3, 20.0, EaseOut),
                TweenSegment::new(1.3, 0.95, 20.0, EaseIn),
                TweenSegment::new(0.95, 1.05, 30.0, EaseOut),
                TweenSegment::new(1.05, 1.0, 30.0, EaseInOut),
            ]),
            scale_y: TweenSequence::new(vec![
                TweenSegment::new(1.0, 0.7, 20.0, EaseOut),
                TweenSegment::new(0.7, 1.1, 20.0, EaseIn),
                TweenSegment::new(1.1, 0.98, 30.0, EaseOut),
                TweenSegment::new(0.98, 1.0, 30.0, EaseInOut),
            ]),
            duration: Duration::from_millis(SIMPLE_BOUNCE_DURATION_MS),
        }
    }

    pub fn advanced() -> Self {
        use EasingFunction::*;
        Self {
            scale_x: TweenSequence::new(vec![
                TweenSegment::new(1.0, 1.35, 15.0, EaseOut),
                TweenSegment::new(1.35, 0.92, 25.0, EaseOutBounce),
                TweenSegment::new(0.92, 1.08, 30.0, EaseInOut),
                TweenSegment::new(1.08, 1.0, 30.0, EaseInOut),
            ]),
            scale_y: TweenSequence::new(vec![
                TweenSegment::new(1.0, 0.65, 15.0, EaseOut),
                TweenSegment::new(0.65, 1.15, 25.0, EaseOutBounce),
                TweenSegment::new(1.15, 0.96, 30.0, EaseInOut),
                TweenSegment::new(0.96, 1.0, 30.0, EaseInOut),
            ]),
            duration: Duration::from_millis(ADVANCED_BOUNCE_DURATION_MS),
        }
    }

    /// `(scale_x, scale_y)` at bounce progress `t`
    pub fn sample(&self, t: f64) -> (f64, f64) {
        (self.scale_x.transform(t), self.scale_y.transform(t))
    }
}

/// Ground shadow below the stem tip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowGeometry {
    pub width: f32,
    pub height: f32,
    /// Downward distance from the stem tip
    pub offset: f32,
    pub opacity: f32,
}

impl ShadowGeometry {
    /// Shadow size for a pin in the given state
    pub fn footprint(state: PinState, appearance: &PinAppearance) -> Vec2 {
        let d = appearance.diameter;
        match state {
            PinState::Idle => vec2(d * 0.5, d * 0.16),
            PinState::Elevated => vec2(d * 0.7, d * 0.22),
        }
    }

    /// The two fixed shadow presets of simple mode
    pub fn simple(state: PinState, appearance: &PinAppearance) -> Self {
        let size = Self::footprint(state, appearance);
        match state {
            PinState::Idle => Self {
                width: size.x,
                height: size.y,
                offset: 0.0,
                opacity: MAX_SHADOW_OPACITY,
            },
            PinState::Elevated => Self {
                width: size.x,
                height: size.y,
                offset: appearance.shadow_distance,
                opacity: MAX_SHADOW_OPACITY * 0.5,
            },
        }
    }
}

impl Interpolatable for ShadowGeometry {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            width: self.width.lerp(&other.width, t),
            height: self.height.lerp(&other.height, t),
            offset: self.offset.lerp(&other.offset, t),
            opacity: self.opacity.lerp(&other.opacity, t),
        }
    }
}

/// Everything needed to draw one frame of the pin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinFrame {
    pub scale_x: f32,
    pub scale_y: f32,
    pub shadow: ShadowGeometry,
}

pub struct PinIndicator {
    appearance: PinAppearance,
    simple_bounce: BounceCurve,
    advanced_bounce: BounceCurve,
    bounce: AnimationController,
    lift: AnimationController,
    shadow: Tween<ShadowGeometry>,
    previous: Option<PinSignal>,
    disposed: bool,
}

impl Default for PinIndicator {
    fn default() -> Self {
        Self::new(PinAppearance::default())
    }
}

impl PinIndicator {
    pub fn new(appearance: PinAppearance) -> Self {
        let simple_bounce = BounceCurve::simple();
        let shadow = Tween::new(
            ShadowGeometry::simple(PinState::Idle, &appearance),
            appearance.shadow_duration(),
        );
        Self {
            bounce: AnimationController::new(simple_bounce.duration),
            lift: AnimationController::new(Duration::from_millis(LIFT_DURATION_MS)),
            simple_bounce,
            advanced_bounce: BounceCurve::advanced(),
            shadow,
            appearance,
            previous: None,
            disposed: false,
        }
    }

    pub fn appearance(&self) -> &PinAppearance {
        &self.appearance
    }

    pub fn set_appearance(&mut self, appearance: PinAppearance) {
        if appearance == self.appearance {
            return;
        }
        self.shadow.set_duration(appearance.shadow_duration());
        let state = self.previous.map_or(PinState::Idle, PinSignal::state);
        self.shadow.jump_to(ShadowGeometry::simple(state, &appearance));
        self.appearance = appearance;
    }

    /// Signal seen on the last update, if any
    pub fn signal(&self) -> Option<PinSignal> {
        self.previous
    }

    pub fn bounce_status(&self) -> AnimationStatus {
        self.bounce.status()
    }

    pub fn lift_status(&self) -> AnimationStatus {
        self.lift.status()
    }

    pub fn bounce_duration(&self) -> Duration {
        self.bounce.duration()
    }

    pub fn lift_value(&self) -> f64 {
        self.lift.value()
    }

    pub fn is_animating(&self) -> bool {
        !self.disposed
            && (self.bounce.is_animating() || self.lift.is_animating() || self.shadow.is_running())
    }

    /// Size of the head plus stem
    pub fn desired_size(&self) -> Vec2 {
        vec2(self.appearance.diameter, self.appearance.pin_height())
    }

    /// Feed this frame's elevation signal and start whatever its change calls for
    pub fn update(&mut self, signal: PinSignal) {
        if self.disposed {
            return;
        }

        let state = signal.state();
        let Some(previous) = self.previous.replace(signal) else {
            self.shadow.jump_to(ShadowGeometry::simple(state, &self.appearance));
            if signal.mode() == PinMode::Advanced && state == PinState::Elevated {
                self.lift.jump_to(1.0);
            }
            return;
        };

        match signal.mode() {
            PinMode::Simple => {
                if previous.mode() == PinMode::Advanced {
                    self.lift.reset();
                }
                self.shadow
                    .change_target(ShadowGeometry::simple(state, &self.appearance));
                // only a drop bounces; lifting has no squash
                if previous.is_elevated() && !signal.is_elevated() {
                    self.drop_bounce(PinMode::Simple);
                }
            }
            PinMode::Advanced => {
                self.shadow.jump_to(ShadowGeometry::simple(state, &self.appearance));
                // the lift only runs in advanced mode; pick it up where the simple pin was
                if previous.mode() == PinMode::Simple {
                    self.lift
                        .jump_to(if previous.is_elevated() { 1.0 } else { 0.0 });
                }
                match (previous.state(), state) {
                    (PinState::Idle, PinState::Elevated) => self.lift.forward(),
                    (PinState::Elevated, PinState::Idle) => {
                        self.lift.reverse();
                        self.drop_bounce(PinMode::Advanced);
                    }
                    _ => {}
                }
            }
        }
    }

    /// Move every running progression by one frame
    pub fn advance(&mut self, dt: Duration) {
        if self.disposed {
            return;
        }
        self.bounce.advance(dt);
        self.lift.advance(dt);
        self.shadow.advance(dt);
    }

    pub fn frame(&self) -> PinFrame {
        let signal = self.previous.unwrap_or(PinSignal::Derived(false));
        let curve = match signal.mode() {
            PinMode::Simple => &self.simple_bounce,
            PinMode::Advanced => &self.advanced_bounce,
        };
        let (scale_x, scale_y) = curve.sample(self.bounce.value());

        let shadow = match signal.mode() {
            PinMode::Simple => self.shadow.current_value(),
            PinMode::Advanced => self.lifted_shadow(signal.state()),
        };

        PinFrame {
            scale_x: scale_x as f32,
            scale_y: scale_y as f32,
            shadow,
        }
    }

    /// Forget the last signal and rewind every progression
    pub fn reset(&mut self) {
        self.previous = None;
        self.bounce.reset();
        self.lift.reset();
        self.shadow.jump_to(ShadowGeometry::simple(PinState::Idle, &self.appearance));
    }

    /// Stop all progressions for good
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.bounce.dispose();
        self.lift.dispose();
        self.shadow.stop();
        self.disposed = true;
        log::trace!("pin indicator disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Advance, update and paint the pin centered on `center`
    pub fn show(&mut self, ui: &mut Ui, center: Pos2, signal: PinSignal) -> Rect {
        let dt = ui.input(|i| i.stable_dt);
        self.advance(frame_duration(dt));
        self.update(signal);
        self.paint(ui.painter(), center);
        if self.is_animating() {
            ui.ctx().request_repaint();
        }
        Rect::from_center_size(center, self.desired_size())
    }

    /// Draw the current frame. `center` is the middle of the head-plus-stem box.
    pub fn paint(&self, painter: &Painter, center: Pos2) {
        let appearance = &self.appearance;
        let frame = self.frame();
        let tip = center + vec2(0.0, appearance.pin_height() / 2.0);

        let shadow = frame.shadow;
        if shadow.opacity > 0.0 && shadow.width > 0.0 && shadow.height > 0.0 {
            let rect = Rect::from_center_size(
                tip + vec2(0.0, shadow.offset),
                vec2(shadow.width, shadow.height),
            );
            painter.rect_filled(
                rect,
                shadow.height / 2.0,
                appearance.shadow_color.gamma_multiply(shadow.opacity),
            );
        }

        let scale = vec2(frame.scale_x, frame.scale_y);
        let squash = |p: Pos2| tip + (p - tip) * scale;

        let stem_half = appearance.diameter * STEM_WIDTH_RATIO / 2.0;
        let stem = Rect::from_min_max(
            squash(pos2(tip.x - stem_half, tip.y - appearance.stem_height)),
            squash(pos2(tip.x + stem_half, tip.y)),
        );
        painter.rect_filled(
            stem,
            appearance.resolved_stem_corner_radius(),
            appearance.resolved_stem_color(),
        );

        let head = squash(pos2(
            tip.x,
            tip.y - appearance.stem_height - appearance.diameter / 2.0,
        ));
        let radius = appearance.diameter / 2.0;
        painter.add(ellipse(head, scale * radius, appearance.main_color));
        painter.add(ellipse(
            head,
            scale * (radius * INNER_CIRCLE_RATIO),
            appearance.inner_color,
        ));
    }

    fn drop_bounce(&mut self, mode: PinMode) {
        let duration = match mode {
            PinMode::Simple => self.simple_bounce.duration,
            PinMode::Advanced => self.advanced_bounce.duration,
        };
        self.bounce.set_duration(duration);
        self.bounce.restart();
    }

    fn lifted_shadow(&self, state: PinState) -> ShadowGeometry {
        let lift = EasingFunction::EaseOut.apply(self.lift.value()) as f32;
        let mut opacity = lift * MAX_SHADOW_OPACITY;
        if state == PinState::Idle {
            opacity *= 0.5;
        }
        let size = ShadowGeometry::footprint(state, &self.appearance);
        ShadowGeometry {
            width: size.x,
            height: size.y,
            offset: lift * self.appearance.shadow_distance,
            opacity,
        }
    }
}

/// Frame delta from egui's `stable_dt`, clamped so a stalled frame cannot skip an animation
pub(crate) fn frame_duration(dt: f32) -> Duration {
    Duration::from_secs_f32(dt.max(0.0).min(0.25))
}

fn ellipse(center: Pos2, radius: Vec2, fill: Color32) -> Shape {
    if (radius.x - radius.y).abs() < 0.01 {
        return Shape::circle_filled(center, radius.x, fill);
    }
    let points = (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / ELLIPSE_SEGMENTS as f32 * std::f32::consts::TAU;
            center + vec2(radius.x * angle.cos(), radius.y * angle.sin())
        })
        .collect();
    Shape::convex_polygon(points, fill, Stroke::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn assert_at_rest(frame: PinFrame) {
        assert!(approx(frame.scale_x, 1.0), "scale_x {}", frame.scale_x);
        assert!(approx(frame.scale_y, 1.0), "scale_y {}", frame.scale_y);
    }

    #[test]
    fn test_explicit_state_takes_precedence() {
        let signal = PinSignal::from_inputs(Some(PinState::Idle), true);
        assert_eq!(signal, PinSignal::Explicit(PinState::Idle));
        assert_eq!(signal.mode(), PinMode::Advanced);
        assert_eq!(signal.state(), PinState::Idle);

        let signal = PinSignal::from_inputs(None, true);
        assert_eq!(signal, PinSignal::Derived(true));
        assert_eq!(signal.mode(), PinMode::Simple);
        assert_eq!(signal.state(), PinState::Elevated);
    }

    #[test]
    fn test_bounce_curves_squash_and_stretch() {
        for curve in [BounceCurve::simple(), BounceCurve::advanced()] {
            let (x, y) = curve.sample(0.0);
            assert!((x - 1.0).abs() < 1e-9 && (y - 1.0).abs() < 1e-9);
            let (x, y) = curve.sample(1.0);
            assert!((x - 1.0).abs() < 1e-9 && (y - 1.0).abs() < 1e-9);

            let boundaries = curve.scale_x.boundaries();
            assert_eq!(boundaries, curve.scale_y.boundaries());
            for &b in &boundaries[..boundaries.len() - 1] {
                let (x, y) = curve.sample(b);
                assert!(
                    (x - 1.0) * (y - 1.0) < 0.0,
                    "axes must move in opposite directions at {}: ({}, {})",
                    b,
                    x,
                    y
                );
            }

            // final segment settles monotonically
            let last_start = boundaries[boundaries.len() - 2];
            let mut last_error = f64::MAX;
            for i in 0..=20 {
                let t = last_start + (1.0 - last_start) * i as f64 / 20.0;
                let (x, y) = curve.sample(t);
                let error = (x - 1.0).abs() + (y - 1.0).abs();
                assert!(error <= last_error + 1e-12);
                last_error = error;
            }
        }
    }

    #[test]
    fn test_bounce_weights_and_durations() {
        let simple = BounceCurve::simple();
        let advanced = BounceCurve::advanced();
        let weights = |c: &BounceCurve| -> Vec<f64> {
            c.scale_x.segments().iter().map(|s| s.weight).collect()
        };
        assert_eq!(weights(&simple), vec![20.0, 20.0, 30.0, 30.0]);
        assert_eq!(weights(&advanced), vec![15.0, 25.0, 30.0, 30.0]);
        assert_eq!(simple.duration, ms(400));
        assert_eq!(advanced.duration, ms(450));
    }

    #[test]
    fn test_simple_drop_bounces() {
        let mut pin = PinIndicator::default();
        pin.update(PinSignal::Derived(true));
        assert_eq!(pin.bounce_status(), AnimationStatus::Dismissed);

        pin.update(PinSignal::Derived(false));
        assert_eq!(pin.bounce_status(), AnimationStatus::Forward);
        assert_at_rest(pin.frame());

        // end of the first segment: wide and flat
        pin.advance(ms(80));
        let frame = pin.frame();
        assert!(frame.scale_x > 1.25, "scale_x {}", frame.scale_x);
        assert!(frame.scale_y < 0.75, "scale_y {}", frame.scale_y);

        pin.advance(ms(400));
        assert_at_rest(pin.frame());
        assert_eq!(pin.bounce_status(), AnimationStatus::Completed);
    }

    #[test]
    fn test_simple_lift_does_not_bounce() {
        let mut pin = PinIndicator::default();
        pin.update(PinSignal::Derived(false));
        pin.update(PinSignal::Derived(true));

        assert_eq!(pin.bounce_status(), AnimationStatus::Dismissed);
        assert_at_rest(pin.frame());
        // the shadow still transitions
        assert!(pin.is_animating());
        pin.advance(ms(200));
        let expected = ShadowGeometry::simple(PinState::Elevated, pin.appearance());
        assert_eq!(pin.frame().shadow, expected);
        assert!(!pin.is_animating());
    }

    #[test]
    fn test_simple_shadow_uses_configured_duration() {
        let appearance = PinAppearance {
            shadow_duration_ms: 500,
            ..Default::default()
        };
        let mut pin = PinIndicator::new(appearance);
        pin.update(PinSignal::Derived(false));
        pin.update(PinSignal::Derived(true));
        pin.advance(ms(250));
        assert!(pin.is_animating());
        let idle = ShadowGeometry::simple(PinState::Idle, pin.appearance());
        let elevated = ShadowGeometry::simple(PinState::Elevated, pin.appearance());
        let offset = pin.frame().shadow.offset;
        assert!(offset > idle.offset && offset < elevated.offset);
    }

    #[test]
    fn test_second_drop_restarts_bounce() {
        let mut pin = PinIndicator::default();
        pin.update(PinSignal::Derived(true));
        pin.update(PinSignal::Derived(false));
        pin.advance(ms(200));
        assert!(pin.frame() != PinIndicator::default().frame());

        pin.update(PinSignal::Derived(true));
        pin.update(PinSignal::Derived(false));
        assert_eq!(pin.bounce_status(), AnimationStatus::Forward);
        assert_at_rest(pin.frame());
    }

    #[test]
    fn test_advanced_lift_without_bounce() {
        let mut pin = PinIndicator::default();
        pin.update(PinSignal::Explicit(PinState::Idle));
        assert_eq!(pin.frame().shadow.opacity, 0.0);

        pin.update(PinSignal::Explicit(PinState::Elevated));
        assert_eq!(pin.lift_status(), AnimationStatus::Forward);
        assert_eq!(pin.bounce_status(), AnimationStatus::Dismissed);

        pin.advance(ms(100));
        let shadow = pin.frame().shadow;
        assert!(shadow.opacity > 0.0);
        assert!(shadow.offset > 0.0);

        pin.advance(ms(150));
        let shadow = pin.frame().shadow;
        assert!(approx(shadow.opacity, MAX_SHADOW_OPACITY));
        assert!(approx(shadow.offset, pin.appearance().shadow_distance));
        assert_at_rest(pin.frame());
    }

    #[test]
    fn test_advanced_drop_reverses_lift_and_bounces() {
        let mut pin = PinIndicator::default();
        pin.update(PinSignal::Explicit(PinState::Idle));
        pin.update(PinSignal::Explicit(PinState::Elevated));
        pin.advance(ms(250));

        pin.update(PinSignal::Explicit(PinState::Idle));
        assert_eq!(pin.lift_status(), AnimationStatus::Reverse);
        assert_eq!(pin.bounce_status(), AnimationStatus::Forward);

        // still fully lifted, but dimmed and resized for idle right away
        let shadow = pin.frame().shadow;
        assert!(approx(shadow.opacity, MAX_SHADOW_OPACITY * 0.5));
        let idle = ShadowGeometry::footprint(PinState::Idle, pin.appearance());
        assert_eq!((shadow.width, shadow.height), (idle.x, idle.y));

        pin.advance(ms(60));
        let frame = pin.frame();
        assert!(frame.scale_x > 1.0 && frame.scale_y < 1.0);

        pin.advance(ms(500));
        assert_eq!(pin.lift_value(), 0.0);
        assert_at_rest(pin.frame());
        assert!(!pin.is_animating());
    }

    #[test]
    fn test_advanced_idle_to_idle_is_noop() {
        let mut pin = PinIndicator::default();
        pin.update(PinSignal::Explicit(PinState::Idle));
        pin.update(PinSignal::Explicit(PinState::Idle));
        assert_eq!(pin.lift_status(), AnimationStatus::Dismissed);
        assert_eq!(pin.bounce_status(), AnimationStatus::Dismissed);
        assert!(!pin.is_animating());
    }

    #[test]
    fn test_first_elevated_signal_starts_lifted() {
        let mut pin = PinIndicator::default();
        pin.update(PinSignal::Explicit(PinState::Elevated));
        assert_eq!(pin.lift_value(), 1.0);
        assert!(!pin.is_animating());
    }

    #[test]
    fn test_mode_switch_is_reevaluated() {
        let mut pin = PinIndicator::default();
        pin.update(PinSignal::Derived(true));
        pin.update(PinSignal::Explicit(PinState::Idle));
        assert_eq!(pin.bounce_status(), AnimationStatus::Forward);
        assert_eq!(pin.bounce_duration(), ms(450));
    }

    #[test]
    fn test_simple_detour_drops_stale_lift() {
        let mut pin = PinIndicator::default();
        pin.update(PinSignal::Explicit(PinState::Elevated));
        assert_eq!(pin.lift_value(), 1.0);

        pin.update(PinSignal::Derived(false));
        assert_eq!(pin.lift_value(), 0.0);

        pin.update(PinSignal::Explicit(PinState::Idle));
        pin.advance(ms(500));
        let shadow = pin.frame().shadow;
        assert_eq!(pin.lift_value(), 0.0);
        assert_eq!(shadow.opacity, 0.0);
        assert_eq!(shadow.offset, 0.0);
        assert!(!pin.is_animating());
    }

    #[test]
    fn test_switch_to_explicit_elevated_keeps_lift() {
        let mut pin = PinIndicator::default();
        pin.update(PinSignal::Derived(true));
        pin.update(PinSignal::Explicit(PinState::Elevated));

        let shadow = pin.frame().shadow;
        assert_eq!(pin.lift_value(), 1.0);
        assert!(approx(shadow.opacity, MAX_SHADOW_OPACITY));
        assert!(approx(shadow.offset, pin.appearance().shadow_distance));
        assert_eq!(pin.bounce_status(), AnimationStatus::Dismissed);
    }

    #[test]
    fn test_switch_from_resting_simple_pin_lifts() {
        let mut pin = PinIndicator::default();
        pin.update(PinSignal::Derived(false));
        pin.update(PinSignal::Explicit(PinState::Elevated));
        assert_eq!(pin.lift_status(), AnimationStatus::Forward);
        pin.advance(ms(250));
        assert_eq!(pin.lift_value(), 1.0);
    }

    #[test]
    fn test_dispose_stops_everything() {
        let mut pin = PinIndicator::default();
        pin.update(PinSignal::Derived(true));
        pin.update(PinSignal::Derived(false));
        assert!(pin.is_animating());

        pin.dispose();
        pin.dispose();
        assert!(pin.is_disposed());
        assert!(!pin.is_animating());

        pin.update(PinSignal::Derived(true));
        pin.update(PinSignal::Derived(false));
        assert!(!pin.is_animating());
    }

    #[test]
    fn test_reset_forgets_previous_signal() {
        let mut pin = PinIndicator::default();
        pin.update(PinSignal::Derived(true));
        pin.reset();
        assert_eq!(pin.signal(), None);

        // no drop is detected against a forgotten signal
        pin.update(PinSignal::Derived(false));
        assert_eq!(pin.bounce_status(), AnimationStatus::Dismissed);
    }

    #[test]
    fn test_frame_duration_clamps() {
        assert_eq!(frame_duration(-1.0), Duration::ZERO);
        assert_eq!(frame_duration(f32::NAN), Duration::ZERO);
        assert_eq!(frame_duration(10.0), Duration::from_secs_f32(0.25));
    }
}
