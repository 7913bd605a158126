use crate::animation::interpolation::{EasingFunction, Interpolatable, Interpolation};
use std::time::Duration;

/// A frame-driven tween between two values
///
/// Retargeting a running tween continues from wherever it currently is,
/// which gives implicit "animate to the new value" behaviour.
#[derive(Debug, Clone)]
pub struct Tween<T: Interpolatable + Clone> {
    /// Starting value
    pub from: T,
    /// Ending value
    pub to: T,
    /// Animation duration
    pub duration: Duration,
    /// Easing function to use
    pub easing: EasingFunction,
    elapsed: Duration,
    running: bool,
}

impl<T: Interpolatable + Clone + PartialEq> Tween<T> {
    /// Create a settled tween resting at `value`
    pub fn new(value: T, duration: Duration) -> Self {
        Self::with_easing(value.clone(), value, duration, EasingFunction::EaseInOut)
    }

    /// Create a new tween with custom easing. It does not run until started.
    pub fn with_easing(from: T, to: T, duration: Duration, easing: EasingFunction) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    /// Start the animation from `from`
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    /// Stop the animation where it is
    pub fn stop(&mut self) {
        self.from = self.current_value();
        self.to = self.from.clone();
        self.elapsed = Duration::ZERO;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        !self.running
    }

    /// Get the current progress (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        if !self.running {
            return 1.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn current_value(&self) -> T {
        if !self.running {
            return self.to.clone();
        }
        self.from.lerp(&self.to, self.easing.apply(self.progress()))
    }

    /// Move the tween by one frame and return the current value
    pub fn advance(&mut self, dt: Duration) -> T {
        if self.running {
            self.elapsed += dt;
            if self.elapsed >= self.duration {
                self.from = self.to.clone();
                self.running = false;
            }
        }
        self.current_value()
    }

    /// Animate towards a new target, starting from the current value
    pub fn change_target(&mut self, new_to: T) {
        if new_to == self.to {
            return;
        }
        self.from = self.current_value();
        self.to = new_to;
        self.start();
    }

    /// Snap to a value without animating
    pub fn jump_to(&mut self, value: T) {
        self.from = value.clone();
        self.to = value;
        self.elapsed = Duration::ZERO;
        self.running = false;
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }
}

/// One weighted piece of a [`TweenSequence`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSegment {
    pub begin: f64,
    pub end: f64,
    /// Share of the whole sequence relative to the other segments
    pub weight: f64,
    pub easing: EasingFunction,
}

impl TweenSegment {
    pub const fn new(begin: f64, end: f64, weight: f64, easing: EasingFunction) -> Self {
        Self {
            begin,
            end,
            weight,
            easing,
        }
    }
}

/// Maps an overall progress in `[0, 1]` through consecutive weighted segments
#[derive(Debug, Clone, PartialEq)]
pub struct TweenSequence {
    segments: Vec<TweenSegment>,
    total_weight: f64,
}

impl TweenSequence {
    pub fn new(segments: Vec<TweenSegment>) -> Self {
        debug_assert!(!segments.is_empty(), "a tween sequence needs segments");
        let total_weight = segments.iter().map(|s| s.weight).sum();
        Self {
            segments,
            total_weight,
        }
    }

    pub fn segments(&self) -> &[TweenSegment] {
        &self.segments
    }

    /// Overall progress at which each segment ends
    pub fn boundaries(&self) -> Vec<f64> {
        let mut acc = 0.0;
        self.segments
            .iter()
            .map(|s| {
                acc += s.weight;
                acc / self.total_weight
            })
            .collect()
    }

    pub fn transform(&self, t: f64) -> f64 {
        let Some(last) = self.segments.last() else {
            return 0.0;
        };
        if self.total_weight <= 0.0 {
            return last.end;
        }

        let t = t.clamp(0.0, 1.0);
        let mut start = 0.0;
        for (i, segment) in self.segments.iter().enumerate() {
            let span = segment.weight / self.total_weight;
            let end = if i + 1 == self.segments.len() {
                1.0
            } else {
                start + span
            };
            if t <= end {
                let local = if span > 0.0 { (t - start) / span } else { 1.0 };
                return Interpolation::ease(segment.begin, segment.end, local, segment.easing);
            }
            start = end;
        }
        last.end
    }
}
