//! Frame-driven animation progressions
//!
//! An [`AnimationController`] owns a progress value in `[0, 1]` that is moved
//! by the host's frame loop through [`AnimationController::advance`]. It never
//! schedules anything on its own: a widget asks for another repaint for as long
//! as [`AnimationController::is_animating`] returns `true`.

use std::time::Duration;

/// Where a progression currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    /// Stopped at the beginning
    Dismissed,
    /// Running towards 1.0
    Forward,
    /// Running towards 0.0
    Reverse,
    /// Stopped at the end
    Completed,
}

#[derive(Debug, Clone)]
pub struct AnimationController {
    value: f64,
    duration: Duration,
    status: AnimationStatus,
    running: bool,
    disposed: bool,
}

impl AnimationController {
    pub fn new(duration: Duration) -> Self {
        Self {
            value: 0.0,
            duration,
            status: AnimationStatus::Dismissed,
            running: false,
            disposed: false,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn status(&self) -> AnimationStatus {
        self.status
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn is_animating(&self) -> bool {
        self.running && !self.disposed
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Run towards 1.0 from the current value
    pub fn forward(&mut self) {
        if self.disposed {
            return;
        }
        self.status = AnimationStatus::Forward;
        self.running = true;
        self.settle();
    }

    /// Run back towards 0.0 from the current value
    pub fn reverse(&mut self) {
        if self.disposed {
            return;
        }
        self.status = AnimationStatus::Reverse;
        self.running = true;
        self.settle();
    }

    /// Jump to 0.0 and run forward, superseding any run in flight
    pub fn restart(&mut self) {
        if self.disposed {
            return;
        }
        self.value = 0.0;
        self.forward();
    }

    /// Jump to 0.0 without animating
    pub fn reset(&mut self) {
        self.value = 0.0;
        self.running = false;
        self.status = AnimationStatus::Dismissed;
    }

    /// Set the value without animating
    pub fn jump_to(&mut self, value: f64) {
        if self.disposed {
            return;
        }
        self.value = value.clamp(0.0, 1.0);
        self.running = false;
        self.status = if self.value >= 1.0 {
            AnimationStatus::Completed
        } else {
            AnimationStatus::Dismissed
        };
    }

    /// Freeze at the current value
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Move the progression by one frame. Returns `true` if the value changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.is_animating() {
            return false;
        }

        let step = if self.duration.is_zero() {
            1.0
        } else {
            dt.as_secs_f64() / self.duration.as_secs_f64()
        };
        let before = self.value;
        self.value = match self.status {
            AnimationStatus::Reverse => (self.value - step).max(0.0),
            _ => (self.value + step).min(1.0),
        };
        self.settle();
        self.value != before
    }

    /// Stop the progression for good. Every later trigger is ignored.
    pub fn dispose(&mut self) {
        self.running = false;
        self.disposed = true;
    }

    fn settle(&mut self) {
        match self.status {
            AnimationStatus::Forward if self.value >= 1.0 => {
                self.value = 1.0;
                self.status = AnimationStatus::Completed;
                self.running = false;
            }
            AnimationStatus::Reverse if self.value <= 0.0 => {
                self.value = 0.0;
                self.status = AnimationStatus::Dismissed;
                self.running = false;
            }
            _ => {}
        }
    }
}
