pub mod controller;
pub mod interpolation;
pub mod tweening;

// Re-export commonly used types and functions for convenience
pub use controller::{AnimationController, AnimationStatus};
pub use interpolation::{EasingFunction, Interpolatable, Interpolation};
pub use tweening::{Tween, TweenSegment, TweenSequence};
