pub mod events;
pub mod haptics;

// Re-export the essential types
pub use events::MapEvent;
pub use haptics::{HapticFeedback, HapticKind, LogHaptics};
