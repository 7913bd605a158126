//! Haptic feedback requests
//!
//! Requests are fire-and-forget. Desktop hosts have no actuator, so the
//! default implementation only logs what would have been played.

/// Kind of pulse the picker asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticKind {
    /// Light tick when a pan gesture starts
    Selection,
    /// Stronger pulse when the pin lands
    Impact,
}

pub trait HapticFeedback {
    fn perform(&self, kind: HapticKind);
}

impl<F> HapticFeedback for F
where
    F: Fn(HapticKind),
{
    fn perform(&self, kind: HapticKind) {
        self(kind)
    }
}

/// Logs haptic requests instead of playing them
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHaptics;

impl HapticFeedback for LogHaptics {
    fn perform(&self, kind: HapticKind) {
        log::trace!("haptic feedback requested: {:?}", kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_closure_haptics() {
        let played = RefCell::new(Vec::new());
        let haptics = |kind: HapticKind| played.borrow_mut().push(kind);
        haptics.perform(HapticKind::Selection);
        haptics.perform(HapticKind::Impact);
        assert_eq!(
            *played.borrow(),
            vec![HapticKind::Selection, HapticKind::Impact]
        );
    }
}
