//! External control handle for a [`crate::ui::picker::LocationPicker`]
//!
//! The handle holds a weak reference to the overlay it is attached to. Calls
//! made while detached, after [`PickerController::dispose`], or after the
//! overlay was dropped are silently ignored.

use crate::ui::picker::PickerState;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Default)]
struct ControllerInner {
    enabled: bool,
    binding: Option<Weak<PickerState>>,
}

/// Cheaply clonable handle that toggles picking mode from outside the overlay
#[derive(Clone, Default)]
pub struct PickerController {
    inner: Rc<RefCell<ControllerInner>>,
}

impl PickerController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn picking mode on
    pub fn enable(&self) {
        if let Some(state) = self.bound_state() {
            state.enable();
        }
    }

    /// Turn picking mode off, abandoning any pan gesture in flight
    pub fn disable(&self) {
        if let Some(state) = self.bound_state() {
            state.disable();
        }
    }

    /// Direction of the last toggle. `false` until attached.
    pub fn is_enabled(&self) -> bool {
        self.inner.borrow().enabled
    }

    pub fn is_attached(&self) -> bool {
        self.bound_state().is_some()
    }

    /// Detach from the overlay. Safe to call repeatedly; `is_enabled` keeps its value.
    pub fn dispose(&self) {
        if self.inner.borrow_mut().binding.take().is_some() {
            log::debug!("picker controller disposed");
        }
    }

    pub(crate) fn attach(&self, state: &Rc<PickerState>) {
        let mut inner = self.inner.borrow_mut();
        inner.binding = Some(Rc::downgrade(state));
        inner.enabled = state.is_enabled();
    }

    /// Detach only if still bound to `state`
    pub(crate) fn detach_from(&self, state: &Rc<PickerState>) {
        let mut inner = self.inner.borrow_mut();
        let bound_here = inner
            .binding
            .as_ref()
            .is_some_and(|weak| std::ptr::eq(weak.as_ptr(), Rc::as_ptr(state)));
        if bound_here {
            inner.binding = None;
        }
    }

    pub(crate) fn set_enabled(&self, enabled: bool) {
        self.inner.borrow_mut().enabled = enabled;
    }

    fn bound_state(&self) -> Option<Rc<PickerState>> {
        self.inner.borrow().binding.as_ref().and_then(Weak::upgrade)
    }
}

impl std::fmt::Debug for PickerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerController")
            .field("enabled", &self.is_enabled())
            .field("attached", &self.is_attached())
            .finish()
    }
}
