// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which browser pointer drives the gesture.
//!
//! The engine follows a single pointer. [`PointerTracker`] remembers the id
//! of the primary pointer that armed the gesture so events from other
//! fingers are dropped, and decides when to take pointer capture: only once
//! the gesture becomes a drag, so a plain tap still delivers its click to the
//! element under the pointer.

use slidetrack_core::gesture::MoveOutcome;

/// Pointer ownership for one mounted carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct PointerTracker {
    id: Option<i32>,
    captured: bool,
}

impl PointerTracker {
    /// Handles `pointerdown`. Returns `true` if the engine should arm a
    /// gesture for this pointer.
    pub(crate) fn press(&mut self, id: i32, is_primary: bool, button: i16) -> bool {
        if !is_primary || button != 0 {
            return false;
        }
        *self = Self {
            id: Some(id),
            captured: false,
        };
        true
    }

    /// Whether `id` is the pointer that armed the current gesture.
    pub(crate) fn owns(&self, id: i32) -> bool {
        self.id == Some(id)
    }

    /// Handles the engine's answer to a `pointermove` from `id`.
    ///
    /// Returns `true` exactly once per gesture, on the first move that
    /// turned into a drag; the caller takes pointer capture then.
    pub(crate) fn should_capture(&mut self, id: i32, outcome: MoveOutcome) -> bool {
        if !self.owns(id) || self.captured {
            return false;
        }
        match outcome {
            MoveOutcome::Dragging { .. } => {
                self.captured = true;
                true
            }
            MoveOutcome::Scrolling => {
                // Handed to native scrolling; nothing further to follow.
                *self = Self::default();
                false
            }
            MoveOutcome::Ignored | MoveOutcome::Pending => false,
        }
    }

    /// Handles `pointerup` / `pointercancel`. Returns `true` if `id` owned
    /// the gesture, which then ends.
    pub(crate) fn release(&mut self, id: i32) -> bool {
        if !self.owns(id) {
            return false;
        }
        *self = Self::default();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_primary_button_arms() {
        let mut t = PointerTracker::default();
        assert!(!t.press(1, false, 0));
        assert!(!t.press(1, true, 2));
        assert!(!t.owns(1));
        assert!(t.press(1, true, 0));
        assert!(t.owns(1));
    }

    #[test]
    fn tap_never_captures() {
        let mut t = PointerTracker::default();
        t.press(1, true, 0);
        assert!(!t.should_capture(1, MoveOutcome::Pending));
        assert!(t.release(1));
        assert!(!t.owns(1));
    }

    #[test]
    fn capture_once_when_drag_starts() {
        let mut t = PointerTracker::default();
        t.press(1, true, 0);
        assert!(!t.should_capture(1, MoveOutcome::Pending));
        assert!(t.should_capture(1, MoveOutcome::Dragging { dx: -10.0 }));
        assert!(!t.should_capture(1, MoveOutcome::Dragging { dx: -30.0 }));
    }

    #[test]
    fn second_finger_is_ignored() {
        let mut t = PointerTracker::default();
        t.press(1, true, 0);
        // A second touch is not primary and does not take over.
        assert!(!t.press(2, false, 0));
        assert!(!t.owns(2));
        assert!(!t.should_capture(2, MoveOutcome::Dragging { dx: -248.0 }));
        assert!(!t.release(2));
        assert!(t.owns(1));
        assert!(t.release(1));
    }

    #[test]
    fn scroll_hand_off_forgets_pointer() {
        let mut t = PointerTracker::default();
        t.press(1, true, 0);
        assert!(!t.should_capture(1, MoveOutcome::Scrolling));
        assert!(!t.owns(1));
    }

    #[test]
    fn new_press_replaces_stale_pointer() {
        let mut t = PointerTracker::default();
        t.press(1, true, 0);
        t.should_capture(1, MoveOutcome::Dragging { dx: 10.0 });
        // The release happened outside the page and never arrived.
        assert!(t.press(3, true, 0));
        assert!(!t.owns(1));
        assert!(t.should_capture(3, MoveOutcome::Dragging { dx: 10.0 }));
    }
}
