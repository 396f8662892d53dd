// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer gesture classification.
//!
//! [`DragState`] follows one pointer from press to release:
//!
//! ```text
//!   Idle ──press──► Armed ──move past slop, mostly horizontal──► Dragging
//!                     │                                             │
//!                     └─move past slop, mostly vertical──► Idle     │
//!                                                                   ▼
//!   Idle ◄──────────────────────────release──────────────── Commit / SnapBack
//! ```
//!
//! A vertical-dominant gesture is handed back to the page so native
//! scrolling keeps working. A gesture that reached `Dragging` arms a
//! one-shot click suppression so the synthetic click that follows the
//! release does not also activate whatever sits under the pointer.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::config::CarouselConfig;

/// Where a pointer gesture currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GesturePhase {
    /// No pointer is down (or the gesture was handed to native scrolling).
    #[default]
    Idle,
    /// Pointer is down but has not moved past the slop threshold.
    Armed,
    /// Horizontal drag in progress; the track follows the pointer.
    Dragging,
}

/// Direction of a committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward higher real indices (dragged left).
    Forward,
    /// Toward lower real indices (dragged right).
    Backward,
}

/// Result of feeding a pointer move into [`DragState::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// No gesture is armed.
    Ignored,
    /// Still inside the slop radius.
    Pending,
    /// The gesture turned out to be vertical and was released to the page.
    Scrolling,
    /// The track should follow the pointer by `dx` pixels. Backends should
    /// suppress default touch scrolling for this move.
    Dragging {
        /// Horizontal distance from the press position.
        dx: f64,
    },
}

/// What a pointer release asks the engine to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Release {
    /// Move one slide in the given direction.
    Commit(Direction),
    /// Animate back to the current slide.
    SnapBack,
}

/// Per-gesture pointer state.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
    phase: GesturePhase,
    start: Point,
    last: Point,
    width: f64,
    has_dragged: bool,
    suppress_click: bool,
}

impl DragState {
    /// Creates an idle gesture state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns `true` while a pointer is armed or dragging.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != GesturePhase::Idle
    }

    /// Whether the current (or just released) gesture moved past the slop.
    #[must_use]
    pub const fn has_dragged(&self) -> bool {
        self.has_dragged
    }

    /// Container width captured at press time.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Distance travelled since the press.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.last - self.start
    }

    /// Arms a new gesture at `at` for a container `width` pixels wide.
    ///
    /// Any click suppression left over from an earlier gesture is dropped.
    pub fn begin(&mut self, at: Point, width: f64) {
        *self = Self {
            phase: GesturePhase::Armed,
            start: at,
            last: at,
            width,
            has_dragged: false,
            suppress_click: false,
        };
    }

    /// Feeds a pointer move.
    pub fn update(&mut self, at: Point, config: &CarouselConfig) -> MoveOutcome {
        match self.phase {
            GesturePhase::Idle => MoveOutcome::Ignored,
            GesturePhase::Armed => {
                self.last = at;
                let d = self.delta();
                let (ax, ay) = (d.x.abs(), d.y.abs());
                if ax < config.drag_slop && ay < config.drag_slop {
                    return MoveOutcome::Pending;
                }
                if ay > ax {
                    self.phase = GesturePhase::Idle;
                    return MoveOutcome::Scrolling;
                }
                self.phase = GesturePhase::Dragging;
                self.has_dragged = true;
                MoveOutcome::Dragging { dx: d.x }
            }
            GesturePhase::Dragging => {
                self.last = at;
                MoveOutcome::Dragging {
                    dx: self.delta().x,
                }
            }
        }
    }

    /// Ends the gesture at `at`.
    ///
    /// Returns `None` when no gesture was armed (e.g. it was already handed
    /// to native scrolling).
    pub fn end(&mut self, at: Point, config: &CarouselConfig) -> Option<Release> {
        let phase = self.phase;
        if phase == GesturePhase::Idle {
            return None;
        }
        let dx = at.x - self.start.x;
        self.last = at;
        self.phase = GesturePhase::Idle;
        self.suppress_click = self.has_dragged;

        let committed =
            phase == GesturePhase::Dragging && dx.abs() > config.commit_distance(self.width);
        Some(if !committed {
            Release::SnapBack
        } else if dx < 0.0 {
            Release::Commit(Direction::Forward)
        } else {
            Release::Commit(Direction::Backward)
        })
    }

    /// Abandons the gesture (e.g. `pointercancel`).
    ///
    /// Returns `true` if a gesture was active.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.is_active();
        self.phase = GesturePhase::Idle;
        self.suppress_click = self.has_dragged;
        was_active
    }

    /// Drops a pending click suppression without consuming a click.
    ///
    /// Touch drags often end without a synthetic click, so the next click
    /// may come from the keyboard instead and must go through.
    pub fn clear_click_suppression(&mut self) {
        self.suppress_click = false;
    }

    /// Consumes the pending click suppression, if any.
    ///
    /// Returns `true` exactly once after a gesture that moved past the slop.
    pub fn take_click_suppression(&mut self) -> bool {
        core::mem::take(&mut self.suppress_click)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CarouselConfig {
        CarouselConfig::standard()
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut drag = DragState::new();
        assert_eq!(
            drag.update(Point::new(50.0, 0.0), &config()),
            MoveOutcome::Ignored
        );
        assert_eq!(drag.end(Point::new(50.0, 0.0), &config()), None);
    }

    #[test]
    fn small_moves_stay_inside_slop() {
        let mut drag = DragState::new();
        drag.begin(Point::new(100.0, 100.0), 400.0);
        assert_eq!(
            drag.update(Point::new(104.0, 103.0), &config()),
            MoveOutcome::Pending
        );
        assert_eq!(drag.phase(), GesturePhase::Armed);
        assert!(!drag.has_dragged());
    }

    #[test]
    fn vertical_motion_releases_to_page() {
        let mut drag = DragState::new();
        drag.begin(Point::new(100.0, 100.0), 400.0);
        assert_eq!(
            drag.update(Point::new(103.0, 130.0), &config()),
            MoveOutcome::Scrolling
        );
        assert_eq!(drag.phase(), GesturePhase::Idle);
        // Later horizontal motion does not hijack the scroll.
        assert_eq!(
            drag.update(Point::new(300.0, 130.0), &config()),
            MoveOutcome::Ignored
        );
        assert_eq!(drag.end(Point::new(300.0, 130.0), &config()), None);
        assert!(!drag.take_click_suppression());
    }

    #[test]
    fn horizontal_motion_starts_drag() {
        let mut drag = DragState::new();
        drag.begin(Point::new(100.0, 100.0), 400.0);
        assert_eq!(
            drag.update(Point::new(90.0, 102.0), &config()),
            MoveOutcome::Dragging { dx: -10.0 }
        );
        // Once dragging, vertical drift keeps the drag.
        assert_eq!(
            drag.update(Point::new(80.0, 160.0), &config()),
            MoveOutcome::Dragging { dx: -20.0 }
        );
        assert_eq!(drag.delta(), Vec2::new(-20.0, 60.0));
    }

    #[test]
    fn release_past_threshold_commits() {
        let mut drag = DragState::new();
        drag.begin(Point::new(300.0, 0.0), 400.0);
        drag.update(Point::new(250.0, 0.0), &config());
        assert_eq!(
            drag.end(Point::new(200.0, 0.0), &config()),
            Some(Release::Commit(Direction::Forward))
        );

        drag.begin(Point::new(100.0, 0.0), 400.0);
        drag.update(Point::new(150.0, 0.0), &config());
        assert_eq!(
            drag.end(Point::new(200.0, 0.0), &config()),
            Some(Release::Commit(Direction::Backward))
        );
    }

    #[test]
    fn release_under_threshold_snaps_back() {
        let mut drag = DragState::new();
        drag.begin(Point::new(300.0, 0.0), 400.0);
        drag.update(Point::new(280.0, 0.0), &config());
        // 40px < 18% of 400px (72px).
        assert_eq!(
            drag.end(Point::new(260.0, 0.0), &config()),
            Some(Release::SnapBack)
        );
    }

    #[test]
    fn tap_snaps_back_without_click_suppression() {
        let mut drag = DragState::new();
        drag.begin(Point::new(300.0, 0.0), 400.0);
        assert_eq!(
            drag.end(Point::new(300.0, 0.0), &config()),
            Some(Release::SnapBack)
        );
        assert!(!drag.take_click_suppression());
    }

    #[test]
    fn drag_suppresses_exactly_one_click() {
        let mut drag = DragState::new();
        drag.begin(Point::new(300.0, 0.0), 400.0);
        drag.update(Point::new(200.0, 0.0), &config());
        drag.end(Point::new(200.0, 0.0), &config());
        assert!(drag.take_click_suppression());
        assert!(!drag.take_click_suppression());
    }

    #[test]
    fn new_press_clears_stale_suppression() {
        let mut drag = DragState::new();
        drag.begin(Point::new(300.0, 0.0), 400.0);
        drag.update(Point::new(200.0, 0.0), &config());
        drag.end(Point::new(200.0, 0.0), &config());
        drag.begin(Point::new(300.0, 0.0), 400.0);
        assert!(!drag.take_click_suppression());
    }

    #[test]
    fn cleared_suppression_lets_next_click_through() {
        let mut drag = DragState::new();
        drag.begin(Point::new(300.0, 0.0), 400.0);
        drag.update(Point::new(200.0, 0.0), &config());
        drag.end(Point::new(200.0, 0.0), &config());
        drag.clear_click_suppression();
        assert!(!drag.take_click_suppression());
    }

    #[test]
    fn cancel_reports_activity() {
        let mut drag = DragState::new();
        assert!(!drag.cancel());
        drag.begin(Point::new(0.0, 0.0), 400.0);
        assert!(drag.cancel());
        assert_eq!(drag.phase(), GesturePhase::Idle);
    }
}
