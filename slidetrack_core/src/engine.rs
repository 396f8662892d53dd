// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel position engine.
//!
//! [`Carousel`] owns the logical slide index, the physical track index,
//! the in-flight animation flag and the pointer gesture. Operations mutate
//! that state and mark what changed; [`Carousel::evaluate`] drains the
//! marks into a [`TrackChanges`] that a
//! [`Presenter`](crate::backend::Presenter) applies.
//!
//! # Wrapping
//!
//! Moving forward from the last slide does not jump back to slide 0.
//! Instead the track animates onto the trailing clone while the logical
//! index already reads 0, so indicators update at the start of the motion.
//! When the transition settles, [`Carousel::transition_settled`] swaps the
//! clone for the real slide without animation. Moving backward from slide
//! 0 mirrors this through the leading clone.
//!
//! # Reentrancy
//!
//! Navigation while a transition is in flight starts a new transition from
//! wherever the track currently is; there is no queue. Pressing a pointer is
//! the one supported way to interrupt an animation: it drops the transition
//! and, if the track was heading for a clone, applies the wrap correction on
//! the spot because no transition-end will follow.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use understory_dirty::{CycleHandling, DirtyTracker};

use crate::config::CarouselConfig;
use crate::dirty;
use crate::gesture::{Direction, DragState, GesturePhase, MoveOutcome, Release};
use crate::input::Key;
use crate::layout::TrackLayout;
use crate::offset::{Motion, TrackOffset};
use crate::trace::{
    ClickSuppressedEvent, EngineEvent, GestureEvent, GestureKind, NavigateCause, NavigateEvent,
    WrapCorrectionEvent,
};

/// Errors from [`CarouselBuilder::build`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// The carousel has no real slides.
    NoSlides,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSlides => f.write_str("carousel has no slides"),
        }
    }
}

impl core::error::Error for BuildError {}

/// A requested track position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetChange {
    /// Where the track should be.
    pub offset: TrackOffset,
    /// Whether to animate there.
    pub motion: Motion,
}

/// The set of changes produced by a single [`Carousel::evaluate`] call.
#[derive(Clone, Debug, Default)]
pub struct TrackChanges {
    /// The latest requested track position, if any was requested.
    pub offset: Option<OffsetChange>,
    /// Track slots whose active marker may have changed.
    pub slides: Vec<u32>,
    /// Indicator slots whose active marker may have changed.
    pub indicators: Vec<u32>,
    /// Events recorded since the previous evaluate, in order.
    pub events: Vec<EngineEvent>,
}

impl TrackChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.offset = None;
        self.slides.clear();
        self.indicators.clear();
        self.events.clear();
    }

    /// Returns `true` if nothing needs to be presented.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offset.is_none() && self.slides.is_empty() && self.indicators.is_empty()
    }

    /// Returns `true` if the requested offset animates.
    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.offset
            .is_some_and(|change| change.motion == Motion::Animated)
    }
}

/// Builder for [`Carousel`].
#[derive(Clone, Debug)]
pub struct CarouselBuilder {
    real_count: u32,
    initially_active: Option<u32>,
    indicators: Vec<u32>,
    config: CarouselConfig,
}

impl CarouselBuilder {
    /// The real slide pre-marked as active, if any. Out-of-range values are
    /// clamped.
    #[must_use]
    pub fn initially_active(mut self, real: Option<u32>) -> Self {
        self.initially_active = real;
        self
    }

    /// Binds indicators in slot order, each to the real index it selects.
    /// Out-of-range indices are clamped.
    #[must_use]
    pub fn indicators(mut self, reals: impl IntoIterator<Item = u32>) -> Self {
        self.indicators = reals.into_iter().collect();
        self
    }

    /// Overrides the default configuration.
    #[must_use]
    pub fn config(mut self, config: CarouselConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the engine.
    ///
    /// The first [`evaluate`](Carousel::evaluate) reports an instant offset
    /// and every slide and indicator slot, so the initial presentation has
    /// no visible slide-in.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NoSlides`] when built with zero slides.
    pub fn build(self) -> Result<Carousel, BuildError> {
        let layout = TrackLayout::new(self.real_count).ok_or(BuildError::NoSlides)?;
        let real = self
            .initially_active
            .map_or(0, |r| layout.clamp_real(i64::from(r)));
        let track = layout.real_to_track(real);
        let indicators = self
            .indicators
            .into_iter()
            .map(|r| layout.clamp_real(i64::from(r)))
            .collect::<Vec<_>>();

        let mut carousel = Carousel {
            layout,
            config: self.config,
            real_index: real,
            track_index: track,
            animating: false,
            drag: DragState::new(),
            offset: TrackOffset::at_rest(track),
            active_slot: track,
            indicator_real: real,
            indicators,
            pending_offset: Some(OffsetChange {
                offset: TrackOffset::at_rest(track),
                motion: Motion::Instant,
            }),
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            pending_events: Vec::new(),
            seq: 0,
        };
        for slot in 0..layout.track_len() {
            carousel.dirty.mark(slot, dirty::SLIDE_ACTIVE);
        }
        for slot in 0..carousel.indicator_count() {
            carousel.dirty.mark(slot, dirty::INDICATOR_ACTIVE);
        }
        Ok(carousel)
    }
}

/// Infinite-loop carousel state machine.
#[derive(Debug)]
pub struct Carousel {
    layout: TrackLayout,
    config: CarouselConfig,

    // -- Position --
    real_index: u32,
    track_index: u32,
    animating: bool,
    offset: TrackOffset,

    // -- Gesture --
    drag: DragState,

    // -- Active markers --
    active_slot: u32,
    indicator_real: u32,
    /// Indicator slot -> real index, fixed at build time.
    indicators: Vec<u32>,

    // -- Pending output --
    pending_offset: Option<OffsetChange>,
    dirty: DirtyTracker<u32>,
    pending_events: Vec<EngineEvent>,
    seq: u64,
}

impl Carousel {
    /// Starts building a carousel over `real_count` slides.
    #[must_use]
    pub fn builder(real_count: u32) -> CarouselBuilder {
        CarouselBuilder {
            real_count,
            initially_active: None,
            indicators: Vec::new(),
            config: CarouselConfig::standard(),
        }
    }

    // -- Property getters --

    /// Track shape.
    #[must_use]
    pub const fn layout(&self) -> TrackLayout {
        self.layout
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Authoritative logical position, always in `[0, N-1]`.
    ///
    /// During a wrap animation this already holds the wrapped value while
    /// [`track_index`](Self::track_index) still points at the clone.
    #[must_use]
    pub const fn real_index(&self) -> u32 {
        self.real_index
    }

    /// Physical position, in `[0, N+1]`.
    #[must_use]
    pub const fn track_index(&self) -> u32 {
        self.track_index
    }

    /// Whether an animated transition is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animating
    }

    /// Current gesture phase.
    #[must_use]
    pub const fn gesture_phase(&self) -> GesturePhase {
        self.drag.phase()
    }

    /// Last offset handed to the presenter.
    #[must_use]
    pub const fn offset(&self) -> TrackOffset {
        self.offset
    }

    /// Returns `true` when no animation or gesture is in flight and the
    /// track rests on a real slot.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        !self.animating
            && self.drag.phase() == GesturePhase::Idle
            && !self.layout.is_clone(self.track_index)
    }

    /// Track slot carrying the active marker.
    #[must_use]
    pub const fn active_slot(&self) -> u32 {
        self.active_slot
    }

    /// Whether track slot `slot` carries the active marker.
    #[must_use]
    pub const fn is_slide_active(&self, slot: u32) -> bool {
        slot == self.active_slot
    }

    /// Number of bound indicators.
    #[must_use]
    pub fn indicator_count(&self) -> u32 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "indicator count is bounded by the DOM, far below u32::MAX"
        )]
        let count = self.indicators.len() as u32;
        count
    }

    /// Real index bound to indicator `slot`.
    #[must_use]
    pub fn indicator_real(&self, slot: u32) -> Option<u32> {
        self.indicators.get(slot as usize).copied()
    }

    /// Whether indicator `slot` carries the active marker.
    #[must_use]
    pub fn is_indicator_active(&self, slot: u32) -> bool {
        self.indicator_real(slot) == Some(self.indicator_real)
    }

    // -- Navigation --

    /// Moves to `target`, clamped into `[0, N-1]`.
    pub fn go_to_real(&mut self, target: i64, motion: Motion) {
        self.navigate(target, motion, NavigateCause::GoTo);
    }

    /// Moves one slide forward, wrapping through the trailing clone.
    pub fn next(&mut self) {
        self.step(Direction::Forward, NavigateCause::Next);
    }

    /// Moves one slide backward, wrapping through the leading clone.
    pub fn prev(&mut self) {
        self.step(Direction::Backward, NavigateCause::Prev);
    }

    /// Activates indicator `slot`.
    ///
    /// Returns `false` if no indicator is bound at `slot`.
    pub fn activate_indicator(&mut self, slot: u32) -> bool {
        let Some(real) = self.indicator_real(slot) else {
            return false;
        };
        self.navigate(i64::from(real), Motion::Animated, NavigateCause::Indicator);
        true
    }

    /// Handles a key pressed on the carousel container.
    ///
    /// Returns `true` if the key was consumed. Any click suppression left
    /// by an earlier drag is dropped, so a keyboard-activated click on
    /// content inside the carousel goes through.
    pub fn key_down(&mut self, key: Key) -> bool {
        self.drag.clear_click_suppression();
        match key {
            Key::ArrowRight => self.next(),
            Key::ArrowLeft => self.prev(),
            Key::Enter | Key::Space => return false,
        }
        true
    }

    /// Handles a key pressed on indicator `slot`.
    ///
    /// Returns `true` if the key activated the indicator.
    pub fn indicator_key(&mut self, slot: u32, key: Key) -> bool {
        self.drag.clear_click_suppression();
        key.is_activation() && self.activate_indicator(slot)
    }

    /// Notifies the engine that the track's transform transition finished.
    ///
    /// Landing on a clone slot is corrected to the matching real slot
    /// without animation; any other landing needs no work.
    pub fn transition_settled(&mut self) {
        self.animating = false;
        self.correct_wrap();
    }

    // -- Pointer input --

    /// Arms a gesture at `at` on a container `container_width` pixels wide.
    ///
    /// Takes over any in-flight animation.
    pub fn pointer_down(&mut self, at: Point, container_width: f64) {
        self.drag.begin(at, container_width);
        self.record(|seq| {
            EngineEvent::Gesture(GestureEvent {
                seq,
                kind: GestureKind::Armed,
                dx: 0.0,
            })
        });
        self.animating = false;
        if !self.correct_wrap() {
            self.offset = TrackOffset::at_rest(self.track_index);
            self.pending_offset = Some(OffsetChange {
                offset: self.offset,
                motion: Motion::Instant,
            });
        }
    }

    /// Feeds a pointer move.
    ///
    /// The returned outcome tells the backend whether to suppress default
    /// scrolling.
    pub fn pointer_move(&mut self, at: Point) -> MoveOutcome {
        let before = self.drag.phase();
        let outcome = self.drag.update(at, &self.config);
        match outcome {
            MoveOutcome::Dragging { dx } => {
                if before == GesturePhase::Armed {
                    self.record(|seq| {
                        EngineEvent::Gesture(GestureEvent {
                            seq,
                            kind: GestureKind::DragStarted,
                            dx,
                        })
                    });
                }
                self.offset = TrackOffset {
                    track_index: self.track_index,
                    drag_px: dx,
                    width_px: self.drag.width(),
                };
                self.pending_offset = Some(OffsetChange {
                    offset: self.offset,
                    motion: Motion::Instant,
                });
            }
            MoveOutcome::Scrolling => {
                let dx = self.drag.delta().x;
                self.record(|seq| {
                    EngineEvent::Gesture(GestureEvent {
                        seq,
                        kind: GestureKind::Scrolling,
                        dx,
                    })
                });
            }
            MoveOutcome::Ignored | MoveOutcome::Pending => {}
        }
        outcome
    }

    /// Ends the gesture at `at`, committing or snapping back.
    pub fn pointer_up(&mut self, at: Point) {
        let Some(release) = self.drag.end(at, &self.config) else {
            return;
        };
        let dx = self.drag.delta().x;
        match release {
            Release::Commit(direction) => {
                self.record(|seq| {
                    EngineEvent::Gesture(GestureEvent {
                        seq,
                        kind: GestureKind::Committed(direction),
                        dx,
                    })
                });
                self.step(direction, NavigateCause::DragCommit);
            }
            Release::SnapBack => {
                self.record(|seq| {
                    EngineEvent::Gesture(GestureEvent {
                        seq,
                        kind: GestureKind::SnappedBack,
                        dx,
                    })
                });
                self.snap_back();
            }
        }
    }

    /// Abandons the gesture and snaps back to the current slide.
    pub fn pointer_cancel(&mut self) {
        if !self.drag.cancel() {
            return;
        }
        let dx = self.drag.delta().x;
        self.record(|seq| {
            EngineEvent::Gesture(GestureEvent {
                seq,
                kind: GestureKind::Cancelled,
                dx,
            })
        });
        self.snap_back();
    }

    /// Consumes the one-shot click suppression armed by a drag.
    ///
    /// Backends call this from a capture-phase click listener and cancel the
    /// click when it returns `true`.
    pub fn take_click_suppression(&mut self) -> bool {
        let suppress = self.drag.take_click_suppression();
        if suppress {
            self.record(|seq| EngineEvent::ClickSuppressed(ClickSuppressedEvent { seq }));
        }
        suppress
    }

    // -- Evaluation --

    /// Drains pending changes.
    pub fn evaluate(&mut self) -> TrackChanges {
        let mut changes = TrackChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided buffer
    /// to avoid allocation.
    pub fn evaluate_into(&mut self, changes: &mut TrackChanges) {
        changes.clear();
        changes.offset = self.pending_offset.take();
        changes.slides = self
            .dirty
            .drain(dirty::SLIDE_ACTIVE)
            .deterministic()
            .run()
            .collect();
        changes.indicators = self
            .dirty
            .drain(dirty::INDICATOR_ACTIVE)
            .deterministic()
            .run()
            .collect();
        core::mem::swap(&mut self.pending_events, &mut changes.events);
    }

    // -- Internals --

    fn step(&mut self, direction: Direction, cause: NavigateCause) {
        let layout = self.layout;
        match direction {
            Direction::Forward if self.real_index == layout.last_real() => {
                self.wrap_to(0, layout.trailing_clone(), cause);
            }
            Direction::Forward => {
                self.navigate(i64::from(self.real_index) + 1, Motion::Animated, cause);
            }
            Direction::Backward if self.real_index == 0 => {
                self.wrap_to(layout.last_real(), layout.leading_clone(), cause);
            }
            Direction::Backward => {
                self.navigate(i64::from(self.real_index) - 1, Motion::Animated, cause);
            }
        }
    }

    fn snap_back(&mut self) {
        self.navigate(
            i64::from(self.real_index),
            Motion::Animated,
            NavigateCause::SnapBack,
        );
    }

    fn navigate(&mut self, target: i64, motion: Motion, cause: NavigateCause) {
        let real = self.layout.clamp_real(target);
        let track = self.layout.real_to_track(real);
        self.move_to(real, track, motion, cause, false);
    }

    /// Animates onto a clone slot while the logical index already holds the
    /// wrapped value.
    fn wrap_to(&mut self, real: u32, clone_slot: u32, cause: NavigateCause) {
        self.move_to(real, clone_slot, Motion::Animated, cause, true);
    }

    fn move_to(&mut self, real: u32, track: u32, motion: Motion, cause: NavigateCause, wrapping: bool) {
        let from_real = self.real_index;
        self.set_position(real, track, motion);
        self.record(|seq| {
            EngineEvent::Navigate(NavigateEvent {
                seq,
                cause,
                from_real,
                to_real: real,
                track_index: track,
                motion,
                wrapping,
            })
        });
    }

    /// Moves from a clone slot to its real slot without animation.
    ///
    /// Returns `false` if the track was not on a clone.
    fn correct_wrap(&mut self) -> bool {
        let from_track = self.track_index;
        if !self.layout.is_clone(from_track) {
            return false;
        }
        let real = self.layout.track_to_real(from_track);
        let to_track = self.layout.real_to_track(real);
        self.set_position(real, to_track, Motion::Instant);
        self.record(|seq| {
            EngineEvent::WrapCorrection(WrapCorrectionEvent {
                seq,
                from_track,
                to_track,
                real,
            })
        });
        true
    }

    fn set_position(&mut self, real: u32, track: u32, motion: Motion) {
        self.real_index = real;
        self.track_index = track;
        self.animating = motion == Motion::Animated;
        self.offset = TrackOffset::at_rest(track);
        self.pending_offset = Some(OffsetChange {
            offset: self.offset,
            motion,
        });
        self.set_active(track, real);
    }

    fn set_active(&mut self, slot: u32, real: u32) {
        if slot != self.active_slot {
            self.dirty.mark(self.active_slot, dirty::SLIDE_ACTIVE);
            self.dirty.mark(slot, dirty::SLIDE_ACTIVE);
            self.active_slot = slot;
        }
        if real != self.indicator_real {
            let previous = self.indicator_real;
            for (slot, &bound) in (0_u32..).zip(&self.indicators) {
                if bound == previous || bound == real {
                    self.dirty.mark(slot, dirty::INDICATOR_ACTIVE);
                }
            }
            self.indicator_real = real;
        }
    }

    fn record(&mut self, make: impl FnOnce(u64) -> EngineEvent) {
        let seq = self.seq;
        self.seq += 1;
        self.pending_events.push(make(seq));
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn carousel(n: u32) -> Carousel {
        let mut c = Carousel::builder(n)
            .indicators(0..n)
            .build()
            .unwrap();
        // Consume the initial application.
        let _ = c.evaluate();
        c
    }

    fn sorted(mut v: Vec<u32>) -> Vec<u32> {
        v.sort_unstable();
        v
    }

    #[test]
    fn zero_slides_is_rejected() {
        assert_eq!(Carousel::builder(0).build().unwrap_err(), BuildError::NoSlides);
    }

    #[test]
    fn initial_evaluate_covers_everything_without_animation() {
        let mut c = Carousel::builder(4).indicators([0, 1, 2, 3]).build().unwrap();
        assert_eq!(c.real_index(), 0);
        assert_eq!(c.track_index(), 1);

        let changes = c.evaluate();
        let offset = changes.offset.unwrap();
        assert_eq!(offset.motion, Motion::Instant);
        assert_eq!(offset.offset, TrackOffset::at_rest(1));
        assert_eq!(sorted(changes.slides), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(sorted(changes.indicators), vec![0, 1, 2, 3]);

        assert!(c.evaluate().is_empty());
    }

    #[test]
    fn pre_marked_slide_sets_initial_index() {
        let c = Carousel::builder(4).initially_active(Some(2)).build().unwrap();
        assert_eq!(c.real_index(), 2);
        assert_eq!(c.track_index(), 3);
        assert!(c.is_slide_active(3));

        let clamped = Carousel::builder(4).initially_active(Some(9)).build().unwrap();
        assert_eq!(clamped.real_index(), 3);
    }

    #[test]
    fn go_to_real_clamps() {
        let mut c = carousel(4);
        c.go_to_real(-5, Motion::Instant);
        assert_eq!(c.real_index(), 0);
        assert_eq!(c.track_index(), 1);
        c.go_to_real(14, Motion::Instant);
        assert_eq!(c.real_index(), 3);
        assert_eq!(c.track_index(), 4);
    }

    #[test]
    fn animated_go_to_marks_animation() {
        let mut c = carousel(4);
        c.go_to_real(2, Motion::Animated);
        assert!(c.is_animating());
        let changes = c.evaluate();
        assert!(changes.is_animated());
        assert_eq!(sorted(changes.slides), vec![1, 3]);
        assert_eq!(sorted(changes.indicators), vec![0, 2]);
        c.transition_settled();
        assert!(!c.is_animating());
        assert!(c.is_at_rest());
        // No correction needed off a clone.
        assert!(c.evaluate().offset.is_none());
    }

    #[test]
    fn next_steps_then_wraps_through_trailing_clone() {
        let mut c = carousel(4);
        for expected in 1..=3 {
            c.next();
            c.transition_settled();
            assert_eq!(c.real_index(), expected);
            assert_eq!(c.track_index(), expected + 1);
        }

        c.next();
        // Indicator state leads the visual position during the wrap.
        assert_eq!(c.real_index(), 0);
        assert_eq!(c.track_index(), 5);
        assert!(c.is_indicator_active(0));
        assert!(c.is_slide_active(5));

        c.transition_settled();
        assert_eq!(c.real_index(), 0);
        assert_eq!(c.track_index(), 1);
        assert!(c.is_slide_active(1));
        assert!(c.is_at_rest());
    }

    #[test]
    fn wrap_lands_on_same_transform_as_direct_jump() {
        let mut wrapped = carousel(4);
        wrapped.go_to_real(3, Motion::Instant);
        wrapped.next();
        wrapped.transition_settled();
        let correction = wrapped.evaluate().offset.unwrap();
        assert_eq!(correction.motion, Motion::Instant);

        let mut direct = carousel(4);
        direct.go_to_real(3, Motion::Instant);
        direct.go_to_real(0, Motion::Instant);
        let jump = direct.evaluate().offset.unwrap();

        assert_eq!(correction, jump);
    }

    #[test]
    fn prev_wraps_through_leading_clone() {
        let mut c = carousel(4);
        c.prev();
        assert_eq!(c.real_index(), 3);
        assert_eq!(c.track_index(), 0);
        c.transition_settled();
        assert_eq!(c.real_index(), 3);
        assert_eq!(c.track_index(), 4);
    }

    #[test]
    fn single_slide_wraps_onto_itself() {
        let mut c = carousel(1);
        c.next();
        assert_eq!(c.track_index(), 2);
        c.transition_settled();
        assert_eq!(c.real_index(), 0);
        assert_eq!(c.track_index(), 1);
        c.prev();
        assert_eq!(c.track_index(), 0);
        c.transition_settled();
        assert_eq!(c.track_index(), 1);
    }

    #[test]
    fn drag_past_threshold_commits() {
        let mut c = carousel(4);
        c.go_to_real(1, Motion::Instant);
        c.pointer_down(Point::new(300.0, 50.0), 400.0);
        assert_eq!(
            c.pointer_move(Point::new(250.0, 50.0)),
            MoveOutcome::Dragging { dx: -50.0 }
        );
        assert_eq!(c.offset().pixels(), -850.0);
        c.pointer_up(Point::new(200.0, 50.0));
        assert_eq!(c.real_index(), 2);
        c.transition_settled();
        assert_eq!(c.track_index(), 3);
    }

    #[test]
    fn short_drag_snaps_back() {
        let mut c = carousel(4);
        c.go_to_real(1, Motion::Instant);
        let _ = c.evaluate();
        c.pointer_down(Point::new(300.0, 50.0), 400.0);
        c.pointer_move(Point::new(280.0, 50.0));
        c.pointer_up(Point::new(260.0, 50.0));
        assert_eq!(c.real_index(), 1);
        let change = c.evaluate().offset.unwrap();
        assert_eq!(change.motion, Motion::Animated);
        assert_eq!(change.offset, TrackOffset::at_rest(2));
    }

    #[test]
    fn drag_right_at_first_slide_wraps_backward() {
        let mut c = carousel(4);
        c.pointer_down(Point::new(100.0, 0.0), 400.0);
        c.pointer_move(Point::new(150.0, 0.0));
        c.pointer_up(Point::new(200.0, 0.0));
        assert_eq!(c.real_index(), 3);
        assert_eq!(c.track_index(), 0);
        c.transition_settled();
        assert_eq!(c.track_index(), 4);
    }

    #[test]
    fn pointer_down_interrupts_wrap_and_corrects() {
        let mut c = carousel(4);
        c.go_to_real(3, Motion::Instant);
        c.next();
        assert_eq!(c.track_index(), 5);
        c.pointer_down(Point::new(0.0, 0.0), 400.0);
        assert!(!c.is_animating());
        assert_eq!(c.track_index(), 1);
        assert_eq!(c.real_index(), 0);
        let change = c.evaluate().offset.unwrap();
        assert_eq!(change.motion, Motion::Instant);
        assert_eq!(change.offset, TrackOffset::at_rest(1));
    }

    #[test]
    fn pointer_down_disables_transition_in_place() {
        let mut c = carousel(4);
        c.go_to_real(2, Motion::Animated);
        let _ = c.evaluate();
        c.pointer_down(Point::new(0.0, 0.0), 400.0);
        assert!(!c.is_animating());
        let change = c.evaluate().offset.unwrap();
        assert_eq!(change.motion, Motion::Instant);
        assert_eq!(change.offset, TrackOffset::at_rest(3));
    }

    #[test]
    fn vertical_gesture_leaves_position_alone() {
        let mut c = carousel(4);
        c.pointer_down(Point::new(100.0, 100.0), 400.0);
        let _ = c.evaluate();
        assert_eq!(c.pointer_move(Point::new(102.0, 160.0)), MoveOutcome::Scrolling);
        c.pointer_up(Point::new(102.0, 200.0));
        assert!(c.evaluate().offset.is_none());
        assert_eq!(c.real_index(), 0);
        assert!(!c.take_click_suppression());
    }

    #[test]
    fn cancel_snaps_back() {
        let mut c = carousel(4);
        c.pointer_down(Point::new(100.0, 0.0), 400.0);
        c.pointer_move(Point::new(20.0, 0.0));
        c.pointer_cancel();
        assert_eq!(c.real_index(), 0);
        assert_eq!(c.gesture_phase(), GesturePhase::Idle);
        assert_eq!(c.evaluate().offset.unwrap().offset, TrackOffset::at_rest(1));
    }

    #[test]
    fn click_after_drag_is_suppressed_once() {
        let mut c = carousel(4);
        c.pointer_down(Point::new(100.0, 0.0), 400.0);
        c.pointer_move(Point::new(90.0, 0.0));
        c.pointer_up(Point::new(90.0, 0.0));
        assert!(c.take_click_suppression());
        assert!(!c.take_click_suppression());
    }

    #[test]
    fn keyboard_input_drops_stale_click_suppression() {
        let mut c = carousel(4);
        c.pointer_down(Point::new(100.0, 0.0), 400.0);
        c.pointer_move(Point::new(90.0, 0.0));
        c.pointer_up(Point::new(90.0, 0.0));
        // Touch release produced no click; Enter on a link inside a slide.
        assert!(!c.key_down(Key::Enter));
        assert!(!c.take_click_suppression());

        c.pointer_down(Point::new(100.0, 0.0), 400.0);
        c.pointer_move(Point::new(90.0, 0.0));
        c.pointer_up(Point::new(90.0, 0.0));
        c.indicator_key(0, Key::Space);
        assert!(!c.take_click_suppression());
    }

    #[test]
    fn indicators_and_keys() {
        let mut c = Carousel::builder(4)
            .indicators([0, 1, 2, 7])
            .build()
            .unwrap();
        let _ = c.evaluate();
        assert_eq!(c.indicator_real(3), Some(3));
        assert!(c.activate_indicator(2));
        assert_eq!(c.real_index(), 2);
        assert!(c.is_indicator_active(2));
        assert!(!c.activate_indicator(9));

        assert!(c.indicator_key(1, Key::Enter));
        assert_eq!(c.real_index(), 1);
        assert!(!c.indicator_key(0, Key::ArrowLeft));

        assert!(c.key_down(Key::ArrowRight));
        assert_eq!(c.real_index(), 2);
        assert!(c.key_down(Key::ArrowLeft));
        assert_eq!(c.real_index(), 1);
        assert!(!c.key_down(Key::Enter));
    }

    #[test]
    fn events_record_causes_in_order() {
        let mut c = carousel(2);
        c.next();
        c.next();
        c.transition_settled();
        let changes = c.evaluate();
        let causes: Vec<_> = changes
            .events
            .iter()
            .map(|e| match e {
                EngineEvent::Navigate(n) => Some((n.cause, n.wrapping)),
                _ => None,
            })
            .collect();
        assert_eq!(
            causes,
            [
                Some((NavigateCause::Next, false)),
                Some((NavigateCause::Next, true)),
                None,
            ]
        );
        let seqs: Vec<_> = changes.events.iter().map(EngineEvent::seq).collect();
        assert_eq!(seqs, [0, 1, 2]);
    }
}
