// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Slidetrack splits platform-specific work into *backend* crates. Each
//! backend provides the following pieces:
//!
//! - **Input**: Translates native events (pointer, click, key,
//!   transition-end) into [`Slider`] calls. Event wiring differs too much
//!   between platforms to abstract behind a trait.
//!
//! - **Presenter**: Implements the [`Presenter`] trait to apply
//!   [`TrackChanges`] to a platform-native tree (e.g. DOM elements).
//!
//! - **Settling**: Reports through [`Settle`] whether an animated move
//!   finishes on its own or only when the platform says so.
//!
//! # Crate boundaries
//!
//! `slidetrack_core` owns the engine, evaluation and this contract module.
//! Backend crates depend on `slidetrack_core` and provide platform glue.

use alloc::boxed::Box;

use kurbo::Point;

use crate::engine::{Carousel, TrackChanges};
use crate::gesture::MoveOutcome;
use crate::input::Key;
use crate::offset::Motion;
use crate::trace::{TraceSink, Tracer};

/// How an animated move completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Settle {
    /// The presenter has no transition to wait for; the move is complete as
    /// soon as `apply` returns.
    Immediate,
    /// The platform reports completion later, and the backend calls
    /// [`Slider::transition_end`] then.
    OnTransitionEnd,
}

/// Applies evaluated track changes to a platform-native presentation tree.
///
/// Both DOM presenters and test doubles implement this trait.
///
/// # Interaction loop pseudocode
///
/// ```rust,ignore
/// fn on_input(event: NativeEvent) {
///     // Mutate: update engine state
///     carousel.next();
///
///     // Evaluate: drain dirty slots and the pending offset
///     let changes = carousel.evaluate();
///
///     // Present: write styles and active markers
///     let settle = presenter.apply(&carousel, &changes);
///
///     // Settle: headless presenters finish at once
///     if settle == Settle::Immediate && changes.is_animated() {
///         carousel.transition_settled();
///     }
/// }
/// ```
///
/// [`Slider`] runs this loop for you.
pub trait Presenter {
    /// Applies the given [`TrackChanges`], reading active markers from
    /// `carousel` as needed.
    fn apply(&mut self, carousel: &Carousel, changes: &TrackChanges) -> Settle;
}

/// Drives a [`Carousel`] and a [`Presenter`] together.
///
/// Every operation mutates the engine and then flushes: changes are
/// evaluated, applied and their events forwarded to the trace sink.
pub struct Slider<P> {
    carousel: Carousel,
    presenter: P,
    changes: TrackChanges,
    sink: Option<Box<dyn TraceSink>>,
}

impl<P: core::fmt::Debug> core::fmt::Debug for Slider<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Slider")
            .field("carousel", &self.carousel)
            .field("presenter", &self.presenter)
            .field("traced", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}

impl<P: Presenter> Slider<P> {
    /// Wraps `carousel` and performs the initial presentation.
    pub fn new(carousel: Carousel, presenter: P) -> Self {
        let mut slider = Self {
            carousel,
            presenter,
            changes: TrackChanges::default(),
            sink: None,
        };
        slider.flush();
        slider
    }

    /// Routes engine events to `sink`.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.sink = Some(sink);
    }

    /// Removes and returns the trace sink.
    pub fn take_trace_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        self.sink.take()
    }

    /// The engine.
    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// The presenter.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// See [`Carousel::go_to_real`].
    pub fn go_to_real(&mut self, target: i64, motion: Motion) {
        self.carousel.go_to_real(target, motion);
        self.flush();
    }

    /// See [`Carousel::next`].
    pub fn next(&mut self) {
        self.carousel.next();
        self.flush();
    }

    /// See [`Carousel::prev`].
    pub fn prev(&mut self) {
        self.carousel.prev();
        self.flush();
    }

    /// See [`Carousel::activate_indicator`].
    pub fn activate_indicator(&mut self, slot: u32) -> bool {
        let hit = self.carousel.activate_indicator(slot);
        self.flush();
        hit
    }

    /// See [`Carousel::key_down`].
    pub fn key_down(&mut self, key: Key) -> bool {
        let consumed = self.carousel.key_down(key);
        self.flush();
        consumed
    }

    /// See [`Carousel::indicator_key`].
    pub fn indicator_key(&mut self, slot: u32, key: Key) -> bool {
        let consumed = self.carousel.indicator_key(slot, key);
        self.flush();
        consumed
    }

    /// See [`Carousel::pointer_down`].
    pub fn pointer_down(&mut self, at: Point, container_width: f64) {
        self.carousel.pointer_down(at, container_width);
        self.flush();
    }

    /// See [`Carousel::pointer_move`].
    pub fn pointer_move(&mut self, at: Point) -> MoveOutcome {
        let outcome = self.carousel.pointer_move(at);
        self.flush();
        outcome
    }

    /// See [`Carousel::pointer_up`].
    pub fn pointer_up(&mut self, at: Point) {
        self.carousel.pointer_up(at);
        self.flush();
    }

    /// See [`Carousel::pointer_cancel`].
    pub fn pointer_cancel(&mut self) {
        self.carousel.pointer_cancel();
        self.flush();
    }

    /// See [`Carousel::take_click_suppression`].
    pub fn take_click_suppression(&mut self) -> bool {
        let suppress = self.carousel.take_click_suppression();
        self.flush();
        suppress
    }

    /// The platform finished the track's transform transition.
    pub fn transition_end(&mut self) {
        self.carousel.transition_settled();
        self.flush();
    }

    /// Evaluates and presents pending changes.
    ///
    /// Every operation already ends with a flush.
    pub fn flush(&mut self) {
        loop {
            self.carousel.evaluate_into(&mut self.changes);
            let settle = if self.changes.is_empty() {
                Settle::OnTransitionEnd
            } else {
                self.presenter.apply(&self.carousel, &self.changes)
            };

            let mut tracer = match &mut self.sink {
                Some(sink) => Tracer::new(sink.as_mut()),
                None => Tracer::none(),
            };
            tracer.events(&self.changes.events);

            if settle != Settle::Immediate || !self.changes.is_animated() {
                return;
            }
            // Corrections are instant, so this runs at most twice.
            self.carousel.transition_settled();
        }
    }
}
