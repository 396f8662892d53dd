// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the carousel engine.
//!
//! The engine records an [`EngineEvent`] for every state transition worth
//! seeing in a log: navigations, wrap corrections, gesture phase changes
//! and suppressed clicks. Events travel out through
//! [`TrackChanges::events`](crate::engine::TrackChanges::events); the
//! [`Slider`](crate::backend::Slider) driver forwards them to a
//! [`TraceSink`] through a [`Tracer`].
//!
//! All `TraceSink` method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.

use crate::gesture::Direction;
use crate::offset::Motion;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Why the engine moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigateCause {
    /// Direct `go_to_real` call.
    GoTo,
    /// `next()`, from code or the arrow key.
    Next,
    /// `prev()`, from code or the arrow key.
    Prev,
    /// An indicator was clicked or activated from the keyboard.
    Indicator,
    /// A drag released past the commit threshold.
    DragCommit,
    /// A drag released under the commit threshold.
    SnapBack,
}

/// Gesture phase changes worth recording.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Pointer pressed; in-flight animation taken over.
    Armed,
    /// Movement passed the slop horizontally; the track follows the pointer.
    DragStarted,
    /// Movement passed the slop vertically; gesture handed to the page.
    Scrolling,
    /// Released past the threshold.
    Committed(Direction),
    /// Released under the threshold.
    SnappedBack,
    /// `pointercancel` or equivalent.
    Cancelled,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted whenever the logical position or the track target changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NavigateEvent {
    /// Engine-local event counter.
    pub seq: u64,
    /// What triggered the move.
    pub cause: NavigateCause,
    /// Real index before the move.
    pub from_real: u32,
    /// Real index after the move.
    pub to_real: u32,
    /// Track slot the track is heading to.
    pub track_index: u32,
    /// Whether the move animates.
    pub motion: Motion,
    /// Whether the move heads for a clone slot.
    pub wrapping: bool,
}

/// Emitted when the engine jumps from a clone slot back to its real slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WrapCorrectionEvent {
    /// Engine-local event counter.
    pub seq: u64,
    /// Clone slot the track landed on.
    pub from_track: u32,
    /// Real slot the track was moved to.
    pub to_track: u32,
    /// Real index after the correction.
    pub real: u32,
}

/// Emitted on gesture phase changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEvent {
    /// Engine-local event counter.
    pub seq: u64,
    /// The phase change.
    pub kind: GestureKind,
    /// Horizontal distance from the press position, in pixels.
    pub dx: f64,
}

/// Emitted when a click after a drag is swallowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClickSuppressedEvent {
    /// Engine-local event counter.
    pub seq: u64,
}

/// Any event the engine records.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EngineEvent {
    /// See [`NavigateEvent`].
    Navigate(NavigateEvent),
    /// See [`WrapCorrectionEvent`].
    WrapCorrection(WrapCorrectionEvent),
    /// See [`GestureEvent`].
    Gesture(GestureEvent),
    /// See [`ClickSuppressedEvent`].
    ClickSuppressed(ClickSuppressedEvent),
}

impl EngineEvent {
    /// The event's sequence number.
    #[must_use]
    pub const fn seq(&self) -> u64 {
        match self {
            Self::Navigate(e) => e.seq,
            Self::WrapCorrection(e) => e.seq,
            Self::Gesture(e) => e.seq,
            Self::ClickSuppressed(e) => e.seq,
        }
    }
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the engine.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when the engine navigates.
    fn on_navigate(&mut self, e: &NavigateEvent) {
        _ = e;
    }

    /// Called when the engine corrects a wrap.
    fn on_wrap_correction(&mut self, e: &WrapCorrectionEvent) {
        _ = e;
    }

    /// Called on gesture phase changes.
    fn on_gesture(&mut self, e: &GestureEvent) {
        _ = e;
    }

    /// Called when a post-drag click is swallowed.
    fn on_click_suppressed(&mut self, e: &ClickSuppressedEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Dispatches one [`EngineEvent`] to the matching sink method.
    #[inline]
    pub fn event(&mut self, e: &EngineEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            match e {
                EngineEvent::Navigate(e) => s.on_navigate(e),
                EngineEvent::WrapCorrection(e) => s.on_wrap_correction(e),
                EngineEvent::Gesture(e) => s.on_gesture(e),
                EngineEvent::ClickSuppressed(e) => s.on_click_suppressed(e),
            }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Dispatches a batch of events in order.
    #[inline]
    pub fn events(&mut self, events: &[EngineEvent]) {
        for e in events {
            self.event(e);
        }
    }
}
