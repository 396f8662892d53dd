// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use slidetrack_core::gesture::Direction;
use slidetrack_core::offset::Motion;
use slidetrack_core::trace::{
    ClickSuppressedEvent, GestureEvent, GestureKind, NavigateCause, NavigateEvent, TraceSink,
    WrapCorrectionEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

pub(crate) fn cause_name(cause: NavigateCause) -> &'static str {
    match cause {
        NavigateCause::GoTo => "go-to",
        NavigateCause::Next => "next",
        NavigateCause::Prev => "prev",
        NavigateCause::Indicator => "indicator",
        NavigateCause::DragCommit => "drag-commit",
        NavigateCause::SnapBack => "snap-back",
    }
}

pub(crate) fn gesture_name(kind: GestureKind) -> &'static str {
    match kind {
        GestureKind::Armed => "armed",
        GestureKind::DragStarted => "drag-started",
        GestureKind::Scrolling => "scrolling",
        GestureKind::Committed(Direction::Forward) => "committed-forward",
        GestureKind::Committed(Direction::Backward) => "committed-backward",
        GestureKind::SnappedBack => "snapped-back",
        GestureKind::Cancelled => "cancelled",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_navigate(&mut self, e: &NavigateEvent) {
        let motion = match e.motion {
            Motion::Instant => "instant",
            Motion::Animated => "animated",
        };
        let wrap = if e.wrapping { " (wrapping)" } else { "" };
        let _ = writeln!(
            self.writer,
            "[navigate] #{} {} real {} -> {} track={} {motion}{wrap}",
            e.seq,
            cause_name(e.cause),
            e.from_real,
            e.to_real,
            e.track_index,
        );
    }

    fn on_wrap_correction(&mut self, e: &WrapCorrectionEvent) {
        let _ = writeln!(
            self.writer,
            "[wrap] #{} track {} -> {} real={}",
            e.seq, e.from_track, e.to_track, e.real,
        );
    }

    fn on_gesture(&mut self, e: &GestureEvent) {
        let _ = writeln!(
            self.writer,
            "[gesture] #{} {} dx={:.1}px",
            e.seq,
            gesture_name(e.kind),
            e.dx,
        );
    }

    fn on_click_suppressed(&mut self, e: &ClickSuppressedEvent) {
        let _ = writeln!(self.writer, "[click] #{} suppressed", e.seq);
    }
}
