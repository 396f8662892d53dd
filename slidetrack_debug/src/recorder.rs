// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`EngineEvent`].

use slidetrack_core::gesture::Direction;
use slidetrack_core::offset::Motion;
use slidetrack_core::trace::{
    ClickSuppressedEvent, EngineEvent, GestureEvent, GestureKind, NavigateCause, NavigateEvent,
    TraceSink, WrapCorrectionEvent,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_NAVIGATE: u8 = 1;
const TAG_WRAP_CORRECTION: u8 = 2;
const TAG_GESTURE: u8 = 3;
const TAG_CLICK_SUPPRESSED: u8 = 4;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_cause(&mut self, c: NavigateCause) {
        self.write_u8(match c {
            NavigateCause::GoTo => 0,
            NavigateCause::Next => 1,
            NavigateCause::Prev => 2,
            NavigateCause::Indicator => 3,
            NavigateCause::DragCommit => 4,
            NavigateCause::SnapBack => 5,
        });
    }

    fn write_gesture_kind(&mut self, k: GestureKind) {
        self.write_u8(match k {
            GestureKind::Armed => 0,
            GestureKind::DragStarted => 1,
            GestureKind::Scrolling => 2,
            GestureKind::Committed(Direction::Forward) => 3,
            GestureKind::Committed(Direction::Backward) => 4,
            GestureKind::SnappedBack => 5,
            GestureKind::Cancelled => 6,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.write_u8(TAG_NAVIGATE);
        self.write_u64(e.seq);
        self.write_cause(e.cause);
        self.write_u32(e.from_real);
        self.write_u32(e.to_real);
        self.write_u32(e.track_index);
        self.write_u8(u8::from(e.motion == Motion::Animated));
        self.write_u8(u8::from(e.wrapping));
    }

    fn on_wrap_correction(&mut self, e: &WrapCorrectionEvent) {
        self.write_u8(TAG_WRAP_CORRECTION);
        self.write_u64(e.seq);
        self.write_u32(e.from_track);
        self.write_u32(e.to_track);
        self.write_u32(e.real);
    }

    fn on_gesture(&mut self, e: &GestureEvent) {
        self.write_u8(TAG_GESTURE);
        self.write_u64(e.seq);
        self.write_gesture_kind(e.kind);
        self.write_f64(e.dx);
    }

    fn on_click_suppressed(&mut self, e: &ClickSuppressedEvent) {
        self.write_u8(TAG_CLICK_SUPPRESSED);
        self.write_u64(e.seq);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`EngineEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
///
/// Stops at the first unknown tag or truncated record.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?.try_into().ok()?;
        self.pos += N;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[v]| v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.read_u64().map(f64::from_bits)
    }

    fn read_cause(&mut self) -> Option<NavigateCause> {
        Some(match self.read_u8()? {
            0 => NavigateCause::GoTo,
            1 => NavigateCause::Next,
            2 => NavigateCause::Prev,
            3 => NavigateCause::Indicator,
            4 => NavigateCause::DragCommit,
            5 => NavigateCause::SnapBack,
            _ => return None,
        })
    }

    fn read_gesture_kind(&mut self) -> Option<GestureKind> {
        Some(match self.read_u8()? {
            0 => GestureKind::Armed,
            1 => GestureKind::DragStarted,
            2 => GestureKind::Scrolling,
            3 => GestureKind::Committed(Direction::Forward),
            4 => GestureKind::Committed(Direction::Backward),
            5 => GestureKind::SnappedBack,
            6 => GestureKind::Cancelled,
            _ => return None,
        })
    }

    fn decode_navigate(&mut self) -> Option<EngineEvent> {
        Some(EngineEvent::Navigate(NavigateEvent {
            seq: self.read_u64()?,
            cause: self.read_cause()?,
            from_real: self.read_u32()?,
            to_real: self.read_u32()?,
            track_index: self.read_u32()?,
            motion: Motion::from_animate(self.read_u8()? != 0),
            wrapping: self.read_u8()? != 0,
        }))
    }

    fn decode_wrap_correction(&mut self) -> Option<EngineEvent> {
        Some(EngineEvent::WrapCorrection(WrapCorrectionEvent {
            seq: self.read_u64()?,
            from_track: self.read_u32()?,
            to_track: self.read_u32()?,
            real: self.read_u32()?,
        }))
    }

    fn decode_gesture(&mut self) -> Option<EngineEvent> {
        Some(EngineEvent::Gesture(GestureEvent {
            seq: self.read_u64()?,
            kind: self.read_gesture_kind()?,
            dx: self.read_f64()?,
        }))
    }

    fn decode_click_suppressed(&mut self) -> Option<EngineEvent> {
        Some(EngineEvent::ClickSuppressed(ClickSuppressedEvent {
            seq: self.read_u64()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = EngineEvent;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_u8()? {
            TAG_NAVIGATE => self.decode_navigate(),
            TAG_WRAP_CORRECTION => self.decode_wrap_correction(),
            TAG_GESTURE => self.decode_gesture(),
            TAG_CLICK_SUPPRESSED => self.decode_click_suppressed(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use slidetrack_core::engine::Carousel;
    use slidetrack_core::trace::Tracer;

    use super::*;

    #[test]
    fn records_a_real_session() {
        let mut carousel = Carousel::builder(3).build().unwrap();
        let _ = carousel.evaluate();
        carousel.prev();
        carousel.transition_settled();
        let mut rec = RecorderSink::new();
        let changes = carousel.evaluate();
        Tracer::new(&mut rec).events(&changes.events);

        let decoded: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(decoded, changes.events);
        match decoded[0] {
            EngineEvent::Navigate(e) => {
                assert_eq!(e.cause, NavigateCause::Prev);
                assert_eq!(e.to_real, 2);
                assert_eq!(e.track_index, 0);
                assert!(e.wrapping);
            }
            other => panic!("expected Navigate, got {other:?}"),
        }
        assert!(matches!(
            decoded[1],
            EngineEvent::WrapCorrection(WrapCorrectionEvent {
                from_track: 0,
                to_track: 3,
                real: 2,
                ..
            })
        ));
    }

    #[test]
    fn gesture_keeps_direction_and_distance() {
        let mut rec = RecorderSink::new();
        rec.on_gesture(&GestureEvent {
            seq: 4,
            kind: GestureKind::Committed(Direction::Backward),
            dx: 123.5,
        });
        rec.on_click_suppressed(&ClickSuppressedEvent { seq: 5 });

        let decoded: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(decoded.len(), 2);
        assert_eq!(
            decoded[0],
            EngineEvent::Gesture(GestureEvent {
                seq: 4,
                kind: GestureKind::Committed(Direction::Backward),
                dx: 123.5,
            })
        );
        assert_eq!(decoded[1].seq(), 5);
    }

    #[test]
    fn truncated_record_stops_decoding() {
        let mut rec = RecorderSink::new();
        rec.on_click_suppressed(&ClickSuppressedEvent { seq: 1 });
        rec.on_click_suppressed(&ClickSuppressedEvent { seq: 2 });
        let bytes = rec.into_bytes();
        let events: Vec<_> = decode(&bytes[..bytes.len() - 3]).collect();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn unknown_tag_stops_decoding() {
        let events: Vec<_> = decode(&[0xFF, 0, 0]).collect();
        assert!(events.is_empty());
    }

    #[test]
    fn empty_buffer_decodes_to_nothing() {
        let events: Vec<_> = decode(&[]).collect();
        assert!(events.is_empty());
    }
}
