// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes them as a JSON array, one object per event, in recording
//! order. The output is meant for attaching to bug reports and for
//! scripting over long sessions.

use std::io::{self, Write};

use serde_json::{Value, json};

use slidetrack_core::offset::Motion;
use slidetrack_core::trace::EngineEvent;

use crate::pretty::{cause_name, gesture_name};
use crate::recorder::decode;

/// Converts recorded bytes into a JSON array value.
#[must_use]
pub fn to_value(bytes: &[u8]) -> Value {
    Value::Array(decode(bytes).map(|e| event_json(&e)).collect())
}

/// Writes recorded events as pretty-printed JSON.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &to_value(bytes))?;
    writeln!(writer)
}

fn event_json(event: &EngineEvent) -> Value {
    match *event {
        EngineEvent::Navigate(e) => json!({
            "seq": e.seq,
            "type": "navigate",
            "cause": cause_name(e.cause),
            "from_real": e.from_real,
            "to_real": e.to_real,
            "track_index": e.track_index,
            "animated": e.motion == Motion::Animated,
            "wrapping": e.wrapping,
        }),
        EngineEvent::WrapCorrection(e) => json!({
            "seq": e.seq,
            "type": "wrap_correction",
            "from_track": e.from_track,
            "to_track": e.to_track,
            "real": e.real,
        }),
        EngineEvent::Gesture(e) => json!({
            "seq": e.seq,
            "type": "gesture",
            "kind": gesture_name(e.kind),
            "dx": e.dx,
        }),
        EngineEvent::ClickSuppressed(e) => json!({
            "seq": e.seq,
            "type": "click_suppressed",
        }),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use slidetrack_core::engine::Carousel;
    use slidetrack_core::trace::{TraceSink as _, Tracer};

    use super::*;
    use crate::recorder::RecorderSink;

    fn record_drag() -> Vec<u8> {
        let mut carousel = Carousel::builder(4).build().unwrap();
        let _ = carousel.evaluate();
        carousel.pointer_down(Point::new(300.0, 10.0), 400.0);
        carousel.pointer_move(Point::new(250.0, 10.0));
        carousel.pointer_up(Point::new(200.0, 10.0));
        carousel.take_click_suppression();

        let mut rec = RecorderSink::new();
        let changes = carousel.evaluate();
        Tracer::new(&mut rec).events(&changes.events);
        rec.into_bytes()
    }

    #[test]
    fn drag_session_exports_in_order() {
        let value = to_value(&record_drag());
        let types: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["type"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(
            types,
            ["gesture", "gesture", "gesture", "navigate", "click_suppressed"]
        );
        assert_eq!(value[2]["kind"], "committed-forward");
        assert_eq!(value[2]["dx"], -100.0);
        assert_eq!(value[3]["cause"], "drag-commit");
        assert_eq!(value[3]["to_real"], 1);
    }

    #[test]
    fn export_writes_parseable_json() {
        let mut rec = RecorderSink::new();
        rec.on_click_suppressed(&slidetrack_core::trace::ClickSuppressedEvent { seq: 9 });
        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, json!([{ "seq": 9, "type": "click_suppressed" }]));
    }
}
