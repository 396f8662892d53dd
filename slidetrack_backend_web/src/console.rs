// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trace sink that logs to the browser console.

use alloc::format;
use alloc::string::String;

use slidetrack_core::trace::{
    ClickSuppressedEvent, GestureEvent, NavigateEvent, TraceSink, WrapCorrectionEvent,
};
use wasm_bindgen::JsValue;

/// Writes one `console.debug` line per engine event.
#[derive(Clone, Debug)]
pub struct ConsoleSink {
    label: String,
}

impl ConsoleSink {
    /// Creates a sink that prefixes every line with `[label]`.
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            label: label.into(),
        }
    }

    fn log(&self, line: &str) {
        web_sys::console::debug_1(&JsValue::from_str(&format!("[{}] {line}", self.label)));
    }
}

impl TraceSink for ConsoleSink {
    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.log(&format!(
            "#{} navigate {:?} {} -> {} track={} {:?}{}",
            e.seq,
            e.cause,
            e.from_real,
            e.to_real,
            e.track_index,
            e.motion,
            if e.wrapping { " wrapping" } else { "" },
        ));
    }

    fn on_wrap_correction(&mut self, e: &WrapCorrectionEvent) {
        self.log(&format!(
            "#{} wrap-correction track {} -> {} real={}",
            e.seq, e.from_track, e.to_track, e.real
        ));
    }

    fn on_gesture(&mut self, e: &GestureEvent) {
        self.log(&format!("#{} gesture {:?} dx={:.1}", e.seq, e.kind, e.dx));
    }

    fn on_click_suppressed(&mut self, e: &ClickSuppressedEvent) {
        self.log(&format!("#{} click suppressed", e.seq));
    }
}
