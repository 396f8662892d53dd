// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Next-frame transform writes.
//!
//! An animated move sets the track's `transition` right away and its
//! `transform` one animation frame later. Writing both in the same task lets
//! the browser coalesce them with a preceding `transition: none` write, and
//! the move would jump instead of animate.
//!
//! [`NextFrame`] holds at most one pending write. Every request or cancel
//! bumps a generation counter; the frame callback applies the pending write
//! only if its generation is still current.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

type FrameClosure = Closure<dyn FnMut(f64)>;

struct PendingWrite {
    generation: u64,
    transform: String,
}

struct FrameInner {
    /// The JS closure registered with `requestAnimationFrame`, created once
    /// and reused for every request.
    closure: RefCell<Option<FrameClosure>>,
    track: HtmlElement,
    pending: RefCell<Option<PendingWrite>>,
    generation: Cell<u64>,
    /// The ID of the outstanding `requestAnimationFrame` call, if any.
    raf_id: Cell<Option<i32>>,
}

impl FrameInner {
    fn fire(&self) {
        self.raf_id.set(None);
        let Some(write) = self.pending.borrow_mut().take() else {
            return;
        };
        if write.generation != self.generation.get() {
            return;
        }
        let _ = self
            .track
            .style()
            .set_property("transform", &write.transform);
    }
}

/// One-shot `requestAnimationFrame` writer for the track's transform.
pub(crate) struct NextFrame {
    inner: Rc<FrameInner>,
}

impl NextFrame {
    pub(crate) fn new(track: HtmlElement) -> Self {
        let inner = Rc::new(FrameInner {
            closure: RefCell::new(None),
            track,
            pending: RefCell::new(None),
            generation: Cell::new(0),
            raf_id: Cell::new(None),
        });

        let cb_inner = Rc::clone(&inner);
        let closure = Closure::wrap(Box::new(move |_timestamp_ms: f64| {
            cb_inner.fire();
        }) as Box<dyn FnMut(f64)>);
        *inner.closure.borrow_mut() = Some(closure);

        Self { inner }
    }

    /// Writes `transform` on the next animation frame, replacing any write
    /// still pending.
    pub(crate) fn request(&self, transform: String) {
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        *self.inner.pending.borrow_mut() = Some(PendingWrite {
            generation,
            transform,
        });

        if self.inner.raf_id.get().is_none()
            && let Some(ref closure) = *self.inner.closure.borrow()
        {
            let id = request_animation_frame(closure.as_ref().unchecked_ref());
            self.inner.raf_id.set(Some(id));
        }
    }

    /// Drops any pending write.
    pub(crate) fn cancel(&self) {
        self.inner.generation.set(self.inner.generation.get() + 1);
        if let Some(id) = self.inner.raf_id.take() {
            cancel_animation_frame(id);
        }
    }

    /// Returns `true` while a write waits for the next frame.
    pub(crate) fn is_pending(&self) -> bool {
        self.inner
            .pending
            .borrow()
            .as_ref()
            .is_some_and(|write| write.generation == self.inner.generation.get())
    }
}

impl Drop for NextFrame {
    fn drop(&mut self) {
        self.cancel();
        // The closure holds an `Rc` to `inner`; drop it to break the cycle.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for NextFrame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NextFrame")
            .field("generation", &self.inner.generation.get())
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}
