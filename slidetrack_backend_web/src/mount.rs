// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attaching a carousel to existing markup.
//!
//! [`mount`] prepares the track (clones, drag suppression, focusability),
//! builds the engine and wires every browser event the carousel consumes:
//!
//! | target     | event                                   | engine call                  |
//! |------------|-----------------------------------------|------------------------------|
//! | container  | `pointerdown` / `move` / `up` / `cancel` | `pointer_*` (armed pointer only) |
//! | container  | `click` (capture)                       | `take_click_suppression`     |
//! | container  | `keydown`                               | `key_down`                   |
//! | track      | `dragstart`                             | prevented                    |
//! | track      | `transitionend` (`transform`, self)     | `transition_end`             |
//! | indicator  | `click` / `keydown`                     | `activate_indicator` / `indicator_key` |

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use kurbo::Point;
use slidetrack_core::backend::Slider;
use slidetrack_core::config::CarouselConfig;
use slidetrack_core::engine::{BuildError, Carousel};
use slidetrack_core::gesture::MoveOutcome;
use slidetrack_core::input::Key;
use slidetrack_core::trace::TraceSink;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Event, EventTarget, HtmlElement, KeyboardEvent, NodeList, PointerEvent, TransitionEvent,
};

use crate::markup::{IndicatorScope, Markup, parse_index};
use crate::pointer::PointerTracker;
use crate::presenter::DomPresenter;

type SharedSlider = Rc<RefCell<Slider<DomPresenter>>>;

/// Errors from [`mount`].
///
/// Pages usually discard these and leave the markup as authored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountError {
    /// No element matched the track selector.
    NoTrack,
    /// The track has no real slides.
    NoSlides,
    /// A DOM call failed.
    Dom(String),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTrack => f.write_str("carousel track not found"),
            Self::NoSlides => f.write_str("carousel track has no slides"),
            Self::Dom(msg) => write!(f, "DOM call failed: {msg}"),
        }
    }
}

impl core::error::Error for MountError {}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<BuildError> for MountError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::NoSlides => Self::NoSlides,
        }
    }
}

/// A registered event listener, removed again on drop.
struct Listener {
    target: EventTarget,
    event: &'static str,
    capture: bool,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn bind(
        target: &EventTarget,
        event: &'static str,
        capture: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback_and_bool(
            event,
            closure.as_ref().unchecked_ref(),
            capture,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            capture,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.event,
            self.closure.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

/// A carousel attached to the page.
///
/// Dropping it removes its listeners and clone slides. Call
/// [`forget`](Self::forget) to keep it for the lifetime of the page.
pub struct MountedSlider {
    slider: SharedSlider,
    clones: [HtmlElement; 2],
    listeners: Vec<Listener>,
}

impl fmt::Debug for MountedSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountedSlider")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl MountedSlider {
    /// Runs `f` with the driver, e.g. to navigate from page code.
    pub fn with<R>(&self, f: impl FnOnce(&mut Slider<DomPresenter>) -> R) -> R {
        f(&mut self.slider.borrow_mut())
    }

    /// Routes engine events to `sink`.
    pub fn set_trace_sink(&self, sink: Box<dyn TraceSink>) {
        self.slider.borrow_mut().set_trace_sink(sink);
    }

    /// Keeps the carousel attached for the rest of the page's lifetime.
    pub fn forget(self) {
        core::mem::forget(self);
    }
}

impl Drop for MountedSlider {
    fn drop(&mut self) {
        for clone in &self.clones {
            clone.remove();
        }
    }
}

/// Attaches a carousel to `container`.
///
/// # Errors
///
/// Returns [`MountError::NoTrack`] or [`MountError::NoSlides`] when the
/// markup does not describe a carousel, and [`MountError::Dom`] when a DOM
/// call fails. Nothing is left attached on error.
pub fn mount(
    container: &HtmlElement,
    markup: &Markup,
    config: CarouselConfig,
) -> Result<MountedSlider, MountError> {
    let track: HtmlElement = container
        .query_selector(markup.track)?
        .ok_or(MountError::NoTrack)?
        .dyn_into()
        .map_err(|_| MountError::NoTrack)?;

    let reals = html_elements(&track.query_selector_all(&markup.slide_children())?);
    let (Some(first), Some(last)) = (reals.first(), reals.last()) else {
        return Err(MountError::NoSlides);
    };
    let initially_active = (0_u32..)
        .zip(&reals)
        .find_map(|(i, s)| s.class_list().contains(markup.active_class).then_some(i));

    // Track order: [clone(last), reals.., clone(first)].
    let leading = make_clone(last, markup)?;
    let trailing = make_clone(first, markup)?;
    let anchor: &web_sys::Node = first;
    track.insert_before(&leading, Some(anchor))?;
    track.append_child(&trailing)?;

    let mut slides = Vec::with_capacity(reals.len() + 2);
    slides.push(leading.clone());
    slides.extend(reals.iter().cloned());
    slides.push(trailing.clone());
    let clones = [leading, trailing];

    let mounted = attach(
        container,
        &track,
        slides,
        initially_active,
        markup,
        config,
        &clones,
    );
    if mounted.is_err() {
        for clone in &clones {
            clone.remove();
        }
    }
    let (slider, listeners) = mounted?;
    Ok(MountedSlider {
        slider,
        clones,
        listeners,
    })
}

fn attach(
    container: &HtmlElement,
    track: &HtmlElement,
    slides: Vec<HtmlElement>,
    initially_active: Option<u32>,
    markup: &Markup,
    config: CarouselConfig,
    clones: &[HtmlElement; 2],
) -> Result<(SharedSlider, Vec<Listener>), MountError> {
    for slide in &slides {
        slide.set_draggable(false);
        for img in html_elements(&slide.query_selector_all("img")?) {
            img.set_draggable(false);
        }
    }
    container.style().set_property("touch-action", "pan-y")?;
    if !container.has_attribute("tabindex") {
        container.set_tab_index(0);
    }

    let mut indicators = Vec::new();
    let mut bound = Vec::new();
    let candidates = match markup.indicator_scope {
        IndicatorScope::Document => match container.owner_document() {
            Some(doc) => html_elements(&doc.query_selector_all(markup.indicator)?),
            None => Vec::new(),
        },
        IndicatorScope::Container => {
            html_elements(&container.query_selector_all(markup.indicator)?)
        }
        IndicatorScope::Closest(selector) => match container.closest(selector)? {
            Some(root) => html_elements(&root.query_selector_all(markup.indicator)?),
            None => Vec::new(),
        },
    };
    for el in candidates {
        // Clones copy any indicator nested in a slide; bind originals only.
        let node: &web_sys::Node = &el;
        if clones.iter().any(|c| c.contains(Some(node))) {
            continue;
        }
        let Some(real) = el
            .get_attribute(markup.index_attribute)
            .as_deref()
            .and_then(parse_index)
        else {
            continue;
        };
        indicators.push(el);
        bound.push(real);
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "slide count is bounded by the DOM, far below u32::MAX"
    )]
    let real_count = (slides.len() - 2) as u32;
    let carousel = Carousel::builder(real_count)
        .initially_active(initially_active)
        .indicators(bound)
        .config(config)
        .build()?;

    let presenter = DomPresenter::new(
        track.clone(),
        slides,
        indicators.clone(),
        markup.active_class,
        &config,
    );
    let slider: SharedSlider = Rc::new(RefCell::new(Slider::new(carousel, presenter)));
    let listeners = bind_listeners(container, track, &indicators, &slider)?;
    Ok((slider, listeners))
}

fn bind_listeners(
    container: &HtmlElement,
    track: &HtmlElement,
    indicators: &[HtmlElement],
    slider: &SharedSlider,
) -> Result<Vec<Listener>, JsValue> {
    let container_target = EventTarget::from(container.clone());
    let track_target = EventTarget::from(track.clone());
    let mut listeners = Vec::new();

    let pointer = Rc::new(Cell::new(PointerTracker::default()));

    let s = Rc::clone(slider);
    let p = Rc::clone(&pointer);
    let el = container.clone();
    listeners.push(Listener::bind(&container_target, "pointerdown", false, move |event| {
        let Some(e) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        let mut tracker = p.get();
        let armed = tracker.press(e.pointer_id(), e.is_primary(), e.button());
        p.set(tracker);
        if armed {
            let width = f64::from(el.client_width());
            s.borrow_mut().pointer_down(client_point(e), width);
        }
    })?);

    let s = Rc::clone(slider);
    let p = Rc::clone(&pointer);
    let el = container.clone();
    listeners.push(Listener::bind(&container_target, "pointermove", false, move |event| {
        let Some(e) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        let mut tracker = p.get();
        if !tracker.owns(e.pointer_id()) {
            return;
        }
        let outcome = s.borrow_mut().pointer_move(client_point(e));
        // Capture only once dragging, so taps keep their click target.
        if tracker.should_capture(e.pointer_id(), outcome) {
            let _ = el.set_pointer_capture(e.pointer_id());
        }
        p.set(tracker);
        if matches!(outcome, MoveOutcome::Dragging { .. }) {
            event.prevent_default();
        }
    })?);

    let s = Rc::clone(slider);
    let p = Rc::clone(&pointer);
    listeners.push(Listener::bind(&container_target, "pointerup", false, move |event| {
        let Some(e) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        let mut tracker = p.get();
        if tracker.release(e.pointer_id()) {
            p.set(tracker);
            s.borrow_mut().pointer_up(client_point(e));
        }
    })?);

    let s = Rc::clone(slider);
    let p = Rc::clone(&pointer);
    listeners.push(Listener::bind(&container_target, "pointercancel", false, move |event| {
        let Some(e) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        let mut tracker = p.get();
        if tracker.release(e.pointer_id()) {
            p.set(tracker);
            s.borrow_mut().pointer_cancel();
        }
    })?);

    let s = Rc::clone(slider);
    listeners.push(Listener::bind(&container_target, "click", true, move |event| {
        if s.borrow_mut().take_click_suppression() {
            event.prevent_default();
            event.stop_propagation();
        }
    })?);

    let s = Rc::clone(slider);
    listeners.push(Listener::bind(&container_target, "keydown", false, move |event| {
        let Some(key) = event
            .dyn_ref::<KeyboardEvent>()
            .and_then(|e| Key::from_dom_key(&e.key()))
        else {
            return;
        };
        if s.borrow_mut().key_down(key) {
            event.prevent_default();
        }
    })?);

    listeners.push(Listener::bind(&track_target, "dragstart", false, |event| {
        event.prevent_default();
    })?);

    let s = Rc::clone(slider);
    let own = track_target.clone();
    listeners.push(Listener::bind(&track_target, "transitionend", false, move |event| {
        let Some(e) = event.dyn_ref::<TransitionEvent>() else {
            return;
        };
        let is_track = event.target().as_ref() == Some(&own);
        if settles_track(&e.property_name(), is_track) {
            s.borrow_mut().transition_end();
        }
    })?);

    for (slot, el) in (0_u32..).zip(indicators) {
        let target = EventTarget::from(el.clone());

        let s = Rc::clone(slider);
        listeners.push(Listener::bind(&target, "click", false, move |_| {
            s.borrow_mut().activate_indicator(slot);
        })?);

        let s = Rc::clone(slider);
        listeners.push(Listener::bind(&target, "keydown", false, move |event| {
            let Some(key) = event
                .dyn_ref::<KeyboardEvent>()
                .and_then(|e| Key::from_dom_key(&e.key()))
            else {
                return;
            };
            if s.borrow_mut().indicator_key(slot, key) {
                event.prevent_default();
            }
        })?);
    }

    Ok(listeners)
}

/// Whether a `transitionend` for `property` marks the end of a track move.
///
/// Transitions on slides bubble up to the track; only the track's own
/// transform counts.
fn settles_track(property: &str, is_track: bool) -> bool {
    is_track && property == "transform"
}

fn client_point(e: &PointerEvent) -> Point {
    Point::new(f64::from(e.client_x()), f64::from(e.client_y()))
}

/// Deep-clones `slide` and marks the copy as a clone.
fn make_clone(slide: &HtmlElement, markup: &Markup) -> Result<HtmlElement, JsValue> {
    let copy: HtmlElement = slide.clone_node_with_deep(true)?.unchecked_into();
    let classes = copy.class_list();
    classes.add_1(markup.clone_class)?;
    classes.remove_1(markup.active_class)?;
    copy.set_attribute("aria-hidden", "true")?;
    copy.remove_attribute("id")?;
    Ok(copy)
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString as _;

    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(MountError::NoTrack.to_string(), "carousel track not found");
        assert_eq!(
            MountError::NoSlides.to_string(),
            "carousel track has no slides"
        );
        assert_eq!(
            MountError::Dom("SyntaxError".into()).to_string(),
            "DOM call failed: SyntaxError"
        );
    }

    #[test]
    fn only_track_transform_settles() {
        assert!(settles_track("transform", true));
        assert!(!settles_track("opacity", true));
        // Bubbled from a slide.
        assert!(!settles_track("transform", false));
        assert!(!settles_track("opacity", false));
    }

    #[test]
    fn build_error_maps_to_no_slides() {
        assert_eq!(MountError::from(BuildError::NoSlides), MountError::NoSlides);
    }
}
