// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM presentation.
//!
//! Translates [`Carousel`] state into track styles and active markers by
//! applying incremental updates from [`TrackChanges`].
//!
//! [`Carousel`]: slidetrack_core::engine::Carousel
//! [`TrackChanges`]: slidetrack_core::engine::TrackChanges

use alloc::string::String;
use alloc::vec::Vec;

use slidetrack_core::backend::{Presenter, Settle};
use slidetrack_core::config::CarouselConfig;
use slidetrack_core::engine::{Carousel, TrackChanges};
use slidetrack_core::offset::Motion;
use web_sys::HtmlElement;

use crate::frame::NextFrame;

/// Writes track transforms and toggles active markers on live DOM elements.
///
/// Slides are held in track order, clones included, so that slot `i` of a
/// [`TrackChanges`] maps to `slides[i]`. Indicators are held in the order
/// they were bound.
///
/// Animated moves complete when the browser fires `transitionend`, so
/// [`apply`](Presenter::apply) always reports [`Settle::OnTransitionEnd`].
pub struct DomPresenter {
    track: HtmlElement,
    slides: Vec<HtmlElement>,
    indicators: Vec<HtmlElement>,
    active_class: String,
    transition: String,
    frame: NextFrame,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("track", &"HtmlElement")
            .field("slides_len", &self.slides.len())
            .field("indicators_len", &self.indicators.len())
            .field("active_class", &self.active_class)
            .field("frame", &self.frame)
            .finish()
    }
}

impl DomPresenter {
    /// Creates a presenter over an already prepared track.
    #[must_use]
    pub fn new(
        track: HtmlElement,
        slides: Vec<HtmlElement>,
        indicators: Vec<HtmlElement>,
        active_class: &str,
        config: &CarouselConfig,
    ) -> Self {
        Self {
            frame: NextFrame::new(track.clone()),
            track,
            slides,
            indicators,
            active_class: active_class.into(),
            transition: config.transition.css(),
        }
    }

    /// Returns the track element.
    #[must_use]
    pub fn track(&self) -> &HtmlElement {
        &self.track
    }

    /// Returns the slide element at track slot `slot`.
    #[must_use]
    pub fn slide(&self, slot: u32) -> Option<&HtmlElement> {
        self.slides.get(slot as usize)
    }

    /// Returns the indicator element at `slot`.
    #[must_use]
    pub fn indicator(&self, slot: u32) -> Option<&HtmlElement> {
        self.indicators.get(slot as usize)
    }
}

impl Presenter for DomPresenter {
    fn apply(&mut self, carousel: &Carousel, changes: &TrackChanges) -> Settle {
        // 1. Track position
        if let Some(change) = changes.offset {
            let css = change.offset.css();
            let style = self.track.style();
            match change.motion {
                Motion::Instant => {
                    self.frame.cancel();
                    let _ = style.set_property("transition", "none");
                    let _ = style.set_property("transform", &css);
                }
                Motion::Animated => {
                    let _ = style.set_property("transition", &self.transition);
                    self.frame.request(css);
                }
            }
        }

        // 2. Slide markers
        for &slot in &changes.slides {
            if let Some(el) = self.slide(slot) {
                let _ = el
                    .class_list()
                    .toggle_with_force(&self.active_class, carousel.is_slide_active(slot));
            }
        }

        // 3. Indicator markers
        for &slot in &changes.indicators {
            if let Some(el) = self.indicator(slot) {
                let on = carousel.is_indicator_active(slot);
                let _ = el.class_list().toggle_with_force(&self.active_class, on);
                if on {
                    let _ = el.set_attribute("aria-current", "true");
                } else {
                    let _ = el.remove_attribute("aria-current");
                }
            }
        }

        Settle::OnTransitionEnd
    }
}
