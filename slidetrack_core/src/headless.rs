// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A presenter that records what a browser would show.
//!
//! [`HeadlessPresenter`] keeps the last track transform, whether a
//! transition was enabled for it, and the active marker of every slide and
//! indicator slot. It never touches a DOM, which makes it the renderer
//! double for engine tests and for replaying recorded sessions.

use alloc::string::String;
use alloc::vec::Vec;

use crate::backend::{Presenter, Settle};
use crate::engine::{Carousel, TrackChanges};
use crate::offset::Motion;

/// Records presented state without a platform tree.
#[derive(Clone, Debug)]
pub struct HeadlessPresenter {
    settle: Settle,
    transform: Option<String>,
    transition_enabled: bool,
    slides: Vec<bool>,
    indicators: Vec<bool>,
    apply_count: u32,
    animated_count: u32,
}

impl HeadlessPresenter {
    /// A presenter whose animations complete as soon as they are applied.
    #[must_use]
    pub fn immediate() -> Self {
        Self::with_settle(Settle::Immediate)
    }

    /// A presenter that waits for an explicit
    /// [`Slider::transition_end`](crate::backend::Slider::transition_end).
    #[must_use]
    pub fn deferred() -> Self {
        Self::with_settle(Settle::OnTransitionEnd)
    }

    fn with_settle(settle: Settle) -> Self {
        Self {
            settle,
            transform: None,
            transition_enabled: false,
            slides: Vec::new(),
            indicators: Vec::new(),
            apply_count: 0,
            animated_count: 0,
        }
    }

    /// The last CSS transform written to the track.
    #[must_use]
    pub fn transform(&self) -> Option<&str> {
        self.transform.as_deref()
    }

    /// Whether the last transform write had a transition enabled.
    #[must_use]
    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    /// Track slots carrying the active marker, ascending.
    pub fn active_slides(&self) -> impl Iterator<Item = u32> + '_ {
        active(&self.slides)
    }

    /// Indicator slots carrying the active marker, ascending.
    pub fn active_indicators(&self) -> impl Iterator<Item = u32> + '_ {
        active(&self.indicators)
    }

    /// Number of non-empty change sets applied.
    #[must_use]
    pub fn apply_count(&self) -> u32 {
        self.apply_count
    }

    /// Number of animated transform writes.
    #[must_use]
    pub fn animated_count(&self) -> u32 {
        self.animated_count
    }
}

fn active(markers: &[bool]) -> impl Iterator<Item = u32> + '_ {
    (0_u32..)
        .zip(markers)
        .filter_map(|(slot, &on)| on.then_some(slot))
}

fn set_marker(markers: &mut Vec<bool>, slot: u32, on: bool) {
    let idx = slot as usize;
    if idx >= markers.len() {
        markers.resize(idx + 1, false);
    }
    markers[idx] = on;
}

impl Presenter for HeadlessPresenter {
    fn apply(&mut self, carousel: &Carousel, changes: &TrackChanges) -> Settle {
        self.apply_count += 1;

        if let Some(change) = changes.offset {
            self.transform = Some(change.offset.css());
            self.transition_enabled = change.motion == Motion::Animated;
            if self.transition_enabled {
                self.animated_count += 1;
            }
        }
        for &slot in &changes.slides {
            set_marker(&mut self.slides, slot, carousel.is_slide_active(slot));
        }
        for &slot in &changes.indicators {
            set_marker(
                &mut self.indicators,
                slot,
                carousel.is_indicator_active(slot),
            );
        }

        self.settle
    }
}
