// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! The engine tracks which elements need their "active" marker refreshed
//! with [`understory_dirty`]. Keys are `u32` slot indices; each channel has
//! its own key space.
//!
//! - [`SLIDE_ACTIVE`]: keyed by track slot (clones included).
//! - [`INDICATOR_ACTIVE`]: keyed by indicator slot, in bind order.
//!
//! Both channels are local-only: marking one slot never marks another.
//! The track offset is a single value and is tracked outside the dirty
//! tracker.
//!
//! # Consumption
//!
//! Callers never query dirty state directly. Each
//! [`Carousel::evaluate`](crate::engine::Carousel::evaluate) call drains
//! both channels into [`TrackChanges`](crate::engine::TrackChanges), which
//! presenters [consume](crate::backend::Presenter::apply).

use understory_dirty::Channel;

/// A track slot gained or lost the active marker.
pub const SLIDE_ACTIVE: Channel = Channel::new(0);

/// An indicator gained or lost the active marker.
pub const INDICATOR_ACTIVE: Channel = Channel::new(1);
