// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track transforms.
//!
//! At rest the track is shifted by whole slide widths, expressed as a
//! percentage so that resizes need no re-layout. While a drag delta is
//! applied the offset switches to pixels, using the container width that
//! was captured when the gesture started.

use alloc::format;
use alloc::string::String;

/// Whether a position change is animated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Motion {
    /// Applied with transitions disabled.
    Instant,
    /// Applied with the configured CSS transition.
    Animated,
}

impl Motion {
    /// Maps the `animate` flag used by callers that speak booleans.
    #[must_use]
    pub const fn from_animate(animate: bool) -> Self {
        if animate { Self::Animated } else { Self::Instant }
    }
}

/// Horizontal displacement of the track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackOffset {
    /// Track slot aligned with the viewport.
    pub track_index: u32,
    /// Transient drag delta in pixels; positive moves the track right.
    pub drag_px: f64,
    /// Container width in pixels, used only when `drag_px` is non-zero.
    pub width_px: f64,
}

impl TrackOffset {
    /// An offset resting on `track_index`.
    #[must_use]
    pub const fn at_rest(track_index: u32) -> Self {
        Self {
            track_index,
            drag_px: 0.0,
            width_px: 0.0,
        }
    }

    /// Whether a drag delta is applied.
    #[must_use]
    pub fn is_dragged(&self) -> bool {
        self.drag_px != 0.0
    }

    /// Resting offset as a percentage of one slide width (`-(track * 100)`).
    #[must_use]
    pub fn percent(&self) -> f64 {
        0.0 - f64::from(self.track_index) * 100.0
    }

    /// Dragged offset in pixels (`-(track * width) + dx`).
    #[must_use]
    pub fn pixels(&self) -> f64 {
        0.0 - f64::from(self.track_index) * self.width_px + self.drag_px
    }

    /// The value for the CSS `transform` property of the track.
    #[must_use]
    pub fn css(&self) -> String {
        if self.is_dragged() {
            format!("translate3d({}px, 0, 0)", self.pixels())
        } else {
            format!("translate3d({}%, 0, 0)", self.percent())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_offset_uses_percent() {
        assert_eq!(TrackOffset::at_rest(0).css(), "translate3d(0%, 0, 0)");
        assert_eq!(TrackOffset::at_rest(1).css(), "translate3d(-100%, 0, 0)");
        assert_eq!(TrackOffset::at_rest(3).css(), "translate3d(-300%, 0, 0)");
    }

    #[test]
    fn dragged_offset_uses_pixels() {
        let offset = TrackOffset {
            track_index: 2,
            drag_px: -100.0,
            width_px: 400.0,
        };
        assert!(offset.is_dragged());
        assert_eq!(offset.pixels(), -900.0);
        assert_eq!(offset.css(), "translate3d(-900px, 0, 0)");
    }

    #[test]
    fn motion_from_flag() {
        assert_eq!(Motion::from_animate(true), Motion::Animated);
        assert_eq!(Motion::from_animate(false), Motion::Instant);
    }
}
