// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Motion and gesture constants.
//!
//! The values are fixed at compile time. [`CarouselConfig`] exists so that
//! backends and tests receive them as one value instead of reaching for the
//! constants individually.

use alloc::format;
use alloc::string::String;
use core::fmt;

/// Duration of an animated track transition, in milliseconds.
pub const TRANSITION_DURATION_MS: u32 = 520;

/// Ease-out curve used for track transitions.
pub const DEFAULT_EASING: Easing = Easing::CubicBezier(0.22, 0.61, 0.36, 1.0);

/// Fraction of the container width a drag must exceed to commit.
pub const COMMIT_FRACTION: f64 = 0.18;

/// Pointer movement (logical pixels) before a press becomes a drag.
pub const DRAG_SLOP_PX: f64 = 6.0;

/// A CSS timing function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// `linear`.
    Linear,
    /// `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f64, f64, f64, f64),
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Linear => f.write_str("linear"),
            Self::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

/// How the track animates between positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionSpec {
    /// Transition duration in milliseconds.
    pub duration_ms: u32,
    /// Timing function.
    pub easing: Easing,
}

impl TransitionSpec {
    /// The value for the CSS `transition` property of the track.
    #[must_use]
    pub fn css(&self) -> String {
        format!("transform {}ms {}", self.duration_ms, self.easing)
    }
}

/// Configuration handed to a [`Carousel`](crate::engine::Carousel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Track transition used for animated moves.
    pub transition: TransitionSpec,
    /// Fraction of the container width a drag must exceed to commit to the
    /// neighbouring slide.
    pub commit_fraction: f64,
    /// Movement in logical pixels before a press is classified as a drag.
    pub drag_slop: f64,
}

impl CarouselConfig {
    /// The product-slider defaults.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            transition: TransitionSpec {
                duration_ms: TRANSITION_DURATION_MS,
                easing: DEFAULT_EASING,
            },
            commit_fraction: COMMIT_FRACTION,
            drag_slop: DRAG_SLOP_PX,
        }
    }

    /// Drag distance in pixels that commits a move for a container of the
    /// given width.
    #[must_use]
    pub fn commit_distance(&self, container_width: f64) -> f64 {
        container_width * self.commit_fraction
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use kurbo::common::FloatFuncs as _;

    use super::*;

    #[test]
    fn standard_transition_css() {
        let config = CarouselConfig::standard();
        assert_eq!(
            config.transition.css(),
            "transform 520ms cubic-bezier(0.22, 0.61, 0.36, 1)"
        );
    }

    #[test]
    fn commit_distance_scales_with_width() {
        let config = CarouselConfig::default();
        let d = config.commit_distance(400.0);
        assert!((d - 72.0).abs() < 1e-9, "got {d}");
    }

    #[test]
    fn linear_easing_display() {
        let spec = TransitionSpec {
            duration_ms: 100,
            easing: Easing::Linear,
        };
        assert_eq!(spec.css(), "transform 100ms linear");
    }
}
