// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Real/track index mapping.
//!
//! A carousel with `N` authored slides mounts a track of `N + 2` slots:
//!
//! ```text
//!   track:  0            1        2        …  N          N+1
//!           clone(N-1)   real 0   real 1   …  real N-1   clone(0)
//! ```
//!
//! Every conversion between the two index spaces goes through
//! [`TrackLayout`]. Callers never add or subtract the clone offset by hand.

use core::fmt;

/// Shape of a clone-padded track for a fixed number of real slides.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackLayout {
    real_count: u32,
}

impl TrackLayout {
    /// Creates a layout for `real_count` slides.
    ///
    /// Returns `None` when `real_count` is zero; an empty carousel has no
    /// track to lay out.
    #[must_use]
    pub const fn new(real_count: u32) -> Option<Self> {
        if real_count == 0 {
            None
        } else {
            Some(Self { real_count })
        }
    }

    /// Number of authored slides.
    #[inline]
    #[must_use]
    pub const fn real_count(self) -> u32 {
        self.real_count
    }

    /// Number of mounted slots, clones included.
    #[inline]
    #[must_use]
    pub const fn track_len(self) -> u32 {
        self.real_count + 2
    }

    /// Index of the last real slide.
    #[inline]
    #[must_use]
    pub const fn last_real(self) -> u32 {
        self.real_count - 1
    }

    /// Track slot of the clone of the last real slide.
    #[inline]
    #[must_use]
    pub const fn leading_clone(self) -> u32 {
        0
    }

    /// Track slot of the clone of the first real slide.
    #[inline]
    #[must_use]
    pub const fn trailing_clone(self) -> u32 {
        self.real_count + 1
    }

    /// Maps a real index to its track slot.
    ///
    /// `real` must already be in range; use [`clamp_real`](Self::clamp_real)
    /// for untrusted input.
    #[inline]
    #[must_use]
    pub const fn real_to_track(self, real: u32) -> u32 {
        debug_assert!(real < self.real_count, "real index out of range");
        real + 1
    }

    /// Maps a track slot to the real slide it shows.
    ///
    /// Clone slots map to the slide they duplicate. Slots past the end of
    /// the track saturate to the trailing clone.
    #[inline]
    #[must_use]
    pub const fn track_to_real(self, track: u32) -> u32 {
        if track == 0 {
            self.last_real()
        } else if track > self.real_count {
            0
        } else {
            track - 1
        }
    }

    /// Returns `true` if `track` is one of the two clone slots.
    #[inline]
    #[must_use]
    pub const fn is_clone(self, track: u32) -> bool {
        track == 0 || track > self.real_count
    }

    /// Clamps an arbitrary requested index into `[0, N-1]`.
    #[must_use]
    pub fn clamp_real(self, requested: i64) -> u32 {
        let last = i64::from(self.last_real());
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "value is clamped into [0, u32 slide count)"
        )]
        let real = requested.clamp(0, last) as u32;
        real
    }

    /// Returns the slot at `track`, or `None` past the end of the track.
    #[must_use]
    pub const fn slot(self, track: u32) -> Option<TrackSlot> {
        if track < self.track_len() {
            Some(self.slot_in_range(track))
        } else {
            None
        }
    }

    /// Iterates over all track slots in mount order.
    pub fn slots(self) -> impl ExactSizeIterator<Item = TrackSlot> {
        (0..self.track_len()).map(move |track| self.slot_in_range(track))
    }

    const fn slot_in_range(self, track: u32) -> TrackSlot {
        if track == 0 {
            TrackSlot::LeadingClone(self.last_real())
        } else if track <= self.real_count {
            TrackSlot::Real(track - 1)
        } else {
            TrackSlot::TrailingClone(0)
        }
    }
}

impl fmt::Debug for TrackLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrackLayout({} real, {} track)", self.real_count, self.track_len())
    }
}

/// What occupies one position of the mounted track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrackSlot {
    /// Structural duplicate of the last real slide, mounted first.
    LeadingClone(u32),
    /// An authored slide with its real index.
    Real(u32),
    /// Structural duplicate of the first real slide, mounted last.
    TrailingClone(u32),
}

impl TrackSlot {
    /// The real slide this slot shows.
    #[must_use]
    pub const fn real(self) -> u32 {
        match self {
            Self::LeadingClone(r) | Self::Real(r) | Self::TrailingClone(r) => r,
        }
    }

    /// Returns `true` for clone slots.
    #[must_use]
    pub const fn is_clone(self) -> bool {
        !matches!(self, Self::Real(_))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn empty_layout_is_rejected() {
        assert!(TrackLayout::new(0).is_none());
    }

    #[test]
    fn real_and_track_are_offset_by_one() {
        let layout = TrackLayout::new(4).unwrap();
        for real in 0..4 {
            let track = layout.real_to_track(real);
            assert_eq!(track, real + 1);
            assert_eq!(layout.track_to_real(track), real);
            assert!(!layout.is_clone(track));
        }
    }

    #[test]
    fn clones_map_to_the_slides_they_duplicate() {
        let layout = TrackLayout::new(4).unwrap();
        assert_eq!(layout.leading_clone(), 0);
        assert_eq!(layout.trailing_clone(), 5);
        assert_eq!(layout.track_to_real(0), 3);
        assert_eq!(layout.track_to_real(5), 0);
        assert!(layout.is_clone(0));
        assert!(layout.is_clone(5));
    }

    #[test]
    fn clamp_real_never_leaves_range() {
        let layout = TrackLayout::new(4).unwrap();
        assert_eq!(layout.clamp_real(-5), 0);
        assert_eq!(layout.clamp_real(14), 3);
        assert_eq!(layout.clamp_real(2), 2);
        assert_eq!(layout.clamp_real(i64::MIN), 0);
        assert_eq!(layout.clamp_real(i64::MAX), 3);
    }

    #[test]
    fn slots_follow_mount_order() {
        let layout = TrackLayout::new(3).unwrap();
        let slots: Vec<_> = layout.slots().collect();
        assert_eq!(
            slots,
            [
                TrackSlot::LeadingClone(2),
                TrackSlot::Real(0),
                TrackSlot::Real(1),
                TrackSlot::Real(2),
                TrackSlot::TrailingClone(0),
            ]
        );
        assert_eq!(layout.slot(5), None);
    }

    #[test]
    fn single_slide_has_both_clones_of_itself() {
        let layout = TrackLayout::new(1).unwrap();
        assert_eq!(layout.track_len(), 3);
        assert_eq!(layout.track_to_real(0), 0);
        assert_eq!(layout.track_to_real(2), 0);
        assert_eq!(layout.real_to_track(0), 1);
    }
}
