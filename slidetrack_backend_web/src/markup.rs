// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selectors and class names that describe a carousel in the page.

use alloc::format;
use alloc::string::String;

/// How a carousel is laid out in the document.
///
/// Selectors are CSS selectors. `track` and `slide` are resolved relative to
/// the container (slides as direct children of the track); `indicator` is
/// resolved inside [`indicator_scope`](Self::indicator_scope), since
/// indicator cards usually live outside the carousel.
///
/// Pages with more than one carousel must give each instance a scope (or an
/// `indicator` selector) that only reaches its own cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Markup {
    /// Selects the track inside the container.
    pub track: &'static str,
    /// Selects real slides among the track's children.
    pub slide: &'static str,
    /// Selects indicator elements inside `indicator_scope`.
    pub indicator: &'static str,
    /// Where `indicator` is looked up.
    pub indicator_scope: IndicatorScope,
    /// Attribute holding an indicator's zero-based slide index.
    pub index_attribute: &'static str,
    /// Class marking the active slide and indicator.
    pub active_class: &'static str,
    /// Class added to the two clone slides.
    pub clone_class: &'static str,
}

impl Markup {
    /// The TrendScope product-slider markup.
    #[must_use]
    pub const fn trendscope() -> Self {
        Self {
            track: ".slider-track",
            slide: ".slide",
            indicator: ".product-card[data-slide-index]",
            indicator_scope: IndicatorScope::Document,
            index_attribute: "data-slide-index",
            active_class: "is-active",
            clone_class: "is-clone",
        }
    }

    /// Returns a copy that looks up indicators in `scope`.
    #[must_use]
    pub const fn with_indicator_scope(mut self, scope: IndicatorScope) -> Self {
        self.indicator_scope = scope;
        self
    }

    /// Selector for real slides as direct children of the track.
    pub(crate) fn slide_children(&self) -> String {
        format!(":scope > {}", self.slide)
    }
}

/// The subtree searched for indicators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorScope {
    /// The container's whole document.
    Document,
    /// The carousel container itself.
    Container,
    /// The nearest ancestor of the container (or the container) matching
    /// this selector. No indicators are bound if nothing matches.
    Closest(&'static str),
}

impl Default for Markup {
    fn default() -> Self {
        Self::trendscope()
    }
}

/// Parses an indicator's index attribute.
///
/// Negative values clamp to 0; the engine clamps the upper end. Values that
/// are not integers yield `None` and the element is not bound.
pub(crate) fn parse_index(raw: &str) -> Option<u32> {
    let value = raw.trim().parse::<i64>().ok()?;
    Some(u32::try_from(value.max(0)).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trendscope_is_default() {
        assert_eq!(Markup::default(), Markup::trendscope());
    }

    #[test]
    fn indicator_scope_can_be_narrowed() {
        let page = Markup::trendscope();
        assert_eq!(page.indicator_scope, IndicatorScope::Document);
        let section = page.with_indicator_scope(IndicatorScope::Closest("section"));
        assert_eq!(section.indicator_scope, IndicatorScope::Closest("section"));
        assert_eq!(section.indicator, page.indicator);
    }

    #[test]
    fn slides_are_scoped_to_track_children() {
        assert_eq!(Markup::trendscope().slide_children(), ":scope > .slide");
    }

    #[test]
    fn index_attribute_parsing() {
        assert_eq!(parse_index("2"), Some(2));
        assert_eq!(parse_index(" 7 "), Some(7));
        assert_eq!(parse_index("-3"), Some(0));
        assert_eq!(parse_index("99999999999"), Some(u32::MAX));
        assert_eq!(parse_index("two"), None);
        assert_eq!(parse_index(""), None);
    }
}
