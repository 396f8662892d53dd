// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard input understood by the carousel.

/// A key the carousel reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `ArrowLeft`: previous slide.
    ArrowLeft,
    /// `ArrowRight`: next slide.
    ArrowRight,
    /// `Enter`: activate the focused indicator.
    Enter,
    /// Space bar: activate the focused indicator.
    Space,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    ///
    /// Returns `None` for keys the carousel ignores.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Self::ArrowLeft),
            "ArrowRight" | "Right" => Some(Self::ArrowRight),
            "Enter" => Some(Self::Enter),
            " " | "Spacebar" => Some(Self::Space),
            _ => None,
        }
    }

    /// Whether this key activates an indicator.
    #[must_use]
    pub const fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_keys() {
        assert_eq!(Key::from_dom_key("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_dom_key("ArrowRight"), Some(Key::ArrowRight));
        assert_eq!(Key::from_dom_key("Enter"), Some(Key::Enter));
        assert_eq!(Key::from_dom_key(" "), Some(Key::Space));
        assert_eq!(Key::from_dom_key("Tab"), None);
        assert_eq!(Key::from_dom_key("a"), None);
    }

    #[test]
    fn activation_keys() {
        assert!(Key::Enter.is_activation());
        assert!(Key::Space.is_activation());
        assert!(!Key::ArrowLeft.is_activation());
    }
}
