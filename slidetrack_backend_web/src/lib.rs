// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for slidetrack.
//!
//! This crate attaches the [`Carousel`] engine to existing page markup:
//!
//! - [`mount`]: builds clone slides, binds pointer, click, key and
//!   `transitionend` listeners, and returns a [`MountedSlider`]
//! - [`DomPresenter`]: writes the track transform and toggles active markers
//! - [`Markup`]: the selectors and class names a page uses
//!
//! Animated moves set the CSS transition immediately and the transform on
//! the next `requestAnimationFrame`, so the browser never coalesces them with
//! a preceding instant write.
//!
//! ```rust,ignore
//! let container: HtmlElement = document
//!     .get_element_by_id("product-slider")
//!     .ok_or(MountError::NoTrack)?
//!     .unchecked_into();
//! mount(&container, &Markup::trendscope(), CarouselConfig::standard())?.forget();
//! ```
//!
//! # Crate features
//!
//! - `console-trace` (disabled by default): Enables [`ConsoleSink`] and the
//!   core `trace` feature.
//!
//! [`Carousel`]: slidetrack_core::engine::Carousel

#![no_std]

extern crate alloc;

#[cfg(feature = "console-trace")]
mod console;
mod frame;
mod markup;
mod mount;
mod pointer;
mod presenter;

#[cfg(feature = "console-trace")]
pub use console::ConsoleSink;
pub use markup::{IndicatorScope, Markup};
pub use mount::{MountError, MountedSlider, mount};
pub use presenter::DomPresenter;
pub use slidetrack_core::backend::Presenter;
