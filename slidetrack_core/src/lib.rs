// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position engine for infinitely wrapping slide carousels.
//!
//! `slidetrack_core` keeps the illusion of an endless horizontal strip of
//! slides using a finite track with one clone on each end. It is `no_std`
//! compatible (with `alloc`) and has no knowledge of the DOM: platform
//! backends feed it input and apply the changes it produces.
//!
//! # Architecture
//!
//! Every interaction follows the same compute-then-apply loop:
//!
//! ```text
//!   Backend (pointer, click, key, transition-end)
//!       │
//!       ▼
//!   Carousel::next() / pointer_move() / … ──► dirty state
//!                                                 │
//!                 ┌───────────────────────────────┘
//!                 ▼
//!   Carousel::evaluate() ──► TrackChanges ──► Presenter::apply()
//!                                                  │
//!                 ┌────────────────────────────────┘
//!                 ▼
//!   Settle::Immediate ──► Carousel::transition_settled()   (headless)
//!   Settle::OnTransitionEnd ──► wait for the native event  (browser)
//! ```
//!
//! **[`layout`]**: Real/track index mapping. The only place that knows
//! about the `+1` clone offset.
//!
//! **[`engine`]**: The [`Carousel`](engine::Carousel) state machine:
//! navigation, wrap correction, drag handling and indicator binding.
//!
//! **[`gesture`]**: Pointer gesture classification (slop, vertical scroll
//! detection, commit threshold, click suppression).
//!
//! **[`dirty`]**: Channels for active-marker change tracking via
//! `understory_dirty`.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait and the
//! [`Slider`](backend::Slider) driver that wires engine and presenter.
//!
//! **[`headless`]**: A DOM-free presenter that records what a browser
//! would show. Used by tests and diagnostics.
//!
//! **[`config`]** / **[`offset`]** / **[`input`]**: Motion constants, track
//! transforms and keyboard mapping.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! engine instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod config;
pub mod dirty;
pub mod engine;
pub mod gesture;
pub mod headless;
pub mod input;
pub mod layout;
pub mod offset;
pub mod trace;
