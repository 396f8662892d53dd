// Copyright 2026 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TrendScope product slider.
//!
//! Attaches a carousel to `#product-slider` and binds the product cards
//! below it as indicators. A page without the slider markup is left as it
//! is.
//!
//! Build with: `wasm-pack build --target web demos/product_slider`
//! Then serve `demos/product_slider/` and open `index.html`.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use slidetrack_backend_web::{Markup, mount};
use slidetrack_core::config::CarouselConfig;
use wasm_bindgen::JsCast as _;
use web_sys::HtmlElement;

const CONTAINER_ID: &str = "product-slider";

/// Entry point for the product-slider demo.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen::prelude::wasm_bindgen(start))]
pub fn main() {
    let Some(container) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONTAINER_ID))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    // Missing track or slides: keep the static markup.
    let Ok(slider) = mount(&container, &Markup::trendscope(), CarouselConfig::standard()) else {
        return;
    };

    #[cfg(feature = "trace")]
    slider.set_trace_sink(alloc::boxed::Box::new(
        slidetrack_backend_web::ConsoleSink::new(CONTAINER_ID),
    ));

    slider.forget();
}
