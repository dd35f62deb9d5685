// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for shuffle.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`Shuffle`]: a card stack widget bound to a container element, with
//!   optional previous/next buttons
//! - [`DomSurface`]: applies card state to `<img>` element styles and routes
//!   transition-end events
//! - [`TransitionSupport`]: CSS transition capability probe
//! - [`ConsoleSink`]: trace sink that logs to the browser console
//! - [`JsShuffle`]: the widget exported to JavaScript as `Shuffle`

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "the DOM glue only runs in the browser")
)]

extern crate alloc;

mod bindings;
mod console;
mod features;
mod surface;
mod widget;

pub use bindings::JsShuffle;
pub use console::ConsoleSink;
pub use features::TransitionSupport;
pub use shuffle_core::surface::CardSurface;
pub use surface::DomSurface;
pub use widget::{IMAGE_CONTAINER_CLASS, Shuffle};

use shuffle_core::time::HostTime;
use wasm_bindgen::prelude::*;

// Bound directly so events don't have to fetch the Window and Performance
// objects.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    fn performance_now() -> f64;
}

/// Returns the current host time from `performance.now()`.
///
/// The returned [`HostTime`] is in microsecond ticks.
#[must_use]
pub fn now() -> HostTime {
    HostTime::from_millis_f64(performance_now())
}
