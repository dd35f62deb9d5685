// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JavaScript entry point.
//!
//! ```js
//! import init, { Shuffle } from "./pkg/shuffle.js";
//! await init();
//! const stack = new Shuffle("#gallery", true, true);
//! stack.advance();
//! ```

use alloc::vec::Vec;

use shuffle_core::config::StackConfig;
use wasm_bindgen::prelude::*;

use crate::widget::Shuffle;

/// A [`Shuffle`] widget exported to JavaScript as `Shuffle`.
#[wasm_bindgen(js_name = Shuffle)]
#[derive(Debug)]
pub struct JsShuffle {
    widget: Shuffle,
}

#[wasm_bindgen(js_class = Shuffle)]
impl JsShuffle {
    /// Attaches to the first element matching `selector`.
    ///
    /// `prev` and `next` default to showing both buttons.
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str, prev: Option<bool>, next: Option<bool>) -> Result<Self, JsValue> {
        let config = StackConfig::web()
            .with_prev(prev.unwrap_or(true))
            .with_next(next.unwrap_or(true));
        Ok(Self {
            widget: Shuffle::new(selector, config)?,
        })
    }

    /// Moves to the next card. Returns `false` if the request was ignored.
    pub fn advance(&self) -> bool {
        !self.widget.advance().is_ignored()
    }

    /// Moves to the previous card. Returns `false` if the request was ignored.
    pub fn retreat(&self) -> bool {
        !self.widget.retreat().is_ignored()
    }

    /// Whether a shift is in flight.
    #[wasm_bindgen(getter)]
    pub fn animating(&self) -> bool {
        self.widget.is_animating()
    }

    /// Card indices in document order of the images, bottom to top.
    pub fn order(&self) -> Vec<u32> {
        self.widget
            .order()
            .into_iter()
            .map(|idx| u32::try_from(idx).unwrap_or(u32::MAX))
            .collect()
    }
}

impl JsShuffle {
    /// The wrapped widget.
    #[must_use]
    pub fn widget(&self) -> &Shuffle {
        &self.widget
    }
}
