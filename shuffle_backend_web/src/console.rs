// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace sink.

use alloc::format;
use alloc::string::String;

use shuffle_core::trace::{ShiftFinishEvent, ShiftIgnoredEvent, ShiftStartEvent, TraceSink};
use wasm_bindgen::JsValue;

/// Logs shift events with `console.log`, one line per event.
///
/// Lines carry an optional label so several stacks can share a console.
#[derive(Clone, Debug, Default)]
pub struct ConsoleSink {
    label: String,
}

impl ConsoleSink {
    /// Creates an unlabeled sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink whose lines start with `label`.
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    fn log(&self, line: &str) {
        let line = if self.label.is_empty() {
            format!("[shuffle] {line}")
        } else {
            format!("[shuffle:{}] {line}", self.label)
        };
        web_sys::console::log_1(&JsValue::from_str(&line));
    }
}

fn ms(ticks: u64) -> f64 {
    ticks as f64 / 1_000.0
}

impl TraceSink for ConsoleSink {
    fn on_shift_start(&mut self, e: &ShiftStartEvent) {
        self.log(&format!(
            "{} card={} {} at {:.1}ms",
            e.direction.as_str(),
            e.card_index,
            if e.animated { "animated" } else { "instant" },
            ms(e.timestamp.ticks()),
        ));
    }

    fn on_shift_finish(&mut self, e: &ShiftFinishEvent) {
        self.log(&format!(
            "{} card={} z={} via={} after {:.1}ms",
            e.direction.as_str(),
            e.card_index,
            e.z_index,
            e.completion.as_str(),
            ms(e.elapsed.ticks()),
        ));
    }

    fn on_shift_ignored(&mut self, e: &ShiftIgnoredEvent) {
        self.log(&format!(
            "{} ignored ({})",
            e.direction.as_str(),
            e.reason.as_str(),
        ));
    }
}
