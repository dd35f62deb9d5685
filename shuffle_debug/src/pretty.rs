// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are printed in milliseconds.

use std::io::Write;

use shuffle_core::time::{Duration, HostTime};
use shuffle_core::trace::{ShiftFinishEvent, ShiftIgnoredEvent, ShiftStartEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn ms(t: HostTime) -> f64 {
    t.ticks() as f64 / 1000.0
}

fn span_ms(d: Duration) -> f64 {
    d.ticks() as f64 / 1000.0
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_shift_start(&mut self, e: &ShiftStartEvent) {
        let mode = if e.animated { "animated" } else { "instant" };
        let _ = writeln!(
            self.writer,
            "[shift:start] {} card={} {mode} at {:.3}ms",
            e.direction.as_str(),
            e.card_index,
            ms(e.timestamp),
        );
    }

    fn on_shift_finish(&mut self, e: &ShiftFinishEvent) {
        let _ = writeln!(
            self.writer,
            "[shift:finish] {} card={} z={} via={} after {:.3}ms",
            e.direction.as_str(),
            e.card_index,
            e.z_index,
            e.completion.as_str(),
            span_ms(e.elapsed),
        );
    }

    fn on_shift_ignored(&mut self, e: &ShiftIgnoredEvent) {
        let _ = writeln!(
            self.writer,
            "[shift:ignored] {} reason={} at {:.3}ms",
            e.direction.as_str(),
            e.reason.as_str(),
            ms(e.timestamp),
        );
    }
}
