// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`ChromeTraceSink`] collects shift events as they happen and writes them
//! as [Chrome Trace Event Format][format] JSON. Each shift becomes a
//! begin/end pair on its own track, so a long-running or timed-out
//! animation stands out in the timeline; ignored requests are instant
//! events.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use shuffle_core::time::HostTime;
use shuffle_core::trace::{ShiftFinishEvent, ShiftIgnoredEvent, ShiftStartEvent, TraceSink};

/// Collects shift events for Chrome trace export.
#[derive(Debug, Default)]
pub struct ChromeTraceSink {
    events: Vec<Value>,
    pid: u32,
}

impl ChromeTraceSink {
    /// Creates an empty sink whose events are attributed to process 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sink whose events are attributed to `pid`.
    ///
    /// Use one pid per stack to show several stacks side by side.
    #[must_use]
    pub fn for_stack(pid: u32) -> Self {
        Self {
            events: Vec::new(),
            pid,
        }
    }

    /// Events collected so far.
    #[must_use]
    pub fn events(&self) -> &[Value] {
        &self.events
    }

    /// Writes the collected events as a JSON array.
    ///
    /// The output is suitable for loading into `chrome://tracing` or
    /// [Perfetto](https://ui.perfetto.dev/).
    pub fn export(&self, writer: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(writer, &self.events)?;
        Ok(())
    }
}

fn us(t: HostTime) -> u64 {
    t.ticks()
}

impl TraceSink for ChromeTraceSink {
    fn on_shift_start(&mut self, e: &ShiftStartEvent) {
        self.events.push(json!({
            "ph": "B",
            "name": format!("shift:{}", e.direction.as_str()),
            "cat": "Shift",
            "ts": us(e.timestamp),
            "pid": self.pid,
            "tid": 0,
            "args": {
                "card_index": e.card_index,
                "animated": e.animated,
            }
        }));
    }

    fn on_shift_finish(&mut self, e: &ShiftFinishEvent) {
        self.events.push(json!({
            "ph": "E",
            "name": format!("shift:{}", e.direction.as_str()),
            "cat": "Shift",
            "ts": us(e.timestamp),
            "pid": self.pid,
            "tid": 0,
            "args": {
                "card_index": e.card_index,
                "z_index": e.z_index,
                "completion": e.completion.as_str(),
            }
        }));
    }

    fn on_shift_ignored(&mut self, e: &ShiftIgnoredEvent) {
        self.events.push(json!({
            "ph": "i",
            "name": "ShiftIgnored",
            "cat": "Shift",
            "ts": us(e.timestamp),
            "pid": self.pid,
            "tid": 0,
            "s": "p",
            "args": {
                "direction": e.direction.as_str(),
                "reason": e.reason.as_str(),
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shuffle_core::card::{Angle, CardMetrics};
    use shuffle_core::config::StackConfig;
    use shuffle_core::stack::{Card, CardStack};
    use shuffle_core::surface::CardSurface;
    use shuffle_core::trace::Tracer;
    use shuffle_core::transform::CardTransform;

    struct NullSurface;

    impl CardSurface<u32> for NullSurface {
        fn set_z_index(&mut self, _card: u32, _z_index: i32) {}
        fn set_transform(&mut self, _card: u32, _transform: &CardTransform) {}
        fn set_animating_out(&mut self, _card: u32, _animating: bool) {}
    }

    #[test]
    fn export_produces_valid_json() {
        let mut surface = NullSurface;
        let cards = (0..3).map(|k| Card::new(k, CardMetrics::new(1.0, 1.0, Angle::ZERO)));
        let mut stack = CardStack::new(cards, &StackConfig::web(), true, &mut surface);

        let mut sink = ChromeTraceSink::for_stack(7);
        {
            let mut tracer = Tracer::new(&mut sink);
            stack.advance(HostTime(1_000), &mut surface, &mut tracer);
            stack.advance(HostTime(1_100), &mut surface, &mut tracer);
            stack.finish(2, HostTime(2_000), &mut surface, &mut tracer);
        }

        let mut out = Vec::new();
        sink.export(&mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        // Should parse as a JSON array.
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 3);

        assert_eq!(parsed[0]["ph"], "B");
        assert_eq!(parsed[0]["name"], "shift:next");
        assert_eq!(parsed[0]["pid"], 7);

        assert_eq!(parsed[1]["ph"], "i");
        assert_eq!(parsed[1]["args"]["reason"], "busy");

        assert_eq!(parsed[2]["ph"], "E");
        assert_eq!(parsed[2]["ts"], 2_000);
        assert_eq!(parsed[2]["args"]["z_index"], -1);
        assert_eq!(parsed[2]["args"]["completion"], "transition-end");
    }

    #[test]
    fn export_empty_sink() {
        let mut out = Vec::new();
        ChromeTraceSink::new().export(&mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_slice(&out).unwrap();
        assert!(parsed.is_empty());
    }
}
