// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for card shifts.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! [`CardStack`](crate::stack::CardStack) calls as a shift starts, finishes,
//! or is turned away. All method bodies default to no-ops, so implementing
//! only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::direction::Direction;
use crate::time::{Duration, HostTime};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// How a shift was completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Completion {
    /// The host delivered the transition-end signal.
    TransitionEnd,
    /// The completion deadline passed without a signal.
    Timeout,
    /// Transitions are off; the shift completed synchronously.
    Instant,
}

impl Completion {
    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TransitionEnd => "transition-end",
            Self::Timeout => "timeout",
            Self::Instant => "instant",
        }
    }
}

/// Why a shift request was turned away.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// Another card is still animating.
    Busy,
    /// The stack has no cards.
    Empty,
}

impl IgnoreReason {
    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Busy => "busy",
            Self::Empty => "empty",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a shift starts moving a card.
#[derive(Clone, Copy, Debug)]
pub struct ShiftStartEvent {
    /// Shift direction.
    pub direction: Direction,
    /// Construction-order index of the moving card.
    pub card_index: usize,
    /// Whether the card animates out or moves instantly.
    pub animated: bool,
    /// Host time at the start of the shift.
    pub timestamp: HostTime,
}

/// Emitted when a shift lands its card at the far end of the stack.
#[derive(Clone, Copy, Debug)]
pub struct ShiftFinishEvent {
    /// Shift direction.
    pub direction: Direction,
    /// Construction-order index of the card.
    pub card_index: usize,
    /// Z-index assigned to the card.
    pub z_index: i32,
    /// How the shift was completed.
    pub completion: Completion,
    /// Time between start and finish.
    pub elapsed: Duration,
    /// Host time of completion.
    pub timestamp: HostTime,
}

/// Emitted when a shift request is ignored.
#[derive(Clone, Copy, Debug)]
pub struct ShiftIgnoredEvent {
    /// Requested direction.
    pub direction: Direction,
    /// Why the request was ignored.
    pub reason: IgnoreReason,
    /// Host time of the request.
    pub timestamp: HostTime,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from card stacks.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a shift starts.
    fn on_shift_start(&mut self, e: &ShiftStartEvent) {
        _ = e;
    }

    /// Called when a shift finishes.
    fn on_shift_finish(&mut self, e: &ShiftFinishEvent) {
        _ = e;
    }

    /// Called when a shift request is ignored.
    fn on_shift_ignored(&mut self, e: &ShiftIgnoredEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ShiftStartEvent`].
    #[inline]
    pub fn shift_start(&mut self, e: &ShiftStartEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_shift_start(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ShiftFinishEvent`].
    #[inline]
    pub fn shift_finish(&mut self, e: &ShiftFinishEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_shift_finish(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ShiftIgnoredEvent`].
    #[inline]
    pub fn shift_ignored(&mut self, e: &ShiftIgnoredEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_shift_ignored(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
