// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack configuration.
//!
//! Every option has a named field and a default, and the whole struct is
//! resolved once when a stack is built. The only host-dependent option is
//! [`TransitionMode::Auto`], which the host settles with its own capability
//! probe via [`TransitionMode::resolve`].

use crate::time::Duration;
use crate::transform::DEFAULT_TRAVEL_FACTOR;

/// Class applied to a card while it is animated out.
pub const DEFAULT_ANIMATING_CLASS: &str = "animatingOut";

/// Fallback deadline for a transition-end signal.
pub const DEFAULT_COMPLETION_TIMEOUT: Duration = Duration::from_millis(1000);

/// Whether shifts animate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransitionMode {
    /// Animate if the host supports CSS transitions.
    #[default]
    Auto,
    /// Always animate.
    Enabled,
    /// Never animate; shifts reorder instantly.
    Disabled,
}

impl TransitionMode {
    /// Settles the mode against the host's capability.
    #[inline]
    #[must_use]
    pub const fn resolve(self, host_supports_transitions: bool) -> bool {
        match self {
            Self::Auto => host_supports_transitions,
            Self::Enabled => true,
            Self::Disabled => false,
        }
    }
}

/// Options for a card stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackConfig {
    /// Create a "previous" button wired to `retreat`.
    pub show_prev: bool,
    /// Create a "next" button wired to `advance`.
    pub show_next: bool,
    /// Whether shifts animate.
    pub transitions: TransitionMode,
    /// Multiplier applied to a card's offsets when it is animated out.
    pub travel_factor: f64,
    /// How long to wait for a transition-end signal before completing the
    /// shift anyway.
    pub completion_timeout: Duration,
    /// Class applied to a card while it is animated out.
    pub animating_class: &'static str,
}

impl StackConfig {
    /// Default configuration for the web: both buttons, animated when the
    /// browser supports transitions.
    #[must_use]
    pub const fn web() -> Self {
        Self {
            show_prev: true,
            show_next: true,
            transitions: TransitionMode::Auto,
            travel_factor: DEFAULT_TRAVEL_FACTOR,
            completion_timeout: DEFAULT_COMPLETION_TIMEOUT,
            animating_class: DEFAULT_ANIMATING_CLASS,
        }
    }

    /// Configuration that never animates.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            transitions: TransitionMode::Disabled,
            ..Self::web()
        }
    }

    /// Sets whether the "previous" button is created.
    #[must_use]
    pub const fn with_prev(mut self, show: bool) -> Self {
        self.show_prev = show;
        self
    }

    /// Sets whether the "next" button is created.
    #[must_use]
    pub const fn with_next(mut self, show: bool) -> Self {
        self.show_next = show;
        self
    }

    /// Sets the transition mode.
    #[must_use]
    pub const fn with_transitions(mut self, transitions: TransitionMode) -> Self {
        self.transitions = transitions;
        self
    }

    /// Sets the travel factor.
    #[must_use]
    pub const fn with_travel_factor(mut self, travel_factor: f64) -> Self {
        self.travel_factor = travel_factor;
        self
    }

    /// Sets the completion timeout.
    #[must_use]
    pub const fn with_completion_timeout(mut self, timeout: Duration) -> Self {
        self.completion_timeout = timeout;
        self
    }

    /// Sets the class applied to cards that are animated out.
    #[must_use]
    pub const fn with_animating_class(mut self, class: &'static str) -> Self {
        self.animating_class = class;
        self
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self::web()
    }
}
