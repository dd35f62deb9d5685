// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shift direction.

/// Which way the stack shifts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move to the next card: the top card is sent to the bottom.
    Next,
    /// Move to the previous card: the bottom card is brought to the top.
    Prev,
}

impl Direction {
    /// Sign applied to a card's offsets when it is animated out.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Next => 1.0,
            Self::Prev => -1.0,
        }
    }

    /// Returns the opposite direction.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Next => Self::Prev,
            Self::Prev => Self::Next,
        }
    }

    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Prev => "prev",
        }
    }
}
