// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-index bookkeeping.
//!
//! The cards of a stack always occupy a contiguous z-index range
//! `[min, max]` with one value per card. A shift moves one card from one end
//! of the range to the other in two steps:
//!
//! 1. When the shift starts, the end the card leaves is released
//!    ([`release_top`](ZRange::release_top) or
//!    [`release_bottom`](ZRange::release_bottom)).
//! 2. When the card comes back, the far end is claimed
//!    ([`claim_bottom`](ZRange::claim_bottom) or
//!    [`claim_top`](ZRange::claim_top)) and its value assigned to the card.
//!
//! Between the two steps the range is one short; the card still holds its
//! old value. At rest the range spans exactly one value per card.

/// Contiguous z-index range occupied by a stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ZRange {
    min: i32,
    max: i32,
}

impl ZRange {
    /// The initial range for `count` cards: `[0, count - 1]`.
    ///
    /// An empty stack gets the empty range `[0, -1]`.
    #[must_use]
    pub fn for_cards(count: usize) -> Self {
        let count = i32::try_from(count).unwrap_or(i32::MAX);
        Self {
            min: 0,
            max: count - 1,
        }
    }

    /// Lowest z-index in use.
    #[inline]
    #[must_use]
    pub const fn min(self) -> i32 {
        self.min
    }

    /// Highest z-index in use.
    #[inline]
    #[must_use]
    pub const fn max(self) -> i32 {
        self.max
    }

    /// Number of values spanned, zero for an empty range.
    #[must_use]
    pub fn len(self) -> usize {
        let span = i64::from(self.max) - i64::from(self.min) + 1;
        usize::try_from(span).unwrap_or(0)
    }

    /// Returns `true` if the range spans no values.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `z` lies within the range.
    #[must_use]
    pub fn contains(self, z: i32) -> bool {
        (self.min..=self.max).contains(&z)
    }

    /// Gives up the top value; the card holding it is on its way down.
    pub fn release_top(&mut self) {
        self.max = self.max.saturating_sub(1);
    }

    /// Gives up the bottom value; the card holding it is on its way up.
    pub fn release_bottom(&mut self) {
        self.min = self.min.saturating_add(1);
    }

    /// Extends the range one below and returns the new minimum.
    pub fn claim_bottom(&mut self) -> i32 {
        self.min = self.min.saturating_sub(1);
        self.min
    }

    /// Extends the range one above and returns the new maximum.
    pub fn claim_top(&mut self) -> i32 {
        self.max = self.max.saturating_add(1);
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_range() {
        let z = ZRange::for_cards(3);
        assert_eq!((z.min(), z.max()), (0, 2));
        assert_eq!(z.len(), 3);
        assert!(z.contains(0) && z.contains(2) && !z.contains(3));
    }

    #[test]
    fn empty_range() {
        let z = ZRange::for_cards(0);
        assert!(z.is_empty());
        assert_eq!(z.len(), 0);
        assert!(!z.contains(0));
    }

    #[test]
    fn top_to_bottom_keeps_length() {
        let mut z = ZRange::for_cards(4);
        z.release_top();
        assert_eq!(z.len(), 3, "one short while the card is out");
        assert_eq!(z.claim_bottom(), -1);
        assert_eq!(z.len(), 4);
        assert_eq!((z.min(), z.max()), (-1, 2));
    }

    #[test]
    fn bottom_to_top_keeps_length() {
        let mut z = ZRange::for_cards(4);
        z.release_bottom();
        assert_eq!(z.claim_top(), 4);
        assert_eq!((z.min(), z.max()), (1, 4));
        assert_eq!(z.len(), 4);
    }
}
