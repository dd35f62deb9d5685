// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shuffling card stack.
//!
//! [`CardStack`] owns the order sequence of a stack of cards, bottom to top,
//! and moves one card at a time from one end of it to the other:
//!
//! - [`advance`](CardStack::advance) sends the top card to the bottom.
//! - [`retreat`](CardStack::retreat) brings the bottom card to the top.
//!
//! When transitions are on, the moving card is first animated out along its
//! offsets and the shift stays *pending* until the host reports the
//! transition end ([`finish`](CardStack::finish)) or the completion deadline
//! passes ([`expire`](CardStack::expire)). Only then does the card receive
//! its new z-index and slide back to rest. While a shift is pending, further
//! requests are ignored rather than queued.
//!
//! The stack never fails: requests it cannot serve return
//! [`Step::Ignored`], and stale completion signals are rejected.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::card::CardMetrics;
use crate::config::StackConfig;
use crate::direction::Direction;
use crate::surface::CardSurface;
use crate::time::{Duration, HostTime};
use crate::trace::{
    Completion, IgnoreReason, ShiftFinishEvent, ShiftIgnoredEvent, ShiftStartEvent, Tracer,
};
use crate::transform::CardTransform;
use crate::zorder::ZRange;

/// One card handed to [`CardStack::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Card<K> {
    /// Host handle for the card (e.g. an element index).
    pub key: K,
    /// Fixed placement of the card.
    pub metrics: CardMetrics,
}

impl<K> Card<K> {
    /// Creates a card.
    #[inline]
    #[must_use]
    pub const fn new(key: K, metrics: CardMetrics) -> Self {
        Self { key, metrics }
    }
}

/// A shift waiting for its card to come back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pending<K> {
    /// The card that is animated out.
    pub card: K,
    /// Direction of the shift.
    pub direction: Direction,
    /// Host time the shift started.
    pub started: HostTime,
    /// Host time after which [`CardStack::expire`] completes the shift.
    pub deadline: HostTime,
}

/// Outcome of a shift request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step<K> {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// The card moved and received its z-index immediately.
    Instant {
        /// The card that moved.
        card: K,
        /// Its new z-index.
        z_index: i32,
    },
    /// The card is animating out; the shift is pending.
    Animating {
        /// The card that is animating.
        card: K,
        /// Completion deadline.
        deadline: HostTime,
    },
}

impl<K: Copy> Step<K> {
    /// Returns the card that moved, if any.
    #[must_use]
    pub fn card(&self) -> Option<K> {
        match *self {
            Self::Ignored(_) => None,
            Self::Instant { card, .. } | Self::Animating { card, .. } => Some(card),
        }
    }

    /// Returns `true` if the request was ignored.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

/// A stack of cards that shifts one card at a time.
///
/// `K` is the host's handle for a card. Keys must be distinct; the stack only
/// reorders them and never adds or drops one.
#[derive(Clone, Debug)]
pub struct CardStack<K> {
    /// Order sequence, bottom to top.
    order: VecDeque<K>,
    /// Cards in construction order.
    cards: Vec<Card<K>>,
    z: ZRange,
    animate: bool,
    travel_factor: f64,
    completion_timeout: Duration,
    pending: Option<Pending<K>>,
}

impl<K: Copy + PartialEq> CardStack<K> {
    /// Builds a stack from `cards`, listed bottom to top.
    ///
    /// Assigns ascending z-indices from zero and puts every card at rest.
    /// `host_supports_transitions` settles
    /// [`TransitionMode::Auto`](crate::config::TransitionMode::Auto).
    pub fn new<S: CardSurface<K>>(
        cards: impl IntoIterator<Item = Card<K>>,
        config: &StackConfig,
        host_supports_transitions: bool,
        surface: &mut S,
    ) -> Self {
        let cards: Vec<Card<K>> = cards.into_iter().collect();
        let z = ZRange::for_cards(cards.len());
        let mut z_index = z.min();
        for card in &cards {
            surface.set_z_index(card.key, z_index);
            surface.set_transform(card.key, &CardTransform::resting(&card.metrics));
            z_index = z_index.saturating_add(1);
        }
        Self {
            order: cards.iter().map(|c| c.key).collect(),
            cards,
            z,
            animate: config.transitions.resolve(host_supports_transitions),
            travel_factor: config.travel_factor,
            completion_timeout: config.completion_timeout,
            pending: None,
        }
    }

    /// Number of cards.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the stack has no cards.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Current order, bottom to top.
    pub fn order(&self) -> impl ExactSizeIterator<Item = K> + '_ {
        self.order.iter().copied()
    }

    /// The card on top of the stack.
    #[must_use]
    pub fn top(&self) -> Option<K> {
        self.order.back().copied()
    }

    /// The card at the bottom of the stack.
    #[must_use]
    pub fn bottom(&self) -> Option<K> {
        self.order.front().copied()
    }

    /// Position of `card` in the current order (0 is the bottom).
    #[must_use]
    pub fn position(&self, card: K) -> Option<usize> {
        self.order.iter().position(|&k| k == card)
    }

    /// Cards in construction order.
    #[must_use]
    pub fn cards(&self) -> &[Card<K>] {
        &self.cards
    }

    /// Fixed placement of `card`.
    #[must_use]
    pub fn metrics(&self, card: K) -> Option<CardMetrics> {
        self.lookup(card).map(|(_, metrics)| metrics)
    }

    /// Z-index range currently in use.
    #[inline]
    #[must_use]
    pub fn z_range(&self) -> ZRange {
        self.z
    }

    /// Returns `true` if shifts animate.
    #[inline]
    #[must_use]
    pub fn animates(&self) -> bool {
        self.animate
    }

    /// Returns `true` while a shift is pending.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending shift, if any.
    #[inline]
    #[must_use]
    pub fn pending(&self) -> Option<Pending<K>> {
        self.pending
    }

    /// Sends the top card to the bottom.
    pub fn advance<S: CardSurface<K>>(
        &mut self,
        now: HostTime,
        surface: &mut S,
        tracer: &mut Tracer<'_>,
    ) -> Step<K> {
        self.shift(Direction::Next, now, surface, tracer)
    }

    /// Brings the bottom card to the top.
    pub fn retreat<S: CardSurface<K>>(
        &mut self,
        now: HostTime,
        surface: &mut S,
        tracer: &mut Tracer<'_>,
    ) -> Step<K> {
        self.shift(Direction::Prev, now, surface, tracer)
    }

    /// Shifts one card in `direction`.
    ///
    /// Ignored while another shift is pending or when the stack is empty.
    pub fn shift<S: CardSurface<K>>(
        &mut self,
        direction: Direction,
        now: HostTime,
        surface: &mut S,
        tracer: &mut Tracer<'_>,
    ) -> Step<K> {
        if self.pending.is_some() {
            return ignore(direction, IgnoreReason::Busy, now, tracer);
        }
        let Some(card) = self.rotate(direction) else {
            return ignore(direction, IgnoreReason::Empty, now, tracer);
        };
        match direction {
            Direction::Next => self.z.release_top(),
            Direction::Prev => self.z.release_bottom(),
        }

        let (card_index, metrics) = self.lookup(card).unwrap_or_default();
        tracer.shift_start(&ShiftStartEvent {
            direction,
            card_index,
            animated: self.animate,
            timestamp: now,
        });

        if !self.animate {
            let z_index = self.claim(direction);
            surface.set_z_index(card, z_index);
            tracer.shift_finish(&ShiftFinishEvent {
                direction,
                card_index,
                z_index,
                completion: Completion::Instant,
                elapsed: Duration::ZERO,
                timestamp: now,
            });
            return Step::Instant { card, z_index };
        }

        let out = CardTransform::animated_out(&metrics, direction, self.travel_factor);
        surface.set_animating_out(card, true);
        surface.set_transform(card, &out);
        surface.begin_transition(card);

        let deadline = now.saturating_add(self.completion_timeout);
        self.pending = Some(Pending {
            card,
            direction,
            started: now,
            deadline,
        });
        Step::Animating { card, deadline }
    }

    /// Completes the pending shift on the transition end of `card`.
    ///
    /// Returns `false`, changing nothing, if no shift is pending or `card` is
    /// not the pending card.
    pub fn finish<S: CardSurface<K>>(
        &mut self,
        card: K,
        now: HostTime,
        surface: &mut S,
        tracer: &mut Tracer<'_>,
    ) -> bool {
        match self.pending {
            Some(pending) if pending.card == card => {
                self.complete(pending, Completion::TransitionEnd, now, surface, tracer);
                true
            }
            _ => false,
        }
    }

    /// Completes the pending shift if its deadline has passed.
    ///
    /// Returns `true` if a shift was completed.
    pub fn expire<S: CardSurface<K>>(
        &mut self,
        now: HostTime,
        surface: &mut S,
        tracer: &mut Tracer<'_>,
    ) -> bool {
        match self.pending {
            Some(pending) if now >= pending.deadline => {
                self.complete(pending, Completion::Timeout, now, surface, tracer);
                true
            }
            _ => false,
        }
    }

    fn complete<S: CardSurface<K>>(
        &mut self,
        pending: Pending<K>,
        completion: Completion,
        now: HostTime,
        surface: &mut S,
        tracer: &mut Tracer<'_>,
    ) {
        self.pending = None;
        let Pending {
            card,
            direction,
            started,
            ..
        } = pending;

        surface.end_transition(card);
        let z_index = self.claim(direction);
        let (card_index, metrics) = self.lookup(card).unwrap_or_default();
        surface.set_z_index(card, z_index);
        surface.set_animating_out(card, false);
        surface.set_transform(card, &CardTransform::resting(&metrics));

        tracer.shift_finish(&ShiftFinishEvent {
            direction,
            card_index,
            z_index,
            completion,
            elapsed: now.saturating_duration_since(started),
            timestamp: now,
        });
    }

    /// Moves the card leaving in `direction` to the other end of the order.
    fn rotate(&mut self, direction: Direction) -> Option<K> {
        match direction {
            Direction::Next => {
                let card = self.order.pop_back()?;
                self.order.push_front(card);
                Some(card)
            }
            Direction::Prev => {
                let card = self.order.pop_front()?;
                self.order.push_back(card);
                Some(card)
            }
        }
    }

    /// Claims the z-index at the end a card shifted in `direction` lands on.
    fn claim(&mut self, direction: Direction) -> i32 {
        match direction {
            Direction::Next => self.z.claim_bottom(),
            Direction::Prev => self.z.claim_top(),
        }
    }

    fn lookup(&self, card: K) -> Option<(usize, CardMetrics)> {
        self.cards
            .iter()
            .position(|c| c.key == card)
            .map(|i| (i, self.cards[i].metrics))
    }
}

fn ignore<K>(
    direction: Direction,
    reason: IgnoreReason,
    now: HostTime,
    tracer: &mut Tracer<'_>,
) -> Step<K> {
    tracer.shift_ignored(&ShiftIgnoredEvent {
        direction,
        reason,
        timestamp: now,
    });
    Step::Ignored(reason)
}

#[cfg(test)]
mod tests {
    use alloc::collections::{BTreeMap, BTreeSet};
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::card::Angle;
    use crate::config::TransitionMode;

    /// Test double that records the last state written for each card.
    #[derive(Debug, Default)]
    struct RecordingSurface {
        z: BTreeMap<char, i32>,
        transforms: BTreeMap<char, CardTransform>,
        animating: BTreeSet<char>,
        listening: BTreeSet<char>,
        begun: u32,
        ended: u32,
    }

    impl CardSurface<char> for RecordingSurface {
        fn set_z_index(&mut self, card: char, z_index: i32) {
            self.z.insert(card, z_index);
        }

        fn set_transform(&mut self, card: char, transform: &CardTransform) {
            self.transforms.insert(card, *transform);
        }

        fn set_animating_out(&mut self, card: char, animating: bool) {
            if animating {
                self.animating.insert(card);
            } else {
                self.animating.remove(&card);
            }
        }

        fn begin_transition(&mut self, card: char) {
            assert!(self.listening.insert(card), "listener registered twice");
            self.begun += 1;
        }

        fn end_transition(&mut self, card: char) {
            assert!(self.listening.remove(&card), "listener removed twice");
            self.ended += 1;
        }
    }

    const T0: HostTime = HostTime(1_000_000);

    fn deck(keys: &[char]) -> Vec<Card<char>> {
        keys.iter()
            .zip(1_i32..)
            .map(|(&key, i)| {
                let i = f64::from(i);
                Card::new(key, CardMetrics::new(i, -i, Angle::from_degrees(i * 3.0)))
            })
            .collect()
    }

    fn animated(keys: &[char]) -> (CardStack<char>, RecordingSurface) {
        let mut surface = RecordingSurface::default();
        let stack = CardStack::new(deck(keys), &StackConfig::web(), true, &mut surface);
        (stack, surface)
    }

    fn order(stack: &CardStack<char>) -> Vec<char> {
        stack.order().collect()
    }

    /// At rest, the z-indices written equal the stack's range, one per card.
    fn assert_contiguous(stack: &CardStack<char>, surface: &RecordingSurface) {
        let mut values: Vec<i32> = surface.z.values().copied().collect();
        values.sort_unstable();
        let range = stack.z_range();
        let expected: Vec<i32> = (range.min()..=range.max()).collect();
        assert_eq!(values, expected, "z-indices must fill the range");
        assert_eq!(range.len(), stack.len());
    }

    fn settle(stack: &mut CardStack<char>, surface: &mut RecordingSurface) {
        if let Some(p) = stack.pending() {
            assert!(stack.finish(p.card, T0, surface, &mut Tracer::none()));
        }
    }

    #[test]
    fn construction_stacks_cards_at_rest() {
        let (stack, surface) = animated(&['A', 'B', 'C']);
        assert_eq!(order(&stack), ['A', 'B', 'C']);
        assert_eq!(surface.z.get(&'A'), Some(&0));
        assert_eq!(surface.z.get(&'C'), Some(&2));
        assert!(surface.transforms.values().all(CardTransform::is_resting));
        assert_eq!(
            surface.transforms.get(&'B').map(|t| t.rotation),
            Some(Angle::from_degrees(6.0))
        );
        assert!(stack.animates());
        assert!(!stack.is_animating());
        assert_contiguous(&stack, &surface);
    }

    #[test]
    fn advance_sends_top_card_to_bottom() {
        let (mut stack, mut surface) = animated(&['A', 'B', 'C']);
        let step = stack.advance(T0, &mut surface, &mut Tracer::none());

        assert_eq!(
            step,
            Step::Animating {
                card: 'C',
                deadline: T0 + Duration::from_millis(1000),
            }
        );
        assert_eq!(order(&stack), ['C', 'A', 'B']);
        assert!(stack.is_animating());
        assert!(surface.animating.contains(&'C'));
        assert!(surface.listening.contains(&'C'));
        assert_eq!(
            surface.transforms.get(&'C').map(CardTransform::to_css).as_deref(),
            Some("translate(12%, -12%) rotate(9deg)")
        );
        assert_eq!(surface.z.get(&'C'), Some(&2), "z waits for completion");

        assert!(stack.finish('C', T0 + Duration(300_000), &mut surface, &mut Tracer::none()));
        assert!(!stack.is_animating());
        assert_eq!(surface.z.get(&'C'), Some(&-1));
        assert!(!surface.animating.contains(&'C'));
        assert!(surface.listening.is_empty());
        assert_eq!(
            surface.transforms.get(&'C').map(CardTransform::to_css).as_deref(),
            Some("translate(0%, 0%) rotate(9deg)")
        );
        assert_contiguous(&stack, &surface);
    }

    #[test]
    fn retreat_brings_bottom_card_to_top() {
        let (mut stack, mut surface) = animated(&['A', 'B', 'C']);
        let step = stack.retreat(T0, &mut surface, &mut Tracer::none());

        assert_eq!(step.card(), Some('A'));
        assert_eq!(order(&stack), ['B', 'C', 'A']);
        assert_eq!(
            surface.transforms.get(&'A').map(CardTransform::to_css).as_deref(),
            Some("translate(-4%, 4%) rotate(3deg)")
        );

        assert!(stack.finish('A', T0, &mut surface, &mut Tracer::none()));
        assert_eq!(surface.z.get(&'A'), Some(&3));
        assert_eq!(
            surface.transforms.get(&'A').copied(),
            Some(CardTransform::resting(&CardMetrics::new(
                1.0,
                -1.0,
                Angle::from_degrees(3.0)
            )))
        );
        assert_contiguous(&stack, &surface);
    }

    #[test]
    fn rotation_laws_hold_for_every_size() {
        for n in 1..=6_u8 {
            let keys: Vec<char> = (0..n).map(|i| char::from(b'a' + i)).collect();
            let (mut stack, mut surface) = animated(&keys);

            let mut expected = keys.clone();
            expected.rotate_right(1);
            stack.advance(T0, &mut surface, &mut Tracer::none());
            settle(&mut stack, &mut surface);
            assert_eq!(order(&stack), expected, "advance rotates right, n={n}");

            stack.retreat(T0, &mut surface, &mut Tracer::none());
            settle(&mut stack, &mut surface);
            assert_eq!(order(&stack), keys, "retreat undoes advance, n={n}");

            let mut expected = keys.clone();
            expected.rotate_left(1);
            stack.retreat(T0, &mut surface, &mut Tracer::none());
            settle(&mut stack, &mut surface);
            assert_eq!(order(&stack), expected, "retreat rotates left, n={n}");
            assert_contiguous(&stack, &surface);
        }
    }

    #[test]
    fn round_trip_restores_order_and_z() {
        let (mut stack, mut surface) = animated(&['A', 'B', 'C']);
        let before = surface.z.clone();

        stack.advance(T0, &mut surface, &mut Tracer::none());
        settle(&mut stack, &mut surface);
        stack.retreat(T0, &mut surface, &mut Tracer::none());
        settle(&mut stack, &mut surface);

        assert_eq!(order(&stack), ['A', 'B', 'C']);
        assert_eq!(surface.z, before);
        assert_eq!(stack.z_range(), ZRange::for_cards(3));
    }

    #[test]
    fn requests_while_busy_are_ignored() {
        let (mut stack, mut surface) = animated(&['A', 'B', 'C', 'D']);
        stack.advance(T0, &mut surface, &mut Tracer::none());

        let snapshot = (order(&stack), stack.z_range(), stack.pending(), surface.z.clone());
        assert_eq!(
            stack.advance(T0, &mut surface, &mut Tracer::none()),
            Step::Ignored(IgnoreReason::Busy)
        );
        assert_eq!(
            stack.retreat(T0, &mut surface, &mut Tracer::none()),
            Step::Ignored(IgnoreReason::Busy)
        );
        assert_eq!(
            (order(&stack), stack.z_range(), stack.pending(), surface.z.clone()),
            snapshot
        );
        assert_eq!(surface.begun, 1);
    }

    #[test]
    fn stale_and_duplicate_completions_are_rejected() {
        let (mut stack, mut surface) = animated(&['A', 'B', 'C']);
        assert!(!stack.finish('C', T0, &mut surface, &mut Tracer::none()), "nothing pending");

        stack.advance(T0, &mut surface, &mut Tracer::none());
        assert!(!stack.finish('A', T0, &mut surface, &mut Tracer::none()), "wrong card");
        assert!(stack.is_animating());

        assert!(stack.finish('C', T0, &mut surface, &mut Tracer::none()));
        assert!(!stack.finish('C', T0, &mut surface, &mut Tracer::none()), "duplicate");
        assert_eq!((surface.begun, surface.ended), (1, 1));
        assert_eq!(stack.z_range().min(), -1);
    }

    #[test]
    fn expire_completes_after_deadline_only() {
        let (mut stack, mut surface) = animated(&['A', 'B', 'C']);
        let Step::Animating { deadline, .. } = stack.retreat(T0, &mut surface, &mut Tracer::none())
        else {
            panic!("expected an animated shift");
        };

        assert!(!stack.expire(T0, &mut surface, &mut Tracer::none()));
        assert!(!stack.expire(HostTime(deadline.ticks() - 1), &mut surface, &mut Tracer::none()));
        assert!(stack.is_animating());

        assert!(stack.expire(deadline, &mut surface, &mut Tracer::none()));
        assert!(!stack.is_animating());
        assert_eq!(surface.z.get(&'A'), Some(&3));
        assert!(surface.listening.is_empty(), "listener dropped on timeout");
        assert!(!stack.finish('A', deadline, &mut surface, &mut Tracer::none()));
        assert!(!stack.expire(deadline, &mut surface, &mut Tracer::none()));
    }

    #[test]
    fn instant_mode_reorders_synchronously() {
        let mut surface = RecordingSurface::default();
        let mut stack = CardStack::new(deck(&['A', 'B', 'C']), &StackConfig::web(), false, &mut surface);
        assert!(!stack.animates(), "auto mode follows the host");

        let step = stack.advance(T0, &mut surface, &mut Tracer::none());
        assert_eq!(step, Step::Instant { card: 'C', z_index: -1 });
        assert_eq!(order(&stack), ['C', 'A', 'B']);
        assert!(!stack.is_animating());
        assert_eq!(surface.z.get(&'C'), Some(&-1));
        assert_eq!(surface.begun, 0);
        assert!(surface.animating.is_empty());
        assert_contiguous(&stack, &surface);

        let step = stack.retreat(T0, &mut surface, &mut Tracer::none());
        assert_eq!(step, Step::Instant { card: 'C', z_index: 2 });
        assert_eq!(order(&stack), ['A', 'B', 'C']);
    }

    #[test]
    fn forced_modes_override_the_host() {
        let mut surface = RecordingSurface::default();
        let enabled = StackConfig::web().with_transitions(TransitionMode::Enabled);
        let stack = CardStack::new(deck(&['A']), &enabled, false, &mut surface);
        assert!(stack.animates());

        let stack = CardStack::new(deck(&['A']), &StackConfig::instant(), true, &mut surface);
        assert!(!stack.animates());
    }

    #[test]
    fn z_range_stays_contiguous_across_mixed_shifts() {
        let (mut stack, mut surface) = animated(&['A', 'B', 'C', 'D', 'E']);
        let pattern = [true, true, false, true, false, false, false, true, true, true, false];
        for (i, &forward) in pattern.iter().enumerate() {
            if forward {
                stack.advance(T0, &mut surface, &mut Tracer::none());
            } else {
                stack.retreat(T0, &mut surface, &mut Tracer::none());
            }
            // Alternate between the two completion paths.
            if i % 2 == 0 {
                settle(&mut stack, &mut surface);
            } else {
                assert!(stack.expire(HostTime(u64::MAX), &mut surface, &mut Tracer::none()));
            }
            assert_contiguous(&stack, &surface);

            // Top of the order always holds the highest z-index.
            let top = stack.top().unwrap();
            assert_eq!(surface.z.get(&top), Some(&stack.z_range().max()));
            let bottom = stack.bottom().unwrap();
            assert_eq!(surface.z.get(&bottom), Some(&stack.z_range().min()));
        }
    }

    #[test]
    fn single_card_stack_shifts_in_place() {
        let (mut stack, mut surface) = animated(&['A']);
        stack.advance(T0, &mut surface, &mut Tracer::none());
        settle(&mut stack, &mut surface);
        assert_eq!(order(&stack), ['A']);
        assert_eq!(surface.z.get(&'A'), Some(&-1));
        assert_contiguous(&stack, &surface);
    }

    #[test]
    fn empty_stack_ignores_everything() {
        let mut surface = RecordingSurface::default();
        let mut stack = CardStack::new(Vec::new(), &StackConfig::web(), true, &mut surface);
        assert!(stack.is_empty());
        assert_eq!(
            stack.advance(T0, &mut surface, &mut Tracer::none()),
            Step::Ignored(IgnoreReason::Empty)
        );
        assert!(stack.retreat(T0, &mut surface, &mut Tracer::none()).is_ignored());
        assert!(stack.z_range().is_empty());
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn lookups() {
        let (stack, _) = animated(&['A', 'B', 'C']);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.position('B'), Some(1));
        assert_eq!(stack.position('Z'), None);
        assert_eq!(stack.metrics('C').map(|m| m.left), Some(3.0));
        assert_eq!(stack.cards()[0].key, 'A');
        assert_eq!(vec!['A', 'B', 'C'], order(&stack));
    }

    #[cfg(feature = "trace")]
    #[test]
    fn shifts_are_traced() {
        use crate::trace::TraceSink;

        #[derive(Default)]
        struct Log {
            starts: Vec<ShiftStartEvent>,
            finishes: Vec<ShiftFinishEvent>,
            ignored: Vec<ShiftIgnoredEvent>,
        }

        impl TraceSink for Log {
            fn on_shift_start(&mut self, e: &ShiftStartEvent) {
                self.starts.push(*e);
            }

            fn on_shift_finish(&mut self, e: &ShiftFinishEvent) {
                self.finishes.push(*e);
            }

            fn on_shift_ignored(&mut self, e: &ShiftIgnoredEvent) {
                self.ignored.push(*e);
            }
        }

        let (mut stack, mut surface) = animated(&['A', 'B', 'C']);
        let mut log = Log::default();
        {
            let mut tracer = Tracer::new(&mut log);
            stack.advance(T0, &mut surface, &mut tracer);
            stack.retreat(T0, &mut surface, &mut tracer);
            stack.finish('C', T0 + Duration(250_000), &mut surface, &mut tracer);
        }

        assert_eq!(log.starts.len(), 1);
        assert_eq!(log.starts[0].card_index, 2);
        assert!(log.starts[0].animated);
        assert_eq!(log.ignored.len(), 1);
        assert_eq!(log.ignored[0].reason, IgnoreReason::Busy);
        assert_eq!(log.finishes.len(), 1);
        assert_eq!(log.finishes[0].completion, Completion::TransitionEnd);
        assert_eq!(log.finishes[0].z_index, -1);
        assert_eq!(log.finishes[0].elapsed, Duration(250_000));
    }
}
