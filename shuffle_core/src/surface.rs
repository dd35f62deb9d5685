// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for applying card state.
//!
//! [`CardStack`](crate::stack::CardStack) decides *what* each card should
//! look like; a host crate decides *how* that reaches the screen. Each host
//! provides:
//!
//! - **Surface**: implements [`CardSurface`] over its native elements (e.g.
//!   `HtmlElement` styles in `shuffle_backend_web`).
//!
//! - **Capability probe**: settles
//!   [`TransitionMode::Auto`](crate::config::TransitionMode::Auto) once,
//!   before the stack is built.
//!
//! - **Completion routing**: forwards the transition-end signal for the
//!   pending card to [`CardStack::finish`](crate::stack::CardStack::finish),
//!   and arms a timer that calls
//!   [`CardStack::expire`](crate::stack::CardStack::expire).
//!
//! - **Time**: a `now() -> HostTime` free function.

use crate::transform::CardTransform;

/// Applies card state to a host's presentation tree.
///
/// Both DOM-backed surfaces and test doubles implement this trait. Writes
/// are fire-and-forget: a host that cannot apply one simply drops it.
///
/// # Shift sequence
///
/// An animated shift calls, in order:
///
/// ```rust,ignore
/// surface.set_animating_out(card, true);
/// surface.set_transform(card, &out);
/// surface.begin_transition(card);
/// // ... host delivers the transition end, stack.finish(card, ..) ...
/// surface.end_transition(card);
/// surface.set_z_index(card, z);
/// surface.set_animating_out(card, false);
/// surface.set_transform(card, &resting);
/// ```
pub trait CardSurface<K> {
    /// Sets the stacking order of `card`.
    fn set_z_index(&mut self, card: K, z_index: i32);

    /// Sets the transform of `card`.
    fn set_transform(&mut self, card: K, transform: &CardTransform);

    /// Marks `card` as animated out (or back at rest).
    fn set_animating_out(&mut self, card: K, animating: bool);

    /// Starts listening for the one transition-end signal of `card`.
    fn begin_transition(&mut self, card: K) {
        _ = card;
    }

    /// Stops listening for the transition-end signal of `card`.
    ///
    /// Called exactly once per [`begin_transition`](Self::begin_transition),
    /// whether the signal arrived or the shift timed out.
    fn end_transition(&mut self, card: K) {
        _ = card;
    }
}

impl<K, S: CardSurface<K> + ?Sized> CardSurface<K> for &mut S {
    fn set_z_index(&mut self, card: K, z_index: i32) {
        (**self).set_z_index(card, z_index);
    }

    fn set_transform(&mut self, card: K, transform: &CardTransform) {
        (**self).set_transform(card, transform);
    }

    fn set_animating_out(&mut self, card: K, animating: bool) {
        (**self).set_animating_out(card, animating);
    }

    fn begin_transition(&mut self, card: K) {
        (**self).begin_transition(card);
    }

    fn end_transition(&mut self, card: K) {
        (**self).end_transition(card);
    }
}
