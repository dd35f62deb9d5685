// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card transforms.
//!
//! A card is only ever translated (in percent of its own box) and rotated
//! about its centre, so a [`CardTransform`] is those three numbers rather
//! than a general matrix. At rest the translation is zero; while a card is
//! animated out it is pushed along its own offsets, scaled by the travel
//! factor and signed by the shift [`Direction`].

use alloc::string::{String, ToString as _};
use core::fmt;

use crate::card::{Angle, CardMetrics, css_number};
use crate::direction::Direction;

/// Default multiplier applied to a card's offsets when it is animated out.
pub const DEFAULT_TRAVEL_FACTOR: f64 = 4.0;

/// Translation plus rotation for a single card.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardTransform {
    /// Horizontal translation, in percent.
    pub translate_x: f64,
    /// Vertical translation, in percent.
    pub translate_y: f64,
    /// Rotation about the card's centre.
    pub rotation: Angle,
}

impl CardTransform {
    /// The resting transform: no translation, the card's fixed rotation.
    #[inline]
    #[must_use]
    pub const fn resting(metrics: &CardMetrics) -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            rotation: metrics.rotation,
        }
    }

    /// The transform a card moves to while it leaves the stack.
    #[must_use]
    pub fn animated_out(metrics: &CardMetrics, direction: Direction, travel_factor: f64) -> Self {
        let scale = direction.sign() * travel_factor;
        Self {
            translate_x: metrics.left * scale,
            translate_y: metrics.top * scale,
            rotation: metrics.rotation,
        }
    }

    /// Returns `true` if the card sits in place (zero translation).
    #[inline]
    #[must_use]
    pub fn is_resting(&self) -> bool {
        self.translate_x == 0.0 && self.translate_y == 0.0
    }

    /// Renders the transform as a CSS `transform` value.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CardTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}%, {}%) rotate({})",
            css_number(self.translate_x),
            css_number(self.translate_y),
            self.rotation,
        )
    }
}
