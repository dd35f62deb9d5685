// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-card metadata.
//!
//! Each card carries a fixed horizontal offset, vertical offset, and rotation,
//! read from the `data-left`, `data-top`, and `data-rotation` attributes of
//! its element. Offsets are in percent of the card's own box; the rotation
//! is any CSS angle.
//!
//! Parsing never fails. A missing or malformed attribute yields zero, so a
//! badly annotated card still rests upright in place instead of rendering a
//! `NaN` transform.

use core::f64::consts::PI;
use core::fmt;

/// Attribute holding the horizontal offset.
pub const LEFT_ATTRIBUTE: &str = "data-left";
/// Attribute holding the vertical offset.
pub const TOP_ATTRIBUTE: &str = "data-top";
/// Attribute holding the rotation angle.
pub const ROTATION_ATTRIBUTE: &str = "data-rotation";

/// A planar rotation, stored in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    /// No rotation.
    pub const ZERO: Self = Self { degrees: 0.0 };

    /// Creates an angle from degrees.
    #[inline]
    #[must_use]
    pub const fn from_degrees(degrees: f64) -> Self {
        Self { degrees }
    }

    /// Returns the angle in degrees.
    #[inline]
    #[must_use]
    pub const fn degrees(self) -> f64 {
        self.degrees
    }

    /// Parses a CSS angle (`deg`, `grad`, `rad`, `turn`) or a bare number of
    /// degrees.
    ///
    /// Returns `None` for anything else, including non-finite values.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (number, per_unit) = if let Some(n) = text.strip_suffix("deg") {
            (n, 1.0)
        } else if let Some(n) = text.strip_suffix("grad") {
            (n, 0.9)
        } else if let Some(n) = text.strip_suffix("rad") {
            (n, 180.0 / PI)
        } else if let Some(n) = text.strip_suffix("turn") {
            (n, 360.0)
        } else {
            (text, 1.0)
        };
        let value = parse_finite(number)?;
        Some(Self::from_degrees(value * per_unit))
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}deg", css_number(self.degrees))
    }
}

/// Fixed placement of one card within the stack.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardMetrics {
    /// Horizontal offset, in percent.
    pub left: f64,
    /// Vertical offset, in percent.
    pub top: f64,
    /// Resting rotation.
    pub rotation: Angle,
}

impl CardMetrics {
    /// Creates metrics from already-parsed values.
    #[inline]
    #[must_use]
    pub const fn new(left: f64, top: f64, rotation: Angle) -> Self {
        Self {
            left,
            top,
            rotation,
        }
    }

    /// Builds metrics from raw attribute values, defaulting each missing or
    /// malformed one to zero.
    #[must_use]
    pub fn from_attributes(left: Option<&str>, top: Option<&str>, rotation: Option<&str>) -> Self {
        Self {
            left: left.and_then(parse_offset).unwrap_or(0.0),
            top: top.and_then(parse_offset).unwrap_or(0.0),
            rotation: rotation.and_then(Angle::parse).unwrap_or(Angle::ZERO),
        }
    }
}

/// Parses an offset in percent, with or without a trailing `%`.
#[must_use]
pub fn parse_offset(text: &str) -> Option<f64> {
    let text = text.trim();
    parse_finite(text.strip_suffix('%').unwrap_or(text))
}

fn parse_finite(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Folds `-0.0` into `0.0` so CSS output never reads `-0`.
#[inline]
pub(crate) fn css_number(value: f64) -> f64 {
    value + 0.0
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn angle_units() {
        assert_eq!(Angle::parse("12deg"), Some(Angle::from_degrees(12.0)));
        assert_eq!(Angle::parse(" -4.5deg "), Some(Angle::from_degrees(-4.5)));
        assert_eq!(Angle::parse("0.25turn"), Some(Angle::from_degrees(90.0)));
        assert_eq!(Angle::parse("100grad"), Some(Angle::from_degrees(90.0)));
        assert_eq!(Angle::parse("7"), Some(Angle::from_degrees(7.0)));

        let rad = Angle::parse("3.141592653589793rad").map(Angle::degrees);
        assert!(
            rad.is_some_and(|d| (d - 180.0).abs() < 1e-9),
            "pi radians is a half turn"
        );
    }

    #[test]
    fn angle_rejects_garbage() {
        assert_eq!(Angle::parse(""), None);
        assert_eq!(Angle::parse("deg"), None);
        assert_eq!(Angle::parse("tilted"), None);
        assert_eq!(Angle::parse("NaNdeg"), None);
        assert_eq!(Angle::parse("infdeg"), None);
    }

    #[test]
    fn angle_renders_as_degrees() {
        assert_eq!(Angle::from_degrees(5.0).to_string(), "5deg");
        assert_eq!(Angle::from_degrees(-0.0).to_string(), "0deg");
        assert_eq!(Angle::parse("0.5turn").unwrap().to_string(), "180deg");
    }

    #[test]
    fn offsets_accept_percent_suffix() {
        assert_eq!(parse_offset("3"), Some(3.0));
        assert_eq!(parse_offset("-2.5%"), Some(-2.5));
        assert_eq!(parse_offset("%"), None);
        assert_eq!(parse_offset("left"), None);
    }

    #[test]
    fn metrics_default_missing_and_malformed_to_zero() {
        let m = CardMetrics::from_attributes(Some("2"), None, Some("sideways"));
        assert_eq!(m, CardMetrics::new(2.0, 0.0, Angle::ZERO));

        let m = CardMetrics::from_attributes(Some("1"), Some("-3"), Some("8deg"));
        assert_eq!(m, CardMetrics::new(1.0, -3.0, Angle::from_degrees(8.0)));

        assert_eq!(
            CardMetrics::from_attributes(None, None, None),
            CardMetrics::default()
        );
    }
}
