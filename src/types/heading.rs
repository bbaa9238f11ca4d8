// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heading type for directional angles.
//!
//! A heading is a direction in degrees measured clockwise from North.
//! Bindings deliver headings as raw strings and occasionally as values
//! outside [0, 360): negative bearings from some weather stations,
//! accumulated angles above 360 from others. The type accepts any
//! finite value and leaves normalization to the consumer.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ParseError, ValueError};

/// A directional angle in degrees, clockwise from North.
///
/// Any finite value is accepted, including negative angles and angles
/// of 360° or more. Non-finite values are rejected at construction.
///
/// # Examples
///
/// ```
/// use habxform_lib::types::Heading;
///
/// let heading = Heading::new(275.0).unwrap();
/// assert!((heading.degrees() - 275.0).abs() < f64::EPSILON);
///
/// // Out-of-range values are kept verbatim; normalized() wraps them
/// let wrapped = Heading::new(-90.0).unwrap();
/// assert!((wrapped.normalized() - 270.0).abs() < f64::EPSILON);
///
/// // Engine strings parse directly
/// let parsed: Heading = "312.5".parse().unwrap();
/// assert!((parsed.degrees() - 312.5).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Heading(f64);

impl Heading {
    /// Due North (0°).
    pub const NORTH: Self = Self(0.0);

    /// Creates a new heading.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NonFiniteHeading` if `degrees` is NaN or
    /// infinite.
    pub fn new(degrees: f64) -> Result<Self, ValueError> {
        if !degrees.is_finite() {
            return Err(ValueError::NonFiniteHeading(degrees));
        }
        Ok(Self(degrees))
    }

    /// Returns the heading as given, without normalization.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        self.0
    }

    /// Returns the equivalent angle in the range [0, 360).
    ///
    /// Negative headings wrap backwards: -1° is 359°.
    #[must_use]
    pub fn normalized(&self) -> f64 {
        let wrapped = self.0.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative
        // inputs; 360° and 0° are the same direction.
        if wrapped >= 360.0 { 0.0 } else { wrapped }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl TryFrom<f64> for Heading {
    type Error = ValueError;

    fn try_from(degrees: f64) -> Result<Self, Self::Error> {
        Self::new(degrees)
    }
}

impl FromStr for Heading {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let degrees: f64 = trimmed.parse().map_err(|_| ParseError::InvalidValue {
            field: "heading".to_string(),
            message: format!("not a number: {trimmed}"),
        })?;
        Ok(Self::new(degrees)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_accepts_any_finite_value() {
        assert!(Heading::new(0.0).is_ok());
        assert!(Heading::new(359.9).is_ok());
        assert!(Heading::new(-720.0).is_ok());
        assert!(Heading::new(1234.5).is_ok());
    }

    #[test]
    fn heading_rejects_non_finite() {
        assert!(Heading::new(f64::NAN).is_err());
        assert!(Heading::new(f64::INFINITY).is_err());
        assert!(Heading::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn heading_normalized_in_range() {
        assert!((Heading::new(45.0).unwrap().normalized() - 45.0).abs() < f64::EPSILON);
        assert!((Heading::new(-1.0).unwrap().normalized() - 359.0).abs() < f64::EPSILON);
        assert!((Heading::new(725.0).unwrap().normalized() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn heading_normalized_full_turn_is_north() {
        assert!(Heading::new(360.0).unwrap().normalized().abs() < f64::EPSILON);
        assert!(Heading::new(-360.0).unwrap().normalized().abs() < f64::EPSILON);
    }

    #[test]
    fn heading_normalized_tiny_negative_wraps_to_zero_side() {
        // rem_euclid rounds -1e-18 % 360 up to exactly 360.0
        let n = Heading::new(-1e-18).unwrap().normalized();
        assert!((0.0..360.0).contains(&n));
    }

    #[test]
    fn heading_from_str() {
        let h: Heading = "275".parse().unwrap();
        assert!((h.degrees() - 275.0).abs() < f64::EPSILON);

        let h: Heading = " 12.7 ".parse().unwrap();
        assert!((h.degrees() - 12.7).abs() < f64::EPSILON);

        let h: Heading = "-45".parse().unwrap();
        assert!((h.degrees() + 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn heading_from_str_invalid() {
        assert!("".parse::<Heading>().is_err());
        assert!("north".parse::<Heading>().is_err());
        assert!("12,5".parse::<Heading>().is_err());
    }

    #[test]
    fn heading_from_str_non_finite() {
        // f64 happily parses these; the heading must not
        assert!("NaN".parse::<Heading>().is_err());
        assert!("inf".parse::<Heading>().is_err());
    }

    #[test]
    fn heading_display() {
        assert_eq!(Heading::new(42.5).unwrap().to_string(), "42.5°");
    }
}
