// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dimmer level scaling between percent and device registers.

use crate::error::{Error, ParseError, Result, ValueError};
use crate::transform::{Transform, is_unset};

/// Linear scale between a device's raw register range and percent.
///
/// The register value `max_raw` maps to 100% and 0 to 0%. Values
/// outside the range scale linearly rather than clamp, so an
/// over-range register reading shows as more than 100%.
///
/// # Examples
///
/// ```
/// use habxform_lib::transform::DimmerScale;
///
/// let scale = DimmerScale::new(255.0)?;
/// assert_eq!(scale.to_percent(128.0), 50);
/// assert_eq!(scale.from_percent(50.0), 128);
/// # Ok::<(), habxform_lib::error::ValueError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimmerScale {
    max_raw: f64,
}

impl DimmerScale {
    /// Creates a scale whose register reading for fully on is `max_raw`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidScale` unless `max_raw` is positive
    /// and finite.
    pub fn new(max_raw: f64) -> Result<Self, ValueError> {
        if !max_raw.is_finite() || max_raw <= 0.0 {
            return Err(ValueError::InvalidScale(max_raw));
        }
        Ok(Self { max_raw })
    }

    /// Returns the register value that maps to 100%.
    #[must_use]
    pub const fn max_raw(&self) -> f64 {
        self.max_raw
    }

    /// Converts a raw register value to the nearest whole percent.
    #[must_use]
    pub fn to_percent(&self, raw: f64) -> i64 {
        round_to_i64(raw * 100.0 / self.max_raw)
    }

    /// Converts a percent level to the nearest whole register value.
    #[must_use]
    pub fn from_percent(&self, percent: f64) -> i64 {
        round_to_i64(percent * self.max_raw / 100.0)
    }
}

impl Default for DimmerScale {
    /// A register range that already is percent (`max_raw` = 100).
    fn default() -> Self {
        Self { max_raw: 100.0 }
    }
}

/// Converts a raw dimmer register reading to a percent string.
///
/// # Examples
///
/// ```
/// use habxform_lib::transform::{DimmerRead, DimmerScale, Transform};
///
/// let read = DimmerRead::new(DimmerScale::new(255.0)?);
/// assert_eq!(read.apply("255")?, "100");
/// assert_eq!(read.apply("128")?, "50");
/// # Ok::<(), habxform_lib::error::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DimmerRead {
    scale: DimmerScale,
}

impl DimmerRead {
    /// Creates a reading transformation over the given scale.
    #[must_use]
    pub const fn new(scale: DimmerScale) -> Self {
        Self { scale }
    }

    /// Returns the underlying scale.
    #[must_use]
    pub const fn scale(&self) -> DimmerScale {
        self.scale
    }
}

impl Transform for DimmerRead {
    fn apply(&self, input: &str) -> Result<String> {
        if is_unset(input) {
            return Err(Error::MissingData);
        }
        let raw = parse_finite(input, "register value")?;
        Ok(self.scale.to_percent(raw).to_string())
    }
}

/// Converts a percent command to a raw dimmer register string.
///
/// The switch commands `ON` and `OFF` map to the ends of the register
/// range; everything else is read as a percent level.
///
/// # Examples
///
/// ```
/// use habxform_lib::transform::{DimmerScale, DimmerWrite, Transform};
///
/// let write = DimmerWrite::new(DimmerScale::new(255.0)?);
/// assert_eq!(write.apply("ON")?, "255");
/// assert_eq!(write.apply("OFF")?, "0");
/// assert_eq!(write.apply("50")?, "128");
/// # Ok::<(), habxform_lib::error::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DimmerWrite {
    scale: DimmerScale,
}

impl DimmerWrite {
    /// Creates a command transformation over the given scale.
    #[must_use]
    pub const fn new(scale: DimmerScale) -> Self {
        Self { scale }
    }

    /// Returns the underlying scale.
    #[must_use]
    pub const fn scale(&self) -> DimmerScale {
        self.scale
    }
}

impl Transform for DimmerWrite {
    fn apply(&self, input: &str) -> Result<String> {
        if is_unset(input) {
            return Err(Error::MissingData);
        }
        let register = match input.trim() {
            "ON" => self.scale.from_percent(100.0),
            "OFF" => self.scale.from_percent(0.0),
            other => self.scale.from_percent(parse_finite(other, "percent")?),
        };
        Ok(register.to_string())
    }
}

// The operands are at most a few orders of magnitude above the
// register range, nowhere near i64 limits.
#[allow(clippy::cast_possible_truncation)]
fn round_to_i64(value: f64) -> i64 {
    value.round() as i64
}

fn parse_finite(input: &str, field: &str) -> Result<f64> {
    let value: f64 = input.trim().parse().map_err(|_| ParseError::InvalidValue {
        field: field.to_string(),
        message: format!("not a number: {input:?}"),
    })?;
    if !value.is_finite() {
        return Err(ParseError::InvalidValue {
            field: field.to_string(),
            message: format!("not a finite number: {input:?}"),
        }
        .into());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_rejects_degenerate_ranges() {
        assert!(DimmerScale::new(0.0).is_err());
        assert!(DimmerScale::new(-255.0).is_err());
        assert!(DimmerScale::new(f64::NAN).is_err());
        assert!(DimmerScale::new(f64::INFINITY).is_err());
        assert!(DimmerScale::new(1023.0).is_ok());
    }

    #[test]
    fn percent_scale_is_identity() {
        let read = DimmerRead::default();
        assert_eq!(read.apply("0").unwrap(), "0");
        assert_eq!(read.apply("75").unwrap(), "75");
        assert_eq!(read.apply("75.4").unwrap(), "75");
        assert_eq!(read.apply("75.5").unwrap(), "76");
        assert_eq!(read.apply("100").unwrap(), "100");
    }

    #[test]
    fn read_scales_register_to_percent() {
        let read = DimmerRead::new(DimmerScale::new(255.0).unwrap());
        assert_eq!(read.apply("0").unwrap(), "0");
        assert_eq!(read.apply("128").unwrap(), "50");
        assert_eq!(read.apply("255").unwrap(), "100");
        // Over-range readings scale through rather than clamp.
        assert_eq!(read.apply("300").unwrap(), "118");
    }

    #[test]
    fn write_maps_switch_commands_to_range_ends() {
        let write = DimmerWrite::new(DimmerScale::new(255.0).unwrap());
        assert_eq!(write.apply("ON").unwrap(), "255");
        assert_eq!(write.apply("OFF").unwrap(), "0");
    }

    #[test]
    fn write_scales_percent_to_register() {
        let write = DimmerWrite::new(DimmerScale::new(255.0).unwrap());
        assert_eq!(write.apply("0").unwrap(), "0");
        assert_eq!(write.apply("50").unwrap(), "128");
        assert_eq!(write.apply("100").unwrap(), "255");
        assert_eq!(write.apply("33.3").unwrap(), "85");
    }

    #[test]
    fn unset_input_is_missing_data() {
        let read = DimmerRead::default();
        let write = DimmerWrite::default();
        for input in ["NULL", "UNDEF", "", "  "] {
            assert!(matches!(read.apply(input), Err(Error::MissingData)));
            assert!(matches!(write.apply(input), Err(Error::MissingData)));
        }
    }

    #[test]
    fn garbage_input_is_rejected() {
        let read = DimmerRead::default();
        assert!(matches!(read.apply("bright"), Err(Error::Parse(_))));
        assert!(matches!(read.apply("NaN"), Err(Error::Parse(_))));
        assert!(matches!(read.apply("inf"), Err(Error::Parse(_))));

        let write = DimmerWrite::default();
        assert!(matches!(write.apply("on"), Err(Error::Parse(_))));
        assert!(matches!(write.apply("12%"), Err(Error::Parse(_))));
    }
}
