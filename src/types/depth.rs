// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Depth type for windrose resolution.
//!
//! This module provides a type-safe representation of the windrose
//! resolution level, ensuring values are always within the supported
//! range of 0-5.

use std::fmt;

use crate::error::ValueError;

/// Windrose resolution level (0-5).
///
/// The depth controls how finely the compass circle is subdivided:
/// `4 * 2^depth` sectors, so depth 0 yields the 4 cardinal points and
/// depth 5 the full 128-point rose.
///
/// | depth | points | sector width |
/// |-------|--------|--------------|
/// | 0     | 4      | 90°          |
/// | 1     | 8      | 45°          |
/// | 2     | 16     | 22.5°        |
/// | 3     | 32     | 11.25°       |
/// | 4     | 64     | 5.625°       |
/// | 5     | 128    | 2.8125°      |
///
/// # Examples
///
/// ```
/// use habxform_lib::types::Depth;
///
/// let depth = Depth::new(2).unwrap();
/// assert_eq!(depth.point_count(), 16);
/// assert!((depth.sector_width() - 22.5).abs() < f64::EPSILON);
///
/// // Invalid values return error
/// assert!(Depth::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Depth(u8);

impl Depth {
    /// Coarsest resolution (4 cardinal points).
    pub const MIN: Self = Self(0);

    /// Finest resolution (full 128-point rose).
    pub const MAX: Self = Self(5);

    /// Creates a new depth value.
    ///
    /// # Arguments
    ///
    /// * `value` - The resolution level (0-5)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 5.
    ///
    /// # Examples
    ///
    /// ```
    /// use habxform_lib::types::Depth;
    ///
    /// let depth = Depth::new(3).unwrap();
    /// assert_eq!(depth.value(), 3);
    /// ```
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > Self::MAX.0 {
            return Err(ValueError::OutOfRange {
                min: Self::MIN.0,
                max: Self::MAX.0,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Returns the resolution level.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the number of compass points visible at this depth.
    #[must_use]
    pub const fn point_count(&self) -> usize {
        4 << self.0
    }

    /// Returns the angular width of one sector, in degrees.
    ///
    /// One of 90, 45, 22.5, 11.25, 5.625 or 2.8125, all exact in
    /// binary floating point.
    #[must_use]
    pub fn sector_width(&self) -> f64 {
        360.0 / f64::from(4_u32 << self.0)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Depth {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
