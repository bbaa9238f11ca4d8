// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wind bearing display transformation.

use crate::error::{Error, Result};
use crate::transform::{Transform, is_unset};
use crate::types::{Depth, Heading};
use crate::windrose::{PointFormat, Windrose};

/// Formats a wind bearing in degrees as a compass point label.
///
/// The station publishes bearings as plain numbers; this renders them
/// as the point of a [`Windrose`] at the configured resolution, either
/// abbreviated or spelled out. The default matches a simple vane
/// display: the four cardinal directions by full name.
///
/// # Examples
///
/// ```
/// use habxform_lib::transform::{Transform, WindDirection};
/// use habxform_lib::types::Depth;
/// use habxform_lib::windrose::PointFormat;
///
/// let wind = WindDirection::new(Depth::new(1)?, PointFormat::Name);
/// assert_eq!(wind.apply("200")?, "South");
/// assert_eq!(wind.apply("330.5")?, "North West");
///
/// let vane = WindDirection::default();
/// assert_eq!(vane.apply("-1")?, "North");
/// assert!(vane.apply("NULL").is_err());
/// # Ok::<(), habxform_lib::error::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct WindDirection {
    rose: Windrose,
    format: PointFormat,
}

impl WindDirection {
    /// Creates a wind formatter at the given resolution and format.
    #[must_use]
    pub fn new(depth: Depth, format: PointFormat) -> Self {
        Self {
            rose: Windrose::new(depth),
            format,
        }
    }

    /// Returns the configured resolution level.
    #[must_use]
    pub const fn depth(&self) -> Depth {
        self.rose.depth()
    }

    /// Returns the configured output format.
    #[must_use]
    pub const fn format(&self) -> PointFormat {
        self.format
    }
}

impl Default for WindDirection {
    fn default() -> Self {
        Self::new(Depth::default(), PointFormat::default())
    }
}

impl Transform for WindDirection {
    fn apply(&self, input: &str) -> Result<String> {
        if is_unset(input) {
            return Err(Error::MissingData);
        }
        let heading: Heading = input.parse()?;
        Ok(self.rose.classify(heading, self.format).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_bearing_at_configured_depth() {
        let wind = WindDirection::new(Depth::new(2).unwrap(), PointFormat::Symbol);
        assert_eq!(wind.apply("0").unwrap(), "N");
        assert_eq!(wind.apply("22.5").unwrap(), "NNE");
        assert_eq!(wind.apply("292.5").unwrap(), "WNW");

        let spelled = WindDirection::new(Depth::new(2).unwrap(), PointFormat::Name);
        assert_eq!(spelled.apply("292.5").unwrap(), "West North West");
    }

    #[test]
    fn default_is_cardinal_names() {
        let wind = WindDirection::default();
        assert_eq!(wind.depth(), Depth::MIN);
        assert_eq!(wind.format(), PointFormat::Name);
        assert_eq!(wind.apply("100").unwrap(), "East");
        assert_eq!(wind.apply("359").unwrap(), "North");
    }

    #[test]
    fn bearings_outside_the_circle_wrap() {
        let wind = WindDirection::default();
        assert_eq!(wind.apply("-1").unwrap(), "North");
        assert_eq!(wind.apply("360").unwrap(), "North");
        assert_eq!(wind.apply("405").unwrap(), "East");
    }

    #[test]
    fn unset_input_is_missing_data() {
        let wind = WindDirection::default();
        for input in ["NULL", "UNDEF", "", "   "] {
            assert!(matches!(wind.apply(input), Err(Error::MissingData)));
        }
    }

    #[test]
    fn unparseable_bearing_is_rejected() {
        let wind = WindDirection::default();
        assert!(matches!(wind.apply("north"), Err(Error::Parse(_))));
        assert!(matches!(wind.apply("12deg"), Err(Error::Parse(_))));
        assert!(matches!(wind.apply("NaN"), Err(Error::Value(_))));
    }
}
