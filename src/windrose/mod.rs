// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Compass bearing classification.
//!
//! A [`Windrose`] subdivides the compass circle into `4 * 2^depth`
//! equal sectors and maps a heading in degrees onto the traditional
//! point label of the sector it falls in. Sectors are centered on
//! their points: at depth 0 everything within ±45° of 0° is North,
//! within ±45° of 90° is East, and so on.
//!
//! # Examples
//!
//! ```
//! use habxform_lib::types::{Depth, Heading};
//! use habxform_lib::windrose::{PointFormat, Windrose};
//!
//! let rose = Windrose::new(Depth::new(1)?);
//! let heading = Heading::new(200.0)?;
//!
//! assert_eq!(rose.classify(heading, PointFormat::Symbol), "S");
//! assert_eq!(rose.classify(heading, PointFormat::Name), "South");
//! # Ok::<(), habxform_lib::error::ValueError>(())
//! ```

mod points;

use std::str::FromStr;

use crate::error::ValueError;
use crate::types::{Depth, Heading};

pub use points::{COMPASS_POINTS, CompassPoint};

/// Output style for a classified bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointFormat {
    /// Short abbreviation, e.g. `"NNE"`.
    Symbol,
    /// Full descriptive name, e.g. `"North North East"`.
    #[default]
    Name,
}

impl PointFormat {
    /// Returns the lowercase identifier of this format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::Name => "name",
        }
    }
}

impl std::fmt::Display for PointFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PointFormat {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("symbol") {
            Ok(Self::Symbol)
        } else if trimmed.eq_ignore_ascii_case("name") {
            Ok(Self::Name)
        } else {
            Err(ValueError::InvalidPointFormat(s.to_string()))
        }
    }
}

/// A compass rose fixed at one resolution level.
///
/// Construction selects the subset of [`COMPASS_POINTS`] visible at
/// the requested depth; classification then works purely on that
/// subset, so every sector index resolves to a point of the chosen
/// resolution.
///
/// # Examples
///
/// ```
/// use habxform_lib::types::{Depth, Heading};
/// use habxform_lib::windrose::{PointFormat, Windrose};
///
/// let rose = Windrose::new(Depth::MAX);
/// let heading = Heading::new(10.0)?;
///
/// assert_eq!(rose.classify(heading, PointFormat::Symbol), "NbE");
/// assert_eq!(rose.classify(heading, PointFormat::Name), "North by East");
/// # Ok::<(), habxform_lib::error::ValueError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Windrose {
    depth: Depth,
    active: Vec<&'static CompassPoint>,
}

impl Windrose {
    /// Creates a rose at the given resolution level.
    #[must_use]
    pub fn new(depth: Depth) -> Self {
        let active: Vec<&'static CompassPoint> = COMPASS_POINTS
            .iter()
            .filter(|p| p.visible_at(depth))
            .collect();
        debug_assert_eq!(active.len(), depth.point_count());
        Self { depth, active }
    }

    /// Returns the resolution level of this rose.
    #[must_use]
    pub const fn depth(&self) -> Depth {
        self.depth
    }

    /// Returns the points visible at this resolution, in clockwise order.
    #[must_use]
    pub fn points(&self) -> &[&'static CompassPoint] {
        &self.active
    }

    /// Returns the compass point whose sector contains the heading.
    ///
    /// Sectors are centered on their points, so the half-sector shift
    /// below makes plain truncation round the heading to the nearest
    /// point. Any finite heading is accepted; it is reduced modulo
    /// 360° first.
    #[must_use]
    pub fn point(&self, heading: Heading) -> &'static CompassPoint {
        let step = self.depth.sector_width();
        let adjusted = (heading.degrees() + step / 2.0).rem_euclid(360.0);
        // The quotient is at most 128, and rem_euclid can round up to
        // exactly 360.0 for tiny negative inputs, so wrap once more.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let sector = (adjusted / step) as usize % self.active.len();
        self.active[sector]
    }

    /// Classifies a heading into a point label in the requested format.
    #[must_use]
    pub fn classify(&self, heading: Heading, format: PointFormat) -> &'static str {
        let point = self.point(heading);
        match format {
            PointFormat::Symbol => point.symbol(),
            PointFormat::Name => point.name(),
        }
    }
}

/// Classifies a heading in one step.
///
/// Convenience wrapper that builds a [`Windrose`] for the given depth
/// and classifies a single heading with it. Callers classifying many
/// headings at the same depth should construct the rose once instead.
///
/// # Examples
///
/// ```
/// use habxform_lib::types::{Depth, Heading};
/// use habxform_lib::windrose::{self, PointFormat};
///
/// let label = windrose::classify(Heading::new(359.0)?, Depth::MIN, PointFormat::Name);
/// assert_eq!(label, "North");
/// # Ok::<(), habxform_lib::error::ValueError>(())
/// ```
#[must_use]
pub fn classify(heading: Heading, depth: Depth, format: PointFormat) -> &'static str {
    Windrose::new(depth).classify(heading, format)
}
