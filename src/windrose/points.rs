// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The 128-point compass rose.
//!
//! One entry per 1/128th of the circle (2.8125°), ordered clockwise
//! starting at North. Each entry carries the resolution level at which
//! it first becomes visible: the four cardinal points are level 0,
//! half-winds and by-points fill in at levels 1-3, and the half- and
//! quarter-point subdivisions complete the rose at levels 4 and 5.

use crate::types::Depth;

/// One entry of the compass rose.
///
/// # Examples
///
/// ```
/// use habxform_lib::windrose::COMPASS_POINTS;
///
/// let north = &COMPASS_POINTS[0];
/// assert_eq!(north.symbol(), "N");
/// assert_eq!(north.name(), "North");
/// assert_eq!(north.resolution(), 0);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct CompassPoint {
    symbol: &'static str,
    name: &'static str,
    resolution: u8,
}

impl CompassPoint {
    /// Returns the short abbreviation (e.g. `"NbE¾E"`).
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Returns the full descriptive name (e.g. `"North by East three quarters East"`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the resolution level at which this point first appears (0-5).
    #[must_use]
    pub const fn resolution(&self) -> u8 {
        self.resolution
    }

    /// Returns true if this point belongs to the rose at the given depth.
    #[must_use]
    pub fn visible_at(&self, depth: Depth) -> bool {
        self.resolution <= depth.value()
    }
}

const fn point(symbol: &'static str, name: &'static str, resolution: u8) -> CompassPoint {
    CompassPoint {
        symbol,
        name,
        resolution,
    }
}

/// The full compass rose: 128 points, one per 2.8125° sector, starting
/// at North and proceeding clockwise.
pub static COMPASS_POINTS: [CompassPoint; 128] = [
    point("N", "North", 0),
    point("N¼E", "North quarter East", 5),
    point("N½E", "North half East", 4),
    point("N¾E", "North three quarters East", 5),
    point("NbE", "North by East", 3),
    point("NbE¼E", "North by East quarter East", 5),
    point("NbE½E", "North by East half East", 4),
    point("NbE¾E", "North by East three quarters East", 5),
    point("NNE", "North North East", 2),
    point("NNE¼E", "North North East quarter East", 5),
    point("NNE½E", "North North East half East", 4),
    point("NNE¾E", "North North East three quarters East", 5),
    point("NEbN", "North East by North", 3),
    point("NEbN¾N", "North East by North three quarters North", 5),
    point("NEbN½N", "North East by North half North", 4),
    point("NEbN¼N", "North East by North quarter North", 5),
    point("NE", "North East", 1),
    point("NE¼E", "North East quarter East", 5),
    point("NE½E", "North East half East", 4),
    point("NE¾E", "North East three quarters East", 5),
    point("NEbE", "North East by East", 3),
    point("NEbE¼E", "North East by East quarter East", 5),
    point("NEbE½E", "North East by East half East", 4),
    point("NEbE¾E", "North East by East three quarters East", 5),
    point("ENE", "East North East", 2),
    point("ENE¼E", "East North East quarter East", 5),
    point("ENE½E", "East North East half East", 4),
    point("ENE¾E", "East North East three quarters East", 5),
    point("EbN", "East by North", 3),
    point("E¾N", "East three quarters North", 5),
    point("E½N", "East half North", 4),
    point("E¼N", "East quarter North", 5),
    point("E", "East", 0),
    point("E¼S", "East quarter South", 5),
    point("E½S", "East half South", 4),
    point("E¾S", "East three quarters South", 5),
    point("EbS", "East by South", 3),
    point("ESE¾E", "East South East three quarters East", 5),
    point("ESE½E", "East South East half East", 4),
    point("ESE¼E", "East South East quarter East", 5),
    point("ESE", "East South East", 2),
    point("SEbE¾E", "South East by East three quarters East", 5),
    point("SEbE½E", "South East by East half East", 4),
    point("SEbE¼E", "South East by East quarter East", 5),
    point("SEbE", "South East by East", 3),
    point("SE¾E", "South East three quarters East", 5),
    point("SE½E", "South East half East", 4),
    point("SE¼E", "South East quarter East", 5),
    point("SE", "South East", 1),
    point("SE¼S", "South East quarter South", 5),
    point("SE½S", "South East half South", 4),
    point("SE¾S", "South East three quarters South", 5),
    point("SEbS", "South East by South", 3),
    point("SSE¾E", "South South East three quarters East", 5),
    point("SSE½E", "South South East half East", 4),
    point("SSE¼E", "South South East quarter East", 5),
    point("SSE", "South South East", 2),
    point("SbE¾E", "South by East three quarters East", 5),
    point("SbE½E", "South by East half East", 4),
    point("SbE¼E", "South by East quarter East", 5),
    point("SbE", "South by East", 3),
    point("S¾E", "South three quarters East", 5),
    point("S½E", "South half East", 4),
    point("S¼E", "South quarter East", 5),
    point("S", "South", 0),
    point("S¼W", "South quarter West", 5),
    point("S½W", "South half West", 4),
    point("S¾W", "South three quarters West", 5),
    point("SbW", "South by West", 3),
    point("SbW¼W", "South by West quarter West", 5),
    point("SbW½W", "South by West half West", 4),
    point("SbW¾W", "South by West three quarters West", 5),
    point("SSW", "South South West", 2),
    point("SSW¼W", "South South West quarter West", 5),
    point("SSW½W", "South South West half West", 4),
    point("SSW¾W", "South South West three quarters West", 5),
    point("SWbS", "South West by South", 3),
    point("SW¾S", "South West three quarters South", 5),
    point("SW½S", "South West half South", 4),
    point("SW¼S", "South West quarter South", 5),
    point("SW", "South West", 1),
    point("SW¼W", "South West quarter West", 5),
    point("SW½W", "South West half West", 4),
    point("SW¾W", "South West three quarters West", 5),
    point("SWbW", "South West by West", 3),
    point("SWbW¼W", "South West by West quarter West", 5),
    point("SWbW½W", "South West by West half West", 4),
    point("SWbW¾W", "South West by West three quarters West", 5),
    point("WSW", "West South West", 2),
    point("WSW¼W", "West South West quarter West", 5),
    point("WSW½W", "West South West half West", 4),
    point("WSW¾W", "West South West three quarters West", 5),
    point("WbS", "West by South", 3),
    point("W¾S", "West three quarters South", 5),
    point("W½S", "West half South", 4),
    point("W¼S", "West quarter South", 5),
    point("W", "West", 0),
    point("W¼N", "West quarter North", 5),
    point("W½N", "West half North", 4),
    point("W¾N", "West three quarters North", 5),
    point("WbN", "West by North", 3),
    point("WNW¾W", "West North West three quarters West", 5),
    point("WNW½W", "West North West half West", 4),
    point("WNW¼W", "West North West quarter West", 5),
    point("WNW", "West North West", 2),
    point("NWbW¾W", "North West by West three quarters West", 5),
    point("NWbW½W", "North West by West half West", 4),
    point("NWbW¼W", "North West by West quarter West", 5),
    point("NWbW", "North West by West", 3),
    point("NW¾W", "North West three quarters West", 5),
    point("NW½W", "North West half West", 4),
    point("NW¼W", "North West quarter West", 5),
    point("NW", "North West", 1),
    point("NW¼N", "North West quarter North", 5),
    point("NW½N", "North West half North", 4),
    point("NW¾N", "North West three quarters North", 5),
    point("NWbN", "North West by North", 3),
    point("NNW¾W", "North North West three quarters West", 5),
    point("NNW½W", "North North West half West", 4),
    point("NNW¼W", "North North West quarter West", 5),
    point("NNW", "North North West", 2),
    point("NbW¾W", "North by West three quarters West", 5),
    point("NbW½W", "North by West half West", 4),
    point("NbW¼W", "North by West quarter West", 5),
    point("NbW", "North by West", 3),
    point("N¾W", "North three quarters West", 5),
    point("N½W", "North half West", 4),
    point("N¼W", "North quarter West", 5),
];
