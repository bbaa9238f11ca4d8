// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by the transformations.
//!
//! Each type ensures its values are valid at construction time, so the
//! transformation code never re-checks ranges or re-parses spellings.
//!
//! # Types
//!
//! - [`Depth`] - Windrose resolution level (0-5)
//! - [`Heading`] - Directional angle in degrees, clockwise from North
//! - [`BinaryState`] - Two-level signal behind `1/0`, `ON/OFF`, `OPEN/CLOSED`
//! - [`EventTimestamp`] - ISO 8601 access-event timestamp with raw-text fallback

mod binary;
mod depth;
mod heading;
mod timestamp;

pub use binary::BinaryState;
pub use depth::Depth;
pub use heading::Heading;
pub use timestamp::EventTimestamp;
