// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `HabXform` Lib - A Rust library of display transformations for
//! home-automation telemetry.
//!
//! Bindings deliver item states as plain strings. The transformations
//! in this library turn them into what a sitemap or wall panel should
//! show, and turn panel commands back into what the device register
//! expects. All of them are small immutable values behind the
//! [`Transform`] trait.
//!
//! # Supported Transformations
//!
//! - **Wind bearings**: degrees to compass point labels, from the four
//!   cardinals up to the full 128-point rose, abbreviated or spelled out
//! - **Dimmer levels**: percent to a device's register range and back
//! - **Binary inversion**: active-low Modbus bits to contact and
//!   switch states
//! - **Durations**: seconds counters shown as whole minutes
//! - **Access events**: badge entry and denial JSON payloads rendered
//!   as one-line summaries
//!
//! # Quick Start
//!
//! ## Classifying a wind bearing
//!
//! ```
//! use habxform_lib::{Depth, PointFormat, Transform, WindDirection};
//!
//! fn main() -> habxform_lib::Result<()> {
//!     let wind = WindDirection::new(Depth::new(2)?, PointFormat::Symbol);
//!
//!     assert_eq!(wind.apply("337.5")?, "NNW");
//!     assert_eq!(wind.apply("-45")?, "NW");
//!     Ok(())
//! }
//! ```
//!
//! ## Scaling a dimmer channel
//!
//! ```
//! use habxform_lib::{DimmerRead, DimmerScale, DimmerWrite, Transform};
//!
//! fn main() -> habxform_lib::Result<()> {
//!     // A device whose register runs 0-1023.
//!     let scale = DimmerScale::new(1023.0)?;
//!
//!     assert_eq!(DimmerRead::new(scale).apply("512")?, "50");
//!     assert_eq!(DimmerWrite::new(scale).apply("ON")?, "1023");
//!     assert_eq!(DimmerWrite::new(scale).apply("25")?, "256");
//!     Ok(())
//! }
//! ```
//!
//! ## Rendering the entry log
//!
//! ```
//! use habxform_lib::{EntryLogDated, Transform};
//!
//! fn main() -> habxform_lib::Result<()> {
//!     let payload = r#"{
//!         "firstName": "Jane",
//!         "lastName": "Doe",
//!         "doorName": "Front Door",
//!         "timestamp": "2026-01-16T14:35:22"
//!     }"#;
//!
//!     let line = EntryLogDated.apply(payload)?;
//!     assert_eq!(line, "Jane Doe entered Front Door on 2026-01-16 at 14:35:22");
//!
//!     // Items start out unset; panels still get a line.
//!     assert_eq!(EntryLogDated.apply("NULL")?, "No entries yet");
//!     Ok(())
//! }
//! ```

pub mod access;
pub mod error;
pub mod transform;
pub mod types;
pub mod windrose;

pub use access::{DeniedEvent, EntryEvent};
pub use error::{Error, ParseError, Result, ValueError};
pub use transform::{
    AccessDenied, BinaryInvert, ContactInvert, DimmerRead, DimmerScale, DimmerWrite, EntryLog,
    EntryLogDated, SecondsToMinutes, Transform, WindDirection,
};
pub use types::{BinaryState, Depth, EventTimestamp, Heading};
pub use windrose::{CompassPoint, PointFormat, Windrose};
