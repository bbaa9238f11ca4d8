// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Item-state transformations.
//!
//! Each transformation maps one raw item state or command string to
//! the string the other side should see, the way the automation
//! engine applies a transformation between a channel and an item.
//! They come in two flavors:
//!
//! - **Strict** transformations reject unusable input:
//!   [`WindDirection`], [`DimmerRead`] and [`DimmerWrite`] return
//!   [`Error::MissingData`](crate::error::Error::MissingData) for the
//!   engine's `NULL`/`UNDEF`/blank sentinels and a parse error for
//!   anything non-numeric, leaving the display fallback to the caller.
//! - **Tolerant** transformations always produce a display string:
//!   [`SecondsToMinutes`] shows `"N/A"`, the two inverters pass
//!   unrecognized states through unchanged, and the access-event
//!   formatters substitute fixed fallback lines.
//!
//! # Examples
//!
//! ```
//! use habxform_lib::transform::{SecondsToMinutes, Transform};
//!
//! let uptime = SecondsToMinutes;
//! assert_eq!(uptime.apply("3599")?, "59");
//! assert_eq!(uptime.apply("NULL")?, "N/A");
//! # Ok::<(), habxform_lib::error::Error>(())
//! ```

mod dimmer;
mod duration;
mod entry_log;
mod invert;
mod wind;

pub use dimmer::{DimmerRead, DimmerScale, DimmerWrite};
pub use duration::{SecondsToMinutes, seconds_to_minutes};
pub use entry_log::{AccessDenied, EntryLog, EntryLogDated};
pub use invert::{BinaryInvert, ContactInvert};
pub use wind::WindDirection;

use crate::error::Result;

/// A one-way string transformation between an item and its channel.
///
/// Implementations are plain immutable values; they can be shared
/// freely and applied from multiple threads at once.
pub trait Transform {
    /// Transforms one input string.
    ///
    /// # Errors
    ///
    /// Strict implementations return
    /// [`Error::MissingData`](crate::error::Error::MissingData) when
    /// the input is one of the no-data sentinels and
    /// [`Error::Parse`](crate::error::Error::Parse) when it cannot be
    /// interpreted. Tolerant implementations recover with a fallback
    /// string instead and never fail.
    fn apply(&self, input: &str) -> Result<String>;
}

/// Returns true for the placeholder strings the engine publishes when
/// an item has no usable value yet (`NULL`, `UNDEF` or blank).
pub(crate) fn is_unset(input: &str) -> bool {
    matches!(input.trim(), "" | "NULL" | "UNDEF")
}
