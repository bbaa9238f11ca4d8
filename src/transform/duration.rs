// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Seconds counters shown as whole minutes.

use crate::error::Result;
use crate::transform::{Transform, is_unset};

/// Formats a seconds counter as whole minutes, rounding down.
///
/// Counters that have no value yet show as `"N/A"`; so does anything
/// that is not a number, rather than leaking a parse artifact onto a
/// display panel.
///
/// # Examples
///
/// ```
/// use habxform_lib::transform::{SecondsToMinutes, Transform};
///
/// let minutes = SecondsToMinutes;
/// assert_eq!(minutes.apply("3599")?, "59");
/// assert_eq!(minutes.apply("UNDEF")?, "N/A");
/// # Ok::<(), habxform_lib::error::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecondsToMinutes;

impl Transform for SecondsToMinutes {
    fn apply(&self, input: &str) -> Result<String> {
        Ok(seconds_to_minutes(input))
    }
}

/// Formats a seconds counter as whole minutes in one call.
///
/// Function form of [`SecondsToMinutes`] for callers that do not go
/// through the [`Transform`] trait.
#[must_use]
pub fn seconds_to_minutes(input: &str) -> String {
    if is_unset(input) {
        return String::from("N/A");
    }
    match input.trim().parse::<f64>() {
        Ok(seconds) if seconds.is_finite() => {
            // Counters stay far below 2^63 minutes.
            #[allow(clippy::cast_possible_truncation)]
            let minutes = (seconds / 60.0).floor() as i64;
            minutes.to_string()
        }
        _ => {
            tracing::debug!(input = %input, "Seconds counter is not numeric, showing placeholder");
            String::from("N/A")
        }
    }
}
