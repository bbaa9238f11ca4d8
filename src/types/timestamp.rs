// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Timestamp type for access-event records.
//!
//! Access-control bindings report event times as local ISO 8601
//! strings (`"2026-01-16T14:35:22"`), occasionally with fractional
//! seconds or a UTC offset appended. Display formatting needs the date
//! and time parts separately, and a record whose timestamp cannot be
//! parsed must still be displayable, so the raw string is always
//! retained.
//!
//! # Examples
//!
//! ```
//! use habxform_lib::types::EventTimestamp;
//!
//! let ts = EventTimestamp::parse("2026-01-16T14:35:22");
//! assert_eq!(ts.time_hms().as_deref(), Some("14:35:22"));
//! assert_eq!(ts.date_iso().as_deref(), Some("2026-01-16"));
//! assert_eq!(ts.date_dmy().as_deref(), Some("16-01-2026"));
//!
//! // Unparseable input keeps the raw text for fallback display
//! let odd = EventTimestamp::parse("about noon");
//! assert!(odd.time_hms().is_none());
//! assert_eq!(odd.raw(), "about noon");
//! ```

use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;

/// An event timestamp as delivered by an access-control binding.
///
/// Parsing is attempted once at construction; the original string is
/// kept either way. Offsets are dropped after parsing: events are
/// displayed in the wall-clock time the binding reported, matching the
/// rest of the site's displays.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct EventTimestamp {
    raw: String,
    parsed: Option<NaiveDateTime>,
}

impl EventTimestamp {
    /// Parses a timestamp string, keeping the raw text.
    ///
    /// Accepted forms:
    ///
    /// - `"2026-01-16T14:35:22"` (with or without fractional seconds)
    /// - `"2026-01-16 14:35:22"` (space separator)
    /// - `"2026-01-16T14:35:22+01:00"` / `"...Z"` (offset is dropped,
    ///   the local wall time is kept)
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        Self {
            raw: s.to_string(),
            parsed: Self::parse_naive(trimmed).or_else(|| Self::parse_with_offset(trimmed)),
        }
    }

    fn parse_naive(s: &str) -> Option<NaiveDateTime> {
        let formats = [
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%d %H:%M:%S%.f",
        ];

        formats
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    }

    fn parse_with_offset(s: &str) -> Option<NaiveDateTime> {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.naive_local())
    }

    /// Returns the timestamp string exactly as the binding sent it.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed datetime, if the raw text was parseable.
    #[must_use]
    pub const fn naive(&self) -> Option<NaiveDateTime> {
        self.parsed
    }

    /// Returns true if the raw text parsed as a datetime.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        self.parsed.is_some()
    }

    /// Returns the time of day as `HH:MM:SS`, if parseable.
    #[must_use]
    pub fn time_hms(&self) -> Option<String> {
        self.parsed.map(|dt| dt.format("%H:%M:%S").to_string())
    }

    /// Returns the date as `YYYY-MM-DD`, if parseable.
    #[must_use]
    pub fn date_iso(&self) -> Option<String> {
        self.parsed.map(|dt| dt.format("%Y-%m-%d").to_string())
    }

    /// Returns the date as `DD-MM-YYYY`, if parseable.
    #[must_use]
    pub fn date_dmy(&self) -> Option<String> {
        self.parsed.map(|dt| dt.format("%d-%m-%Y").to_string())
    }
}

impl From<String> for EventTimestamp {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for EventTimestamp {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl fmt::Display for EventTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
