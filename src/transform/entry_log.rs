// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Access-event display lines.
//!
//! These transformations feed wall panels that show the most recent
//! badge activity, one line per item. They never fail: a panel always
//! needs something to display, so parse problems render as fixed
//! fallback lines instead of errors.

use crate::access::{DeniedEvent, EntryEvent};
use crate::error::Result;
use crate::transform::{Transform, is_unset};

/// Renders the latest granted entry as
/// `"<first> <last> entered <door> at HH:MM:SS"`.
///
/// Shows `"No entries yet"` before the first event and
/// `"Error parsing entry log"` for payloads that do not parse.
///
/// # Examples
///
/// ```
/// use habxform_lib::transform::{EntryLog, Transform};
///
/// let payload = r#"{
///     "firstName": "Jane",
///     "lastName": "Doe",
///     "doorName": "Front Door",
///     "timestamp": "2026-01-16T14:35:22"
/// }"#;
///
/// assert_eq!(EntryLog.apply(payload)?, "Jane Doe entered Front Door at 14:35:22");
/// assert_eq!(EntryLog.apply("NULL")?, "No entries yet");
/// # Ok::<(), habxform_lib::error::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryLog;

impl Transform for EntryLog {
    fn apply(&self, input: &str) -> Result<String> {
        if is_unset(input) {
            return Ok(String::from("No entries yet"));
        }
        match EntryEvent::from_json(input) {
            Ok(event) => Ok(event.summary()),
            Err(e) => {
                tracing::debug!(error = %e, "Entry payload failed to parse");
                Ok(String::from("Error parsing entry log"))
            }
        }
    }
}

/// Renders the latest granted entry with the calendar date included:
/// `"<first> <last> entered <door> on YYYY-MM-DD at HH:MM:SS"`.
///
/// Fallback lines match [`EntryLog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryLogDated;

impl Transform for EntryLogDated {
    fn apply(&self, input: &str) -> Result<String> {
        if is_unset(input) {
            return Ok(String::from("No entries yet"));
        }
        match EntryEvent::from_json(input) {
            Ok(event) => Ok(event.summary_with_date()),
            Err(e) => {
                tracing::debug!(error = %e, "Entry payload failed to parse");
                Ok(String::from("Error parsing entry log"))
            }
        }
    }
}

/// Renders the latest rejected badge swipe as
/// `"⚠️ Token <token> denied at DD-MM-YYYY at HH:MM:SS"`.
///
/// Unreadable badge fields render as placeholders (see
/// [`DeniedEvent`]); shows `"No denied access attempts"` before the
/// first event and `"Error parsing data: <cause>"` for payloads that
/// do not parse.
///
/// # Examples
///
/// ```
/// use habxform_lib::transform::{AccessDenied, Transform};
///
/// let payload = r#"{"tokenNumber": 1234567, "timestamp": "2026-01-16T17:26:50"}"#;
///
/// assert_eq!(
///     AccessDenied.apply(payload)?,
///     "⚠️ Token 1234567 denied at 16-01-2026 at 17:26:50"
/// );
/// assert_eq!(AccessDenied.apply("UNDEF")?, "No denied access attempts");
/// # Ok::<(), habxform_lib::error::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessDenied;

impl Transform for AccessDenied {
    fn apply(&self, input: &str) -> Result<String> {
        if is_unset(input) {
            return Ok(String::from("No denied access attempts"));
        }
        match DeniedEvent::from_json(input) {
            Ok(event) => Ok(event.summary()),
            Err(e) => {
                tracing::debug!(error = %e, "Denied-access payload failed to parse");
                Ok(format!("Error parsing data: {e}"))
            }
        }
    }
}
