// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed access-control events.
//!
//! Door controllers publish badge swipes as JSON payloads. This module
//! parses them into [`EntryEvent`] (a granted entry) and
//! [`DeniedEvent`] (a rejected token) and renders the one-line
//! summaries shown on wall panels.
//!
//! # Examples
//!
//! ```
//! use habxform_lib::access::EntryEvent;
//!
//! let payload = r#"{
//!     "firstName": "Jane",
//!     "lastName": "Doe",
//!     "doorName": "Front Door",
//!     "timestamp": "2026-01-16T14:35:22"
//! }"#;
//!
//! let event = EntryEvent::from_json(payload)?;
//! assert_eq!(event.summary(), "Jane Doe entered Front Door at 14:35:22");
//! # Ok::<(), habxform_lib::error::ParseError>(())
//! ```

use serde::Deserialize;

use crate::error::ParseError;
use crate::types::EventTimestamp;

/// A granted entry published by a door controller.
///
/// All fields are required; a payload missing any of them is rejected
/// as a whole rather than rendered half-filled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryEvent {
    first_name: String,
    last_name: String,
    door_name: String,
    timestamp: EventTimestamp,
}

impl EntryEvent {
    /// Parses an entry event from its JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the payload is not valid JSON or
    /// lacks one of the required fields.
    pub fn from_json(payload: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Returns the first name of the person who entered.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name of the person who entered.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the name of the door that was opened.
    #[must_use]
    pub fn door_name(&self) -> &str {
        &self.door_name
    }

    /// Returns the timestamp of the entry.
    #[must_use]
    pub const fn timestamp(&self) -> &EventTimestamp {
        &self.timestamp
    }

    /// Renders the entry as `"<first> <last> entered <door> at HH:MM:SS"`.
    ///
    /// If the timestamp did not parse, its raw text stands in for the
    /// time of day.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} {} entered {} at {}",
            self.first_name,
            self.last_name,
            self.door_name,
            self.time_label()
        )
    }

    /// Renders the entry as
    /// `"<first> <last> entered <door> on YYYY-MM-DD at HH:MM:SS"`.
    ///
    /// Falls back to [`Self::summary`] if the timestamp did not parse,
    /// rather than repeating the raw text in both positions.
    #[must_use]
    pub fn summary_with_date(&self) -> String {
        match (self.timestamp.date_iso(), self.timestamp.time_hms()) {
            (Some(date), Some(time)) => format!(
                "{} {} entered {} on {date} at {time}",
                self.first_name, self.last_name, self.door_name
            ),
            _ => self.summary(),
        }
    }

    fn time_label(&self) -> String {
        self.timestamp
            .time_hms()
            .unwrap_or_else(|| self.timestamp.raw().to_string())
    }
}

/// Token value of a denied swipe; controllers send either form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum TokenNumber {
    Number(u64),
    Text(String),
}

/// A rejected badge swipe published by a door controller.
///
/// Controllers omit fields they could not read from the badge, so
/// every field is optional and rendering substitutes placeholders.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeniedEvent {
    #[serde(default)]
    token_number: Option<TokenNumber>,
    #[serde(default)]
    door_name: Option<String>,
    #[serde(default)]
    timestamp: Option<EventTimestamp>,
}

impl DeniedEvent {
    /// Parses a denied-access event from its JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the payload is not valid JSON.
    pub fn from_json(payload: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Returns the token number as text, or `"Unknown"` when the
    /// controller could not read it.
    ///
    /// An empty string counts as unreadable; a numeric zero is a real
    /// token.
    #[must_use]
    pub fn token_label(&self) -> String {
        match &self.token_number {
            Some(TokenNumber::Number(n)) => n.to_string(),
            Some(TokenNumber::Text(s)) if !s.is_empty() => s.clone(),
            _ => String::from("Unknown"),
        }
    }

    /// Returns the door name, or `"Unknown Door"` when absent.
    #[must_use]
    pub fn door_name(&self) -> &str {
        match &self.door_name {
            Some(name) if !name.is_empty() => name,
            _ => "Unknown Door",
        }
    }

    /// Returns the timestamp of the swipe, if the controller sent one.
    #[must_use]
    pub const fn timestamp(&self) -> Option<&EventTimestamp> {
        self.timestamp.as_ref()
    }

    /// Returns the moment of the swipe as `"DD-MM-YYYY at HH:MM:SS"`.
    ///
    /// An unparseable timestamp is shown raw; a missing or empty one
    /// as `"Unknown time"`.
    #[must_use]
    pub fn time_label(&self) -> String {
        match &self.timestamp {
            Some(ts) if !ts.raw().is_empty() => match (ts.date_dmy(), ts.time_hms()) {
                (Some(date), Some(time)) => format!("{date} at {time}"),
                _ => ts.raw().to_string(),
            },
            _ => String::from("Unknown time"),
        }
    }

    /// Renders the swipe as `"⚠️ Token <token> denied at <moment>"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("⚠️ Token {} denied at {}", self.token_label(), self.time_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_event_parses_camel_case_payload() {
        let event = EntryEvent::from_json(
            r#"{"firstName":"Jane","lastName":"Doe","doorName":"Front Door","timestamp":"2026-01-16T14:35:22"}"#,
        )
        .unwrap();

        assert_eq!(event.first_name(), "Jane");
        assert_eq!(event.last_name(), "Doe");
        assert_eq!(event.door_name(), "Front Door");
        assert!(event.timestamp().is_parsed());
    }

    #[test]
    fn entry_summary() {
        let event = EntryEvent::from_json(
            r#"{"firstName":"Jane","lastName":"Doe","doorName":"Front Door","timestamp":"2026-01-16T14:35:22"}"#,
        )
        .unwrap();

        assert_eq!(event.summary(), "Jane Doe entered Front Door at 14:35:22");
        assert_eq!(
            event.summary_with_date(),
            "Jane Doe entered Front Door on 2026-01-16 at 14:35:22"
        );
    }

    #[test]
    fn entry_summary_keeps_raw_text_of_unparseable_timestamp() {
        let event = EntryEvent::from_json(
            r#"{"firstName":"Jan","lastName":"Smit","doorName":"Garage","timestamp":"yesterday"}"#,
        )
        .unwrap();

        assert_eq!(event.summary(), "Jan Smit entered Garage at yesterday");
        assert_eq!(event.summary_with_date(), event.summary());
    }

    #[test]
    fn entry_event_requires_every_field() {
        let missing_name =
            r#"{"lastName":"Doe","doorName":"Front Door","timestamp":"2026-01-16T14:35:22"}"#;
        assert!(EntryEvent::from_json(missing_name).is_err());

        let missing_timestamp = r#"{"firstName":"Jane","lastName":"Doe","doorName":"Front Door"}"#;
        assert!(EntryEvent::from_json(missing_timestamp).is_err());
    }

    #[test]
    fn entry_event_rejects_malformed_json() {
        assert!(EntryEvent::from_json("not json").is_err());
        assert!(EntryEvent::from_json("{\"firstName\":").is_err());
    }

    #[test]
    fn entry_event_ignores_extra_fields() {
        let event = EntryEvent::from_json(
            r#"{"firstName":"Jane","lastName":"Doe","doorName":"Front Door","timestamp":"2026-01-16T14:35:22","badgeId":42}"#,
        );
        assert!(event.is_ok());
    }

    #[test]
    fn denied_summary_with_numeric_token() {
        let event = DeniedEvent::from_json(
            r#"{"tokenNumber":1234567,"doorName":"Front Door","timestamp":"2026-01-16T17:26:50"}"#,
        )
        .unwrap();

        assert_eq!(event.token_label(), "1234567");
        assert_eq!(event.door_name(), "Front Door");
        assert_eq!(
            event.summary(),
            "⚠️ Token 1234567 denied at 16-01-2026 at 17:26:50"
        );
    }

    #[test]
    fn denied_summary_with_text_token() {
        let event = DeniedEvent::from_json(
            r#"{"tokenNumber":"A-204","timestamp":"2026-01-16T17:26:50"}"#,
        )
        .unwrap();

        assert_eq!(
            event.summary(),
            "⚠️ Token A-204 denied at 16-01-2026 at 17:26:50"
        );
    }

    #[test]
    fn denied_event_substitutes_placeholders() {
        let event = DeniedEvent::from_json("{}").unwrap();

        assert_eq!(event.token_label(), "Unknown");
        assert_eq!(event.door_name(), "Unknown Door");
        assert_eq!(event.time_label(), "Unknown time");
        assert_eq!(event.summary(), "⚠️ Token Unknown denied at Unknown time");
    }

    #[test]
    fn denied_event_treats_empty_strings_as_missing() {
        let event =
            DeniedEvent::from_json(r#"{"tokenNumber":"","doorName":"","timestamp":""}"#).unwrap();

        assert_eq!(event.token_label(), "Unknown");
        assert_eq!(event.door_name(), "Unknown Door");
        assert_eq!(event.time_label(), "Unknown time");
    }

    #[test]
    fn denied_event_zero_token_is_a_real_token() {
        let event = DeniedEvent::from_json(r#"{"tokenNumber":0}"#).unwrap();
        assert_eq!(event.token_label(), "0");
    }

    #[test]
    fn denied_event_shows_raw_unparseable_timestamp() {
        let event = DeniedEvent::from_json(r#"{"tokenNumber":7,"timestamp":"soon"}"#).unwrap();
        assert_eq!(event.summary(), "⚠️ Token 7 denied at soon");
    }

    #[test]
    fn denied_event_accepts_null_fields() {
        let event = DeniedEvent::from_json(
            r#"{"tokenNumber":null,"doorName":null,"timestamp":null}"#,
        )
        .unwrap();
        assert_eq!(event.summary(), "⚠️ Token Unknown denied at Unknown time");
    }
}
