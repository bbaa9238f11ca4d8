// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Two-level signal type shared by the inversion transformations.
//!
//! Bindings spell the same binary signal three ways depending on the
//! item kind: register bits (`"1"`/`"0"`), switch states
//! (`"ON"`/`"OFF"`) and contact states (`"OPEN"`/`"CLOSED"`). This
//! module maps all spellings onto one two-variant type so inversion
//! and relabeling are a variant swap plus a rendering choice.

/// A binary signal level decoupled from its textual spelling.
///
/// `Active` covers `"1"`, `"ON"` and `"OPEN"`; `Inactive` covers
/// `"0"`, `"OFF"` and `"CLOSED"`. Matching is exact: bindings emit
/// these uppercase, and anything else is not a binary signal.
///
/// # Examples
///
/// ```
/// use habxform_lib::types::BinaryState;
///
/// let state = BinaryState::from_signal("OPEN").unwrap();
/// assert_eq!(state, BinaryState::Active);
/// assert_eq!(state.inverted().as_bit_str(), "0");
/// assert_eq!(state.as_contact_str(), "OPEN");
///
/// // Unrecognized spellings are not signals
/// assert!(BinaryState::from_signal("on").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryState {
    /// The asserted level: `"1"`, `"ON"`, `"OPEN"`.
    Active,
    /// The deasserted level: `"0"`, `"OFF"`, `"CLOSED"`.
    Inactive,
}

impl BinaryState {
    /// Parses any recognized binary spelling.
    ///
    /// Returns `None` for anything that is not one of the six exact
    /// spellings, so callers can pass unrecognized input through
    /// unchanged.
    #[must_use]
    pub fn from_signal(s: &str) -> Option<Self> {
        match s {
            "1" | "ON" | "OPEN" => Some(Self::Active),
            "0" | "OFF" | "CLOSED" => Some(Self::Inactive),
            _ => None,
        }
    }

    /// Parses a register bit, accepting only `"1"` or `"0"`.
    #[must_use]
    pub fn from_bit(s: &str) -> Option<Self> {
        match s {
            "1" => Some(Self::Active),
            "0" => Some(Self::Inactive),
            _ => None,
        }
    }

    /// Returns the opposite level.
    #[must_use]
    pub const fn inverted(&self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    /// Renders the level as a register bit.
    #[must_use]
    pub const fn as_bit_str(&self) -> &'static str {
        match self {
            Self::Active => "1",
            Self::Inactive => "0",
        }
    }

    /// Renders the level as a switch state.
    #[must_use]
    pub const fn as_switch_str(&self) -> &'static str {
        match self {
            Self::Active => "ON",
            Self::Inactive => "OFF",
        }
    }

    /// Renders the level as a contact state.
    #[must_use]
    pub const fn as_contact_str(&self) -> &'static str {
        match self {
            Self::Active => "OPEN",
            Self::Inactive => "CLOSED",
        }
    }
}

impl From<bool> for BinaryState {
    fn from(value: bool) -> Self {
        if value { Self::Active } else { Self::Inactive }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_signal_recognizes_all_spellings() {
        for s in ["1", "ON", "OPEN"] {
            assert_eq!(BinaryState::from_signal(s), Some(BinaryState::Active));
        }
        for s in ["0", "OFF", "CLOSED"] {
            assert_eq!(BinaryState::from_signal(s), Some(BinaryState::Inactive));
        }
    }

    #[test]
    fn from_signal_is_exact() {
        assert!(BinaryState::from_signal("on").is_none());
        assert!(BinaryState::from_signal("Open").is_none());
        assert!(BinaryState::from_signal(" ON").is_none());
        assert!(BinaryState::from_signal("2").is_none());
        assert!(BinaryState::from_signal("").is_none());
    }

    #[test]
    fn from_bit_accepts_only_bits() {
        assert_eq!(BinaryState::from_bit("1"), Some(BinaryState::Active));
        assert_eq!(BinaryState::from_bit("0"), Some(BinaryState::Inactive));
        assert!(BinaryState::from_bit("ON").is_none());
        assert!(BinaryState::from_bit("OPEN").is_none());
    }

    #[test]
    fn inverted_swaps_levels() {
        assert_eq!(BinaryState::Active.inverted(), BinaryState::Inactive);
        assert_eq!(BinaryState::Inactive.inverted(), BinaryState::Active);
        assert_eq!(BinaryState::Active.inverted().inverted(), BinaryState::Active);
    }

    #[test]
    fn renderings() {
        assert_eq!(BinaryState::Active.as_bit_str(), "1");
        assert_eq!(BinaryState::Active.as_switch_str(), "ON");
        assert_eq!(BinaryState::Active.as_contact_str(), "OPEN");
        assert_eq!(BinaryState::Inactive.as_bit_str(), "0");
        assert_eq!(BinaryState::Inactive.as_switch_str(), "OFF");
        assert_eq!(BinaryState::Inactive.as_contact_str(), "CLOSED");
    }

    #[test]
    fn from_bool() {
        assert_eq!(BinaryState::from(true), BinaryState::Active);
        assert_eq!(BinaryState::from(false), BinaryState::Inactive);
    }
}
