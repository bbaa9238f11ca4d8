// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Binary state inversion for Modbus-style channels.
//!
//! Some relays and reed contacts are wired active-low, so the bit the
//! register reports is the opposite of the state the item should
//! show. Both inverters match exactly, without trimming: anything
//! unrecognized, `UNDEF` included, passes through unchanged so the
//! engine's own state handling still sees it.

use crate::error::Result;
use crate::transform::Transform;
use crate::types::BinaryState;

/// Inverts a register bit into a contact state.
///
/// `"1"` becomes `"CLOSED"` and `"0"` becomes `"OPEN"`.
///
/// # Examples
///
/// ```
/// use habxform_lib::transform::{ContactInvert, Transform};
///
/// assert_eq!(ContactInvert.apply("1")?, "CLOSED");
/// assert_eq!(ContactInvert.apply("0")?, "OPEN");
/// assert_eq!(ContactInvert.apply("UNDEF")?, "UNDEF");
/// # Ok::<(), habxform_lib::error::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactInvert;

impl Transform for ContactInvert {
    fn apply(&self, input: &str) -> Result<String> {
        match BinaryState::from_bit(input) {
            Some(state) => Ok(state.inverted().as_contact_str().to_string()),
            None => {
                tracing::trace!(input = %input, "Passing state through unchanged");
                Ok(input.to_string())
            }
        }
    }
}

/// Inverts any recognized binary state into the opposite register bit.
///
/// `"1"`, `"ON"` and `"OPEN"` become `"0"`; `"0"`, `"OFF"` and
/// `"CLOSED"` become `"1"`.
///
/// # Examples
///
/// ```
/// use habxform_lib::transform::{BinaryInvert, Transform};
///
/// assert_eq!(BinaryInvert.apply("ON")?, "0");
/// assert_eq!(BinaryInvert.apply("CLOSED")?, "1");
/// assert_eq!(BinaryInvert.apply("UNDEF")?, "UNDEF");
/// # Ok::<(), habxform_lib::error::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryInvert;

impl Transform for BinaryInvert {
    fn apply(&self, input: &str) -> Result<String> {
        match BinaryState::from_signal(input) {
            Some(state) => Ok(state.inverted().as_bit_str().to_string()),
            None => {
                tracing::trace!(input = %input, "Passing state through unchanged");
                Ok(input.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_invert_maps_bits() {
        assert_eq!(ContactInvert.apply("1").unwrap(), "CLOSED");
        assert_eq!(ContactInvert.apply("0").unwrap(), "OPEN");
    }

    #[test]
    fn contact_invert_passes_everything_else_through() {
        for input in ["UNDEF", "NULL", "", "ON", "2", "01", "closed"] {
            assert_eq!(ContactInvert.apply(input).unwrap(), input);
        }
    }

    #[test]
    fn binary_invert_maps_all_recognized_states() {
        assert_eq!(BinaryInvert.apply("1").unwrap(), "0");
        assert_eq!(BinaryInvert.apply("ON").unwrap(), "0");
        assert_eq!(BinaryInvert.apply("OPEN").unwrap(), "0");
        assert_eq!(BinaryInvert.apply("0").unwrap(), "1");
        assert_eq!(BinaryInvert.apply("OFF").unwrap(), "1");
        assert_eq!(BinaryInvert.apply("CLOSED").unwrap(), "1");
    }

    #[test]
    fn binary_invert_passes_everything_else_through() {
        for input in ["UNDEF", "NULL", "", "on", " ON", "10", "TOGGLE"] {
            assert_eq!(BinaryInvert.apply(input).unwrap(), input);
        }
    }

    #[test]
    fn inversion_round_trips_through_both_directions() {
        // A bit inverted to a contact state and inverted back as a
        // signal lands on the opposite bit twice, i.e. the original.
        for bit in ["0", "1"] {
            let contact = ContactInvert.apply(bit).unwrap();
            let back = BinaryInvert.apply(&contact).unwrap();
            assert_eq!(back, bit);
        }
    }
}
