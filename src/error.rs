// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `HabXform` library.
//!
//! Two failure conditions exist at the engine boundary: invalid input
//! (a value that cannot be parsed into what the transformation expects)
//! and missing data (the engine's `NULL`/`UNDEF`/empty sentinels).
//! Value construction errors cover everything callers can get wrong
//! when configuring a transformation.

use thiserror::Error;

/// The main error type for this library.
///
/// Transformations that recover locally never surface this type; the
/// ones that defer the display fallback to the caller return it from
/// [`Transform::apply`](crate::transform::Transform::apply).
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Input could not be parsed into the expected shape.
    #[error("invalid input: {0}")]
    Parse(#[from] ParseError),

    /// Input was one of the engine's no-data sentinels.
    #[error("no data available")]
    MissingData,
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u8,
        /// Maximum allowed value.
        max: u8,
        /// The actual value that was provided.
        actual: u8,
    },

    /// A heading must be a finite number of degrees.
    #[error("heading {0} is not a finite number of degrees")]
    NonFiniteHeading(f64),

    /// A dimmer full-scale register value must be a positive finite number.
    #[error("full-scale register value {0} must be positive and finite")]
    InvalidScale(f64),

    /// An invalid point format string was provided.
    #[error("invalid point format: {0} (expected \"symbol\" or \"name\")")]
    InvalidPointFormat(String),
}

/// Errors related to parsing raw engine input.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// A specialized Result type for this library.
///
/// The error parameter defaults to [`Error`] but can name one of the
/// narrower error types where only that kind can occur.
pub type Result<T, E = Error> = std::result::Result<T, E>;
