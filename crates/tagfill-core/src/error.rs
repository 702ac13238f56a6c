// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for value construction.
//!
//! Every operation of the engine returns [`FillError`]. Errors are fail-fast:
//! the first one raised anywhere in a recursive walk aborts the whole call.
//! Fields set before the failing field keep their new values.
//!
//! # Taxonomy
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | [`ErrorKind::MalformedDirective`] | two primary instructions, or a repeated keyword |
//! | [`ErrorKind::Parse`] | literal text does not match the scalar grammar of the target |
//! | [`ErrorKind::Decode`] | malformed JSON, or JSON that does not fit the target shape |
//! | [`ErrorKind::Validation`] | single rune/byte shapes given the wrong length |
//! | [`ErrorKind::UnsettableField`] | a private field carries a directive |
//! | [`ErrorKind::UnsupportedType`] | no construction routine for the shape |
//! | [`ErrorKind::DepthExceeded`] | the recursion ceiling was hit |

use thiserror::Error;

use crate::shape::ShapeKind;

/// Classification of a [`FillError`].
///
/// Several error variants share one kind (malformed JSON text and a JSON
/// value of the wrong kind are both [`ErrorKind::Decode`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Ambiguous or duplicated instructions in one directive.
    MalformedDirective,

    /// Scalar literal does not parse for the target shape.
    Parse,

    /// JSON payload is malformed or does not fit the target.
    Decode,

    /// Literal has the wrong length for a single rune or byte.
    Validation,

    /// Target field is not externally settable.
    UnsettableField,

    /// Shape has no construction routine.
    UnsupportedType,

    /// Recursion went deeper than the configured ceiling.
    DepthExceeded
}

/// Error raised while parsing directives or constructing values.
#[derive(Debug, Error)]
pub enum FillError {
    /// Directive carries more than one primary instruction, or repeats one.
    #[error("malformed directive `{directive}`: {reason}")]
    MalformedDirective {
        /// Raw directive text.
        directive: String,
        /// What made it ambiguous.
        reason:    String
    },

    /// Literal text does not match the grammar of the target shape.
    #[error("cannot parse `{input}` as {shape}: {reason}")]
    Parse {
        /// Target shape.
        shape:  ShapeKind,
        /// Offending literal.
        input:  String,
        /// Underlying parser message.
        reason: String
    },

    /// JSON text is not well formed.
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON value kind does not fit the target shape.
    #[error("cannot decode JSON {found} into {shape}")]
    Decode {
        /// Target shape.
        shape: ShapeKind,
        /// JSON kind that was found (`string`, `number`, ...).
        found: &'static str
    },

    /// Literal has the wrong length for a single-character shape.
    #[error("{shape} expects exactly one {expected}, got `{input}`")]
    Validation {
        /// Target shape.
        shape:    ShapeKind,
        /// Unit that was expected (`character` or `byte`).
        expected: &'static str,
        /// Offending literal.
        input:    String
    },

    /// A private field carries a directive.
    #[error("field `{field}` of `{owner}` is not settable")]
    UnsettableField {
        /// Type name of the struct declaring the field.
        owner: &'static str,
        /// Field name.
        field: &'static str
    },

    /// The shape has no construction routine for this operation.
    #[error("unsupported type {shape}: {reason}")]
    UnsupportedType {
        /// Shape, or the type name for opaque shapes.
        shape:  String,
        /// Why it was rejected.
        reason: &'static str
    },

    /// Recursion went deeper than [`Config::max_depth`](crate::Config::max_depth).
    #[error("construction exceeded the recursion limit of {limit}")]
    DepthExceeded {
        /// Configured ceiling.
        limit: usize
    }
}

impl FillError {
    /// Create a parse error for `shape` from any displayable reason.
    pub fn parse(shape: ShapeKind, input: &str, reason: impl std::fmt::Display) -> Self {
        Self::Parse {
            shape,
            input: input.to_owned(),
            reason: reason.to_string()
        }
    }

    /// Create a malformed-directive error.
    pub fn malformed(directive: &str, reason: impl Into<String>) -> Self {
        Self::MalformedDirective {
            directive: directive.to_owned(),
            reason:    reason.into()
        }
    }

    /// Create an unsupported-type error.
    pub fn unsupported(shape: impl std::fmt::Display, reason: &'static str) -> Self {
        Self::UnsupportedType {
            shape: shape.to_string(),
            reason
        }
    }

    /// Classify this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedDirective {
                ..
            } => ErrorKind::MalformedDirective,
            Self::Parse {
                ..
            } => ErrorKind::Parse,
            Self::Json(_)
            | Self::Decode {
                ..
            } => ErrorKind::Decode,
            Self::Validation {
                ..
            } => ErrorKind::Validation,
            Self::UnsettableField {
                ..
            } => ErrorKind::UnsettableField,
            Self::UnsupportedType {
                ..
            } => ErrorKind::UnsupportedType,
            Self::DepthExceeded {
                ..
            } => ErrorKind::DepthExceeded
        }
    }
}

/// Result alias used across the engine.
pub type Result<T, E = FillError> = std::result::Result<T, E>;
