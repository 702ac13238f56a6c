// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Undecoded JSON fragments.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::{
    error::Result,
    shape::{Fill, Slot}
};

/// JSON text kept as-is.
///
/// Directives assign their primary value verbatim; nothing is validated until
/// [`decode`](Self::decode) is called.
///
/// # Example
///
/// ```rust
/// use tagfill_core::RawMessage;
///
/// let raw = RawMessage::new(r#"{"id": 7}"#);
/// let value: serde_json::Value = raw.decode().unwrap();
/// assert_eq!(value["id"], 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RawMessage(String);

impl RawMessage {
    /// Wrap `text` without validating it.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Raw JSON text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if no text was assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take the inner text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Decode the fragment into `T`.
    ///
    /// # Errors
    ///
    /// [`FillError::Json`](crate::FillError::Json) when the text is not valid
    /// JSON for `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.0)?)
    }

    pub(crate) fn set(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }
}

impl fmt::Display for RawMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RawMessage {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl Fill for RawMessage {
    fn zero() -> Self {
        Self::default()
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::RawMessage(self)
    }
}
