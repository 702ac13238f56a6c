// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command types and definitions.

use std::{collections::BTreeMap, fmt};

/// Layout used for timestamps when a directive carries no `layout(..)`.
pub const DEFAULT_LAYOUT: &str = "RFC3339";

/// Instruction keyword recognized inside a directive.
///
/// Primary keywords select the construction mode; the others only tune it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Keyword {
    /// `value(..)`: literal value.
    Value,

    /// `json(..)`: JSON payload decoded into the target.
    Json,

    /// `repeat(..)`: element directive replicated across a container.
    Repeat,

    /// `rune(..)`: characters of the argument.
    Rune,

    /// `byte(..)`: bytes of the argument.
    Byte,

    /// `chan` or `chan(n)`: open a channel with capacity `n`.
    Chan,

    /// `len(n)`: container length.
    Len,

    /// `cap(n)`: container capacity.
    Cap,

    /// `layout(..)`: timestamp layout.
    Layout
}

impl Keyword {
    /// All keywords in canonical order.
    pub const ALL: [Self; 9] = [
        Self::Value,
        Self::Json,
        Self::Repeat,
        Self::Rune,
        Self::Byte,
        Self::Chan,
        Self::Len,
        Self::Cap,
        Self::Layout
    ];

    /// Keyword as written in directives.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Json => "json",
            Self::Repeat => "repeat",
            Self::Rune => "rune",
            Self::Byte => "byte",
            Self::Chan => "chan",
            Self::Len => "len",
            Self::Cap => "cap",
            Self::Layout => "layout"
        }
    }

    /// Look a keyword up by its directive spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|keyword| keyword.as_str() == name)
    }

    /// Check if this keyword selects the construction mode.
    pub const fn is_primary(&self) -> bool {
        matches!(
            self,
            Self::Value | Self::Json | Self::Repeat | Self::Rune | Self::Byte | Self::Chan
        )
    }

    /// Check if the keyword may appear without parentheses.
    pub const fn allows_bare(&self) -> bool {
        matches!(self, Self::Chan)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed form of one field directive.
///
/// A command is either a *literal* (the raw directive did not parse as a list
/// of keyword clauses, so the whole text is the value) or *structured* (a map
/// from [`Keyword`] to argument text). Create one with
/// [`Command::parse`](crate::Command::parse) or [`Command::literal`].
///
/// # Example
///
/// ```rust
/// use tagfill_core::{Command, Keyword};
///
/// let cmd = Command::parse("len(5),cap(10),repeat(1)").unwrap();
/// assert_eq!(cmd.primary(), Some(Keyword::Repeat));
/// assert_eq!(cmd.value(), "1");
/// assert_eq!((cmd.len(), cmd.cap()), (5, 10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Command {
    pub(super) raw:          String,
    pub(super) instructions: BTreeMap<Keyword, String>,
    pub(super) primary:      Option<Keyword>,
    pub(super) literal:      bool
}

impl Command {
    /// Create a literal command whose value is `text`.
    ///
    /// Used for map keys and values, which are never parsed as clauses.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            raw:          text.into(),
            instructions: BTreeMap::new(),
            primary:      None,
            literal:      true
        }
    }

    /// Raw directive text.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Check if the directive was empty.
    ///
    /// Empty commands never touch their target.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Check if the whole directive is a bare literal.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        self.literal
    }

    /// Primary instruction, if the directive names one.
    #[must_use]
    pub const fn primary(&self) -> Option<Keyword> {
        self.primary
    }

    /// Argument of `keyword`, if present.
    #[must_use]
    pub fn get(&self, keyword: Keyword) -> Option<&str> {
        self.instructions.get(&keyword).map(String::as_str)
    }

    /// Check if `keyword` is present.
    #[must_use]
    pub fn has(&self, keyword: Keyword) -> bool {
        self.instructions.contains_key(&keyword)
    }

    /// Primary value.
    ///
    /// The argument of the primary instruction, or the raw text of a literal
    /// directive. A structured directive without a primary instruction
    /// (`len(3)`) has an empty value.
    #[must_use]
    pub fn value(&self) -> &str {
        if self.literal {
            return &self.raw;
        }
        self.primary.and_then(|keyword| self.get(keyword)).unwrap_or_default()
    }

    /// Check if the primary value asks for struct recursion.
    #[must_use]
    pub fn is_struct(&self) -> bool {
        self.value().eq_ignore_ascii_case("struct")
    }

    /// Requested length, `0` when absent or not a number.
    #[must_use]
    pub fn len(&self) -> usize {
        self.number(Keyword::Len)
    }

    /// Requested capacity, never below [`len`](Self::len).
    #[must_use]
    pub fn cap(&self) -> usize {
        self.number(Keyword::Cap).max(self.len())
    }

    /// Timestamp layout, [`DEFAULT_LAYOUT`] when absent.
    #[must_use]
    pub fn layout(&self) -> &str {
        self.get(Keyword::Layout).unwrap_or(DEFAULT_LAYOUT)
    }

    /// Numeric argument of `keyword`, `0` when absent or not a number.
    #[must_use]
    pub fn number(&self, keyword: Keyword) -> usize {
        self.get(keyword)
            .and_then(|arg| arg.trim().parse().ok())
            .unwrap_or(0)
    }
}

impl fmt::Display for Command {
    /// Canonical form: literals verbatim, clauses in keyword order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literal {
            return f.write_str(&self.raw);
        }
        for (index, (keyword, arg)) in self.instructions.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{keyword}({arg})")?;
        }
        Ok(())
    }
}
