// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Directive mini-language.
//!
//! A directive is the string stored under a tag name on a struct field. It is
//! either a bare literal or a comma-separated list of keyword clauses.
//!
//! # Architecture
//!
//! ```text
//! command/
//! ├── types.rs  - Keyword, Command and its accessors
//! ├── parser.rs - Command::parse (clause scanner with balanced arguments)
//! └── tests.rs  - parser tests
//! ```
//!
//! # Keywords
//!
//! | Keyword | Primary | Argument |
//! |---------|---------|----------|
//! | `value` | yes | literal text |
//! | `json` | yes | JSON document |
//! | `repeat` | yes | element directive |
//! | `rune` | yes | characters |
//! | `byte` | yes | bytes |
//! | `chan` | yes | channel capacity (optional) |
//! | `len` | no | container length |
//! | `cap` | no | container capacity |
//! | `layout` | no | timestamp layout |
//!
//! Exactly one primary keyword may appear in a directive.

mod parser;
mod types;

#[cfg(test)]
mod tests;

pub use types::{Command, DEFAULT_LAYOUT, Keyword};
