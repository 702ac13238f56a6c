// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ## Struct-Level `#[fill(...)]`
//!
//! ```rust,ignore
//! #[derive(Fill)]
//! #[fill(crate = "my_reexports::tagfill")] // Optional: runtime crate path (default: "::tagfill")
//! pub struct Settings { /* ... */ }
//! ```
//!
//! ## Field-Level `#[tag(...)]`
//!
//! ```rust,ignore
//! pub struct Settings {
//!     #[tag(default = "8080", fixture = "0")]    // One directive per tag name
//!     pub port: u16,
//!
//!     #[tag(default = "len(2),repeat(struct)")]  // Nested structs
//!     pub workers: Vec<Worker>,
//!
//!     #[tag(type = r#"json({"a": 1})"#)]         // Keywords and raw strings are fine
//!     pub extra: serde_json::Value,
//!
//!     #[tag(skip)]                               // Built with Default::default()
//!     pub handle: Handle,
//! }
//! ```
//!
//! # Generated Code Overview
//!
//! | Generated Item | Description |
//! |----------------|-------------|
//! | `impl Fill` | `zero()` from every field's zero value, `slot()` as a struct |
//! | `impl StructSlot` | type name, static field table, indexed field access |
//!
//! Private fields are recorded as not settable; the engine reports a
//! directive on such a field as an error at run time.

mod fill;

use proc_macro::TokenStream;

/// Derive macro implementing `Fill` and `StructSlot` for a struct with named
/// fields.
///
/// # Attributes
///
/// - `#[fill(crate = "path")]` on the struct
/// - `#[tag(name = "directive", ...)]` and `#[tag(skip)]` on fields
///
/// Every type parameter receives a `Fill` bound.
///
/// # Example
///
/// ```rust,ignore
/// use tagfill::{Config, Fill, build};
///
/// #[derive(Debug, Fill)]
/// pub struct Server {
///     #[tag(default = "localhost")]
///     pub host: String,
///     #[tag(default = "8080")]
///     pub port: u16,
/// }
///
/// let server: Server = build(&Config::new())?;
/// assert_eq!(server.port, 8080);
/// ```
#[proc_macro_derive(Fill, attributes(tag, fill))]
pub fn derive_fill(input: TokenStream) -> TokenStream {
    fill::derive(input)
}
