// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Container attribute parsing with darling.
//!
//! This module defines the internal [`FillAttrs`] structure used for parsing
//! `#[fill(...)]` attributes. The public API uses
//! [`FillDef`](super::FillDef).
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `crate` | No | `::tagfill` | Path of the runtime crate in generated code |

use darling::FromDeriveInput;
use syn::{Generics, Ident};

/// Returns the default runtime crate path.
///
/// Used by darling for the `crate` attribute default.
pub fn default_crate_path() -> syn::Path {
    syn::parse_quote!(::tagfill)
}

/// Container attributes parsed from `#[fill(...)]`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Fill)]
/// #[fill(crate = "my_reexports::tagfill")]
/// pub struct Settings { ... }
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(fill), supports(struct_named))]
pub struct FillAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics, bounds added at generation time.
    pub generics: Generics,

    /// Path of the runtime crate.
    ///
    /// Needed when `tagfill` is re-exported under another name.
    #[darling(rename = "crate", default = "default_crate_path")]
    pub krate: syn::Path
}
