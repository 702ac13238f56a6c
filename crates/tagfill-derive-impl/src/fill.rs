// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Fill derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! fill.rs (orchestrator)
//! │
//! ├── parse/       → Attribute parsing (FillDef, FieldDef)
//! └── generate.rs  → impl Fill, impl StructSlot
//! ```

mod generate;
pub mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::FillDef;

/// Main entry point for the Fill derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match FillDef::from_derive_input(&input) {
        Ok(def) => generate::generate(&def).into(),
        Err(err) => err.write_errors().into()
    }
}
