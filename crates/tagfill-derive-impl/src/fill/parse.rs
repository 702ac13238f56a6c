// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Input parsing for `#[derive(Fill)]`.
//!
//! # Module Structure
//!
//! ```text
//! parse/
//! ├── attrs.rs - FillAttrs (darling parsing struct for #[fill(...)])
//! ├── field.rs - FieldDef (#[tag(...)] directives)
//! └── tests.rs
//! ```

mod attrs;
mod field;

#[cfg(test)]
mod tests;

pub use attrs::FillAttrs;
use darling::FromDeriveInput;
pub use field::FieldDef;
use syn::{DeriveInput, Generics, Ident};

/// Complete parsed struct definition passed to code generation.
#[derive(Debug)]
pub struct FillDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics as written.
    pub generics: Generics,

    /// Path of the runtime crate.
    pub krate: syn::Path,

    /// All fields in declaration order, skipped ones included.
    pub fields: Vec<FieldDef>
}

impl FillDef {
    /// Parse struct definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Applied to an enum, a union, a tuple struct or a unit struct
    /// - Invalid `#[fill(...)]` or `#[tag(...)]` attributes
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = FillAttrs::from_derive_input(input)?;

        let fields = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(FieldDef::from_field)
                    .collect::<darling::Result<Vec<_>>>()?,
                _ => {
                    return Err(darling::Error::custom("Fill fields must be named")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(darling::Error::custom("Fill can only be derived for structs")
                    .with_span(&input.ident));
            }
        };

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            krate: attrs.krate,
            fields
        })
    }

    /// Fields visible to the engine.
    pub fn visible_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|field| !field.skip)
    }

    /// Fields built with `Default::default()`.
    pub fn skipped_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|field| field.skip)
    }
}
