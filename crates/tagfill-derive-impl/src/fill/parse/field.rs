// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! Directives are declared with `#[tag(...)]`. Every `name = "directive"`
//! pair stores a directive under a tag name; any identifier is accepted as a
//! tag name, keywords included:
//!
//! ```rust,ignore
//! #[tag(default = "len(3),repeat(x)", fixture = "json([\"a\"])", type = "raw")]
//! pub names: Vec<String>,
//!
//! #[tag(skip)]
//! pub cache: SomeDefaultType,
//! ```
//!
//! Several `#[tag(...)]` attributes on one field are merged.

use syn::{Attribute, Field, Ident, LitStr, Token, Type, Visibility, ext::IdentExt};

/// Field definition with parsed directives.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Field type.
    pub ty: Type,

    /// Whether the field is visible outside its module.
    ///
    /// Private fields may not carry directives at runtime.
    pub settable: bool,

    /// Directives by tag name, in declaration order.
    pub tags: Vec<(String, String)>,

    /// Excluded with `#[tag(skip)]`.
    pub skip: bool
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// - the field has no identifier (tuple struct field)
    /// - a tag name is not a single identifier
    /// - a directive is not a string literal
    /// - a tag name repeats on the same field
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Fill fields must be named").with_span(field)
        })?;

        let mut tags = Vec::new();
        let mut skip = false;

        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("tag")) {
            parse_tag_attr(attr, &mut tags, &mut skip)?;
        }

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            settable: matches!(field.vis, Visibility::Public(_) | Visibility::Restricted(_)),
            tags,
            skip
        })
    }

    /// Get the field name as a string.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.unraw().to_string()
    }
}

fn parse_tag_attr(
    attr: &Attribute,
    tags: &mut Vec<(String, String)>,
    skip: &mut bool
) -> syn::Result<()> {
    attr.parse_nested_meta(|meta| {
        let name = match meta.path.get_ident() {
            Some(ident) => ident.unraw().to_string(),
            None => return Err(meta.error("tag names must be single identifiers"))
        };

        if name == "skip" && !meta.input.peek(Token![=]) {
            *skip = true;
            return Ok(());
        }

        let directive: LitStr = meta.value()?.parse()?;
        if tags.iter().any(|(existing, _)| *existing == name) {
            return Err(meta.error(format!("duplicate tag `{name}`")));
        }
        tags.push((name, directive.value()));
        Ok(())
    })
}
