// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tests for `#[derive(Fill)]` input parsing.

use super::*;

fn parse(input: DeriveInput) -> FillDef {
    FillDef::from_derive_input(&input).unwrap()
}

#[test]
fn parses_tags_in_order() {
    let def = parse(syn::parse_quote! {
        pub struct Settings {
            #[tag(default = "8080", fixture = "0")]
            pub port: u16,
            pub name: String,
        }
    });

    assert_eq!(def.ident, "Settings");
    assert_eq!(def.fields.len(), 2);
    assert_eq!(def.fields[0].name_str(), "port");
    assert_eq!(
        def.fields[0].tags,
        vec![
            ("default".to_string(), "8080".to_string()),
            ("fixture".to_string(), "0".to_string())
        ]
    );
    assert!(def.fields[1].tags.is_empty());
}

#[test]
fn default_crate_path() {
    let def = parse(syn::parse_quote! {
        pub struct Empty {}
    });
    let krate = &def.krate;
    assert_eq!(quote::quote!(#krate).to_string(), ":: tagfill");
}

#[test]
fn custom_crate_path() {
    let def = parse(syn::parse_quote! {
        #[fill(crate = "reexport::tagfill")]
        pub struct Empty {}
    });
    let krate = &def.krate;
    assert_eq!(quote::quote!(#krate).to_string(), "reexport :: tagfill");
}

#[test]
fn keyword_and_raw_string_tags() {
    let def = parse(syn::parse_quote! {
        pub struct Doc {
            #[tag(type = r#"json({"a": 1})"#)]
            pub body: String,
        }
    });
    assert_eq!(
        def.fields[0].tags,
        vec![("type".to_string(), r#"json({"a": 1})"#.to_string())]
    );
}

#[test]
fn tags_merge_across_attributes() {
    let def = parse(syn::parse_quote! {
        pub struct Merged {
            #[tag(default = "1")]
            #[serde(rename = "other")]
            #[tag(fixture = "2")]
            pub value: i32,
        }
    });
    assert_eq!(def.fields[0].tags.len(), 2);
}

#[test]
fn duplicate_tag_is_error() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Twice {
            #[tag(default = "1", default = "2")]
            pub value: i32,
        }
    };
    assert!(FillDef::from_derive_input(&input).is_err());
}

#[test]
fn non_string_directive_is_error() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Number {
            #[tag(default = 1)]
            pub value: i32,
        }
    };
    assert!(FillDef::from_derive_input(&input).is_err());
}

#[test]
fn skip_fields() {
    let def = parse(syn::parse_quote! {
        pub struct Skipping {
            #[tag(skip)]
            pub handle: Vec<u8>,
            #[tag(default = "x")]
            pub name: String,
        }
    });
    assert!(def.fields[0].skip);
    assert_eq!(def.visible_fields().count(), 1);
    assert_eq!(def.skipped_fields().count(), 1);
}

#[test]
fn visibility_decides_settable() {
    let def = parse(syn::parse_quote! {
        pub struct Mixed {
            pub open: u8,
            pub(crate) scoped: u8,
            hidden: u8,
        }
    });
    let settable: Vec<_> = def.fields.iter().map(|field| field.settable).collect();
    assert_eq!(settable, vec![true, true, false]);
}

#[test]
fn raw_field_names_are_unraw() {
    let def = parse(syn::parse_quote! {
        pub struct Raw {
            pub r#type: String,
        }
    });
    assert_eq!(def.fields[0].name_str(), "type");
}

#[test]
fn rejects_tuple_structs() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Tuple(pub u8);
    };
    assert!(FillDef::from_derive_input(&input).is_err());
}

#[test]
fn rejects_enums() {
    let input: DeriveInput = syn::parse_quote! {
        pub enum Choice { A, B }
    };
    assert!(FillDef::from_derive_input(&input).is_err());
}
