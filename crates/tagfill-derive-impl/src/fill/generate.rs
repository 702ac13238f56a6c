// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Code generation for `Fill` and `StructSlot`.
//!
//! For a struct like:
//!
//! ```rust,ignore
//! #[derive(Fill)]
//! pub struct Settings {
//!     #[tag(default = "8080")]
//!     pub port: u16,
//!     #[tag(skip)]
//!     pub handle: Handle,
//! }
//! ```
//!
//! the generated code is roughly:
//!
//! ```rust,ignore
//! impl ::tagfill::Fill for Settings {
//!     fn zero() -> Self {
//!         Self {
//!             port: <u16 as ::tagfill::Fill>::zero(),
//!             handle: Default::default(),
//!         }
//!     }
//!
//!     fn slot(&mut self) -> ::tagfill::Slot<'_> {
//!         ::tagfill::Slot::Struct(self)
//!     }
//! }
//!
//! impl ::tagfill::StructSlot for Settings {
//!     fn type_name(&self) -> &'static str { "Settings" }
//!     fn fields(&self) -> &'static [::tagfill::FieldInfo] { FIELDS }
//!     fn field(&mut self, index: usize) -> Option<&mut dyn ::tagfill::Fill> {
//!         match index { 0 => Some(&mut self.port), _ => None }
//!     }
//! }
//! ```
//!
//! Skipped fields never reach the field table.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, parse_quote};

use super::parse::FillDef;

/// Generate both trait implementations.
pub fn generate(def: &FillDef) -> TokenStream {
    let fill = generate_fill(def);
    let struct_slot = generate_struct_slot(def);

    quote! {
        #fill
        #struct_slot
    }
}

/// Add a `Fill` bound to every type parameter.
fn bounded_generics(def: &FillDef) -> Generics {
    let krate = &def.krate;
    let mut generics = def.generics.clone();
    let params: Vec<_> = generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();
    let where_clause = generics.make_where_clause();
    for param in params {
        where_clause
            .predicates
            .push(parse_quote!(#param: #krate::Fill));
    }
    generics
}

fn generate_fill(def: &FillDef) -> TokenStream {
    let krate = &def.krate;
    let ident = &def.ident;
    let generics = bounded_generics(def);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let zeroes = def.visible_fields().map(|field| {
        let name = &field.ident;
        let ty = &field.ty;
        quote! { #name: <#ty as #krate::Fill>::zero() }
    });
    let defaults = def.skipped_fields().map(|field| {
        let name = &field.ident;
        quote! { #name: ::core::default::Default::default() }
    });

    quote! {
        impl #impl_generics #krate::Fill for #ident #ty_generics #where_clause {
            fn zero() -> Self {
                Self {
                    #(#zeroes,)*
                    #(#defaults,)*
                }
            }

            fn slot(&mut self) -> #krate::Slot<'_> {
                #krate::Slot::Struct(self)
            }
        }
    }
}

fn generate_struct_slot(def: &FillDef) -> TokenStream {
    let krate = &def.krate;
    let ident = &def.ident;
    let type_name = ident.to_string();
    let generics = bounded_generics(def);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let infos = def.visible_fields().map(|field| {
        let name = field.name_str();
        let settable = field.settable;
        let tags = field.tags.iter().map(|(tag, directive)| {
            quote! { (#tag, #directive) }
        });
        quote! {
            #krate::FieldInfo {
                name: #name,
                settable: #settable,
                tags: &[#(#tags),*]
            }
        }
    });
    let arms = def.visible_fields().enumerate().map(|(index, field)| {
        let name = &field.ident;
        quote! { #index => ::core::option::Option::Some(&mut self.#name) }
    });

    quote! {
        impl #impl_generics #krate::StructSlot for #ident #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn fields(&self) -> &'static [#krate::FieldInfo] {
                const FIELDS: &[#krate::FieldInfo] = &[#(#infos),*];
                FIELDS
            }

            fn field(
                &mut self,
                index: usize
            ) -> ::core::option::Option<&mut dyn #krate::Fill> {
                match index {
                    #(#arms,)*
                    _ => ::core::option::Option::None
                }
            }
        }
    }
}
