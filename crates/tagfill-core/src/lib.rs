// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime engine for tagfill.
//!
//! This crate interprets the per-field directives recorded by
//! `#[derive(Fill)]` and constructs values from them. It can also be used
//! standalone with manual [`Fill`] and [`StructSlot`] implementations.
//!
//! # Overview
//!
//! - [`Command`]: parsed directive, see [`command`] for the mini-language
//! - [`Fill`] / [`Slot`]: shape model every constructible type implements
//! - [`set_value`]: type-dispatch setter for one value
//! - [`walk()`]: recursive struct walker
//! - [`fill`], [`build`], [`cached`]: top-level entry points
//! - [`Cache`], [`Config`]: memoization and per-call options
//! - [`prelude`]: convenient re-exports
//!
//! # Usage
//!
//! Most users should use `tagfill` directly, which re-exports this crate
//! together with the derive macro.
//!
//! ```rust
//! use tagfill_core::{Command, Config, set_value};
//!
//! let mut port = 0_u16;
//! let cmd = Command::parse("8080").unwrap();
//! set_value(&Config::new(), &mut port, &cmd, 0).unwrap();
//! assert_eq!(port, 8080);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod api;
mod cache;
mod chan;
pub mod command;
mod config;
mod error;
mod json;
pub mod prelude;
mod raw;
mod setter;
mod shape;
mod walk;

#[cfg(test)]
mod fixtures;

pub use api::{build, cached, fill};
pub use cache::Cache;
pub use chan::Chan;
pub use command::{Command, DEFAULT_LAYOUT, Keyword};
pub use config::{Config, DEFAULT_MAX_DEPTH, DEFAULT_TAG};
pub use error::{ErrorKind, FillError, Result};
pub use raw::RawMessage;
pub use setter::set_value;
pub use shape::{
    ArraySlot, ChannelSlot, ComplexSlot, FieldInfo, Fill, FloatSlot, IntSlot, ListSlot, MapSlot,
    PointerSlot, ShapeKind, Slot, StructSlot, UintSlot
};
pub use walk::{walk, walk_struct};

/// Re-export of `num-complex` types used by complex fields.
pub use num_complex::{Complex32, Complex64};
