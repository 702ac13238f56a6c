// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # tagfill
//!
//! Populate nested values from per-field construction directives.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use tagfill::{Config, Fill, build};
//!
//! #[derive(Debug, Fill)]
//! pub struct Worker {
//!     #[tag(default = "worker")]
//!     pub name: String,
//!     #[tag(default = "rune(abc)")]
//!     pub flags: Vec<char>,
//! }
//!
//! #[derive(Debug, Fill)]
//! pub struct Server {
//!     #[tag(default = "8080", fixture = "0")]
//!     pub port: u16,
//!     #[tag(default = "len(2),repeat(struct)")]
//!     pub workers: Vec<Worker>,
//!     #[tag(default = "value(struct)")]
//!     pub backup: Option<Box<Worker>>,
//!     #[tag(default = "a:1,b:2")]
//!     pub weights: HashMap<String, u8>,
//!     #[tag(default = r#"json({"retries": 3})"#)]
//!     pub extra: serde_json::Value,
//! }
//!
//! let server: Server = build(&Config::new()).unwrap();
//! assert_eq!(server.port, 8080);
//! assert_eq!(server.workers.len(), 2);
//! assert_eq!(server.workers[1].flags, vec!['a', 'b', 'c']);
//! assert_eq!(server.backup.unwrap().name, "worker");
//! assert_eq!(server.weights["b"], 2);
//! assert_eq!(server.extra["retries"], 3.0);
//!
//! let fixture: Server = build(&Config::new().with_tag("fixture")).unwrap();
//! assert_eq!(fixture.port, 0);
//! assert!(fixture.workers.is_empty());
//! ```
//!
//! ## Directives
//!
//! A directive is either a bare literal (`"8080"`) or a comma-separated list
//! of keyword clauses. Exactly one primary instruction is allowed:
//!
//! | Clause | Meaning |
//! |--------|---------|
//! | `value(x)` | literal `x`; `value(struct)` fills a nested struct |
//! | `json(..)` | decode JSON text into the field |
//! | `repeat(x)` | every element of a list or array is built from `x` |
//! | `rune(..)` / `byte(..)` | character or byte of a literal, or a list of them |
//! | `chan` / `chan(n)` | open a channel with capacity `n` |
//! | `len(n)` / `cap(n)` | list length and capacity |
//! | `layout(..)` | timestamp layout name or strftime pattern |
//!
//! ## Caching
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use tagfill::{Cache, Config, Fill, cached};
//!
//! #[derive(Clone, Fill)]
//! pub struct Settings {
//!     #[tag(default = "len(3),repeat(x)")]
//!     pub names: Vec<String>,
//! }
//!
//! let config = Config::new().with_cache(Cache::new());
//! let first = cached::<Settings>(&config).unwrap();
//! let second = cached::<Settings>(&config).unwrap();
//! assert!(Arc::ptr_eq(&first, &second));
//!
//! let copying = config.clone().with_deep_copy(true);
//! let third = cached::<Settings>(&copying).unwrap();
//! assert!(!Arc::ptr_eq(&first, &third));
//! ```

pub use tagfill_core::*;
pub use tagfill_derive_impl::Fill;
