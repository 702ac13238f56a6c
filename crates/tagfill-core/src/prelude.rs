// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust
//! use tagfill_core::prelude::*;
//!
//! let config = Config::new().with_tag("fixture");
//! assert_eq!(config.tag(), "fixture");
//! ```

pub use crate::{
    Cache, Chan, Command, Config, ErrorKind, Fill, FillError, RawMessage, Slot, StructSlot, build,
    cached, fill
};
