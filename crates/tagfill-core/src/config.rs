// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-call configuration.

use crate::cache::Cache;

/// Tag name read when none is configured.
pub const DEFAULT_TAG: &str = "default";

/// Recursion ceiling applied when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options resolved once per top-level call and threaded through every
/// recursive step.
///
/// # Example
///
/// ```rust
/// use tagfill_core::{Cache, Config};
///
/// let config = Config::new()
///     .with_tag("fixture")
///     .with_cache(Cache::new())
///     .with_deep_copy(true);
///
/// assert_eq!(config.tag(), "fixture");
/// assert!(config.cache().is_some());
/// assert!(config.deep_copy());
/// assert_eq!(config.max_depth(), 64);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    tag:       String,
    cache:     Option<Cache>,
    deep_copy: bool,
    max_depth: usize
}

impl Config {
    /// Default configuration: tag `default`, no cache, no deep copy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read directives stored under `tag`.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Memoize [`cached`](crate::cached) results in `cache`.
    #[must_use]
    pub fn with_cache(mut self, cache: Cache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Hand out independent copies of cached values.
    #[must_use]
    pub const fn with_deep_copy(mut self, deep_copy: bool) -> Self {
        self.deep_copy = deep_copy;
        self
    }

    /// Fail with [`DepthExceeded`](crate::FillError::DepthExceeded) past
    /// `max_depth` nested steps.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Tag name directives are read from.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Shared cache, if any.
    #[must_use]
    pub const fn cache(&self) -> Option<&Cache> {
        self.cache.as_ref()
    }

    /// Check if cache hits are copied.
    #[must_use]
    pub const fn deep_copy(&self) -> bool {
        self.deep_copy
    }

    /// Recursion ceiling.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag:       DEFAULT_TAG.to_owned(),
            cache:     None,
            deep_copy: false,
            max_depth: DEFAULT_MAX_DEPTH
        }
    }
}
