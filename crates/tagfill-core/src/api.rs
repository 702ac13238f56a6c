// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Top-level entry points.

use std::{any::type_name, sync::Arc};

use log::debug;

use crate::{
    cache::cache_key,
    config::Config,
    error::Result,
    shape::Fill,
    walk::walk
};

/// Fill `target` in place from the directives of its fields.
///
/// The cache is never consulted.
///
/// # Errors
///
/// The first [`FillError`](crate::FillError) raised anywhere in the walk.
/// Fields set before the failure keep their new values.
///
/// # Example
///
/// ```rust,ignore
/// use tagfill::{Config, Fill, fill};
///
/// #[derive(Fill)]
/// struct Server {
///     #[tag(default = "8080")]
///     pub port: u16,
///     #[tag(default = "localhost")]
///     pub host: String
/// }
///
/// let mut server = Server {
///     port: 0,
///     host: String::new()
/// };
/// fill(&mut server, &Config::new()).unwrap();
/// assert_eq!((server.port, server.host.as_str()), (8080, "localhost"));
/// ```
pub fn fill<T: Fill>(target: &mut T, config: &Config) -> Result<()> {
    debug!("filling {} with tag `{}`", type_name::<T>(), config.tag());
    walk(config, target, 0)
}

/// Build a fresh `T` from its zero value.
///
/// The cache is never consulted.
///
/// # Errors
///
/// Same as [`fill`].
pub fn build<T: Fill>(config: &Config) -> Result<T> {
    let mut value = T::zero();
    fill(&mut value, config)?;
    Ok(value)
}

/// Build a `T`, memoized in the configured cache.
///
/// Without a cache this is [`build`] wrapped in an [`Arc`]. With one, the key
/// is the type name, the tag name and the canonical directives of the
/// top-level fields:
///
/// - a hit returns the cached `Arc` itself, or a fresh clone when deep copy is
///   on;
/// - a miss builds, stores and returns the value (a clone of it when deep copy
///   is on).
///
/// Concurrent misses on one key may both build; the last insert wins.
///
/// # Errors
///
/// Same as [`fill`]. Failed builds are not cached.
pub fn cached<T>(config: &Config) -> Result<Arc<T>>
where
    T: Fill + Clone + Send + Sync + 'static
{
    let Some(cache) = config.cache() else {
        return build(config).map(Arc::new);
    };

    let key = cache_key::<T>(config)?;
    if let Some(hit) = cache.get::<T>(&key) {
        debug!("cache hit for `{key}`");
        return Ok(if config.deep_copy() {
            Arc::new(T::clone(&hit))
        } else {
            hit
        });
    }

    debug!("cache miss for `{key}`");
    let value = Arc::new(build::<T>(config)?);
    cache.insert(key, Arc::clone(&value));

    Ok(if config.deep_copy() {
        Arc::new(T::clone(&value))
    } else {
        value
    })
}
