// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared memoization store.
//!
//! A [`Cache`] maps a string key to a previously built value. Handles are
//! cheap to clone and all clones see the same entries. Reads take a shared
//! lock, inserts an exclusive one; the last writer for a key wins.

use std::{
    any::{Any, type_name},
    collections::HashMap,
    fmt,
    fmt::Write as _,
    sync::Arc
};

use parking_lot::RwLock;

use crate::{
    command::Command,
    config::Config,
    error::Result,
    shape::{Fill, Slot}
};

type Entry = Arc<dyn Any + Send + Sync>;

/// Thread-safe store of built values keyed by string.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use tagfill_core::Cache;
///
/// let cache = Cache::new();
/// cache.insert("answer", Arc::new(42_u32));
///
/// assert_eq!(cache.get::<u32>("answer").as_deref(), Some(&42));
/// assert!(cache.get::<String>("answer").is_none());
/// ```
#[derive(Clone, Default)]
pub struct Cache {
    entries: Arc<RwLock<HashMap<String, Entry>>>
}

impl Cache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored under `key`, if present and of type `T`.
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let entry = Arc::clone(self.entries.read().get(key)?);
        entry.downcast::<T>().ok()
    }

    /// Store `value` under `key`, replacing any previous entry.
    pub fn insert<T: Any + Send + Sync>(&self, key: impl Into<String>, value: Arc<T>) {
        self.entries.write().insert(key.into(), value);
    }

    /// Check if an entry exists under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache").field("len", &self.len()).finish()
    }
}

/// Identity of a `T` built under `config`.
///
/// Combines the type name, the tag name and the canonical directives of the
/// top-level struct fields, so one cache can serve several tags.
pub(crate) fn cache_key<T: Fill>(config: &Config) -> Result<String> {
    let mut key = format!("{}#{}", type_name::<T>(), config.tag());
    let mut probe = T::zero();
    describe(config, &mut probe, &mut key)?;
    Ok(key)
}

fn describe(config: &Config, target: &mut dyn Fill, key: &mut String) -> Result<()> {
    match target.slot() {
        Slot::Pointer(ptr) => describe(config, ptr.pointee(), key),
        Slot::Struct(strukt) => {
            for info in strukt.fields() {
                let raw = info.directive(config.tag());
                if raw.is_empty() {
                    continue;
                }
                let cmd = Command::parse(raw)?;
                let _ = write!(key, ";{}={cmd}", info.name);
            }
            Ok(())
        }
        _ => Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn get_checks_type() {
        let cache = Cache::new();
        cache.insert("k", Arc::new(String::from("v")));
        assert_eq!(cache.get::<String>("k").as_deref().map(String::as_str), Some("v"));
        assert!(cache.get::<u8>("k").is_none());
        assert!(cache.get::<String>("missing").is_none());
    }

    #[test]
    fn clones_share_entries() {
        let cache = Cache::new();
        let other = cache.clone();
        other.insert("k", Arc::new(1_i32));
        assert!(cache.contains_key("k"));
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(other.is_empty());
    }

    #[test]
    fn last_writer_wins() {
        let cache = Cache::new();
        cache.insert("k", Arc::new(1_i32));
        cache.insert("k", Arc::new(2_i32));
        assert_eq!(cache.get::<i32>("k").as_deref(), Some(&2));
    }

    #[test]
    fn concurrent_inserts() {
        let cache = Cache::new();
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let cache = cache.clone();
                thread::spawn(move || cache.insert(format!("k{n}"), Arc::new(n)))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 8);
    }

    #[test]
    fn key_of_non_struct_is_type_and_tag() {
        let key = cache_key::<Vec<u8>>(&Config::new()).unwrap();
        assert_eq!(key, "alloc::vec::Vec<u8>#default");
    }
}
