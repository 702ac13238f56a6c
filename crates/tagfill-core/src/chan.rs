// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Channel handles constructed by `chan` directives.

use std::fmt;

use crossbeam_channel::{Receiver, Sender, bounded};

use crate::shape::{ChannelSlot, Fill, Slot};

/// Optional bounded channel.
///
/// The zero value holds no channel. A `chan(n)` directive opens one that
/// buffers `n` messages; `chan` alone opens a rendezvous channel. Clones share
/// the same underlying channel.
///
/// # Example
///
/// ```rust
/// use tagfill_core::Chan;
///
/// let mut chan: Chan<u8> = Chan::default();
/// assert!(!chan.is_open());
///
/// chan.open(2);
/// chan.sender().unwrap().send(1).unwrap();
/// assert_eq!(chan.receiver().unwrap().recv().unwrap(), 1);
/// ```
pub struct Chan<T> {
    inner:    Option<(Sender<T>, Receiver<T>)>,
    capacity: usize
}

impl<T> Chan<T> {
    /// Replace the handle with a channel buffering `capacity` messages.
    pub fn open(&mut self, capacity: usize) {
        self.inner = Some(bounded(capacity));
        self.capacity = capacity;
    }

    /// Check if a channel was opened.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.inner.is_some()
    }

    /// Buffer size of the open channel, `0` when closed or rendezvous.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Sending half, if open.
    #[must_use]
    pub fn sender(&self) -> Option<&Sender<T>> {
        self.inner.as_ref().map(|(tx, _)| tx)
    }

    /// Receiving half, if open.
    #[must_use]
    pub fn receiver(&self) -> Option<&Receiver<T>> {
        self.inner.as_ref().map(|(_, rx)| rx)
    }
}

impl<T> Default for Chan<T> {
    fn default() -> Self {
        Self {
            inner:    None,
            capacity: 0
        }
    }
}

impl<T> Clone for Chan<T> {
    fn clone(&self) -> Self {
        Self {
            inner:    self.inner.clone(),
            capacity: self.capacity
        }
    }
}

impl<T> fmt::Debug for Chan<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chan")
            .field("open", &self.is_open())
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> ChannelSlot for Chan<T> {
    fn open(&mut self, capacity: usize) {
        Chan::open(self, capacity);
    }
}

impl<T> Fill for Chan<T> {
    fn zero() -> Self {
        Self::default()
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Channel(self)
    }
}
