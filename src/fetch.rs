// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Last-write-wins by request identity.
//!
//! Each filter change starts a new generation. A response is kept only if it
//! belongs to the newest generation, so a slow request for an old filter can
//! never overwrite data fetched for the current one.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    pub generation: u64,
    pub key: K,
}

#[derive(Debug)]
pub struct RequestTracker<K, V> {
    current: AtomicU64,
    latest: Mutex<Option<(K, V)>>,
}

impl<K, V> Default for RequestTracker<K, V> {
    fn default() -> Self {
        Self {
            current: AtomicU64::new(0),
            latest: Mutex::new(None),
        }
    }
}

impl<K: Clone, V: Clone> RequestTracker<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request for `key`, superseding every earlier ticket.
    pub fn begin(&self, key: K) -> Ticket<K> {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket { generation, key }
    }

    pub fn is_current(&self, ticket: &Ticket<K>) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.generation
    }

    /// Stores `value` if `ticket` is still the newest. Returns `false` when the
    /// response is stale and was discarded.
    pub fn complete(&self, ticket: Ticket<K>, value: V) -> bool {
        let Ok(mut slot) = self.latest.lock() else {
            return false;
        };
        // checked under the lock so a newer completion cannot interleave
        if !self.is_current(&ticket) {
            tracing::warn!(generation = ticket.generation, "discarding stale response");
            return false;
        }
        *slot = Some((ticket.key, value));
        true
    }

    pub fn latest(&self) -> Option<(K, V)> {
        self.latest.lock().ok().and_then(|s| s.clone())
    }
}
