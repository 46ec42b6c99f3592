// SPDX-License-Identifier: MPL-2.0
//! Preference storage port definition.
//!
//! This module defines the [`PreferenceStore`] trait over the durable
//! client-side key-value store (browser local storage or equivalent).
//! Infrastructure adapters implement it to provide concrete persistence.
//!
//! The keys `lang` and `theme` are each exclusively owned by their
//! controller; nothing else writes to them.

use std::cell::RefCell;
use std::collections::BTreeMap;

/// Port for the durable key-value preference store.
///
/// Writes are fire-and-forget: an adapter that fails to persist logs the
/// failure and returns, it never surfaces an error to the controller.
pub trait PreferenceStore {
    /// Reads the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set(&self, key: &str, value: &str);
}

/// In-memory [`PreferenceStore`] backed by a map.
///
/// Starts empty; values live for the lifetime of the instance.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-seeded with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store.set(key, value);
        }
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
