// SPDX-License-Identifier: MIT OR Apache-2.0
//! Ancestor scopes.
//!
//! A scope restricts find, update and remove to matches that sit somewhere
//! beneath an entry whose key belongs to the scope. Scopes are usually one or
//! two keys long, so they are kept inline and searched linearly.

use crate::key::Key;
use smallvec::SmallVec;

/// Set of ancestor keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    keys: SmallVec<[Key; 4]>,
}

impl Scope {
    /// Scope of a single key
    #[must_use]
    pub fn key(key: Key) -> Self {
        let mut keys = SmallVec::new();
        keys.push(key);
        Self { keys }
    }

    /// Whether `key` is one of the scope's keys
    #[must_use]
    pub fn contains(&self, key: &Key) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Keys in the scope
    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Whether the scope has no keys; an empty scope matches nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of keys in the scope
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

impl From<Key> for Scope {
    fn from(key: Key) -> Self {
        Self::key(key)
    }
}

impl From<Vec<Key>> for Scope {
    fn from(keys: Vec<Key>) -> Self {
        keys.into_iter().collect()
    }
}

impl<const N: usize> From<[Key; N]> for Scope {
    fn from(keys: [Key; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl FromIterator<Key> for Scope {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut keys: SmallVec<[Key; 4]> = SmallVec::new();
        for key in iter {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        Self { keys }
    }
}
