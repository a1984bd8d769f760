// SPDX-License-Identifier: MIT OR Apache-2.0
//! Method-style access to the operations.

use crate::options::{RemoveOptions, UpdateOptions};
use trawl_core::{Key, Node, Result, Scope};

/// Deep operations as methods on a tree
pub trait TreeOps {
    /// See [`contains`](crate::contains)
    fn deep_contains(&self, key: &Key) -> Option<bool>;

    /// See [`count`](crate::count)
    fn deep_count(&self, key: &Key) -> usize;

    /// See [`find`](crate::find); matched sequences stay whole, as there.
    /// Use [`find_flattened`](crate::find_flattened) to splice them.
    fn deep_find(&self, key: &Key, parent: Option<&Scope>) -> Option<Vec<Node>>;

    /// See [`update`](crate::update)
    ///
    /// # Errors
    ///
    /// As for [`update`](crate::update).
    fn deep_update(&self, key: &Key, value: Node, options: &UpdateOptions) -> Result<Node>;

    /// See [`remove`](crate::remove)
    ///
    /// # Errors
    ///
    /// As for [`remove`](crate::remove).
    fn deep_remove(&self, key: &Key, options: &RemoveOptions) -> Result<Node>;

    /// See [`compact`](crate::compact)
    fn deep_compact(&self) -> Node;
}

impl TreeOps for Node {
    fn deep_contains(&self, key: &Key) -> Option<bool> {
        crate::contains(self, key)
    }

    fn deep_count(&self, key: &Key) -> usize {
        crate::count(self, key)
    }

    fn deep_find(&self, key: &Key, parent: Option<&Scope>) -> Option<Vec<Node>> {
        crate::find(self, key, parent)
    }

    fn deep_update(&self, key: &Key, value: Node, options: &UpdateOptions) -> Result<Node> {
        crate::update(self, key, value, options)
    }

    fn deep_remove(&self, key: &Key, options: &RemoveOptions) -> Result<Node> {
        crate::remove(self, key, options)
    }

    fn deep_compact(&self) -> Node {
        crate::compact(self)
    }
}
