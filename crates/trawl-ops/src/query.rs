// SPDX-License-Identifier: MIT OR Apache-2.0
//! Containment and occurrence counting.

use crate::walk::{Flow, walk};
use trawl_core::{Key, Node};

/// Whether `key` occurs anywhere in `tree`.
///
/// Returns `None` when `tree` is not a mapping, so "not applicable" stays
/// distinct from `Some(false)`. Stops at the first occurrence.
#[must_use]
pub fn contains(tree: &Node, key: &Key) -> Option<bool> {
    let root = tree.as_mapping()?;
    if root.contains_key(key) {
        return Some(true);
    }

    let mut found = false;
    walk(root, None, |entry| {
        if entry.key == key {
            found = true;
            Flow::Stop
        } else {
            Flow::Descend
        }
    });
    Some(found)
}

/// Number of entries named `key` across the whole tree.
///
/// Occurrences nested inside the value of another occurrence are counted
/// too. A non-mapping `tree` counts 0.
#[must_use]
pub fn count(tree: &Node, key: &Key) -> usize {
    if contains(tree, key) != Some(true) {
        return 0;
    }
    let Some(root) = tree.as_mapping() else {
        return 0;
    };

    let mut found = 0;
    walk(root, None, |entry| {
        if entry.key == key {
            found += 1;
        }
        Flow::Descend
    });
    found
}
