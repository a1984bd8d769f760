// SPDX-License-Identifier: MIT OR Apache-2.0
//! Structural copy with matching entries replaced or dropped.
//!
//! Callers check depth against their limits before rebuilding, so the
//! recursion here is bounded.

use crate::walk::Cursor;
use trawl_core::{Key, Mapping, Node};

/// Change applied to every in-scope entry named by the key
#[derive(Debug, Clone, Copy)]
pub(crate) enum Edit<'v> {
    /// Bind the entry to a copy of this value
    Replace(&'v Node),
    /// Leave the entry out
    Remove,
}

/// Copy of `mapping` with `edit` applied to the in-scope entries named `key`.
///
/// A replaced value is not searched for further matches. Entries named `key`
/// that are out of scope are rebuilt like any other value.
pub(crate) fn rebuild(mapping: &Mapping, key: &Key, edit: Edit<'_>, cursor: Cursor<'_>) -> Mapping {
    let mut out = Mapping::default();
    out.reserve(mapping.len());
    for (k, v) in mapping {
        if cursor.in_scope && k == key {
            match edit {
                Edit::Replace(value) => {
                    out.insert(k.clone(), value.clone());
                }
                Edit::Remove => {}
            }
        } else {
            out.insert(k.clone(), rebuild_value(v, key, edit, cursor.enter(k)));
        }
    }
    out
}

fn rebuild_value(value: &Node, key: &Key, edit: Edit<'_>, cursor: Cursor<'_>) -> Node {
    match value {
        Node::Mapping(m) => Node::Mapping(rebuild(m, key, edit, cursor)),
        Node::Sequence(items) => Node::Sequence(
            items
                .iter()
                .map(|item| match item {
                    Node::Mapping(m) => Node::Mapping(rebuild(m, key, edit, cursor)),
                    other => other.clone(),
                })
                .collect(),
        ),
        Node::Scalar(_) => value.clone(),
    }
}
