// SPDX-License-Identifier: MIT OR Apache-2.0
//! Key deletion.

use crate::options::RemoveOptions;
use crate::query::count;
use crate::rebuild::{Edit, rebuild};
use crate::walk::{Cursor, depth};
use trawl_core::{Key, Node, Result, TrawlError};

/// Copy of `tree` without the entries named `key`.
///
/// With `options.parent` set, only entries beneath an entry whose key is in
/// the scope are dropped. Removing an absent key is a no-op, and a
/// non-mapping `tree` is returned unchanged.
///
/// # Errors
///
/// - [`TrawlError::KeyNotUnique`] when `options.error_on_uniqueness` is set and
///   `key` occurs more than once anywhere in the tree, regardless of scope
/// - [`TrawlError::DepthLimitExceeded`] when the tree nests deeper than
///   `options.limits` allows
pub fn remove(tree: &Node, key: &Key, options: &RemoveOptions) -> Result<Node> {
    let Some(root) = tree.as_mapping() else {
        return Ok(tree.clone());
    };

    if options.error_on_uniqueness && count(tree, key) > 1 {
        return Err(TrawlError::KeyNotUnique { key: key.clone() });
    }

    options.limits.check(depth(root))?;
    let cursor = Cursor::root(options.parent.as_ref());
    Ok(Node::Mapping(rebuild(root, key, Edit::Remove, cursor)))
}
