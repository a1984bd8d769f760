// SPDX-License-Identifier: MIT OR Apache-2.0
//! Key-value replacement.

use crate::options::UpdateOptions;
use crate::query::{contains, count};
use crate::rebuild::{Edit, rebuild};
use crate::walk::{Cursor, depth};
use trawl_core::{Key, Node, Result, TrawlError};

/// Copy of `tree` with every value bound to `key` replaced by `value`.
///
/// With `options.parent` set, only entries beneath an entry whose key is in
/// the scope are replaced. A non-mapping `tree` is returned unchanged.
///
/// When `key` is absent and `options.error_on_missing` is false, the copy
/// gains `key` at the top level and an info event is logged.
///
/// # Errors
///
/// Checked in this order, before anything is rebuilt:
/// - [`TrawlError::KeyNotUnique`] when `options.error_on_uniqueness` is set and
///   `key` occurs more than once anywhere in the tree, regardless of scope
/// - [`TrawlError::KeyNotFound`] when `options.error_on_missing` is set and
///   `key` is absent
/// - [`TrawlError::DepthLimitExceeded`] when the tree nests deeper than
///   `options.limits` allows
pub fn update(tree: &Node, key: &Key, value: Node, options: &UpdateOptions) -> Result<Node> {
    let Some(root) = tree.as_mapping() else {
        return Ok(tree.clone());
    };

    if options.error_on_uniqueness && count(tree, key) > 1 {
        return Err(TrawlError::KeyNotUnique { key: key.clone() });
    }

    let present = contains(tree, key) == Some(true);
    if !present && options.error_on_missing {
        return Err(TrawlError::KeyNotFound { key: key.clone() });
    }

    options.limits.check(depth(root))?;

    if !present {
        tracing::info!(key = %key, "key not found, adding it at the top level");
        let mut shallow = root.clone();
        shallow.insert(key.clone(), value);
        return Ok(Node::Mapping(shallow));
    }

    let cursor = Cursor::root(options.parent.as_ref());
    Ok(Node::Mapping(rebuild(root, key, Edit::Replace(&value), cursor)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use trawl_core::{Limits, Scope};

    fn k(name: &str) -> Key {
        Key::string(name)
    }

    #[test]
    fn test_update_unique_key() {
        let tree = Node::from(json!({"a": {"b": 1}, "c": [{"d": 2}]}));
        let updated = update(&tree, &k("d"), Node::from("x"), &UpdateOptions::new()).unwrap();
        assert_eq!(updated, Node::from(json!({"a": {"b": 1}, "c": [{"d": "x"}]})));
        assert_eq!(tree, Node::from(json!({"a": {"b": 1}, "c": [{"d": 2}]})));
    }

    #[test]
    fn test_update_rejects_duplicates_even_when_scoped() {
        let tree = Node::from(json!({"a": {"b": 1}, "b": 2}));
        let options = UpdateOptions::new().within(k("a"));
        assert_eq!(
            update(&tree, &k("b"), Node::null(), &options),
            Err(TrawlError::KeyNotUnique { key: k("b") })
        );
    }

    #[test]
    fn test_update_missing_key() {
        let tree = Node::from(json!({"a": {"b": 1}}));
        assert_eq!(
            update(&tree, &k("z"), Node::null(), &UpdateOptions::new()),
            Err(TrawlError::KeyNotFound { key: k("z") })
        );

        let options = UpdateOptions::new().allow_missing();
        let updated = update(&tree, &k("z"), Node::sequence([]), &options).unwrap();
        let keys: Vec<_> = updated.as_mapping().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec![k("a"), k("z")]);
        assert_eq!(updated.as_mapping().unwrap()[&k("z")], Node::sequence([]));
    }

    #[test]
    fn test_update_all_occurrences() {
        let tree = Node::from(json!({"b": 1, "a": {"b": {"b": 2}}}));
        let options = UpdateOptions::new().allow_duplicates();
        let updated = update(&tree, &k("b"), Node::from(0_i64), &options).unwrap();
        assert_eq!(updated, Node::from(json!({"b": 0, "a": {"b": 0}})));
    }

    #[test]
    fn test_update_scoped() {
        let tree = Node::from(json!({"b": 1, "a": [{"b": 2}, "b"], "c": {"b": 3}}));
        let options = UpdateOptions::new()
            .allow_duplicates()
            .within(Scope::from(k("a")));
        let updated = update(&tree, &k("b"), Node::from(0_i64), &options).unwrap();
        assert_eq!(
            updated,
            Node::from(json!({"b": 1, "a": [{"b": 0}, "b"], "c": {"b": 3}}))
        );
    }

    #[test]
    fn test_update_non_mapping_is_unchanged() {
        let tree = Node::sequence([Node::from(json!({"a": 1}))]);
        let updated = update(&tree, &k("a"), Node::null(), &UpdateOptions::new()).unwrap();
        assert_eq!(updated, tree);
    }

    #[test]
    fn test_update_depth_limit() {
        let tree = Node::from(json!({"a": {"b": {"c": 1}}}));
        let options = UpdateOptions::new().with_limits(Limits::with_max_depth(2));
        assert_eq!(
            update(&tree, &k("c"), Node::null(), &options),
            Err(TrawlError::DepthLimitExceeded { limit: 2 })
        );
        let options = UpdateOptions::new().with_limits(Limits::with_max_depth(3));
        assert!(update(&tree, &k("c"), Node::null(), &options).is_ok());
    }

    #[test]
    fn test_update_depth_limit_applies_to_missing_key() {
        let mut tree = Node::from(1_i64);
        for _ in 0..50 {
            tree = Node::mapping([(k("n"), tree)]);
        }
        let limits = Limits::with_max_depth(10);

        let options = UpdateOptions::new().allow_missing().with_limits(limits);
        assert_eq!(
            update(&tree, &k("absent"), Node::null(), &options),
            Err(TrawlError::DepthLimitExceeded { limit: 10 })
        );

        // strict missing-key error still comes first
        let options = UpdateOptions::new().with_limits(limits);
        assert_eq!(
            update(&tree, &k("absent"), Node::null(), &options),
            Err(TrawlError::KeyNotFound { key: k("absent") })
        );
    }
}
