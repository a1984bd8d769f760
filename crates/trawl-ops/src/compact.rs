// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pruning of blank values.

use crate::walk::depth;
use trawl_core::{Limits, Mapping, Node, Result};

/// Copy of `tree` without blank entries, at every mapping level.
///
/// Nested mappings, including mappings held in sequences, are compacted
/// first; an entry is then dropped when its compacted value is blank (see
/// [`Node::is_blank`]). Sequence elements that are not mappings are kept as
/// they are, absent markers included. A non-mapping `tree` is returned
/// unchanged.
///
/// This recurses once per mapping level; use [`compact_with`] for input
/// whose depth is not known to be reasonable.
#[must_use]
pub fn compact(tree: &Node) -> Node {
    match tree {
        Node::Mapping(m) => Node::Mapping(compact_mapping(m)),
        other => other.clone(),
    }
}

/// [`compact`] behind a depth guard.
///
/// # Errors
///
/// Returns [`TrawlError::DepthLimitExceeded`](trawl_core::TrawlError::DepthLimitExceeded)
/// when the tree nests deeper than `limits` allows.
pub fn compact_with(tree: &Node, limits: &Limits) -> Result<Node> {
    if let Some(root) = tree.as_mapping() {
        limits.check(depth(root))?;
    }
    Ok(compact(tree))
}

fn compact_mapping(mapping: &Mapping) -> Mapping {
    mapping
        .iter()
        .map(|(k, v)| (k, compact_value(v)))
        .filter(|(_, v)| !v.is_blank())
        .map(|(k, v)| (k.clone(), v))
        .collect()
}

fn compact_value(value: &Node) -> Node {
    match value {
        Node::Mapping(m) => Node::Mapping(compact_mapping(m)),
        Node::Sequence(items) => Node::Sequence(
            items
                .iter()
                .map(|item| match item {
                    Node::Mapping(m) => Node::Mapping(compact_mapping(m)),
                    other => other.clone(),
                })
                .collect(),
        ),
        Node::Scalar(_) => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use trawl_core::TrawlError;

    #[test]
    fn test_compact_drops_blank_entries() {
        let tree = Node::from(json!({
            "a": null,
            "b": "",
            "c": [],
            "d": {},
            "e": 0,
            "f": false,
            "g": "x"
        }));
        assert_eq!(compact(&tree), Node::from(json!({"e": 0, "f": false, "g": "x"})));
    }

    #[test]
    fn test_compact_prunes_emptied_children() {
        let tree = Node::from(json!({"a": {"b": {"c": null}}, "d": 1}));
        assert_eq!(compact(&tree), Node::from(json!({"d": 1})));
    }

    #[test]
    fn test_compact_is_shallow_inside_sequences() {
        let tree = Node::from(json!({"a": [null, "", [], {"b": null, "c": 1}, {"d": ""}]}));
        assert_eq!(
            compact(&tree),
            Node::from(json!({"a": [null, "", [], {"c": 1}, {}]}))
        );
    }

    #[test]
    fn test_compact_keeps_sequence_of_absent_markers() {
        let tree = Node::from(json!({"foo": [null]}));
        assert_eq!(compact(&tree), tree);
    }

    #[test]
    fn test_compact_non_mapping_is_identity() {
        let tree = Node::sequence([Node::null(), Node::from(json!({"a": null}))]);
        assert_eq!(compact(&tree), tree);
    }

    #[test]
    fn test_compact_with_limits() {
        let tree = Node::from(json!({"a": {"b": {"c": null}}}));
        assert_eq!(
            compact_with(&tree, &Limits::with_max_depth(1)),
            Err(TrawlError::DepthLimitExceeded { limit: 1 })
        );
        assert_eq!(
            compact_with(&tree, &Limits::default()),
            Ok(Node::empty_mapping())
        );
    }
}
