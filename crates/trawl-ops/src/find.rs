// SPDX-License-Identifier: MIT OR Apache-2.0
//! Value collection.
//!
//! Matches are gathered into one flat buffer in the order the depth-first walk
//! meets them. A matched value is taken whole: the walk does not look for
//! further matches inside it.

use crate::query::contains;
use crate::walk::{Flow, walk};
use trawl_core::{Key, Node, Scope};

/// Every value bound to `key`, borrowed from `tree`.
///
/// With a `parent` scope only entries beneath an entry whose key is in the
/// scope are collected. Entries named `key` outside the scope are searched
/// like any other value.
///
/// Returns `None` when `tree` is not a mapping, does not contain `key`, or
/// nothing matched inside the scope.
#[must_use]
pub fn find_refs<'a>(tree: &'a Node, key: &Key, parent: Option<&Scope>) -> Option<Vec<&'a Node>> {
    if contains(tree, key) != Some(true) {
        return None;
    }
    let root = tree.as_mapping()?;

    let mut found = Vec::new();
    walk(root, parent, |entry| {
        if entry.in_scope && entry.key == key {
            found.push(entry.value);
            Flow::Skip
        } else {
            Flow::Descend
        }
    });

    if found.is_empty() { None } else { Some(found) }
}

/// Every value bound to `key`, cloned out of `tree`.
///
/// See [`find_refs`] for the matching and scoping rules. A matched sequence
/// stays whole, so `{"foo": [null]}` gives `[[null]]`; [`find_flattened`]
/// splices it instead and gives `[null]`.
#[must_use]
pub fn find(tree: &Node, key: &Key, parent: Option<&Scope>) -> Option<Vec<Node>> {
    find_refs(tree, key, parent).map(|found| found.into_iter().cloned().collect())
}

/// Like [`find`], with sequence values spliced into the result.
///
/// A matched value that is a sequence contributes its elements instead of
/// itself, at any nesting, so the result never holds a sequence. Returns
/// `None` when nothing is left.
#[must_use]
pub fn find_flattened(tree: &Node, key: &Key, parent: Option<&Scope>) -> Option<Vec<Node>> {
    let found = find_refs(tree, key, parent)?;

    let mut flat = Vec::with_capacity(found.len());
    let mut pending: Vec<&Node> = found.into_iter().rev().collect();
    while let Some(node) = pending.pop() {
        match node {
            Node::Sequence(items) => pending.extend(items.iter().rev()),
            other => flat.push(other.clone()),
        }
    }

    if flat.is_empty() { None } else { Some(flat) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn k(name: &str) -> Key {
        Key::string(name)
    }

    #[test]
    fn test_find_flattens_in_walk_order() {
        let tree = Node::from(json!({
            "a": {"x": 1},
            "b": [{"x": 2}, {"y": {"x": 3}}],
            "x": 4
        }));
        assert_eq!(
            find(&tree, &k("x"), None),
            Some(vec![
                Node::from(1_i64),
                Node::from(2_i64),
                Node::from(3_i64),
                Node::from(4_i64)
            ])
        );
    }

    #[test]
    fn test_find_does_not_descend_into_matches() {
        let tree = Node::from(json!({"x": {"x": 1}}));
        let found = find(&tree, &k("x"), None).unwrap();
        assert_eq!(found, vec![Node::from(json!({"x": 1}))]);
    }

    #[test]
    fn test_find_scoped() {
        let tree = Node::from(json!({
            "p": {"x": 1, "q": {"x": 2}},
            "q": {"x": 3},
            "x": 4
        }));
        let scope = Scope::from(k("q"));
        assert_eq!(
            find(&tree, &k("x"), Some(&scope)),
            Some(vec![Node::from(2_i64), Node::from(3_i64)])
        );

        let scope = Scope::from(k("p"));
        assert_eq!(
            find(&tree, &k("x"), Some(&scope)),
            Some(vec![Node::from(1_i64), Node::from(2_i64)])
        );
    }

    #[test]
    fn test_find_scoped_can_be_empty() {
        let tree = Node::from(json!({"p": {"y": 1}, "x": 2}));
        assert_eq!(find(&tree, &k("x"), Some(&Scope::from(k("p")))), None);
        assert_eq!(find(&tree, &k("x"), Some(&Scope::default())), None);
    }

    #[test]
    fn test_find_not_applicable() {
        assert_eq!(find(&Node::sequence([]), &k("x"), None), None);
        assert_eq!(find(&Node::from(json!({"y": 1})), &k("x"), None), None);
    }

    #[test]
    fn test_find_keeps_sequence_values_whole() {
        let tree = Node::from(json!({"x": [1, [2]], "a": {"x": 3}}));
        assert_eq!(
            find(&tree, &k("x"), None),
            Some(vec![Node::from(json!([1, [2]])), Node::from(3_i64)])
        );
        assert_eq!(
            find_flattened(&tree, &k("x"), None),
            Some(vec![Node::from(1_i64), Node::from(2_i64), Node::from(3_i64)])
        );
    }

    #[test]
    fn test_find_flattened_drops_empty_sequences() {
        let tree = Node::from(json!({"x": [], "a": {"x": [[]]}}));
        assert_eq!(find(&tree, &k("x"), None).map(|v| v.len()), Some(2));
        assert_eq!(find_flattened(&tree, &k("x"), None), None);
    }

    #[test]
    fn test_find_refs_borrow() {
        let tree = Node::from(json!({"a": {"x": [1, 2]}}));
        let found = find_refs(&tree, &k("x"), None).unwrap();
        assert!(std::ptr::eq(
            found[0],
            &tree.as_mapping().unwrap()[&k("a")].as_mapping().unwrap()[&k("x")]
        ));
    }
}
