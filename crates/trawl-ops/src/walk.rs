// SPDX-License-Identifier: MIT OR Apache-2.0
//! Worklist traversal shared by the query operations.
//!
//! Every mapping entry is visited in depth-first, insertion order. A value is
//! descended into when it is a mapping, or when it is a sequence, in which
//! case only its mapping elements are entered. Scalars and sequences nested
//! directly inside sequences are opaque.
//!
//! The walk keeps its own stack of frame iterators, so the call stack does
//! not grow with the depth of the tree.

use trawl_core::{Key, Mapping, Node, Scope};

/// Scope position of an entry during a walk or rebuild
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'s> {
    scope: Option<&'s Scope>,
    pub(crate) in_scope: bool,
}

impl<'s> Cursor<'s> {
    /// Cursor for the root mapping's entries. Without a scope every entry is
    /// in scope; with one, nothing is until a scope key has been passed.
    pub(crate) const fn root(scope: Option<&'s Scope>) -> Self {
        Self {
            scope,
            in_scope: scope.is_none(),
        }
    }

    /// Cursor for the entries beneath the entry named `key`
    pub(crate) fn enter(self, key: &Key) -> Self {
        Self {
            scope: self.scope,
            in_scope: self.in_scope || self.scope.is_some_and(|s| s.contains(key)),
        }
    }
}

/// What the walk does after visiting an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Visit the entry's value
    Descend,
    /// Leave the entry's value unvisited
    Skip,
    /// End the walk
    Stop,
}

/// One visited mapping entry
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry<'a> {
    pub(crate) key: &'a Key,
    pub(crate) value: &'a Node,
    /// Whether the entry sits beneath a scope key (always true unscoped)
    pub(crate) in_scope: bool,
    /// Nesting level of the mapping holding the entry; the root is 1
    pub(crate) depth: usize,
}

enum Frame<'a, 's> {
    Entries(indexmap::map::Iter<'a, Key, Node>, Cursor<'s>, usize),
    Elements(std::slice::Iter<'a, Node>, Cursor<'s>, usize),
}

/// Visit every reachable entry of `root`
pub(crate) fn walk<'a, F>(root: &'a Mapping, scope: Option<&Scope>, mut visit: F)
where
    F: FnMut(Entry<'a>) -> Flow,
{
    let mut stack = vec![Frame::Entries(root.iter(), Cursor::root(scope), 1)];

    while let Some(frame) = stack.last_mut() {
        match frame {
            Frame::Entries(iter, cursor, depth) => {
                let (cursor, depth) = (*cursor, *depth);
                let Some((key, value)) = iter.next() else {
                    stack.pop();
                    continue;
                };
                let entry = Entry {
                    key,
                    value,
                    in_scope: cursor.in_scope,
                    depth,
                };
                match visit(entry) {
                    Flow::Stop => return,
                    Flow::Skip => {}
                    Flow::Descend => match value {
                        Node::Mapping(m) => {
                            stack.push(Frame::Entries(m.iter(), cursor.enter(key), depth + 1));
                        }
                        Node::Sequence(items) => {
                            stack.push(Frame::Elements(items.iter(), cursor.enter(key), depth));
                        }
                        Node::Scalar(_) => {}
                    },
                }
            }
            Frame::Elements(iter, cursor, depth) => {
                let (cursor, depth) = (*cursor, *depth);
                match iter.next() {
                    None => {
                        stack.pop();
                    }
                    Some(Node::Mapping(m)) => {
                        stack.push(Frame::Entries(m.iter(), cursor, depth + 1));
                    }
                    Some(_) => {}
                }
            }
        }
    }
}

/// Deepest mapping nesting reachable from `root`, counting `root` as 1.
///
/// Mappings inside sequences count one level below the mapping holding the
/// sequence.
pub(crate) fn depth(root: &Mapping) -> usize {
    let mut deepest = 1;
    walk(root, None, |entry| {
        let below = match entry.value {
            Node::Mapping(_) => entry.depth + 1,
            Node::Sequence(items) if items.iter().any(Node::is_mapping) => entry.depth + 1,
            _ => entry.depth,
        };
        deepest = deepest.max(below);
        Flow::Descend
    });
    deepest
}
