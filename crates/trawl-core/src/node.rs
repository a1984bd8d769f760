// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tree model.
//!
//! A [`Node`] is a mapping, a sequence, or a scalar leaf. Mappings keep
//! insertion order, which is the order every operation walks and rebuilds
//! them in. Equality between mappings ignores order, as it does for the
//! documents these trees are usually decoded from.

use crate::key::Key;
use indexmap::IndexMap;

/// Ordered mapping from keys to nodes
pub type Mapping = IndexMap<Key, Node, ahash::RandomState>;

/// Terminal value
///
/// Equality is derived, so a `Float(NAN)` is never equal to itself and a tree
/// holding one never compares equal, not even to its own clone.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Absent marker
    Null,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Unsigned integer beyond the range of `Int`
    UInt(u64),
    /// Floating point number
    Float(f64),
    /// Text
    Str(String),
    /// Symbol (atom); never equal to a `Str` of the same spelling
    Symbol(String),
}

impl Scalar {
    /// Whether the scalar is absent or empty text.
    ///
    /// Numbers and booleans are never blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Str(s) | Self::Symbol(s) => s.is_empty(),
            Self::Bool(_) | Self::Int(_) | Self::UInt(_) | Self::Float(_) => false,
        }
    }
}

/// A value in the tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Terminal value
    Scalar(Scalar),
    /// Ordered key/value pairs with unique keys
    Mapping(Mapping),
    /// Ordered list of nodes
    Sequence(Vec<Self>),
}

impl Node {
    /// The absent marker
    #[must_use]
    pub const fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    /// Symbol scalar
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Symbol(name.into()))
    }

    /// Text scalar
    #[must_use]
    pub fn string(text: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Str(text.into()))
    }

    /// Empty mapping
    #[must_use]
    pub fn empty_mapping() -> Self {
        Self::Mapping(Mapping::default())
    }

    /// Mapping built from pairs, in the order given.
    ///
    /// A key given twice keeps its first position and its last value.
    #[must_use]
    pub fn mapping<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Key, Self)>,
    {
        Self::Mapping(pairs.into_iter().collect())
    }

    /// Sequence built from nodes
    #[must_use]
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Sequence(items.into_iter().collect())
    }

    /// Borrow as a mapping
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Borrow as a sequence
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow as a scalar
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the node is a mapping
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Whether the node is the absent marker
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    /// Whether the node is absent or reports itself empty: empty text, an
    /// empty symbol, an empty sequence or an empty mapping.
    ///
    /// Only the node itself is inspected; a sequence holding nothing but
    /// absent markers is not blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Scalar(s) => s.is_blank(),
            Self::Mapping(m) => m.is_empty(),
            Self::Sequence(items) => items.is_empty(),
        }
    }

    /// Short name of the node's kind, for diagnostics
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Mapping(_) => "mapping",
            Self::Sequence(_) => "sequence",
            Self::Scalar(Scalar::Null) => "null",
            Self::Scalar(Scalar::Bool(_)) => "bool",
            Self::Scalar(Scalar::Int(_)) => "int",
            Self::Scalar(Scalar::UInt(_)) => "uint",
            Self::Scalar(Scalar::Float(_)) => "float",
            Self::Scalar(Scalar::Str(_)) => "string",
            Self::Scalar(Scalar::Symbol(_)) => "symbol",
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::null()
    }
}

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<Mapping> for Node {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl From<Vec<Self>> for Node {
    fn from(value: Vec<Self>) -> Self {
        Self::Sequence(value)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Int(value))
    }
}

impl From<u64> for Node {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Scalar(Scalar::UInt(value)), Self::from)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Float(value))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::Str(value))
    }
}

impl<T: Into<Self>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blankness() {
        assert!(Node::null().is_blank());
        assert!(Node::string("").is_blank());
        assert!(Node::symbol("").is_blank());
        assert!(Node::sequence([]).is_blank());
        assert!(Node::empty_mapping().is_blank());

        assert!(!Node::from(0_i64).is_blank());
        assert!(!Node::from(u64::MAX).is_blank());
        assert!(!Node::from(false).is_blank());
        assert!(!Node::string(" ").is_blank());
        assert!(!Node::sequence([Node::null()]).is_blank());
    }

    #[test]
    fn test_symbol_and_string_scalars_differ() {
        assert_ne!(Node::symbol("a"), Node::string("a"));
        assert_eq!(Node::from("a"), Node::string("a"));
    }

    #[test]
    fn test_mapping_preserves_insertion_order() {
        let node = Node::mapping([
            (Key::symbol("z"), Node::from(1_i64)),
            (Key::symbol("a"), Node::from(2_i64)),
            (Key::symbol("m"), Node::from(3_i64)),
        ]);
        let keys: Vec<_> = node
            .as_mapping()
            .map(|m| m.keys().map(ToString::to_string).collect())
            .unwrap_or_default();
        assert_eq!(keys, vec![":z", ":a", ":m"]);
    }

    #[test]
    fn test_kind() {
        assert_eq!(Node::empty_mapping().kind(), "mapping");
        assert_eq!(Node::sequence([]).kind(), "sequence");
        assert_eq!(Node::from(None::<i64>).kind(), "null");
        assert_eq!(Node::from(Some(1.5)).kind(), "float");
        assert_eq!(Node::from(7_u64).kind(), "int");
        assert_eq!(Node::from(u64::MAX).kind(), "uint");
    }
}
