// SPDX-License-Identifier: MIT OR Apache-2.0
//! Conversion between trees and document values.
//!
//! JSON objects become mappings with [`Key::Str`] keys. Going back to JSON,
//! symbols render as their bare name and integer keys as decimal text, so a
//! tree built with symbolic keys still serializes.

use crate::error::{Result, TrawlError};
use crate::key::Key;
use crate::node::{Mapping, Node, Scalar};
use serde_json::Value;

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::null(),
            Value::Bool(b) => Self::from(b),
            Value::Number(n) => number(n.as_i64(), n.as_u64(), n.as_f64()),
            Value::String(s) => Self::from(s),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(obj) => Self::Mapping(
                obj.into_iter()
                    .map(|(k, v)| (Key::Str(k), Self::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Node for a decoded number, keeping integers exact where they fit
fn number(int: Option<i64>, uint: Option<u64>, float: Option<f64>) -> Node {
    match (int, uint) {
        (Some(i), _) => Node::from(i),
        (None, Some(u)) => Node::from(u),
        (None, None) => Node::from(float.unwrap_or(f64::NAN)),
    }
}

impl From<&Value> for Node {
    fn from(value: &Value) -> Self {
        Self::from(value.clone())
    }
}

impl Node {
    /// Convert to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`TrawlError::Unrepresentable`] for non-finite floats, which
    /// JSON cannot carry, and for sibling keys that render to the same text
    /// (`:a`, `"a"`, or `1` next to `"1"`).
    pub fn to_json(&self) -> Result<Value> {
        match self {
            Self::Scalar(s) => scalar_to_json(s),
            Self::Sequence(items) => items
                .iter()
                .map(Self::to_json)
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            Self::Mapping(m) => mapping_to_json(m),
        }
    }
}

fn scalar_to_json(scalar: &Scalar) -> Result<Value> {
    Ok(match scalar {
        Scalar::Null => Value::Null,
        Scalar::Bool(b) => Value::Bool(*b),
        Scalar::Int(i) => Value::from(*i),
        Scalar::UInt(u) => Value::from(*u),
        Scalar::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .ok_or_else(|| TrawlError::unrepresentable(format!("float {f} in JSON")))?,
        Scalar::Str(s) | Scalar::Symbol(s) => Value::String(s.clone()),
    })
}

fn mapping_to_json(mapping: &Mapping) -> Result<Value> {
    let mut obj = serde_json::Map::with_capacity(mapping.len());
    for (k, v) in mapping {
        if obj.insert(k.text().into_owned(), v.to_json()?).is_some() {
            return Err(TrawlError::unrepresentable(format!(
                "key {k} collides with a sibling in JSON"
            )));
        }
    }
    Ok(Value::Object(obj))
}

#[cfg(feature = "yaml")]
mod yaml {
    use super::{Key, Node, Result, TrawlError};
    use serde_yaml::Value;

    impl Node {
        /// Convert from a YAML value.
        ///
        /// String keys become [`Key::Str`] and integer keys [`Key::Int`].
        /// Tags are dropped and the tagged value kept.
        ///
        /// # Errors
        ///
        /// Returns [`TrawlError::Unrepresentable`] for mapping keys of any
        /// other kind.
        pub fn from_yaml(value: Value) -> Result<Self> {
            Ok(match value {
                Value::Null => Self::null(),
                Value::Bool(b) => Self::from(b),
                Value::Number(n) => super::number(n.as_i64(), n.as_u64(), n.as_f64()),
                Value::String(s) => Self::from(s),
                Value::Sequence(items) => Self::Sequence(
                    items
                        .into_iter()
                        .map(Self::from_yaml)
                        .collect::<Result<Vec<_>>>()?,
                ),
                Value::Mapping(m) => {
                    let mut mapping = crate::node::Mapping::default();
                    for (k, v) in m {
                        mapping.insert(yaml_key(k)?, Self::from_yaml(v)?);
                    }
                    Self::Mapping(mapping)
                }
                Value::Tagged(tagged) => Self::from_yaml(tagged.value)?,
            })
        }
    }

    fn yaml_key(value: Value) -> Result<Key> {
        match value {
            Value::String(s) => Ok(Key::Str(s)),
            Value::Number(n) => n.as_i64().map(Key::Int).ok_or_else(|| {
                TrawlError::unrepresentable(format!("non-integer mapping key {n}"))
            }),
            Value::Tagged(tagged) => yaml_key(tagged.value),
            other => Err(TrawlError::unrepresentable(format!(
                "mapping key {other:?}"
            ))),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_from_yaml_keys() {
            let value: Value = serde_yaml::from_str("a:\n  1: x\n  b: [1, ~]\n").unwrap();
            let node = Node::from_yaml(value).unwrap();
            let inner = node.as_mapping().unwrap()[&Key::string("a")].clone();
            let inner = inner.as_mapping().unwrap();
            assert_eq!(inner[&Key::Int(1)], Node::string("x"));
            assert_eq!(
                inner[&Key::string("b")],
                Node::sequence([Node::from(1_i64), Node::null()])
            );
        }

        #[test]
        fn test_from_yaml_keeps_large_unsigned() {
            let value: Value = serde_yaml::from_str("id: 18446744073709551615\n").unwrap();
            let node = Node::from_yaml(value).unwrap();
            assert_eq!(
                node.as_mapping().unwrap()[&Key::string("id")],
                Node::from(u64::MAX)
            );
        }

        #[test]
        fn test_from_yaml_rejects_bool_keys() {
            let value: Value = serde_yaml::from_str("true: x\n").unwrap();
            assert!(matches!(
                Node::from_yaml(value),
                Err(TrawlError::Unrepresentable { .. })
            ));
        }
    }
}
