// SPDX-License-Identifier: MIT OR Apache-2.0
//! Kind-sensitive mapping keys.
//!
//! A key carries both its content and its kind. `Key::symbol("foo")` and
//! `Key::string("foo")` are different keys, so a lookup for one never matches
//! the other.

use std::borrow::Cow;
use std::fmt;

/// Identifier naming a mapping entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Symbolic (atom) key, displayed as `:name`
    Symbol(String),
    /// Textual key, displayed quoted
    Str(String),
    /// Integer key
    Int(i64),
}

impl Key {
    /// Symbolic key
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Textual key
    #[must_use]
    pub fn string(text: impl Into<String>) -> Self {
        Self::Str(text.into())
    }

    /// Bare text of the key, without kind decoration.
    ///
    /// Used when a document format only has textual keys.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Symbol(s) | Self::Str(s) => Cow::Borrowed(s),
            Self::Int(i) => Cow::Owned(i.to_string()),
        }
    }

    /// Whether this is a symbolic key
    #[must_use]
    pub const fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(s) => write!(f, ":{s}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_sensitive_equality() {
        assert_ne!(Key::symbol("foo"), Key::string("foo"));
        assert_eq!(Key::symbol("foo"), Key::Symbol("foo".to_string()));
        assert_ne!(Key::string("1"), Key::Int(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::symbol("foo").to_string(), ":foo");
        assert_eq!(Key::string("foo").to_string(), "\"foo\"");
        assert_eq!(Key::from(42_i64).to_string(), "42");
    }

    #[test]
    fn test_text() {
        assert_eq!(Key::symbol("a").text(), "a");
        assert_eq!(Key::Int(-3).text(), "-3");
    }
}
