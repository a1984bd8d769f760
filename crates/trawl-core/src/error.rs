// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for trawl operations.
//!
//! Every failure is a precondition failure: it is detected before any part of
//! the result tree is built, so a failed call never yields a partially
//! transformed tree.

use crate::key::Key;
use thiserror::Error;

/// Errors raised by trawl operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrawlError {
    /// The key occurs more than once across the tree and uniqueness was required
    #[error("key {key} is not unique; pass error_on_uniqueness = false to change every occurrence")]
    KeyNotUnique {
        /// The offending key
        key: Key,
    },

    /// The key does not occur anywhere in the tree
    #[error("key {key} not found; pass error_on_missing = false to insert it at the top level")]
    KeyNotFound {
        /// The missing key
        key: Key,
    },

    /// The tree nests deeper than the configured limit
    #[error("tree exceeds the maximum depth of {limit}")]
    DepthLimitExceeded {
        /// The configured limit
        limit: usize,
    },

    /// A value cannot be carried across a document conversion
    #[error("value cannot be represented: {reason}")]
    Unrepresentable {
        /// What could not be converted
        reason: String,
    },
}

impl TrawlError {
    /// The key named by the error, if any
    #[must_use]
    pub const fn key(&self) -> Option<&Key> {
        match self {
            Self::KeyNotUnique { key } | Self::KeyNotFound { key } => Some(key),
            Self::DepthLimitExceeded { .. } | Self::Unrepresentable { .. } => None,
        }
    }

    pub(crate) fn unrepresentable(reason: impl Into<String>) -> Self {
        Self::Unrepresentable {
            reason: reason.into(),
        }
    }
}

/// Result type alias for trawl operations
pub type Result<T> = std::result::Result<T, TrawlError>;
