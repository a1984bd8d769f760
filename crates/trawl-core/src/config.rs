// SPDX-License-Identifier: MIT OR Apache-2.0
//! Traversal limits.
//!
//! Queries walk the tree with an explicit worklist and are bounded only by
//! memory. Operations that rebuild the tree recurse, so they check the depth
//! they have reached against [`Limits::max_depth`] and fail with
//! [`TrawlError::DepthLimitExceeded`] instead of exhausting the stack.

use crate::error::{Result, TrawlError};

/// Default nesting limit for operations that rebuild the tree
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Limits applied while rebuilding a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Deepest mapping nesting a rebuild will descend into
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Limits {
    /// Limits with the given maximum depth
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// No depth guard
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }

    /// Check a depth reached during a rebuild.
    ///
    /// # Errors
    ///
    /// Returns [`TrawlError::DepthLimitExceeded`] when `depth` is beyond
    /// `max_depth`.
    pub const fn check(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            Err(TrawlError::DepthLimitExceeded {
                limit: self.max_depth,
            })
        } else {
            Ok(())
        }
    }
}
