// SPDX-License-Identifier: MIT OR Apache-2.0
//! Options for the rebuilding operations.

use trawl_core::{Limits, Scope};

/// Options for [`update`](crate::update)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Fail when the key is absent instead of adding it at the top level
    pub error_on_missing: bool,
    /// Fail when the key occurs more than once anywhere in the tree
    pub error_on_uniqueness: bool,
    /// Only change entries beneath an entry whose key is in this scope
    pub parent: Option<Scope>,
    /// Depth guard for the rebuild
    pub limits: Limits,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            error_on_missing: true,
            error_on_uniqueness: true,
            parent: None,
            limits: Limits::default(),
        }
    }
}

impl UpdateOptions {
    /// Strict defaults: missing and duplicated keys are errors
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an absent key at the top level instead of failing
    #[must_use]
    pub const fn allow_missing(mut self) -> Self {
        self.error_on_missing = false;
        self
    }

    /// Change every occurrence instead of failing on duplicates
    #[must_use]
    pub const fn allow_duplicates(mut self) -> Self {
        self.error_on_uniqueness = false;
        self
    }

    /// Restrict the update to entries beneath `parent`
    #[must_use]
    pub fn within(mut self, parent: impl Into<Scope>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Replace the depth guard
    #[must_use]
    pub const fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}

/// Options for [`remove`](crate::remove)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveOptions {
    /// Fail when the key occurs more than once anywhere in the tree
    pub error_on_uniqueness: bool,
    /// Only remove entries beneath an entry whose key is in this scope
    pub parent: Option<Scope>,
    /// Depth guard for the rebuild
    pub limits: Limits,
}

impl Default for RemoveOptions {
    fn default() -> Self {
        Self {
            error_on_uniqueness: true,
            parent: None,
            limits: Limits::default(),
        }
    }
}

impl RemoveOptions {
    /// Strict defaults: duplicated keys are an error
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every occurrence instead of failing on duplicates
    #[must_use]
    pub const fn allow_duplicates(mut self) -> Self {
        self.error_on_uniqueness = false;
        self
    }

    /// Restrict the removal to entries beneath `parent`
    #[must_use]
    pub fn within(mut self, parent: impl Into<Scope>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Replace the depth guard
    #[must_use]
    pub const fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trawl_core::Key;

    #[test]
    fn test_update_defaults_are_strict() {
        let options = UpdateOptions::new();
        assert!(options.error_on_missing);
        assert!(options.error_on_uniqueness);
        assert!(options.parent.is_none());
    }

    #[test]
    fn test_builders() {
        let options = UpdateOptions::new()
            .allow_missing()
            .allow_duplicates()
            .within(Key::symbol("hey"))
            .with_limits(Limits::with_max_depth(4));
        assert!(!options.error_on_missing);
        assert!(!options.error_on_uniqueness);
        assert_eq!(options.parent, Some(Scope::from(Key::symbol("hey"))));
        assert_eq!(options.limits.max_depth, 4);

        let options = RemoveOptions::new().within([Key::symbol("a"), Key::symbol("b")]);
        assert!(options.error_on_uniqueness);
        assert_eq!(options.parent.map(|p| p.len()), Some(2));
    }
}
