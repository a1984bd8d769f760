// SPDX-License-Identifier: MIT OR Apache-2.0
//! # trawl
//!
//! Deep, structural operations over nested trees: ask whether a key occurs
//! anywhere, count it, collect its values, replace them, or delete them,
//! optionally only beneath chosen ancestor keys. [`compact`] strips absent and
//! empty values at every level.
//!
//! ```
//! use trawl::{Key, Node, Scope, UpdateOptions, find, update};
//!
//! let tree = Node::from(serde_json::json!({
//!     "server": {"port": 80},
//!     "admin": {"server": {"port": 8080}}
//! }));
//! let port = Key::string("port");
//!
//! let admin = Scope::from(Key::string("admin"));
//! assert_eq!(find(&tree, &port, Some(&admin)), Some(vec![Node::from(8080_i64)]));
//!
//! let options = UpdateOptions::new().allow_duplicates().within(admin);
//! let tree = update(&tree, &port, Node::from(9090_i64), &options)?;
//! assert_eq!(
//!     find(&tree, &port, None),
//!     Some(vec![Node::from(80_i64), Node::from(9090_i64)])
//! );
//! # Ok::<(), trawl::TrawlError>(())
//! ```
//!
//! ## Crates
//!
//! - [`core`] - Tree model, keys, scopes, limits and errors
//! - [`ops`] - The operations themselves

#![doc(html_root_url = "https://docs.rs/trawl/0.1.0")]
#![deny(missing_docs)]

/// Re-export of trawl-core for the tree model.
pub use trawl_core as core;

/// Re-export of trawl-ops for the operations.
pub use trawl_ops as ops;

pub use trawl_core::{
    DEFAULT_MAX_DEPTH, Key, Limits, Mapping, Node, Result, Scalar, Scope, TrawlError,
};
pub use trawl_ops::{
    RemoveOptions, TreeOps, UpdateOptions, compact, compact_with, contains, count, find,
    find_flattened, find_refs, remove, update,
};

/// Version of the trawl crates
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
        assert_eq!(VERSION.split('.').count(), 3);
    }
}
