// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Deep tree operations
//!
//! Search and rewrite arbitrarily nested mappings by key:
//!
//! - [`contains`] / [`count`]: does a key occur anywhere, and how often
//! - [`find`] / [`find_refs`]: every value bound to a key, as one flat list
//! - [`find_flattened`]: the same, with sequence values spliced in
//! - [`update`]: replace every value bound to a key
//! - [`remove`]: drop every entry named by a key
//! - [`compact`]: drop absent and empty values at every level
//!
//! `find`, `update` and `remove` accept a parent [`Scope`](trawl_core::Scope):
//! only entries sitting somewhere beneath an entry whose key is in the scope
//! take part.
//!
//! Inputs are never modified; each operation returns a fresh tree. A root that
//! is not a mapping is a terminal case for every operation: queries answer
//! `None` or `0`, rewrites hand the input back unchanged.
//!
//! ## Traversal
//!
//! Mapping values are searched when they are mappings, or sequences holding
//! mappings. Scalars and sequences nested directly in sequences are opaque.
//! Queries use an explicit worklist; rewrites check the tree's depth against
//! [`Limits`](trawl_core::Limits) before rebuilding.

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

mod compact;
mod ext;
mod find;
mod options;
mod query;
mod rebuild;
mod remove;
mod update;
mod walk;

pub use compact::{compact, compact_with};
pub use ext::TreeOps;
pub use find::{find, find_flattened, find_refs};
pub use options::{RemoveOptions, UpdateOptions};
pub use query::{contains, count};
pub use remove::remove;
pub use update::update;
