// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types, error handling, and configuration for trawl
//!
//! This crate provides the foundational types used across the trawl workspace:
//!
//! - [`error`] - Error types and Result alias
//! - [`key`] - Kind-sensitive mapping keys
//! - [`node`] - The tree model every operation walks
//! - [`scope`] - Ancestor scopes for scoped operations
//! - [`config`] - Traversal limits
//! - [`json`] - Conversion to and from document values

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

/// Traversal limits
pub mod config;
/// Error types for trawl operations
pub mod error;
/// Document conversion (JSON, and YAML behind the `yaml` feature)
pub mod json;
/// Mapping keys
pub mod key;
/// Tree model
pub mod node;
/// Ancestor scopes
pub mod scope;

// Re-exports for convenience
pub use config::{DEFAULT_MAX_DEPTH, Limits};
pub use error::{Result, TrawlError};
pub use key::Key;
pub use node::{Mapping, Node, Scalar};
pub use scope::Scope;
