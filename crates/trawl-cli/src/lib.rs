// SPDX-License-Identifier: MIT OR Apache-2.0
//! # trawl-cli
//!
//! Command-line interface for trawl: deep key search and rewriting over JSON
//! (and, with the `yaml` feature, YAML) documents.
//!
//! ## Installation
//!
//! ```bash
//! cargo install trawl-cli
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Does the key occur anywhere?
//! trawl contains port config.json
//!
//! # How many times?
//! trawl count port config.json
//!
//! # Every value bound to it, optionally beneath chosen parents
//! trawl find port config.json
//! trawl find port -p admin -p metrics config.json
//!
//! # Replace or delete every occurrence
//! trawl update port --value 9090 config.json --allow-duplicates
//! trawl remove debug config.json
//!
//! # Strip nulls and empty values
//! trawl compact config.json
//! ```
//!
//! ## Subcommands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `contains` | Print `true`/`false` (or `null` for a non-object document) |
//! | `count` | Print the number of occurrences |
//! | `find` | Print every value bound to the key as a JSON array |
//! | `update` | Print the document with the key's values replaced |
//! | `remove` | Print the document without the key |
//! | `compact` | Print the document without null/empty values |
//!
//! Log output goes to stderr and follows `RUST_LOG`, defaulting to
//! `trawl=info`.
//!
//! ## Library Usage
//!
//! For programmatic access use the library crates directly:
//!
//! - [`trawl`](https://docs.rs/trawl) - Umbrella crate
//! - [`trawl-ops`](https://docs.rs/trawl-ops) - The operations
//! - [`trawl-core`](https://docs.rs/trawl-core) - Tree model and errors

#![doc(html_root_url = "https://docs.rs/trawl-cli/0.1.0")]
#![warn(missing_docs)]

/// Re-export of trawl-ops for the operations.
pub use trawl_ops as ops;

/// Re-export of trawl-core for core types.
pub use trawl_core as core;
