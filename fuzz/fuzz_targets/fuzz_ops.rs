#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! libFuzzer target for the deep tree operations
//!
//! Tests:
//! - count/find/contains agree with each other
//! - remove leaves no reachable occurrence
//! - compact is idempotent
//! - No panics on deep or malformed input

use libfuzzer_sys::fuzz_target;
use trawl_core::{Key, Limits, Node, TrawlError};
use trawl_ops::{RemoveOptions, UpdateOptions, compact_with, contains, count, find, remove, update};

const KEYS: [&str; 4] = ["a", "b", "id", ""];

fuzz_target!(|data: &[u8]| {
    if data.len() > 50_000 || data.len() < 2 {
        return;
    }

    let key = Key::string(KEYS[usize::from(data[0]) % KEYS.len()]);

    let Ok(text) = std::str::from_utf8(&data[1..]) else {
        return;
    };
    let Ok(value) = serde_json::from_str::<serde_json::Value>(text) else {
        return;
    };
    let tree = Node::from(value);

    let n = count(&tree, &key);
    let found = find(&tree, &key, None);
    match contains(&tree, &key) {
        None => {
            assert!(!tree.is_mapping());
            assert_eq!(n, 0);
            assert!(found.is_none());
        }
        Some(false) => {
            assert_eq!(n, 0);
            assert!(found.is_none());
        }
        Some(true) => {
            let found = found.expect("contained key has values");
            assert!(!found.is_empty() && found.len() <= n);
        }
    }

    let limits = Limits::default();
    let removed = remove(&tree, &key, &RemoveOptions::new().allow_duplicates());
    match removed {
        Ok(removed) => assert_eq!(count(&removed, &key), 0),
        Err(TrawlError::DepthLimitExceeded { .. }) => {}
        Err(e) => panic!("unexpected remove error: {e}"),
    }

    if n == 1 {
        if let Ok(updated) = update(&tree, &key, Node::null(), &UpdateOptions::new()) {
            assert_eq!(find(&updated, &key, None), Some(vec![Node::null()]));
        }
    }

    if let Ok(once) = compact_with(&tree, &limits) {
        assert_eq!(compact_with(&once, &limits), Ok(once));
    }
});
