// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Keyed: keyed sibling matching for tree reconciliation.
//!
//! Thicket Keyed is the host-independent half of keyed child reconciliation.
//! Given the keys of a previous and a next sibling sequence it computes which
//! entries are kept, which are moved, which are new, and which are removed.
//!
//! - Matches entries by key through a single key → index lookup.
//! - Uses the longest strictly increasing subsequence of matched previous indices
//!   to decide which entries stay put, so the number of moves is minimal.
//! - Reports duplicate keys instead of silently picking one.
//!
//! It does not touch any tree. The `thicket` crate applies a [`Plan`] to a host tree.
//!
//! # Example
//!
//! ```rust
//! use thicket_keyed::{plan, Source};
//!
//! // Previous children [a, b, c]; next children [a, c] drop `b`.
//! let p = plan(&["a", "b", "c"], &["a", "c"]);
//! assert_eq!(p.removed(), &[1]);
//! assert_eq!(p.move_count(), 0);
//! assert_eq!(p.sources(), &[Source::Kept { prev: 0 }, Source::Kept { prev: 2 }]);
//!
//! // Previous [a, b]; next [a, c, b] inserts `c` between them.
//! let p = plan(&["a", "b"], &["a", "c", "b"]);
//! assert_eq!(p.sources()[1], Source::New);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod lis;
pub mod plan;

pub use lis::longest_increasing_subsequence;
pub use plan::{Duplicate, Plan, Side, Source, plan};
