// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Host Tree: an in-memory, DOM-like retained tree.
//!
//! Thicket Host Tree is a reference host for the `thicket` reconciler, and a
//! reusable building block for tests, headless rendering, and tooling.
//!
//! - Element nodes carry a tag, attributes, style sub-properties, and event listeners.
//! - Text nodes carry a string.
//! - Nodes are addressed by generational [`NodeId`]s; removed ids become stale and never
//!   alias new nodes.
//! - Mutations are recorded as per-node [`Dirty`] flags and collected by [`HostTree::commit`].
//!
//! ## Structure semantics
//!
//! Structural operations follow the DOM:
//! - [`HostTree::insert_before`] and [`HostTree::append_child`] move a node that is
//!   already attached.
//! - [`HostTree::remove_child`] detaches a node; unlike the DOM it also frees the subtree,
//!   because the reconciler never re-attaches removed nodes.
//!
//! Failing calls return a [`HostError`] and leave the tree unchanged.
//!
//! ## API overview
//!
//! - [`HostTree`]: the container; `L` is the listener payload type.
//! - [`NodeId`]: generational handle of a node.
//! - [`Dirty`] and [`Damage`]: change accounting between commits.
//! - [`HostTree::to_markup`]: deterministic serialization for snapshots.
//!
//! # Example
//!
//! ```rust
//! use thicket_host_tree::{Dirty, HostTree};
//!
//! let mut tree: HostTree<()> = HostTree::new();
//! let list = tree.create_element("ul");
//! let a = tree.create_element("li");
//! let b = tree.create_element("li");
//! tree.append_child(list, a).unwrap();
//! tree.append_child(list, b).unwrap();
//! let _ = tree.commit();
//!
//! // Move `b` in front of `a`.
//! tree.insert_before(list, b, Some(a)).unwrap();
//! assert_eq!(tree.children(list), &[b, a]);
//!
//! let damage = tree.commit();
//! assert_eq!(damage.count(Dirty::MOVED), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod damage;
mod error;
mod markup;
mod tree;
mod types;

pub use damage::Damage;
pub use error::HostError;
pub use tree::HostTree;
pub use types::{Dirty, NodeId, NodeKind};
