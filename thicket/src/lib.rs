// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket: declarative tree reconciliation against a pluggable host.
//!
//! ## Overview
//!
//! Describe what a tree should look like with [`h`] and [`text`], then hand the
//! [`Description`] to a [`Renderer`]. The first render into a container mounts
//! the description; later renders compute and apply the minimal set of host
//! mutations between the previous tree and the new description.
//!
//! The host tree is abstract: implement [`Host`] for your own tree, or enable
//! `host_tree_adapter` to render into the in-memory `thicket_host_tree`.
//!
//! ## Reconciliation
//!
//! - Nodes of different kinds, or elements with different tags, are replaced:
//!   the new node is mounted where the old one was, then the old one is removed.
//! - Elements with the same tag keep their host node. Attributes, style
//!   sub-properties, and listeners are patched individually (see [`props`]).
//! - Text nodes keep their host node and are updated only when the value changed.
//! - Component descriptions are rendered through; a component's host node is the
//!   one of its rendered root.
//! - Sibling lists are matched by [`Key`]. Matched nodes keep their host node and
//!   the fewest possible nodes are moved (see `thicket_keyed`). Unkeyed
//!   children match by position.
//!
//! Rendering the same description twice issues no host calls.
//!
//! ## Errors and diagnostics
//!
//! Host failures abort the pass and are returned as [`RenderError::Host`]; nothing
//! is rolled back. Duplicate sibling keys are logged through `tracing` and resolved
//! first-match-wins.
//!
//! ## Host sketch
//!
//! ```rust
//! use core::convert::Infallible;
//! use thicket::{h, text, Handler, Host, Props, Renderer};
//!
//! /// A host that only counts nodes.
//! #[derive(Default)]
//! struct Counter {
//!     next: u32,
//! }
//!
//! impl Host for Counter {
//!     type Node = u32;
//!     type Error = Infallible;
//!
//!     fn create_element(&mut self, _tag: &str) -> Result<u32, Infallible> {
//!         self.next += 1;
//!         Ok(self.next)
//!     }
//!     fn create_text(&mut self, _text: &str) -> Result<u32, Infallible> {
//!         self.next += 1;
//!         Ok(self.next)
//!     }
//!     fn set_attribute(&mut self, _: &u32, _: &str, _: &str) -> Result<(), Infallible> { Ok(()) }
//!     fn remove_attribute(&mut self, _: &u32, _: &str) -> Result<(), Infallible> { Ok(()) }
//!     fn set_style(&mut self, _: &u32, _: &str, _: &str) -> Result<(), Infallible> { Ok(()) }
//!     fn clear_style(&mut self, _: &u32, _: &str) -> Result<(), Infallible> { Ok(()) }
//!     fn add_event_listener(&mut self, _: &u32, _: &str, _: &Handler) -> Result<(), Infallible> {
//!         Ok(())
//!     }
//!     fn remove_event_listener(
//!         &mut self,
//!         _: &u32,
//!         _: &str,
//!         _: &Handler,
//!     ) -> Result<(), Infallible> {
//!         Ok(())
//!     }
//!     fn set_text(&mut self, _: &u32, _: &str) -> Result<(), Infallible> { Ok(()) }
//!     fn append_child(&mut self, _: &u32, _: &u32) -> Result<(), Infallible> { Ok(()) }
//!     fn insert_before(&mut self, _: &u32, _: &u32, _: Option<&u32>) -> Result<(), Infallible> {
//!         Ok(())
//!     }
//!     fn remove_child(&mut self, _: &u32, _: &u32) -> Result<(), Infallible> { Ok(()) }
//! }
//!
//! let mut host = Counter::default();
//! let mut renderer = Renderer::new();
//! let container = 0;
//!
//! let view = |items: &[&str]| {
//!     let items: Vec<_> = items
//!         .iter()
//!         .map(|k| h("li", Props::new(), text(*k)).with_key(*k))
//!         .collect();
//!     h("ul", Props::new().attr("class", "todo"), items)
//! };
//!
//! let stats = renderer.render(&mut host, view(&["a", "b", "c"]), &container).unwrap();
//! assert_eq!(stats.created, 7);
//!
//! // Rotate: one move, nothing created or removed.
//! let stats = renderer.render(&mut host, view(&["c", "a", "b"]), &container).unwrap();
//! assert_eq!((stats.moved, stats.created, stats.removed), (1, 0, 0));
//!
//! // Same again: no host calls at all.
//! assert!(renderer.render(&mut host, view(&["c", "a", "b"]), &container).unwrap().is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod desc;
pub mod error;
pub mod host;
pub mod mounted;
pub mod props;
pub mod render;

mod keyed;
mod mount;
mod patch;

#[cfg(test)]
mod testing;

pub use desc::{
    ChildShape, Children, Component, ComponentClass, ComponentFn, Description, Key, Kind, Node,
    Tag, h, text,
};
pub use error::RenderError;
pub use host::Host;
pub use mounted::MountedNode;
pub use props::{EVENT_PREFIX, Handler, PropValue, Props, STYLE_KEY};
pub use render::{RenderStats, Renderer};
