// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability set the reconciler needs from a host tree.
//!
//! ## Overview
//!
//! Implement [`Host`] for whatever tree you render into (a browser DOM binding,
//! a retained widget tree, a terminal scene). The reconciler only ever calls
//! these methods, synchronously and in the order they must take effect.
//!
//! Every method is fallible. A failure is fatal for the render pass: it is
//! returned to the caller of [`Renderer::render`](crate::render::Renderer::render)
//! as [`RenderError::Host`](crate::error::RenderError::Host) and nothing is rolled back.
//!
//! ## Structure semantics
//!
//! - `insert_before` and `append_child` are called both for freshly created nodes
//!   and for nodes that are already attached under the same parent; in the latter
//!   case the host must move the node (DOM semantics).
//! - After `remove_child` the reconciler never uses the removed handle, or any
//!   handle in its subtree, again.

use crate::props::Handler;

/// Host tree operations used by the reconciler.
pub trait Host {
    /// Handle of a host node.
    type Node: Clone + PartialEq + core::fmt::Debug;
    /// Failure reported by the host.
    type Error: core::error::Error + 'static;

    /// Create a detached element node.
    fn create_element(&mut self, tag: &str) -> Result<Self::Node, Self::Error>;

    /// Create a detached text node.
    fn create_text(&mut self, text: &str) -> Result<Self::Node, Self::Error>;

    /// Set a generic attribute.
    fn set_attribute(
        &mut self,
        node: &Self::Node,
        name: &str,
        value: &str,
    ) -> Result<(), Self::Error>;

    /// Remove a generic attribute.
    fn remove_attribute(&mut self, node: &Self::Node, name: &str) -> Result<(), Self::Error>;

    /// Set one style sub-property.
    fn set_style(&mut self, node: &Self::Node, name: &str, value: &str) -> Result<(), Self::Error>;

    /// Clear one style sub-property.
    fn clear_style(&mut self, node: &Self::Node, name: &str) -> Result<(), Self::Error>;

    /// Bind `handler` to `event`.
    fn add_event_listener(
        &mut self,
        node: &Self::Node,
        event: &str,
        handler: &Handler,
    ) -> Result<(), Self::Error>;

    /// Unbind a handler previously bound with [`Host::add_event_listener`].
    fn remove_event_listener(
        &mut self,
        node: &Self::Node,
        event: &str,
        handler: &Handler,
    ) -> Result<(), Self::Error>;

    /// Replace the content of a text node.
    fn set_text(&mut self, node: &Self::Node, text: &str) -> Result<(), Self::Error>;

    /// Attach `node` as the last child of `parent`.
    fn append_child(&mut self, parent: &Self::Node, node: &Self::Node) -> Result<(), Self::Error>;

    /// Attach `node` under `parent` before `reference`, or last when `reference` is `None`.
    fn insert_before(
        &mut self,
        parent: &Self::Node,
        node: &Self::Node,
        reference: Option<&Self::Node>,
    ) -> Result<(), Self::Error>;

    /// Detach `node` (and its subtree) from `parent`.
    fn remove_child(&mut self, parent: &Self::Node, node: &Self::Node) -> Result<(), Self::Error>;
}
