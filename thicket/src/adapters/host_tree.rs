// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Host`] implementation for Thicket Host Tree.
//!
//! ## Feature
//!
//! Enable with `host_tree_adapter`.
//!
//! ## Notes
//!
//! The tree stores [`Handler`]s as its listener payload, so a rendered tree can
//! be driven with [`dispatch`]. Every host call maps to exactly one tree call;
//! changes show up in [`HostTree::commit`] like any other mutation.

use thicket_host_tree::{HostError, HostTree, NodeId};

use crate::host::Host;
use crate::props::Handler;

impl Host for HostTree<Handler> {
    type Node = NodeId;
    type Error = HostError;

    fn create_element(&mut self, tag: &str) -> Result<NodeId, HostError> {
        Ok(Self::create_element(self, tag))
    }

    fn create_text(&mut self, text: &str) -> Result<NodeId, HostError> {
        Ok(Self::create_text(self, text))
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<(), HostError> {
        Self::set_attribute(self, *node, name, value)
    }

    fn remove_attribute(&mut self, node: &NodeId, name: &str) -> Result<(), HostError> {
        Self::remove_attribute(self, *node, name)
    }

    fn set_style(&mut self, node: &NodeId, name: &str, value: &str) -> Result<(), HostError> {
        Self::set_style(self, *node, name, value)
    }

    fn clear_style(&mut self, node: &NodeId, name: &str) -> Result<(), HostError> {
        Self::clear_style(self, *node, name)
    }

    fn add_event_listener(
        &mut self,
        node: &NodeId,
        event: &str,
        handler: &Handler,
    ) -> Result<(), HostError> {
        self.add_listener(*node, event, handler.clone())
    }

    fn remove_event_listener(
        &mut self,
        node: &NodeId,
        event: &str,
        handler: &Handler,
    ) -> Result<(), HostError> {
        self.remove_listener(*node, event, handler)
    }

    fn set_text(&mut self, node: &NodeId, text: &str) -> Result<(), HostError> {
        Self::set_text(self, *node, text)
    }

    fn append_child(&mut self, parent: &NodeId, node: &NodeId) -> Result<(), HostError> {
        Self::append_child(self, *parent, *node)
    }

    fn insert_before(
        &mut self,
        parent: &NodeId,
        node: &NodeId,
        reference: Option<&NodeId>,
    ) -> Result<(), HostError> {
        Self::insert_before(self, *parent, *node, reference.copied())
    }

    fn remove_child(&mut self, parent: &NodeId, node: &NodeId) -> Result<(), HostError> {
        Self::remove_child(self, *parent, *node)
    }
}

/// Invoke every handler bound to `event` on `node`, in binding order.
///
/// Returns the number of handlers called. Stale nodes and text nodes have none.
pub fn dispatch(tree: &HostTree<Handler>, node: NodeId, event: &str) -> usize {
    let handlers = tree.listeners(node, event).to_vec();
    for handler in &handlers {
        handler.call();
    }
    handlers.len()
}
