// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by host tree mutations.

use crate::types::NodeId;

/// Failure of a [`HostTree`](crate::HostTree) mutation.
///
/// A failed call leaves the tree unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The id does not refer to a live node.
    #[error("node {0:?} is not alive")]
    StaleNode(NodeId),
    /// The operation needs an element, but the node is a text leaf.
    #[error("node {0:?} is a text node, not an element")]
    NotAnElement(NodeId),
    /// The operation needs a text leaf, but the node is an element.
    #[error("node {0:?} is an element, not a text node")]
    NotText(NodeId),
    /// `child` is not a child of `parent`.
    #[error("node {child:?} is not a child of {parent:?}")]
    NotAChild {
        /// Expected parent.
        parent: NodeId,
        /// Node that was expected under `parent`.
        child: NodeId,
    },
    /// Attaching `child` under `parent` would make a node its own ancestor.
    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    Cycle {
        /// Requested parent.
        parent: NodeId,
        /// Node being attached.
        child: NodeId,
    },
}
