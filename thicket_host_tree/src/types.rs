// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the host tree: node identifiers and dirty flags.

/// Identifier for a node in the tree.
///
/// This is a small, copyable handle that stays stable while the node is alive
/// and becomes invalid once the node is removed.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On creation, a fresh slot is allocated with generation `1`.
/// - On removal, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// Use [`HostTree::is_alive`](crate::HostTree::is_alive) to check whether a `NodeId`
/// still refers to a live node. Stale ids never alias a different live node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Slot index, useful for debugging output.
    pub const fn slot(self) -> u32 {
        self.0
    }

    /// Generation of the slot this id was issued for.
    pub const fn generation(self) -> u32 {
        self.1
    }
}

bitflags::bitflags! {
    /// Per-node changes recorded since the last [`HostTree::commit`](crate::HostTree::commit).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Dirty: u8 {
        /// Node was created.
        const CREATED    = 0b0000_0001;
        /// An attribute was set or removed.
        const ATTRIBUTES = 0b0000_0010;
        /// A style sub-property was set or cleared.
        const STYLE      = 0b0000_0100;
        /// A listener was added or removed.
        const LISTENERS  = 0b0000_1000;
        /// Text content changed.
        const TEXT       = 0b0001_0000;
        /// A child was attached to or detached from this node.
        const CHILDREN   = 0b0010_0000;
        /// Node was repositioned among its siblings.
        const MOVED      = 0b0100_0000;
    }
}

/// What kind of node a [`NodeId`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Element node with a tag, attributes, style, listeners, and children.
    Element,
    /// Text leaf.
    Text,
}
