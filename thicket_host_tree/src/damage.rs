// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batched change summary returned by [`HostTree::commit`](crate::HostTree::commit).

use alloc::vec::Vec;

use crate::types::{Dirty, NodeId};

/// Changes recorded since the previous commit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Damage {
    /// Live nodes that changed, with what changed, in slot order.
    pub changed: Vec<(NodeId, Dirty)>,
    /// Number of nodes freed (including descendants of removed subtrees).
    pub removed: usize,
}

impl Damage {
    /// True if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.removed == 0
    }

    /// Union of all recorded flags.
    pub fn flags(&self) -> Dirty {
        self.changed
            .iter()
            .fold(Dirty::empty(), |acc, (_, d)| acc | *d)
    }

    /// Number of changed nodes carrying any of `flags`.
    pub fn count(&self, flags: Dirty) -> usize {
        self.changed.iter().filter(|(_, d)| d.intersects(flags)).count()
    }
}
