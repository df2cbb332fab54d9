// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed children reconciler: applies a [`thicket_keyed::Plan`] to a host parent.
//!
//! ## Algorithm
//!
//! 1. Key every sibling. Children without a key get an implicit positional key,
//!    so unkeyed siblings match by index and never match keyed ones.
//! 2. Plan with [`thicket_keyed::plan`]: every next entry is new, kept (part of
//!    the longest increasing run of matched previous indices), or moved.
//! 3. Patch matched pairs in next order.
//! 4. Place entries right to left. Each moved or new entry is inserted before
//!    the host handle of its right neighbour, which is already final, or
//!    appended when it is last. Kept entries are never touched.
//! 5. Remove previous entries with no counterpart.
//!
//! Moves issued equal matched pairs minus the length of the kept run.

use alloc::vec::Vec;

use thicket_keyed::{Side, Source};

use crate::desc::{Description, Key};
use crate::error::RenderError;
use crate::host::Host;
use crate::mounted::MountedNode;
use crate::render::Reconciler;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SlotKey<'a> {
    Keyed(&'a Key),
    Position(usize),
}

fn slot_keys<'a>(keys: impl Iterator<Item = Option<&'a Key>>) -> Vec<SlotKey<'a>> {
    keys.enumerate()
        .map(|(index, key)| key.map_or(SlotKey::Position(index), SlotKey::Keyed))
        .collect()
}

enum Placement<N> {
    Stay(MountedNode<N>),
    Move(MountedNode<N>),
    Insert(Description),
}

impl<H: Host> Reconciler<'_, H> {
    /// Reconcile the children of `parent` from `previous` to `next`.
    pub(crate) fn reconcile_keyed(
        &mut self,
        previous: Vec<MountedNode<H::Node>>,
        next: Vec<Description>,
        parent: &H::Node,
    ) -> Result<Vec<MountedNode<H::Node>>, RenderError<H::Error>> {
        if previous.is_empty() {
            return self.mount_all(next, parent);
        }
        if next.is_empty() {
            for child in &previous {
                self.remove(child, parent)?;
            }
            return Ok(Vec::new());
        }

        let plan = {
            let previous_keys = slot_keys(previous.iter().map(MountedNode::key));
            let next_keys = slot_keys(next.iter().map(Description::key));
            let plan = thicket_keyed::plan(&previous_keys, &next_keys);
            for duplicate in plan.duplicates() {
                let keys = match duplicate.side {
                    Side::Previous => &previous_keys,
                    Side::Next => &next_keys,
                };
                tracing::warn!(
                    key = ?keys.get(duplicate.index),
                    side = ?duplicate.side,
                    index = duplicate.index,
                    first = duplicate.first,
                    "duplicate sibling key; first occurrence wins"
                );
            }
            plan
        };
        tracing::trace!(
            previous = previous.len(),
            next = next.len(),
            matched = plan.matched().count(),
            moved = plan.move_count(),
            inserted = plan.insert_count(),
            removed = plan.removed().len(),
            "keyed plan"
        );

        let mut slots: Vec<Option<MountedNode<H::Node>>> = previous.into_iter().map(Some).collect();
        let mut placements = Vec::with_capacity(next.len());
        for (description, source) in next.into_iter().zip(plan.sources()) {
            let matched = source
                .prev()
                .and_then(|prev| slots.get_mut(prev).and_then(Option::take));
            placements.push(match (matched, source) {
                (None, _) => Placement::Insert(description),
                (Some(previous), Source::Moved { .. }) => {
                    Placement::Move(self.patch(previous, description, parent)?)
                }
                (Some(previous), _) => Placement::Stay(self.patch(previous, description, parent)?),
            });
        }

        let mut placed = Vec::with_capacity(placements.len());
        let mut anchor: Option<H::Node> = None;
        for placement in placements.into_iter().rev() {
            let node = match placement {
                Placement::Stay(node) => node,
                Placement::Move(node) => {
                    self.place(parent, &node.handle, anchor.as_ref())?;
                    self.stats.moved += 1;
                    node
                }
                Placement::Insert(description) => self.mount(description, parent, anchor.as_ref())?,
            };
            anchor = Some(node.handle.clone());
            placed.push(node);
        }
        placed.reverse();

        for &index in plan.removed() {
            if let Some(stale) = slots.get_mut(index).and_then(Option::take) {
                self.remove(&stale, parent)?;
            }
        }
        Ok(placed)
    }
}
