// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render entry point: containers, their last rendered trees, and per-pass statistics.
//!
//! ## Overview
//!
//! A [`Renderer`] is an explicit table from container handles to the
//! [`MountedNode`] last rendered into them. [`Renderer::render`] mounts when a
//! container has no record and patches otherwise; either way the record is
//! replaced by the result.
//!
//! The record lives as long as the caller keeps it. When a container is
//! discarded by its owner, call [`Renderer::forget`]; to tear the rendered
//! subtree down through the host, call [`Renderer::unmount`].
//!
//! A failed pass drops the record: the container is then in a partially mutated
//! state that no record describes. The root that was attached before the pass
//! is kept as a stale handle; the next render (or [`Renderer::unmount`]) of the
//! container removes it, then mounts from scratch.

use alloc::vec::Vec;

use crate::desc::Description;
use crate::error::RenderError;
use crate::host::Host;
use crate::mounted::MountedNode;

/// Host calls issued by one pass, per category.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Nodes created.
    pub created: usize,
    /// Freshly created nodes attached to a parent.
    pub attached: usize,
    /// Existing nodes repositioned among their siblings.
    pub moved: usize,
    /// Subtrees removed from a parent.
    pub removed: usize,
    /// Attribute, style, and listener calls.
    pub props: usize,
    /// Text updates of existing text nodes.
    pub text: usize,
}

impl RenderStats {
    /// Total number of host calls.
    pub fn mutations(&self) -> usize {
        self.created + self.attached + self.moved + self.removed + self.props + self.text
    }

    /// True if the pass issued no host call.
    pub fn is_empty(&self) -> bool {
        self.mutations() == 0
    }
}

/// One reconciliation pass against a host.
pub(crate) struct Reconciler<'h, H: Host> {
    pub(crate) host: &'h mut H,
    pub(crate) stats: RenderStats,
}

impl<'h, H: Host> Reconciler<'h, H> {
    pub(crate) fn new(host: &'h mut H) -> Self {
        Self {
            host,
            stats: RenderStats::default(),
        }
    }
}

#[derive(Clone, Debug)]
struct Root<N> {
    container: N,
    mounted: MountedNode<N>,
}

/// Root left attached to `container` by a failed pass.
#[derive(Clone, Debug)]
struct Stale<N> {
    container: N,
    handle: N,
}

/// Remembers what was rendered into each container.
///
/// `N` is the host node handle type. Containers are compared with `PartialEq`.
#[derive(Clone, Debug)]
pub struct Renderer<N> {
    roots: Vec<Root<N>>,
    stale: Vec<Stale<N>>,
}

impl<N> Default for Renderer<N> {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            stale: Vec::new(),
        }
    }
}

impl<N: Clone + PartialEq + core::fmt::Debug> Renderer<N> {
    /// Create a renderer with no containers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `description` into `container`.
    ///
    /// Mounts the description when nothing was rendered into `container` yet;
    /// otherwise patches the previous tree into it. A root left behind by a
    /// failed pass is removed before mounting. Returns the host calls the pass
    /// issued.
    pub fn render<H: Host<Node = N>>(
        &mut self,
        host: &mut H,
        description: Description,
        container: &N,
    ) -> Result<RenderStats, RenderError<H::Error>> {
        let previous = self
            .roots
            .iter()
            .position(|root| root.container == *container)
            .map(|index| self.roots.swap_remove(index).mounted);
        let mode = if previous.is_some() { "patch" } else { "mount" };
        let attached = previous.as_ref().map(|root| root.handle.clone());

        let mut reconciler = Reconciler::new(host);
        let result = match previous {
            None => match self.sweep(&mut reconciler, container) {
                Ok(()) => reconciler.mount(description, container, None),
                Err(err) => Err(err),
            },
            Some(previous) => reconciler.patch(previous, description, container),
        };
        let stats = reconciler.stats;

        match result {
            Ok(mounted) => {
                tracing::debug!(?container, mode, ?stats, "rendered");
                self.roots.push(Root {
                    container: container.clone(),
                    mounted,
                });
                Ok(stats)
            }
            Err(err) => {
                tracing::error!(
                    ?container,
                    mode,
                    stale = ?attached,
                    %err,
                    "render failed; container record dropped"
                );
                if let Some(handle) = attached {
                    self.stale.push(Stale {
                        container: container.clone(),
                        handle,
                    });
                }
                Err(err)
            }
        }
    }

    /// Remove roots that failed passes left attached to `container`.
    fn sweep<H: Host<Node = N>>(
        &mut self,
        reconciler: &mut Reconciler<'_, H>,
        container: &N,
    ) -> Result<(), RenderError<H::Error>> {
        while let Some(index) = self
            .stale
            .iter()
            .position(|stale| stale.container == *container)
        {
            reconciler
                .host
                .remove_child(container, &self.stale[index].handle)?;
            reconciler.stats.removed += 1;
            let stale = self.stale.swap_remove(index);
            tracing::debug!(?container, handle = ?stale.handle, "removed stale root");
        }
        Ok(())
    }

    /// Tree last rendered into `container`.
    pub fn current(&self, container: &N) -> Option<&MountedNode<N>> {
        self.roots
            .iter()
            .find(|root| root.container == *container)
            .map(|root| &root.mounted)
    }

    /// Remove the tree rendered into `container` from the host and forget it.
    ///
    /// Also removes a root left behind by a failed pass. Does nothing when
    /// `container` has neither.
    pub fn unmount<H: Host<Node = N>>(
        &mut self,
        host: &mut H,
        container: &N,
    ) -> Result<RenderStats, RenderError<H::Error>> {
        let mut reconciler = Reconciler::new(host);
        self.sweep(&mut reconciler, container)?;
        let Some(mounted) = self.forget(container) else {
            return Ok(reconciler.stats);
        };
        reconciler.remove(&mounted, container)?;
        tracing::debug!(?container, "unmounted");
        Ok(reconciler.stats)
    }

    /// Drop the record of `container` without touching the host.
    pub fn forget(&mut self, container: &N) -> Option<MountedNode<N>> {
        self.stale.retain(|stale| stale.container != *container);
        let index = self
            .roots
            .iter()
            .position(|root| root.container == *container)?;
        Some(self.roots.swap_remove(index).mounted)
    }

    /// Containers with a record, in no particular order.
    pub fn containers(&self) -> impl Iterator<Item = &N> + '_ {
        self.roots.iter().map(|root| &root.container)
    }

    /// Number of containers with a record.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// True if no container has a record.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
