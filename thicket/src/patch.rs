// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diff dispatcher: routes a previous/next pair to an in-place patch or a replacement.
//!
//! | previous → next                   | action                                   |
//! |-----------------------------------|------------------------------------------|
//! | text → text                       | update the value if it differs           |
//! | element → element, same tag       | patch props, reconcile children          |
//! | component → same component        | re-render, patch the rendered subtree    |
//! | anything else                     | replace (create-then-remove)             |
//!
//! Children are reconciled by shape. `Multiple → Multiple` goes through the
//! keyed reconciler; the other combinations mount, patch, or remove directly.

use alloc::boxed::Box;

use crate::desc::{Children, Description, Node};
use crate::error::RenderError;
use crate::host::Host;
use crate::mounted::{MountedBody, MountedChildren, MountedNode};
use crate::render::Reconciler;

type PatchResult<H> = Result<MountedNode<<H as Host>::Node>, RenderError<<H as Host>::Error>>;

impl<H: Host> Reconciler<'_, H> {
    /// Reconcile `next` against the host state produced by `previous`.
    pub(crate) fn patch(
        &mut self,
        previous: MountedNode<H::Node>,
        next: Description,
        parent: &H::Node,
    ) -> PatchResult<H> {
        let MountedNode {
            key: previous_key,
            handle,
            body,
        } = previous;
        let (key, node) = next.into_parts();

        match (body, node) {
            (MountedBody::Text(old), Node::Text(new)) => {
                if old != new {
                    self.host.set_text(&handle, &new)?;
                    self.stats.text += 1;
                }
                Ok(MountedNode {
                    key,
                    handle,
                    body: MountedBody::Text(new),
                })
            }
            (
                MountedBody::Element {
                    tag,
                    props: previous_props,
                    children: previous_children,
                },
                Node::Element {
                    tag: next_tag,
                    props,
                    children,
                },
            ) if tag == next_tag => {
                self.patch_props(&handle, &previous_props, &props)?;
                let children = self.patch_children(previous_children, children, &handle)?;
                Ok(MountedNode {
                    key,
                    handle,
                    body: MountedBody::Element {
                        tag,
                        props,
                        children,
                    },
                })
            }
            (
                MountedBody::Component {
                    component: previous_component,
                    rendered,
                    ..
                },
                Node::Component {
                    component,
                    props,
                    children,
                },
            ) if previous_component == component => {
                let output = component.render(&props, &children);
                let rendered = self.patch(*rendered, output, parent)?;
                Ok(MountedNode {
                    key,
                    handle: rendered.handle.clone(),
                    body: MountedBody::Component {
                        component,
                        props,
                        rendered: Box::new(rendered),
                    },
                })
            }
            (body, node) => {
                let previous = MountedNode {
                    key: previous_key,
                    handle,
                    body,
                };
                self.replace(previous, Description::from_parts(key, node), parent)
            }
        }
    }

    /// Mount `next` where `previous` is, then remove `previous`.
    fn replace(
        &mut self,
        previous: MountedNode<H::Node>,
        next: Description,
        parent: &H::Node,
    ) -> PatchResult<H> {
        tracing::trace!(from = ?previous.kind(), to = ?next.kind(), "replacing node");
        let mounted = self.mount(next, parent, Some(&previous.handle))?;
        self.remove(&previous, parent)?;
        Ok(mounted)
    }

    fn patch_children(
        &mut self,
        previous: MountedChildren<H::Node>,
        next: Children,
        parent: &H::Node,
    ) -> Result<MountedChildren<H::Node>, RenderError<H::Error>> {
        match (previous, next) {
            (_, Children::Multiple(list)) if list.is_empty() => Err(RenderError::EmptyChildren),
            (MountedChildren::None, next) => self.mount_children(next, parent),
            (MountedChildren::Single(old), Children::Single(new)) => Ok(MountedChildren::Single(
                Box::new(self.patch(*old, *new, parent)?),
            )),
            (MountedChildren::Multiple(old), Children::Multiple(new)) => Ok(
                MountedChildren::Multiple(self.reconcile_keyed(old, new, parent)?),
            ),
            (previous, next) => {
                for child in previous.as_slice() {
                    self.remove(child, parent)?;
                }
                self.mount_children(next, parent)
            }
        }
    }

    /// Detach `node`'s host subtree from `parent`.
    pub(crate) fn remove(
        &mut self,
        node: &MountedNode<H::Node>,
        parent: &H::Node,
    ) -> Result<(), RenderError<H::Error>> {
        self.host.remove_child(parent, &node.handle)?;
        self.stats.removed += 1;
        Ok(())
    }
}
