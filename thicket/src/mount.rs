// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mount engine: materializes descriptions into fresh host subtrees.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::desc::{Children, Description, Node};
use crate::error::RenderError;
use crate::host::Host;
use crate::mounted::{MountedBody, MountedChildren, MountedNode};
use crate::props::Props;
use crate::render::Reconciler;

type MountResult<H> = Result<MountedNode<<H as Host>::Node>, RenderError<<H as Host>::Error>>;

impl<H: Host> Reconciler<'_, H> {
    /// Materialize `description` and attach it under `parent`, before `before`
    /// or last.
    ///
    /// The subtree is built detached and attached with a single host call.
    pub(crate) fn mount(
        &mut self,
        description: Description,
        parent: &H::Node,
        before: Option<&H::Node>,
    ) -> MountResult<H> {
        let mounted = self.materialize(description)?;
        self.attach(parent, &mounted.handle, before)?;
        Ok(mounted)
    }

    fn materialize(&mut self, description: Description) -> MountResult<H> {
        let (key, node) = description.into_parts();
        match node {
            Node::Text(text) => {
                let handle = self.host.create_text(&text)?;
                self.stats.created += 1;
                Ok(MountedNode {
                    key,
                    handle,
                    body: MountedBody::Text(text),
                })
            }
            Node::Element {
                tag,
                props,
                children,
            } => {
                let handle = self.host.create_element(&tag)?;
                self.stats.created += 1;
                self.patch_props(&handle, &Props::new(), &props)?;
                let children = self.mount_children(children, &handle)?;
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
            Node::Component {
                component,
                props,
                children,
            } => {
                let rendered = self.materialize(component.render(&props, &children))?;
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
        }
    }

    /// Mount `children` in order, appending each to `parent`.
    pub(crate) fn mount_children(
        &mut self,
        children: Children,
        parent: &H::Node,
    ) -> Result<MountedChildren<H::Node>, RenderError<H::Error>> {
        match children {
            Children::None => Ok(MountedChildren::None),
            Children::Single(child) => Ok(MountedChildren::Single(Box::new(
                self.mount(*child, parent, None)?,
            ))),
            Children::Multiple(list) if list.is_empty() => Err(RenderError::EmptyChildren),
            Children::Multiple(list) => {
                Ok(MountedChildren::Multiple(self.mount_all(list, parent)?))
            }
        }
    }

    pub(crate) fn mount_all(
        &mut self,
        list: Vec<Description>,
        parent: &H::Node,
    ) -> Result<Vec<MountedNode<H::Node>>, RenderError<H::Error>> {
        list.into_iter()
            .map(|child| self.mount(child, parent, None))
            .collect()
    }

    /// Attach a freshly created node.
    fn attach(
        &mut self,
        parent: &H::Node,
        node: &H::Node,
        before: Option<&H::Node>,
    ) -> Result<(), RenderError<H::Error>> {
        self.place(parent, node, before)?;
        self.stats.attached += 1;
        Ok(())
    }

    /// Position `node` under `parent`, before `before` or last.
    pub(crate) fn place(
        &mut self,
        parent: &H::Node,
        node: &H::Node,
        before: Option<&H::Node>,
    ) -> Result<(), H::Error> {
        match before {
            Some(reference) => self.host.insert_before(parent, node, Some(reference)),
            None => self.host.append_child(parent, node),
        }
    }
}
