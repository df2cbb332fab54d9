// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Materialized nodes: descriptions paired with the host handles they produced.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::desc::{ChildShape, Component, Key, Kind};
use crate::props::Props;

/// A description that has been materialized into a host tree.
///
/// Produced by mounting or patching; owned by the [`Renderer`](crate::render::Renderer)
/// until the next pass consumes it. `N` is the host node handle type.
#[derive(Clone, Debug)]
pub struct MountedNode<N> {
    pub(crate) key: Option<Key>,
    pub(crate) handle: N,
    pub(crate) body: MountedBody<N>,
}

#[derive(Clone, Debug)]
pub(crate) enum MountedBody<N> {
    Element {
        tag: String,
        props: Props,
        children: MountedChildren<N>,
    },
    Text(String),
    Component {
        component: Component,
        props: Props,
        rendered: Box<MountedNode<N>>,
    },
}

#[derive(Clone, Debug)]
pub(crate) enum MountedChildren<N> {
    None,
    Single(Box<MountedNode<N>>),
    Multiple(Vec<MountedNode<N>>),
}

impl<N> MountedChildren<N> {
    pub(crate) fn as_slice(&self) -> &[MountedNode<N>] {
        match self {
            Self::None => &[],
            Self::Single(child) => core::slice::from_ref(&**child),
            Self::Multiple(list) => list,
        }
    }

    pub(crate) fn shape(&self) -> ChildShape {
        match self {
            Self::None => ChildShape::None,
            Self::Single(_) => ChildShape::Single,
            Self::Multiple(_) => ChildShape::Multiple,
        }
    }
}

impl<N> MountedNode<N> {
    /// Host handle of this node. For components, the handle of the rendered root.
    pub fn handle(&self) -> &N {
        &self.handle
    }

    /// Sibling key the node was described with.
    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    /// Kind of the description this node was materialized from.
    pub fn kind(&self) -> Kind {
        match &self.body {
            MountedBody::Element { .. } => Kind::Element,
            MountedBody::Text(_) => Kind::Text,
            MountedBody::Component { component, .. } => component.kind(),
        }
    }

    /// Element tag.
    pub fn tag(&self) -> Option<&str> {
        match &self.body {
            MountedBody::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Text value.
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            MountedBody::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Props currently applied (elements) or passed (components).
    pub fn props(&self) -> Option<&Props> {
        match &self.body {
            MountedBody::Element { props, .. } | MountedBody::Component { props, .. } => {
                Some(props)
            }
            MountedBody::Text(_) => None,
        }
    }

    /// Mounted children of an element, in host order.
    ///
    /// Empty for text and component nodes; see [`MountedNode::rendered`].
    pub fn children(&self) -> &[Self] {
        match &self.body {
            MountedBody::Element { children, .. } => children.as_slice(),
            _ => &[],
        }
    }

    /// Shape of the mounted children of an element.
    pub fn child_shape(&self) -> ChildShape {
        match &self.body {
            MountedBody::Element { children, .. } => children.shape(),
            _ => ChildShape::None,
        }
    }

    /// Component reference.
    pub fn component(&self) -> Option<&Component> {
        match &self.body {
            MountedBody::Component { component, .. } => Some(component),
            _ => None,
        }
    }

    /// Subtree a component rendered to.
    pub fn rendered(&self) -> Option<&Self> {
        match &self.body {
            MountedBody::Component { rendered, .. } => Some(rendered),
            _ => None,
        }
    }
}
