// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node descriptions: immutable values describing what the tree should look like.
//!
//! ## Overview
//!
//! A [`Description`] describes one prospective node and, recursively, its
//! children. It is built fresh for every render pass and handed to
//! [`Renderer::render`](crate::render::Renderer::render), which consumes it.
//! Descriptions never carry host handles; the materialized counterpart is
//! [`MountedNode`](crate::mounted::MountedNode).
//!
//! ## Classification
//!
//! [`h`] classifies the node kind from the tag and the child shape from the
//! children, and never fails:
//!
//! - tag `&str`/`String` → [`Kind::Element`]; [`ComponentFn`] → [`Kind::ComponentFunction`];
//!   `Rc<impl ComponentClass>` → [`Kind::ComponentClass`].
//! - children `()`/`None`/empty `Vec` → [`ChildShape::None`]; a non-empty `Vec` →
//!   [`ChildShape::Multiple`]; a single [`Description`] → [`ChildShape::Single`];
//!   a scalar (string, number, `bool`, `char`) → [`ChildShape::Single`] holding a
//!   synthetic text description.
//!
//! ## Keys
//!
//! A [`Key`] identifies a node among its siblings across renders. Keys must be
//! unique per sibling list; they never affect ordering within one render.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::props::Props;

/// Sibling identity token.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// Integer key.
    Int(i64),
    /// String key.
    Str(String),
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl core::fmt::Display for Key {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// Node kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Host element with a tag.
    Element,
    /// Text leaf.
    Text,
    /// Function component.
    ComponentFunction,
    /// Class component.
    ComponentClass,
}

/// Shape of a node's children.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChildShape {
    /// No children.
    None,
    /// Exactly one child description.
    Single,
    /// An ordered, non-empty sequence of child descriptions.
    Multiple,
}

/// Children of a description.
///
/// The variants mirror [`ChildShape`]. `Multiple` must be non-empty; use the
/// `From` conversions (which normalize an empty `Vec` to `None`) unless you
/// need to construct the variants directly.
#[derive(Clone, Debug, Default)]
pub enum Children {
    /// No children.
    #[default]
    None,
    /// One child.
    Single(Box<Description>),
    /// Ordered sequence of children.
    Multiple(Vec<Description>),
}

impl Children {
    /// Shape of these children.
    pub fn shape(&self) -> ChildShape {
        match self {
            Self::None => ChildShape::None,
            Self::Single(_) => ChildShape::Single,
            Self::Multiple(_) => ChildShape::Multiple,
        }
    }

    /// Children as a slice, in order.
    pub fn as_slice(&self) -> &[Description] {
        match self {
            Self::None => &[],
            Self::Single(child) => core::slice::from_ref(&**child),
            Self::Multiple(list) => list,
        }
    }
}

impl From<()> for Children {
    fn from((): ()) -> Self {
        Self::None
    }
}

impl From<Description> for Children {
    fn from(child: Description) -> Self {
        Self::Single(Box::new(child))
    }
}

impl From<Vec<Description>> for Children {
    fn from(list: Vec<Description>) -> Self {
        if list.is_empty() {
            Self::None
        } else {
            Self::Multiple(list)
        }
    }
}

impl<const N: usize> From<[Description; N]> for Children {
    fn from(list: [Description; N]) -> Self {
        Vec::from(list).into()
    }
}

impl<T: Into<Children>> From<Option<T>> for Children {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

impl From<&str> for Children {
    fn from(value: &str) -> Self {
        text(value).into()
    }
}

macro_rules! scalar_children {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Children {
                fn from(value: $ty) -> Self {
                    text(value.to_string()).into()
                }
            }
        )*
    };
}

scalar_children!(
    String, char, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64,
);

/// Function component: renders a description from props and children.
#[derive(Clone)]
pub struct ComponentFn(Rc<dyn Fn(&Props, &Children) -> Description>);

impl ComponentFn {
    /// Wrap a render function.
    pub fn new(render: impl Fn(&Props, &Children) -> Description + 'static) -> Self {
        Self(Rc::new(render))
    }
}

impl core::fmt::Debug for ComponentFn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ComponentFn")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

/// Class component: a named, shareable renderer.
///
/// Instances are compared by identity (`Rc` pointer), so keep one `Rc` per
/// component and clone it into every description that uses it.
pub trait ComponentClass {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// Render a description from props and children.
    fn render(&self, props: &Props, children: &Children) -> Description;
}

/// Component reference carried by component descriptions.
#[derive(Clone)]
pub enum Component {
    /// Function component.
    Function(ComponentFn),
    /// Class component.
    Class(Rc<dyn ComponentClass>),
}

impl Component {
    /// Kind of descriptions built from this component.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Function(_) => Kind::ComponentFunction,
            Self::Class(_) => Kind::ComponentClass,
        }
    }

    pub(crate) fn render(&self, props: &Props, children: &Children) -> Description {
        match self {
            Self::Function(f) => (f.0)(props, children),
            Self::Class(c) => c.render(props, children),
        }
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Function(a), Self::Function(b)) => {
                core::ptr::addr_eq(Rc::as_ptr(&a.0), Rc::as_ptr(&b.0))
            }
            (Self::Class(a), Self::Class(b)) => core::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
            _ => false,
        }
    }
}

impl core::fmt::Debug for Component {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Function(func) => func.fmt(f),
            Self::Class(class) => f.debug_tuple("Class").field(&class.name()).finish(),
        }
    }
}

/// Tag argument of [`h`].
#[derive(Clone, Debug)]
pub enum Tag {
    /// Element tag name.
    Element(String),
    /// Component reference.
    Component(Component),
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Self::Element(value.into())
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        Self::Element(value)
    }
}

impl From<ComponentFn> for Tag {
    fn from(value: ComponentFn) -> Self {
        Self::Component(Component::Function(value))
    }
}

impl<C: ComponentClass + 'static> From<Rc<C>> for Tag {
    fn from(value: Rc<C>) -> Self {
        Self::Component(Component::Class(value))
    }
}

impl From<Component> for Tag {
    fn from(value: Component) -> Self {
        Self::Component(value)
    }
}

/// Body of a description.
#[derive(Clone, Debug)]
pub enum Node {
    /// Host element.
    Element {
        /// Tag name.
        tag: String,
        /// Attributes, style, and listeners.
        props: Props,
        /// Child descriptions.
        children: Children,
    },
    /// Text leaf.
    Text(String),
    /// Component invocation.
    Component {
        /// Component to render.
        component: Component,
        /// Props passed to the component.
        props: Props,
        /// Children passed to the component.
        children: Children,
    },
}

/// Immutable description of one prospective node and its subtree.
#[derive(Clone, Debug)]
pub struct Description {
    key: Option<Key>,
    node: Node,
}

impl Description {
    /// Build a description from a body, without a key.
    pub fn new(node: Node) -> Self {
        Self { key: None, node }
    }

    /// Attach a sibling key.
    pub fn with_key(mut self, key: impl Into<Key>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Kind of this node.
    pub fn kind(&self) -> Kind {
        match &self.node {
            Node::Element { .. } => Kind::Element,
            Node::Text(_) => Kind::Text,
            Node::Component { component, .. } => component.kind(),
        }
    }

    /// Sibling key, if any.
    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    /// Body of this node.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Element tag, for element descriptions.
    pub fn tag(&self) -> Option<&str> {
        match &self.node {
            Node::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Component reference, for component descriptions.
    pub fn component(&self) -> Option<&Component> {
        match &self.node {
            Node::Component { component, .. } => Some(component),
            _ => None,
        }
    }

    /// Literal text, for text descriptions.
    pub fn text(&self) -> Option<&str> {
        match &self.node {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Props; absent for text.
    pub fn props(&self) -> Option<&Props> {
        match &self.node {
            Node::Element { props, .. } | Node::Component { props, .. } => Some(props),
            Node::Text(_) => None,
        }
    }

    /// Children; absent for text.
    pub fn children(&self) -> Option<&Children> {
        match &self.node {
            Node::Element { children, .. } | Node::Component { children, .. } => Some(children),
            Node::Text(_) => None,
        }
    }

    /// Shape of the children.
    pub fn child_shape(&self) -> ChildShape {
        self.children().map_or(ChildShape::None, Children::shape)
    }

    pub(crate) fn into_parts(self) -> (Option<Key>, Node) {
        (self.key, self.node)
    }

    pub(crate) fn from_parts(key: Option<Key>, node: Node) -> Self {
        Self { key, node }
    }
}

/// Build an element or component description.
///
/// ```
/// use thicket::desc::{h, ChildShape, Description, Kind};
/// use thicket::props::Props;
///
/// let list = h("ul", Props::new(), vec![
///     h("li", Props::new(), "one").with_key("a"),
///     h("li", Props::new(), 2).with_key("b"),
/// ]);
/// assert_eq!(list.kind(), Kind::Element);
/// assert_eq!(list.child_shape(), ChildShape::Multiple);
///
/// let empty = h("div", Props::new(), Vec::<Description>::new());
/// assert_eq!(empty.child_shape(), ChildShape::None);
/// ```
pub fn h(tag: impl Into<Tag>, props: Props, children: impl Into<Children>) -> Description {
    let children = children.into();
    let node = match tag.into() {
        Tag::Element(tag) => Node::Element {
            tag,
            props,
            children,
        },
        Tag::Component(component) => Node::Component {
            component,
            props,
            children,
        },
    };
    Description::new(node)
}

/// Build a text description.
pub fn text(value: impl Into<String>) -> Description {
    Description::new(Node::Text(value.into()))
}
