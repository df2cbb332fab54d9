// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording host used by unit tests.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::host::Host;
use crate::props::Handler;

/// One host call, with node ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    CreateElement(usize, String),
    CreateText(usize, String),
    SetAttribute(usize, String, String),
    RemoveAttribute(usize, String),
    SetStyle(usize, String, String),
    ClearStyle(usize, String),
    AddListener(usize, String),
    RemoveListener(usize, String),
    SetText(usize, String),
    /// `(parent, child)`.
    Append(usize, usize),
    /// `(parent, child, reference)`.
    InsertBefore(usize, usize, Option<usize>),
    /// `(parent, child)`.
    Remove(usize, usize),
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum RecorderError {
    #[error("creating `{0}` elements is refused")]
    Refused(String),
    #[error("node {0} was removed")]
    Removed(usize),
    #[error("node {child} is not a child of {parent}")]
    NotAChild { parent: usize, child: usize },
}

#[derive(Default)]
struct Node {
    tag: Option<String>,
    text: String,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    listeners: Vec<(String, Handler)>,
    children: Vec<usize>,
    parent: Option<usize>,
    removed: bool,
}

/// A DOM-like host that logs every call.
///
/// Removed nodes are poisoned: any later call on them fails, so tests catch
/// use of stale handles.
#[derive(Default)]
pub(crate) struct Recorder {
    nodes: Vec<Node>,
    ops: Vec<Op>,
    refused: Option<String>,
}

impl Recorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Create an element without logging it, e.g. a container.
    pub(crate) fn create_detached(&mut self, tag: &str) -> usize {
        self.nodes.push(Node {
            tag: Some(tag.into()),
            ..Node::default()
        });
        self.nodes.len() - 1
    }

    /// Make `create_element(tag)` fail from now on.
    pub(crate) fn refuse(&mut self, tag: &str) {
        self.refused = Some(tag.into());
    }

    pub(crate) fn allow_all(&mut self) {
        self.refused = None;
    }

    pub(crate) fn take_ops(&mut self) -> Vec<Op> {
        core::mem::take(&mut self.ops)
    }

    pub(crate) fn attribute(&self, id: usize, name: &str) -> Option<&str> {
        self.nodes[id].attributes.get(name).map(String::as_str)
    }

    pub(crate) fn listeners(&self, id: usize, event: &str) -> Vec<Handler> {
        self.nodes[id]
            .listeners
            .iter()
            .filter(|(e, _)| e == event)
            .map(|(_, h)| h.clone())
            .collect()
    }

    pub(crate) fn children(&self, id: usize) -> &[usize] {
        &self.nodes[id].children
    }

    /// Serialize the subtree at `id`: tags, attributes, style, and text.
    pub(crate) fn markup(&self, id: usize) -> String {
        let mut out = String::new();
        self.write_markup(id, &mut out);
        out
    }

    fn write_markup(&self, id: usize, out: &mut String) {
        let node = &self.nodes[id];
        let Some(tag) = &node.tag else {
            out.push_str(&node.text);
            return;
        };
        let _ = write!(out, "<{tag}");
        for (name, value) in &node.attributes {
            let _ = write!(out, " {name}=\"{value}\"");
        }
        if !node.style.is_empty() {
            out.push_str(" style=\"");
            for (name, value) in &node.style {
                let _ = write!(out, "{name}: {value};");
            }
            out.push('"');
        }
        out.push('>');
        for &child in &node.children {
            self.write_markup(child, out);
        }
        let _ = write!(out, "</{tag}>");
    }

    fn live(&mut self, id: usize) -> Result<&mut Node, RecorderError> {
        match self.nodes.get_mut(id) {
            Some(node) if !node.removed => Ok(node),
            _ => Err(RecorderError::Removed(id)),
        }
    }

    fn detach(&mut self, child: usize) {
        if let Some(parent) = self.nodes[child].parent.take() {
            self.nodes[parent].children.retain(|&c| c != child);
        }
    }

    fn poison(&mut self, id: usize) {
        self.nodes[id].removed = true;
        for child in self.nodes[id].children.clone() {
            self.poison(child);
        }
    }
}

impl Host for Recorder {
    type Node = usize;
    type Error = RecorderError;

    fn create_element(&mut self, tag: &str) -> Result<usize, RecorderError> {
        if self.refused.as_deref() == Some(tag) {
            return Err(RecorderError::Refused(tag.into()));
        }
        let id = self.create_detached(tag);
        self.ops.push(Op::CreateElement(id, tag.into()));
        Ok(id)
    }

    fn create_text(&mut self, text: &str) -> Result<usize, RecorderError> {
        self.nodes.push(Node {
            text: text.into(),
            ..Node::default()
        });
        let id = self.nodes.len() - 1;
        self.ops.push(Op::CreateText(id, text.into()));
        Ok(id)
    }

    fn set_attribute(
        &mut self,
        node: &usize,
        name: &str,
        value: &str,
    ) -> Result<(), RecorderError> {
        self.live(*node)?.attributes.insert(name.into(), value.into());
        self.ops.push(Op::SetAttribute(*node, name.into(), value.into()));
        Ok(())
    }

    fn remove_attribute(&mut self, node: &usize, name: &str) -> Result<(), RecorderError> {
        self.live(*node)?.attributes.remove(name);
        self.ops.push(Op::RemoveAttribute(*node, name.into()));
        Ok(())
    }

    fn set_style(&mut self, node: &usize, name: &str, value: &str) -> Result<(), RecorderError> {
        self.live(*node)?.style.insert(name.into(), value.into());
        self.ops.push(Op::SetStyle(*node, name.into(), value.into()));
        Ok(())
    }

    fn clear_style(&mut self, node: &usize, name: &str) -> Result<(), RecorderError> {
        self.live(*node)?.style.remove(name);
        self.ops.push(Op::ClearStyle(*node, name.into()));
        Ok(())
    }

    fn add_event_listener(
        &mut self,
        node: &usize,
        event: &str,
        handler: &Handler,
    ) -> Result<(), RecorderError> {
        self.live(*node)?
            .listeners
            .push((event.into(), handler.clone()));
        self.ops.push(Op::AddListener(*node, event.into()));
        Ok(())
    }

    fn remove_event_listener(
        &mut self,
        node: &usize,
        event: &str,
        handler: &Handler,
    ) -> Result<(), RecorderError> {
        self.live(*node)?
            .listeners
            .retain(|(e, h)| !(e == event && h == handler));
        self.ops.push(Op::RemoveListener(*node, event.into()));
        Ok(())
    }

    fn set_text(&mut self, node: &usize, text: &str) -> Result<(), RecorderError> {
        let value = &mut self.live(*node)?.text;
        value.clear();
        value.push_str(text);
        self.ops.push(Op::SetText(*node, text.to_string()));
        Ok(())
    }

    fn append_child(&mut self, parent: &usize, node: &usize) -> Result<(), RecorderError> {
        self.insert_before(parent, node, None)?;
        // Report as an append, not an insert.
        if let Some(op) = self.ops.last_mut() {
            *op = Op::Append(*parent, *node);
        }
        Ok(())
    }

    fn insert_before(
        &mut self,
        parent: &usize,
        node: &usize,
        reference: Option<&usize>,
    ) -> Result<(), RecorderError> {
        self.live(*parent)?;
        self.live(*node)?;
        if reference != Some(node) {
            if let Some(&r) = reference {
                if self.live(r)?.parent != Some(*parent) {
                    return Err(RecorderError::NotAChild {
                        parent: *parent,
                        child: r,
                    });
                }
            }
            self.detach(*node);
            let siblings = &mut self.nodes[*parent].children;
            let at = reference
                .and_then(|r| siblings.iter().position(|c| c == r))
                .unwrap_or(siblings.len());
            siblings.insert(at, *node);
            self.nodes[*node].parent = Some(*parent);
        }
        self.ops
            .push(Op::InsertBefore(*parent, *node, reference.copied()));
        Ok(())
    }

    fn remove_child(&mut self, parent: &usize, node: &usize) -> Result<(), RecorderError> {
        if self.live(*node)?.parent != Some(*parent) {
            return Err(RecorderError::NotAChild {
                parent: *parent,
                child: *node,
            });
        }
        self.detach(*node);
        self.poison(*node);
        self.ops.push(Op::Remove(*parent, *node));
        Ok(())
    }
}
