// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, mutations, queries.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::damage::Damage;
use crate::error::HostError;
use crate::types::{Dirty, NodeId, NodeKind};

impl<L> Default for HostTree<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Retained host tree.
///
/// `L` is the listener payload stored for event bindings. It is opaque to the
/// tree; [`HostTree::remove_listener`] compares payloads with `PartialEq`.
pub struct HostTree<L> {
    nodes: Vec<Option<Node<L>>>, // slots
    generations: Vec<u32>,       // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    removed: usize,
}

impl<L> core::fmt::Debug for HostTree<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("HostTree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Element<L> {
    pub(crate) tag: String,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) style: BTreeMap<String, String>,
    pub(crate) listeners: BTreeMap<String, Vec<L>>,
}

#[derive(Clone, Debug)]
pub(crate) enum Data<L> {
    Element(Element<L>),
    Text(String),
}

#[derive(Clone, Debug)]
pub(crate) struct Node<L> {
    generation: u32,
    parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) data: Data<L>,
    dirty: Dirty,
}

impl<L> Node<L> {
    fn new(generation: u32, data: Data<L>) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            data,
            dirty: Dirty::CREATED,
        }
    }
}

impl<L> HostTree<L> {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            removed: 0,
        }
    }

    /// Create a detached element node.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Data::Element(Element {
            tag: tag.to_string(),
            attributes: BTreeMap::new(),
            style: BTreeMap::new(),
            listeners: BTreeMap::new(),
        }))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.alloc(Data::Text(text.to_string()))
    }

    /// Set attribute `name` on an element.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), HostError> {
        let el = self.element_mut(id)?;
        el.attributes.insert(name.to_string(), value.to_string());
        self.mark(id, Dirty::ATTRIBUTES);
        Ok(())
    }

    /// Remove attribute `name` from an element. Absent attributes are ignored.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<(), HostError> {
        if self.element_mut(id)?.attributes.remove(name).is_some() {
            self.mark(id, Dirty::ATTRIBUTES);
        }
        Ok(())
    }

    /// Set style sub-property `name` on an element.
    pub fn set_style(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), HostError> {
        let el = self.element_mut(id)?;
        el.style.insert(name.to_string(), value.to_string());
        self.mark(id, Dirty::STYLE);
        Ok(())
    }

    /// Clear style sub-property `name` on an element. Absent sub-properties are ignored.
    pub fn clear_style(&mut self, id: NodeId, name: &str) -> Result<(), HostError> {
        if self.element_mut(id)?.style.remove(name).is_some() {
            self.mark(id, Dirty::STYLE);
        }
        Ok(())
    }

    /// Bind `listener` to `event` on an element.
    pub fn add_listener(&mut self, id: NodeId, event: &str, listener: L) -> Result<(), HostError> {
        let el = self.element_mut(id)?;
        el.listeners
            .entry(event.to_string())
            .or_default()
            .push(listener);
        self.mark(id, Dirty::LISTENERS);
        Ok(())
    }

    /// Unbind the first listener equal to `listener` from `event`. Unknown listeners are ignored.
    pub fn remove_listener(
        &mut self,
        id: NodeId,
        event: &str,
        listener: &L,
    ) -> Result<(), HostError>
    where
        L: PartialEq,
    {
        let el = self.element_mut(id)?;
        let Some(bound) = el.listeners.get_mut(event) else {
            return Ok(());
        };
        let Some(at) = bound.iter().position(|l| l == listener) else {
            return Ok(());
        };
        bound.remove(at);
        if bound.is_empty() {
            el.listeners.remove(event);
        }
        self.mark(id, Dirty::LISTENERS);
        Ok(())
    }

    /// Replace the content of a text node.
    pub fn set_text(&mut self, id: NodeId, text: &str) -> Result<(), HostError> {
        match &mut self.node_mut(id)?.data {
            Data::Text(t) => {
                t.clear();
                t.push_str(text);
            }
            Data::Element(_) => return Err(HostError::NotText(id)),
        }
        self.mark(id, Dirty::TEXT);
        Ok(())
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// If `child` is already attached somewhere it is moved.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), HostError> {
        self.insert_before(parent, child, None)
    }

    /// Attach `child` under `parent` immediately before `reference`, or last if
    /// `reference` is `None`.
    ///
    /// If `child` is already attached somewhere it is moved. Inserting a node
    /// before itself is a no-op.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), HostError> {
        self.element(parent)?;
        self.node(child)?;
        if let Some(r) = reference {
            if self.node(r)?.parent != Some(parent) {
                return Err(HostError::NotAChild { parent, child: r });
            }
            if r == child {
                return Ok(());
            }
        }
        let mut cursor = Some(parent);
        while let Some(c) = cursor {
            if c == child {
                return Err(HostError::Cycle { parent, child });
            }
            cursor = self.node(c)?.parent;
        }

        let old_parent = self.node(child)?.parent;
        if let Some(old) = old_parent {
            self.node_mut(old)?.children.retain(|c| *c != child);
        }
        let siblings = &mut self.node_mut(parent)?.children;
        let at = reference
            .and_then(|r| siblings.iter().position(|c| *c == r))
            .unwrap_or(siblings.len());
        siblings.insert(at, child);
        self.node_mut(child)?.parent = Some(parent);

        match old_parent {
            Some(old) if old == parent => self.mark(child, Dirty::MOVED),
            Some(old) => {
                self.mark(old, Dirty::CHILDREN);
                self.mark(parent, Dirty::CHILDREN);
            }
            None => self.mark(parent, Dirty::CHILDREN),
        }
        Ok(())
    }

    /// Detach `child` from `parent` and free it together with its subtree.
    ///
    /// Every id in the removed subtree becomes stale.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), HostError> {
        self.node(parent)?;
        if self.node(child)?.parent != Some(parent) {
            return Err(HostError::NotAChild { parent, child });
        }
        self.node_mut(parent)?.children.retain(|c| *c != child);
        self.mark(parent, Dirty::CHILDREN);
        self.free(child);
        Ok(())
    }

    /// Collect and clear the changes recorded since the previous commit.
    pub fn commit(&mut self) -> Damage {
        let mut damage = Damage {
            changed: Vec::new(),
            removed: core::mem::take(&mut self.removed),
        };
        for (i, slot) in self.nodes.iter_mut().enumerate() {
            let Some(node) = slot else {
                continue;
            };
            if node.dirty.is_empty() {
                continue;
            }
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            let id = NodeId::new(i as u32, node.generation);
            damage
                .changed
                .push((id, core::mem::take(&mut node.dirty)));
        }
        damage
    }

    // --- queries ---

    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is considered live if its slot exists and its generation matches
    /// the current generation stored in that slot.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .is_some_and(|n| n.generation == id.1)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// True if no node is alive.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Kind of a live node.
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.node(id).ok().map(|n| match n.data {
            Data::Element(_) => NodeKind::Element,
            Data::Text(_) => NodeKind::Text,
        })
    }

    /// Parent of a live node, if attached.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).ok().and_then(|n| n.parent)
    }

    /// Children of a live node, in order. Empty for stale ids and text nodes.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Tag of a live element.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).ok().map(|e| e.tag.as_str())
    }

    /// Content of a live text node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).ok()?.data {
            Data::Text(t) => Some(t.as_str()),
            Data::Element(_) => None,
        }
    }

    /// Value of attribute `name` on a live element.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).ok()?.attributes.get(name).map(String::as_str)
    }

    /// Value of style sub-property `name` on a live element.
    pub fn style(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).ok()?.style.get(name).map(String::as_str)
    }

    /// Listeners bound to `event` on a live element, in binding order.
    pub fn listeners(&self, id: NodeId, event: &str) -> &[L] {
        self.element(id)
            .ok()
            .and_then(|e| e.listeners.get(event))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // --- internals ---

    fn alloc(&mut self, data: Data<L>) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, data));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, data)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        NodeId::new(idx, generation)
    }

    fn free(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get_mut(id.idx()).and_then(Option::take) else {
            return;
        };
        self.removed += 1;
        self.free_list.push(id.idx());
        for child in node.children {
            self.free(child);
        }
    }

    fn mark(&mut self, id: NodeId, flags: Dirty) {
        if let Some(Some(n)) = self.nodes.get_mut(id.idx()) {
            n.dirty |= flags;
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<&Node<L>, HostError> {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .filter(|n| n.generation == id.1)
            .ok_or(HostError::StaleNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node<L>, HostError> {
        self.nodes
            .get_mut(id.idx())
            .and_then(|n| n.as_mut())
            .filter(|n| n.generation == id.1)
            .ok_or(HostError::StaleNode(id))
    }

    fn element(&self, id: NodeId) -> Result<&Element<L>, HostError> {
        match &self.node(id)?.data {
            Data::Element(e) => Ok(e),
            Data::Text(_) => Err(HostError::NotAnElement(id)),
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut Element<L>, HostError> {
        match &mut self.node_mut(id)?.data {
            Data::Element(e) => Ok(e),
            Data::Text(_) => Err(HostError::NotAnElement(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> HostTree<u32> {
        HostTree::new()
    }

    #[test]
    fn append_and_insert_before_order() {
        let mut t = tree();
        let root = t.create_element("ul");
        let a = t.create_element("li");
        let b = t.create_element("li");
        let c = t.create_element("li");
        t.append_child(root, a).unwrap();
        t.append_child(root, c).unwrap();
        t.insert_before(root, b, Some(c)).unwrap();
        assert_eq!(t.children(root), &[a, b, c]);
        assert_eq!(t.parent(b), Some(root));
    }

    #[test]
    fn reinserting_attached_node_moves_it() {
        let mut t = tree();
        let root = t.create_element("ul");
        let a = t.create_element("li");
        let b = t.create_element("li");
        let c = t.create_element("li");
        for n in [a, b, c] {
            t.append_child(root, n).unwrap();
        }
        let _ = t.commit();

        t.insert_before(root, c, Some(a)).unwrap();
        assert_eq!(t.children(root), &[c, a, b]);
        let damage = t.commit();
        assert_eq!(damage.changed, [(c, Dirty::MOVED)]);

        // Appending moves to the end.
        t.append_child(root, c).unwrap();
        assert_eq!(t.children(root), &[a, b, c]);
    }

    #[test]
    fn remove_child_frees_subtree() {
        let mut t = tree();
        let root = t.create_element("div");
        let inner = t.create_element("span");
        let leaf = t.create_text("hi");
        t.append_child(root, inner).unwrap();
        t.append_child(inner, leaf).unwrap();
        let _ = t.commit();

        t.remove_child(root, inner).unwrap();
        assert!(!t.is_alive(inner));
        assert!(!t.is_alive(leaf));
        assert!(t.children(root).is_empty());
        let damage = t.commit();
        assert_eq!(damage.removed, 2);
        assert_eq!(damage.changed, [(root, Dirty::CHILDREN)]);
    }

    #[test]
    fn liveness_insert_remove_reuse() {
        let mut t = tree();
        let root = t.create_element("div");
        let a = t.create_element("p");
        t.append_child(root, a).unwrap();
        t.remove_child(root, a).unwrap();
        assert!(!t.is_alive(a));

        let b = t.create_element("p");
        assert!(t.is_alive(b));
        assert!(!t.is_alive(a));
        if a.slot() == b.slot() {
            assert!(b.generation() > a.generation(), "generation must increase on reuse");
        }
        assert_eq!(t.set_attribute(a, "id", "x"), Err(HostError::StaleNode(a)));
    }

    #[test]
    fn attributes_style_and_listeners() {
        let mut t = tree();
        let el = t.create_element("button");
        t.set_attribute(el, "class", "primary").unwrap();
        t.set_style(el, "color", "red").unwrap();
        t.add_listener(el, "click", 1).unwrap();
        t.add_listener(el, "click", 2).unwrap();
        assert_eq!(t.attribute(el, "class"), Some("primary"));
        assert_eq!(t.style(el, "color"), Some("red"));
        assert_eq!(t.listeners(el, "click"), &[1, 2]);

        t.remove_listener(el, "click", &1).unwrap();
        assert_eq!(t.listeners(el, "click"), &[2]);
        t.remove_attribute(el, "class").unwrap();
        t.clear_style(el, "color").unwrap();
        assert_eq!(t.attribute(el, "class"), None);
        assert_eq!(t.style(el, "color"), None);
    }

    #[test]
    fn kind_mismatches_are_errors() {
        let mut t = tree();
        let text = t.create_text("x");
        let el = t.create_element("div");
        assert_eq!(t.set_attribute(text, "a", "b"), Err(HostError::NotAnElement(text)));
        assert_eq!(t.append_child(text, el), Err(HostError::NotAnElement(text)));
        assert_eq!(t.set_text(el, "y"), Err(HostError::NotText(el)));
        t.set_text(text, "y").unwrap();
        assert_eq!(t.text(text), Some("y"));
        assert_eq!(t.kind(text), Some(NodeKind::Text));
    }

    #[test]
    fn structural_errors() {
        let mut t = tree();
        let root = t.create_element("div");
        let a = t.create_element("div");
        let stray = t.create_element("div");
        t.append_child(root, a).unwrap();
        assert_eq!(
            t.append_child(a, root),
            Err(HostError::Cycle {
                parent: a,
                child: root
            })
        );
        assert_eq!(
            t.remove_child(root, stray),
            Err(HostError::NotAChild {
                parent: root,
                child: stray
            })
        );
        assert_eq!(
            t.insert_before(root, stray, Some(stray)),
            Err(HostError::NotAChild {
                parent: root,
                child: stray
            })
        );
    }

    #[test]
    fn commit_reports_and_clears() {
        let mut t = tree();
        let root = t.create_element("div");
        let text = t.create_text("a");
        t.append_child(root, text).unwrap();
        let first = t.commit();
        assert_eq!(first.count(Dirty::CREATED), 2);
        assert!(first.flags().contains(Dirty::CHILDREN));
        assert!(t.commit().is_empty());

        t.set_text(text, "b").unwrap();
        let second = t.commit();
        assert_eq!(second.changed, [(text, Dirty::TEXT)]);
    }
}
