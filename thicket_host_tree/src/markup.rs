// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup serialization for snapshots and structural comparison.
//!
//! The format is HTML-like and deterministic: attributes and style
//! sub-properties are sorted by name, listeners are listed as `@event` flags.
//! Handle identities are not part of the output, so two trees that differ only
//! in which nodes were recreated serialize identically.

use alloc::string::String;
use core::fmt::Write;

use crate::tree::{Data, HostTree};
use crate::types::NodeId;

impl<L> HostTree<L> {
    /// Serialize the subtree rooted at `id`. Returns an empty string for stale ids.
    ///
    /// ```
    /// use thicket_host_tree::HostTree;
    ///
    /// let mut tree: HostTree<()> = HostTree::new();
    /// let p = tree.create_element("p");
    /// let t = tree.create_text("a < b");
    /// tree.set_attribute(p, "class", "note").unwrap();
    /// tree.set_style(p, "color", "red").unwrap();
    /// tree.append_child(p, t).unwrap();
    /// assert_eq!(
    ///     tree.to_markup(p),
    ///     r#"<p class="note" style="color: red;">a &lt; b</p>"#
    /// );
    /// ```
    pub fn to_markup(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_markup(id, &mut out);
        out
    }

    /// Serialize only the children of `id`, concatenated.
    ///
    /// Useful for containers, whose own tag is not produced by rendering.
    pub fn children_markup(&self, id: NodeId) -> String {
        let mut out = String::new();
        for &child in self.children(id) {
            self.write_markup(child, &mut out);
        }
        out
    }

    fn write_markup(&self, id: NodeId, out: &mut String) {
        let Ok(node) = self.node(id) else {
            return;
        };
        match &node.data {
            Data::Text(text) => escape(text, out),
            Data::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                for (name, value) in &el.attributes {
                    let _ = write!(out, " {name}=\"");
                    escape(value, out);
                    out.push('"');
                }
                if !el.style.is_empty() {
                    out.push_str(" style=\"");
                    for (i, (name, value)) in el.style.iter().enumerate() {
                        if i > 0 {
                            out.push(' ');
                        }
                        let _ = write!(out, "{name}: ");
                        escape(value, out);
                        out.push(';');
                    }
                    out.push('"');
                }
                for event in el.listeners.keys() {
                    let _ = write!(out, " @{event}");
                }
                out.push('>');
                for &child in &node.children {
                    self.write_markup(child, out);
                }
                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }
}

fn escape(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
