// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node properties and the attribute/property patcher.
//!
//! ## Overview
//!
//! [`Props`] holds the non-structural state of an element in three groups:
//!
//! - generic attributes, forwarded to [`Host::set_attribute`];
//! - style sub-properties, merged one by one through [`Host::set_style`];
//! - event listeners, keyed by event name.
//!
//! Props can be built with the typed builders ([`Props::attr`], [`Props::style`],
//! [`Props::on`]) or from string keys with [`Props::set`], which routes by key:
//! a key starting with [`EVENT_PREFIX`] binds a listener to the event named by
//! the rest of the key, [`STYLE_KEY`] (or any style value) merges style
//! sub-properties, and everything else becomes an attribute.
//!
//! ## Patching
//!
//! Patching issues host calls only for differences. Listeners are compared by
//! identity; a changed listener for the same event is detached before the new
//! one is attached.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::RenderError;
use crate::host::Host;
use crate::render::Reconciler;

/// Key prefix marking an event binding in string-keyed props, e.g. `@click`.
pub const EVENT_PREFIX: char = '@';

/// Key holding style sub-properties in string-keyed props.
pub const STYLE_KEY: &str = "style";

/// An event handler.
///
/// Handlers compare equal only to clones of themselves, so re-rendering with
/// the same handler value keeps the existing binding, while a fresh closure
/// replaces it.
#[derive(Clone)]
pub struct Handler(Rc<dyn Fn()>);

impl Handler {
    /// Wrap a callback.
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self(Rc::new(callback))
    }

    /// Invoke the callback.
    pub fn call(&self) {
        (self.0)();
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl Eq for Handler {}

impl core::fmt::Debug for Handler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Handler")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

/// A value for [`Props::set`].
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    /// Attribute value, or a `name: value; ...` declaration list under [`STYLE_KEY`].
    Attr(String),
    /// Style sub-properties.
    Style(Vec<(String, String)>),
    /// Event listener.
    Listener(Handler),
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Attr(value.into())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Attr(value)
    }
}

impl From<Handler> for PropValue {
    fn from(value: Handler) -> Self {
        Self::Listener(value)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for PropValue {
    fn from(entries: [(&str, &str); N]) -> Self {
        Self::Style(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Attributes, style sub-properties, and event listeners of an element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    events: BTreeMap<String, Handler>,
}

impl Props {
    /// Empty props.
    pub const fn new() -> Self {
        Self {
            attributes: BTreeMap::new(),
            style: BTreeMap::new(),
            events: BTreeMap::new(),
        }
    }

    /// Add a generic attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Add a style sub-property.
    pub fn style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(name.into(), value.into());
        self
    }

    /// Bind `handler` to `event` (without the [`EVENT_PREFIX`]).
    pub fn on(mut self, event: impl Into<String>, handler: Handler) -> Self {
        self.events.insert(event.into(), handler);
        self
    }

    /// Builder form of [`Props::set`].
    pub fn with(mut self, name: &str, value: impl Into<PropValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a prop from a string key, routing it by key and value.
    ///
    /// ```
    /// use thicket::props::{Handler, Props};
    ///
    /// let mut props = Props::new();
    /// props.set("class", "note");
    /// props.set("style", "color: red; font-size: 1em");
    /// props.set("@click", Handler::new(|| {}));
    /// assert_eq!(props.attribute("class"), Some("note"));
    /// assert_eq!(props.style_value("font-size"), Some("1em"));
    /// assert!(props.handler("click").is_some());
    /// ```
    pub fn set(&mut self, name: &str, value: impl Into<PropValue>) {
        match (name.strip_prefix(EVENT_PREFIX), value.into()) {
            (Some(event), PropValue::Listener(handler)) => {
                self.events.insert(event.into(), handler);
            }
            (None, PropValue::Listener(_)) => {
                tracing::warn!(name, "listener under a key without the event prefix; ignored");
            }
            (_, PropValue::Style(entries)) => self.style.extend(entries),
            (_, PropValue::Attr(declarations)) if name == STYLE_KEY => {
                for declaration in declarations.split(';') {
                    if let Some((k, v)) = declaration.split_once(':') {
                        self.style.insert(k.trim().into(), v.trim().into());
                    }
                }
            }
            (_, PropValue::Attr(value)) => {
                self.attributes.insert(name.into(), value);
            }
        }
    }

    /// Value of a generic attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Value of a style sub-property.
    pub fn style_value(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }

    /// Listener bound to `event`.
    pub fn handler(&self, event: &str) -> Option<&Handler> {
        self.events.get(event)
    }

    /// Attributes in name order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Style sub-properties in name order.
    pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.style.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Event bindings in event-name order.
    pub fn events(&self) -> impl Iterator<Item = (&str, &Handler)> + '_ {
        self.events.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// True if no attribute, style, or listener is set.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.style.is_empty() && self.events.is_empty()
    }
}

impl<H: Host> Reconciler<'_, H> {
    /// Apply the difference between `previous` and `next` to `node`.
    pub(crate) fn patch_props(
        &mut self,
        node: &H::Node,
        previous: &Props,
        next: &Props,
    ) -> Result<(), RenderError<H::Error>> {
        for (name, value) in &next.attributes {
            if previous.attributes.get(name) != Some(value) {
                self.host.set_attribute(node, name, value)?;
                self.stats.props += 1;
            }
        }
        for name in previous.attributes.keys() {
            if !next.attributes.contains_key(name) {
                self.host.remove_attribute(node, name)?;
                self.stats.props += 1;
            }
        }

        for (name, value) in &next.style {
            if previous.style.get(name) != Some(value) {
                self.host.set_style(node, name, value)?;
                self.stats.props += 1;
            }
        }
        for name in previous.style.keys() {
            if !next.style.contains_key(name) {
                self.host.clear_style(node, name)?;
                self.stats.props += 1;
            }
        }

        for (event, handler) in &next.events {
            match previous.events.get(event) {
                Some(old) if old == handler => continue,
                Some(old) => {
                    self.host.remove_event_listener(node, event, old)?;
                    self.stats.props += 1;
                }
                None => {}
            }
            self.host.add_event_listener(node, event, handler)?;
            self.stats.props += 1;
        }
        for (event, old) in &previous.events {
            if !next.events.contains_key(event) {
                self.host.remove_event_listener(node, event, old)?;
                self.stats.props += 1;
            }
        }
        Ok(())
    }
}
