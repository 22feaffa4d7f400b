//! In-memory node tree standing in for a host document.
//!
//! Elements carry ordered attributes, children and event listeners. Trees are
//! built with [`h`], parsed from trusted fragments with [`to_html_element`] and
//! serialised back with [`Node::to_html`].

use super::{HtmlContent, MarkupError, MarkupResult};
use crate::utils::text::escape;
use scraper::{ElementRef, Html, Node as ParsedNode};
use std::{fmt, sync::Arc};

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Event types dispatched through the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Input,
}

/// An event delivered to listeners
#[derive(Debug, Clone, PartialEq)]
pub struct DomEvent {
    pub kind: EventKind,
    /// Current value of the target, for `input` events
    pub value: Option<String>,
}

impl DomEvent {
    pub fn new(kind: EventKind) -> Self {
        Self { kind, value: None }
    }

    pub fn input(value: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Input,
            value: Some(value.into()),
        }
    }
}

pub type Listener = Arc<dyn Fn(&DomEvent) + Send + Sync>;

/// A node of the tree
#[derive(Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    pub fn text_content(&self) -> String {
        match self {
            Self::Element(element) => element.text_content(),
            Self::Text(text) => text.clone(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Element(element) => element.write_html(out),
            Self::Text(text) => escape::push_escaped(out, text),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => element.fmt(f),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An element with attributes, children and listeners
#[derive(Clone)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
    listeners: Vec<(EventKind, Listener)>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attributes: Vec::new(),
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    // Attributes

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.retain(|(key, _)| key != name);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }

        let classes = match self.attribute("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {}", existing.trim(), class),
            _ => class.to_string(),
        };
        self.set_attribute("class", classes);
    }

    // Children

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.append(node);
        self
    }

    pub fn append(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn extend<I: IntoIterator<Item = Node>>(&mut self, nodes: I) {
        self.children.extend(nodes);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    // Listeners

    pub fn on<F>(mut self, kind: EventKind, listener: F) -> Self
    where
        F: Fn(&DomEvent) + Send + Sync + 'static,
    {
        self.add_listener(kind, Arc::new(listener));
        self
    }

    pub fn add_listener(&mut self, kind: EventKind, listener: Listener) {
        self.listeners.push((kind, listener));
    }

    pub fn listeners(&self, kind: EventKind) -> Vec<Listener> {
        self.listeners
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }

    // Queries

    /// Depth-first search starting with this element
    pub fn find<P>(&self, predicate: P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool + Copy,
    {
        if predicate(self) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find(predicate))
    }

    pub fn find_mut<P>(&mut self, predicate: P) -> Option<&mut Element>
    where
        P: Fn(&Element) -> bool + Copy,
    {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| match child {
            Node::Element(element) => element.find_mut(predicate),
            Node::Text(_) => None,
        })
    }

    pub fn find_all<P>(&self, predicate: P) -> Vec<&Element>
    where
        P: Fn(&Element) -> bool + Copy,
    {
        let mut found = Vec::new();
        self.collect_matching(predicate, &mut found);
        found
    }

    fn collect_matching<'a, P>(&'a self, predicate: P, found: &mut Vec<&'a Element>)
    where
        P: Fn(&Element) -> bool + Copy,
    {
        if predicate(self) {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect_matching(predicate, found);
        }
    }

    /// The `<slot name=...>` insertion point with the given name
    pub fn slot(&self, name: &str) -> Option<&Element> {
        self.find(|el| el.tag == "slot" && el.attribute("name") == Some(name))
    }

    pub fn slot_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.find_mut(|el| el.tag == "slot" && el.attribute("name") == Some(name))
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    // Serialisation

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape::push_escaped(out, value);
            out.push('"');
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("attributes", &self.attributes)
            .field("children", &self.children)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Create an element with attributes and children; `None` children are skipped
pub fn h<I>(tag: &str, attrs: &[(&str, &str)], children: I) -> Element
where
    I: IntoIterator<Item = Option<Node>>,
{
    let mut element = Element::new(tag);
    for (name, value) in attrs {
        element.set_attribute(*name, *value);
    }
    element.extend(children.into_iter().flatten());
    element
}

/// Parse a trusted fragment that must consist of exactly one root element
pub fn to_html_element(html_text: &str) -> MarkupResult<Element> {
    let fragment = Html::parse_fragment(html_text);
    let roots: Vec<ElementRef<'_>> = fragment
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .collect();

    match roots.as_slice() {
        [root] => Ok(convert_element(*root)),
        _ => Err(MarkupError::MalformedContent { found: roots.len() }),
    }
}

/// Parse a trusted [`HtmlContent`] into its single root element
pub fn content_to_element(content: &HtmlContent) -> MarkupResult<Element> {
    to_html_element(content.as_str())
}

fn convert_element(parsed: ElementRef<'_>) -> Element {
    let value = parsed.value();
    let mut element = Element::new(value.name());
    for (name, attr_value) in value.attrs() {
        element.set_attribute(name, attr_value);
    }

    for child in parsed.children() {
        match child.value() {
            ParsedNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    element.append(convert_element(child_element));
                }
            }
            ParsedNode::Text(text) => element.append(Node::Text(text.to_string())),
            _ => {}
        }
    }

    element
}
