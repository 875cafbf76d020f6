//! In-memory DOM for native tests and host-side previews
//!
//! Supports just enough of the selector grammar for the site's markup
//! contract: `#id`, `.class`, bare tag names, and comma-separated lists of
//! those.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{NodeSource, UiNode};

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    scroll_requests: usize,
}

/// Shared handle to an in-memory element
#[derive(Debug, Clone)]
pub struct MemoryNode(Rc<RefCell<NodeData>>);

impl MemoryNode {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(NodeData {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        })))
    }

    pub fn with_id(self, id: &str) -> Self {
        self.set_attribute("id", id);
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_style(self, property: &str, value: &str) -> Self {
        self.set_style_property(property, value);
        self
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    /// False only when an inline `display: none` is set.
    pub fn is_displayed(&self) -> bool {
        self.0.borrow().style.get("display").map(String::as_str) != Some("none")
    }

    /// Number of smooth-scroll requests this element received.
    pub fn scroll_requests(&self) -> usize {
        self.0.borrow().scroll_requests
    }

    fn matches(&self, simple: &str) -> bool {
        if let Some(id) = simple.strip_prefix('#') {
            self.attribute("id").as_deref() == Some(id)
        } else if let Some(class) = simple.strip_prefix('.') {
            self.has_class(class)
        } else {
            self.0.borrow().tag.eq_ignore_ascii_case(simple)
        }
    }
}

impl UiNode for MemoryNode {
    fn add_class(&self, class: &str) {
        let mut data = self.0.borrow_mut();
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn style_property(&self, property: &str) -> String {
        self.0
            .borrow()
            .style
            .get(property)
            .cloned()
            .unwrap_or_default()
    }

    fn set_style_property(&self, property: &str, value: &str) {
        let mut data = self.0.borrow_mut();
        if value.is_empty() {
            data.style.remove(property);
        } else {
            data.style.insert(property.to_string(), value.to_string());
        }
    }

    fn scroll_into_view_smooth(&self) {
        self.0.borrow_mut().scroll_requests += 1;
    }

    fn is_same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Flat in-memory document: a body plus elements in document order
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    body: Option<MemoryNode>,
    nodes: Vec<MemoryNode>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Empty document with a `<body>`.
    pub fn new() -> Self {
        Self {
            body: Some(MemoryNode::new("body")),
            nodes: Vec::new(),
        }
    }

    /// Document without a `<body>` element.
    pub fn without_body() -> Self {
        Self {
            body: None,
            nodes: Vec::new(),
        }
    }

    /// Append an element and return a handle to it.
    pub fn append(&mut self, node: MemoryNode) -> MemoryNode {
        self.nodes.push(node.clone());
        node
    }
}

impl NodeSource for MemoryDocument {
    type Node = MemoryNode;

    fn query_one(&self, selector: &str) -> Option<MemoryNode> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<MemoryNode> {
        let parts: Vec<&str> = selector
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        self.nodes
            .iter()
            .filter(|node| parts.iter().any(|part| node.matches(part)))
            .cloned()
            .collect()
    }

    fn body(&self) -> Option<MemoryNode> {
        self.body.clone()
    }
}
