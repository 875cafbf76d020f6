//! DOM abstraction
//!
//! The controller only ever touches the page through [`UiNode`] and resolves
//! elements through [`NodeSource`]. Two backends exist:
//!
//! ```text
//! ViewController<N: UiNode>
//!        │
//!        ├── dom::web     HtmlElement / Document   (wasm32, live page)
//!        └── dom::memory  MemoryNode / MemoryDocument (native, tests & previews)
//! ```

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::{MemoryDocument, MemoryNode};

/// Handle to one page element.
///
/// Handles are cheap clones that share the underlying element, so every
/// mutation goes through `&self`. Mutations that the platform rejects are
/// dropped: a failing class toggle is not something the page can recover from.
pub trait UiNode: Clone {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);

    /// Inline style value; empty when unset.
    fn style_property(&self, property: &str) -> String;
    /// Set an inline style value. An empty value removes the property.
    fn set_style_property(&self, property: &str, value: &str);

    fn scroll_into_view_smooth(&self);

    /// Identity comparison (same element, not equal content).
    fn is_same_node(&self, other: &Self) -> bool;
}

/// Anything elements can be looked up in by CSS selector.
pub trait NodeSource {
    type Node: UiNode;

    /// First element matching `selector`, if any.
    fn query_one(&self, selector: &str) -> Option<Self::Node>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    fn body(&self) -> Option<Self::Node>;
}
