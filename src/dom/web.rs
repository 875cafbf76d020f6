//! Live-page backend over `web_sys`

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::{NodeSource, UiNode};

fn discard(op: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        tracing::trace!("{} rejected: {:?}", op, err);
    }
}

impl UiNode for HtmlElement {
    fn add_class(&self, class: &str) {
        discard("classList.add", self.class_list().add_1(class));
    }

    fn remove_class(&self, class: &str) {
        discard("classList.remove", self.class_list().remove_1(class));
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        discard("setAttribute", web_sys::Element::set_attribute(self, name, value));
    }

    fn style_property(&self, property: &str) -> String {
        self.style()
            .get_property_value(property)
            .unwrap_or_default()
    }

    fn set_style_property(&self, property: &str, value: &str) {
        let style = self.style();
        if value.is_empty() {
            discard("style.removeProperty", style.remove_property(property).map(|_| ()));
        } else {
            discard("style.setProperty", style.set_property(property, value));
        }
    }

    fn scroll_into_view_smooth(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn is_same_node(&self, other: &Self) -> bool {
        self == other
    }
}

impl NodeSource for Document {
    type Node = HtmlElement;

    fn query_one(&self, selector: &str) -> Option<HtmlElement> {
        match self.query_selector(selector) {
            Ok(found) => found.and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            Err(err) => {
                tracing::debug!("Invalid selector '{}': {:?}", selector, err);
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<HtmlElement> {
        let list = match self.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                tracing::debug!("Invalid selector '{}': {:?}", selector, err);
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn body(&self) -> Option<HtmlElement> {
        Document::body(self)
    }
}
