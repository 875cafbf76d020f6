//! ViewController - all interactive behavior of the site
//!
//! The controller owns the element registry, the current collection filter and
//! the modal state. Every operation checks that its elements were resolved and
//! quietly does nothing otherwise, so the same script runs on every page no
//! matter which sections the page carries.
//!
//! Event flow:
//! ```text
//! DOM event ──► bind.rs listener ──► UiEvent ──► ViewController::dispatch
//!                                                       │
//!                                     class / aria / style mutations via UiNode
//! ```

use crate::config::ViewConfig;
use crate::dom::{NodeSource, UiNode};
use crate::filter::FilterSelection;
use crate::modal::ModalState;
use crate::registry::ElementRegistry;

const ARIA_SELECTED: &str = "aria-selected";
const ARIA_HIDDEN: &str = "aria-hidden";

/// Interactions the controller reacts to
#[derive(Debug, Clone)]
pub enum UiEvent<N> {
    /// Logo or brand link
    BrandClick,
    ExploreClick,
    ArrowClick,
    ProjectsLinkClick,
    /// About link or about button
    AboutClick,
    /// Filter control at `index` in the registry
    FilterClick { index: usize },
    /// Flow pill at `index` in the registry
    FlowPillClick { index: usize },
    ModalCloseClick,
    /// Click that reached the modal container; `target` is the element that
    /// was actually hit, when it is one the backend can represent.
    OverlayClick { target: Option<N> },
    KeyDown { key: String },
}

pub struct ViewController<N: UiNode> {
    config: ViewConfig,
    elements: ElementRegistry<N>,
    current_filter: FilterSelection,
    modal: ModalState,
}

impl<N: UiNode> ViewController<N> {
    /// Build the controller and bring the page into a consistent initial
    /// state: modal closed, filter "all".
    pub fn new(config: ViewConfig, elements: ElementRegistry<N>) -> Self {
        let mut controller = Self {
            config,
            elements,
            current_filter: FilterSelection::All,
            modal: ModalState::Closed,
        };
        controller.normalize_modal();
        controller.normalize_filters();
        controller
    }

    /// Resolve the registry from `source` and build the controller.
    pub fn from_source<S>(source: &S, config: ViewConfig) -> Self
    where
        S: NodeSource<Node = N>,
    {
        let elements = ElementRegistry::resolve(source, &config.selectors);
        Self::new(config, elements)
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn elements(&self) -> &ElementRegistry<N> {
        &self.elements
    }

    pub fn current_filter(&self) -> &FilterSelection {
        &self.current_filter
    }

    /// Whether the modal container currently carries the open class.
    pub fn is_modal_open(&self) -> bool {
        self.elements
            .modal
            .as_ref()
            .is_some_and(|modal| modal.has_class(&self.config.classes.open_class))
    }

    // =========================================================================
    // EVENT DISPATCH
    // =========================================================================

    pub fn dispatch(&mut self, event: UiEvent<N>) {
        tracing::trace!("dispatch {:?}", EventName(&event));
        match event {
            UiEvent::BrandClick => self.show_primary_view(),
            UiEvent::ExploreClick | UiEvent::ArrowClick | UiEvent::ProjectsLinkClick => {
                self.hide_primary_view()
            }
            UiEvent::AboutClick => self.show_modal(),
            UiEvent::FilterClick { index } => {
                if self.set_active_filter_at(index) {
                    self.apply_selection(&self.current_filter);
                }
            }
            UiEvent::FlowPillClick { index } => self.follow_flow_pill(index),
            UiEvent::ModalCloseClick => self.hide_modal(),
            UiEvent::OverlayClick { target } => self.handle_overlay_click(target.as_ref()),
            UiEvent::KeyDown { key } => self.handle_key(&key),
        }
    }

    // =========================================================================
    // PRIMARY VIEW
    // =========================================================================

    pub fn show_primary_view(&self) {
        self.set_primary_view_hidden(false);
    }

    pub fn hide_primary_view(&self) {
        self.set_primary_view_hidden(true);
    }

    fn set_primary_view_hidden(&self, hidden: bool) {
        let classes = &self.config.classes;
        match &self.elements.hero {
            Some(hero) if hidden => hero.add_class(&classes.hidden_class),
            Some(hero) => hero.remove_class(&classes.hidden_class),
            None => tracing::debug!("No hero section; primary view toggle skipped"),
        }
        if let Some(body) = &self.elements.body {
            if hidden {
                body.add_class(&classes.body_marker_class);
            } else {
                body.remove_class(&classes.body_marker_class);
            }
        }
    }

    // =========================================================================
    // COLLECTION FILTER
    // =========================================================================

    /// Mark `control` as the active filter.
    ///
    /// Controls that are not part of the registry are ignored, so the
    /// single-active-control invariant can't be broken from outside.
    pub fn set_active_filter(&mut self, control: &N) {
        match self
            .elements
            .filters
            .iter()
            .position(|known| known.is_same_node(control))
        {
            Some(index) => {
                self.set_active_filter_at(index);
            }
            None => tracing::debug!("Ignoring filter control outside the registry"),
        }
    }

    /// Mark the filter control at `index` as active. Returns false when no such
    /// control exists.
    pub fn set_active_filter_at(&mut self, index: usize) -> bool {
        let Some(chosen) = self.elements.filters.get(index) else {
            tracing::debug!("No filter control at index {}", index);
            return false;
        };
        let active = &self.config.classes.active_class;
        for control in &self.elements.filters {
            control.remove_class(active);
            control.set_attribute(ARIA_SELECTED, "false");
        }
        chosen.add_class(active);
        chosen.set_attribute(ARIA_SELECTED, "true");

        let selection = self.filter_of(chosen);
        self.current_filter = selection;
        tracing::debug!("Active filter: {}", self.current_filter);
        true
    }

    /// Show the cards admitted by `filter_id`, hide the rest.
    pub fn apply_filter(&self, filter_id: &str) {
        self.apply_selection(&FilterSelection::parse(filter_id));
    }

    pub fn apply_selection(&self, selection: &FilterSelection) {
        let attr = &self.config.attributes.card;
        for card in &self.elements.cards {
            let visible = selection.admits(card.attribute(attr).as_deref());
            card.set_style_property("display", if visible { "" } else { "none" });
        }
    }

    /// Select the collection `collection_id` and scroll the grid into view.
    ///
    /// Unknown collections leave the filter and the cards untouched.
    pub fn navigate_to_collection(&mut self, collection_id: &str) {
        if collection_id.trim().is_empty() {
            tracing::debug!("Blank collection id; navigation skipped");
            return;
        }
        let wanted = FilterSelection::parse(collection_id);
        let Some(index) = self.find_filter(&wanted) else {
            tracing::debug!("No filter control for collection '{}'", collection_id);
            return;
        };

        self.set_active_filter_at(index);
        self.apply_selection(&self.current_filter);

        match &self.elements.projects_grid {
            Some(grid) => grid.scroll_into_view_smooth(),
            None => tracing::debug!("No projects grid; scroll skipped"),
        }
    }

    fn filter_of(&self, control: &N) -> FilterSelection {
        let raw = control.attribute(&self.config.attributes.filter);
        FilterSelection::from_attribute(raw.as_deref())
    }

    fn find_filter(&self, selection: &FilterSelection) -> Option<usize> {
        self.elements
            .filters
            .iter()
            .position(|control| &self.filter_of(control) == selection)
    }

    fn follow_flow_pill(&mut self, index: usize) {
        let Some(pill) = self.elements.flow_pills.get(index) else {
            tracing::debug!("No flow pill at index {}", index);
            return;
        };
        match pill.attribute(&self.config.attributes.pill) {
            Some(collection) => self.navigate_to_collection(&collection),
            None => tracing::debug!("Flow pill {} carries no collection", index),
        }
    }

    // =========================================================================
    // MODAL
    // =========================================================================

    pub fn show_modal(&mut self) {
        let Some(modal) = &self.elements.modal else {
            tracing::debug!("No modal; open skipped");
            return;
        };
        modal.add_class(&self.config.classes.open_class);
        modal.set_attribute(ARIA_HIDDEN, "false");

        let overflow = self
            .elements
            .body
            .as_ref()
            .map(|body| body.style_property("overflow"))
            .unwrap_or_default();
        if self.modal.open(overflow) {
            if let Some(body) = &self.elements.body {
                body.set_style_property("overflow", "hidden");
            }
        }
    }

    pub fn hide_modal(&mut self) {
        let Some(modal) = &self.elements.modal else {
            tracing::debug!("No modal; close skipped");
            return;
        };
        modal.remove_class(&self.config.classes.open_class);
        modal.set_attribute(ARIA_HIDDEN, "true");

        if let Some(saved) = self.modal.close() {
            if let Some(body) = &self.elements.body {
                body.set_style_property("overflow", &saved);
            }
        }
    }

    /// Close the modal when the click landed on the overlay background itself,
    /// not on anything inside the modal content.
    pub fn handle_overlay_click(&mut self, target: Option<&N>) {
        let on_background = match (&self.elements.modal, target) {
            (Some(modal), Some(target)) => target.is_same_node(modal),
            _ => false,
        };
        if on_background {
            self.hide_modal();
        }
    }

    pub fn handle_key(&mut self, key: &str) {
        if self.config.keys.closes_modal(key) && self.is_modal_open() {
            self.hide_modal();
        }
    }

    // =========================================================================
    // INITIAL STATE
    // =========================================================================

    fn normalize_modal(&mut self) {
        if let Some(modal) = &self.elements.modal {
            modal.remove_class(&self.config.classes.open_class);
            modal.set_attribute(ARIA_HIDDEN, "true");
        }
        self.modal = ModalState::Closed;
    }

    fn normalize_filters(&mut self) {
        match self.find_filter(&self.current_filter) {
            Some(index) => {
                self.set_active_filter_at(index);
            }
            None => {
                for control in &self.elements.filters {
                    control.remove_class(&self.config.classes.active_class);
                    control.set_attribute(ARIA_SELECTED, "false");
                }
            }
        }
        self.apply_selection(&self.current_filter);
    }
}

/// Variant name only, so trace logs don't need `N: Debug`.
struct EventName<'a, N>(&'a UiEvent<N>);

impl<N> std::fmt::Debug for EventName<'_, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self.0 {
            UiEvent::BrandClick => "BrandClick",
            UiEvent::ExploreClick => "ExploreClick",
            UiEvent::ArrowClick => "ArrowClick",
            UiEvent::ProjectsLinkClick => "ProjectsLinkClick",
            UiEvent::AboutClick => "AboutClick",
            UiEvent::FilterClick { .. } => "FilterClick",
            UiEvent::FlowPillClick { .. } => "FlowPillClick",
            UiEvent::ModalCloseClick => "ModalCloseClick",
            UiEvent::OverlayClick { .. } => "OverlayClick",
            UiEvent::KeyDown { .. } => "KeyDown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryDocument, MemoryNode};

    fn page(filters: &[&str], cards: &[&str]) -> (MemoryDocument, ViewController<MemoryNode>) {
        let mut doc = MemoryDocument::new();
        doc.append(MemoryNode::new("section").with_id("hero"));
        for id in filters {
            doc.append(
                MemoryNode::new("button")
                    .with_class("filter-btn")
                    .with_attribute("data-filter", id),
            );
        }
        for id in cards {
            doc.append(
                MemoryNode::new("article")
                    .with_class("project-card")
                    .with_attribute("data-collection", id),
            );
        }
        doc.append(MemoryNode::new("div").with_id("projectsGrid"));
        doc.append(MemoryNode::new("div").with_id("aboutBook"));
        let controller = ViewController::from_source(&doc, ViewConfig::default());
        (doc, controller)
    }

    fn visible(controller: &ViewController<MemoryNode>) -> Vec<String> {
        controller
            .elements()
            .cards
            .iter()
            .filter(|card| card.is_displayed())
            .filter_map(|card| card.attribute("data-collection"))
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let (_doc, controller) = page(&["all", "a", "b"], &["a", "b"]);
        assert_eq!(controller.current_filter(), &FilterSelection::All);
        assert!(!controller.is_modal_open());

        let filters = &controller.elements().filters;
        assert!(filters[0].has_class("active"));
        assert_eq!(filters[0].attribute(ARIA_SELECTED).as_deref(), Some("true"));
        assert_eq!(filters[1].attribute(ARIA_SELECTED).as_deref(), Some("false"));
        assert_eq!(
            controller.elements().modal.as_ref().unwrap().attribute(ARIA_HIDDEN).as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_markup_preselected_filter_is_normalized() {
        let mut doc = MemoryDocument::new();
        doc.append(
            MemoryNode::new("button")
                .with_class("filter-btn")
                .with_class("active")
                .with_attribute("data-filter", "a"),
        );
        let controller = ViewController::from_source(&doc, ViewConfig::default());
        assert!(!controller.elements().filters[0].has_class("active"));
        assert_eq!(controller.current_filter(), &FilterSelection::All);
    }

    #[test]
    fn test_filter_click_updates_cards() {
        let (_doc, mut controller) = page(&["all", "a", "b"], &["a", "a", "b"]);
        controller.dispatch(UiEvent::FilterClick { index: 2 });
        assert_eq!(controller.current_filter().as_str(), "b");
        assert_eq!(visible(&controller), vec!["b"]);

        controller.dispatch(UiEvent::FilterClick { index: 0 });
        assert_eq!(visible(&controller), vec!["a", "a", "b"]);
    }

    #[test]
    fn test_filter_click_out_of_range_is_noop() {
        let (_doc, mut controller) = page(&["all", "a"], &["a"]);
        controller.dispatch(UiEvent::FilterClick { index: 9 });
        assert_eq!(controller.current_filter(), &FilterSelection::All);
        assert!(controller.elements().filters[0].has_class("active"));
    }

    #[test]
    fn test_set_active_filter_ignores_foreign_control() {
        let (_doc, mut controller) = page(&["all", "a"], &["a"]);
        let stranger = MemoryNode::new("button").with_attribute("data-filter", "a");
        controller.set_active_filter(&stranger);
        assert_eq!(controller.current_filter(), &FilterSelection::All);
        assert!(!stranger.has_class("active"));
    }

    #[test]
    fn test_apply_filter_does_not_touch_current_filter() {
        let (_doc, controller) = page(&["all", "a"], &["a", "b"]);
        controller.apply_filter("b");
        assert_eq!(visible(&controller), vec!["b"]);
        assert_eq!(controller.current_filter(), &FilterSelection::All);
    }

    #[test]
    fn test_primary_view_toggle() {
        let (doc, controller) = page(&[], &[]);
        let hero = controller.elements().hero.clone().unwrap();
        let body = doc.body().unwrap();

        controller.hide_primary_view();
        controller.hide_primary_view();
        assert_eq!(hero.classes(), vec!["hidden"]);
        assert!(body.has_class("hero-hidden"));

        controller.show_primary_view();
        assert!(!hero.has_class("hidden"));
        assert!(!body.has_class("hero-hidden"));
    }

    #[test]
    fn test_navigate_scrolls_grid() {
        let (_doc, mut controller) = page(&["all", "a", "b"], &["a", "b"]);
        controller.navigate_to_collection("a");
        assert_eq!(controller.current_filter().as_str(), "a");
        assert_eq!(visible(&controller), vec!["a"]);
        assert_eq!(
            controller.elements().projects_grid.as_ref().unwrap().scroll_requests(),
            1
        );
    }

    #[test]
    fn test_navigate_blank_is_noop() {
        let (_doc, mut controller) = page(&["all", "a"], &["a"]);
        controller.navigate_to_collection("  ");
        assert_eq!(
            controller.elements().projects_grid.as_ref().unwrap().scroll_requests(),
            0
        );
    }

    #[test]
    fn test_modal_open_close_restores_overflow() {
        let (doc, mut controller) = page(&[], &[]);
        let body = doc.body().unwrap();
        body.set_style_property("overflow", "auto");

        controller.dispatch(UiEvent::AboutClick);
        assert!(controller.is_modal_open());
        assert_eq!(body.style_property("overflow"), "hidden");

        // A second open must not record "hidden" as the value to restore
        controller.show_modal();
        controller.dispatch(UiEvent::ModalCloseClick);
        assert!(!controller.is_modal_open());
        assert_eq!(body.style_property("overflow"), "auto");
    }

    #[test]
    fn test_escape_only_acts_when_open() {
        let (doc, mut controller) = page(&[], &[]);
        let body = doc.body().unwrap();
        body.set_style_property("overflow", "scroll");

        controller.dispatch(UiEvent::KeyDown { key: "Escape".into() });
        assert_eq!(body.style_property("overflow"), "scroll");

        controller.show_modal();
        controller.dispatch(UiEvent::KeyDown { key: "Enter".into() });
        assert!(controller.is_modal_open());
        controller.dispatch(UiEvent::KeyDown { key: "Esc".into() });
        assert!(!controller.is_modal_open());
        assert_eq!(body.style_property("overflow"), "scroll");
    }

    #[test]
    fn test_page_without_markup_never_panics() {
        let doc = MemoryDocument::without_body();
        let mut controller = ViewController::from_source(&doc, ViewConfig::default());
        controller.dispatch(UiEvent::BrandClick);
        controller.dispatch(UiEvent::ExploreClick);
        controller.dispatch(UiEvent::AboutClick);
        controller.dispatch(UiEvent::FilterClick { index: 0 });
        controller.dispatch(UiEvent::FlowPillClick { index: 0 });
        controller.dispatch(UiEvent::OverlayClick { target: None });
        controller.dispatch(UiEvent::KeyDown { key: "Escape".into() });
        controller.navigate_to_collection("a");
        assert_eq!(controller.current_filter(), &FilterSelection::All);
        assert!(!controller.is_modal_open());
    }

    #[test]
    fn test_modal_without_body_still_toggles() {
        let mut doc = MemoryDocument::without_body();
        let modal = doc.append(MemoryNode::new("div").with_id("aboutBook"));
        let mut controller = ViewController::from_source(&doc, ViewConfig::default());
        controller.show_modal();
        assert!(modal.has_class("active"));
        controller.hide_modal();
        assert!(!modal.has_class("active"));
        assert_eq!(modal.attribute(ARIA_HIDDEN).as_deref(), Some("true"));
    }
}
