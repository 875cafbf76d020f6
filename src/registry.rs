//! Element registry - every page element the controller touches
//!
//! Resolved once at boot. Single elements are optional and collections may be
//! empty: a page that lacks some markup simply loses that feature.

use crate::config::Selectors;
use crate::dom::NodeSource;

#[derive(Debug, Clone)]
pub struct ElementRegistry<N> {
    pub body: Option<N>,
    pub hero: Option<N>,
    pub explore_button: Option<N>,
    pub arrow: Option<N>,
    pub projects_link: Option<N>,
    pub projects_grid: Option<N>,
    pub modal: Option<N>,
    pub modal_close: Option<N>,
    /// About link and about button
    pub about_triggers: Vec<N>,
    /// Logo and brand links
    pub brand_links: Vec<N>,
    pub filters: Vec<N>,
    pub cards: Vec<N>,
    pub flow_pills: Vec<N>,
}

impl<N> Default for ElementRegistry<N> {
    fn default() -> Self {
        Self {
            body: None,
            hero: None,
            explore_button: None,
            arrow: None,
            projects_link: None,
            projects_grid: None,
            modal: None,
            modal_close: None,
            about_triggers: Vec::new(),
            brand_links: Vec::new(),
            filters: Vec::new(),
            cards: Vec::new(),
            flow_pills: Vec::new(),
        }
    }
}

impl<N> ElementRegistry<N> {
    /// Look up every registry entry in `source`.
    pub fn resolve<S>(source: &S, selectors: &Selectors) -> Self
    where
        S: NodeSource<Node = N>,
    {
        Self {
            body: source.body(),
            hero: source.query_one(&selectors.hero),
            explore_button: source.query_one(&selectors.explore_button),
            arrow: source.query_one(&selectors.arrow),
            projects_link: source.query_one(&selectors.projects_link),
            projects_grid: source.query_one(&selectors.projects_grid),
            modal: source.query_one(&selectors.modal),
            modal_close: source.query_one(&selectors.modal_close),
            about_triggers: source.query_all(&selectors.about_triggers),
            brand_links: source.query_all(&selectors.brand_links),
            filters: source.query_all(&selectors.filters),
            cards: source.query_all(&selectors.cards),
            flow_pills: source.query_all(&selectors.flow_pills),
        }
    }

    /// One-line inventory for the boot log.
    pub fn summary(&self) -> String {
        let flag = |present: bool| if present { "yes" } else { "no" };
        format!(
            "hero={} grid={} modal={} filters={} cards={} pills={} about={} brand={}",
            flag(self.hero.is_some()),
            flag(self.projects_grid.is_some()),
            flag(self.modal.is_some()),
            self.filters.len(),
            self.cards.len(),
            self.flow_pills.len(),
            self.about_triggers.len(),
            self.brand_links.len(),
        )
    }
}
