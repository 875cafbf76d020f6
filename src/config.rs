//! View configuration - the markup contract between the site and the controller
//!
//! Every field has a default matching the site's stock markup, so a page only
//! needs to override what it renames. Overrides arrive as JSON in an inline
//! `<script type="application/json" id="folio-config">` block.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Element id of the optional inline configuration script.
pub const CONFIG_SCRIPT_ID: &str = "folio-config";

/// Complete controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub selectors: Selectors,
    pub classes: ClassNames,
    pub attributes: DataAttributes,
    pub keys: KeyBindings,
}

impl ViewConfig {
    /// Parse a JSON override, layering it over the defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

/// CSS selectors used to resolve the element registry.
///
/// Single-element entries use the first match; collection entries use all
/// matches in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub hero: String,
    pub about_triggers: String,
    pub explore_button: String,
    pub arrow: String,
    pub projects_link: String,
    pub brand_links: String,
    pub filters: String,
    pub cards: String,
    pub flow_pills: String,
    pub projects_grid: String,
    pub modal: String,
    pub modal_close: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            hero: "#hero".to_string(),
            about_triggers: "#aboutLink, #aboutBtn".to_string(),
            explore_button: "#exploreBtn".to_string(),
            arrow: ".scroll-arrow".to_string(),
            projects_link: "#projectsLink".to_string(),
            brand_links: ".logo, .brand".to_string(),
            filters: ".filter-btn".to_string(),
            cards: ".project-card".to_string(),
            flow_pills: ".flow-pill".to_string(),
            projects_grid: "#projectsGrid".to_string(),
            modal: "#aboutBook".to_string(),
            modal_close: "#closeBook".to_string(),
        }
    }
}

/// Class names toggled by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    /// Added to the hero section while the primary view is hidden
    pub hidden_class: String,
    /// Added to `<body>` while the primary view is hidden
    pub body_marker_class: String,
    /// Marks the selected filter control
    pub active_class: String,
    /// Marks the modal as open
    pub open_class: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            hidden_class: "hidden".to_string(),
            body_marker_class: "hero-hidden".to_string(),
            active_class: "active".to_string(),
            open_class: "active".to_string(),
        }
    }
}

/// Data attributes carrying collection identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataAttributes {
    pub filter: String,
    pub card: String,
    pub pill: String,
}

impl Default for DataAttributes {
    fn default() -> Self {
        Self {
            filter: "data-filter".to_string(),
            card: "data-collection".to_string(),
            pill: "data-collection".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// `KeyboardEvent.key` values that close the modal
    pub close_modal: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            close_modal: vec!["Escape".to_string(), "Esc".to_string()],
        }
    }
}

impl KeyBindings {
    pub fn closes_modal(&self, key: &str) -> bool {
        self.close_modal.iter().any(|k| k == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_override_is_default() {
        assert_eq!(ViewConfig::from_json("").unwrap(), ViewConfig::default());
        assert_eq!(ViewConfig::from_json("  \n").unwrap(), ViewConfig::default());
        assert_eq!(ViewConfig::from_json("{}").unwrap(), ViewConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = ViewConfig::from_json(
            r##"{"selectors": {"modal": "#book"}, "classes": {"open_class": "open"}}"##,
        )
        .unwrap();

        assert_eq!(config.selectors.modal, "#book");
        assert_eq!(config.selectors.hero, "#hero");
        assert_eq!(config.classes.open_class, "open");
        assert_eq!(config.classes.active_class, "active");
        assert_eq!(config.attributes, DataAttributes::default());
    }

    #[test]
    fn test_malformed_override_is_error() {
        assert!(ViewConfig::from_json("{\"selectors\": ").is_err());
        assert!(ViewConfig::from_json("{\"keys\": {\"close_modal\": 3}}").is_err());
    }

    #[test]
    fn test_close_keys() {
        let keys = KeyBindings::default();
        assert!(keys.closes_modal("Escape"));
        assert!(keys.closes_modal("Esc"));
        assert!(!keys.closes_modal("Enter"));
        assert!(!keys.closes_modal("escape"));
    }
}
