//! Collection filter selection

use std::fmt;

/// Sentinel identifier that admits every card.
pub const ALL: &str = "all";

/// The currently selected collection filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterSelection {
    #[default]
    All,
    Collection(String),
}

impl FilterSelection {
    /// Parse a control's identifier. Blank or missing identifiers select everything.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | ALL => FilterSelection::All,
            id => FilterSelection::Collection(id.to_string()),
        }
    }

    pub fn from_attribute(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterSelection::All => ALL,
            FilterSelection::Collection(id) => id,
        }
    }

    /// Whether a card tagged with `collection` is visible under this selection.
    ///
    /// Untagged cards only show under [`FilterSelection::All`].
    pub fn admits(&self, collection: Option<&str>) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Collection(id) => collection.map(str::trim) == Some(id.as_str()),
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
