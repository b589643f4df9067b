//! Tab descriptors: the routing keys of the dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one of the dashboard's fixed views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabId {
    Overview,
    Correlation,
    ModelsWithoutLag,
    ModelsWithLag,
    Comparison,
    Interpretability,
    Data,
}

impl TabId {
    /// All tabs in display order.
    pub const ALL: [Self; 7] = [
        Self::Overview,
        Self::Correlation,
        Self::ModelsWithoutLag,
        Self::ModelsWithLag,
        Self::Comparison,
        Self::Interpretability,
        Self::Data,
    ];

    /// The string identifier used for selection and routing.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Correlation => "correlation",
            Self::ModelsWithoutLag => "models-without-lag",
            Self::ModelsWithLag => "models-with-lag",
            Self::Comparison => "comparison",
            Self::Interpretability => "interpretability",
            Self::Data => "data",
        }
    }

    /// Resolve a string identifier. Matching is exact.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.as_str() == id)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for a tab. Only `id` takes part in selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    pub id: TabId,
    pub name: String,
    pub icon: String,
    pub shortcut: char,
}

impl TabDescriptor {
    #[must_use]
    pub fn new(id: TabId, name: &str, icon: &str, shortcut: char) -> Self {
        Self {
            id,
            name: name.to_string(),
            icon: icon.to_string(),
            shortcut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_roundtrip() {
        for tab in TabId::ALL {
            assert_eq!(TabId::from_id(tab.as_str()), Some(tab));
        }
    }

    #[test]
    fn test_from_id_is_exact() {
        assert_eq!(TabId::from_id("Overview"), None);
        assert_eq!(TabId::from_id(" data"), None);
        assert_eq!(TabId::from_id(""), None);
    }

    #[test]
    fn test_serde_matches_as_str() {
        let json = serde_json::to_string(&TabId::ModelsWithLag).unwrap();
        assert_eq!(json, "\"models-with-lag\"");
    }
}
