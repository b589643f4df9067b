//! The view controller.
//!
//! [`Dashboard`] owns the only mutable state in the program: which tab is
//! selected. Everything it renders is derived on demand from a borrowed
//! [`StudyCatalog`], so rendering is a pure function of the selection.
//!
//! Selection is total. Any string can be selected; strings that do not
//! name a tab put the controller in [`Selection::Unknown`] and render the
//! [`ViewBlock::NotFound`] fallback instead of failing.

mod blocks;

pub use blocks::{
    CategoryView, ComparisonView, CorrelationRow, CorrelationView, DataView,
    InterpretabilityView, OverviewView, ViewBlock,
};

use crate::model::{StudyCatalog, TabDescriptor, TabId};
use serde::Serialize;

/// Current state of the tab state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "state", content = "id")]
pub enum Selection {
    Tab(TabId),
    Unknown(String),
}

impl Selection {
    /// The identifier as it was selected.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Tab(tab) => tab.as_str(),
            Self::Unknown(id) => id,
        }
    }
}

/// Tab selection over an immutable study catalog.
#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    catalog: &'a StudyCatalog,
    selection: Selection,
}

impl<'a> Dashboard<'a> {
    /// Start on the first tab descriptor.
    #[must_use]
    pub fn new(catalog: &'a StudyCatalog) -> Self {
        let first = catalog.tabs.first().map_or(TabId::Overview, |t| t.id);
        Self {
            catalog,
            selection: Selection::Tab(first),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a StudyCatalog {
        self.catalog
    }

    #[must_use]
    pub fn tabs(&self) -> &'a [TabDescriptor] {
        &self.catalog.tabs
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Selected tab, `None` in the unknown state.
    #[must_use]
    pub const fn active_tab(&self) -> Option<TabId> {
        match self.selection {
            Selection::Tab(tab) => Some(tab),
            Selection::Unknown(_) => None,
        }
    }

    /// Position of the selected tab among the descriptors.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        let tab = self.active_tab()?;
        self.catalog.tabs.iter().position(|t| t.id == tab)
    }

    /// Select by identifier. Never fails.
    pub fn select_tab(&mut self, id: &str) {
        let next = self
            .catalog
            .tabs
            .iter()
            .find(|t| t.id.as_str() == id)
            .map_or_else(|| Selection::Unknown(id.to_string()), |t| Selection::Tab(t.id));

        if next != self.selection {
            tracing::debug!(from = self.selection.id(), to = next.id(), "tab selected");
        }
        if let Selection::Unknown(_) = next {
            tracing::debug!(id, "unknown tab identifier, showing fallback view");
        }
        self.selection = next;
    }

    /// Select by descriptor position. Returns `false` and leaves the
    /// selection unchanged when `index` is out of range.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.catalog.tabs.get(index) {
            Some(descriptor) => {
                self.set_tab(descriptor.id);
                true
            }
            None => false,
        }
    }

    /// Move to the next tab, wrapping. From the unknown state, go to the first.
    pub fn next_tab(&mut self) {
        let len = self.catalog.tabs.len();
        if len == 0 {
            return;
        }
        let index = self.active_index().map_or(0, |i| (i + 1) % len);
        self.select_index(index);
    }

    /// Move to the previous tab, wrapping. From the unknown state, go to the last.
    pub fn prev_tab(&mut self) {
        let len = self.catalog.tabs.len();
        if len == 0 {
            return;
        }
        let index = self.active_index().map_or(len - 1, |i| (i + len - 1) % len);
        self.select_index(index);
    }

    fn set_tab(&mut self, tab: TabId) {
        let next = Selection::Tab(tab);
        if next != self.selection {
            tracing::debug!(from = self.selection.id(), to = tab.as_str(), "tab selected");
        }
        self.selection = next;
    }

    /// The content block for the current selection.
    #[must_use]
    pub fn render_active_view(&self) -> ViewBlock {
        match &self.selection {
            Selection::Tab(tab) => ViewBlock::for_tab(self.catalog, *tab),
            Selection::Unknown(id) => ViewBlock::NotFound { id: id.clone() },
        }
    }

    /// Every tab's block, in descriptor order.
    #[must_use]
    pub fn render_all(&self) -> Vec<ViewBlock> {
        self.catalog
            .tabs
            .iter()
            .map(|t| ViewBlock::for_tab(self.catalog, t.id))
            .collect()
    }
}
