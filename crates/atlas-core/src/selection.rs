//! Session selection state: filters, sort key, and top-10 metric.

use serde::{Deserialize, Serialize};

use atlas_model::{SortKey, TopN};

/// The current filter/sort/truncate configuration for one session.
///
/// Invariant: at most one of `continent` and `subregion` is set. The two
/// filter setters enforce this at the boundary (setting one clears the
/// other), so no reachable state violates it. All mutation goes through the
/// four named setters; the presentation layer maps its input events onto
/// them 1:1, with an empty string meaning "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub continent: Option<String>,
    pub subregion: Option<String>,
    pub sort_key: SortKey,
    pub top_n: TopN,
}

impl SelectionState {
    /// Session defaults: no filters, sorted by name, no truncation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the continent filter; clears the sub-region filter.
    pub fn set_continent(&mut self, value: &str) {
        self.continent = non_empty(value);
        self.subregion = None;
    }

    /// Set the sub-region filter; clears the continent filter.
    pub fn set_subregion(&mut self, value: &str) {
        self.subregion = non_empty(value);
        self.continent = None;
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    pub fn set_top_n(&mut self, metric: TopN) {
        self.top_n = metric;
    }

    /// Human-readable description of the active filter for the status line.
    pub fn filter_display(&self) -> String {
        match (&self.continent, &self.subregion) {
            (Some(continent), _) => format!("continent = {continent}"),
            (_, Some(subregion)) => format!("sub-region = {subregion}"),
            (None, None) => "no filter".to_string(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
