use serde::{Deserialize, Serialize};

/// The distinct categorical values present in a dataset, used to populate
/// the two filter controls.
///
/// Invariant: both lists are sorted ascending by default string ordering and
/// contain no duplicates. `subregions` excludes countries lacking a
/// sub-region. A `FacetSet` is always derived from the *full* dataset, never
/// from a filtered view, so it stays identical across filter changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSet {
    pub continents: Vec<String>,
    pub subregions: Vec<String>,
}

impl FacetSet {
    pub fn is_empty(&self) -> bool {
        self.continents.is_empty() && self.subregions.is_empty()
    }
}
