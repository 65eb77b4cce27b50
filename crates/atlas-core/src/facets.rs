//! Facet extraction: the distinct continents and sub-regions of a dataset.

use std::collections::BTreeSet;

use atlas_model::{CountryRecord, FacetSet};

/// Derive the sorted, deduplicated facet lists from the full dataset.
///
/// Pure and deterministic. Callers recompute only when the dataset changes,
/// never on selection changes: the lists derive from the *entire* dataset,
/// so they must stay identical across filter changes. An empty dataset
/// yields two empty lists.
pub fn extract_facets(dataset: &[CountryRecord]) -> FacetSet {
    let continents: BTreeSet<&str> = dataset
        .iter()
        .flat_map(|country| country.continents.iter().map(String::as_str))
        .collect();
    let subregions: BTreeSet<&str> = dataset
        .iter()
        .filter_map(|country| country.subregion.as_deref())
        .collect();
    FacetSet {
        continents: continents.into_iter().map(str::to_string).collect(),
        subregions: subregions.into_iter().map(str::to_string).collect(),
    }
}
