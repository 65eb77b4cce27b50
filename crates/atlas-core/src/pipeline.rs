//! The filter/sort/truncate pipeline.
//!
//! `apply` is the single recompute entry point: the owning session runs it
//! in full whenever the dataset or the selection changes. No incremental
//! diffing, no hidden dependency tracking.

use tracing::debug;

use atlas_model::{CountryRecord, SortKey};

use crate::collate::compare_names;
use crate::selection::SelectionState;

/// Result size when top-10 truncation is active.
pub const TOP_N_LIMIT: usize = 10;

/// True when `country` satisfies both active filters (AND semantics).
///
/// The selection setters keep the two filters mutually exclusive, but the
/// predicates are applied independently regardless. Continent and
/// sub-region matching is exact and case-sensitive; filter values come from
/// the facet lists, so they are canonical dataset strings.
fn matches(country: &CountryRecord, selection: &SelectionState) -> bool {
    let continent_ok = match selection.continent.as_deref() {
        Some(continent) => country.continents.iter().any(|c| c == continent),
        None => true,
    };
    let subregion_ok = match selection.subregion.as_deref() {
        Some(subregion) => country.subregion.as_deref() == Some(subregion),
        None => true,
    };
    continent_ok && subregion_ok
}

/// Produce the ordered subset of `dataset` satisfying `selection`.
///
/// Stages run in strict order: continent filter, sub-region filter, stable
/// sort by the selected key, then top-10 truncation.
///
/// Truncation keeps the first [`TOP_N_LIMIT`] entries of the
/// already-sorted result; it never re-sorts by the top-N metric. Sorting by
/// name while truncating by population therefore yields the first ten
/// alphabetically, not the ten most populous.
///
/// Total over every input: an empty dataset, filters matching nothing, and
/// absent optional fields all yield a valid (possibly empty) result.
pub fn apply<'a>(
    dataset: &'a [CountryRecord],
    selection: &SelectionState,
) -> Vec<&'a CountryRecord> {
    let mut result: Vec<&CountryRecord> = dataset
        .iter()
        .filter(|country| matches(country, selection))
        .collect();
    let filtered = result.len();

    // Vec::sort_by is stable: equal keys keep dataset input order.
    match selection.sort_key {
        SortKey::Name => result.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::Population => result.sort_by(|a, b| b.population.cmp(&a.population)),
        SortKey::Area => result.sort_by(|a, b| b.area_km2.total_cmp(&a.area_km2)),
    }

    if selection.top_n.is_active() {
        result.truncate(TOP_N_LIMIT);
    }

    debug!(
        total = dataset.len(),
        filtered,
        shown = result.len(),
        sort_key = %selection.sort_key,
        top_n = %selection.top_n,
        "pipeline applied"
    );
    result
}

/// Number of records satisfying the active filters, before truncation.
///
/// The presentation layer pairs this with the truncated result for the
/// status line.
pub fn filtered_count(dataset: &[CountryRecord], selection: &SelectionState) -> usize {
    dataset
        .iter()
        .filter(|country| matches(country, selection))
        .count()
}
