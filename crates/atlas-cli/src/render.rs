//! Terminal rendering of the country list, facet lists, and status line.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use atlas_core::selection::SelectionState;
use atlas_model::{CountryRecord, FacetSet};

/// Machine-readable output for `list --output json`: the ordered subset
/// plus the selection and counts that produced it.
#[derive(Serialize)]
pub struct ListPayload<'a> {
    pub selection: &'a SelectionState,
    pub total: usize,
    pub filtered: usize,
    pub countries: &'a [&'a CountryRecord],
}

/// Render the ordered subset as the country table.
pub fn country_table(rows: &[&CountryRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Capital"),
        header_cell("Population"),
        header_cell("Area km²"),
        header_cell("Continents"),
        header_cell("Sub-region"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for country in rows {
        table.add_row(vec![
            Cell::new(&country.name).add_attribute(Attribute::Bold),
            optional_cell(country.capital.as_deref()),
            Cell::new(format_population(country.population)),
            Cell::new(format_area(country.area_km2)),
            Cell::new(country.continents_display()),
            optional_cell(country.subregion.as_deref()),
        ]);
    }
    table
}

/// Render the two facet lists side by side.
pub fn facet_table(facets: &FacetSet) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Continents"), header_cell("Sub-regions")]);
    apply_table_style(&mut table);
    let rows = facets.continents.len().max(facets.subregions.len());
    for i in 0..rows {
        table.add_row(vec![
            facet_cell(facets.continents.get(i)),
            facet_cell(facets.subregions.get(i)),
        ]);
    }
    table
}

/// Status line under the table.
pub fn status_line(shown: usize, filtered: usize, selection: &SelectionState) -> String {
    let count = if shown == filtered {
        format!("Showing {shown} countries")
    } else {
        format!("Showing {shown} of {filtered} countries")
    };
    format!("{count} ({})", selection.filter_display())
}

/// Thousands-separated population, e.g. `125,000,000`.
pub fn format_population(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Thousands-separated area, keeping any fractional digits, e.g.
/// `8,515,767` or `0.44`.
pub fn format_area(value: f64) -> String {
    let plain = format!("{value}");
    match plain.split_once('.') {
        Some((int, frac)) => format!("{}.{frac}", group_digits(int)),
        None => group_digits(&plain),
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => Cell::new(atlas_model::MISSING_FIELD_PLACEHOLDER).fg(Color::DarkGrey),
    }
}

fn facet_cell(value: Option<&String>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => Cell::new("").fg(Color::DarkGrey),
    }
}
