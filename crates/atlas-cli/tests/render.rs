//! Rendering tests for the list output.

use atlas_cli::render::{ListPayload, country_table, status_line};
use atlas_core::selection::SelectionState;
use atlas_core::{apply, filtered_count};
use atlas_model::CountryRecord;

fn dataset() -> Vec<CountryRecord> {
    vec![
        CountryRecord {
            code: "JPN".to_string(),
            name: "Japan".to_string(),
            capital: Some("Tokyo".to_string()),
            population: 125_416_877,
            area_km2: 377_930.0,
            continents: vec!["Asia".to_string()],
            subregion: Some("Eastern Asia".to_string()),
            flag_url: "https://flagcdn.com/jp.svg".to_string(),
        },
        CountryRecord {
            code: "ATA".to_string(),
            name: "Antarctica".to_string(),
            capital: None,
            population: 1_000,
            area_km2: 14_200_000.0,
            continents: vec!["Antarctica".to_string()],
            subregion: None,
            flag_url: "https://flagcdn.com/aq.svg".to_string(),
        },
    ]
}

#[test]
fn list_payload_json_is_stable() {
    let countries = dataset();
    let mut selection = SelectionState::new();
    selection.set_continent("Asia");

    let rows = apply(&countries, &selection);
    let payload = ListPayload {
        selection: &selection,
        total: countries.len(),
        filtered: filtered_count(&countries, &selection),
        countries: &rows,
    };
    insta::assert_snapshot!(serde_json::to_string_pretty(&payload).unwrap());
}

#[test]
fn table_renders_placeholders_for_absent_fields() {
    let countries = dataset();
    let selection = SelectionState::new();
    let rows = apply(&countries, &selection);

    let mut table = country_table(&rows);
    table.force_no_tty();
    let rendered = table.to_string();

    assert!(rendered.contains("Japan"));
    assert!(rendered.contains("Tokyo"));
    assert!(rendered.contains("125,416,877"));
    // Antarctica has neither capital nor sub-region.
    assert!(rendered.contains("N/A"));
    assert!(rendered.contains("14,200,000"));
}

#[test]
fn status_line_reports_shown_and_filtered_counts() {
    let countries = dataset();
    let mut selection = SelectionState::new();
    selection.set_continent("Asia");

    let rows = apply(&countries, &selection);
    let filtered = filtered_count(&countries, &selection);
    assert_eq!(
        status_line(rows.len(), filtered, &selection),
        "Showing 1 countries (continent = Asia)"
    );
}
