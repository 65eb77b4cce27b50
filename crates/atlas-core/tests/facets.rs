//! Tests for facet extraction.

use atlas_core::extract_facets;
use atlas_model::CountryRecord;

fn country(code: &str, continents: &[&str], subregion: Option<&str>) -> CountryRecord {
    CountryRecord {
        code: code.to_string(),
        name: code.to_string(),
        capital: None,
        population: 0,
        area_km2: 0.0,
        continents: continents.iter().map(|c| (*c).to_string()).collect(),
        subregion: subregion.map(str::to_string),
        flag_url: String::new(),
    }
}

#[test]
fn empty_dataset_yields_empty_facet_lists() {
    let facets = extract_facets(&[]);
    assert!(facets.continents.is_empty());
    assert!(facets.subregions.is_empty());
    assert!(facets.is_empty());
}

#[test]
fn continents_are_flattened_deduplicated_and_sorted() {
    let dataset = vec![
        country("TUR", &["Asia", "Europe"], Some("Western Asia")),
        country("FRA", &["Europe"], Some("Western Europe")),
        country("EGY", &["Africa", "Asia"], Some("Northern Africa")),
    ];
    let facets = extract_facets(&dataset);
    assert_eq!(facets.continents, vec!["Africa", "Asia", "Europe"]);
}

#[test]
fn subregions_skip_countries_without_one() {
    let dataset = vec![
        country("ATA", &["Antarctica"], None),
        country("NOR", &["Europe"], Some("Northern Europe")),
        country("SWE", &["Europe"], Some("Northern Europe")),
    ];
    let facets = extract_facets(&dataset);
    assert_eq!(facets.subregions, vec!["Northern Europe"]);
    assert_eq!(facets.continents, vec!["Antarctica", "Europe"]);
}
