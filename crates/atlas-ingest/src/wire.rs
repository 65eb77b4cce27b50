//! Wire types for the REST Countries v3.1 payload and their normalization
//! into [`CountryRecord`].
//!
//! Only the fields the application consumes are declared; everything else in
//! the payload is ignored on deserialization. Normalization is lenient:
//! records that cannot serve as list entries (no identity code, no
//! continent) are skipped with a warning instead of failing the load.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::warn;

use atlas_model::CountryRecord;

#[derive(Debug, Deserialize)]
pub struct RawCountry {
    #[serde(default)]
    pub name: RawName,
    /// The source lists all capitals; only the first is displayed.
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub continents: Vec<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub flags: RawFlags,
    #[serde(default)]
    pub cca3: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawName {
    #[serde(default)]
    pub common: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawFlags {
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub png: Option<String>,
}

/// Normalize the raw payload into the application model.
///
/// - records without a `cca3` code or without continents are skipped;
/// - duplicate `cca3` codes keep the first occurrence;
/// - empty optional strings become `None`;
/// - the flag URL prefers SVG, falling back to PNG.
pub fn normalize(raw: Vec<RawCountry>) -> Vec<CountryRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut records = Vec::with_capacity(raw.len());
    for country in raw {
        let code = country.cca3.trim();
        if code.is_empty() {
            warn!(name = %country.name.common, "skipping record without cca3 code");
            continue;
        }
        if country.continents.is_empty() {
            warn!(code, "skipping record without continents");
            continue;
        }
        if !seen.insert(code.to_string()) {
            warn!(code, "skipping duplicate record");
            continue;
        }
        records.push(CountryRecord {
            code: code.to_string(),
            name: country.name.common,
            capital: country.capital.into_iter().find(|c| !c.trim().is_empty()),
            population: country.population,
            area_km2: country.area,
            continents: country.continents,
            subregion: country.subregion.filter(|s| !s.trim().is_empty()),
            flag_url: country.flags.svg.or(country.flags.png).unwrap_or_default(),
        });
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Vec<RawCountry> {
        serde_json::from_str(json).expect("decode fixture")
    }

    #[test]
    fn normalizes_a_complete_record() {
        let raw = decode(
            r#"[{
                "name": {"common": "Japan", "official": "Japan"},
                "capital": ["Tokyo"],
                "population": 123950000,
                "area": 377930.0,
                "continents": ["Asia"],
                "subregion": "Eastern Asia",
                "flags": {"svg": "https://flagcdn.com/jp.svg", "png": "https://flagcdn.com/w320/jp.png"},
                "cca3": "JPN"
            }]"#,
        );
        let records = normalize(raw);
        assert_eq!(records.len(), 1);
        let japan = &records[0];
        assert_eq!(japan.code, "JPN");
        assert_eq!(japan.name, "Japan");
        assert_eq!(japan.capital.as_deref(), Some("Tokyo"));
        assert_eq!(japan.subregion.as_deref(), Some("Eastern Asia"));
        assert_eq!(japan.flag_url, "https://flagcdn.com/jp.svg");
    }

    #[test]
    fn missing_optionals_become_none() {
        let raw = decode(
            r#"[{
                "name": {"common": "Antarctica"},
                "population": 1000,
                "area": 14000000.0,
                "continents": ["Antarctica"],
                "flags": {"png": "https://flagcdn.com/w320/aq.png"},
                "cca3": "ATA"
            }]"#,
        );
        let records = normalize(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].capital, None);
        assert_eq!(records[0].subregion, None);
        assert_eq!(records[0].flag_url, "https://flagcdn.com/w320/aq.png");
    }

    #[test]
    fn skips_records_without_identity_or_continent() {
        let raw = decode(
            r#"[
                {"name": {"common": "No Code"}, "continents": ["Asia"], "cca3": ""},
                {"name": {"common": "No Continent"}, "continents": [], "cca3": "XXX"},
                {"name": {"common": "Kept"}, "continents": ["Asia"], "cca3": "KEP"}
            ]"#,
        );
        let records = normalize(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "KEP");
    }

    #[test]
    fn duplicate_codes_keep_the_first_record() {
        let raw = decode(
            r#"[
                {"name": {"common": "First"}, "continents": ["Asia"], "cca3": "DUP"},
                {"name": {"common": "Second"}, "continents": ["Asia"], "cca3": "DUP"}
            ]"#,
        );
        let records = normalize(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "First");
    }

    #[test]
    fn empty_subregion_string_normalizes_to_none() {
        let raw = decode(
            r#"[{"name": {"common": "X"}, "continents": ["Asia"], "subregion": "", "cca3": "XAA"}]"#,
        );
        let records = normalize(raw);
        assert_eq!(records[0].subregion, None);
    }
}
