pub mod country;
pub mod facets;
pub mod selection;

pub use country::{CountryRecord, MISSING_FIELD_PLACEHOLDER};
pub use facets::FacetSet;
pub use selection::{SortKey, TopN};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_record_round_trips_through_json() {
        let record = CountryRecord {
            code: "NZL".to_string(),
            name: "New Zealand".to_string(),
            capital: Some("Wellington".to_string()),
            population: 5_122_600,
            area_km2: 270_467.0,
            continents: vec!["Oceania".to_string()],
            subregion: Some("Australia and New Zealand".to_string()),
            flag_url: "https://flagcdn.com/nz.svg".to_string(),
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: CountryRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }

    #[test]
    fn selection_enums_serialize_snake_case() {
        let json = serde_json::to_string(&SortKey::Population).expect("serialize sort key");
        assert_eq!(json, "\"population\"");
        let json = serde_json::to_string(&TopN::None).expect("serialize top-n");
        assert_eq!(json, "\"none\"");
    }
}
