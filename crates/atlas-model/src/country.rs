use serde::{Deserialize, Serialize};

/// Placeholder shown for optional fields that are absent from the source data.
pub const MISSING_FIELD_PLACEHOLDER: &str = "N/A";

/// A single country as normalized by the dataset loader.
///
/// Records are immutable once loaded. `code` (the ISO 3166-1 alpha-3 code
/// from the source) is unique across the dataset and serves as the stable
/// identity for list rendering and deduplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Unique identifier (`cca3` in the source payload).
    pub code: String,
    /// Common display name.
    pub name: String,
    /// Primary capital city. Several territories have none.
    pub capital: Option<String>,
    pub population: u64,
    pub area_km2: f64,
    /// Continents the country belongs to; nonempty, in source order.
    /// Transcontinental countries list more than one.
    pub continents: Vec<String>,
    pub subregion: Option<String>,
    /// URL of the flag image (SVG where the source provides one).
    pub flag_url: String,
}

impl CountryRecord {
    /// Capital for display, with the placeholder for countries without one.
    pub fn capital_display(&self) -> &str {
        self.capital.as_deref().unwrap_or(MISSING_FIELD_PLACEHOLDER)
    }

    /// Sub-region for display, with the placeholder when absent.
    pub fn subregion_display(&self) -> &str {
        self.subregion
            .as_deref()
            .unwrap_or(MISSING_FIELD_PLACEHOLDER)
    }

    /// Continents joined for display, e.g. `"Asia, Europe"`.
    pub fn continents_display(&self) -> String {
        self.continents.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CountryRecord {
        CountryRecord {
            code: "VAT".to_string(),
            name: "Vatican City".to_string(),
            capital: None,
            population: 451,
            area_km2: 0.44,
            continents: vec!["Europe".to_string()],
            subregion: Some("Southern Europe".to_string()),
            flag_url: "https://flagcdn.com/va.svg".to_string(),
        }
    }

    #[test]
    fn absent_capital_renders_placeholder() {
        let country = record();
        assert_eq!(country.capital_display(), MISSING_FIELD_PLACEHOLDER);
        assert_eq!(country.subregion_display(), "Southern Europe");
    }

    #[test]
    fn continents_join_in_source_order() {
        let mut country = record();
        country.continents = vec!["Asia".to_string(), "Europe".to_string()];
        assert_eq!(country.continents_display(), "Asia, Europe");
    }
}
