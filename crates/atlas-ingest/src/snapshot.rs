//! Local dataset snapshots.
//!
//! `fetch` writes the normalized dataset to disk once; every other command
//! reads it back instead of refetching. The snapshot is plain JSON with a
//! little provenance alongside the records.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use atlas_model::CountryRecord;

use crate::error::Result;
use crate::fetch::fetch_countries;

#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// When the dataset was fetched, UTC.
    pub fetched_at: DateTime<Utc>,
    /// Base URL of the API the dataset came from.
    pub source: String,
    pub countries: Vec<CountryRecord>,
}

pub fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let body = fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&body)?;
    info!(
        path = %path.display(),
        count = snapshot.countries.len(),
        fetched_at = %snapshot.fetched_at,
        "loaded dataset snapshot"
    );
    Ok(snapshot)
}

pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let body = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, body)?;
    info!(
        path = %path.display(),
        count = snapshot.countries.len(),
        "wrote dataset snapshot"
    );
    Ok(())
}

/// Snapshot-first dataset load for the CLI commands.
///
/// Reads `path` when it exists and `refresh` is false; otherwise fetches
/// from `base_url` and writes the snapshot before returning the records.
pub fn load_dataset(path: &Path, base_url: &str, refresh: bool) -> Result<Vec<CountryRecord>> {
    if !refresh && path.exists() {
        return Ok(read_snapshot(path)?.countries);
    }
    let countries = fetch_countries(base_url)?;
    let snapshot = Snapshot {
        fetched_at: Utc::now(),
        source: base_url.to_string(),
        countries,
    };
    write_snapshot(path, &snapshot)?;
    Ok(snapshot.countries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_countries() -> Vec<CountryRecord> {
        vec![CountryRecord {
            code: "ISL".to_string(),
            name: "Iceland".to_string(),
            capital: Some("Reykjavik".to_string()),
            population: 382_003,
            area_km2: 103_000.0,
            continents: vec!["Europe".to_string()],
            subregion: Some("Northern Europe".to_string()),
            flag_url: "https://flagcdn.com/is.svg".to_string(),
        }]
    }

    #[test]
    fn snapshot_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("countries.json");
        let snapshot = Snapshot {
            fetched_at: Utc::now(),
            source: "https://restcountries.com".to_string(),
            countries: sample_countries(),
        };

        write_snapshot(&path, &snapshot).expect("write snapshot");
        let round = read_snapshot(&path).expect("read snapshot");
        assert_eq!(round.source, snapshot.source);
        assert_eq!(round.countries, snapshot.countries);
    }

    #[test]
    fn load_dataset_prefers_an_existing_snapshot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("countries.json");
        let snapshot = Snapshot {
            fetched_at: Utc::now(),
            source: "https://restcountries.com".to_string(),
            countries: sample_countries(),
        };
        write_snapshot(&path, &snapshot).expect("write snapshot");

        // base_url points nowhere: the load must not touch the network.
        let countries =
            load_dataset(&path, "http://127.0.0.1:9", false).expect("load from snapshot");
        assert_eq!(countries, snapshot.countries);
    }

    #[test]
    fn read_missing_snapshot_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("absent.json");
        let err = read_snapshot(&missing).expect_err("missing file");
        assert!(matches!(err, crate::error::IngestError::Io(_)));
    }
}
