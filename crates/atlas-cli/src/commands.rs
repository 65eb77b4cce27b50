use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use tracing::info;

use atlas_core::selection::SelectionState;
use atlas_core::{apply, extract_facets, filtered_count};
use atlas_ingest::load_dataset;
use atlas_model::{CountryRecord, TopN};

use crate::browse;
use crate::cli::{DatasetArgs, FetchArgs, ListArgs, OutputArg};
use atlas_cli::render::{ListPayload, country_table, facet_table, status_line};

pub fn run_fetch(args: &FetchArgs) -> Result<()> {
    let countries = fetch_with_spinner(&args.dataset)?;
    println!(
        "Fetched {} countries to {}",
        countries.len(),
        args.dataset.snapshot.display()
    );
    Ok(())
}

pub fn run_list(args: &ListArgs) -> Result<()> {
    let countries = load_countries(&args.dataset)?;

    let mut selection = SelectionState::new();
    if let Some(continent) = &args.continent {
        selection.set_continent(continent);
    }
    if let Some(subregion) = &args.subregion {
        selection.set_subregion(subregion);
    }
    selection.set_sort_key(args.sort.into());
    selection.set_top_n(args.top10.map(TopN::from).unwrap_or_default());

    let rows = apply(&countries, &selection);
    let filtered = filtered_count(&countries, &selection);
    info!(
        total = countries.len(),
        filtered,
        shown = rows.len(),
        "list rendered"
    );

    match args.output {
        OutputArg::Table => {
            println!("{}", country_table(&rows));
            println!("{}", status_line(rows.len(), filtered, &selection));
        }
        OutputArg::Json => {
            let payload = ListPayload {
                selection: &selection,
                total: countries.len(),
                filtered,
                countries: &rows,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).context("serialize list output")?
            );
        }
    }
    Ok(())
}

pub fn run_facets(args: &DatasetArgs) -> Result<()> {
    let countries = load_countries(args)?;
    let facets = extract_facets(&countries);
    println!("{}", facet_table(&facets));
    println!(
        "{} continents, {} sub-regions",
        facets.continents.len(),
        facets.subregions.len()
    );
    Ok(())
}

pub fn run_browse(args: &DatasetArgs) -> Result<()> {
    let countries = load_countries(args)?;
    browse::run(&countries)
}

/// Snapshot-first dataset load, with a spinner when the network is involved.
fn load_countries(args: &DatasetArgs) -> Result<Vec<CountryRecord>> {
    if args.refresh || !args.snapshot.exists() {
        return fetch_with_spinner(args);
    }
    load_dataset(&args.snapshot, &args.base_url, false).context("load country dataset")
}

fn fetch_with_spinner(args: &DatasetArgs) -> Result<Vec<CountryRecord>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Fetching country dataset...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    let result = load_dataset(&args.snapshot, &args.base_url, true).context("fetch country dataset");
    spinner.finish_and_clear();
    result
}
