//! Interactive browsing session.
//!
//! A line-oriented loop where every command maps 1:1 onto a selection
//! setter. The session owns the dataset and the selection; after each
//! state change the pipeline re-runs in full and the table re-renders.
//! Recomputation is one visible entry point, not hidden dependency
//! tracking.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use atlas_core::selection::SelectionState;
use atlas_core::{apply, extract_facets, filtered_count};
use atlas_model::{CountryRecord, SortKey, TopN};

use atlas_cli::render::{country_table, facet_table, status_line};

const HELP: &str = "\
Commands:
  continent <name>   filter by continent (clears the sub-region filter)
  subregion <name>   filter by sub-region (clears the continent filter)
  sort <key>         sort by name, population, or area
  top <metric>       keep the top 10 by population or area; 'top none' shows all
  clear              drop the active filter
  facets             list the available continents and sub-regions
  show               re-render the current view
  help               show this help
  quit               leave the session";

pub fn run(countries: &[CountryRecord]) -> Result<()> {
    let facets = extract_facets(countries);
    let mut selection = SelectionState::new();

    render(countries, &selection);
    println!(
        "{} continents, {} sub-regions available (type 'help' for commands)",
        facets.continents.len(),
        facets.subregions.len()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("atlas> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break; // EOF ends the session
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let (command, arg) = match input.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (input, ""),
        };
        match command {
            "continent" => {
                selection.set_continent(arg);
                render(countries, &selection);
            }
            "subregion" => {
                selection.set_subregion(arg);
                render(countries, &selection);
            }
            "sort" => match arg.parse::<SortKey>() {
                Ok(key) => {
                    selection.set_sort_key(key);
                    render(countries, &selection);
                }
                Err(reason) => eprintln!("{reason}"),
            },
            "top" => match arg.parse::<TopN>() {
                Ok(metric) => {
                    selection.set_top_n(metric);
                    render(countries, &selection);
                }
                Err(reason) => eprintln!("{reason}"),
            },
            "clear" => {
                selection.set_continent("");
                render(countries, &selection);
            }
            "facets" => println!("{}", facet_table(&facets)),
            "show" => render(countries, &selection),
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            _ => eprintln!("unknown command: {command} (try 'help')"),
        }
    }
    Ok(())
}

fn render(countries: &[CountryRecord], selection: &SelectionState) {
    let rows = apply(countries, selection);
    let filtered = filtered_count(countries, selection);
    println!("{}", country_table(&rows));
    println!("{}", status_line(rows.len(), filtered, selection));
}
