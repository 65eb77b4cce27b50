//! Type-safe enumerations for the selection controls.
//!
//! The presentation layer deals in strings (flag values, interactive
//! commands); these enums give the core a closed set of sort keys and
//! truncation metrics, with `FromStr` doing the normalization at the
//! boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort key for the result list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Ascending by common name (locale-aware folding).
    #[default]
    Name,
    /// Descending by population.
    Population,
    /// Descending by land area.
    Area,
}

impl SortKey {
    /// Canonical lowercase name as used on the CLI surface.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Population => "population",
            SortKey::Area => "area",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "population" | "pop" => Ok(SortKey::Population),
            "area" => Ok(SortKey::Area),
            _ => Err(format!("unknown sort key: {s}")),
        }
    }
}

/// Metric for top-10 truncation.
///
/// `TopN::None` keeps the full filtered result. The metric is selected
/// independently of [`SortKey`]: truncation keeps the first ten entries of
/// whatever ordering the sort stage produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopN {
    #[default]
    None,
    Population,
    Area,
}

impl TopN {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopN::None => "none",
            TopN::Population => "population",
            TopN::Area => "area",
        }
    }

    /// Returns true when truncation is active.
    pub fn is_active(&self) -> bool {
        !matches!(self, TopN::None)
    }
}

impl fmt::Display for TopN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TopN {
    type Err = String;

    /// Parse a truncation metric. The empty string means "show all", matching
    /// the presentation convention that empty selects nothing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" | "all" => Ok(TopN::None),
            "population" | "pop" => Ok(TopN::Population),
            "area" => Ok(TopN::Area),
            _ => Err(format!("unknown top-10 metric: {s}")),
        }
    }
}
