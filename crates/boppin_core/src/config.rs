//! Reference table configuration for party generation.
//!
//! # Responsibility
//! - Hold the fixed candidate lists the generator draws from.
//! - Fail fast on malformed tables at construction time.
//!
//! # Invariants
//! - A constructed `ReferenceTables` always has at least one name and one
//!   asset key, none of them blank.
//! - Tables are read-only after construction; the generator never mutates
//!   them.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stock party names shipped with the demo data set.
const BUILTIN_NAMES: [&str; 10] = [
    "Wild Wild West",
    "Stoplight",
    "80s",
    "Mansion Party",
    "Neon",
    "Foam party",
    "Tropical",
    "Outer Space",
    "Under the Sea",
    "Masquerade",
];

/// Validated candidate lists for randomized party generation.
///
/// Passed explicitly into [`PartyGenerator`](crate::PartyGenerator) instead
/// of living as process-wide state, so hosts and tests can supply their own
/// tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTables")]
pub struct ReferenceTables {
    names: Vec<String>,
    assets: Vec<String>,
}

/// Unvalidated wire shape; promoted via `TryFrom` so deserialized tables
/// cannot bypass validation.
#[derive(Debug, Deserialize)]
struct RawTables {
    names: Vec<String>,
    assets: Vec<String>,
}

impl TryFrom<RawTables> for ReferenceTables {
    type Error = ConfigError;

    fn try_from(raw: RawTables) -> Result<Self, Self::Error> {
        Self::new(raw.names, raw.assets)
    }
}

impl ReferenceTables {
    /// Builds validated tables from caller-supplied lists.
    ///
    /// # Errors
    /// - [`ConfigError::EmptyTable`] when either list is empty.
    /// - [`ConfigError::BlankEntry`] when an entry is empty or whitespace.
    pub fn new(
        names: impl Into<Vec<String>>,
        assets: impl Into<Vec<String>>,
    ) -> Result<Self, ConfigError> {
        let names = names.into();
        let assets = assets.into();

        validate_table("names", &names)?;
        validate_table("assets", &assets)?;

        Ok(Self { names, assets })
    }

    /// Returns the stock 10-name / 10-asset tables from the demo data set.
    ///
    /// Asset keys follow the `Party1`..`Party10` bundle naming.
    pub fn builtin() -> Self {
        let names = BUILTIN_NAMES.iter().map(|name| name.to_string()).collect();
        let assets = (1..=10).map(|index| format!("Party{index}")).collect();
        Self { names, assets }
    }

    /// Candidate party names, in table order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Candidate banner asset keys, in table order.
    pub fn assets(&self) -> &[String] {
        &self.assets
    }
}

fn validate_table(table: &'static str, entries: &[String]) -> Result<(), ConfigError> {
    if entries.is_empty() {
        return Err(ConfigError::EmptyTable { table });
    }
    for (index, entry) in entries.iter().enumerate() {
        if entry.trim().is_empty() {
            return Err(ConfigError::BlankEntry { table, index });
        }
    }
    Ok(())
}

/// Invalid reference table configuration.
///
/// Raised at startup before any record is generated; a malformed table can
/// never produce a meaningful party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyTable { table: &'static str },
    BlankEntry { table: &'static str, index: usize },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTable { table } => {
                write!(f, "reference table `{table}` must not be empty")
            }
            Self::BlankEntry { table, index } => {
                write!(f, "reference table `{table}` has blank entry at index {index}")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ReferenceTables};

    fn owned(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|entry| entry.to_string()).collect()
    }

    #[test]
    fn builtin_tables_have_ten_entries_each() {
        let tables = ReferenceTables::builtin();
        assert_eq!(tables.names().len(), 10);
        assert_eq!(tables.assets().len(), 10);
        assert_eq!(tables.names()[0], "Wild Wild West");
        assert_eq!(tables.assets()[0], "Party1");
        assert_eq!(tables.assets()[9], "Party10");
    }

    #[test]
    fn new_rejects_empty_name_table() {
        let err = ReferenceTables::new(Vec::new(), owned(&["Party1"])).unwrap_err();
        assert_eq!(err, ConfigError::EmptyTable { table: "names" });
    }

    #[test]
    fn new_rejects_blank_asset_entry() {
        let err = ReferenceTables::new(owned(&["Neon"]), owned(&["Party1", "  "])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::BlankEntry {
                table: "assets",
                index: 1
            }
        );
    }

    #[test]
    fn deserialization_runs_validation() {
        let err = serde_json::from_str::<ReferenceTables>(r#"{"names":[],"assets":["Party1"]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
