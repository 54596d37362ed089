//! Sector seed data.
//!
//! Loaded once into an empty `Sectors` table. The built-in list can be
//! replaced with a JSON file of `[{ "sector_name": "..." }, ...]`.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// One seed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorSeed {
    pub sector_name: String,
}

const DEFAULT_SECTOR_NAMES: [&str; 7] = [
    "Land Sinks",
    "Industry",
    "Transportation",
    "Electricity",
    "Food, Agriculture, and Land Use",
    "Buildings",
    "Engineered Sinks",
];

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Seed file {0} contains no sectors")]
    Empty(String),
}

/// The built-in sector list.
pub fn default_sectors() -> Vec<SectorSeed> {
    DEFAULT_SECTOR_NAMES
        .iter()
        .map(|name| SectorSeed {
            sector_name: (*name).to_string(),
        })
        .collect()
}

/// Parse a JSON seed document.
pub fn parse_sectors(json: &str) -> Result<Vec<SectorSeed>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load sectors from a JSON file.
pub fn load_sectors(path: &Path) -> Result<Vec<SectorSeed>, SeedError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: display.clone(),
        source,
    })?;
    let sectors = parse_sectors(&raw).map_err(|source| SeedError::Parse {
        path: display.clone(),
        source,
    })?;
    if sectors.is_empty() {
        return Err(SeedError::Empty(display));
    }
    Ok(sectors)
}
