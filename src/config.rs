use crate::domain::bills::BillCounts;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Bills placed in the drawer every morning: $1 x 50, $5 x 20, $10 x 10, $20 x 5.
pub const DAILY_STARTING_CASH: BillCounts = BillCounts::new(5, 10, 20, 50);

/// How the till is loaded before the first sale of the day.
///
/// Read from JSON, e.g. `{"twenties": 5, "tens": 10, "fives": 20, "ones": 50}`.
/// Denominations left out start empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TillConfig {
    pub starting_cash: BillCounts,
}

impl Default for TillConfig {
    fn default() -> Self {
        Self {
            starting_cash: DAILY_STARTING_CASH,
        }
    }
}

impl TillConfig {
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Falls back to [`DAILY_STARTING_CASH`] when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }
}
