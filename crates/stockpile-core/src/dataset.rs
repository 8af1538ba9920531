// File: crates/stockpile-core/src/dataset.rs
// Summary: Stockpile row model and CSV loading.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StockpileError, StockpileResult};
use crate::types::{ENTITY_COLUMN, WARHEADS_COLUMN, YEAR_COLUMN};

/// One observation: warheads held by `entity` in `year`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockpileRow {
    #[serde(rename = "Entity")]
    pub entity: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Number of nuclear warheads")]
    pub warheads: f64,
}

impl StockpileRow {
    pub fn new(entity: impl Into<String>, year: i32, warheads: f64) -> Self {
        Self { entity: entity.into(), year, warheads }
    }
}

/// Load the dataset at `path`, keeping file order.
///
/// Extra columns are ignored; the three named columns must be present under
/// their exact names. Any unparsable record fails the whole load.
pub fn load_stockpiles(path: impl AsRef<Path>) -> StockpileResult<Vec<StockpileRow>> {
    let path = path.as_ref();
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| StockpileError::data_load(path, e))?;
    let rows = read_rows(rdr).map_err(|e| StockpileError::data_load(path, e))?;
    debug!(path = %path.display(), rows = rows.len(), "loaded dataset");
    Ok(rows)
}

/// Parse rows from any reader (used for in-memory sources).
pub fn load_stockpiles_from_reader<R: io::Read>(reader: R) -> Result<Vec<StockpileRow>, csv::Error> {
    let rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    read_rows(rdr)
}

fn read_rows<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<StockpileRow>, csv::Error> {
    let headers = rdr.headers()?.clone();
    for want in [ENTITY_COLUMN, YEAR_COLUMN, WARHEADS_COLUMN] {
        if !headers.iter().any(|h| h == want) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("missing required column '{want}'"),
            )
            .into());
        }
    }

    rdr.deserialize::<StockpileRow>().collect()
}
