//! Typed model of the stats API response envelope.
//!
//! Every endpoint answers with the same shape: a list of named result sets,
//! each a header row plus a row set of loosely typed cells. The helpers here
//! are what let the shaper address cells by column name instead of position.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level envelope returned by every stats endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsEnvelope {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

impl StatsEnvelope {
    /// Find a result set by name, e.g. `"PlayerStats"`.
    pub fn result_set(&self, name: &str) -> Result<&ResultSet> {
        self.result_sets
            .iter()
            .find(|rs| rs.name == name)
            .ok_or_else(|| StatsError::MissingResultSet {
                name: name.to_string(),
            })
    }
}

/// One named table inside the envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Index of a column by header name.
    ///
    /// Case-insensitive: the API uses `GAME_ID` in box scores but `Game_ID`
    /// in game logs.
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| StatsError::MissingColumn {
                name: name.to_string(),
            })
    }
}

/// A cell as a string, or `None` for null.
pub fn cell_str(row: &[Value], idx: usize) -> Option<&str> {
    row.get(idx).and_then(Value::as_str)
}

/// A cell as an integer, accepting the whole floats the API sometimes emits.
pub fn cell_i64(row: &[Value], idx: usize) -> Option<i64> {
    let cell = row.get(idx)?;
    cell.as_i64().or_else(|| cell.as_f64().map(|f| f as i64))
}

/// A cell as a float, or `None` for null.
pub fn cell_f64(row: &[Value], idx: usize) -> Option<f64> {
    let cell = row.get(idx)?;
    cell.as_f64().or_else(|| cell.as_i64().map(|i| i as f64))
}
