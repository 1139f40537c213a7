use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Header text the tabular export gives to a persisted row index.
pub const SYNTHETIC_INDEX_COLUMN: &str = "Unnamed: 0";

/// One row as an ordered column -> value mapping. Serializes as a bare JSON
/// object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

/// In-memory table with typed cells. Every row has exactly `columns.len()`
/// cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Removes the named column from the header and every row. Returns
    /// whether the column was present.
    pub fn drop_column(&mut self, name: &str) -> bool {
        let Some(idx) = self.column_index(name) else {
            return false;
        };
        self.columns.remove(idx);
        for row in &mut self.rows {
            row.remove(idx);
        }
        true
    }

    pub fn into_records(self) -> Vec<Record> {
        let columns = self.columns;
        self.rows
            .into_iter()
            .map(|row| Record {
                data: columns.iter().cloned().zip(row).collect(),
            })
            .collect()
    }
}

/// Resolved settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub indent: usize,
}

impl ConversionRequest {
    pub fn new(input: impl Into<PathBuf>, output: Option<PathBuf>, indent: usize) -> Self {
        let input = input.into();
        let output = output.unwrap_or_else(|| default_output_path(&input));
        Self {
            input,
            output,
            indent,
        }
    }
}

/// `foo.csv` -> `foo.json`; a path with no extension just gains one.
pub fn default_output_path(input: &std::path::Path) -> PathBuf {
    input.with_extension("json")
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<Record>,
    pub dropped_index: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub output_path: PathBuf,
    pub records: usize,
    pub dropped_index: bool,
}
