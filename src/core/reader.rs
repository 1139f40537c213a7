use crate::core::inference::ColumnKind;
use crate::domain::model::Table;
use crate::utils::error::{ConvertError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashSet;

/// Parses comma-separated bytes with a header row into a typed [`Table`].
pub fn parse_table(data: &[u8]) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let header = reader.headers()?.clone();
    if header.is_empty() {
        return Err(ConvertError::ParseError {
            message: "No columns to parse from file".to_string(),
        });
    }
    let columns = normalize_headers(&header);
    let width = columns.len();

    let mut raw_rows: Vec<StringRecord> = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(ConvertError::ParseError {
                message: format!(
                    "Expected {} fields in line {}, saw {}",
                    width,
                    line,
                    record.len()
                ),
            });
        }
        raw_rows.push(record);
    }

    tracing::debug!("Read {} columns, {} rows", width, raw_rows.len());

    let kinds: Vec<ColumnKind> = (0..width)
        .map(|col| ColumnKind::infer(raw_rows.iter().map(|row| row.get(col))))
        .collect();

    for (name, kind) in columns.iter().zip(&kinds) {
        tracing::debug!("Column '{}' inferred as {:?}", name, kind);
    }

    let rows = raw_rows
        .iter()
        .map(|row| {
            kinds
                .iter()
                .enumerate()
                .map(|(col, kind)| kind.convert(row.get(col)))
                .collect()
        })
        .collect();

    Ok(Table { columns, rows })
}

/// Blank header cells become `Unnamed: <position>`; repeated names get a
/// `.1`, `.2`, ... suffix so every column name is unique.
fn normalize_headers(header: &StringRecord) -> Vec<String> {
    let named: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if name.is_empty() {
                format!("Unnamed: {}", i)
            } else {
                name.to_string()
            }
        })
        .collect();

    let mut seen: HashSet<String> = HashSet::with_capacity(named.len());
    let mut columns = Vec::with_capacity(named.len());
    for name in named {
        let mut candidate = name.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", name, suffix);
            suffix += 1;
        }
        seen.insert(candidate.clone());
        columns.push(candidate);
    }
    columns
}
