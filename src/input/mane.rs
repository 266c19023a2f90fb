use std::path::Path;

use crate::input::{InputError, open_reader};

pub const MANE_SELECT: &str = "MANE SELECT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManeRecord {
    pub symbol: String,
    pub ensembl: String,
    pub refseq: String,
}

/// MANE CSV export (quoted fields). Only MANE Select rows are kept; the
/// header row falls out through the same filter.
pub fn read_mane(path: &Path) -> Result<Vec<ManeRecord>, InputError> {
    let reader = open_reader(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() < 4 {
            return Err(InputError::InvalidRow {
                line: idx + 1,
                reason: format!("expected at least 4 columns, found {}", record.len()),
            });
        }
        if record[1].trim() != MANE_SELECT {
            continue;
        }
        records.push(ManeRecord {
            symbol: record[0].trim().to_string(),
            ensembl: record[2].trim().to_string(),
            refseq: record[3].trim().to_string(),
        });
    }
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/mane.rs"]
mod tests;
