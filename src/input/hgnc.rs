use std::path::Path;

use serde::Deserialize;

use crate::input::{InputError, tsv_reader};
use crate::symbols::table::{ReferenceRow, ReferenceSymbolTable};

#[derive(Debug, Deserialize)]
struct HgncRecord {
    #[serde(rename = "HGNC ID")]
    hgnc_id: String,
    #[serde(rename = "Approved symbol")]
    approved_symbol: String,
    #[serde(rename = "Previous symbols", default)]
    previous_symbols: Option<String>,
    #[serde(rename = "Alias symbols", default)]
    alias_symbols: Option<String>,
}

/// Reads a tab-separated HGNC dump (extra columns ignored).
pub fn read_hgnc_dump(path: &Path) -> Result<ReferenceSymbolTable, InputError> {
    let mut reader = tsv_reader(path, true)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let record: HgncRecord = record?;
        rows.push(ReferenceRow {
            hgnc_id: record.hgnc_id.trim().to_string(),
            approved_symbol: record.approved_symbol.trim().to_string(),
            previous_symbols: record.previous_symbols.unwrap_or_default(),
            alias_symbols: record.alias_symbols.unwrap_or_default(),
        });
    }
    Ok(ReferenceSymbolTable::from_rows(rows)?)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/hgnc.rs"]
mod tests;
