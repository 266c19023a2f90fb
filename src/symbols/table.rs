use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("approved symbol {symbol} appears on rows {first_row} and {dup_row}")]
    DuplicateApprovedSymbol {
        symbol: String,
        first_row: usize,
        dup_row: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRow {
    pub hgnc_id: String,
    pub approved_symbol: String,
    pub previous_symbols: String,
    pub alias_symbols: String,
}

/// Read-only nomenclature table with the previous/alias lists exploded into
/// symbol -> row multimaps once, at construction.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSymbolTable {
    rows: Vec<ReferenceRow>,
    approved: HashMap<String, usize>,
    previous: HashMap<String, Vec<usize>>,
    alias: HashMap<String, Vec<usize>>,
}

impl ReferenceSymbolTable {
    pub fn from_rows(rows: Vec<ReferenceRow>) -> Result<Self, TableError> {
        let mut approved: HashMap<String, usize> = HashMap::with_capacity(rows.len());
        let mut previous: HashMap<String, Vec<usize>> = HashMap::new();
        let mut alias: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, row) in rows.iter().enumerate() {
            if !row.approved_symbol.is_empty() {
                if let Some(first) = approved.get(&row.approved_symbol).copied() {
                    return Err(TableError::DuplicateApprovedSymbol {
                        symbol: row.approved_symbol.clone(),
                        first_row: first + 1,
                        dup_row: idx + 1,
                    });
                }
                approved.insert(row.approved_symbol.clone(), idx);
            }
            index_symbols(&mut previous, &row.previous_symbols, idx);
            index_symbols(&mut alias, &row.alias_symbols, idx);
        }

        Ok(Self {
            rows,
            approved,
            previous,
            alias,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, idx: usize) -> &ReferenceRow {
        &self.rows[idx]
    }

    pub fn approved_row(&self, symbol: &str) -> Option<usize> {
        self.approved.get(symbol).copied()
    }

    pub fn previous_rows(&self, symbol: &str) -> &[usize] {
        self.previous.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn alias_rows(&self, symbol: &str) -> &[usize] {
        self.alias.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Splits a comma-delimited cell; a row listing a symbol twice counts once.
fn index_symbols(index: &mut HashMap<String, Vec<usize>>, cell: &str, row: usize) {
    for fragment in cell.split(',') {
        let symbol = fragment.trim();
        if symbol.is_empty() {
            continue;
        }
        let rows = index.entry(symbol.to_string()).or_default();
        if rows.last() != Some(&row) {
            rows.push(row);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/symbols/table.rs"]
mod tests;
