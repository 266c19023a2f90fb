use std::path::Path;

use csv::StringRecord;

use crate::input::config::TdConfig;
use crate::input::{InputError, path_display, tsv_reader};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDirectoryRow {
    pub code: String,
    pub name: String,
    pub target: String,
    pub test_method: String,
    pub changes: String,
}

#[derive(Debug, Clone)]
pub struct TestDirectorySheet {
    pub change_column: String,
    pub rows: Vec<TestDirectoryRow>,
}

struct ColumnIndex {
    code: usize,
    name: usize,
    target: usize,
    test_method: usize,
    changes: usize,
}

/// Reads the tab-separated export of the sheet of interest.
pub fn read_test_directory(
    path: &Path,
    config: &TdConfig,
) -> Result<TestDirectorySheet, InputError> {
    let mut reader = tsv_reader(path, false)?;
    let mut records = reader.records();

    let header = match records.nth(config.header_index) {
        Some(record) => record?,
        None => return Err(InputError::MissingHeader(config.header_index)),
    };
    let header: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();

    let change_column = find_change_column(&header, &config.changes_column)?;
    let column = |name: &str| {
        header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| InputError::MissingColumn {
                column: name.to_string(),
                path: path_display(path).to_string(),
            })
    };
    let index = ColumnIndex {
        code: column(&config.clinical_indication_column_code)?,
        name: column(&config.clinical_indication_column_name)?,
        target: column(&config.panel_column)?,
        test_method: column(&config.test_method_column)?,
        changes: column(&change_column)?,
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        let row = TestDirectoryRow {
            code: field(&record, index.code),
            name: field(&record, index.name),
            target: field(&record, index.target),
            test_method: field(&record, index.test_method),
            changes: field(&record, index.changes),
        };
        if row.code.is_empty() {
            continue;
        }
        rows.push(row);
    }

    Ok(TestDirectorySheet {
        change_column,
        rows,
    })
}

/// Exactly one header may contain `pattern`.
pub fn find_change_column(header: &[String], pattern: &str) -> Result<String, InputError> {
    let matches: Vec<&String> = header.iter().filter(|h| h.contains(pattern)).collect();
    match matches.as_slice() {
        [] => Err(InputError::NoChangeColumn(pattern.to_string())),
        [column] => Ok((*column).clone()),
        _ => Err(InputError::MultipleChangeColumns {
            pattern: pattern.to_string(),
            columns: matches.into_iter().cloned().collect(),
        }),
    }
}

/// Test codes listed in a lab's internal directory export.
pub fn read_internal_codes(path: &Path, code_column: &str) -> Result<Vec<String>, InputError> {
    let mut reader = tsv_reader(path, true)?;
    let headers = reader.headers()?.clone();
    let idx = headers
        .iter()
        .position(|h| h.trim() == code_column)
        .ok_or_else(|| InputError::MissingColumn {
            column: code_column.to_string(),
            path: path_display(path).to_string(),
        })?;

    let mut codes = Vec::new();
    for record in reader.records() {
        let code = field(&record?, idx);
        if !code.is_empty() {
            codes.push(code);
        }
    }
    Ok(codes)
}

fn field(record: &StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or("").trim().to_string()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/test_directory.rs"]
mod tests;
