pub mod config;
pub mod g2t;
pub mod hgnc;
pub mod mane;
pub mod test_directory;

use std::path::{Path, PathBuf};
use std::{fmt, io};

use thiserror::Error;

use crate::symbols::table::TableError;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("missing required column '{column}' in {path}")]
    MissingColumn { column: String, path: String },
    #[error("couldn't find the change column (no header contains '{0}')")]
    NoChangeColumn(String),
    #[error("2 or more columns contain '{pattern}' in their name: {columns:?}")]
    MultipleChangeColumns {
        pattern: String,
        columns: Vec<String>,
    },
    #[error("header row {0} not found")]
    MissingHeader(usize),
    #[error("invalid row at line {line}: {reason}")]
    InvalidRow { line: usize, reason: String },
    #[error("unsupported gzip input without feature enabled: {0}")]
    GzipNotEnabled(PathBuf),
    #[error("reference table error: {0}")]
    Table(#[from] TableError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub fn open_reader(path: &Path) -> Result<Box<dyn io::BufRead>, InputError> {
    let file = std::fs::File::open(path)?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        #[cfg(feature = "gz")]
        {
            let decoder = flate2::read::GzDecoder::new(file);
            return Ok(Box::new(io::BufReader::new(decoder)));
        }
        #[cfg(not(feature = "gz"))]
        {
            return Err(InputError::GzipNotEnabled(path.to_path_buf()));
        }
    }
    Ok(Box::new(io::BufReader::new(file)))
}

/// Tab-separated reader without quote handling; spreadsheet exports carry
/// stray `"` inside free-text cells.
pub fn tsv_reader(path: &Path, has_headers: bool) -> Result<csv::Reader<Box<dyn io::BufRead>>, InputError> {
    let reader = open_reader(path)?;
    Ok(csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(reader))
}

pub fn path_display(path: &Path) -> impl fmt::Display + '_ {
    path.to_string_lossy()
}

/// File stem without any `.gz`/`.tsv` style suffixes.
pub fn source_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    match name.split_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => name,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/mod.rs"]
mod tests;
