use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::input::InputError;
use crate::input::config::{ConfigError, TdConfig, load_config};
use crate::input::hgnc::read_hgnc_dump;
use crate::input::test_directory::{TestDirectorySheet, read_internal_codes, read_test_directory};
use crate::symbols::table::ReferenceSymbolTable;

#[derive(Debug, Error)]
pub enum Stage1Error {
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone)]
pub struct LoadCtx {
    pub test_directory_path: PathBuf,
    pub config: TdConfig,
    pub table: ReferenceSymbolTable,
    pub sheet: TestDirectorySheet,
    pub internal_codes: Option<Vec<String>>,
}

pub fn run_stage1(
    test_directory: &Path,
    config_path: &Path,
    hgnc_path: &Path,
    internal_path: Option<&Path>,
) -> Result<LoadCtx, Stage1Error> {
    let config = load_config(config_path)?;
    let table = read_hgnc_dump(hgnc_path)?;
    let sheet = read_test_directory(test_directory, &config)?;
    let internal_codes = internal_path
        .map(|p| read_internal_codes(p, &config.clinical_indication_column_code))
        .transpose()?;

    info!(
        config = %config.name,
        hgnc_rows = table.len(),
        rows = sheet.rows.len(),
        change_column = %sheet.change_column,
        "loaded test directory"
    );

    Ok(LoadCtx {
        test_directory_path: test_directory.to_path_buf(),
        config,
        table,
        sheet,
        internal_codes,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
