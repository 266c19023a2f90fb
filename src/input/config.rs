use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Which columns of the exported sheet hold what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdConfig {
    pub name: String,
    pub clinical_indication_column_code: String,
    pub clinical_indication_column_name: String,
    pub panel_column: String,
    pub test_method_column: String,
    /// Substring of the change column header, which carries a publication
    /// date that moves between releases.
    pub changes_column: String,
    #[serde(default)]
    pub header_index: usize,
    /// Empty means every test method counts as NGS.
    #[serde(default)]
    pub ngs_test_methods: Vec<String>,
}

impl TdConfig {
    pub fn is_ngs(&self, test_method: &str) -> bool {
        self.ngs_test_methods.is_empty() || self.ngs_test_methods.iter().any(|m| m == test_method)
    }
}

pub fn load_config(path: &Path) -> Result<TdConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<TdConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/config.rs"]
mod tests;
