use std::path::Path;

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::indication::ClinicalIndication;
use crate::model::target::TargetIssue;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid filter pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Parser output document, one per test directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdOutput {
    pub td_source: String,
    pub config_source: String,
    pub date: String,
    pub indications: Vec<IndicationRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicationRecord {
    pub name: String,
    pub code: String,
    pub gemini_name: String,
    pub test_method: String,
    /// Panel ids, or HGNC ids with `null` for genes that need checking.
    pub panels: Vec<Option<String>>,
    pub original_targets: String,
    pub changes: String,
    #[serde(default)]
    pub genes: Vec<GeneRecord>,
    #[serde(default)]
    pub review: Vec<TargetIssue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneRecord {
    pub symbol: String,
    pub hgnc_id: Option<String>,
    pub via_previous: bool,
    pub via_alias: bool,
}

impl From<&ClinicalIndication> for IndicationRecord {
    fn from(ci: &ClinicalIndication) -> Self {
        IndicationRecord {
            name: ci.name.clone(),
            code: ci.code.clone(),
            gemini_name: ci.gemini_name.clone(),
            test_method: ci.test_method.clone(),
            panels: ci.target.identifiers(),
            original_targets: ci.original_targets.clone(),
            changes: ci.changes.clone(),
            genes: ci
                .target
                .genes
                .iter()
                .map(|g| GeneRecord {
                    symbol: g.symbol.clone(),
                    hgnc_id: g.hgnc_id().map(str::to_string),
                    via_previous: g.resolution.via_previous(),
                    via_alias: g.resolution.via_alias(),
                })
                .collect(),
            review: ci.target.issues(),
        }
    }
}

pub fn write_td_output(path: &Path, output: &TdOutput) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(output)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn read_td_output(path: &Path) -> Result<TdOutput, ReportError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Codes of indications whose change description matches `pattern`
/// (case-insensitive).
pub fn filter_indications(output: &TdOutput, pattern: &str) -> Result<Vec<String>, ReportError> {
    let re = RegexBuilder::new(pattern).case_insensitive(true).build()?;
    Ok(output
        .indications
        .iter()
        .filter(|ci| re.is_match(&ci.changes))
        .map(|ci| ci.code.clone())
        .collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
