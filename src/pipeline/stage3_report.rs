use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::input::source_name;
use crate::pipeline::stage1_load::LoadCtx;
use crate::pipeline::stage2_targets::TargetsCtx;
use crate::report::json::{IndicationRecord, ReportError, TdOutput, write_td_output};
use crate::report::text::render_manual_review;

#[derive(Debug, Error)]
pub enum Stage3Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("report error: {0}")]
    Report(#[from] ReportError),
}

#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub manual_review: PathBuf,
}

/// `YYMMDD`, local time.
pub fn today() -> String {
    chrono::Local::now().format("%y%m%d").to_string()
}

pub fn build_output(load: &LoadCtx, targets: &TargetsCtx, date: &str) -> TdOutput {
    TdOutput {
        td_source: source_name(&load.test_directory_path),
        config_source: load.config.name.clone(),
        date: date.to_string(),
        indications: targets
            .selected()
            .iter()
            .map(IndicationRecord::from)
            .collect(),
    }
}

pub fn run_stage3_report(
    load: &LoadCtx,
    targets: &TargetsCtx,
    out_dir: &Path,
    name: &str,
    date: &str,
) -> Result<(TdOutput, ReportPaths), Stage3Error> {
    std::fs::create_dir_all(out_dir)?;
    let output = build_output(load, targets, date);

    let paths = ReportPaths {
        json: out_dir.join(format!("{name}.json")),
        manual_review: out_dir.join(format!("{name}_manual_review.tsv")),
    };
    write_td_output(&paths.json, &output)?;
    std::fs::write(&paths.manual_review, render_manual_review(&output))?;

    info!(
        indications = output.indications.len(),
        json = %paths.json.to_string_lossy(),
        "wrote test directory output"
    );
    Ok((output, paths))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
