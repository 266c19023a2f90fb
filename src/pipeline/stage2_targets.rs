use std::collections::HashSet;

use thiserror::Error;
use tracing::{info, warn};

use crate::model::indication::ClinicalIndication;
use crate::pipeline::stage1_load::LoadCtx;
use crate::symbols::resolve::ResolveError;
use crate::targets::resolve::resolve_target;

#[derive(Debug, Error)]
pub enum Stage2Error {
    #[error("{code}: {source}")]
    Resolve { code: String, source: ResolveError },
    #[error("internal test {0} is absent from the test directory")]
    MissingInternalCode(String),
}

#[derive(Debug, Clone)]
pub struct TargetsCtx {
    pub all: Vec<ClinicalIndication>,
    pub ngs: Vec<ClinicalIndication>,
    /// Indications the lab runs, when an internal directory was given.
    pub filtered: Option<Vec<ClinicalIndication>>,
}

impl TargetsCtx {
    /// What goes into the output document.
    pub fn selected(&self) -> &[ClinicalIndication] {
        self.filtered.as_deref().unwrap_or(&self.ngs)
    }
}

pub fn run_stage2(ctx: &LoadCtx) -> Result<TargetsCtx, Stage2Error> {
    let mut all = Vec::with_capacity(ctx.sheet.rows.len());
    let mut ngs = Vec::new();

    for row in &ctx.sheet.rows {
        let target = resolve_target(&row.target, &ctx.table).map_err(|source| {
            Stage2Error::Resolve {
                code: row.code.clone(),
                source,
            }
        })?;
        let ci = ClinicalIndication::new(
            &row.code,
            &row.name,
            &row.test_method,
            &row.target,
            &row.changes,
            target,
        );
        if ctx.config.is_ngs(&ci.test_method) {
            ngs.push(ci.clone());
        }
        all.push(ci);
    }

    let filtered = match &ctx.internal_codes {
        Some(codes) => Some(filter_internal(&all, codes)?),
        None => None,
    };

    let review = all.iter().filter(|ci| !ci.target.issues().is_empty()).count();
    if review > 0 {
        warn!(indications = review, "indications need manual review");
    }
    info!(
        all = all.len(),
        ngs = ngs.len(),
        filtered = filtered.as_ref().map(Vec::len),
        "resolved targets"
    );

    Ok(TargetsCtx { all, ngs, filtered })
}

/// Every internal code must exist in the test directory.
pub fn filter_internal(
    indications: &[ClinicalIndication],
    codes: &[String],
) -> Result<Vec<ClinicalIndication>, Stage2Error> {
    let known: HashSet<&str> = indications.iter().map(|ci| ci.code.as_str()).collect();
    if let Some(missing) = codes.iter().find(|c| !known.contains(c.as_str())) {
        return Err(Stage2Error::MissingInternalCode(missing.clone()));
    }
    let wanted: HashSet<&str> = codes.iter().map(String::as_str).collect();
    Ok(indications
        .iter()
        .filter(|ci| wanted.contains(ci.code.as_str()))
        .cloned()
        .collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_targets.rs"]
mod tests;
