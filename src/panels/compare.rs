use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;
use tracing::{info, warn};

use crate::panels::db::PanelDatabase;
use crate::report::json::TdOutput;
use crate::versions::{VersionError, latest_version};

/// New signed-off genes that the panel database can't serve yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PanelComparison {
    pub absent_genes: BTreeMap<String, BTreeSet<String>>,
    pub no_clinical_transcripts: BTreeMap<String, BTreeSet<String>>,
    pub all_absent_genes: BTreeSet<String>,
    pub all_no_clinical_transcripts: BTreeSet<String>,
    /// Indication codes whose panel is not in the database at all.
    pub missing_from_database: BTreeSet<String>,
    /// Panel ids with no signed-off counterpart.
    pub missing_signed_off: BTreeSet<String>,
}

/// Genes of the current version of a panel; `None` if the panel is unknown.
pub fn current_panel_genes<D: PanelDatabase + ?Sized>(
    db: &D,
    panelapp_id: &str,
) -> Result<Option<BTreeSet<String>>, VersionError> {
    let mut versions = db.panel_genes(panelapp_id);
    match versions.len() {
        0 => Ok(None),
        1 => Ok(versions.into_values().next()),
        _ => {
            let latest = latest_version(versions.keys().map(String::as_str))?;
            Ok(versions.remove(&latest))
        }
    }
}

/// Splits `genes` into (absent from the database, present without any
/// clinical transcript).
pub fn check_genes_in_database<'a, D, I>(db: &D, genes: I) -> (BTreeSet<String>, BTreeSet<String>)
where
    D: PanelDatabase + ?Sized,
    I: IntoIterator<Item = &'a String>,
{
    let mut absent = BTreeSet::new();
    let mut no_clinical = BTreeSet::new();
    for gene in genes {
        let transcripts = db.gene_transcripts(gene);
        if transcripts.is_empty() {
            absent.insert(gene.clone());
        } else if !transcripts.iter().any(|t| t.clinical) {
            no_clinical.insert(gene.clone());
        }
    }
    (absent, no_clinical)
}

pub fn is_panelapp_id(id: &str) -> bool {
    id.starts_with(|c: char| c.is_ascii_digit())
}

pub fn compare_panel_content<D: PanelDatabase + ?Sized>(
    db: &D,
    output: &TdOutput,
    signed_off: &HashMap<String, BTreeSet<String>>,
) -> Result<PanelComparison, VersionError> {
    let mut cmp = PanelComparison::default();

    for indication in &output.indications {
        let code = &indication.code;
        for panelapp_id in indication.panels.iter().flatten() {
            if !is_panelapp_id(panelapp_id) {
                continue;
            }

            let Some(current_genes) = current_panel_genes(db, panelapp_id)? else {
                warn!(code = %code, panelapp_id = %panelapp_id, "might be missing from the current database");
                cmp.missing_from_database.insert(code.clone());
                continue;
            };
            let Some(signed_off_genes) = signed_off.get(panelapp_id) else {
                warn!(code = %code, panelapp_id = %panelapp_id, "no signed-off version for panel");
                cmp.missing_signed_off.insert(panelapp_id.clone());
                continue;
            };

            let new_genes: Vec<&String> = signed_off_genes.difference(&current_genes).collect();
            let (absent, no_clinical) = check_genes_in_database(db, new_genes);

            cmp.all_absent_genes.extend(absent.iter().cloned());
            cmp.all_no_clinical_transcripts
                .extend(no_clinical.iter().cloned());
            cmp.absent_genes
                .entry(code.clone())
                .or_default()
                .extend(absent);
            cmp.no_clinical_transcripts
                .entry(code.clone())
                .or_default()
                .extend(no_clinical);
        }
    }

    info!(
        absent = cmp.all_absent_genes.len(),
        no_clinical_transcript = cmp.all_no_clinical_transcripts.len(),
        "compared panel content"
    );
    Ok(cmp)
}

#[cfg(test)]
#[path = "../../tests/src_inline/panels/compare.rs"]
mod tests;
