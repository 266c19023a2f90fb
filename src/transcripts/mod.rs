use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::input::g2t::GeneTranscripts;
use crate::input::mane::ManeRecord;
use crate::input::{InputError, tsv_reader};
use crate::report::text::write_list;
use crate::symbols::resolve::{ResolveError, resolve_symbol};
use crate::symbols::table::ReferenceSymbolTable;

pub const CLINICAL_GENES_FILE: &str = "genes_with_clinical_transcripts.txt";
pub const NON_CLINICAL_GENES_FILE: &str = "genes_with_no_clinical_transcripts.txt";

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("{hgnc_id} has the following transcripts in the HGMD database: {}", .transcripts.join(", "))]
    MultipleHgmdTranscripts {
        hgnc_id: String,
        transcripts: Vec<String>,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClinicalSource {
    Mane,
    Hgmd,
}

impl fmt::Display for ClinicalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClinicalSource::Mane => f.write_str("MANE"),
            ClinicalSource::Hgmd => f.write_str("HGMD"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptAssignment {
    pub clinical: Option<(String, ClinicalSource)>,
    pub non_clinical: Vec<String>,
}

/// HGMD RefSeq transcripts (`refcore.refversion`) keyed by the numeric part
/// of the HGNC id.
pub trait HgmdLookup {
    fn transcripts(&self, hgnc_number: &str) -> Vec<String>;
}

#[derive(Debug, Clone, Default)]
pub struct TsvHgmd {
    by_hgnc: HashMap<String, Vec<String>>,
}

impl TsvHgmd {
    /// Columns: `hgnc_number, refcore, refversion`.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        #[derive(Deserialize)]
        struct HgmdRecord {
            hgnc_number: String,
            refcore: String,
            refversion: String,
        }

        let mut hgmd = Self::default();
        let mut reader = tsv_reader(path, true)?;
        for record in reader.deserialize() {
            let record: HgmdRecord = record?;
            hgmd.insert(&record.hgnc_number, &record.refcore, &record.refversion);
        }
        Ok(hgmd)
    }

    pub fn insert(&mut self, hgnc_number: &str, refcore: &str, refversion: &str) {
        self.by_hgnc
            .entry(hgnc_number.trim().to_string())
            .or_default()
            .push(format!("{}.{}", refcore.trim(), refversion.trim()));
    }
}

impl HgmdLookup for TsvHgmd {
    fn transcripts(&self, hgnc_number: &str) -> Vec<String> {
        self.by_hgnc.get(hgnc_number).cloned().unwrap_or_default()
    }
}

/// HGNC id -> MANE Select RefSeq. Symbols that don't resolve are logged and
/// skipped; a non gene-shaped MANE symbol is only a warning here.
pub fn mane_by_gene(
    records: &[ManeRecord],
    table: &ReferenceSymbolTable,
) -> HashMap<String, String> {
    let mut mane = HashMap::with_capacity(records.len());
    for record in records {
        match resolve_symbol(&record.symbol, table) {
            Ok(resolved) => match resolved.hgnc_id() {
                Some(hgnc_id) => {
                    mane.insert(hgnc_id.to_string(), record.refseq.clone());
                }
                None => warn!(symbol = %record.symbol, "couldn't find hgnc id for MANE symbol"),
            },
            Err(ResolveError::EscapedTarget(symbol)) => {
                warn!(symbol = %symbol, "MANE symbol is not gene-shaped, skipping")
            }
        }
    }
    mane
}

pub fn find_hgmd_transcript<H: HgmdLookup + ?Sized>(
    hgmd: &H,
    hgnc_id: &str,
) -> Result<Option<String>, TranscriptError> {
    let number = hgnc_id.strip_prefix("HGNC:").unwrap_or(hgnc_id);
    let mut transcripts = hgmd.transcripts(number);
    match transcripts.len() {
        0 => Ok(None),
        1 => Ok(transcripts.pop()),
        _ => Err(TranscriptError::MultipleHgmdTranscripts {
            hgnc_id: hgnc_id.to_string(),
            transcripts,
        }),
    }
}

/// MANE Select wins; HGMD is only consulted for genes without a MANE match.
/// Accessions are compared without their version.
pub fn assign_transcripts<H: HgmdLookup + ?Sized>(
    mane: &HashMap<String, String>,
    g2t: &GeneTranscripts,
    hgmd: &H,
) -> Result<BTreeMap<String, TranscriptAssignment>, TranscriptError> {
    let mut data = BTreeMap::new();
    for (gene, transcripts) in g2t {
        let mut clinical = mane
            .get(gene)
            .and_then(|m| find_by_base(transcripts, m))
            .map(|tx| (tx.to_string(), ClinicalSource::Mane));

        if clinical.is_none()
            && let Some(hgmd_tx) = find_hgmd_transcript(hgmd, gene)?
        {
            clinical = find_by_base(transcripts, &hgmd_tx)
                .map(|tx| (tx.to_string(), ClinicalSource::Hgmd));
        }

        let non_clinical = transcripts
            .iter()
            .filter(|tx| clinical.as_ref().is_none_or(|(c, _)| c != *tx))
            .cloned()
            .collect();
        data.insert(
            gene.clone(),
            TranscriptAssignment {
                clinical,
                non_clinical,
            },
        );
    }
    Ok(data)
}

fn accession_base(tx: &str) -> &str {
    tx.split_once('.').map(|(base, _)| base).unwrap_or(tx)
}

fn find_by_base<'a>(transcripts: &'a [String], reference: &str) -> Option<&'a str> {
    let base = accession_base(reference);
    transcripts
        .iter()
        .map(String::as_str)
        .find(|tx| accession_base(tx) == base)
}

/// `hgnc_id\ttranscript\tsource`, `None` as source for non-clinical ones.
pub fn write_g2t(
    path: &Path,
    data: &BTreeMap<String, TranscriptAssignment>,
) -> Result<(), TranscriptError> {
    let mut writer = BufWriter::new(std::fs::File::create(path)?);
    for (gene, assignment) in data {
        if let Some((tx, source)) = &assignment.clinical {
            writeln!(writer, "{gene}\t{tx}\t{source}")?;
        }
        for tx in &assignment.non_clinical {
            writeln!(writer, "{gene}\t{tx}\tNone")?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn write_transcript_status(
    out_dir: &Path,
    data: &BTreeMap<String, TranscriptAssignment>,
) -> Result<(), TranscriptError> {
    let mut clinical = Vec::new();
    let mut non_clinical = Vec::new();
    for (gene, assignment) in data {
        if assignment.clinical.is_some() {
            clinical.push(gene);
        } else {
            non_clinical.push(gene);
        }
    }
    write_list(&out_dir.join(CLINICAL_GENES_FILE), clinical)?;
    write_list(&out_dir.join(NON_CLINICAL_GENES_FILE), non_clinical)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/transcripts/mod.rs"]
mod tests;
