use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::input::{InputError, tsv_reader};

pub const PANEL_GENES_FILE: &str = "panel_genes.tsv";
pub const GENE_TRANSCRIPTS_FILE: &str = "gene_transcripts.tsv";

/// HGNC ids per panel version label.
pub type VersionedGenes = BTreeMap<String, BTreeSet<String>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRecord {
    pub transcript: String,
    pub clinical: bool,
}

/// Named lookups against the panel database.
pub trait PanelDatabase {
    fn panel_genes(&self, panelapp_id: &str) -> VersionedGenes;
    fn gene_transcripts(&self, hgnc_id: &str) -> Vec<TranscriptRecord>;
}

/// Panel database materialised from TSV exports.
#[derive(Debug, Clone, Default)]
pub struct TsvPanelDatabase {
    panels: HashMap<String, VersionedGenes>,
    transcripts: HashMap<String, Vec<TranscriptRecord>>,
}

#[derive(Debug, Deserialize)]
struct PanelGeneRecord {
    panelapp_id: String,
    panel_version: String,
    hgnc_id: String,
}

#[derive(Debug, Deserialize)]
struct GeneTranscriptRecord {
    hgnc_id: String,
    transcript: String,
    clinical_transcript: u8,
}

impl TsvPanelDatabase {
    pub fn load_dir(dir: &Path) -> Result<Self, InputError> {
        let mut db = Self::default();

        let mut reader = tsv_reader(&dir.join(PANEL_GENES_FILE), true)?;
        for record in reader.deserialize() {
            let record: PanelGeneRecord = record?;
            db.insert_panel_gene(&record.panelapp_id, &record.panel_version, &record.hgnc_id);
        }

        let mut reader = tsv_reader(&dir.join(GENE_TRANSCRIPTS_FILE), true)?;
        for record in reader.deserialize() {
            let record: GeneTranscriptRecord = record?;
            db.insert_transcript(&record.hgnc_id, &record.transcript, record.clinical_transcript == 1);
        }

        Ok(db)
    }

    pub fn insert_panel_gene(&mut self, panelapp_id: &str, version: &str, hgnc_id: &str) {
        self.panels
            .entry(panelapp_id.trim().to_string())
            .or_default()
            .entry(version.trim().to_string())
            .or_default()
            .insert(hgnc_id.trim().to_string());
    }

    pub fn insert_transcript(&mut self, hgnc_id: &str, transcript: &str, clinical: bool) {
        self.transcripts
            .entry(hgnc_id.trim().to_string())
            .or_default()
            .push(TranscriptRecord {
                transcript: transcript.trim().to_string(),
                clinical,
            });
    }
}

impl PanelDatabase for TsvPanelDatabase {
    fn panel_genes(&self, panelapp_id: &str) -> VersionedGenes {
        self.panels.get(panelapp_id).cloned().unwrap_or_default()
    }

    fn gene_transcripts(&self, hgnc_id: &str) -> Vec<TranscriptRecord> {
        self.transcripts.get(hgnc_id).cloned().unwrap_or_default()
    }
}

/// Green genes of the signed-off catalogue panels: `panelapp_id, hgnc_id`.
pub fn read_signed_off_panels(
    path: &Path,
) -> Result<HashMap<String, BTreeSet<String>>, InputError> {
    #[derive(Deserialize)]
    struct SignedOffRecord {
        panelapp_id: String,
        hgnc_id: String,
    }

    let mut reader = tsv_reader(path, true)?;
    let mut panels: HashMap<String, BTreeSet<String>> = HashMap::new();
    for record in reader.deserialize() {
        let record: SignedOffRecord = record?;
        panels
            .entry(record.panelapp_id.trim().to_string())
            .or_default()
            .insert(record.hgnc_id.trim().to_string());
    }
    Ok(panels)
}

#[cfg(test)]
#[path = "../../tests/src_inline/panels/db.rs"]
mod tests;
