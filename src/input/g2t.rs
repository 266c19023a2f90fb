use std::collections::BTreeMap;
use std::path::Path;

use crate::input::{InputError, open_reader};

/// HGNC id -> transcripts, in file order per gene.
pub type GeneTranscripts = BTreeMap<String, Vec<String>>;

/// Two whitespace-separated columns: HGNC id and transcript.
pub fn read_g2t(path: &Path) -> Result<GeneTranscripts, InputError> {
    let mut reader = open_reader(path)?;
    let mut line = String::new();
    let mut data = GeneTranscripts::new();

    let mut line_no = 0usize;
    loop {
        line.clear();
        let read = reader.read_line(&mut line)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let value = line.trim();
        if value.is_empty() {
            continue;
        }
        let parts: Vec<&str> = value.split_whitespace().collect();
        let [hgnc_id, transcript] = parts.as_slice() else {
            return Err(InputError::InvalidRow {
                line: line_no,
                reason: format!("expected 2 columns, found {}", parts.len()),
            });
        };
        data.entry(hgnc_id.to_string())
            .or_default()
            .push(transcript.to_string());
    }

    Ok(data)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/g2t.rs"]
mod tests;
