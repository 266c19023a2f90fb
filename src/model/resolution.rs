use serde::{Deserialize, Serialize};

/// Which column of the nomenclature table produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolSource {
    Approved,
    Previous,
    Alias,
}

/// Outcome of resolving one gene symbol.
///
/// `Ambiguous` covers both a cross-source hit (previous and alias, possibly on
/// different rows) and several rows within a single source; the flags record
/// which sources matched so the identifier can be withheld without losing why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SymbolResolution {
    Resolved {
        hgnc_id: String,
        source: SymbolSource,
    },
    Ambiguous {
        via_previous: bool,
        via_alias: bool,
    },
    NotFound,
}

impl SymbolResolution {
    pub fn hgnc_id(&self) -> Option<&str> {
        match self {
            SymbolResolution::Resolved { hgnc_id, .. } => Some(hgnc_id.as_str()),
            _ => None,
        }
    }

    pub fn via_previous(&self) -> bool {
        match self {
            SymbolResolution::Resolved { source, .. } => *source == SymbolSource::Previous,
            SymbolResolution::Ambiguous { via_previous, .. } => *via_previous,
            SymbolResolution::NotFound => false,
        }
    }

    pub fn via_alias(&self) -> bool {
        match self {
            SymbolResolution::Resolved { source, .. } => *source == SymbolSource::Alias,
            SymbolResolution::Ambiguous { via_alias, .. } => *via_alias,
            SymbolResolution::NotFound => false,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, SymbolResolution::Ambiguous { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneSymbolResolution {
    pub query_symbol: String,
    pub resolution: SymbolResolution,
}

impl GeneSymbolResolution {
    pub fn hgnc_id(&self) -> Option<&str> {
        self.resolution.hgnc_id()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/resolution.rs"]
mod tests;
