use thiserror::Error;
use tracing::{debug, warn};

use crate::model::resolution::{GeneSymbolResolution, SymbolResolution, SymbolSource};
use crate::symbols::is_gene_symbol;
use crate::symbols::table::ReferenceSymbolTable;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The classifier handed over text that is not gene-shaped.
    #[error("'{0}' escaped target classification: not a gene symbol")]
    EscapedTarget(String),
}

/// Approved symbol first, then previous and alias symbols.
pub fn resolve_symbol(
    symbol: &str,
    table: &ReferenceSymbolTable,
) -> Result<GeneSymbolResolution, ResolveError> {
    if let Some(row) = table.approved_row(symbol) {
        return Ok(GeneSymbolResolution {
            query_symbol: symbol.to_string(),
            resolution: SymbolResolution::Resolved {
                hgnc_id: table.row(row).hgnc_id.clone(),
                source: SymbolSource::Approved,
            },
        });
    }

    if !is_gene_symbol(symbol) {
        return Err(ResolveError::EscapedTarget(symbol.to_string()));
    }

    let previous = table.previous_rows(symbol);
    let alias = table.alias_rows(symbol);

    let resolution = match (previous, alias) {
        ([], []) => SymbolResolution::NotFound,
        ([row], []) => SymbolResolution::Resolved {
            hgnc_id: table.row(*row).hgnc_id.clone(),
            source: SymbolSource::Previous,
        },
        ([], [row]) => SymbolResolution::Resolved {
            hgnc_id: table.row(*row).hgnc_id.clone(),
            source: SymbolSource::Alias,
        },
        (previous, alias) => {
            warn!(
                symbol,
                previous_rows = previous.len(),
                alias_rows = alias.len(),
                "could not find a non ambiguous HGNC id"
            );
            SymbolResolution::Ambiguous {
                via_previous: !previous.is_empty(),
                via_alias: !alias.is_empty(),
            }
        }
    };

    debug!(symbol, ?resolution, "resolved through previous/alias symbols");
    Ok(GeneSymbolResolution {
        query_symbol: symbol.to_string(),
        resolution,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/symbols/resolve.rs"]
mod tests;
