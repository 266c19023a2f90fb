use tracing::warn;

use crate::model::indication::EN_DASH;
use crate::model::target::{ResolvedGene, ResolvedTarget, TargetRoute};
use crate::symbols::resolve::{ResolveError, resolve_symbol};
use crate::symbols::table::ReferenceSymbolTable;
use crate::targets::classify::{TargetKind, classify};
use crate::targets::disambiguate::{Disambiguation, disambiguate, needs_disambiguation};

pub fn normalize_field(field: &str) -> String {
    field.replace(EN_DASH, "-").trim().to_string()
}

/// Turns one target cell into panel ids or gene ids. Pure: the same field and
/// table always give the same result.
pub fn resolve_target(
    field: &str,
    table: &ReferenceSymbolTable,
) -> Result<ResolvedTarget, ResolveError> {
    let field = normalize_field(field);
    let classification = classify(&field);

    match classification.kind {
        TargetKind::Panel => Ok(ResolvedTarget::panels(
            classification.tokens,
            TargetRoute::Panels,
        )),
        TargetKind::Gene => {
            let mut genes = Vec::with_capacity(classification.tokens.len());
            for token in classification.tokens {
                let resolved = resolve_symbol(&token, table)?;
                if resolved.hgnc_id().is_none() {
                    warn!(symbol = %token, "could not find a HGNC id, check manually");
                }
                genes.push(ResolvedGene {
                    symbol: resolved.query_symbol,
                    resolution: resolved.resolution,
                });
            }
            Ok(ResolvedTarget::genes(genes, TargetRoute::Genes))
        }
        TargetKind::Unclassified if !needs_disambiguation(&field) => {
            warn!(target_field = %field, "target is neither panel nor gene, check manually");
            Ok(ResolvedTarget::manual_review())
        }
        TargetKind::Unclassified => match disambiguate(&field, table)? {
            Some(Disambiguation::Panel { panel_ids, .. }) => {
                Ok(ResolvedTarget::panels(panel_ids, TargetRoute::ListPanel))
            }
            Some(Disambiguation::Genes(genes)) => {
                Ok(ResolvedTarget::genes(genes, TargetRoute::ListGenes))
            }
            None => {
                warn!(target_field = %field, "target is neither panel nor gene, check manually");
                Ok(ResolvedTarget::manual_review())
            }
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/targets/resolve.rs"]
mod tests;
