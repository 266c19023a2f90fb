use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::model::indication::EN_DASH;
use crate::model::resolution::SymbolResolution;
use crate::model::target::ResolvedGene;
use crate::symbols::is_gene_symbol;
use crate::symbols::resolve::{ResolveError, resolve_symbol};
use crate::symbols::table::ReferenceSymbolTable;
use crate::targets::classify::panel_tokens;

/// Panel name that may carry commas, ending in a `(number)`.
static PANEL_WITH_COMMAS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9\-()\s,]*\([0-9]+\)").expect("valid panel name pattern")
});

const SEPARATORS: [char; 2] = [',', ';'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disambiguation {
    Panel {
        name: String,
        panel_ids: Vec<String>,
    },
    Genes(Vec<ResolvedGene>),
}

/// True when splitting on `,` and on `;` give different lists.
pub fn needs_disambiguation(field: &str) -> bool {
    let field = field.replace(EN_DASH, "-");
    split_trimmed(&field, ',') != split_trimmed(&field, ';')
}

/// Decides between "list of genes" and "one panel name with commas".
/// `Ok(None)` means nobody should guess: the row goes to manual review.
pub fn disambiguate(
    field: &str,
    table: &ReferenceSymbolTable,
) -> Result<Option<Disambiguation>, ResolveError> {
    let field = field.replace(EN_DASH, "-");
    for sep in SEPARATORS {
        if let Some(found) = disambiguate_split(&field, sep, table)? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

fn disambiguate_split(
    field: &str,
    sep: char,
    table: &ReferenceSymbolTable,
) -> Result<Option<Disambiguation>, ResolveError> {
    let parts = split_trimmed(field, sep);
    match parts.as_slice() {
        [] => Ok(None),
        [single] => Ok(comma_panel(single)),
        [first, ..] if is_gene_symbol(first) => Ok(Some(Disambiguation::Genes(resolve_gene_list(
            &parts, table,
        )?))),
        _ => {
            let joined = parts.join(", ");
            let panel = comma_panel(&joined);
            if panel.is_none() {
                warn!(
                    target_field = field,
                    separator = %sep,
                    "potential panel list with separators, check manually"
                );
            }
            Ok(panel)
        }
    }
}

fn comma_panel(name: &str) -> Option<Disambiguation> {
    if !PANEL_WITH_COMMAS.is_match(name) {
        return None;
    }
    Some(Disambiguation::Panel {
        name: name.to_string(),
        panel_ids: panel_tokens(name),
    })
}

fn resolve_gene_list(
    parts: &[&str],
    table: &ReferenceSymbolTable,
) -> Result<Vec<ResolvedGene>, ResolveError> {
    let mut genes = Vec::with_capacity(parts.len());
    for part in parts {
        if !is_gene_symbol(part) {
            warn!(element = part, "element not detected as a gene, check manually");
            genes.push(not_found(part));
            continue;
        }

        let resolved = resolve_symbol(part, table)?;
        if resolved.hgnc_id().is_some() {
            genes.push(ResolvedGene {
                symbol: resolved.query_symbol,
                resolution: resolved.resolution,
            });
            continue;
        }

        // trailing "X and Y" at the end of a gene list
        let fragments: Vec<&str> = part.split("and").map(str::trim).collect();
        if fragments.len() >= 2 {
            for fragment in fragments {
                genes.push(resolve_fragment(fragment, table)?);
            }
            continue;
        }

        warn!(symbol = part, "could not find a HGNC id, check manually");
        genes.push(ResolvedGene {
            symbol: resolved.query_symbol,
            resolution: resolved.resolution,
        });
    }
    Ok(genes)
}

fn resolve_fragment(
    fragment: &str,
    table: &ReferenceSymbolTable,
) -> Result<ResolvedGene, ResolveError> {
    if !is_gene_symbol(fragment) {
        warn!(fragment, "rescued fragment is not a gene, check manually");
        return Ok(not_found(fragment));
    }
    let resolved = resolve_symbol(fragment, table)?;
    if resolved.hgnc_id().is_none() {
        warn!(symbol = fragment, "could not find a HGNC id, check manually");
    }
    Ok(ResolvedGene {
        symbol: resolved.query_symbol,
        resolution: resolved.resolution,
    })
}

fn not_found(symbol: &str) -> ResolvedGene {
    ResolvedGene {
        symbol: symbol.to_string(),
        resolution: SymbolResolution::NotFound,
    }
}

fn split_trimmed(field: &str, sep: char) -> Vec<&str> {
    field
        .split(sep)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/targets/disambiguate.rs"]
mod tests;
