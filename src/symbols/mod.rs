pub mod resolve;
pub mod table;

use std::sync::LazyLock;

use regex::Regex;

static GENE_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+[A-Z0-9]+").expect("valid gene symbol pattern"));

/// Leading uppercase letters followed by uppercase alphanumerics. Anchored at
/// the start only, so `HLA-B` and `BRCA1 and BRCA2` both qualify.
pub fn is_gene_symbol(text: &str) -> bool {
    GENE_SYMBOL.is_match(text)
}

#[cfg(test)]
#[path = "../../tests/src_inline/symbols/mod.rs"]
mod tests;
