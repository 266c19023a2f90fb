use serde::{Deserialize, Serialize};

use crate::model::resolution::SymbolResolution;

/// How a target field ended up being interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetRoute {
    /// Parenthesised panel numbers.
    Panels,
    /// Gene-shaped substrings.
    Genes,
    /// Single panel name recovered by the list disambiguator.
    ListPanel,
    /// Gene list recovered by the list disambiguator.
    ListGenes,
    ManualReview,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedGene {
    pub symbol: String,
    pub resolution: SymbolResolution,
}

impl ResolvedGene {
    pub fn hgnc_id(&self) -> Option<&str> {
        self.resolution.hgnc_id()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "issue", content = "symbol", rename_all = "snake_case")]
pub enum TargetIssue {
    Unclassifiable,
    AmbiguousSymbol(String),
    UnknownSymbol(String),
}

impl TargetIssue {
    pub fn label(&self) -> &'static str {
        match self {
            TargetIssue::Unclassifiable => "unclassifiable_target",
            TargetIssue::AmbiguousSymbol(_) => "ambiguous_symbol",
            TargetIssue::UnknownSymbol(_) => "unknown_symbol",
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            TargetIssue::Unclassifiable => None,
            TargetIssue::AmbiguousSymbol(s) | TargetIssue::UnknownSymbol(s) => Some(s.as_str()),
        }
    }
}

/// Panels or genes extracted from one target field. Unresolved genes keep
/// their slot so a reviewer can line them up with the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTarget {
    pub route: TargetRoute,
    pub panel_ids: Vec<String>,
    pub genes: Vec<ResolvedGene>,
}

impl ResolvedTarget {
    pub fn panels(panel_ids: Vec<String>, route: TargetRoute) -> Self {
        Self {
            route,
            panel_ids,
            genes: Vec::new(),
        }
    }

    pub fn genes(genes: Vec<ResolvedGene>, route: TargetRoute) -> Self {
        Self {
            route,
            panel_ids: Vec::new(),
            genes,
        }
    }

    pub fn manual_review() -> Self {
        Self {
            route: TargetRoute::ManualReview,
            panel_ids: Vec::new(),
            genes: Vec::new(),
        }
    }

    pub fn gene_ids(&self) -> Vec<Option<&str>> {
        self.genes.iter().map(ResolvedGene::hgnc_id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.panel_ids.is_empty() && self.genes.is_empty()
    }

    /// Flattened identifier list: panel ids, or gene ids with `None` holes.
    pub fn identifiers(&self) -> Vec<Option<String>> {
        if !self.panel_ids.is_empty() {
            return self.panel_ids.iter().cloned().map(Some).collect();
        }
        self.genes
            .iter()
            .map(|g| g.hgnc_id().map(str::to_string))
            .collect()
    }

    pub fn issues(&self) -> Vec<TargetIssue> {
        if self.route == TargetRoute::ManualReview {
            return vec![TargetIssue::Unclassifiable];
        }
        let mut issues = Vec::new();
        for gene in &self.genes {
            match &gene.resolution {
                SymbolResolution::Resolved { .. } => {}
                SymbolResolution::Ambiguous { .. } => {
                    issues.push(TargetIssue::AmbiguousSymbol(gene.symbol.clone()))
                }
                SymbolResolution::NotFound => {
                    issues.push(TargetIssue::UnknownSymbol(gene.symbol.clone()))
                }
            }
        }
        issues
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/target.rs"]
mod tests;
