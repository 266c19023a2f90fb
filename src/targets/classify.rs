use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// `(100)` or the historical `(100 & 101)`.
static PANEL_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\s*([0-9]+(?:\s*&\s*[0-9]+)*)\s*\)").expect("valid panel group pattern")
});

static GENE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]+[A-Z0-9\-]+").expect("valid gene token pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Panel,
    Gene,
    Unclassified,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: TargetKind,
    pub tokens: Vec<String>,
}

/// First match wins: any parenthesised panel number makes the whole field a
/// panel target, even when gene-shaped words sit next to it.
pub fn classify(field: &str) -> Classification {
    let panels = panel_tokens(field);
    if !panels.is_empty() {
        return Classification {
            kind: TargetKind::Panel,
            tokens: panels,
        };
    }

    let genes: Vec<String> = GENE_TOKEN
        .find_iter(field)
        .map(|m| m.as_str().to_string())
        .collect();
    if !genes.is_empty() {
        return Classification {
            kind: TargetKind::Gene,
            tokens: genes,
        };
    }

    Classification {
        kind: TargetKind::Unclassified,
        tokens: Vec::new(),
    }
}

/// Panel numbers in order of appearance, `&`-joined groups split apart.
pub fn panel_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for caps in PANEL_GROUP.captures_iter(text) {
        if let Some(group) = caps.get(1) {
            tokens.extend(
                group
                    .as_str()
                    .split('&')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string),
            );
        }
    }
    tokens
}

#[cfg(test)]
#[path = "../../tests/src_inline/targets/classify.rs"]
mod tests;
