use crate::model::target::ResolvedTarget;

/// Alternate dash glyph found in exported test-directory cells.
pub const EN_DASH: char = '–';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicalIndication {
    pub code: String,
    pub name: String,
    pub gemini_name: String,
    pub test_method: String,
    pub original_targets: String,
    pub changes: String,
    pub target: ResolvedTarget,
}

impl ClinicalIndication {
    pub fn new(
        code: &str,
        name: &str,
        test_method: &str,
        original_targets: &str,
        changes: &str,
        target: ResolvedTarget,
    ) -> Self {
        let name = clean_name(name);
        let gemini_name = gemini_name(code, &name, test_method);
        Self {
            code: code.to_string(),
            name,
            gemini_name,
            test_method: test_method.to_string(),
            original_targets: original_targets.to_string(),
            changes: changes.to_string(),
            target,
        }
    }
}

pub fn clean_name(name: &str) -> String {
    name.replace(EN_DASH, "-").trim().to_string()
}

/// `_G` suffix for gene tests, `_P` for everything else.
pub fn gemini_name(code: &str, name: &str, test_method: &str) -> String {
    let suffix = if test_method.contains("gene") { "G" } else { "P" };
    format!("{code}_{name}_{suffix}")
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/indication.rs"]
mod tests;
