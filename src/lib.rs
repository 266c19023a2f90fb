pub mod cli;
pub mod input;
pub mod model;
pub mod panels;
pub mod pipeline;
pub mod report;
pub mod symbols;
pub mod targets;
pub mod transcripts;
pub mod versions;

pub mod prelude {
    pub use crate::model::resolution::{GeneSymbolResolution, SymbolResolution, SymbolSource};
    pub use crate::model::target::{ResolvedTarget, TargetIssue};
    pub use crate::symbols::resolve::resolve_symbol;
    pub use crate::symbols::table::{ReferenceRow, ReferenceSymbolTable};
    pub use crate::targets::resolve::resolve_target;
    pub use crate::versions::latest_version;
}

#[cfg(test)]
#[path = "../tests/src_inline/support.rs"]
pub(crate) mod test_support;
