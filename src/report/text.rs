use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::report::json::TdOutput;

/// One `key\tvalue` line per value.
pub fn write_keyed<K: Display, V: Display>(
    path: &Path,
    data: &BTreeMap<K, BTreeSet<V>>,
) -> std::io::Result<()> {
    let mut writer = BufWriter::new(std::fs::File::create(path)?);
    for (key, values) in data {
        for value in values {
            writeln!(writer, "{key}\t{value}")?;
        }
    }
    writer.flush()
}

pub fn write_list<I>(path: &Path, data: I) -> std::io::Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut writer = BufWriter::new(std::fs::File::create(path)?);
    for item in data {
        writeln!(writer, "{item}")?;
    }
    writer.flush()
}

/// Every unresolved or ambiguous item next to the text it came from.
pub fn render_manual_review(output: &TdOutput) -> String {
    let mut out = String::new();
    out.push_str("code\tissue\tsymbol\toriginal_targets\n");
    for ci in &output.indications {
        for issue in &ci.review {
            out.push_str(&ci.code);
            out.push('\t');
            out.push_str(issue.label());
            out.push('\t');
            out.push_str(issue.symbol().unwrap_or("."));
            out.push('\t');
            out.push_str(&ci.original_targets);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
