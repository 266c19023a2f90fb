use super::*;
use crate::test_support::{hgnc_rows, hgnc_table};

fn resolve(symbol: &str) -> SymbolResolution {
    resolve_symbol(symbol, &hgnc_table())
        .expect("gene-shaped symbol")
        .resolution
}

#[test]
fn approved_symbol() {
    assert_eq!(
        resolve("BRCA1"),
        SymbolResolution::Resolved {
            hgnc_id: "HGNC:1100".to_string(),
            source: SymbolSource::Approved,
        }
    );
}

#[test]
fn every_approved_symbol_resolves_to_its_row() {
    let table = hgnc_table();
    for row in hgnc_rows() {
        let got = resolve_symbol(&row.approved_symbol, &table).expect("resolve");
        assert_eq!(got.hgnc_id(), Some(row.hgnc_id.as_str()));
        assert!(!got.resolution.via_previous());
        assert!(!got.resolution.via_alias());
    }
}

#[test]
fn alias_symbol() {
    let r = resolve("HIP4");
    assert_eq!(r.hgnc_id(), Some("HGNC:1550"));
    assert!(!r.via_previous());
    assert!(r.via_alias());
}

#[test]
fn previous_symbol() {
    let r = resolve("CCO");
    assert_eq!(r.hgnc_id(), Some("HGNC:1601"));
    assert!(r.via_previous());
    assert!(!r.via_alias());
}

#[test]
fn previous_and_alias_on_different_rows_is_ambiguous() {
    assert_eq!(
        resolve("TAZ"),
        SymbolResolution::Ambiguous {
            via_previous: true,
            via_alias: true,
        }
    );
}

#[test]
fn several_rows_in_one_source_withhold_the_id() {
    let previous = resolve("OLDX");
    assert_eq!(previous.hgnc_id(), None);
    assert!(previous.via_previous());
    assert!(!previous.via_alias());

    let alias = resolve("ALTY");
    assert_eq!(alias.hgnc_id(), None);
    assert!(!alias.via_previous());
    assert!(alias.via_alias());
}

#[test]
fn unknown_symbol_is_not_found() {
    assert_eq!(resolve("BLARG"), SymbolResolution::NotFound);
}

#[test]
fn approved_match_is_case_sensitive() {
    assert_eq!(resolve("BRCA1P"), SymbolResolution::NotFound);
    assert!(resolve_symbol("brca1", &hgnc_table()).is_err());
}

#[test]
fn non_gene_shape_escapes() {
    let err = resolve_symbol("Unknown", &hgnc_table()).unwrap_err();
    assert_eq!(err, ResolveError::EscapedTarget("Unknown".to_string()));
}

#[test]
fn query_symbol_is_kept() {
    let got = resolve_symbol("CCO", &hgnc_table()).expect("resolve");
    assert_eq!(got.query_symbol, "CCO");
}
