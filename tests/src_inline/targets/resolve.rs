use super::*;
use crate::model::target::TargetIssue;
use crate::test_support::hgnc_table;

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn one_panel() {
    let got = resolve_target("Panelapp panel 1 (100)", &hgnc_table()).expect("resolve");
    assert_eq!(got.route, TargetRoute::Panels);
    assert_eq!(got.panel_ids, strings(&["100"]));
    assert!(got.genes.is_empty());
}

#[test]
fn multiple_panels() {
    let got = resolve_target(
        "Panelapp panel 1 (100), Panelapp panel 2 (101)",
        &hgnc_table(),
    )
    .expect("resolve");
    assert_eq!(got.panel_ids, strings(&["100", "101"]));
}

#[test]
fn genes_in_order() {
    let got = resolve_target("BRCA1, BRCA2", &hgnc_table()).expect("resolve");
    assert_eq!(got.route, TargetRoute::Genes);
    assert!(got.panel_ids.is_empty());
    assert_eq!(got.gene_ids(), vec![Some("HGNC:1100"), Some("HGNC:1101")]);
}

#[test]
fn panels_and_genes_mixed_gives_panels_only() {
    let got = resolve_target(
        "Panelapp panel 1 (100), Panelapp panel 2 (101), BRCA1, BRCA2",
        &hgnc_table(),
    )
    .expect("resolve");
    assert_eq!(got.panel_ids, strings(&["100", "101"]));
    assert!(got.genes.is_empty());
}

#[test]
fn unknown_gene_keeps_null_placeholder() {
    let got = resolve_target("BLARG", &hgnc_table()).expect("resolve");
    assert_eq!(got.gene_ids(), vec![None]);
    assert_eq!(got.identifiers(), vec![None]);
    assert_eq!(
        got.issues(),
        vec![TargetIssue::UnknownSymbol("BLARG".to_string())]
    );
}

#[test]
fn ambiguous_gene_is_flagged() {
    let got = resolve_target("TAZ, CBS", &hgnc_table()).expect("resolve");
    assert_eq!(got.gene_ids(), vec![None, Some("HGNC:1550")]);
    assert_eq!(
        got.issues(),
        vec![TargetIssue::AmbiguousSymbol("TAZ".to_string())]
    );
}

#[test]
fn unclassifiable_goes_to_manual_review() {
    let got = resolve_target("to be confirmed", &hgnc_table()).expect("resolve");
    assert_eq!(got.route, TargetRoute::ManualReview);
    assert!(got.is_empty());
    assert_eq!(got.issues(), vec![TargetIssue::Unclassifiable]);
}

#[test]
fn escaped_token_is_a_hard_failure() {
    let err = resolve_target("A-B", &hgnc_table()).unwrap_err();
    assert_eq!(err, ResolveError::EscapedTarget("A-B".to_string()));
}

#[test]
fn field_is_normalized() {
    assert_eq!(normalize_field("  Cardiac – QT (100) "), "Cardiac - QT (100)");
}

#[test]
fn resolution_is_idempotent() {
    let table = hgnc_table();
    for field in [
        "BRCA1, TAZ, BLARG",
        "Panelapp panel 1 (100 & 101)",
        "to be confirmed",
    ] {
        let first = resolve_target(field, &table).expect("resolve");
        let second = resolve_target(field, &table).expect("resolve");
        assert_eq!(first, second);
    }
}

#[test]
fn identifiers_trace_back_to_the_field() {
    let table = hgnc_table();
    for field in [
        "Panelapp panel 1 (100), Panelapp panel 2 (101)",
        "Cardiomyopathies (100 & 101)",
        "BRCA1, CCO, HIP4",
    ] {
        let got = resolve_target(field, &table).expect("resolve");
        for id in &got.panel_ids {
            assert!(field.contains(id.as_str()), "{id} not in {field}");
        }
        for gene in &got.genes {
            assert!(field.contains(gene.symbol.as_str()));
            if let Some(id) = gene.hgnc_id() {
                let row = (0..table.len())
                    .map(|idx| table.row(idx))
                    .find(|r| r.hgnc_id == id)
                    .expect("id comes from the table");
                let known = row.approved_symbol == gene.symbol
                    || row.previous_symbols.contains(gene.symbol.as_str())
                    || row.alias_symbols.contains(gene.symbol.as_str());
                assert!(known);
            }
        }
    }
}
