use super::*;
use crate::panels::db::TsvPanelDatabase;
use crate::report::json::IndicationRecord;

fn indication(code: &str, panels: &[Option<&str>]) -> IndicationRecord {
    IndicationRecord {
        name: format!("{code} name"),
        code: code.to_string(),
        gemini_name: format!("{code}_name_P"),
        test_method: "WGS".to_string(),
        panels: panels.iter().map(|p| p.map(str::to_string)).collect(),
        original_targets: String::new(),
        changes: String::new(),
        genes: Vec::new(),
        review: Vec::new(),
    }
}

fn output(indications: Vec<IndicationRecord>) -> TdOutput {
    TdOutput {
        td_source: "td".to_string(),
        config_source: "cfg".to_string(),
        date: "261016".to_string(),
        indications,
    }
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn database() -> TsvPanelDatabase {
    let mut db = TsvPanelDatabase::default();
    db.insert_panel_gene("100", "1.0", "HGNC:1");
    db.insert_panel_gene("100", "1.1", "HGNC:1");
    db.insert_panel_gene("100", "1.1", "HGNC:2");
    db.insert_panel_gene("101", "2.0", "HGNC:5");
    db.insert_transcript("HGNC:1", "NM_1.1", true);
    db.insert_transcript("HGNC:2", "NM_2.1", true);
    db.insert_transcript("HGNC:3", "NM_3.1", false);
    db.insert_transcript("HGNC:5", "NM_5.1", true);
    db
}

#[test]
fn current_genes_use_latest_version() {
    let db = database();
    assert_eq!(
        current_panel_genes(&db, "100").expect("genes"),
        Some(set(&["HGNC:1", "HGNC:2"]))
    );
    assert_eq!(
        current_panel_genes(&db, "101").expect("genes"),
        Some(set(&["HGNC:5"]))
    );
    assert_eq!(current_panel_genes(&db, "999").expect("genes"), None);
}

#[test]
fn current_genes_with_addon() {
    let mut db = TsvPanelDatabase::default();
    db.insert_panel_gene("7", "2.1", "HGNC:1");
    db.insert_panel_gene("7", "2.1|1", "HGNC:9");
    assert_eq!(
        current_panel_genes(&db, "7").expect("genes"),
        Some(set(&["HGNC:9"]))
    );
}

#[test]
fn gene_check_splits_absent_and_non_clinical() {
    let db = database();
    let genes = set(&["HGNC:1", "HGNC:3", "HGNC:4"]);
    let (absent, no_clinical) = check_genes_in_database(&db, &genes);
    assert_eq!(absent, set(&["HGNC:4"]));
    assert_eq!(no_clinical, set(&["HGNC:3"]));
}

#[test]
fn panelapp_ids_start_with_a_digit() {
    assert!(is_panelapp_id("100"));
    assert!(!is_panelapp_id("HGNC:1100"));
    assert!(!is_panelapp_id(""));
}

#[test]
fn comparison_reports_new_genes() {
    let db = database();
    let out = output(vec![
        indication("R1", &[Some("100")]),
        indication("R2", &[Some("101"), None]),
        indication("R3", &[Some("555")]),
        indication("R4", &[Some("HGNC:1100")]),
    ]);
    let mut signed_off = HashMap::new();
    signed_off.insert("100".to_string(), set(&["HGNC:1", "HGNC:3", "HGNC:4"]));

    let cmp = compare_panel_content(&db, &out, &signed_off).expect("compare");
    assert_eq!(cmp.absent_genes["R1"], set(&["HGNC:4"]));
    assert_eq!(cmp.no_clinical_transcripts["R1"], set(&["HGNC:3"]));
    assert_eq!(cmp.all_absent_genes, set(&["HGNC:4"]));
    assert_eq!(cmp.all_no_clinical_transcripts, set(&["HGNC:3"]));
    assert_eq!(cmp.missing_from_database, set(&["R3"]));
    assert_eq!(cmp.missing_signed_off, set(&["101"]));
    assert!(!cmp.absent_genes.contains_key("R4"));
}
