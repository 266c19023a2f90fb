use super::*;

#[test]
fn load_dir_reads_both_exports() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join(PANEL_GENES_FILE),
        "panelapp_id\tpanel_version\thgnc_id\n\
         100\t1.0\tHGNC:1100\n\
         100\t1.0\tHGNC:1101\n\
         100\t2.0\tHGNC:1100\n\
         101\t3.1\tHGNC:1550\n",
    )
    .expect("write panels");
    std::fs::write(
        dir.path().join(GENE_TRANSCRIPTS_FILE),
        "hgnc_id\ttranscript\tclinical_transcript\n\
         HGNC:1100\tNM_007294.4\t1\n\
         HGNC:1100\tNM_007297.4\t0\n",
    )
    .expect("write transcripts");

    let db = TsvPanelDatabase::load_dir(dir.path()).expect("load");
    let versions = db.panel_genes("100");
    assert_eq!(versions.len(), 2);
    assert_eq!(versions["1.0"].len(), 2);
    assert!(versions["2.0"].contains("HGNC:1100"));
    assert_eq!(db.panel_genes("101")["3.1"].len(), 1);

    let transcripts = db.gene_transcripts("HGNC:1100");
    assert_eq!(
        transcripts,
        vec![
            TranscriptRecord {
                transcript: "NM_007294.4".to_string(),
                clinical: true
            },
            TranscriptRecord {
                transcript: "NM_007297.4".to_string(),
                clinical: false
            },
        ]
    );
}

#[test]
fn unknown_keys_give_empty_lookups() {
    let db = TsvPanelDatabase::default();
    assert!(db.panel_genes("999").is_empty());
    assert!(db.gene_transcripts("HGNC:1").is_empty());
}

#[test]
fn load_dir_fails_without_exports() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(TsvPanelDatabase::load_dir(dir.path()).is_err());
}

#[test]
fn signed_off_panels_group_by_panel() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("signed_off.tsv");
    std::fs::write(
        &path,
        "panelapp_id\thgnc_id\n100\tHGNC:1100\n100\tHGNC:1550\n101\tHGNC:1601\n",
    )
    .expect("write");

    let panels = read_signed_off_panels(&path).expect("read");
    assert_eq!(panels.len(), 2);
    assert_eq!(panels["100"].len(), 2);
    assert!(panels["101"].contains("HGNC:1601"));
}
