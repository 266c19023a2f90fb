use super::*;
use crate::model::target::{TargetIssue, TargetRoute};
use crate::pipeline::stage1_load::run_stage1;
use crate::test_support::write_fixture_inputs;

fn load(internal: Option<&str>) -> (tempfile::TempDir, LoadCtx) {
    let dir = tempfile::tempdir().expect("tempdir");
    let paths = write_fixture_inputs(dir.path());
    let internal_path = internal.map(|text| {
        let path = dir.path().join("internal.tsv");
        std::fs::write(&path, text).expect("write");
        path
    });
    let ctx = run_stage1(
        &paths.td,
        &paths.config,
        &paths.hgnc,
        internal_path.as_deref(),
    )
    .expect("stage1");
    (dir, ctx)
}

#[test]
fn resolves_every_row_and_keeps_ngs() {
    let (_dir, ctx) = load(None);
    let targets = run_stage2(&ctx).expect("stage2");

    assert_eq!(targets.all.len(), 4);
    let ngs: Vec<&str> = targets.ngs.iter().map(|ci| ci.code.as_str()).collect();
    assert_eq!(ngs, vec!["R1", "R2"]);
    assert_eq!(targets.selected().len(), 2);

    let r1 = &targets.all[0];
    assert_eq!(r1.name, "Hypertrophic cardiomyopathy - teen and adult");
    assert_eq!(r1.target.route, TargetRoute::Panels);
    assert_eq!(r1.target.panel_ids, vec!["100".to_string(), "101".to_string()]);

    let r2 = &targets.all[1];
    assert_eq!(
        r2.target.gene_ids(),
        vec![Some("HGNC:1100"), Some("HGNC:1101"), None]
    );
    assert_eq!(
        r2.target.issues(),
        vec![TargetIssue::AmbiguousSymbol("TAZ".to_string())]
    );

    assert_eq!(targets.all[2].target.route, TargetRoute::ManualReview);
    assert_eq!(targets.all[3].gemini_name, "R4_Homocystinuria_G");
}

#[test]
fn internal_codes_select_from_all_indications() {
    let (_dir, ctx) = load(Some("Clinical indication ID\nR4\nR1\n"));
    let targets = run_stage2(&ctx).expect("stage2");
    let selected: Vec<&str> = targets.selected().iter().map(|ci| ci.code.as_str()).collect();
    assert_eq!(selected, vec!["R1", "R4"]);
}

#[test]
fn unknown_internal_code_fails() {
    let (_dir, ctx) = load(Some("Clinical indication ID\nR9\n"));
    let err = run_stage2(&ctx).unwrap_err();
    assert!(matches!(err, Stage2Error::MissingInternalCode(ref code) if code == "R9"));
}

#[test]
fn escaped_target_names_the_row() {
    let (_dir, mut ctx) = load(None);
    ctx.sheet.rows[1].target = "A-B".to_string();
    let err = run_stage2(&ctx).unwrap_err();
    match err {
        Stage2Error::Resolve { code, source } => {
            assert_eq!(code, "R2");
            assert_eq!(source, ResolveError::EscapedTarget("A-B".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}
