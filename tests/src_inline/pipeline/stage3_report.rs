use super::*;
use crate::model::target::TargetIssue;
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_targets::run_stage2;
use crate::report::json::read_td_output;
use crate::test_support::write_fixture_inputs;

#[test]
fn today_is_yymmdd() {
    let date = today();
    assert_eq!(date.len(), 6);
    assert!(date.bytes().all(|b| b.is_ascii_digit()));
}

#[test]
fn writes_json_and_manual_review() {
    let dir = tempfile::tempdir().expect("tempdir");
    let paths = write_fixture_inputs(dir.path());
    let load = run_stage1(&paths.td, &paths.config, &paths.hgnc, None).expect("stage1");
    let targets = run_stage2(&load).expect("stage2");

    let out_dir = dir.path().join("out");
    let (output, report) =
        run_stage3_report(&load, &targets, &out_dir, "261016_RD_TD_output", "261016")
            .expect("stage3");

    assert_eq!(output.td_source, "rd_test_directory");
    assert_eq!(output.config_source, "rare_disease_config");
    assert_eq!(output.date, "261016");
    assert_eq!(output.indications.len(), 2);
    assert_eq!(
        output.indications[0].panels,
        vec![Some("100".to_string()), Some("101".to_string())]
    );
    assert_eq!(
        output.indications[1].panels,
        vec![
            Some("HGNC:1100".to_string()),
            Some("HGNC:1101".to_string()),
            None
        ]
    );
    assert_eq!(
        output.indications[1].review,
        vec![TargetIssue::AmbiguousSymbol("TAZ".to_string())]
    );

    assert_eq!(report.json, out_dir.join("261016_RD_TD_output.json"));
    assert_eq!(read_td_output(&report.json).expect("read back"), output);

    let review = std::fs::read_to_string(&report.manual_review).expect("read review");
    let lines: Vec<&str> = review.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "R2\tambiguous_symbol\tTAZ\tBRCA1, BRCA2, TAZ");
}
