use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_targets::run_stage2;
use crate::pipeline::stage3_report::{run_stage3_report, today};

#[derive(Args, Debug)]
pub struct RareDiseaseArgs {
    /// Tab-separated export of the test directory sheet
    pub(crate) test_directory: PathBuf,

    /// TOML config describing the sheet columns
    #[arg(long)]
    pub(crate) config: PathBuf,

    /// HGNC dump (TSV, optionally gzipped)
    #[arg(long)]
    pub(crate) hgnc: PathBuf,

    /// Optional internal test directory restricting the indications
    #[arg(long)]
    internal: Option<PathBuf>,

    /// Output directory
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Output name, defaults to <YYMMDD>_RD_TD_output
    #[arg(long)]
    pub(crate) name: Option<String>,
}

pub fn handle(args: RareDiseaseArgs) -> anyhow::Result<()> {
    let date = today();

    let start = Instant::now();
    info!(stage = "stage1_load", "starting stage");
    let load = run_stage1(
        &args.test_directory,
        &args.config,
        &args.hgnc,
        args.internal.as_deref(),
    )?;
    info!(
        stage = "stage1_load",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage2_targets", "starting stage");
    let targets = run_stage2(&load)?;
    info!(
        stage = "stage2_targets",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage3_report", "starting stage");
    let name = match &args.name {
        Some(name) => name.clone(),
        None => format!("{date}_RD_TD_output"),
    };
    run_stage3_report(&load, &targets, &args.out, &name, &date)?;
    info!(
        stage = "stage3_report",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );
    Ok(())
}
