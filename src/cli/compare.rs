use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::panels::compare::compare_panel_content;
use crate::panels::db::{TsvPanelDatabase, read_signed_off_panels};
use crate::report::json::read_td_output;
use crate::report::text::{write_keyed, write_list};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// JSON output of the rare-disease command
    #[arg(long)]
    td_json: PathBuf,

    /// Directory with panel_genes.tsv and gene_transcripts.tsv
    #[arg(long)]
    panel_db: PathBuf,

    /// Signed-off panels TSV (panelapp_id, hgnc_id)
    #[arg(long)]
    signed_off: PathBuf,

    /// Output directory
    #[arg(long)]
    out: PathBuf,
}

pub fn handle(args: CompareArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out)?;

    let output = read_td_output(&args.td_json)?;
    let db = TsvPanelDatabase::load_dir(&args.panel_db)?;
    let signed_off = read_signed_off_panels(&args.signed_off)?;
    info!(
        indications = output.indications.len(),
        signed_off_panels = signed_off.len(),
        "loaded comparison inputs"
    );

    let cmp = compare_panel_content(&db, &output, &signed_off)?;

    write_keyed(&args.out.join("panel_absent_genes.tsv"), &cmp.absent_genes)?;
    write_keyed(
        &args.out.join("panel_no_clinical_transcripts.tsv"),
        &cmp.no_clinical_transcripts,
    )?;
    write_list(&args.out.join("all_absent_genes.txt"), &cmp.all_absent_genes)?;
    write_list(
        &args.out.join("all_no_clinical_transcripts.txt"),
        &cmp.all_no_clinical_transcripts,
    )?;
    write_list(
        &args.out.join("missing_from_database.txt"),
        &cmp.missing_from_database,
    )?;
    write_list(
        &args.out.join("missing_signed_off_panels.txt"),
        &cmp.missing_signed_off,
    )?;
    Ok(())
}
