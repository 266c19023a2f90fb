use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::input::g2t::read_g2t;
use crate::input::hgnc::read_hgnc_dump;
use crate::input::mane::read_mane;
use crate::transcripts::{
    TsvHgmd, assign_transcripts, mane_by_gene, write_g2t, write_transcript_status,
};

#[derive(Args, Debug)]
pub struct TranscriptsArgs {
    /// MANE CSV export
    #[arg(long)]
    mane: PathBuf,

    /// Gene to transcripts file (HGNC id, transcript)
    #[arg(long)]
    g2t: PathBuf,

    /// HGMD transcripts TSV (hgnc_number, refcore, refversion)
    #[arg(long)]
    hgmd: PathBuf,

    /// HGNC dump (TSV, optionally gzipped)
    #[arg(long)]
    hgnc: PathBuf,

    /// Output directory
    #[arg(long)]
    out: PathBuf,
}

pub fn handle(args: TranscriptsArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out)?;

    let table = read_hgnc_dump(&args.hgnc)?;
    let mane = mane_by_gene(&read_mane(&args.mane)?, &table);
    let g2t = read_g2t(&args.g2t)?;
    let hgmd = TsvHgmd::load(&args.hgmd)?;
    info!(mane = mane.len(), genes = g2t.len(), "loaded transcript inputs");

    let data = assign_transcripts(&mane, &g2t, &hgmd)?;
    write_g2t(&args.out.join("g2t.tsv"), &data)?;
    write_transcript_status(&args.out, &data)?;

    let clinical = data.values().filter(|a| a.clinical.is_some()).count();
    info!(genes = data.len(), clinical, "assigned clinical transcripts");
    Ok(())
}
