use std::path::PathBuf;

use clap::Args;

use crate::report::json::{filter_indications, read_td_output};

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// JSON output of the rare-disease command
    #[arg(long)]
    td_json: PathBuf,

    /// Case-insensitive pattern matched against the changes column
    #[arg(long)]
    pattern: String,
}

pub fn handle(args: FilterArgs) -> anyhow::Result<()> {
    let output = read_td_output(&args.td_json)?;
    for code in filter_indications(&output, &args.pattern)? {
        println!("{code}");
    }
    Ok(())
}
