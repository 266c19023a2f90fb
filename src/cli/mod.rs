use clap::{Parser, Subcommand};

mod compare;
mod filter;
mod rare_disease;
mod transcripts;

#[derive(Parser, Debug)]
#[command(name = "kira-testdir", version, about = "Kira test directory CLI")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse the rare disease test directory into panels and genes
    RareDisease(rare_disease::RareDiseaseArgs),
    /// Compare signed-off panel content against the panel database
    Compare(compare::CompareArgs),
    /// Assign clinical transcripts from MANE and HGMD
    Transcripts(transcripts::TranscriptsArgs),
    /// List indication codes whose changes match a pattern
    Filter(filter::FilterArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::RareDisease(args) => rare_disease::handle(args),
            Command::Compare(args) => compare::handle(args),
            Command::Transcripts(args) => transcripts::handle(args),
            Command::Filter(args) => filter::handle(args),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
