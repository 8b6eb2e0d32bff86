use crate::enums::commands::Commands;
use clap::Parser;

#[derive(Parser)]
#[clap(name = "notelyzer")]
#[clap(about = "Note analysis tool with sentiment scoring and reading-time estimation", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
