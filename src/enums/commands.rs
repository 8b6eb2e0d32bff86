use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create a sample configuration file
    Init,
    /// Analyze a note (file path, or stdin when omitted)
    Analyze {
        file: Option<String>,
        /// Skip the advanced backend even when it is configured
        #[clap(long)]
        basic: bool,
        /// Print the raw result as JSON instead of the dashboard
        #[clap(long)]
        json: bool,
        /// Export a timestamped JSON report into this directory
        #[clap(short, long)]
        export: Option<String>,
    },
    /// Probe the advanced backend and report its state
    Status,
    /// Check the configuration file for problems
    Validate,
}
