use clap::Parser;

/// lintrelay — posts lint results into a code-review comment stream
#[derive(Parser, Debug, Clone)]
#[command(name = "lintrelay", version, about)]
pub struct Cli {
    /// Path to the lint results JSON file (e.g. from `tslint --format json`)
    #[arg(long)]
    pub results: Option<String>,

    /// Review backend to post notices to (console, github)
    #[arg(long)]
    pub review: Option<String>,

    /// Pull request number (github backend)
    #[arg(long)]
    pub pr: Option<u64>,

    /// Notice posted when the results file contains no issues
    #[arg(long)]
    pub success_message: Option<String>,

    /// Path to config file
    #[arg(long)]
    pub config: Option<String>,
}
