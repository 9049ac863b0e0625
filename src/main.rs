use clap::Parser;
use tracing::info;

use lintrelay::cli::Cli;
use lintrelay::config::Config;
use lintrelay::reporter::Reporter;
use lintrelay::review::{AnyReview, ConsoleReview, GitHubReview};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let config = match Config::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    info!(?config, "config loaded");

    let review = match (config.review.as_str(), config.pr) {
        ("github", Some(pr)) => AnyReview::GitHub(GitHubReview::new(pr)),
        _ => AnyReview::Console(ConsoleReview::new()),
    };

    let reporter = Reporter::new(&review);
    if let Err(e) = reporter.run(&config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
