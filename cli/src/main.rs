//! CLI for the trending watcher.
//!
//! `review` (the default) posts DeepWiki summaries on trending issues,
//! `scan` opens issues for newly trending repositories and `cleanup` trims
//! the checked-repository list.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use trending_watcher::trending::{DEFAULT_CHECKED_PATH, MAX_CHECKED};
use trending_watcher::{
    cleanup_checked, load_settings, CleanupReport, ConfigError, HostRepository, RunSummary,
    Runner, RunnerConfig, RunnerError, ScanReport,
};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Trending Watcher - Enrich trending-repository issues with DeepWiki summaries.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    github: GitHubArgs,

    /// Path to a watcher.toml settings file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log what would be posted without writing to GitHub or the checked list.
    #[arg(long, global = true)]
    dry_run: bool,
}

#[derive(Args, Debug)]
struct GitHubArgs {
    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// Repository holding the trending issues, as `owner/repo`.
    /// Falls back to GITHUB_REPOSITORY.
    #[arg(long, global = true)]
    repository: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Post DeepWiki reviews on eligible trending issues.
    Review,

    /// Open issues for repositories newly on the trending page.
    Scan {
        /// Path to the checked-repository list.
        #[arg(long, default_value = DEFAULT_CHECKED_PATH)]
        checked_file: PathBuf,
    },

    /// Deduplicate and trim the checked-repository list.
    Cleanup {
        /// Path to the checked-repository list.
        #[arg(long, default_value = DEFAULT_CHECKED_PATH)]
        checked_file: PathBuf,

        /// Number of most recent entries to keep.
        #[arg(long, default_value_t = MAX_CHECKED)]
        max: usize,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    // Both ring and aws-lc-rs may be compiled in through dependencies.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(RunnerError::Config(e)) => {
            error!(error = %e, "Invalid configuration");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "Run aborted");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Log level is taken from `RUST_LOG`, defaulting to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(cli: Cli) -> Result<(), RunnerError> {
    match cli.command.unwrap_or(Command::Review) {
        Command::Review => {
            let runner = build_runner(cli.github, cli.config.as_deref(), cli.dry_run)?;
            let summary = runner.run().await?;
            print_summary(&summary);
        }
        Command::Scan { checked_file } => {
            let runner = build_runner(cli.github, cli.config.as_deref(), cli.dry_run)?;
            let report = runner.scan(&checked_file).await?;
            print_scan_report(&report, cli.dry_run);
        }
        Command::Cleanup { checked_file, max } => {
            let report = cleanup_checked(&checked_file, max)?;
            print_cleanup_report(&report);
        }
    }
    Ok(())
}

fn build_runner(
    github: GitHubArgs,
    config_path: Option<&Path>,
    dry_run: bool,
) -> Result<Runner, RunnerError> {
    let token = github
        .token
        .filter(|t| !t.trim().is_empty())
        .ok_or(ConfigError::MissingToken)?;
    let host = HostRepository::resolve(github.repository.as_deref())?;
    let settings = load_settings(config_path)?;

    let config = RunnerConfig::new(host, token, dry_run).with_settings(settings);
    Runner::new(config)
}

/// Prints the final review summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Issues needing review: {}", summary.issues_found);
    println!("  Reviews posted: {}", summary.reviewed);
    println!("  Failure notices posted: {}", summary.failed);
    println!("  Issues skipped: {}", summary.skipped);
}

fn print_scan_report(report: &ScanReport, dry_run: bool) {
    println!("\nScan:");
    println!("  Mode: {}", if dry_run { "Dry Run" } else { "Live" });
    println!("  Trending repositories: {}", report.trending);
    println!("  New repositories: {}", report.new_repositories.len());

    if !dry_run {
        println!("  Issues created: {}", report.issues_created);
        println!("  Issues failed: {}", report.issues_failed);
    }
}

fn print_cleanup_report(report: &CleanupReport) {
    println!("\nCleanup:");
    println!("  Original entries: {}", report.original);
    println!("  Duplicates removed: {}", report.duplicates_removed);
    println!("  Old entries removed: {}", report.old_removed);
    println!("  Remaining entries: {}", report.remaining);
}
