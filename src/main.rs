use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use lproj_lint::AuditConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "lproj-lint",
    about = "Checks that every localized .strings file matches the base language",
    version,
    author,
    long_about = None
)]
struct Cli {
    /// Path to the project root
    root: PathBuf,

    /// Language code of the base language, e.g. 'ja'
    base_locale: String,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    let config = AuditConfig::new(cli.root, cli.base_locale);
    if commands::check_command(config)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("lproj_lint=warn"), // Default: per-check details
        1 => EnvFilter::new("lproj_lint=info"), // -v: files and directories
        _ => EnvFilter::new("lproj_lint=debug"), // -vv or more: full debug
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
