//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `toolscout` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use toolscout::config::Opt;
use toolscout::initialization::init_logger_with;
use toolscout::{run_collection, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // .env in the current directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_collection(config).await {
        Ok(report) => {
            println!(
                "✅ Collected {} tool{} ({} succeeded, {} failed) in {:.1}s",
                report.summary.total,
                if report.summary.total == 1 { "" } else { "s" },
                report.summary.successful,
                report.summary.failed,
                report.elapsed_seconds
            );
            println!(
                "Results saved in {} and {}",
                report.results_path.display(),
                report.markdown_path.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("toolscout error: {:#}", e);
            process::exit(1);
        }
    }
}
