//! CLI entry point for the Dryad deposit adapter.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use dryad_adapter::{
    DryadRepository, Repository, RepositoryConfig, RepositoryConfigurer,
    RepositoryOperationResult, SubmissionMetadata,
};
use tracing::{debug, info};

mod cli;

use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(command = ?args.command, server_url = %args.server_url, "CLI arguments parsed");

    let config = RepositoryConfig::new(args.server_url, args.token, "", "dryad-deposit");
    let repository = DryadRepository::configure(config).context("Failed to configure Dryad adapter")?;

    match args.command {
        Command::TestConnection => Ok(report(&repository.test_connection().await)),
        Command::Subjects => {
            for subject in repository.configurer().subjects() {
                println!("{}", subject.name);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Licenses => {
            for license in repository.configurer().license_config_info().licenses {
                let def = license.license_definition;
                println!("{}\t{}", def.name, def.url);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Deposit {
            file,
            metadata: metadata_path,
        } => {
            let raw = std::fs::read_to_string(&metadata_path).with_context(|| {
                format!("Failed to read metadata file {}", metadata_path.display())
            })?;
            let metadata: SubmissionMetadata = serde_json::from_str(&raw).with_context(|| {
                format!("Invalid submission metadata in {}", metadata_path.display())
            })?;

            info!(file = %file.display(), title = %metadata.title, "Depositing to Dryad");
            let result = repository
                .submit_deposit(None, &file, &metadata, Some(repository.config()))
                .await;
            Ok(report(&result))
        }
    }
}

/// Prints an operation result and maps it to the process exit code.
fn report(result: &RepositoryOperationResult) -> ExitCode {
    if result.is_succeeded() {
        println!("{}", result.message());
        if let Some(url) = result.url() {
            println!("{url}");
        }
        ExitCode::SUCCESS
    } else {
        eprintln!("{}", result.message());
        ExitCode::FAILURE
    }
}
