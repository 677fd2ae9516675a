//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use url::Url;

/// Deposit datasets into Dryad and inspect Dryad reference data.
///
/// Runs the Dryad repository adapter the same way a host application would.
#[derive(Parser, Debug)]
#[command(name = "dryad-deposit")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Dryad API root
    #[arg(long, global = true, default_value = "https://datadryad.org/api/v2")]
    pub server_url: Url,

    /// Dryad API access token
    #[arg(long, global = true, default_value = "", hide_default_value = true)]
    pub token: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that the server accepts the access token
    TestConnection,

    /// List the research domains Dryad accepts as field of science
    Subjects,

    /// List the licenses Dryad accepts
    Licenses,

    /// Create a draft dataset from metadata and upload one file into it
    Deposit {
        /// File to upload
        #[arg(long)]
        file: PathBuf,

        /// JSON file with the submission metadata
        #[arg(long)]
        metadata: PathBuf,
    },
}
