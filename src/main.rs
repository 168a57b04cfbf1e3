//! ghtoken - GitHub personal access token helper
//!
//! Acquires a personal access token with your GitHub credentials,
//! answering two-factor challenges, and caches it for later runs.

use clap::{Parser, Subcommand};
use ghtoken_core::{error::GhTokenError, init_logging};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "ghtoken")]
#[command(about = "Acquire and cache a GitHub personal access token")]
#[command(version)]
struct Cli {
    /// Token cache file (default: ~/.github-token.json)
    #[arg(long, global = true, value_name = "PATH")]
    token_file: Option<PathBuf>,

    /// Application label stored as the token note
    #[arg(long, global = true, value_name = "LABEL")]
    note: Option<String>,

    /// Scope to request; repeat for several
    #[arg(long = "scope", global = true, value_name = "SCOPE")]
    scopes: Vec<String>,

    /// GitHub API root, for GitHub Enterprise
    #[arg(long, global = true, value_name = "URL")]
    api_root: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cached token, acquiring and caching a new one if needed
    Ensure,
    /// Acquire a new token without reading or writing the cache
    New,
    /// Print the cached token without contacting GitHub
    Show,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    if let Err(e) = init_logging("warn") {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let cli = Cli::parse();
    let overrides = cli::Overrides {
        token_file: cli.token_file,
        note: cli.note,
        scopes: cli.scopes,
        api_root: cli.api_root,
    };

    let result = match cli.command {
        Commands::Ensure => cli::token::run_ensure(&overrides).await,
        Commands::New => cli::token::run_new(&overrides).await,
        Commands::Show => cli::token::run_show(&overrides),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            let exit_code = match e {
                // Configuration errors (exit code 2)
                GhTokenError::Config(_) => 2,
                // Runtime errors (exit code 1)
                GhTokenError::Exchange(_)
                | GhTokenError::Cache(_)
                | GhTokenError::Io(_)
                | GhTokenError::Format(_) => 1,
            };

            tracing::error!(error = %e, "ghtoken failed");
            eprintln!("ghtoken: {}", e);
            std::process::exit(exit_code);
        }
    }
}
