//! pdfcite CLI
//!
//! Main entry point for the pdfcite command-line tool: answer questions
//! against a local folder of PDF documents, with citations, via the
//! Anthropic Messages API.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, ListCommand};
use pdfcite_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// pdfcite - answer questions from local PDFs, with citations
#[derive(Parser, Debug)]
#[command(name = "pdfcite")]
#[command(about = "Answer questions from local PDF files, with citations", long_about = None)]
#[command(version)]
struct Cli {
    /// Folder containing the PDF documents (default: PDF_FOLDER_PATH)
    #[arg(short, long, global = true)]
    folder: Option<PathBuf>,

    /// Model identifier
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Evaluation score threshold for early exit (0-1)
    #[arg(short, long, global = true)]
    threshold: Option<f64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer a question from the PDF folder
    Ask(AskCommand),

    /// List the PDF files the agent would consider
    List(ListCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from environment; missing required
    // variables are fatal here, before any work starts
    let config = AppConfig::load()?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.folder,
        cli.model,
        cli.threshold,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    config.validate()?;

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("pdfcite starting");
    tracing::debug!("Folder: {:?}", config.folder);
    tracing::debug!("Model: {}", config.model);
    tracing::debug!("Threshold: {}", config.threshold);

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::List(_) => "list",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::List(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
