//! List command handler.
//!
//! Shows the candidate PDFs the agent would consider, without issuing
//! any inference requests.

use clap::Args;
use pdfcite_agent::locator;
use pdfcite_core::{config::AppConfig, AppError, AppResult};

/// List the PDF files the agent would consider
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing list command");

        let candidates = locator::find_pdfs(&config.folder);

        if self.json {
            let json = serde_json::to_string_pretty(&candidates)
                .map_err(|e| AppError::Serialization(e.to_string()))?;
            println!("{}", json);
        } else {
            if candidates.is_empty() {
                println!("No PDF files found in {}", config.folder.display());
                return Ok(());
            }

            for candidate in &candidates {
                println!("{}\t{}", candidate.title, candidate.path.display());
            }
        }

        Ok(())
    }
}
