//! Ask command handler.
//!
//! Runs the full search pipeline for one question and prints the result
//! as JSON on stdout. This process contract — question in, structured
//! `{answer, evaluation, source_pdf}` object out — is what external
//! tool hosts consume.

use clap::Args;
use pdfcite_agent::{answer_question, AgentOptions};
use pdfcite_core::{config::AppConfig, AppError, AppResult};
use pdfcite_llm::AnthropicClient;
use std::sync::Arc;

/// Answer a question from the PDF folder
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to answer
    pub question: String,

    /// Compact (single-line) JSON output
    #[arg(long)]
    pub compact: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");
        tracing::debug!("Question: {}", self.question);

        // The one shared client handle for the whole run
        let client: Arc<dyn pdfcite_llm::InferenceClient> =
            Arc::new(AnthropicClient::new(&config.api_key, &config.base_url));

        let options = AgentOptions::new(&self.question, &config.model, config.threshold);

        let result = answer_question(client.as_ref(), &config.folder, &options).await?;

        let json = if self.compact {
            serde_json::to_string(&result)
        } else {
            serde_json::to_string_pretty(&result)
        }
        .map_err(|e| AppError::Serialization(e.to_string()))?;

        // stdout carries data only; logs went to stderr
        println!("{}", json);

        Ok(())
    }
}
