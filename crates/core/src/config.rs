//! Configuration management for the pdfcite CLI.
//!
//! Configuration is environment-first: the PDF folder and the Anthropic
//! credential are read once at startup, and their absence is a fatal
//! startup error. Command-line flags override environment values.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Default model used for all inference requests.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Default evaluation score at which the search loop stops early.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Default Anthropic API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Main application configuration.
///
/// This struct holds all global configuration options that affect
/// CLI behavior across commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Folder searched (recursively) for PDF documents
    pub folder: PathBuf,

    /// Anthropic API key
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Model identifier for all inference requests
    pub model: String,

    /// Evaluation score threshold for early exit
    pub threshold: f64,

    /// Base URL of the Anthropic API
    pub base_url: String,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PDF_FOLDER_PATH`: Folder containing the PDF documents (required)
    /// - `ANTHROPIC_API_KEY`: Anthropic credential (required)
    /// - `PDFCITE_MODEL`: Model identifier
    /// - `PDFCITE_THRESHOLD`: Early-exit score threshold in [0, 1]
    /// - `ANTHROPIC_BASE_URL`: API endpoint override
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// Missing required variables surface as `AppError::Config` — the
    /// caller treats that as fatal, not as a runtime condition.
    pub fn load() -> AppResult<Self> {
        let folder = std::env::var("PDF_FOLDER_PATH")
            .map(PathBuf::from)
            .map_err(|_| {
                AppError::Config("PDF_FOLDER_PATH environment variable is not set".to_string())
            })?;

        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            AppError::Config("ANTHROPIC_API_KEY environment variable is not set".to_string())
        })?;

        let model =
            std::env::var("PDFCITE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let threshold = match std::env::var("PDFCITE_THRESHOLD") {
            Ok(raw) => parse_threshold(&raw)?,
            Err(_) => DEFAULT_THRESHOLD,
        };

        let base_url =
            std::env::var("ANTHROPIC_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            folder,
            api_key,
            model,
            threshold,
            base_url,
            log_level: std::env::var("RUST_LOG").ok(),
            verbose: false,
            no_color: std::env::var("NO_COLOR").is_ok(),
        })
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Command-line flags take precedence over environment variables.
    pub fn with_overrides(
        mut self,
        folder: Option<PathBuf>,
        model: Option<String>,
        threshold: Option<f64>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(folder) = folder {
            self.folder = folder;
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(threshold) = threshold {
            self.threshold = threshold;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> AppResult<()> {
        if self.api_key.is_empty() {
            return Err(AppError::Config("ANTHROPIC_API_KEY is empty".to_string()));
        }

        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(AppError::Config(format!(
                "Evaluation threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }

        Ok(())
    }
}

fn parse_threshold(raw: &str) -> AppResult<f64> {
    let value: f64 = raw.parse().map_err(|_| {
        AppError::Config(format!("PDFCITE_THRESHOLD is not a number: {:?}", raw))
    })?;

    if !(0.0..=1.0).contains(&value) {
        return Err(AppError::Config(format!(
            "PDFCITE_THRESHOLD must be within [0, 1], got {}",
            value
        )));
    }

    Ok(value)
}
