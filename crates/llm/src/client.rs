//! Anthropic Messages API client.
//!
//! The client is constructed once at process start and shared (behind
//! `Arc<dyn InferenceClient>`) by every component that issues inference
//! requests. There is no retry or backoff here: a transient network
//! failure surfaces as `AppError::Llm` to the immediate caller.

use crate::types::{MessagesRequest, MessagesResponse};
use pdfcite_core::{AppError, AppResult};

/// Anthropic API version header value.
const API_VERSION: &str = "2023-06-01";

/// Trait for the remote inference service.
///
/// The agent pipeline depends on this trait rather than on the concrete
/// HTTP client, so tests can substitute a scripted implementation.
#[async_trait::async_trait]
pub trait InferenceClient: Send + Sync {
    /// Get the provider name (e.g., "anthropic").
    fn provider_name(&self) -> &str;

    /// Send one Messages request and wait for the complete response.
    async fn create(&self, request: &MessagesRequest) -> AppResult<MessagesResponse>;
}

/// HTTP client for the Anthropic Messages API.
pub struct AnthropicClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl AnthropicClient {
    /// Create a new client for the given credential and endpoint.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl InferenceClient for AnthropicClient {
    fn provider_name(&self) -> &str {
        "anthropic"
    }

    async fn create(&self, request: &MessagesRequest) -> AppResult<MessagesResponse> {
        tracing::info!(model = %request.model, "Sending request to Anthropic");

        let url = format!("{}/v1/messages", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to send request to Anthropic: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Llm(format!(
                "Anthropic API error ({}): {}",
                status, error_text
            )));
        }

        let messages_response: MessagesResponse = response
            .json()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to parse Anthropic response: {}", e)))?;

        tracing::debug!(
            input_tokens = messages_response.usage.input_tokens,
            output_tokens = messages_response.usage.output_tokens,
            "Received response from Anthropic"
        );

        Ok(messages_response)
    }
}
