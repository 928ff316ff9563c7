//! LLM integration crate for the pdfcite CLI.
//!
//! This crate provides the wire types for the Anthropic Messages API and
//! a trait-based client seam so the agent pipeline can be exercised with
//! a scripted client in tests.
//!
//! # Example
//! ```no_run
//! use pdfcite_llm::{AnthropicClient, InferenceClient, MessagesRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AnthropicClient::new("sk-...", "https://api.anthropic.com");
//! let request = MessagesRequest::text("Say hello.", "claude-3-5-sonnet-20241022");
//! let response = client.create(&request).await?;
//! println!("{}", response.first_text().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

// Re-export main types
pub use client::{AnthropicClient, InferenceClient};
pub use types::{
    Citation, ContentBlock, Message, MessagesRequest, MessagesResponse, ResponseBlock, Usage,
};
