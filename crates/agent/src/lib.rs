//! PDF question-answering agent for the pdfcite CLI.
//!
//! This crate implements the search pipeline: enumerate candidate PDFs,
//! rank them by likely relevance to the question, then query each in
//! ranked order — generating an answer with citations and scoring it —
//! until an answer clears the evaluation threshold or the candidates
//! are exhausted.
//!
//! All inference goes through the [`pdfcite_llm::InferenceClient`]
//! trait; the one shared client handle is constructed by the caller and
//! passed in.

pub mod evaluator;
pub mod extract;
pub mod locator;
pub mod qa;
pub mod ranker;
pub mod selector;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types and entry point
pub use selector::answer_question;
pub use types::{AgentOptions, AgentResult, Candidate, Evaluation};
