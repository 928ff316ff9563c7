//! Command handlers for the pdfcite CLI.

pub mod ask;
pub mod list;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use list::ListCommand;
