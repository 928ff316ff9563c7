//! Candidate enumeration.
//!
//! Finds PDF files under the configured folder. An empty result is a
//! meaningful state ("no documents"), never an error — a missing folder
//! or a folder with no matches both yield an empty list.

use crate::types::Candidate;
use std::path::Path;
use walkdir::WalkDir;

/// Find all PDF files under `folder`, recursively.
///
/// Matching is by extension (`.pdf`, ASCII case-insensitive). No
/// ordering is guaranteed; the ranker decides processing order.
pub fn find_pdfs(folder: &Path) -> Vec<Candidate> {
    let candidates: Vec<Candidate> = WalkDir::new(folder)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false)
        })
        .map(|entry| Candidate::new(entry.into_path()))
        .collect();

    tracing::debug!(
        "Found {} PDF file(s) under {}",
        candidates.len(),
        folder.display()
    );

    candidates
}
