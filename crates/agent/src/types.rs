//! Data types for the PDF agent pipeline.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// One source document under consideration.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    /// Path to the PDF file
    pub path: PathBuf,

    /// Display title (filename without extension)
    pub title: String,
}

impl Candidate {
    /// Create a candidate from a file path, deriving the title from the
    /// file stem.
    pub fn new(path: PathBuf) -> Self {
        let title = title_of(&path);
        Self { path, title }
    }
}

/// Quality assessment of a produced answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Quality score in [0, 1]
    pub score: f64,

    /// Explanation of the score
    pub reasoning: String,

    /// Suggested improvements
    pub improvements: String,
}

impl Evaluation {
    /// Sentinel returned when the evaluator's reply could not be parsed.
    /// A zero score keeps the selection loop moving instead of aborting it.
    pub fn unparsable() -> Self {
        Self {
            score: 0.0,
            reasoning: "Failed to parse evaluation".to_string(),
            improvements: "Try reformulating the answer".to_string(),
        }
    }

    fn empty() -> Self {
        Self {
            score: 0.0,
            reasoning: String::new(),
            improvements: String::new(),
        }
    }
}

/// Final result of a search: the best answer found, its evaluation, and
/// the source document it came from.
///
/// Serializes to the tool contract:
/// `{answer, evaluation: {score, reasoning, improvements}, source_pdf}`,
/// with `source_pdf` omitted when no document produced the answer.
#[derive(Debug, Clone, Serialize)]
pub struct AgentResult {
    pub answer: String,

    pub evaluation: Evaluation,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_pdf: Option<String>,
}

impl AgentResult {
    /// Sentinel for an empty candidate set.
    pub fn no_candidates() -> Self {
        Self {
            answer: "No PDF files found in the specified folder.".to_string(),
            evaluation: Evaluation::empty(),
            source_pdf: None,
        }
    }

    /// Sentinel the selection loop starts from; returned unchanged when
    /// no candidate beats a zero score.
    pub fn no_answer() -> Self {
        Self {
            answer: "No suitable answer found in the PDF files.".to_string(),
            evaluation: Evaluation::empty(),
            source_pdf: None,
        }
    }
}

/// Options for one agent invocation.
#[derive(Debug, Clone)]
pub struct AgentOptions {
    /// The question to answer
    pub question: String,

    /// Model identifier for all inference requests
    pub model: String,

    /// Evaluation score at which the search stops early
    pub threshold: f64,
}

impl AgentOptions {
    pub fn new(question: impl Into<String>, model: impl Into<String>, threshold: f64) -> Self {
        Self {
            question: question.into(),
            model: model.into(),
            threshold,
        }
    }
}

/// Derive a display title from a file path (filename without extension).
pub(crate) fn title_of(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_title_from_stem() {
        let candidate = Candidate::new(PathBuf::from("/docs/annual report 2024.pdf"));
        assert_eq!(candidate.title, "annual report 2024");
    }

    #[test]
    fn test_no_candidates_sentinel_serialization() {
        let result = AgentResult::no_candidates();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["answer"], "No PDF files found in the specified folder.");
        assert_eq!(json["evaluation"]["score"], 0.0);
        assert_eq!(json["evaluation"]["reasoning"], "");
        assert_eq!(json["evaluation"]["improvements"], "");
        // source_pdf is omitted entirely when absent
        assert!(json.get("source_pdf").is_none());
    }

    #[test]
    fn test_result_serialization_with_source() {
        let result = AgentResult {
            answer: "Paris is the capital.".to_string(),
            evaluation: Evaluation {
                score: 0.95,
                reasoning: "Accurate".to_string(),
                improvements: "None".to_string(),
            },
            source_pdf: Some("/docs/geo.pdf".to_string()),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["source_pdf"], "/docs/geo.pdf");
        assert_eq!(json["evaluation"]["score"], 0.95);
    }

    #[test]
    fn test_unparsable_sentinel() {
        let evaluation = Evaluation::unparsable();
        assert_eq!(evaluation.score, 0.0);
        assert_eq!(evaluation.reasoning, "Failed to parse evaluation");
        assert_eq!(evaluation.improvements, "Try reformulating the answer");
    }
}
