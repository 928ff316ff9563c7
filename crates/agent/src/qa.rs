//! Document question-answering.
//!
//! Submits one PDF (as a base64 document block with citations enabled)
//! together with the question, and renders the reply into a single
//! answer string with inline citation markers.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use pdfcite_core::AppResult;
use pdfcite_llm::{InferenceClient, MessagesRequest, MessagesResponse, ResponseBlock};
use std::path::Path;

/// Read a PDF file, returning its display title (filename without
/// extension) and its base64-encoded content.
pub fn read_pdf(path: &Path) -> AppResult<(String, String)> {
    let title = crate::types::title_of(path);
    let bytes = std::fs::read(path)?;
    Ok((title, BASE64.encode(bytes)))
}

/// Ask a question about one document.
///
/// The reply's text segments are concatenated in order; each segment
/// that carries citation metadata is followed by its formatted
/// `[Citation: ...]` markers. No retries here — a request failure is
/// fatal to this candidate and propagates.
pub async fn ask_question(
    client: &dyn InferenceClient,
    title: &str,
    data: &str,
    question: &str,
    model: &str,
) -> AppResult<String> {
    tracing::info!(document = %title, "Asking question about document");

    let request = MessagesRequest::document(title, data, question, model);
    let response = client.create(&request).await?;

    Ok(render_answer(&response, title))
}

/// Concatenate text segments and append citation markers in reply order.
fn render_answer(response: &MessagesResponse, document_title: &str) -> String {
    let mut answer = String::new();

    for block in &response.content {
        if let ResponseBlock::Text { text, citations } = block {
            answer.push_str(text);

            if let Some(citations) = citations {
                let markers: Vec<String> = citations
                    .iter()
                    .map(|citation| {
                        format!(
                            "[Citation: {} ({}({}))]",
                            citation.cited_text,
                            citation
                                .document_title
                                .as_deref()
                                .unwrap_or(document_title),
                            citation.document_index.unwrap_or(0)
                        )
                    })
                    .collect();

                if !markers.is_empty() {
                    answer.push(' ');
                    answer.push_str(&markers.join(" "));
                }
            }
        }
    }

    answer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{text_response, ScriptedClient};
    use pdfcite_llm::{Citation, Usage};

    fn cited_block(text: &str, citations: Vec<Citation>) -> ResponseBlock {
        ResponseBlock::Text {
            text: text.to_string(),
            citations: Some(citations),
        }
    }

    fn citation(cited: &str, title: &str, index: u64) -> Citation {
        Citation {
            cited_text: cited.to_string(),
            document_title: Some(title.to_string()),
            document_index: Some(index),
        }
    }

    #[test]
    fn test_render_without_citations() {
        let response = text_response("Paris is the capital.");
        assert_eq!(render_answer(&response, "geo"), "Paris is the capital.");
    }

    #[test]
    fn test_render_with_citation_marker() {
        let response = MessagesResponse {
            content: vec![cited_block(
                "Paris is the capital.",
                vec![citation("Paris, the capital of France", "geo", 0)],
            )],
            model: String::new(),
            usage: Usage::default(),
        };

        assert_eq!(
            render_answer(&response, "geo"),
            "Paris is the capital. [Citation: Paris, the capital of France (geo(0))]"
        );
    }

    #[test]
    fn test_multiple_citations_space_joined() {
        let response = MessagesResponse {
            content: vec![cited_block(
                "Both claims hold.",
                vec![citation("first claim", "doc", 0), citation("second claim", "doc", 0)],
            )],
            model: String::new(),
            usage: Usage::default(),
        };

        assert_eq!(
            render_answer(&response, "doc"),
            "Both claims hold. [Citation: first claim (doc(0))] [Citation: second claim (doc(0))]"
        );
    }

    #[test]
    fn test_segments_concatenated_in_order() {
        let response = MessagesResponse {
            content: vec![
                cited_block("First part.", vec![citation("quote one", "doc", 0)]),
                ResponseBlock::Text {
                    text: " Second part.".to_string(),
                    citations: None,
                },
            ],
            model: String::new(),
            usage: Usage::default(),
        };

        assert_eq!(
            render_answer(&response, "doc"),
            "First part. [Citation: quote one (doc(0))] Second part."
        );
    }

    #[test]
    fn test_missing_citation_fields_fall_back() {
        let response = MessagesResponse {
            content: vec![cited_block(
                "Answer.",
                vec![Citation {
                    cited_text: "quoted".to_string(),
                    document_title: None,
                    document_index: None,
                }],
            )],
            model: String::new(),
            usage: Usage::default(),
        };

        assert_eq!(
            render_answer(&response, "fallback-title"),
            "Answer. [Citation: quoted (fallback-title(0))]"
        );
    }

    #[test]
    fn test_empty_citation_list_adds_no_marker() {
        let response = MessagesResponse {
            content: vec![cited_block("Answer.", vec![])],
            model: String::new(),
            usage: Usage::default(),
        };

        assert_eq!(render_answer(&response, "doc"), "Answer.");
    }

    #[test]
    fn test_read_pdf_encodes_base64() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("My Report.pdf");
        std::fs::write(&path, b"%PDF-1.4 test").unwrap();

        let (title, data) = read_pdf(&path).unwrap();
        assert_eq!(title, "My Report");

        let decoded = BASE64.decode(data).unwrap();
        assert_eq!(decoded, b"%PDF-1.4 test");
    }

    #[test]
    fn test_read_pdf_missing_file_errors() {
        assert!(read_pdf(Path::new("/nonexistent/file.pdf")).is_err());
    }

    #[tokio::test]
    async fn test_ask_question_sends_document_request() {
        let client = ScriptedClient::new(vec![Ok(text_response("The answer."))]);

        let answer = ask_question(&client, "report", "QkFTRTY0", "What is X?", "m")
            .await
            .unwrap();

        assert_eq!(answer, "The answer.");
        assert_eq!(client.request_count(), 1);

        // The request embeds the document block with citations requested
        let request = client.requests().remove(0);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["content"][0]["type"], "document");
        assert_eq!(json["messages"][0]["content"][0]["citations"]["enabled"], true);
        assert_eq!(json["messages"][0]["content"][1]["text"], "What is X?");
    }
}
