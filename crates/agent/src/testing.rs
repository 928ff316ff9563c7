//! Scripted inference client for exercising the pipeline without a
//! network. Responses are served in FIFO order; every request is
//! recorded so tests can assert how many (and which) requests were
//! issued.

use pdfcite_core::{AppError, AppResult};
use pdfcite_llm::{InferenceClient, MessagesRequest, MessagesResponse, ResponseBlock, Usage};
use std::collections::VecDeque;
use std::sync::Mutex;

pub(crate) struct ScriptedClient {
    responses: Mutex<VecDeque<AppResult<MessagesResponse>>>,
    requests: Mutex<Vec<MessagesRequest>>,
}

impl ScriptedClient {
    pub fn new(responses: Vec<AppResult<MessagesResponse>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of requests issued so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Copies of the requests issued so far, in order.
    pub fn requests(&self) -> Vec<MessagesRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl InferenceClient for ScriptedClient {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    async fn create(&self, request: &MessagesRequest) -> AppResult<MessagesResponse> {
        self.requests.lock().unwrap().push(request.clone());

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Llm("scripted client exhausted".to_string())))
    }
}

/// Response holding a single plain-text block.
pub(crate) fn text_response(text: &str) -> MessagesResponse {
    MessagesResponse {
        content: vec![ResponseBlock::Text {
            text: text.to_string(),
            citations: None,
        }],
        model: "scripted".to_string(),
        usage: Usage::default(),
    }
}

/// Well-formed ranking reply assigning the given scores by title.
pub(crate) fn ranking_response(scores: &[(&str, f64)]) -> MessagesResponse {
    let rankings: Vec<serde_json::Value> = scores
        .iter()
        .map(|(file, score)| {
            serde_json::json!({"file": file, "score": score, "reason": "scripted"})
        })
        .collect();

    let body = serde_json::json!({ "rankings": rankings });
    text_response(&body.to_string())
}

/// Well-formed evaluation reply.
pub(crate) fn evaluation_response(
    score: f64,
    reasoning: &str,
    improvements: &str,
) -> MessagesResponse {
    let body = serde_json::json!({
        "score": score,
        "reasoning": reasoning,
        "improvements": improvements,
    });
    text_response(&body.to_string())
}
