//! Answer evaluation.
//!
//! Asks the model to score a produced answer against the original
//! question. Parse failures never abort the selection loop: they yield
//! a fixed zero-score sentinel, which the loop treats as "this answer
//! did not improve on the best so far".

use crate::extract::{coerce_f64, extract_json};
use crate::types::Evaluation;
use pdfcite_core::AppResult;
use pdfcite_llm::{InferenceClient, MessagesRequest};

/// Evaluate the quality of an answer.
///
/// The reply is expected (but not guaranteed) to be a JSON object with
/// `score`, `reasoning`, and `improvements` fields. An unparsable reply
/// yields [`Evaluation::unparsable`]; a request-level failure
/// propagates.
pub async fn evaluate_answer(
    client: &dyn InferenceClient,
    question: &str,
    answer: &str,
    model: &str,
) -> AppResult<Evaluation> {
    let prompt = build_evaluation_prompt(question, answer);
    let request = MessagesRequest::text(prompt, model).with_temperature(0.0);

    let response = client.create(&request).await?;

    let evaluation = response
        .first_text()
        .and_then(|text| parse_evaluation(&text))
        .unwrap_or_else(|| {
            tracing::warn!("Failed to parse evaluation reply; scoring answer 0.0");
            Evaluation::unparsable()
        });

    tracing::debug!(score = evaluation.score, "Answer evaluated");

    Ok(evaluation)
}

fn build_evaluation_prompt(question: &str, answer: &str) -> String {
    format!(
        "Evaluate the quality of this answer to the given question.\n\
         Return your evaluation in JSON format with the following fields:\n\
         - score: float between 0 and 1 indicating quality\n\
         - reasoning: string explaining the score\n\
         - improvements: string suggesting improvements\n\n\
         Question: {question}\n\n\
         Answer: {answer}"
    )
}

/// Parse the evaluation triple from the reply text.
///
/// A missing `score` field defaults to 0.0; a present score may be a
/// number or a numeric string, and anything else is a parse failure.
/// Missing reasoning/improvements become empty strings.
fn parse_evaluation(text: &str) -> Option<Evaluation> {
    let json = extract_json(text)?;
    let value: serde_json::Value = serde_json::from_str(json).ok()?;
    let object = value.as_object()?;

    let score = match object.get("score") {
        None => 0.0,
        Some(raw) => coerce_f64(raw)?,
    };

    let field = |name: &str| {
        object
            .get(name)
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string()
    };

    Some(Evaluation {
        score,
        reasoning: field("reasoning"),
        improvements: field("improvements"),
    })
}
