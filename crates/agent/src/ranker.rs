//! Relevance ranking of candidate documents.
//!
//! A single batched request lists every candidate title and asks the
//! model to score each for relevance to the question. Ranking is an
//! optimization (process likely-relevant documents first), not a
//! correctness requirement — the selector will try every candidate
//! anyway — so an unparsable reply falls back to the original order.

use crate::extract::{coerce_f64, extract_json};
use crate::types::Candidate;
use pdfcite_core::AppResult;
use pdfcite_llm::{InferenceClient, MessagesRequest};
use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Expected shape of the ranking reply.
#[derive(Debug, Deserialize)]
struct RankingReply {
    rankings: Vec<RankingEntry>,
}

#[derive(Debug, Deserialize)]
struct RankingEntry {
    file: String,
    // Number or numeric string; coerced after deserialization
    score: serde_json::Value,
}

/// Reorder candidates by their likely relevance to the question,
/// most relevant first.
///
/// Candidates missing from the model's reply score 0.0; the sort is
/// stable, so they keep their input-relative order at the end. If the
/// reply cannot be parsed, the original order is returned unchanged.
/// A request-level failure propagates to the caller.
pub async fn rank_by_relevance(
    client: &dyn InferenceClient,
    mut candidates: Vec<Candidate>,
    question: &str,
    model: &str,
) -> AppResult<Vec<Candidate>> {
    let prompt = build_ranking_prompt(&candidates, question);
    let request = MessagesRequest::text(prompt, model).with_temperature(0.0);

    let response = client.create(&request).await?;

    let Some(text) = response.first_text() else {
        tracing::warn!("Ranking reply contained no text; keeping original order");
        return Ok(candidates);
    };

    let Some(scores) = parse_rankings(&text) else {
        tracing::warn!("Failed to parse ranking reply; keeping original order");
        return Ok(candidates);
    };

    // Stable sort: zero-scored (unranked) candidates keep their
    // input-relative order at the end.
    candidates.sort_by(|a, b| {
        let score_a = scores.get(&a.title).copied().unwrap_or(0.0);
        let score_b = scores.get(&b.title).copied().unwrap_or(0.0);
        score_b.partial_cmp(&score_a).unwrap_or(Ordering::Equal)
    });

    tracing::debug!(
        "Ranked {} candidate(s); top: {:?}",
        candidates.len(),
        candidates.first().map(|c| c.title.as_str())
    );

    Ok(candidates)
}

/// Build the batched ranking prompt listing every candidate title.
fn build_ranking_prompt(candidates: &[Candidate], question: &str) -> String {
    let titles = candidates
        .iter()
        .map(|c| format!("- {}", c.title))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Sort these filenames by their relevance to the question.\n\
         Return the result in JSON format with scores.\n\n\
         Question: {question}\n\n\
         Filenames:\n{titles}\n\n\
         Use this format:\n\
         {{\n    \"rankings\": [\n        {{\"file\": \"filename\", \"score\": 0.9, \"reason\": \"Why highly relevant\"}},\n        {{\"file\": \"filename\", \"score\": 0.5, \"reason\": \"Why somewhat relevant\"}},\n        ...\n    ]\n}}"
    )
}

/// Parse the ranking reply into a title → score map.
///
/// Scores may be numbers or numeric strings. Returns `None` on any
/// structural problem (no JSON, missing keys, a score that coerces to
/// nothing) — the caller treats that as "keep original order".
fn parse_rankings(text: &str) -> Option<HashMap<String, f64>> {
    let json = extract_json(text)?;
    let reply: RankingReply = serde_json::from_str(json).ok()?;

    let mut scores = HashMap::new();
    for entry in reply.rankings {
        scores.insert(entry.file, coerce_f64(&entry.score)?);
    }

    Some(scores)
}
