//! Best-answer selection.
//!
//! The control loop of the agent: rank the candidates, then query and
//! score them one at a time, keeping the best result seen so far and
//! stopping early once an answer clears the threshold. Candidates are
//! processed strictly sequentially — each evaluation completes before
//! the next document request is issued, so the early exit bounds how
//! many paid requests a question costs.

use crate::types::{AgentOptions, AgentResult};
use crate::{evaluator, locator, qa, ranker};
use pdfcite_core::AppResult;
use pdfcite_llm::InferenceClient;
use std::path::Path;

/// Answer a question from the PDFs under `folder`.
///
/// Flow: enumerate candidates, rank them by relevance, then for each in
/// ranked order generate an answer and evaluate it. The best result is
/// replaced only on a strictly higher score (ties keep the earlier
/// candidate); once a replacement meets `options.threshold` the
/// remaining candidates are skipped.
///
/// An empty candidate set returns the "no PDF files found" sentinel
/// without issuing any inference requests. A request failure while
/// processing any candidate aborts the whole search — callers needing
/// resilience must wrap this call in their own retry.
pub async fn answer_question(
    client: &dyn InferenceClient,
    folder: &Path,
    options: &AgentOptions,
) -> AppResult<AgentResult> {
    tracing::info!(
        folder = %folder.display(),
        threshold = options.threshold,
        "Searching PDFs for an answer"
    );

    let candidates = locator::find_pdfs(folder);

    if candidates.is_empty() {
        tracing::info!("No PDF files found");
        return Ok(AgentResult::no_candidates());
    }

    let ranked =
        ranker::rank_by_relevance(client, candidates, &options.question, &options.model).await?;

    let mut best = AgentResult::no_answer();

    for candidate in &ranked {
        let (title, data) = qa::read_pdf(&candidate.path)?;

        let answer =
            qa::ask_question(client, &title, &data, &options.question, &options.model).await?;

        let evaluation =
            evaluator::evaluate_answer(client, &options.question, &answer, &options.model).await?;

        tracing::info!(
            document = %candidate.title,
            score = evaluation.score,
            best_score = best.evaluation.score,
            "Candidate evaluated"
        );

        // Strict inequality: equal scores keep the earlier-ranked result
        if evaluation.score > best.evaluation.score {
            let satisfied = evaluation.score >= options.threshold;

            best = AgentResult {
                answer,
                evaluation,
                source_pdf: Some(candidate.path.display().to_string()),
            };

            if satisfied {
                tracing::info!(
                    document = %candidate.title,
                    "Answer meets threshold; stopping early"
                );
                break;
            }
        }
    }

    Ok(best)
}
