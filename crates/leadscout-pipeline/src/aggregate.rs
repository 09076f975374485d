//! Merging per-query outcomes into one result set.

use leadscout_core::{RunResults, RunStats, Score, SearchQuery};

use crate::error::ExternalCallError;
use crate::source::QueryOutcome;

/// One query and what its external call produced.
#[derive(Debug, Clone)]
pub struct QueryAttempt {
    pub query: SearchQuery,
    pub result: Result<QueryOutcome, ExternalCallError>,
}

/// A per-query failure surfaced to the operator as a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryWarning {
    pub query: SearchQuery,
    pub error: ExternalCallError,
}

impl std::fmt::Display for QueryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error processing query '{}': {}", self.query, self.error)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub results: RunResults,
    pub warnings: Vec<QueryWarning>,
}

/// Concatenate attempts in order into posts, leads and counters.
///
/// - `total_posts` grows by `max_results_per_query` for each successful
///   attempt; failed attempts add nothing.
/// - Leads scoring below `min_lead_score` are dropped.
/// - `analyzed_posts` and `leads_found` count the records actually kept.
///
/// `last_search` is left unset; the runner stamps it when the run completes.
#[must_use]
pub fn aggregate(
    max_results_per_query: usize,
    min_lead_score: Score,
    attempts: Vec<QueryAttempt>,
) -> Aggregate {
    let mut out = Aggregate::default();
    let mut total_posts: usize = 0;

    for attempt in attempts {
        match attempt.result {
            Ok(outcome) => {
                total_posts = total_posts.saturating_add(max_results_per_query);
                out.results.posts.extend(outcome.posts);
                let before = out.results.leads.len();
                out.results.leads.extend(
                    outcome
                        .leads
                        .into_iter()
                        .filter(|lead| lead.score >= min_lead_score),
                );
                tracing::debug!(
                    query = %attempt.query,
                    kept = out.results.leads.len() - before,
                    "aggregated query outcome"
                );
            }
            Err(error) => out.warnings.push(QueryWarning {
                query: attempt.query,
                error,
            }),
        }
    }

    out.results.stats = RunStats {
        total_posts,
        analyzed_posts: out.results.posts.len(),
        leads_found: out.results.leads.len(),
        last_search: None,
    };
    out
}
