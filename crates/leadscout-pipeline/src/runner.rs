//! Run orchestration: build the source, run queries in order, aggregate.

use chrono::Local;
use leadscout_core::{Credentials, RunParameters, RunResults, SearchQuery};

use crate::aggregate::{aggregate, QueryAttempt, QueryWarning};
use crate::error::FatalInitError;
use crate::source::LeadSource;

/// Progress events emitted while a run is in flight. Query indices are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    Initializing,
    QueryStarted {
        index: usize,
        total: usize,
        query: SearchQuery,
    },
    QueryFinished {
        index: usize,
        total: usize,
    },
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every query was attempted. Failed queries are listed as warnings.
    Completed { warnings: Vec<QueryWarning> },
    /// The source could not be built; no query ran.
    Aborted(FatalInitError),
}

/// Final result of a run, published to the session host as one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub results: RunResults,
    pub outcome: RunOutcome,
}

const NO_LEADS_MESSAGE: &str =
    "No leads found matching your criteria. Try adjusting your search queries or lowering the minimum score.";

/// The one-line message shown to the operator after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunSummary {
    Found(usize),
    NoLeads,
    Failed(String),
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunSummary::Found(n) => write!(f, "Found {n} potential B2B leads!"),
            RunSummary::NoLeads => f.write_str(NO_LEADS_MESSAGE),
            RunSummary::Failed(reason) => write!(f, "Error during lead tracking: {reason}"),
        }
    }
}

impl RunReport {
    #[must_use]
    pub fn warnings(&self) -> &[QueryWarning] {
        match &self.outcome {
            RunOutcome::Completed { warnings } => warnings.as_slice(),
            RunOutcome::Aborted(_) => &[],
        }
    }

    #[must_use]
    pub fn summary(&self) -> RunSummary {
        match &self.outcome {
            RunOutcome::Aborted(err) => RunSummary::Failed(err.to_string()),
            RunOutcome::Completed { .. } if self.results.leads.is_empty() => RunSummary::NoLeads,
            RunOutcome::Completed { .. } => RunSummary::Found(self.results.leads.len()),
        }
    }
}

/// Run every query in `params` through a source built by `init`.
///
/// Queries run strictly one after another. A failing query is logged, kept as
/// a warning, and the run moves on to the next query. If `init` fails the run
/// is aborted with empty results and zeroed stats.
///
/// Nothing is visible to the caller until the returned report.
pub async fn run_leads<S, F, P>(params: &RunParameters, init: F, mut progress: P) -> RunReport
where
    S: LeadSource,
    F: FnOnce(&Credentials) -> Result<S, FatalInitError>,
    P: FnMut(Progress),
{
    progress(Progress::Initializing);
    tracing::info!("initializing lead source");
    let source = match init(&params.credentials) {
        Ok(source) => source,
        Err(err) => {
            tracing::error!(error = %err, "error during lead tracking");
            return RunReport {
                results: RunResults::default(),
                outcome: RunOutcome::Aborted(err),
            };
        }
    };

    let total = params.queries.len();
    let mut attempts = Vec::with_capacity(total);

    for (index, query) in params.queries.iter().enumerate() {
        progress(Progress::QueryStarted {
            index: index + 1,
            total,
            query: query.clone(),
        });
        tracing::info!(query = %query, index = index + 1, total, "searching X");

        let result = source.run_query(query, params.max_results_per_query).await;
        match &result {
            Ok(outcome) => tracing::info!(
                query = %query,
                posts = outcome.posts.len(),
                leads = outcome.leads.len(),
                "completed analysis"
            ),
            Err(err) => tracing::warn!(query = %query, error = %err, "error processing query"),
        }

        attempts.push(QueryAttempt {
            query: query.clone(),
            result,
        });
        progress(Progress::QueryFinished {
            index: index + 1,
            total,
        });
    }

    let mut agg = aggregate(
        params.max_results_per_query,
        params.min_lead_score,
        attempts,
    );
    agg.results.stats.last_search = Some(Local::now().naive_local());
    progress(Progress::Completed);
    tracing::info!(
        total_posts = agg.results.stats.total_posts,
        leads_found = agg.results.stats.leads_found,
        warnings = agg.warnings.len(),
        "lead search completed"
    );

    RunReport {
        results: agg.results,
        outcome: RunOutcome::Completed {
            warnings: agg.warnings,
        },
    }
}
