//! Validation of operator input into [`RunParameters`].

use std::ops::RangeInclusive;

use crate::app_config::AppConfig;
use crate::error::ValidationError;
use crate::types::{Score, SearchQuery};

pub const DEFAULT_QUERIES: [&str; 5] = [
    "looking for BI dashboard tool",
    "need data visualization software",
    "business intelligence recommendations",
    "analytics dashboard for company",
    "reporting tool suggestions",
];

pub const DEFAULT_MAX_RESULTS_PER_QUERY: usize = 50;
pub const DEFAULT_MIN_LEAD_SCORE: u8 = 6;

const MAX_RESULTS_RANGE: RangeInclusive<usize> = 10..=100;

/// Unvalidated operator input, exactly as typed.
#[derive(Clone, Default)]
pub struct RawInputs {
    pub openai_api_key: String,
    pub x_consumer_key: String,
    pub x_consumer_secret: String,
    pub x_access_token: String,
    pub x_access_token_secret: String,
    pub x_bearer_token: String,
    /// Newline-separated queries.
    pub queries_text: String,
    pub max_results_per_query: usize,
    pub min_lead_score: u8,
}

impl RawInputs {
    /// Seed raw inputs from environment-provided credentials.
    #[must_use]
    pub fn from_config(
        config: &AppConfig,
        queries_text: String,
        max_results_per_query: usize,
        min_lead_score: u8,
    ) -> Self {
        let take = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            openai_api_key: take(&config.openai_api_key),
            x_consumer_key: take(&config.x_consumer_key),
            x_consumer_secret: take(&config.x_consumer_secret),
            x_access_token: take(&config.x_access_token),
            x_access_token_secret: take(&config.x_access_token_secret),
            x_bearer_token: take(&config.x_bearer_token),
            queries_text,
            max_results_per_query,
            min_lead_score,
        }
    }
}

impl std::fmt::Debug for RawInputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawInputs")
            .field("queries_text", &self.queries_text)
            .field("max_results_per_query", &self.max_results_per_query)
            .field("min_lead_score", &self.min_lead_score)
            .finish_non_exhaustive()
    }
}

/// The five X API credential fields.
#[derive(Clone, PartialEq, Eq)]
pub struct XCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
    pub bearer_token: String,
}

/// Secrets for both external systems. Held for one run only; `Debug` never
/// prints them.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub openai_api_key: String,
    pub x: XCredentials,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("openai_api_key", &"[redacted]")
            .field("x", &"[redacted]")
            .finish()
    }
}

/// Validated parameters for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParameters {
    pub queries: Vec<SearchQuery>,
    pub max_results_per_query: usize,
    pub min_lead_score: Score,
    pub credentials: Credentials,
}

/// Split newline-separated text into queries, dropping blank lines.
#[must_use]
pub fn parse_queries(text: &str) -> Vec<SearchQuery> {
    text.lines().filter_map(SearchQuery::new).collect()
}

fn require(value: &str, name: &'static str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingCredential(name))
    } else {
        Ok(value.to_owned())
    }
}

/// Validate raw operator input.
///
/// Checks run in the order the operator sees them: the `OpenAI` key, the
/// five X credentials, the query list, then the numeric bounds.
///
/// # Errors
///
/// - [`ValidationError::MissingCredential`] naming the first empty credential.
/// - [`ValidationError::EmptyQuerySet`] if no non-blank query remains.
/// - [`ValidationError::OutOfRange`] if `max_results_per_query` is outside
///   `10..=100` or `min_lead_score` outside `1..=10`.
pub fn resolve(raw: &RawInputs) -> Result<RunParameters, ValidationError> {
    let openai_api_key = require(&raw.openai_api_key, "OpenAI API key")?;
    let x = XCredentials {
        consumer_key: require(&raw.x_consumer_key, "X consumer key")?,
        consumer_secret: require(&raw.x_consumer_secret, "X consumer secret")?,
        access_token: require(&raw.x_access_token, "X access token")?,
        access_token_secret: require(&raw.x_access_token_secret, "X access token secret")?,
        bearer_token: require(&raw.x_bearer_token, "X bearer token")?,
    };

    let queries = parse_queries(&raw.queries_text);
    if queries.is_empty() {
        return Err(ValidationError::EmptyQuerySet);
    }

    if !MAX_RESULTS_RANGE.contains(&raw.max_results_per_query) {
        return Err(ValidationError::OutOfRange {
            field: "max_results_per_query",
            value: raw.max_results_per_query,
            min: *MAX_RESULTS_RANGE.start(),
            max: *MAX_RESULTS_RANGE.end(),
        });
    }

    let min_lead_score = Score::new(raw.min_lead_score).map_err(|_| ValidationError::OutOfRange {
        field: "min_lead_score",
        value: usize::from(raw.min_lead_score),
        min: usize::from(Score::MIN),
        max: usize::from(Score::MAX),
    })?;

    Ok(RunParameters {
        queries,
        max_results_per_query: raw.max_results_per_query,
        min_lead_score,
        credentials: Credentials { openai_api_key, x },
    })
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;
