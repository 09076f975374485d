//! HTTP client for the X API v2 recent-search endpoint.

use std::collections::HashMap;

use leadscout_core::{EngagementMetrics, Post};
use reqwest::{Client, Url};

use crate::error::XError;
use crate::http;
use crate::rate_limit::wait_on_rate_limit;
use crate::types::SearchResponse;

const DEFAULT_BASE_URL: &str = "https://api.x.com/2";
const SERVICE: &str = "X API";

/// Page-size window accepted by `tweets/search/recent`.
pub const MIN_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Client for X recent search, authenticated with an app bearer token.
///
/// Use [`XSearchClient::new`] for production or
/// [`XSearchClient::with_base_url`] to point at a mock server in tests.
pub struct XSearchClient {
    client: Client,
    bearer_token: String,
    search_url: Url,
    max_waits: u32,
}

impl XSearchClient {
    /// # Errors
    ///
    /// Returns [`XError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(bearer_token: &str, timeout_secs: u64, max_waits: u32) -> Result<Self, XError> {
        Self::with_base_url(bearer_token, timeout_secs, max_waits, DEFAULT_BASE_URL)
    }

    /// # Errors
    ///
    /// Returns [`XError::Http`] if the `reqwest::Client` cannot be built, or
    /// [`XError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        bearer_token: &str,
        timeout_secs: u64,
        max_waits: u32,
        base_url: &str,
    ) -> Result<Self, XError> {
        Ok(Self {
            client: http::build_client(timeout_secs)?,
            bearer_token: bearer_token.to_owned(),
            search_url: http::endpoint(base_url, "tweets/search/recent")?,
            max_waits,
        })
    }

    /// Searches posts from the last seven days matching `query`.
    ///
    /// `max_results` is clamped to the endpoint's 10..=100 window. Throttled
    /// requests wait for the rate-limit reset, up to the configured number
    /// of waits.
    ///
    /// # Errors
    ///
    /// - [`XError::Unauthorized`] on 401/403.
    /// - [`XError::RateLimitExhausted`] if 429s outlast the allowed waits.
    /// - [`XError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`XError::Http`] on network failure.
    /// - [`XError::Deserialize`] if the body is not a search response.
    pub async fn search_recent(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<Post>, XError> {
        let url = self.build_url(query, max_results);

        let response = wait_on_rate_limit(self.max_waits, || {
            let url = url.clone();
            async move {
                let response = self
                    .client
                    .get(url)
                    .bearer_auth(&self.bearer_token)
                    .send()
                    .await?;
                let body = http::read_body(response, SERVICE).await?;
                serde_json::from_str::<SearchResponse>(&body).map_err(|e| XError::Deserialize {
                    context: format!("recent search (query={query})"),
                    source: e,
                })
            }
        })
        .await?;

        let posts = posts_from_response(response);
        tracing::debug!(query, posts = posts.len(), "recent search returned");
        Ok(posts)
    }

    fn build_url(&self, query: &str, max_results: usize) -> Url {
        let page_size = max_results.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("max_results", &page_size.to_string())
            .append_pair("tweet.fields", "author_id,public_metrics")
            .append_pair("expansions", "author_id")
            .append_pair("user.fields", "username");
        url
    }
}

/// Joins posts with their expanded authors.
///
/// A post whose author is missing from `includes.users` falls back to the
/// raw author id so its URL still resolves.
pub(crate) fn posts_from_response(response: SearchResponse) -> Vec<Post> {
    let usernames: HashMap<String, String> = response
        .includes
        .users
        .into_iter()
        .map(|u| (u.id, u.username))
        .collect();

    response
        .data
        .into_iter()
        .map(|tweet| {
            let author = match tweet.author_id {
                Some(id) => usernames.get(&id).cloned().unwrap_or(id),
                None => "unknown".to_owned(),
            };
            let metrics = tweet.public_metrics.unwrap_or_default();
            Post {
                url: format!("https://x.com/{author}/status/{}", tweet.id),
                id: tweet.id,
                author,
                content: tweet.text,
                engagement_metrics: EngagementMetrics {
                    likes: metrics.like_count,
                    retweets: metrics.retweet_count,
                    replies: metrics.reply_count,
                },
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
