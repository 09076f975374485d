//! Production [`LeadSource`]: X recent search followed by `OpenAI`
//! qualification of the posts found.

use async_trait::async_trait;
use leadscout_core::{AppConfig, Credentials, SearchQuery, RUBRIC_V1};
use leadscout_pipeline::{ExternalCallError, LeadSource, QueryOutcome};

use crate::error::XError;
use crate::openai::OpenAiClient;
use crate::parse::{LeadParser, UnparsedResponse};
use crate::prompt::{build_qualification_message, build_search_prompt};
use crate::search::XSearchClient;

/// Endpoint and policy settings for [`XAgentSource`]. Credentials travel
/// separately in [`Credentials`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XAgentSettings {
    pub openai_model: String,
    pub openai_base_url: String,
    pub x_base_url: String,
    pub request_timeout_secs: u64,
    pub rate_limit_max_waits: u32,
}

impl XAgentSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            openai_model: config.openai_model.clone(),
            openai_base_url: config.openai_base_url.clone(),
            x_base_url: config.x_base_url.clone(),
            request_timeout_secs: config.request_timeout_secs,
            rate_limit_max_waits: config.rate_limit_max_waits,
        }
    }
}

pub struct XAgentSource {
    search: XSearchClient,
    openai: OpenAiClient,
    system_prompt: String,
    parser: Box<dyn LeadParser>,
}

impl XAgentSource {
    /// Builds both HTTP clients. Recent search is app-only, so of the X
    /// credentials only the bearer token is sent.
    ///
    /// # Errors
    ///
    /// Returns [`XError::Http`] if an HTTP client cannot be built or
    /// [`XError::InvalidBaseUrl`] if a configured base URL does not parse.
    pub fn new(settings: &XAgentSettings, credentials: &Credentials) -> Result<Self, XError> {
        let search = XSearchClient::with_base_url(
            &credentials.x.bearer_token,
            settings.request_timeout_secs,
            settings.rate_limit_max_waits,
            &settings.x_base_url,
        )?;
        let openai = OpenAiClient::with_base_url(
            &credentials.openai_api_key,
            &settings.openai_model,
            settings.request_timeout_secs,
            settings.rate_limit_max_waits,
            &settings.openai_base_url,
        )?;
        tracing::debug!(
            model = openai.model(),
            rubric_version = RUBRIC_V1.version,
            "lead source ready"
        );
        Ok(Self {
            search,
            openai,
            system_prompt: RUBRIC_V1.render(),
            parser: Box::new(UnparsedResponse),
        })
    }

    /// Replaces the default [`UnparsedResponse`] parser.
    #[must_use]
    pub fn with_parser(mut self, parser: impl LeadParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }
}

#[async_trait]
impl LeadSource for XAgentSource {
    async fn run_query(
        &self,
        query: &SearchQuery,
        max_results: usize,
    ) -> Result<QueryOutcome, ExternalCallError> {
        let posts = self
            .search
            .search_recent(query.as_str(), max_results)
            .await?;
        if posts.is_empty() {
            tracing::debug!(query = %query, "no posts found, skipping qualification");
            return Ok(QueryOutcome::default());
        }

        tracing::info!(query = %query, posts = posts.len(), "analyzing posts");
        let prompt = build_search_prompt(query.as_str(), max_results);
        let message = build_qualification_message(&prompt, &posts);
        let reply = self.openai.chat(&self.system_prompt, &message).await?;
        let leads = self.parser.parse(&reply, &posts);

        Ok(QueryOutcome { posts, leads })
    }
}
