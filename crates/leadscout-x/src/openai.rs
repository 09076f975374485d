//! Chat-completions client used to qualify found posts.

use reqwest::{Client, Url};

use crate::error::XError;
use crate::http;
use crate::rate_limit::wait_on_rate_limit;
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const SERVICE: &str = "OpenAI";

pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    completions_url: Url,
    max_waits: u32,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns [`XError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        max_waits: u32,
    ) -> Result<Self, XError> {
        Self::with_base_url(api_key, model, timeout_secs, max_waits, DEFAULT_BASE_URL)
    }

    /// # Errors
    ///
    /// Returns [`XError::Http`] if the `reqwest::Client` cannot be built, or
    /// [`XError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        max_waits: u32,
        base_url: &str,
    ) -> Result<Self, XError> {
        Ok(Self {
            client: http::build_client(timeout_secs)?,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            completions_url: http::endpoint(base_url, "chat/completions")?,
            max_waits,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one system and one user message and returns the assistant text.
    ///
    /// # Errors
    ///
    /// - [`XError::Unauthorized`] on 401/403.
    /// - [`XError::RateLimitExhausted`] if 429s outlast the allowed waits.
    /// - [`XError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`XError::Http`] on network failure.
    /// - [`XError::Deserialize`] if the body is not a chat completion.
    /// - [`XError::EmptyCompletion`] if no choice carries text.
    pub async fn chat(&self, system: &str, user: &str) -> Result<String, XError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
        };
        tracing::debug!(model = %self.model, "OpenAI chat request");

        let response = wait_on_rate_limit(self.max_waits, || {
            let request = &request;
            async move {
                let response = self
                    .client
                    .post(self.completions_url.clone())
                    .bearer_auth(&self.api_key)
                    .json(request)
                    .send()
                    .await?;
                let body = http::read_body(response, SERVICE).await?;
                serde_json::from_str::<ChatResponse>(&body).map_err(|e| XError::Deserialize {
                    context: format!("chat completion (model={})", self.model),
                    source: e,
                })
            }
        })
        .await?;

        response
            .choices
            .into_iter()
            .find_map(|c| c.message.content.filter(|text| !text.trim().is_empty()))
            .ok_or(XError::EmptyCompletion { service: SERVICE })
    }
}
