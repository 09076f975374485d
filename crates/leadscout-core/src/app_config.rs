use std::path::PathBuf;

/// Process-level settings read from the environment.
///
/// Credentials are kept as read; emptiness is checked later by
/// [`crate::resolve`] so that a run can report exactly which one is missing.
#[derive(Clone)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub x_consumer_key: Option<String>,
    pub x_consumer_secret: Option<String>,
    pub x_access_token: Option<String>,
    pub x_access_token_secret: Option<String>,
    pub x_bearer_token: Option<String>,
    pub log_level: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub x_base_url: String,
    pub request_timeout_secs: u64,
    pub rate_limit_max_waits: u32,
    pub export_dir: PathBuf,
}

fn redact(value: Option<&String>) -> Option<&'static str> {
    value.map(|_| "[redacted]")
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("openai_api_key", &redact(self.openai_api_key.as_ref()))
            .field("x_consumer_key", &redact(self.x_consumer_key.as_ref()))
            .field("x_consumer_secret", &redact(self.x_consumer_secret.as_ref()))
            .field("x_access_token", &redact(self.x_access_token.as_ref()))
            .field(
                "x_access_token_secret",
                &redact(self.x_access_token_secret.as_ref()),
            )
            .field("x_bearer_token", &redact(self.x_bearer_token.as_ref()))
            .field("log_level", &self.log_level)
            .field("openai_model", &self.openai_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("x_base_url", &self.x_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("rate_limit_max_waits", &self.rate_limit_max_waits)
            .field("export_dir", &self.export_dir)
            .finish()
    }
}
