//! X (Twitter) search and AI qualification behind the
//! [`leadscout_pipeline::LeadSource`] trait.

pub mod error;
pub mod openai;
pub mod parse;
pub mod prompt;
pub mod search;
pub mod source;
pub mod types;

mod http;
mod rate_limit;

pub use error::XError;
pub use openai::OpenAiClient;
pub use parse::{LeadParser, UnparsedResponse};
pub use prompt::{build_qualification_message, build_search_prompt};
pub use search::XSearchClient;
pub use source::{XAgentSettings, XAgentSource};
