//! Turning the qualification reply into [`Lead`] records.

use leadscout_core::{Lead, Post};

/// Converts the assistant's free-text qualification into leads.
///
/// `posts` are the posts that were sent for qualification; a parser should
/// only produce leads for those posts. Score filtering happens later in the
/// pipeline.
pub trait LeadParser: Send + Sync {
    fn parse(&self, response: &str, posts: &[Post]) -> Vec<Lead>;
}

/// Default parser: the reply is logged and no leads are materialized.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnparsedResponse;

impl LeadParser for UnparsedResponse {
    fn parse(&self, response: &str, posts: &[Post]) -> Vec<Lead> {
        tracing::debug!(
            response_bytes = response.len(),
            posts = posts.len(),
            "qualification reply left unparsed"
        );
        Vec::new()
    }
}
