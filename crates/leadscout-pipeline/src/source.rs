use async_trait::async_trait;
use leadscout_core::{Lead, Post, SearchQuery};

use crate::error::ExternalCallError;

/// Posts explored and leads qualified for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOutcome {
    pub posts: Vec<Post>,
    pub leads: Vec<Lead>,
}

/// An external capability that searches the platform for one query and
/// qualifies what it finds.
///
/// Implementations hold their own credentials and are expected to wait out
/// platform rate limits rather than fail on the first throttle response.
#[async_trait]
pub trait LeadSource: Send + Sync {
    /// Search for up to `max_results` posts matching `query` and qualify them.
    ///
    /// # Errors
    ///
    /// Returns [`ExternalCallError`] on transport, auth, rate-limit
    /// exhaustion or API failures.
    async fn run_query(
        &self,
        query: &SearchQuery,
        max_results: usize,
    ) -> Result<QueryOutcome, ExternalCallError>;
}
