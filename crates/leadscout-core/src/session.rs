//! Results held by the presentation host between interactions.

use crate::types::{Lead, Post, RunResults, RunStats};

/// The host-owned view of the most recent run.
///
/// Only ever replaced wholesale: [`RunSession::publish`] swaps in a finished
/// run's results and [`RunSession::clear`] resets to the empty state. There is
/// no field-level mutation from outside.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSession {
    results: RunResults,
}

impl RunSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn leads(&self) -> &[Lead] {
        &self.results.leads
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.results.posts
    }

    #[must_use]
    pub fn stats(&self) -> &RunStats {
        &self.results.stats
    }

    /// Replace everything with a completed run's output.
    pub fn publish(&mut self, results: RunResults) {
        tracing::debug!(
            leads = results.leads.len(),
            posts = results.posts.len(),
            "publishing run results to session"
        );
        self.results = results;
    }

    /// Reset leads, posts and stats to their initial empty state.
    ///
    /// This is the host's "clear results" action. A long-lived host calls it
    /// between searches; the one-shot CLI drops its session instead.
    pub fn clear(&mut self) {
        self.results = RunResults::default();
    }

    /// True until a run is published, and again after [`RunSession::clear`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results == RunResults::default()
    }
}
