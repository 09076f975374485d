//! Lead collection pipeline: runs each search query through a [`LeadSource`]
//! in order, aggregates the outcomes and reports a single [`RunReport`].
//!
//! Per-query failures are downgraded to warnings; only a failure to build the
//! source aborts the run.

pub mod aggregate;
pub mod error;
pub mod runner;
pub mod source;

pub use aggregate::{aggregate, Aggregate, QueryAttempt, QueryWarning};
pub use error::{ExternalCallError, FatalInitError};
pub use runner::{run_leads, Progress, RunOutcome, RunReport, RunSummary};
pub use source::{LeadSource, QueryOutcome};
