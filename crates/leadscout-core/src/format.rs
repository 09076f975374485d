//! Presentation helpers over an in-memory lead list: score buckets,
//! sorting, filtering and JSON/CSV export.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::hash::BuildHasher;

use chrono::NaiveDateTime;

use crate::error::FormatError;
use crate::types::{Lead, Score};

/// Display grouping for a score. Not stored on the lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    High,
    Medium,
    Low,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::High, Bucket::Medium, Bucket::Low];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Bucket::High => "High (8-10)",
            Bucket::Medium => "Medium (5-7)",
            Bucket::Low => "Low (1-4)",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[must_use]
pub fn bucket(score: Score) -> Bucket {
    match score.get() {
        8.. => Bucket::High,
        5..=7 => Bucket::Medium,
        _ => Bucket::Low,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    ScoreDesc,
    ScoreAsc,
    AuthorAsc,
}

/// Return the leads ordered by `key`. Equal keys keep their input order.
#[must_use]
pub fn sort(leads: &[Lead], key: SortKey) -> Vec<Lead> {
    let mut sorted = leads.to_vec();
    match key {
        SortKey::ScoreDesc => sorted.sort_by_key(|lead| Reverse(lead.score)),
        SortKey::ScoreAsc => sorted.sort_by_key(|lead| lead.score),
        SortKey::AuthorAsc => sorted.sort_by(|a, b| a.post.author.cmp(&b.post.author)),
    }
    sorted
}

/// Keep only the leads whose bucket is in `selected`.
#[must_use]
pub fn filter<S: BuildHasher>(leads: &[Lead], selected: &HashSet<Bucket, S>) -> Vec<Lead> {
    leads
        .iter()
        .filter(|lead| selected.contains(&bucket(lead.score)))
        .cloned()
        .collect()
}

/// Lead counts per bucket, for the dashboard view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreDistribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[must_use]
pub fn score_distribution(leads: &[Lead]) -> ScoreDistribution {
    let mut dist = ScoreDistribution::default();
    for lead in leads {
        match bucket(lead.score) {
            Bucket::High => dist.high += 1,
            Bucket::Medium => dist.medium += 1,
            Bucket::Low => dist.low += 1,
        }
    }
    dist
}

/// Serialize leads as a pretty-printed (2-space) JSON array.
///
/// # Errors
///
/// Returns [`FormatError::Json`] if serialization fails.
pub fn to_json(leads: &[Lead]) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(leads)?)
}

/// Parse a JSON array produced by [`to_json`].
///
/// # Errors
///
/// Returns [`FormatError::Json`] on malformed input or an out-of-range score.
pub fn from_json(text: &str) -> Result<Vec<Lead>, FormatError> {
    Ok(serde_json::from_str(text)?)
}

pub const CSV_HEADER: [&str; 10] = [
    "Author",
    "Score",
    "Post URL",
    "Content",
    "Business Context",
    "Decision Authority",
    "Pain Points",
    "Budget Indicators",
    "Red Flags",
    "Recommendation",
];

/// Flatten leads into CSV with a fixed header. Pain points are joined with `", "`.
///
/// # Errors
///
/// Returns [`FormatError`] if a record cannot be written.
pub fn to_csv(leads: &[Lead]) -> Result<String, FormatError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for lead in leads {
        let score = lead.score.to_string();
        let pain_points = lead.pain_points.join(", ");
        writer.write_record([
            lead.post.author.as_str(),
            score.as_str(),
            lead.post.url.as_str(),
            lead.post.content.as_str(),
            lead.business_context.as_str(),
            lead.decision_authority.as_str(),
            pain_points.as_str(),
            lead.budget_indicators.as_str(),
            lead.red_flags.as_str(),
            lead.recommendation.as_str(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| FormatError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Render `leads` in this format.
    ///
    /// # Errors
    ///
    /// Propagates [`to_json`] / [`to_csv`] errors.
    pub fn render(self, leads: &[Lead]) -> Result<String, FormatError> {
        match self {
            ExportFormat::Json => to_json(leads),
            ExportFormat::Csv => to_csv(leads),
        }
    }
}

/// `x_leads_YYYYMMDD_HHMMSS.<ext>`
#[must_use]
pub fn export_file_name(format: ExportFormat, at: NaiveDateTime) -> String {
    format!(
        "x_leads_{}.{}",
        at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
