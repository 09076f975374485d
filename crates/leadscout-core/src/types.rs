use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::InvalidScore;

/// A free-text description of buying intent, e.g. `"looking for BI dashboard tool"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Wraps a query string, trimming surrounding whitespace.
    ///
    /// Returns `None` for blank input.
    #[must_use]
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lead qualification score, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// # Errors
    ///
    /// Returns [`InvalidScore`] when `value` is outside `1..=10`.
    pub fn new(value: u8) -> Result<Self, InvalidScore> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidScore(value))
        }
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = InvalidScore;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementMetrics {
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
}

/// A post returned by the platform search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: String,
    pub content: String,
    pub url: String,
    pub engagement_metrics: EngagementMetrics,
}

/// A post that the qualification step judged to be a potential buyer.
///
/// Serializes as a flat object: the post fields first, then the
/// qualification fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(flatten)]
    pub post: Post,
    pub score: Score,
    pub business_context: String,
    pub decision_authority: String,
    pub pain_points: Vec<String>,
    pub budget_indicators: String,
    pub red_flags: String,
    pub recommendation: String,
}

/// Counters describing one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Posts requested from the platform: `max_results_per_query` for every
    /// query whose call succeeded. An upper bound, not a count of posts received.
    pub total_posts: usize,
    pub analyzed_posts: usize,
    pub leads_found: usize,
    /// Local completion time of the last run that was not aborted.
    pub last_search: Option<NaiveDateTime>,
}

/// Everything a finished run hands to the session host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResults {
    pub leads: Vec<Lead>,
    pub posts: Vec<Post>,
    pub stats: RunStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_accepts_bounds() {
        assert_eq!(Score::new(1).unwrap().get(), 1);
        assert_eq!(Score::new(10).unwrap().get(), 10);
    }

    #[test]
    fn score_rejects_zero_and_eleven() {
        assert_eq!(Score::new(0), Err(InvalidScore(0)));
        assert_eq!(Score::new(11), Err(InvalidScore(11)));
    }

    #[test]
    fn score_deserialize_rejects_out_of_range() {
        let result = serde_json::from_str::<Score>("42");
        assert!(result.is_err(), "expected error, got: {result:?}");
    }

    #[test]
    fn search_query_trims_and_rejects_blank() {
        assert_eq!(
            SearchQuery::new("  need a dashboard  ").unwrap().as_str(),
            "need a dashboard"
        );
        assert!(SearchQuery::new("   \t").is_none());
    }

    #[test]
    fn lead_serializes_post_fields_first() {
        let lead = Lead {
            post: Post {
                id: "1".to_owned(),
                author: "dana".to_owned(),
                content: "we need dashboards".to_owned(),
                url: "https://x.com/dana/status/1".to_owned(),
                engagement_metrics: EngagementMetrics::default(),
            },
            score: Score::new(7).unwrap(),
            business_context: String::new(),
            decision_authority: String::new(),
            pain_points: vec![],
            budget_indicators: String::new(),
            red_flags: String::new(),
            recommendation: String::new(),
        };
        let json = serde_json::to_string(&lead).unwrap();
        let id_pos = json.find("\"id\"").unwrap();
        let score_pos = json.find("\"score\"").unwrap();
        assert!(
            id_pos < score_pos,
            "post fields should precede score: {json}"
        );
        assert!(json.contains("\"engagement_metrics\":{\"likes\":0"));
    }
}
