//! The fixed qualification rubric sent to the AI model.
//!
//! Kept as data rather than prose so callers (and tests) can inspect each
//! part. [`QualificationRubric::instructions`] renders it line-for-line into
//! the system instructions.

use crate::types::Score;

/// One row of the scoring guide: scores `low..=high` mean `meaning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBand {
    pub low: u8,
    pub high: u8,
    pub meaning: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualificationRubric {
    pub version: &'static str,
    pub role: &'static str,
    pub target_profile: &'static [&'static str],
    pub pain_points: &'static [&'static str],
    pub decision_maker_indicators: &'static [&'static str],
    pub red_flags: &'static [&'static str],
    /// Ordered from highest band to lowest.
    pub scoring_guide: &'static [ScoreBand],
    pub closing: &'static str,
}

pub const RUBRIC_V1: QualificationRubric = QualificationRubric {
    version: "v1",
    role: "You are a B2B lead qualification specialist for advanced business intelligence and analytics software.",
    target_profile: &[
        "Businesses needing business analysis or BI dashboards",
        "Companies struggling with data visualization or reporting",
        "Organizations looking for analytics solutions",
        "Decision-makers or influencers in data/analytics roles",
    ],
    pain_points: &[
        "Need for better reporting or dashboards",
        "Data visualization challenges",
        "Analytics tool evaluation",
        "Enterprise reporting needs",
    ],
    decision_maker_indicators: &[
        "Job titles (Manager, Director, VP, CEO, CTO, Data Lead)",
        "Company/organization mentions",
        "Budget or procurement discussions",
        "Team or organizational needs",
    ],
    red_flags: &[
        "Student projects or homework",
        "Personal hobby projects",
        "Tutorial/learning requests",
        "Free-only requirements",
    ],
    scoring_guide: &[
        ScoreBand {
            low: 9,
            high: 10,
            meaning: "Clear business need, decision-maker, budget indication",
        },
        ScoreBand {
            low: 7,
            high: 8,
            meaning: "Business need evident, likely has influence",
        },
        ScoreBand {
            low: 5,
            high: 6,
            meaning: "Possible business context, relevant needs",
        },
        ScoreBand {
            low: 3,
            high: 4,
            meaning: "Unclear if business, vague requirements",
        },
        ScoreBand {
            low: 1,
            high: 2,
            meaning: "Likely personal/student project",
        },
    ],
    closing: "Be strict - we want quality B2B leads only.",
};

impl QualificationRubric {
    /// Render the rubric as instruction lines, blank lines included.
    #[must_use]
    pub fn instructions(&self) -> Vec<String> {
        let mut lines = vec![
            self.role.to_owned(),
            String::new(),
            "TARGET CUSTOMER PROFILE:".to_owned(),
        ];
        lines.extend(self.target_profile.iter().map(|item| format!("- {item}")));
        lines.push(String::new());
        lines.push("WHAT TO LOOK FOR:".to_owned());
        lines.push("1. Business Pain Points:".to_owned());
        lines.extend(self.pain_points.iter().map(|item| format!("   - {item}")));
        lines.push(String::new());
        lines.push("2. Decision-Maker Indicators:".to_owned());
        lines.extend(
            self.decision_maker_indicators
                .iter()
                .map(|item| format!("   - {item}")),
        );
        lines.push(String::new());
        lines.push("3. RED FLAGS (Score LOW):".to_owned());
        lines.extend(self.red_flags.iter().map(|item| format!("   - {item}")));
        lines.push(String::new());
        lines.push("SCORING GUIDE:".to_owned());
        lines.extend(
            self.scoring_guide
                .iter()
                .map(|band| format!("{}-{}: {}", band.low, band.high, band.meaning)),
        );
        lines.push(String::new());
        lines.push(self.closing.to_owned());
        lines
    }

    /// The instructions joined into a single system message.
    #[must_use]
    pub fn render(&self) -> String {
        self.instructions().join("\n")
    }

    /// The scoring-guide band a score falls into.
    #[must_use]
    pub fn band_for(&self, score: Score) -> Option<&ScoreBand> {
        let value = score.get();
        self.scoring_guide
            .iter()
            .find(|band| (band.low..=band.high).contains(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rubric_v1_is_versioned() {
        assert_eq!(RUBRIC_V1.version, "v1");
    }

    #[test]
    fn scoring_guide_covers_every_score_once() {
        for value in Score::MIN..=Score::MAX {
            let score = Score::new(value).unwrap();
            let matches = RUBRIC_V1
                .scoring_guide
                .iter()
                .filter(|b| (b.low..=b.high).contains(&value))
                .count();
            assert_eq!(matches, 1, "score {value} should fall in exactly one band");
            assert!(RUBRIC_V1.band_for(score).is_some());
        }
    }

    #[test]
    fn decision_authority_required_for_seven_and_up() {
        let band = RUBRIC_V1.band_for(Score::new(9).unwrap()).unwrap();
        assert!(band.meaning.contains("decision-maker"));
        let band = RUBRIC_V1.band_for(Score::new(7).unwrap()).unwrap();
        assert!(band.meaning.contains("influence"));
    }

    #[test]
    fn non_commercial_content_scores_lowest() {
        let band = RUBRIC_V1.band_for(Score::new(2).unwrap()).unwrap();
        assert_eq!(band.low, 1);
        assert!(band.meaning.contains("personal/student"));
        let flags = RUBRIC_V1.red_flags;
        assert!(flags.contains(&"Student projects or homework"));
    }

    #[test]
    fn instructions_render_sections_in_order() {
        let lines = RUBRIC_V1.instructions();
        assert_eq!(lines[0], RUBRIC_V1.role);
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "TARGET CUSTOMER PROFILE:");
        assert_eq!(
            lines[3],
            "- Businesses needing business analysis or BI dashboards"
        );
        assert!(lines.contains(&"   - Tutorial/learning requests".to_owned()));
        let top_band = "9-10: Clear business need, decision-maker, budget indication".to_owned();
        assert!(lines.contains(&top_band));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Be strict - we want quality B2B leads only.")
        );
        let scoring = lines.iter().position(|l| l == "SCORING GUIDE:").unwrap();
        let red_flags = lines
            .iter()
            .position(|l| l == "3. RED FLAGS (Score LOW):")
            .unwrap();
        assert!(red_flags < scoring);
    }

    #[test]
    fn render_joins_with_newlines() {
        let rendered = RUBRIC_V1.render();
        assert_eq!(rendered.lines().count(), RUBRIC_V1.instructions().len());
    }
}
