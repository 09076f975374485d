use std::collections::hash_map::DefaultHasher;
use std::hash::BuildHasherDefault;

use super::*;
use crate::types::{EngagementMetrics, Post};

fn lead(id: &str, author: &str, score: u8) -> Lead {
    Lead {
        post: Post {
            id: id.to_owned(),
            author: author.to_owned(),
            content: format!("post {id} by {author}"),
            url: format!("https://x.com/{author}/status/{id}"),
            engagement_metrics: EngagementMetrics {
                likes: 3,
                retweets: 1,
                replies: 2,
            },
        },
        score: Score::new(score).unwrap(),
        business_context: "Mid-size retailer".to_owned(),
        decision_authority: "Head of Data".to_owned(),
        pain_points: vec!["manual reports".to_owned(), "stale dashboards".to_owned()],
        budget_indicators: "Evaluating paid tools".to_owned(),
        red_flags: "None".to_owned(),
        recommendation: "Reach out with a demo".to_owned(),
    }
}

fn ids(leads: &[Lead]) -> Vec<&str> {
    leads.iter().map(|l| l.post.id.as_str()).collect()
}

fn sample() -> Vec<Lead> {
    vec![
        lead("1", "carol", 5),
        lead("2", "alice", 9),
        lead("3", "bob", 2),
        lead("4", "alice", 9),
        lead("5", "dave", 7),
    ]
}

#[test]
fn bucket_boundaries() {
    let b = |v| bucket(Score::new(v).unwrap());
    assert_eq!(b(10), Bucket::High);
    assert_eq!(b(8), Bucket::High);
    assert_eq!(b(7), Bucket::Medium);
    assert_eq!(b(5), Bucket::Medium);
    assert_eq!(b(4), Bucket::Low);
    assert_eq!(b(1), Bucket::Low);
}

#[test]
fn bucket_labels_match_dashboard() {
    let labels: Vec<&str> = Bucket::ALL.iter().map(|b| b.label()).collect();
    assert_eq!(labels, vec!["High (8-10)", "Medium (5-7)", "Low (1-4)"]);
}

#[test]
fn sort_score_desc_is_stable() {
    let sorted = sort(&sample(), SortKey::ScoreDesc);
    assert_eq!(ids(&sorted), vec!["2", "4", "5", "1", "3"]);
}

#[test]
fn sort_score_asc() {
    let sorted = sort(&sample(), SortKey::ScoreAsc);
    assert_eq!(ids(&sorted), vec!["3", "1", "5", "2", "4"]);
}

#[test]
fn sort_author_asc_is_stable() {
    let sorted = sort(&sample(), SortKey::AuthorAsc);
    assert_eq!(ids(&sorted), vec!["2", "4", "3", "1", "5"]);
}

#[test]
fn sort_is_idempotent() {
    for key in [SortKey::ScoreDesc, SortKey::ScoreAsc, SortKey::AuthorAsc] {
        let once = sort(&sample(), key);
        let twice = sort(&once, key);
        assert_eq!(once, twice, "{key:?} should be idempotent");
    }
}

#[test]
fn sort_does_not_mutate_input() {
    let leads = sample();
    let _ = sort(&leads, SortKey::ScoreAsc);
    assert_eq!(leads, sample());
}

#[test]
fn filter_keeps_selected_buckets() {
    let selected: HashSet<Bucket> = [Bucket::High, Bucket::Low].into_iter().collect();
    let filtered = filter(&sample(), &selected);
    assert_eq!(ids(&filtered), vec!["2", "3", "4"]);
}

#[test]
fn filter_with_all_buckets_is_identity() {
    let selected: HashSet<Bucket> = Bucket::ALL.into_iter().collect();
    assert_eq!(filter(&sample(), &selected), sample());
}

#[test]
fn filter_with_no_buckets_is_empty() {
    assert!(filter(&sample(), &HashSet::new()).is_empty());
}

#[test]
fn filter_accepts_custom_hasher() {
    let mut selected: HashSet<Bucket, BuildHasherDefault<DefaultHasher>> = HashSet::default();
    selected.insert(Bucket::Medium);
    let filtered = filter(&sample(), &selected);
    assert_eq!(ids(&filtered), vec!["1", "5"]);
}

#[test]
fn filter_is_idempotent() {
    let selected: HashSet<Bucket> = [Bucket::Medium].into_iter().collect();
    let once = filter(&sample(), &selected);
    assert_eq!(filter(&once, &selected), once);
}

#[test]
fn score_distribution_counts_buckets() {
    let dist = score_distribution(&sample());
    assert_eq!(
        dist,
        ScoreDistribution {
            high: 2,
            medium: 2,
            low: 1,
        }
    );
}

#[test]
fn json_round_trip() {
    let leads = sample();
    let json = to_json(&leads).unwrap();
    assert_eq!(from_json(&json).unwrap(), leads);
}

#[test]
fn json_uses_two_space_indent() {
    let json = to_json(&[lead("1", "alice", 9)]).unwrap();
    assert!(json.starts_with("[\n  {\n    \"id\": \"1\""), "got: {json}");
}

#[test]
fn json_of_empty_list() {
    assert_eq!(to_json(&[]).unwrap(), "[]");
}

#[test]
fn from_json_rejects_out_of_range_score() {
    let mut json = to_json(&[lead("1", "alice", 9)]).unwrap();
    json = json.replace("\"score\": 9", "\"score\": 11");
    assert!(matches!(from_json(&json), Err(FormatError::Json(_))));
}

#[test]
fn csv_has_fixed_header() {
    let csv = to_csv(&[]).unwrap();
    assert_eq!(
        csv,
        "Author,Score,Post URL,Content,Business Context,Decision Authority,Pain Points,Budget Indicators,Red Flags,Recommendation\n"
    );
}

#[test]
fn csv_joins_pain_points_and_quotes_commas() {
    let csv = to_csv(&[lead("7", "alice", 8)]).unwrap();
    let row = csv.lines().nth(1).unwrap();
    assert_eq!(
        row,
        "alice,8,https://x.com/alice/status/7,post 7 by alice,Mid-size retailer,Head of Data,\"manual reports, stale dashboards\",Evaluating paid tools,None,Reach out with a demo"
    );
}

#[test]
fn csv_escapes_quotes_and_newlines() {
    let mut l = lead("8", "bob", 6);
    l.post.content = "we \"need\"\na dashboard".to_owned();
    let csv = to_csv(&[l]).unwrap();
    assert!(
        csv.contains("\"we \"\"need\"\"\na dashboard\""),
        "content should be quoted and escaped: {csv}"
    );
}

#[test]
fn export_file_name_uses_timestamp_suffix() {
    let at = chrono::NaiveDate::from_ymd_opt(2026, 3, 4)
        .unwrap()
        .and_hms_opt(5, 6, 7)
        .unwrap();
    assert_eq!(
        export_file_name(ExportFormat::Json, at),
        "x_leads_20260304_050607.json"
    );
    assert_eq!(
        export_file_name(ExportFormat::Csv, at),
        "x_leads_20260304_050607.csv"
    );
}

#[test]
fn export_format_render_dispatches() {
    let leads = sample();
    assert_eq!(
        ExportFormat::Json.render(&leads).unwrap(),
        to_json(&leads).unwrap()
    );
    assert_eq!(
        ExportFormat::Csv.render(&leads).unwrap(),
        to_csv(&leads).unwrap()
    );
}
