//! Plain-text views over a published [`RunSession`].

use std::collections::HashSet;
use std::fmt::Write as _;

use leadscout_core::{
    bucket, filter, score_distribution, sort, Bucket, Lead, Post, RunSession, SortKey,
};

/// Totals, last search time and score distribution.
pub(crate) fn dashboard(session: &RunSession) -> String {
    let stats = session.stats();
    let mut out = String::new();
    let _ = writeln!(out, "{:<22}{}", "Posts searched", stats.total_posts);
    let _ = writeln!(out, "{:<22}{}", "Posts analyzed", stats.analyzed_posts);
    let _ = writeln!(out, "{:<22}{}", "Qualified leads", stats.leads_found);
    if let Some(at) = stats.last_search {
        let _ = writeln!(
            out,
            "Last search completed: {}",
            at.format("%Y-%m-%d %H:%M:%S")
        );
    }

    if !session.leads().is_empty() {
        let dist = score_distribution(session.leads());
        out.push_str("\nLead score distribution\n");
        let rows = [
            (Bucket::High, dist.high, "hot"),
            (Bucket::Medium, dist.medium, "warm"),
            (Bucket::Low, dist.low, "cold"),
        ];
        for (bucket, count, heat) in rows {
            let _ = writeln!(out, "  {:<14}{count:>4}  {heat}", bucket.label());
        }
    }
    out
}

/// Leads in `buckets` (all buckets when empty), ordered by `key`.
pub(crate) fn leads(session: &RunSession, key: SortKey, buckets: &HashSet<Bucket>) -> String {
    if session.leads().is_empty() {
        return "No leads yet. Start a search to find potential B2B customers on X!\n".to_owned();
    }

    let selected: HashSet<Bucket> = if buckets.is_empty() {
        Bucket::ALL.into_iter().collect()
    } else {
        buckets.clone()
    };
    let shown = sort(&filter(session.leads(), &selected), key);

    let mut out = format!("Showing {} lead(s)\n", shown.len());
    for (idx, lead) in shown.iter().enumerate() {
        write_lead(&mut out, idx + 1, lead);
    }
    out
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

fn write_lead(out: &mut String, n: usize, lead: &Lead) {
    let post = &lead.post;
    let m = &post.engagement_metrics;
    let _ = writeln!(
        out,
        "\nLead #{n}: @{} - Score: {}/10 [{}]",
        post.author,
        lead.score,
        bucket(lead.score)
    );
    let _ = writeln!(out, "  Post: {}", post.content);
    let _ = writeln!(out, "  URL: {}", post.url);
    let _ = writeln!(
        out,
        "  Engagement: {} likes | {} retweets | {} replies",
        m.likes, m.retweets, m.replies
    );
    let _ = writeln!(
        out,
        "  Business context: {}",
        or_placeholder(&lead.business_context, "Not available")
    );
    let _ = writeln!(
        out,
        "  Decision authority: {}",
        or_placeholder(&lead.decision_authority, "Not available")
    );
    let _ = writeln!(
        out,
        "  Budget indicators: {}",
        or_placeholder(&lead.budget_indicators, "Not available")
    );
    let _ = writeln!(
        out,
        "  Red flags: {}",
        or_placeholder(&lead.red_flags, "None identified")
    );
    if lead.pain_points.is_empty() {
        out.push_str("  Pain points: No specific pain points identified\n");
    } else {
        out.push_str("  Pain points:\n");
        for point in &lead.pain_points {
            let _ = writeln!(out, "    - {point}");
        }
    }
    let _ = writeln!(
        out,
        "  Recommendation: {}",
        or_placeholder(&lead.recommendation, "No recommendation available")
    );
}

/// Every post explored during the run, in search order.
pub(crate) fn posts(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts explored yet. Start a search to see all posts analyzed!\n".to_owned();
    }
    let mut out = format!("Total posts explored: {}\n", posts.len());
    for (idx, post) in posts.iter().enumerate() {
        let _ = writeln!(out, "\nPost #{}: @{}", idx + 1, post.author);
        let _ = writeln!(out, "  Content: {}", post.content);
        let _ = writeln!(out, "  URL: {}", post.url);
    }
    out
}
