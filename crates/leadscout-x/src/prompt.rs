//! User-message text sent alongside the qualification rubric.

use std::fmt::Write as _;

use leadscout_core::Post;

/// Discussion themes a matching post should touch on.
const THEMES: [&str; 4] = [
    "Need for BI tools or dashboards",
    "Data visualization challenges",
    "Business analytics requirements",
    "Reporting and analytics pain points",
];

/// Fields every returned post must carry.
const POST_FIELDS: [&str; 5] = [
    "Post ID",
    "Author username",
    "Post content/text",
    "Post URL",
    "Engagement metrics (likes, retweets, replies)",
];

/// Builds the per-query search instructions.
#[must_use]
pub fn build_search_prompt(query: &str, max_results: usize) -> String {
    let mut out = format!("Search X for posts matching: \"{query}\"\n\n");
    out.push_str("Find recent posts (last 7 days) where people are discussing:\n");
    for theme in THEMES {
        let _ = writeln!(out, "- {theme}");
    }
    let _ = writeln!(
        out,
        "\nReturn up to {max_results} most relevant posts with:"
    );
    for field in POST_FIELDS {
        let _ = writeln!(out, "- {field}");
    }
    out.push_str("\nFormat each post clearly with all details.");
    out
}

/// Appends the found posts to the search prompt, one numbered block each.
#[must_use]
pub fn build_qualification_message(search_prompt: &str, posts: &[Post]) -> String {
    let mut out = String::from(search_prompt);
    let _ = write!(out, "\n\nPosts found ({}):\n", posts.len());
    for (i, post) in posts.iter().enumerate() {
        let m = &post.engagement_metrics;
        let _ = write!(
            out,
            "\nPost #{n}\nPost ID: {id}\nAuthor: @{author}\nURL: {url}\n\
             Engagement: {likes} likes, {retweets} retweets, {replies} replies\n\
             Content: {content}\n",
            n = i + 1,
            id = post.id,
            author = post.author,
            url = post.url,
            likes = m.likes,
            retweets = m.retweets,
            replies = m.replies,
            content = post.content,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use leadscout_core::EngagementMetrics;

    use super::*;

    #[test]
    fn search_prompt_names_query_window_and_limit() {
        let prompt = build_search_prompt("need better reporting tool", 25);
        assert!(prompt.starts_with("Search X for posts matching: \"need better reporting tool\""));
        assert!(prompt.contains("(last 7 days)"));
        assert!(prompt.contains("- Data visualization challenges\n"));
        assert!(prompt.contains("Return up to 25 most relevant posts with:"));
        assert!(prompt.contains("- Engagement metrics (likes, retweets, replies)\n"));
        assert!(prompt.ends_with("Format each post clearly with all details."));
    }

    #[test]
    fn qualification_message_lists_posts_in_order() {
        let posts = vec![
            Post {
                id: "11".to_owned(),
                author: "alice".to_owned(),
                content: "Excel is killing us".to_owned(),
                url: "https://x.com/alice/status/11".to_owned(),
                engagement_metrics: EngagementMetrics {
                    likes: 4,
                    retweets: 1,
                    replies: 2,
                },
            },
            Post {
                id: "12".to_owned(),
                author: "bob".to_owned(),
                content: "any Tableau alternatives?".to_owned(),
                url: "https://x.com/bob/status/12".to_owned(),
                engagement_metrics: EngagementMetrics::default(),
            },
        ];

        let msg = build_qualification_message("PROMPT", &posts);

        assert!(msg.starts_with("PROMPT\n\nPosts found (2):\n"));
        assert!(msg.contains("Author: @alice\n"));
        assert!(msg.contains("Engagement: 4 likes, 1 retweets, 2 replies\n"));
        let first = msg.find("Post #1").unwrap();
        let second = msg.find("Post #2").unwrap();
        assert!(first < second);
        assert!(msg.contains("Content: any Tableau alternatives?\n"));
    }
}
