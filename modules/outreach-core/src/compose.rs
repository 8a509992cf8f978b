//! Maps the selected record onto the fixed response schema and attaches the
//! configured instruction block.

use serde::Serialize;

use crate::error::{FetchError, FetchResult};
use crate::platform::Platform;
use crate::prompts::PromptVariant;
use crate::record::{ContentRecord, FieldView};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TweetSummary {
    pub text: String,
    pub url: String,
    pub created_at: String,
    pub likes: i64,
    pub retweets: i64,
    pub replies: i64,
    pub quotes: i64,
    pub views: i64,
    pub platform: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedInAuthor {
    pub name: String,
    pub headline: String,
    pub username: String,
    pub profile_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedInEngagement {
    pub total_reactions: i64,
    pub likes: i64,
    pub supports: i64,
    pub loves: i64,
    pub insights: i64,
    pub celebrates: i64,
    pub comments: i64,
    pub reposts: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedInPostSummary {
    pub text: String,
    pub url: String,
    pub posted_date: String,
    pub relative_time: String,
    pub author: LinkedInAuthor,
    pub engagement: LinkedInEngagement,
    pub platform: &'static str,
}

/// The content half of a response, keyed by platform in the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LatestContent {
    #[serde(rename = "latest_tweet")]
    Tweet(TweetSummary),
    #[serde(rename = "latest_post")]
    Post(LinkedInPostSummary),
}

/// Successful tool output: the latest content plus instructions for the
/// model that writes the outreach message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementResponse {
    #[serde(flatten)]
    pub content: LatestContent,
    pub agent_instruction: &'static str,
    pub context: &'static str,
    pub requirements: &'static [&'static str],
}

impl EngagementResponse {
    pub fn to_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => FetchError::Backend(e.into()).to_envelope(),
        }
    }
}

/// Build the response for `record`, or the no-content error when the
/// selector came back empty.
pub fn compose(
    record: Option<ContentRecord>,
    platform: Platform,
    variant: PromptVariant,
    identifier: &str,
) -> FetchResult<EngagementResponse> {
    let record = record.ok_or_else(|| FetchError::NoContentFound {
        platform,
        identifier: identifier.to_string(),
    })?;

    let content = match platform {
        Platform::Twitter => LatestContent::Tweet(tweet_summary(&record)),
        Platform::LinkedIn => LatestContent::Post(linkedin_summary(&record)),
    };

    let prompts = variant.prompts(platform);
    Ok(EngagementResponse {
        content,
        agent_instruction: prompts.agent_instruction,
        context: prompts.context,
        requirements: prompts.requirements,
    })
}

fn tweet_summary(record: &ContentRecord) -> TweetSummary {
    let fields = record.fields();
    TweetSummary {
        text: first_non_empty(fields, &["fullText", "text"]),
        url: first_non_empty(fields, &["url", "twitterUrl"]),
        created_at: first_non_empty(fields, &["createdAt", "created_at"]),
        likes: record.count("likeCount"),
        retweets: record.count("retweetCount"),
        replies: record.count("replyCount"),
        quotes: record.count("quoteCount"),
        views: record.count("viewCount"),
        platform: Platform::Twitter.as_str(),
    }
}

fn linkedin_summary(record: &ContentRecord) -> LinkedInPostSummary {
    let posted_at = record.child("posted_at");
    let author = record.child("author");
    let stats = record.child("stats");

    let full_name = format!("{} {}", author.str("first_name"), author.str("last_name"));
    let name = match full_name.trim() {
        "" => author.str("name").to_string(),
        joined => joined.to_string(),
    };

    LinkedInPostSummary {
        text: record.str("text").to_string(),
        url: record.str("url").to_string(),
        posted_date: posted_at.str("date").to_string(),
        relative_time: posted_at.str("relative").to_string(),
        author: LinkedInAuthor {
            name,
            headline: author.str("headline").to_string(),
            username: author.str("username").to_string(),
            profile_url: author.str("profile_url").to_string(),
        },
        engagement: LinkedInEngagement {
            total_reactions: stats.count("total_reactions"),
            likes: stats.count("like"),
            supports: stats.count("support"),
            loves: stats.count("love"),
            insights: stats.count("insight"),
            celebrates: stats.count("celebrate"),
            comments: stats.count("comments"),
            reposts: stats.count("reposts"),
        },
        platform: Platform::LinkedIn.as_str(),
    }
}

fn first_non_empty(fields: FieldView<'_>, keys: &[&str]) -> String {
    keys.iter()
        .map(|key| fields.str(key))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}
