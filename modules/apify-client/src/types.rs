use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wrapper for Apify API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// One page of dataset items. `total` is the dataset size Apify reported in
/// the pagination headers, when present.
#[derive(Debug, Clone)]
pub struct DatasetPage<T> {
    pub items: Vec<T>,
    pub total: Option<usize>,
}

/// Input for the apidojo/tweet-scraper actor.
#[derive(Debug, Clone, Serialize)]
pub struct TweetScraperInput {
    #[serde(rename = "twitterHandles")]
    pub twitter_handles: Vec<String>,
    #[serde(rename = "maxItems")]
    pub max_items: u32,
    pub sort: String,
    #[serde(rename = "tweetLanguage")]
    pub tweet_language: String,
}

impl TweetScraperInput {
    /// Latest English tweets for the given handles.
    pub fn latest(twitter_handles: Vec<String>, max_items: u32) -> Self {
        Self {
            twitter_handles,
            max_items,
            sort: "Latest".to_string(),
            tweet_language: "en".to_string(),
        }
    }
}

/// Input for the apimaestro/linkedin-profile-posts actor.
#[derive(Debug, Clone, Serialize)]
pub struct LinkedInPostsInput {
    pub username: String,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_posts: Option<u32>,
}

/// Apify actor run metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct RunData {
    pub id: String,
    pub status: String,
    #[serde(rename = "defaultDatasetId")]
    pub default_dataset_id: String,
    #[serde(rename = "startedAt")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(rename = "finishedAt")]
    pub finished_at: Option<DateTime<Utc>>,
}

/// Lifecycle state of an actor run, parsed from `RunData::status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Running,
    Succeeded,
    Failed,
}

impl RunData {
    pub fn run_status(&self) -> RunStatus {
        match self.status.as_str() {
            "SUCCEEDED" => RunStatus::Succeeded,
            "FAILED" | "ABORTED" | "TIMED-OUT" => RunStatus::Failed,
            // READY, RUNNING, TIMING-OUT, ABORTING
            _ => RunStatus::Running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tweet_input_uses_actor_field_names() {
        let input = TweetScraperInput::latest(vec!["elonmusk".into()], 3);
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["twitterHandles"][0], "elonmusk");
        assert_eq!(value["maxItems"], 3);
        assert_eq!(value["sort"], "Latest");
        assert_eq!(value["tweetLanguage"], "en");
    }

    #[test]
    fn linkedin_input_omits_unset_total() {
        let input = LinkedInPostsInput {
            username: "satyanadella".into(),
            limit: 5,
            total_posts: None,
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["username"], "satyanadella");
        assert!(value.get("total_posts").is_none());
    }

    #[test]
    fn run_status_parsing() {
        let run: RunData = serde_json::from_str(
            r#"{"id":"r1","status":"TIMED-OUT","defaultDatasetId":"d1","startedAt":null}"#,
        )
        .unwrap();
        assert_eq!(run.run_status(), RunStatus::Failed);
        assert!(run.finished_at.is_none());

        let running = RunData {
            status: "RUNNING".into(),
            ..run.clone()
        };
        assert_eq!(running.run_status(), RunStatus::Running);

        let done = RunData {
            status: "SUCCEEDED".into(),
            ..run
        };
        assert_eq!(done.run_status(), RunStatus::Succeeded);
    }
}
