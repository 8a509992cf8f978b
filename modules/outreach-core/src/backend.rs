// Trait seam between the fetch pipeline and the hosted scraping service.
//
// ApifyBackend is the production implementation. Tests use MockBackend
// (crate::testing): no network, no token, no billable runs.

use std::time::Duration;

use anyhow::{Context, Result};
use apify_client::{ApifyClient, LinkedInPostsInput, TweetScraperInput};
use async_trait::async_trait;
use serde_json::Value;

use crate::platform::Platform;
use crate::record::ContentRecord;

/// One remote job: which actor to run and with what input.
///
/// Built fresh per call and never reused.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeJobRequest {
    pub platform: Platform,
    pub actor_id: &'static str,
    pub input: Value,
}

impl ScrapeJobRequest {
    /// Latest English tweets for one or more handles.
    pub fn twitter(handles: Vec<String>, max_items: u32) -> Result<Self> {
        let input = TweetScraperInput::latest(handles, max_items);
        Ok(Self {
            platform: Platform::Twitter,
            actor_id: apify_client::TWEET_SCRAPER,
            input: serde_json::to_value(input).context("serializing tweet scraper input")?,
        })
    }

    /// Most recent posts of one LinkedIn profile.
    pub fn linkedin(username: String, limit: u32, total_posts: Option<u32>) -> Result<Self> {
        let input = LinkedInPostsInput {
            username,
            limit,
            total_posts,
        };
        Ok(Self {
            platform: Platform::LinkedIn,
            actor_id: apify_client::LINKEDIN_PROFILE_POSTS,
            input: serde_json::to_value(input).context("serializing LinkedIn posts input")?,
        })
    }
}

/// Handle to a finished job. Only meaningful until its dataset is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeJobResult {
    pub run_id: String,
    pub dataset_id: String,
}

#[async_trait]
pub trait ScrapeBackend: Send + Sync {
    /// Submit the job and block until the backend resolves it.
    async fn run_job(&self, request: &ScrapeJobRequest) -> Result<ScrapeJobResult>;

    /// Drain the job's dataset into memory, in dataset order.
    async fn read_dataset(&self, job: &ScrapeJobResult) -> Result<Vec<ContentRecord>>;
}

/// Apify-hosted actors.
pub struct ApifyBackend {
    client: ApifyClient,
    job_timeout: Option<Duration>,
}

impl ApifyBackend {
    pub fn new(client: ApifyClient) -> Self {
        Self {
            client,
            job_timeout: None,
        }
    }

    /// Give up on a job after `timeout`. Without one, calls block until Apify
    /// itself finishes or fails the run.
    pub fn with_job_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.job_timeout = timeout;
        self
    }
}

#[async_trait]
impl ScrapeBackend for ApifyBackend {
    async fn run_job(&self, request: &ScrapeJobRequest) -> Result<ScrapeJobResult> {
        let run = self
            .client
            .call_actor(request.actor_id, &request.input, self.job_timeout)
            .await?;
        Ok(ScrapeJobResult {
            run_id: run.id,
            dataset_id: run.default_dataset_id,
        })
    }

    async fn read_dataset(&self, job: &ScrapeJobResult) -> Result<Vec<ContentRecord>> {
        let items: Vec<Value> = self.client.iterate_dataset_items(&job.dataset_id).await?;
        Ok(items.into_iter().map(ContentRecord::from_value).collect())
    }
}
