//! The profile lookup pipeline: normalize, run one job, drain its dataset,
//! select a record, compose the response.
//!
//! Public entry points return JSON strings and never fail: every error is
//! turned into an `{"error": ...}` envelope here.

use std::sync::Arc;

use tracing::{info, warn, Span};

use crate::backend::{ScrapeBackend, ScrapeJobRequest};
use crate::compose::{compose, EngagementResponse};
use crate::error::{FetchError, FetchResult};
use crate::normalize::normalize;
use crate::platform::Platform;
use crate::prompts::PromptVariant;
use crate::record::ContentRecord;
use crate::select::select;

/// One "latest content" lookup as requested by a tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileLookup {
    Twitter {
        handle: String,
        max_items: u32,
    },
    LinkedIn {
        username: String,
        limit: u32,
        total_posts: Option<u32>,
    },
}

impl ProfileLookup {
    pub fn platform(&self) -> Platform {
        match self {
            ProfileLookup::Twitter { .. } => Platform::Twitter,
            ProfileLookup::LinkedIn { .. } => Platform::LinkedIn,
        }
    }

    fn raw_identifier(&self) -> &str {
        match self {
            ProfileLookup::Twitter { handle, .. } => handle,
            ProfileLookup::LinkedIn { username, .. } => username,
        }
    }

    fn job_request(&self, identifier: String) -> anyhow::Result<ScrapeJobRequest> {
        match self {
            ProfileLookup::Twitter { max_items, .. } => {
                ScrapeJobRequest::twitter(vec![identifier], *max_items)
            }
            ProfileLookup::LinkedIn {
                limit, total_posts, ..
            } => ScrapeJobRequest::linkedin(identifier, *limit, *total_posts),
        }
    }
}

pub struct ProfileFetcher {
    backend: Arc<dyn ScrapeBackend>,
    variant: PromptVariant,
}

impl ProfileFetcher {
    pub fn new(backend: Arc<dyn ScrapeBackend>, variant: PromptVariant) -> Self {
        Self { backend, variant }
    }

    pub fn variant(&self) -> PromptVariant {
        self.variant
    }

    /// Latest original tweet of `handle`, as a JSON response or error envelope.
    pub async fn latest_tweet(&self, handle: &str, max_items: u32) -> String {
        self.fetch_json(ProfileLookup::Twitter {
            handle: handle.to_string(),
            max_items,
        })
        .await
    }

    /// Latest post of a LinkedIn profile, as a JSON response or error envelope.
    pub async fn latest_linkedin_post(
        &self,
        username: &str,
        limit: u32,
        total_posts: Option<u32>,
    ) -> String {
        self.fetch_json(ProfileLookup::LinkedIn {
            username: username.to_string(),
            limit,
            total_posts,
        })
        .await
    }

    pub async fn fetch_json(&self, lookup: ProfileLookup) -> String {
        match self.fetch(&lookup).await {
            Ok(response) => response.to_json(),
            Err(e) => {
                warn!(platform = %lookup.platform(), error = %e, "Profile lookup failed");
                e.to_envelope()
            }
        }
    }

    #[tracing::instrument(
        name = "profile_lookup",
        skip(self, lookup),
        fields(platform = %lookup.platform(), identifier = tracing::field::Empty)
    )]
    pub async fn fetch(&self, lookup: &ProfileLookup) -> FetchResult<EngagementResponse> {
        let platform = lookup.platform();
        let identifier = normalize(lookup.raw_identifier(), platform);
        if identifier.is_empty() {
            return Err(FetchError::MissingInput { platform });
        }
        Span::current().record("identifier", identifier.as_str());

        let request = lookup
            .job_request(identifier.clone())
            .map_err(FetchError::Backend)?;
        let records = self.run(&request).await?;
        info!(count = records.len(), "Dataset read");

        let selected = select(records, platform);
        compose(selected, platform, self.variant, &identifier)
    }

    /// Every scraped tweet for several handles, pretty-printed as a JSON array.
    #[tracing::instrument(name = "raw_tweets", skip(self, handles), fields(handles = handles.len()))]
    pub async fn raw_tweets(&self, handles: &[String], max_items: u32) -> String {
        match self.fetch_raw_tweets(handles, max_items).await {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Raw tweet scrape failed");
                e.to_envelope()
            }
        }
    }

    async fn fetch_raw_tweets(&self, handles: &[String], max_items: u32) -> FetchResult<String> {
        let normalized: Vec<String> = handles
            .iter()
            .map(|h| normalize(h, Platform::Twitter))
            .filter(|h| !h.is_empty())
            .collect();
        if normalized.is_empty() {
            return Err(FetchError::MissingInput {
                platform: Platform::Twitter,
            });
        }

        let request =
            ScrapeJobRequest::twitter(normalized, max_items).map_err(FetchError::Backend)?;
        let records = self.run(&request).await?;
        info!(count = records.len(), "Dataset read");

        serde_json::to_string_pretty(&records).map_err(|e| FetchError::Backend(e.into()))
    }

    async fn run(&self, request: &ScrapeJobRequest) -> FetchResult<Vec<ContentRecord>> {
        let job = self
            .backend
            .run_job(request)
            .await
            .map_err(FetchError::Backend)?;
        info!(run_id = %job.run_id, dataset_id = %job.dataset_id, "Scrape job finished");

        self.backend
            .read_dataset(&job)
            .await
            .map_err(FetchError::Backend)
    }
}
