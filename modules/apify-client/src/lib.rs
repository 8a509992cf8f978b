pub mod error;
pub mod types;

pub use error::{ApifyError, Result};
pub use types::{DatasetPage, LinkedInPostsInput, RunData, RunStatus, TweetScraperInput};

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use types::ApiResponse;

const BASE_URL: &str = "https://api.apify.com/v2";

/// Actor ID for apidojo/tweet-scraper.
pub const TWEET_SCRAPER: &str = "61RPP7dywgiy0JPD0";

/// Actor for apimaestro/linkedin-profile-posts (`username~name` form).
pub const LINKEDIN_PROFILE_POSTS: &str = "apimaestro~linkedin-profile-posts";

/// Server-side long-poll window. Apify caps `waitForFinish` at 60 seconds.
const WAIT_FOR_FINISH_SECS: u32 = 60;

const PAGINATION_TOTAL_HEADER: &str = "x-apify-pagination-total";

/// Default number of dataset items requested per page.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

pub struct ApifyClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
    page_size: usize,
}

impl ApifyClient {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url: BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Point the client at a different API root (proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn run_url(&self, actor_id: &str) -> String {
        format!(
            "{}/acts/{}/runs?waitForFinish={}",
            self.base_url, actor_id, WAIT_FOR_FINISH_SECS
        )
    }

    fn poll_url(&self, run_id: &str) -> String {
        format!(
            "{}/actor-runs/{}?waitForFinish={}",
            self.base_url, run_id, WAIT_FOR_FINISH_SECS
        )
    }

    fn dataset_page_url(&self, dataset_id: &str, offset: usize, limit: usize) -> String {
        format!(
            "{}/datasets/{}/items?format=json&offset={}&limit={}",
            self.base_url, dataset_id, offset, limit
        )
    }

    /// Start an actor run. Apify holds the request open for up to a minute,
    /// so short runs come back already finished.
    pub async fn start_run<I: Serialize + ?Sized>(
        &self,
        actor_id: &str,
        input: &I,
    ) -> Result<RunData> {
        let resp = self
            .client
            .post(self.run_url(actor_id))
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;

        let api_resp: ApiResponse<RunData> = ensure_success(resp).await?.json().await?;
        Ok(api_resp.data)
    }

    /// Poll until a run completes. Uses `waitForFinish=60` for efficient long-polling.
    pub async fn wait_for_run(&self, run_id: &str) -> Result<RunData> {
        loop {
            let resp = self
                .client
                .get(self.poll_url(run_id))
                .bearer_auth(&self.token)
                .send()
                .await?;

            let api_resp: ApiResponse<RunData> = ensure_success(resp).await?.json().await?;
            let run = api_resp.data;
            match run.run_status() {
                RunStatus::Succeeded => return Ok(run),
                RunStatus::Failed => return Err(ApifyError::RunFailed(run.status)),
                RunStatus::Running => {
                    tracing::debug!(run_id, status = %run.status, "Run still in progress");
                }
            }
        }
    }

    /// Run an actor to completion: start, then long-poll until terminal.
    ///
    /// With `timeout = None` this blocks until Apify itself resolves the run.
    pub async fn call_actor<I: Serialize + ?Sized>(
        &self,
        actor_id: &str,
        input: &I,
        timeout: Option<Duration>,
    ) -> Result<RunData> {
        let job = self.run_to_completion(actor_id, input);

        let completed = match timeout {
            Some(limit) => tokio::time::timeout(limit, job)
                .await
                .map_err(|_| ApifyError::Timeout(limit))??,
            None => job.await?,
        };

        tracing::info!(
            run_id = %completed.id,
            dataset_id = %completed.default_dataset_id,
            "Run completed"
        );
        Ok(completed)
    }

    async fn run_to_completion<I: Serialize + ?Sized>(
        &self,
        actor_id: &str,
        input: &I,
    ) -> Result<RunData> {
        let run = self.start_run(actor_id, input).await?;
        tracing::info!(actor_id, run_id = %run.id, status = %run.status, "Apify run started");

        match run.run_status() {
            RunStatus::Succeeded => Ok(run),
            RunStatus::Failed => Err(ApifyError::RunFailed(run.status)),
            RunStatus::Running => self.wait_for_run(&run.id).await,
        }
    }

    /// Fetch one page of dataset items. Empty items are kept so that page
    /// boundaries line up with `offset`/`limit`.
    pub async fn get_dataset_page<T: DeserializeOwned>(
        &self,
        dataset_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<DatasetPage<T>> {
        let resp = self
            .client
            .get(self.dataset_page_url(dataset_id, offset, limit))
            .bearer_auth(&self.token)
            .send()
            .await?;

        let resp = ensure_success(resp).await?;
        let total = resp
            .headers()
            .get(PAGINATION_TOTAL_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<usize>().ok());
        let items: Vec<T> = resp.json().await?;
        Ok(DatasetPage { items, total })
    }

    /// Drain a dataset page by page. Stops on an empty page, or once the
    /// reported total has been covered.
    pub async fn iterate_dataset_items<T: DeserializeOwned>(
        &self,
        dataset_id: &str,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut offset = 0;

        loop {
            let page: DatasetPage<T> = self
                .get_dataset_page(dataset_id, offset, self.page_size)
                .await?;
            let fetched = page.items.len();
            tracing::debug!(dataset_id, offset, fetched, total = ?page.total, "Fetched dataset page");
            if fetched == 0 {
                break;
            }
            items.extend(page.items);

            offset += self.page_size;
            if page.total.is_some_and(|total| offset >= total) {
                break;
            }
        }

        tracing::info!(dataset_id, count = items.len(), "Fetched dataset items");
        Ok(items)
    }
}

async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApifyError::Api {
        status: status.as_u16(),
        message: body,
    })
}
