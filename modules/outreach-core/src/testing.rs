// Test double for the ScrapeBackend seam.
//
// MockBackend serves a fixed dataset (or a fixed failure) and records every
// job request it receives, so tests can assert both what came out of the
// pipeline and what would have been sent to Apify.

use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::backend::{ScrapeBackend, ScrapeJobRequest, ScrapeJobResult};
use crate::record::ContentRecord;

enum Outcome {
    Records(Vec<ContentRecord>),
    JobFails(String),
    ReadFails(String),
}

pub struct MockBackend {
    outcome: Outcome,
    requests: Mutex<Vec<ScrapeJobRequest>>,
}

impl MockBackend {
    /// Every job succeeds and its dataset holds `items` in order.
    pub fn with_items(items: Vec<Value>) -> Self {
        Self::new(Outcome::Records(
            items.into_iter().map(ContentRecord::from_value).collect(),
        ))
    }

    /// Every job succeeds with an empty dataset.
    pub fn empty() -> Self {
        Self::new(Outcome::Records(Vec::new()))
    }

    /// Job submission fails with `message`.
    pub fn failing_job(message: &str) -> Self {
        Self::new(Outcome::JobFails(message.to_string()))
    }

    /// Job succeeds but reading its dataset fails with `message`.
    pub fn failing_read(message: &str) -> Self {
        Self::new(Outcome::ReadFails(message.to_string()))
    }

    fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Job requests received so far, in order.
    pub fn requests(&self) -> Vec<ScrapeJobRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScrapeBackend for MockBackend {
    async fn run_job(&self, request: &ScrapeJobRequest) -> Result<ScrapeJobResult> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(request.clone());
        if let Outcome::JobFails(message) = &self.outcome {
            bail!("{message}");
        }
        Ok(ScrapeJobResult {
            run_id: format!("run-{}", requests.len()),
            dataset_id: format!("dataset-{}", requests.len()),
        })
    }

    async fn read_dataset(&self, _job: &ScrapeJobResult) -> Result<Vec<ContentRecord>> {
        match &self.outcome {
            Outcome::Records(records) => Ok(records.clone()),
            Outcome::ReadFails(message) => bail!("{message}"),
            Outcome::JobFails(_) => bail!("dataset read after failed job"),
        }
    }
}
