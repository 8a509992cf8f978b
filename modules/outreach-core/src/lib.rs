pub mod backend;
pub mod compose;
pub mod error;
pub mod fetcher;
pub mod normalize;
pub mod platform;
pub mod prompts;
pub mod record;
pub mod select;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use backend::{ApifyBackend, ScrapeBackend, ScrapeJobRequest, ScrapeJobResult};
pub use compose::{compose, EngagementResponse, LatestContent};
pub use error::{ErrorEnvelope, FetchError, FetchResult};
pub use fetcher::{ProfileFetcher, ProfileLookup};
pub use normalize::normalize;
pub use platform::Platform;
pub use prompts::{PromptSet, PromptVariant};
pub use record::ContentRecord;
pub use select::select;
