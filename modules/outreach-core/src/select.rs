use crate::platform::Platform;
use crate::record::ContentRecord;

/// Dataset key the tweet scraper sets on retweets.
const RESHARE_FLAG: &str = "isRetweet";

/// Pick the one record a response is composed from.
///
/// Twitter skips retweets and falls back to the first record when every item
/// is a retweet. LinkedIn takes the first record as-is: the posts actor
/// returns newest first and reshares are not filtered there.
pub fn select(records: Vec<ContentRecord>, platform: Platform) -> Option<ContentRecord> {
    match platform {
        Platform::Twitter => {
            let idx = records
                .iter()
                .position(|record| !record.flag(RESHARE_FLAG))
                .unwrap_or(0);
            records.into_iter().nth(idx)
        }
        Platform::LinkedIn => records.into_iter().next(),
    }
}
