//! Canonicalizes user-supplied handles before they reach the scraping backend.
//!
//! Accepts bare handles, pasted profile URLs and display names
//! ("Satya Nadella"). Nothing is validated: a malformed identifier goes to the
//! backend as-is and comes back as an empty dataset.

use crate::platform::Platform;

const URL_SCHEMES: &[&str] = &["http://", "https://"];

/// Normalize a raw handle for `platform`.
///
/// The result is a fixpoint: `normalize(&normalize(h, p), p) == normalize(h, p)`.
pub fn normalize(raw: &str, platform: Platform) -> String {
    let mut current = normalize_once(raw, platform);
    // Joining display-name words can surface a profile-URL marker.
    loop {
        let next = normalize_once(&current, platform);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_once(raw: &str, platform: Platform) -> String {
    let mut handle = raw.trim();

    if let Some(rest) = strip_profile_url(handle, platform) {
        handle = rest;
    }

    if platform == Platform::Twitter {
        handle = handle.trim_start_matches('@').trim_start();
    }

    if is_display_name(handle) {
        return handle
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(platform.slug_separator());
    }

    handle.to_string()
}

/// Everything after the last profile-URL marker, minus query, fragment and
/// trailing slashes. `None` when the input is not a profile URL.
fn strip_profile_url(input: &str, platform: Platform) -> Option<&str> {
    // ASCII lowercasing keeps byte offsets valid for `input`.
    let lowered = input.to_ascii_lowercase();
    let lower = lowered.as_str();

    let end = platform
        .profile_url_markers()
        .iter()
        .flat_map(move |marker| {
            lower
                .match_indices(*marker)
                .filter(move |(idx, _)| at_host_boundary(lower, *idx))
                .map(|(idx, m)| idx + m.len())
        })
        .max()?;

    let rest = input[end..].split(['?', '#']).next().unwrap_or_default();
    Some(rest.trim_end_matches('/').trim())
}

/// `x.com/` must not match inside `netflix.com/`.
fn at_host_boundary(haystack: &str, idx: usize) -> bool {
    idx == 0 || !haystack.as_bytes()[idx - 1].is_ascii_alphanumeric()
}

fn is_display_name(handle: &str) -> bool {
    let lower = handle.to_ascii_lowercase();
    handle.contains(char::is_whitespace)
        && !URL_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_linkedin_profile_url() {
        assert_eq!(
            normalize("linkedin.com/in/satyanadella", Platform::LinkedIn),
            "satyanadella"
        );
        assert_eq!(
            normalize("https://www.linkedin.com/in/satyanadella/", Platform::LinkedIn),
            "satyanadella"
        );
        assert_eq!(
            normalize("HTTPS://LinkedIn.com/in/satyanadella?trk=feed", Platform::LinkedIn),
            "satyanadella"
        );
    }

    #[test]
    fn strips_twitter_and_x_urls() {
        assert_eq!(normalize("https://twitter.com/elonmusk", Platform::Twitter), "elonmusk");
        assert_eq!(normalize("https://x.com/elonmusk/", Platform::Twitter), "elonmusk");
        assert_eq!(normalize("x.com/nossa_ym?lang=en", Platform::Twitter), "nossa_ym");
    }

    #[test]
    fn marker_must_start_at_host_boundary() {
        assert_eq!(
            normalize("https://netflix.com/browse", Platform::Twitter),
            "https://netflix.com/browse"
        );
    }

    #[test]
    fn display_name_becomes_slug() {
        assert_eq!(normalize("Satya Nadella", Platform::LinkedIn), "satya-nadella");
        assert_eq!(normalize("Satya Nadella", Platform::Twitter), "satyanadella");
        assert_eq!(normalize("  Satya   Nadella  ", Platform::LinkedIn), "satya-nadella");
    }

    #[test]
    fn twitter_handle_loses_at_sign() {
        assert_eq!(normalize("@elonmusk", Platform::Twitter), "elonmusk");
        assert_eq!(normalize("@@elonmusk", Platform::Twitter), "elonmusk");
        // LinkedIn usernames have no @ convention; leave them alone.
        assert_eq!(normalize("@someone", Platform::LinkedIn), "@someone");
    }

    #[test]
    fn plain_handle_only_trimmed() {
        assert_eq!(normalize("  ElonMusk \n", Platform::Twitter), "ElonMusk");
        assert_eq!(normalize("satyanadella", Platform::LinkedIn), "satyanadella");
    }

    #[test]
    fn url_with_whitespace_is_not_a_display_name() {
        assert_eq!(
            normalize("https://example.com/a b", Platform::LinkedIn),
            "https://example.com/a b"
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = [
            "elonmusk",
            "@ElonMusk",
            "Satya Nadella",
            "https://www.linkedin.com/in/satya nadella/",
            "linkedin. com/in/ Someone Else",
            "twitter. com/ foo bar",
            "https://x.com/a/status/1",
            "https://example.com/a b",
            "   ",
            "",
            "/// ///",
            "İstanbul Kebab",
        ];
        for platform in [Platform::Twitter, Platform::LinkedIn] {
            for sample in samples {
                let once = normalize(sample, platform);
                assert_eq!(
                    normalize(&once, platform),
                    once,
                    "not idempotent for {sample:?} on {platform}"
                );
            }
        }
    }

    #[test]
    fn joined_words_that_form_a_url_are_stripped() {
        assert_eq!(normalize("twitter. com/ foo bar", Platform::Twitter), "foobar");
    }
}
