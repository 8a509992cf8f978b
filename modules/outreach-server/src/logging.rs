use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_DIRECTIVES: &str = "outreach=info,apify_client=info";

/// `RUST_LOG` when it is set and valid, otherwise the crate defaults.
pub fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean for
/// the stdio transport; `LOG_FORMAT=json` switches to JSON lines.
pub fn init() {
    let filter = log_filter(std::env::var("RUST_LOG").ok().as_deref());
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json");
    if json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directives(filter: EnvFilter) -> String {
        filter.to_string().to_lowercase()
    }

    #[test]
    fn rust_log_is_not_overridden_by_defaults() {
        let filter = directives(log_filter(Some("outreach=debug")));
        assert!(filter.contains("outreach=debug"), "{filter}");
        assert!(!filter.contains("outreach=info"), "{filter}");
        assert!(!filter.contains("apify_client"), "{filter}");
    }

    #[test]
    fn defaults_apply_when_rust_log_unset_or_blank() {
        for rust_log in [None, Some(""), Some("  ")] {
            let filter = directives(log_filter(rust_log));
            assert!(filter.contains("outreach=info"), "{filter}");
            assert!(filter.contains("apify_client=info"), "{filter}");
        }
    }
}
