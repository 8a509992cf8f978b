use std::fmt;

use serde::{Deserialize, Serialize};

/// Social platform a profile lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    LinkedIn,
}

impl Platform {
    /// Substrings that mark a pasted profile URL. Compared ASCII-case-insensitively.
    pub(crate) fn profile_url_markers(self) -> &'static [&'static str] {
        match self {
            Platform::Twitter => &["twitter.com/", "x.com/"],
            Platform::LinkedIn => &["linkedin.com/in/"],
        }
    }

    /// Separator used when turning a display name into a handle.
    pub(crate) fn slug_separator(self) -> &'static str {
        match self {
            Platform::Twitter => "",
            Platform::LinkedIn => "-",
        }
    }

    /// What the platform calls the identifier the user passes in.
    pub fn identifier_label(self) -> &'static str {
        match self {
            Platform::Twitter => "handle",
            Platform::LinkedIn => "username",
        }
    }

    /// What the platform calls one piece of content, plural.
    pub fn content_noun(self) -> &'static str {
        match self {
            Platform::Twitter => "tweets",
            Platform::LinkedIn => "posts",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::LinkedIn => "linkedin",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Twitter => f.write_str("Twitter"),
            Platform::LinkedIn => f.write_str("LinkedIn"),
        }
    }
}
