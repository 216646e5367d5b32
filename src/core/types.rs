use reqwest::Url;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::core::error::SiteUpError;

/// A validated check target.
///
/// Wraps an absolute HTTP(S) URL that has been parsed up front, so the
/// checker never sees malformed input. Construction is the only place a
/// syntactically bad URL is rejected; everything after this point is a
/// network concern.
#[derive(Debug, Clone)]
pub struct CheckTarget {
    url: Url,
}

/// Errors that can occur when parsing a `CheckTarget`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// Input is not a well-formed absolute URL
    Malformed(String),
    /// URL scheme is not http or https
    UnsupportedScheme(String),
    /// URL has no host component
    MissingHost,
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(input) => write!(f, "'{input}' is not an absolute URL"),
            Self::UnsupportedScheme(scheme) => {
                write!(f, "scheme '{scheme}' is not supported, expected http or https")
            }
            Self::MissingHost => write!(f, "URL has no host"),
        }
    }
}

impl std::error::Error for TargetError {}

impl From<TargetError> for SiteUpError {
    fn from(err: TargetError) -> Self {
        SiteUpError::InvalidTarget(err.to_string())
    }
}

impl Ord for CheckTarget {
    fn cmp(&self, other: &Self) -> Ordering {
        self.url.as_str().cmp(other.url.as_str())
    }
}

impl PartialOrd for CheckTarget {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CheckTarget {
    fn eq(&self, other: &Self) -> bool {
        self.url.as_str() == other.url.as_str()
    }
}

impl Eq for CheckTarget {}

impl Hash for CheckTarget {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.as_str().hash(state);
    }
}

impl fmt::Display for CheckTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

impl CheckTarget {
    /// Parse a target from user input.
    ///
    /// Accepts only absolute `http://` or `https://` URLs with a host.
    /// Leading and trailing whitespace is trimmed before parsing.
    ///
    /// # Examples
    /// ```
    /// use siteup::core::types::CheckTarget;
    ///
    /// let target = CheckTarget::parse("http://www.bing.com/").unwrap();
    /// assert_eq!(target.host(), "www.bing.com");
    ///
    /// assert!(CheckTarget::parse("not a url").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, TargetError> {
        let trimmed = input.trim();
        let url = Url::parse(trimmed).map_err(|_| TargetError::Malformed(trimmed.to_string()))?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(TargetError::UnsupportedScheme(other.to_string())),
        }

        if url.host_str().is_none() {
            return Err(TargetError::MissingHost);
        }

        Ok(Self { url })
    }

    /// Get the target URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the target URL as a string slice.
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Get the host component.
    ///
    /// Guaranteed present; `parse` rejects host-less URLs.
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    /// The host with a single leading `www.` stripped.
    ///
    /// Normalization applies to the requested side only: `www.bing.com`
    /// normalizes to `bing.com`, but a bare `bing.com` is left as-is and
    /// never matches the `www.` form.
    pub fn normalized_host(&self) -> &str {
        let host = self.host();
        host.strip_prefix("www.").unwrap_or(host)
    }

    /// Whether `other_host` addresses the same site as this target.
    ///
    /// True when the hosts match exactly, or when `other_host` matches the
    /// requested host after its leading `www.` is stripped.
    pub fn is_same_site(&self, other_host: &str) -> bool {
        other_host == self.host() || other_host == self.normalized_host()
    }
}
