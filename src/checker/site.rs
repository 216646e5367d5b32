use async_trait::async_trait;
use futures::{StreamExt, stream};
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::{Client, Response, Url};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use tokio::time::{Duration, sleep};

use crate::core::constants::{error_messages, timeouts};
use crate::core::error::Result;
use crate::core::types::CheckTarget;
use crate::{config::Config, ui::progress::ProgressReporter};

use std::cmp::Ordering;
use std::fmt;

/// Terminal classification of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Fail,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Ok => write!(f, "OK"),
            CheckStatus::Fail => write!(f, "FAIL"),
        }
    }
}

#[async_trait]
pub trait CheckSites {
    async fn check_sites_with_config(
        &self,
        targets: Vec<CheckTarget>,
        config: &Config,
        progress: Option<&mut ProgressReporter>,
    ) -> Result<Vec<CheckResult>>;
}

#[derive(Default, Debug)]
pub struct SiteChecker {}

/// Outcome of a single site check.
///
/// Created fresh per check invocation and never mutated. `final_url` is the
/// URL that actually answered; it is `None` when the connection was never
/// established.
#[derive(Debug, Eq, Clone, Serialize)]
pub struct CheckResult {
    pub url: String,
    pub status: CheckStatus,
    pub final_url: Option<String>,
    pub status_code: Option<u16>,
    pub redirected: bool,
    pub description: Option<String>,
}

impl Ord for CheckResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.url.cmp(&other.url)
    }
}

impl PartialOrd for CheckResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CheckResult {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
            && self.status == other.status
            && self.status_code == other.status_code
            && self.description == other.description
    }
}

impl CheckResult {
    /// Check if this result represents a reachable site.
    pub fn is_ok(&self) -> bool {
        self.status == CheckStatus::Ok
    }

    /// Check if this result represents a failed check.
    pub fn is_not_ok(&self) -> bool {
        !self.is_ok()
    }

    /// Create a CheckResult for a direct 2xx response with no redirect.
    pub fn ok(target: &CheckTarget, status_code: u16, final_url: String) -> Self {
        Self {
            url: target.as_str().to_string(),
            status: CheckStatus::Ok,
            final_url: Some(final_url),
            status_code: Some(status_code),
            redirected: false,
            description: None,
        }
    }

    /// Create a CheckResult for a 3xx response.
    ///
    /// Any redirect is a FAIL, regardless of where it leads. The resolved
    /// `Location` target is reported in the description, annotated with
    /// whether it stays on the requested site under `www.` normalization.
    pub fn redirect(
        target: &CheckTarget,
        status_code: u16,
        final_url: String,
        location: Option<Url>,
    ) -> Self {
        let description = match location {
            Some(ref loc) => {
                let scope = match loc.host_str() {
                    Some(host)
                        if loc.scheme() == target.url().scheme()
                            && target.is_same_site(host) =>
                    {
                        "within site"
                    }
                    _ => "to different site",
                };
                format!("redirect ({status_code}) {scope}: {loc}")
            }
            None => format!("redirect ({status_code}) with no Location header"),
        };

        Self {
            url: target.as_str().to_string(),
            status: CheckStatus::Fail,
            final_url: Some(final_url),
            status_code: Some(status_code),
            redirected: true,
            description: Some(description),
        }
    }

    /// Create a CheckResult for a non-2xx/non-3xx response.
    pub fn http_failure(target: &CheckTarget, status_code: u16, final_url: String) -> Self {
        Self {
            url: target.as_str().to_string(),
            status: CheckStatus::Fail,
            final_url: Some(final_url),
            status_code: Some(status_code),
            redirected: false,
            description: None,
        }
    }

    /// Create a CheckResult for a transport failure (DNS, connect, TLS, timeout).
    pub fn network_failure(target: &CheckTarget, err: &reqwest::Error) -> Self {
        let description = if err.is_timeout() {
            error_messages::OPERATION_TIMED_OUT.to_string()
        } else {
            std::error::Error::source(err)
                .map(|e| e.to_string())
                .unwrap_or_else(|| err.to_string())
        };

        Self {
            url: target.as_str().to_string(),
            status: CheckStatus::Fail,
            final_url: None,
            status_code: None,
            redirected: false,
            description: Some(description),
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.status_code, &self.description) {
            (Some(code), Some(desc)) => {
                write!(f, "{} - {} - {} - {}", self.status, code, &self.url, desc)
            }
            (Some(code), None) => write!(f, "{} - {} - {}", self.status, code, &self.url),
            (None, Some(desc)) => write!(f, "{} - {} - {}", self.status, &self.url, desc),
            (None, None) => write!(f, "{} - {}", self.status, &self.url),
        }
    }
}

#[async_trait]
impl CheckSites for SiteChecker {
    async fn check_sites_with_config(
        &self,
        targets: Vec<CheckTarget>,
        config: &Config,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<Vec<CheckResult>> {
        let unique_targets = Self::dedup_targets(&targets);
        let unique_count = unique_targets.len();

        if let Some(ref mut prog) = progress {
            prog.start_checks(unique_count);
        }

        let client = Self::build_client(config)?;
        let concurrency = config.concurrency.unwrap_or_else(num_cpus::get);
        let progress_counter = Arc::new(AtomicUsize::new(0));

        let mut checks = stream::iter(unique_targets)
            .map(|target| {
                let client = &client;
                let progress_counter = progress_counter.clone();
                let progress_ref = progress.as_ref();
                async move {
                    let result = Self::check_one(client, &target, config).await;

                    // Update progress in batches to reduce atomic operations
                    let current = progress_counter.fetch_add(1, AtomicOrdering::Relaxed) + 1;
                    if let Some(prog) = progress_ref {
                        if current % 10 == 0 || current == 1 {
                            prog.update_check_progress(current);
                        }
                    }

                    result
                }
            })
            .buffer_unordered(concurrency);

        let mut results = Vec::with_capacity(unique_count);
        let mut success_count = 0;

        while let Some(result) = checks.next().await {
            if result.is_ok() {
                success_count += 1;
            }
            results.push(result);
        }

        if let Some(ref prog) = progress {
            prog.update_check_progress(results.len());
            prog.finish_checks(success_count, results.len());
        }

        Ok(results)
    }
}

impl SiteChecker {
    /// Check a single target.
    ///
    /// All runtime network outcomes surface as a `CheckResult`; `Err` is
    /// reserved for client construction problems (bad proxy, TLS setup).
    pub async fn check(&self, target: &CheckTarget, config: &Config) -> Result<CheckResult> {
        let client = Self::build_client(config)?;
        Ok(Self::check_one(&client, target, config).await)
    }

    /// Deduplicate targets, keeping the first occurrence of each URL.
    pub fn dedup_targets(targets: &[CheckTarget]) -> Vec<CheckTarget> {
        let mut seen = FxHashSet::with_capacity_and_hasher(targets.len(), Default::default());
        let mut unique = Vec::with_capacity(targets.len());

        for target in targets {
            if seen.insert(target.as_str()) {
                unique.push(target.clone());
            }
        }

        unique
    }

    fn build_client(config: &Config) -> Result<Client> {
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let concurrency = config.concurrency.unwrap_or_else(num_cpus::get);

        // Redirects are never followed; the raw first response is what gets
        // classified.
        let mut client_builder = Client::builder()
            .timeout(config.timeout_duration())
            .redirect(Policy::none())
            .user_agent(user_agent);

        // Connection pooling configuration for better performance
        client_builder = client_builder
            .pool_max_idle_per_host(concurrency.min(20))
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(60));

        // SSL verification
        if config.skip_ssl_verification.unwrap_or(false) {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        // Proxy configuration
        if let Some(ref proxy_url) = config.proxy
            && let Ok(proxy) = reqwest::Proxy::all(proxy_url)
        {
            client_builder = client_builder.proxy(proxy);
        }

        client_builder
            .build()
            .map_err(crate::core::error::SiteUpError::Http)
    }

    async fn check_one(client: &Client, target: &CheckTarget, config: &Config) -> CheckResult {
        match Self::request_with_retries(client, target, config).await {
            Ok(response) => Self::classify(target, response),
            Err(err) => CheckResult::network_failure(target, &err),
        }
    }

    /// Send the request, retrying transport failures only.
    ///
    /// HTTP responses are never retried; a single successful attempt fully
    /// determines the classification. Backoff doubles per attempt, capped.
    async fn request_with_retries(
        client: &Client,
        target: &CheckTarget,
        config: &Config,
    ) -> std::result::Result<Response, reqwest::Error> {
        let retry_attempts = config.retry_attempts.unwrap_or(0);
        let mut delay = config.retry_delay_duration();
        let mut attempts = 0;

        loop {
            let request = if config.use_head_requests.unwrap_or(false) {
                client.head(target.as_str())
            } else {
                client.get(target.as_str())
            };

            match request.send().await {
                Ok(response) => return Ok(response),
                Err(err) => {
                    if attempts == retry_attempts {
                        return Err(err);
                    }
                    sleep(delay).await;
                    delay =
                        (delay * 2).min(Duration::from_millis(timeouts::MAX_RETRY_BACKOFF_MS));
                    attempts += 1;
                }
            }
        }
    }

    fn classify(target: &CheckTarget, response: Response) -> CheckResult {
        let status = response.status();
        let status_code = status.as_u16();
        let final_url = response.url().to_string();

        if status.is_success() {
            CheckResult::ok(target, status_code, final_url)
        } else if status.is_redirection() {
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|loc| target.url().join(loc).ok());
            CheckResult::redirect(target, status_code, final_url, location)
        } else {
            CheckResult::http_failure(target, status_code, final_url)
        }
    }
}
