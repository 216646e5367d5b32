/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings, numbers, and other literal values
/// used across the application, making them easier to maintain and modify.
/// Output format constants
pub mod output_formats {
    /// Text output format - colorful output grouped by failure class
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - one plain line per result
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// HTTP status code constants
pub mod http_status {
    /// HTTP 200 OK - successful response
    pub const OK: u16 = 200;
    /// HTTP 301 Moved Permanently - permanent redirect
    pub const MOVED_PERMANENTLY: u16 = 301;
    /// HTTP 302 Found - temporary redirect
    pub const FOUND: u16 = 302;
    /// HTTP 404 Not Found - resource not found
    pub const NOT_FOUND: u16 = 404;
    /// HTTP 500 Internal Server Error - server error
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
    /// HTTP 502 Bad Gateway - bad gateway error
    pub const BAD_GATEWAY: u16 = 502;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default per-check deadline in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
    /// Maximum reasonable timeout in seconds (1 hour)
    pub const MAX_TIMEOUT_SECONDS: u64 = 3600;
    /// Minimum timeout in seconds
    pub const MIN_TIMEOUT_SECONDS: u64 = 1;
    /// Default retry delay in milliseconds
    pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;
    /// Cap for the exponential retry backoff in milliseconds
    pub const MAX_RETRY_BACKOFF_MS: u64 = 10_000;
}

/// Default configuration values
pub mod defaults {
    /// Default number of retry attempts
    pub const RETRY_ATTEMPTS: u8 = 0;
    /// Maximum accepted retry attempts
    pub const MAX_RETRY_ATTEMPTS: u8 = 20;
    /// Maximum accepted concurrency before config validation rejects it
    pub const MAX_CONCURRENCY: usize = 1000;
}

/// Error message constants
pub mod error_messages {
    /// Timeout error message from reqwest
    pub const OPERATION_TIMED_OUT: &str = "operation timed out";
    /// Unknown error fallback
    pub const UNKNOWN_ERROR: &str = "Unknown error";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::TEXT, "text");
        assert_eq!(output_formats::JSON, "json");
        assert_eq!(output_formats::MINIMAL, "minimal");
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 3);
    }

    #[test]
    fn test_http_status_constants() {
        assert_eq!(http_status::OK, 200);
        assert_eq!(http_status::MOVED_PERMANENTLY, 301);
        assert_eq!(http_status::NOT_FOUND, 404);
    }

    #[test]
    fn test_timeout_constants() {
        assert_eq!(timeouts::DEFAULT_TIMEOUT_SECONDS, 10);
        assert_eq!(timeouts::MAX_TIMEOUT_SECONDS, 3600);
        assert_eq!(timeouts::MIN_TIMEOUT_SECONDS, 1);
        assert!(timeouts::MAX_RETRY_BACKOFF_MS >= timeouts::DEFAULT_RETRY_DELAY_MS);
    }

    #[test]
    fn test_error_message_constants() {
        assert_eq!(error_messages::OPERATION_TIMED_OUT, "operation timed out");
        assert_eq!(error_messages::UNKNOWN_ERROR, "Unknown error");
    }
}
