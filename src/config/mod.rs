//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::{defaults, output_formats, timeouts};
use crate::core::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Per-check deadline in seconds
    pub timeout: Option<u64>,

    /// Number of concurrent checks
    pub concurrency: Option<usize>,

    /// Retry attempts for transport failures
    pub retry_attempts: Option<u8>,

    /// Initial delay between retries in milliseconds (doubles per attempt, capped)
    pub retry_delay: Option<u64>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Skip SSL certificate verification
    pub skip_ssl_verification: Option<bool>,

    /// HTTP/HTTPS proxy URL
    pub proxy: Option<String>,

    /// Use HEAD requests instead of GET (some servers may not support)
    pub use_head_requests: Option<bool>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            concurrency: None, // Will default to CPU core count
            retry_attempts: Some(defaults::RETRY_ATTEMPTS),
            retry_delay: Some(timeouts::DEFAULT_RETRY_DELAY_MS),
            user_agent: None,
            skip_ssl_verification: Some(false),
            proxy: None,
            use_head_requests: Some(false), // Default to GET for compatibility
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            crate::core::error::SiteUpError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            crate::core::error::SiteUpError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Validate the loaded configuration
        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .siteup.toml in current directory
        if let Ok(config) = Self::load_from_file(".siteup.toml") {
            return config;
        }

        // Check for .siteup.toml in parent directories (up to 3 levels)
        for i in 1..=3 {
            let path = format!("{}.siteup.toml", "../".repeat(i));
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Core options
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(concurrency) = cli_config.concurrency {
            self.concurrency = Some(concurrency);
        }

        // Retry behavior
        if let Some(retry_attempts) = cli_config.retry_attempts {
            self.retry_attempts = Some(retry_attempts);
        }
        if let Some(retry_delay) = cli_config.retry_delay {
            self.retry_delay = Some(retry_delay);
        }

        // Output & format
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }

        // Network & security
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(ref proxy) = cli_config.proxy {
            self.proxy = Some(proxy.clone());
        }
        if cli_config.skip_ssl_verification {
            self.skip_ssl_verification = Some(true);
        }
        if cli_config.use_head_requests {
            self.use_head_requests = Some(true);
        }
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// Get retry delay as Duration
    pub fn retry_delay_duration(&self) -> Duration {
        Duration::from_millis(self.retry_delay.unwrap_or(timeouts::DEFAULT_RETRY_DELAY_MS))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate timeout
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(crate::core::error::SiteUpError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(crate::core::error::SiteUpError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>1 hour). Consider using a smaller value."
                )));
            }
        }

        // Validate concurrency
        if let Some(concurrency) = self.concurrency {
            if concurrency == 0 {
                return Err(crate::core::error::SiteUpError::Config(
                    "Concurrency cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if concurrency > defaults::MAX_CONCURRENCY {
                return Err(crate::core::error::SiteUpError::Config(format!(
                    "Concurrency of {concurrency} is extremely high and may cause system instability. Consider using a smaller value."
                )));
            }
        }

        // Validate retry attempts
        if let Some(retry) = self.retry_attempts
            && retry > defaults::MAX_RETRY_ATTEMPTS
        {
            return Err(crate::core::error::SiteUpError::Config(format!(
                "Retry attempts of {retry} is very high and may cause long delays. Consider using a smaller value."
            )));
        }

        // Validate output format
        if let Some(ref format) = self.output_format {
            match format.as_str() {
                f if output_formats::ALL.contains(&f) => {}
                _ => {
                    return Err(crate::core::error::SiteUpError::Config(format!(
                        "Invalid output format '{format}'. Expected one of: {}.",
                        output_formats::ALL.join(", ")
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Core options
    pub timeout: Option<u64>,           // --timeout
    pub concurrency: Option<usize>,     // --concurrency

    // Retry behavior
    pub retry_attempts: Option<u8>,     // --retry
    pub retry_delay: Option<u64>,       // --retry-delay

    // Output & format
    pub quiet: bool,                    // --quiet
    pub verbose: bool,                  // --verbose
    pub output_format: Option<String>,  // --format
    pub no_progress: bool,              // --no-progress

    // Network & security
    pub user_agent: Option<String>,     // --user-agent
    pub proxy: Option<String>,          // --proxy
    pub skip_ssl_verification: bool,    // --insecure
    pub use_head_requests: bool,        // --head

    // Configuration
    pub config_file: Option<String>,    // --config
    pub no_config: bool,                // --no-config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::output_formats;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.timeout, Some(timeouts::DEFAULT_TIMEOUT_SECONDS));
        assert_eq!(config.retry_attempts, Some(0));
        assert_eq!(config.use_head_requests, Some(false));
        assert_eq!(
            config.output_format,
            Some(output_formats::DEFAULT.to_string())
        );
    }

    #[test]
    fn test_config_load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"timeout = 60\nretry_attempts = 2\nuser_agent = \"test-agent\"")?;

        let config = Config::load_from_file(file.path())?;
        assert_eq!(config.timeout, Some(60));
        assert_eq!(config.retry_attempts, Some(2));
        assert_eq!(config.user_agent, Some("test-agent".to_string()));

        Ok(())
    }

    #[test]
    fn test_config_load_from_missing_file() {
        let result = Config::load_from_file("definitely-not-a-config.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_load_rejects_invalid_values() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"timeout = 0")?;

        assert!(Config::load_from_file(file.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_config_merge_with_cli() {
        let mut config = Config::default();
        let cli_config = CliConfig {
            timeout: Some(45),
            use_head_requests: true,
            verbose: true,
            ..Default::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.timeout, Some(45));
        assert_eq!(config.use_head_requests, Some(true));
        assert_eq!(config.verbose, Some(true));
    }

    #[test]
    fn test_config_merge_keeps_file_values_when_cli_unset() {
        let mut config = Config {
            timeout: Some(20),
            proxy: Some("http://proxy:8080".to_string()),
            ..Default::default()
        };

        config.merge_with_cli(&CliConfig::default());

        assert_eq!(config.timeout, Some(20));
        assert_eq!(config.proxy, Some("http://proxy:8080".to_string()));
    }

    #[test]
    fn test_timeout_duration() {
        let config = Config {
            timeout: Some(45),
            ..Default::default()
        };
        assert_eq!(config.timeout_duration(), Duration::from_secs(45));

        let default_config = Config {
            timeout: None,
            ..Default::default()
        };
        assert_eq!(
            default_config.timeout_duration(),
            Duration::from_secs(timeouts::DEFAULT_TIMEOUT_SECONDS)
        );
    }

    #[test]
    fn test_retry_delay_duration() {
        let config = Config {
            retry_delay: Some(250),
            ..Default::default()
        };
        assert_eq!(config.retry_delay_duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            timeout: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_concurrency() {
        let config = Config {
            concurrency: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_excessive_retry() {
        let config = Config {
            retry_attempts: Some(21),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_output_format() {
        let config = Config {
            output_format: Some("yaml".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }
}
