// Command-line interface definitions and parsing for siteup

use crate::config::CliConfig;
use crate::core::constants::{output_formats, timeouts};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Target URLs to check (absolute http:// or https://)
    pub urls: Vec<String>,

    // Core Options
    /// Per-check deadline in seconds (default: 10)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Core Options"
    )]
    pub timeout: Option<u64>,

    /// Concurrent checks (default: CPU cores)
    #[arg(long, value_name = "COUNT", help_heading = "Core Options")]
    pub concurrency: Option<usize>,

    /// Use HEAD requests instead of GET
    #[arg(long, help_heading = "Core Options")]
    pub head: bool,

    // Retry
    /// Retry attempts for transport failures (default: 0)
    #[arg(long, value_name = "COUNT", help_heading = "Retry")]
    pub retry: Option<u8>,

    /// Initial delay between retries in ms, doubled per attempt (default: 1000)
    #[arg(long, value_name = "MS", help_heading = "Retry")]
    pub retry_delay: Option<u64>,

    // Output & Verbosity
    /// Suppress progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, default_value = output_formats::DEFAULT, help_heading = "Output & Verbosity")]
    pub format: String,

    /// Disable progress bars
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Network & Security
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network & Security")]
    pub user_agent: Option<String>,

    /// HTTP/HTTPS proxy URL
    #[arg(long, value_name = "URL", help_heading = "Network & Security")]
    pub proxy: Option<String>,

    /// Skip SSL certificate verification
    #[arg(long, help_heading = "Network & Security")]
    pub insecure: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert parsed CLI arguments into the CliConfig merge layer
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let mut cli_config = CliConfig::default();

    // Core options
    if let Some(timeout) = cli.timeout {
        if timeout == 0 {
            eprintln!(
                "Error: Timeout cannot be 0. Expected a positive integer representing seconds."
            );
            std::process::exit(2);
        }
        if timeout > timeouts::MAX_TIMEOUT_SECONDS {
            eprintln!(
                "Warning: Timeout of {timeout} seconds is quite large. Consider using a smaller value."
            );
        }
        cli_config.timeout = Some(timeout);
    }
    cli_config.concurrency = cli.concurrency;

    // Retry behavior
    cli_config.retry_attempts = cli.retry;
    cli_config.retry_delay = cli.retry_delay;

    // Output & format
    cli_config.quiet = cli.quiet;
    cli_config.verbose = cli.verbose;
    cli_config.output_format = Some(cli.format.clone());
    cli_config.no_progress = cli.no_progress;

    // Network & security
    cli_config.user_agent = cli.user_agent.clone();
    cli_config.proxy = cli.proxy.clone();
    cli_config.skip_ssl_verification = cli.insecure;
    cli_config.use_head_requests = cli.head;

    // Configuration
    cli_config.config_file = cli.config.clone();
    cli_config.no_config = cli.no_config;

    cli_config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).expect("CLI args should parse")
    }

    #[test]
    fn test_cli_parses_urls() {
        let cli = parse(&["siteup", "http://a.com", "http://b.com"]);
        assert_eq!(cli.urls, vec!["http://a.com", "http://b.com"]);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = parse(&["siteup", "http://a.com"]);

        assert_eq!(cli.timeout, None);
        assert_eq!(cli.format, output_formats::DEFAULT);
        assert!(!cli.quiet);
        assert!(!cli.head);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["siteup", "--format", "yaml", "http://a.com"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_to_config_maps_options() {
        let cli = parse(&[
            "siteup",
            "--timeout",
            "20",
            "--concurrency",
            "4",
            "--retry",
            "2",
            "--retry-delay",
            "50",
            "--head",
            "--insecure",
            "--user-agent",
            "TestAgent/1.0",
            "--format",
            "json",
            "http://a.com",
        ]);

        let cli_config = cli_to_config(&cli);

        assert_eq!(cli_config.timeout, Some(20));
        assert_eq!(cli_config.concurrency, Some(4));
        assert_eq!(cli_config.retry_attempts, Some(2));
        assert_eq!(cli_config.retry_delay, Some(50));
        assert!(cli_config.use_head_requests);
        assert!(cli_config.skip_ssl_verification);
        assert_eq!(cli_config.user_agent, Some("TestAgent/1.0".to_string()));
        assert_eq!(cli_config.output_format, Some("json".to_string()));
    }

    #[test]
    fn test_cli_to_config_defaults_are_unset() {
        let cli = parse(&["siteup", "http://a.com"]);
        let cli_config = cli_to_config(&cli);

        assert_eq!(cli_config.timeout, None);
        assert_eq!(cli_config.retry_attempts, None);
        assert!(!cli_config.use_head_requests);
        assert!(!cli_config.no_config);
    }
}
