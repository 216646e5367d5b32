use clap::{CommandFactory, Parser};
use siteup::checker::{CheckSites, SiteChecker};
use siteup::config::Config;
use siteup::core::constants::output_formats;
use siteup::core::types::CheckTarget;
use siteup::reporting::logging;
use siteup::ui::output;
use siteup::ui::{Cli, Commands, ProgressReporter, cli_to_config, print_completions};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    // Validate that URLs are provided when not generating completions
    if cli.urls.is_empty() {
        eprintln!("Error: No URLs provided");
        eprintln!("\nFor more information, try '--help'.");
        std::process::exit(2);
    }

    // Run the main site checking logic
    match run_siteup_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Main site checking logic extracted from main() for testing
pub async fn run_siteup_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    // Parse CLI arguments into CliConfig using the derive-based CLI
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;

    // Setup logging and output settings
    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);

    // Parse targets up front; a malformed URL aborts before any network call
    let targets = parse_targets(&cli.urls)?;
    let total_targets = targets.len();
    let unique_targets = SiteChecker::dedup_targets(&targets).len();

    let actual_concurrency = config.concurrency.unwrap_or_else(num_cpus::get);
    logging::log_config_info(&config, actual_concurrency);
    logging::log_targets(unique_targets, total_targets);

    // Initialize progress reporter
    let mut progress = create_progress_reporter(&output_settings);

    // Check targets
    let start = std::time::Instant::now();
    let checker = SiteChecker::default();
    let mut results = checker
        .check_sites_with_config(targets, &config, progress.as_mut())
        .await?;
    results.sort();

    // Finalize progress reporting
    if let Some(ref prog) = progress {
        prog.finish_and_clear();
    }

    let issues_found = results.iter().filter(|r| r.is_not_ok()).count();
    logging::log_checks_complete(results.len(), issues_found, start.elapsed().as_millis());
    for result in &results {
        logging::log_check_result(
            &result.url,
            result.status_code,
            result.description.as_deref(),
        );
    }

    // Display final results and determine exit code
    let metadata = output::DisplayMetadata {
        total_targets,
        unique_targets,
        total_checked: results.len(),
        issues_found,
    };
    output::display_results(
        &results,
        &output_settings.output_format,
        output_settings.quiet,
        &metadata,
    );

    Ok(if issues_found > 0 { 1 } else { 0 })
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(
    cli_config: &siteup::config::CliConfig,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Parse all URL arguments, rejecting the whole invocation on the first bad one
pub fn parse_targets(urls: &[String]) -> Result<Vec<CheckTarget>, siteup::SiteUpError> {
    urls.iter()
        .map(|url| CheckTarget::parse(url).map_err(Into::into))
        .collect()
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
    pub show_progress: bool,
}

pub fn setup_output_settings(
    cli_config: &siteup::config::CliConfig,
    config: &Config,
) -> OutputSettings {
    let output_format = config
        .output_format
        .clone()
        .unwrap_or_else(|| output_formats::DEFAULT.to_string());

    // Progress bars only make sense for interactive text output
    let show_progress =
        !cli_config.quiet && !cli_config.no_progress && output_format == output_formats::TEXT;

    OutputSettings {
        quiet: cli_config.quiet,
        verbose: cli_config.verbose || config.verbose.unwrap_or(false),
        output_format,
        show_progress,
    }
}

fn create_progress_reporter(output_settings: &OutputSettings) -> Option<ProgressReporter> {
    if output_settings.show_progress {
        Some(ProgressReporter::new(true))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_targets_accepts_valid_urls() {
        let urls = vec![
            "http://www.bing.com/".to_string(),
            "https://example.com".to_string(),
        ];

        let targets = parse_targets(&urls).unwrap();
        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn test_parse_targets_rejects_malformed_url() {
        let urls = vec!["http://ok.com".to_string(), "not a url".to_string()];

        let result = parse_targets(&urls);
        assert!(matches!(result, Err(siteup::SiteUpError::InvalidTarget(_))));
    }

    #[test]
    fn test_output_settings_progress_only_for_text() {
        let cli_config = siteup::config::CliConfig::default();
        let config = Config {
            output_format: Some("json".to_string()),
            ..Default::default()
        };

        let settings = setup_output_settings(&cli_config, &config);
        assert!(!settings.show_progress);

        let text_config = Config::default();
        let settings = setup_output_settings(&cli_config, &text_config);
        assert!(settings.show_progress);
    }

    #[test]
    fn test_output_settings_quiet_disables_progress() {
        let cli_config = siteup::config::CliConfig {
            quiet: true,
            ..Default::default()
        };

        let settings = setup_output_settings(&cli_config, &Config::default());
        assert!(!settings.show_progress);
        assert!(settings.quiet);
    }

    #[test]
    fn test_load_and_merge_config_no_config() {
        let cli_config = siteup::config::CliConfig {
            no_config: true,
            timeout: Some(5),
            ..Default::default()
        };

        let config = load_and_merge_config(&cli_config).unwrap();
        assert_eq!(config.timeout, Some(5));
    }
}
