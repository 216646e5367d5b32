use crate::config::Config;
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config, actual_concurrency: usize) {
    let timeout = config.timeout.unwrap_or(10);
    let retry_attempts = config.retry_attempts.unwrap_or(0);
    let retry_delay = config.retry_delay.unwrap_or(1000);
    let use_head_requests = config.use_head_requests.unwrap_or(false);
    let skip_ssl_verification = config.skip_ssl_verification.unwrap_or(false);

    info!("Configuration: concurrency={actual_concurrency}, timeout={timeout}s");
    info!("Retry: attempts={retry_attempts}, initial_delay={retry_delay}ms");
    info!("HTTP: head_requests={use_head_requests}, skip_ssl={skip_ssl_verification}");
}

/// Log target information
pub fn log_targets(unique_targets: usize, total_given: usize) {
    info!("Checking {unique_targets} unique target(s) (from {total_given} given)");
}

/// Log check completion
pub fn log_checks_complete(target_count: usize, issues: usize, duration_ms: u128) {
    if issues == 0 {
        info!(
            "✅ Checks complete: {}/{} sites reachable ({}ms)",
            target_count - issues,
            target_count,
            duration_ms
        );
    } else {
        warn!(
            "❌ Checks complete: {}/{} sites reachable, {} issues found ({}ms)",
            target_count - issues,
            target_count,
            issues,
            duration_ms
        );
    }
}

/// Log individual check results for debugging
pub fn log_check_result(url: &str, status: Option<u16>, description: Option<&str>) {
    match (status, description) {
        (Some(status), None) => debug!("✓ {url} -> {status}"),
        (Some(status), Some(desc)) => debug!("✗ {url} -> {status} ({desc})"),
        (None, Some(desc)) => debug!("✗ {url} -> {desc}"),
        (None, None) => debug!("? {url} -> unknown"),
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
