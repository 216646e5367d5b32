// Result presentation: text (grouped), json, minimal

use serde_json::json;

use crate::checker::CheckResult;
use crate::core::constants::{error_messages, output_formats};
use crate::ui::color::{Colors, colorize};

/// Summary numbers shared by all output formats
#[derive(Debug, Clone)]
pub struct DisplayMetadata {
    pub total_targets: usize,
    pub unique_targets: usize,
    pub total_checked: usize,
    pub issues_found: usize,
}

pub fn display_results(
    results: &[CheckResult],
    output_format: &str,
    quiet: bool,
    metadata: &DisplayMetadata,
) {
    match output_format {
        output_formats::MINIMAL => display_minimal_output(results),
        output_formats::JSON => display_json_output(results, metadata),
        _ => display_text_output(results, quiet),
    }
}

/// Display results in minimal format (no colors, emojis, or grouping)
fn display_minimal_output(results: &[CheckResult]) {
    for result in results {
        if let Some(status_code) = result.status_code {
            println!("{} {} {}", result.status, status_code, result.url);
        } else if let Some(ref description) = result.description {
            println!("{} {} {}", result.status, result.url, description);
        } else {
            println!("{} {}", result.status, result.url);
        }
    }
}

/// Display results in JSON format
fn display_json_output(results: &[CheckResult], metadata: &DisplayMetadata) {
    let success_rate = if metadata.total_checked > 0 {
        ((metadata.total_checked - metadata.issues_found) as f64
            / metadata.total_checked as f64)
            * 100.0
    } else {
        100.0
    };

    let document = json!({
        "summary": {
            "targets": metadata.total_targets,
            "unique": metadata.unique_targets,
            "checked": metadata.total_checked,
            "failed": metadata.issues_found,
            "success_rate": format!("{success_rate:.1}"),
            "timestamp": chrono::Utc::now()
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
        },
        "status": if metadata.issues_found == 0 { "success" } else { "failure" },
        "results": results,
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&document).unwrap_or_default()
    );
}

/// Display results in text format with colors, emojis, and grouping
fn display_text_output(results: &[CheckResult], quiet: bool) {
    if quiet {
        return;
    }

    let issues: Vec<&CheckResult> = results.iter().filter(|r| r.is_not_ok()).collect();

    if issues.is_empty() {
        println!(
            "{} {}!",
            colorize("✅", Colors::BRIGHT_GREEN),
            colorize(
                &format!("{}{}{}", Colors::BOLD, "No issues found", Colors::RESET),
                Colors::BRIGHT_GREEN
            )
        );
        return;
    }

    println!(
        "{} {}",
        colorize("⚠️", Colors::BRIGHT_RED),
        colorize(
            &format!("{}{}{}", Colors::BOLD, "Issues", Colors::RESET),
            Colors::BRIGHT_RED
        )
    );

    let grouped = GroupedIssues::from_results(&issues);

    display_issue_group(
        &grouped.network_errors,
        "🔌",
        "Network/Connection Errors",
        Colors::BRIGHT_YELLOW,
    );
    display_issue_group(
        &grouped.redirects,
        "🔄",
        "Redirects (3xx)",
        Colors::BRIGHT_YELLOW,
    );
    display_issue_group(
        &grouped.client_errors,
        "🚫",
        "Client Errors (4xx)",
        Colors::BRIGHT_RED,
    );
    display_issue_group(
        &grouped.server_errors,
        "💥",
        "Server Errors (5xx)",
        Colors::BRIGHT_MAGENTA,
    );
    display_issue_group(&grouped.other, "❓", "Other Issues", Colors::WHITE);
}

/// Failed results bucketed by failure class
#[derive(Debug, Default)]
pub struct GroupedIssues<'a> {
    pub network_errors: Vec<&'a CheckResult>,
    pub redirects: Vec<&'a CheckResult>,
    pub client_errors: Vec<&'a CheckResult>,
    pub server_errors: Vec<&'a CheckResult>,
    pub other: Vec<&'a CheckResult>,
}

impl<'a> GroupedIssues<'a> {
    pub fn from_results(issues: &[&'a CheckResult]) -> Self {
        let mut grouped = Self::default();

        for result in issues {
            match result.status_code {
                Some(300..=399) => grouped.redirects.push(result),
                Some(400..=499) => grouped.client_errors.push(result),
                Some(500..=599) => grouped.server_errors.push(result),
                Some(_) => grouped.other.push(result),
                None => grouped.network_errors.push(result),
            }
        }

        grouped
    }
}

fn display_issue_group(results: &[&CheckResult], emoji: &str, heading: &str, color: &str) {
    if results.is_empty() {
        return;
    }

    println!(
        "\n   {} {}:",
        colorize(emoji, color),
        colorize(
            &format!("{}{}{}", Colors::BOLD, heading, Colors::RESET),
            color
        )
    );
    for (i, result) in results.iter().enumerate() {
        let detail = match (result.status_code, result.description.as_deref()) {
            (_, Some(description)) => description.to_string(),
            (Some(status_code), None) => status_code.to_string(),
            (None, None) => error_messages::UNKNOWN_ERROR.to_string(),
        };
        println!(
            "      {}. {} {}",
            colorize(&format!("{}", i + 1), Colors::DIM),
            colorize(&detail, color),
            colorize(&result.url, Colors::CYAN)
        );
    }
}
