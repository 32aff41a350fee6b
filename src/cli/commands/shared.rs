//! Shared helpers for CLI commands: logging setup and result reporting

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::app::models::ValidationIssue;
use crate::app::services::address_enrichment::EnrichmentStats;
use crate::app::services::survey_parser::ExtractStats;

/// Initialize tracing output for a command run
///
/// Verbose enables debug-level logs; quiet drops everything below error.
/// RUST_LOG still overrides when set.
pub fn setup_logging(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("survey_processor={}", default_level)));

    // A second init (e.g. in tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Print the extraction summary
pub fn print_extract_summary(stats: &ExtractStats, quiet: bool) {
    if quiet {
        return;
    }

    println!("{}", "Extraction".bold());
    println!("  students: {}", stats.records_extracted.to_string().green());
    println!("  rows skipped (no name): {}", stats.rows_skipped);
    if stats.issues_raised > 0 {
        println!(
            "  validation issues: {}",
            stats.issues_raised.to_string().yellow()
        );
    } else {
        println!("  validation issues: {}", "0".green());
    }
}

/// Print the address enrichment summary
pub fn print_enrichment_summary(stats: &EnrichmentStats, quiet: bool) {
    if quiet {
        return;
    }

    println!("{}", "Address enrichment".bold());
    println!("  resolved: {}", stats.resolved.to_string().green());
    if stats.failed > 0 {
        println!("  failed: {}", stats.failed.to_string().yellow());
        for issue in &stats.issues {
            println!("    {} — {} ({})", issue.name, issue.address, issue.issue);
        }
    } else {
        println!("  failed: {}", "0".green());
    }
    println!("  cache hits: {}", stats.cache_hits);
}

/// Print validation issues as a flat table
pub fn print_issue_table(issues: &[ValidationIssue], quiet: bool) {
    if quiet || issues.is_empty() {
        return;
    }

    println!("{}", "Validation issues".bold());
    println!("  {:<5} {:<10} {:<12} {:<20} issue", "row", "name", "field", "value");
    for issue in issues {
        println!(
            "  {:<5} {:<10} {:<12} {:<20} {}",
            issue.row,
            issue.name,
            issue.field,
            truncate(&issue.value, 20),
            issue.issue.as_str().yellow()
        );
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        let cut: String = value.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
