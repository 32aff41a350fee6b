//! Process command implementation: the complete conversion workflow
//!
//! Loads the survey workbook, infers the column layout, extracts records,
//! enriches addresses when a lookup credential is configured, and writes
//! the records dataset plus the validation log.

use std::fs;
use tracing::{debug, info, warn};

use crate::app::adapters::export::{write_records_json, write_validation_log};
use crate::app::adapters::spreadsheet::load_survey_grid;
use crate::app::services::address_enrichment::{AddressEnricher, JusoClient, apply_rule_based};
use crate::app::services::survey_parser::{HeaderIndex, extract};
use crate::cli::args::ProcessArgs;
use crate::config::Config;
use crate::constants::{RECORDS_FILE, VALIDATION_LOG_FILE};
use crate::{Error, Result};

use super::shared::{
    print_enrichment_summary, print_extract_summary, print_issue_table, setup_logging,
};

/// Process command runner
pub async fn run_process(args: ProcessArgs) -> Result<()> {
    setup_logging(args.verbose, args.quiet);

    info!("Starting survey processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = Config::resolve(
        args.api_key.clone(),
        args.timeout_secs,
        args.cache_capacity,
        args.output_dir.clone(),
    )?;

    // Load and extract
    let grid = load_survey_grid(&args.input)?;
    let index = HeaderIndex::locate(&grid.header_row());
    let mut result = extract(&grid, &index);

    if result.records.is_empty() {
        return Err(Error::no_student_records(
            args.input.display().to_string(),
            "no data rows carry a student name",
        ));
    }
    info!("{}", result.stats.summary());

    // Enrich addresses
    let enrichment = if config.lookup.is_enabled() {
        let api_key = config.lookup.api_key.clone().unwrap_or_default();
        let client = JusoClient::new(api_key, config.lookup.timeout_secs)?;
        let mut enricher = AddressEnricher::new(client, config.lookup.cache_capacity);
        Some(enricher.enrich(&mut result.records).await)
    } else {
        warn!("No lookup credential configured; applying rule-based address normalization only");
        apply_rule_based(&mut result.records);
        None
    };

    // Write outputs
    fs::create_dir_all(&config.output_dir).map_err(|e| {
        Error::io(
            format!(
                "Failed to create output directory {}",
                config.output_dir.display()
            ),
            e,
        )
    })?;

    let records_path = config.output_dir.join(RECORDS_FILE);
    let log_path = config.output_dir.join(VALIDATION_LOG_FILE);
    write_records_json(&records_path, &result.records)?;
    write_validation_log(&log_path, &result.issues)?;

    // Report
    print_extract_summary(&result.stats, args.quiet);
    if let Some(stats) = &enrichment {
        print_enrichment_summary(stats, args.quiet);
    }
    print_issue_table(&result.issues, args.quiet);
    if !args.quiet {
        println!(
            "Outputs written to {} and {}",
            records_path.display(),
            log_path.display()
        );
    }

    Ok(())
}
