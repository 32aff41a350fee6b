//! Check command implementation: validate a survey without writing outputs
//!
//! Useful before a real run: extracts records, reports every validation
//! issue, and fails on the same structural problems the process command
//! would fail on.

use tracing::{debug, info};

use crate::app::adapters::spreadsheet::load_survey_grid;
use crate::app::services::survey_parser::{HeaderIndex, extract};
use crate::cli::args::CheckArgs;
use crate::{Error, Result};

use super::shared::{print_extract_summary, print_issue_table, setup_logging};

/// Check command runner
pub async fn run_check(args: CheckArgs) -> Result<()> {
    setup_logging(args.verbose, args.quiet);

    info!("Checking survey workbook: {}", args.input.display());
    args.validate()?;

    let grid = load_survey_grid(&args.input)?;
    let index = HeaderIndex::locate(&grid.header_row());
    debug!("Header row has {} columns", grid.max_column());

    let result = extract(&grid, &index);
    if result.records.is_empty() {
        return Err(Error::no_student_records(
            args.input.display().to_string(),
            "no data rows carry a student name",
        ));
    }

    print_extract_summary(&result.stats, args.quiet);
    print_issue_table(&result.issues, args.quiet);

    Ok(())
}
