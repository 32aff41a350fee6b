//! Output adapters for validation logs and normalized records
//!
//! The validation log is exposed as a flat CSV with columns
//! {row, name, field, value, issue} in discovery order; the normalized
//! records serialize to JSON for the downstream report builders.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

use crate::app::models::{StudentRecord, ValidationIssue};
use crate::{Error, Result};

/// Write the validation log as a flat CSV table
pub fn write_validation_log(path: &Path, issues: &[ValidationIssue]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        Error::log_export(
            format!("Failed to create validation log at {}", path.display()),
            Some(e),
        )
    })?;

    writer.write_record(["row", "name", "field", "value", "issue"])?;
    for issue in issues {
        writer.write_record([
            issue.row.to_string().as_str(),
            issue.name.as_str(),
            issue.field.as_str(),
            issue.value.as_str(),
            issue.issue.as_str(),
        ])?;
    }
    writer.flush()?;

    info!(
        "Wrote validation log: {} ({} issues)",
        path.display(),
        issues.len()
    );
    Ok(())
}

/// Write the normalized records dataset as JSON
pub fn write_records_json(path: &Path, records: &[StudentRecord]) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
    serde_json::to_writer_pretty(BufWriter::new(file), records)?;

    info!(
        "Wrote records dataset: {} ({} records)",
        path.display(),
        records.len()
    );
    Ok(())
}
