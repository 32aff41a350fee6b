//! Extraction statistics and result structures for survey processing
//!
//! This module provides types for tracking extraction outcomes and
//! organizing extracted records for downstream processing.

use crate::app::models::{StudentRecord, ValidationIssue};

/// Extraction result with records, issues, and basic statistics
#[derive(Debug, Clone, Default)]
pub struct ExtractResult {
    /// Successfully extracted student records, in row order
    pub records: Vec<StudentRecord>,

    /// Validation issues in discovery order (row-major, fields in
    /// extraction order within a row)
    pub issues: Vec<ValidationIssue>,

    /// Basic extraction statistics
    pub stats: ExtractStats,
}

/// Simple extraction statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ExtractStats {
    /// Total number of data rows scanned
    pub rows_scanned: usize,

    /// Number of student records extracted
    pub records_extracted: usize,

    /// Number of rows skipped for a missing student name
    pub rows_skipped: usize,

    /// Number of validation issues raised
    pub issues_raised: usize,
}

impl ExtractStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate extraction rate as a percentage of scanned rows
    pub fn extraction_rate(&self) -> f64 {
        if self.rows_scanned == 0 {
            0.0
        } else {
            (self.records_extracted as f64 / self.rows_scanned as f64) * 100.0
        }
    }

    /// Summary line for logs and CLI reporting
    pub fn summary(&self) -> String {
        format!(
            "Extraction summary: {} rows -> {} records ({:.1}%) | skipped: {} | issues: {}",
            self.rows_scanned,
            self.records_extracted,
            self.extraction_rate(),
            self.rows_skipped,
            self.issues_raised
        )
    }
}
