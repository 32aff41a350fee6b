//! Survey Processor Library
//!
//! A Rust library for converting school commute survey spreadsheets with
//! loosely labeled columns into normalized per-student records.
//!
//! This library provides tools for:
//! - Locating semantically relevant columns in drifting survey header rows
//! - Partitioning per-weekday drop-off question segments by anchor column
//! - Normalizing dates, phone numbers, and multiple-choice survey values
//! - Extracting one structured record per student row with per-field
//!   degradation instead of row aborts
//! - Enriching raw addresses with canonical road-name lookups
//! - Exporting a flat validation log for external reporting

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod address_enrichment;
        pub mod survey_parser;
    }
    pub mod adapters {
        pub mod export;
        pub mod spreadsheet;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{RawGrid, StudentRecord, ValidationIssue, Weekday};
pub use config::Config;

/// Result type alias for the survey processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for survey processing operations
///
/// Only structural failures surface here: an unreadable workbook, a survey
/// without the required sheet, or a sheet that yields zero student records.
/// Field- and row-level problems degrade to [`ValidationIssue`] data instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Workbook could not be opened or read
    #[error("Workbook error in file '{file}': {message}")]
    Workbook { file: String, message: String },

    /// Required survey sheet is missing from the workbook
    #[error("Required sheet '{sheet}' not found in survey workbook")]
    SheetNotFound { sheet: String },

    /// Survey sheet produced no student records
    #[error("No student records extracted from '{file}': {message}")]
    NoStudentRecords { file: String, message: String },

    /// Validation log export error
    #[error("Validation log export error: {message}")]
    LogExport {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Record serialization error
    #[error("Record serialization error: {message}")]
    RecordExport {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Address lookup client construction error
    #[error("Address lookup error: {message}")]
    AddressLookup { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a workbook error
    pub fn workbook(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Workbook {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a sheet-not-found error
    pub fn sheet_not_found(sheet: impl Into<String>) -> Self {
        Self::SheetNotFound {
            sheet: sheet.into(),
        }
    }

    /// Create a no-records error
    pub fn no_student_records(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NoStudentRecords {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a validation log export error
    pub fn log_export(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::LogExport {
            message: message.into(),
            source,
        }
    }

    /// Create a record serialization error
    pub fn record_export(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::RecordExport {
            message: message.into(),
            source,
        }
    }

    /// Create an address lookup error
    pub fn address_lookup(message: impl Into<String>) -> Self {
        Self::AddressLookup {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::LogExport {
            message: "CSV writing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::RecordExport {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
