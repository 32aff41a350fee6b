//! Survey sheet parser for school commute survey workbooks
//!
//! This module turns one raw survey grid into normalized student records.
//! Survey headers drift in wording, ordering, and repetition from year to
//! year, so the parser infers column meaning instead of assuming positions.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`header`] - Header-driven column inference and weekday segmentation
//! - [`normalizer`] - Per-field value normalization (dates, phones, labels)
//! - [`extractor`] - Row-by-row record assembly with degraded failure modes
//! - [`stats`] - Extraction statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use survey_processor::app::models::RawGrid;
//! use survey_processor::app::services::survey_parser::{HeaderIndex, extract};
//!
//! # fn example(grid: RawGrid) {
//! let index = HeaderIndex::locate(&grid.header_row());
//! let result = extract(&grid, &index);
//!
//! println!(
//!     "Extracted {} records with {} issues",
//!     result.records.len(),
//!     result.issues.len()
//! );
//! # }
//! ```

pub mod extractor;
pub mod header;
pub mod normalizer;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use extractor::extract;
pub use header::{DaySchedule, HeaderIndex};
pub use stats::{ExtractResult, ExtractStats};
