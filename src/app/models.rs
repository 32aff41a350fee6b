//! Data models for survey processing
//!
//! This module contains the core data structures for representing the raw
//! survey grid, the normalized per-student records, and the validation
//! issues collected while extracting them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::WEEKDAY_LABELS;

// =============================================================================
// Raw Grid
// =============================================================================

/// One spreadsheet cell value
///
/// The spreadsheet adapter maps every cell into one of these variants;
/// downstream code only ever consumes the textual rendering, so numeric and
/// date cells render the way the survey tool displays them (integers without
/// a trailing fraction, dates in ISO form).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty or blank cell
    #[default]
    Empty,

    /// Text cell
    Text(String),

    /// Numeric cell
    Number(f64),

    /// Date cell
    Date(NaiveDate),
}

impl CellValue {
    /// Check whether the cell carries no usable value
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Render the cell as text
    ///
    /// Whole numbers render without a fractional part ("4", not "4.0") to
    /// match how grade and roll-number cells appear in the survey export.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }
}

/// Immutable 2-D grid of survey cells with 1-indexed rows and columns
///
/// Row 1 is the header row; data rows start at row 2. Out-of-bounds reads
/// yield [`CellValue::Empty`] rather than panicking, matching the degraded
/// semantics the extractor requires.
#[derive(Debug, Clone, Default)]
pub struct RawGrid {
    rows: Vec<Vec<CellValue>>,
    max_column: usize,
}

impl RawGrid {
    /// Build a grid from row-major cell values
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let max_column = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        Self { rows, max_column }
    }

    /// Number of rows, including the header row
    pub fn max_row(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the widest row
    pub fn max_column(&self) -> usize {
        self.max_column
    }

    /// Read a cell by 1-indexed row and column
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        if row == 0 || column == 0 {
            return &EMPTY;
        }
        self.rows
            .get(row - 1)
            .and_then(|r| r.get(column - 1))
            .unwrap_or(&EMPTY)
    }

    /// Render the header row (row 1) as strings, one per column
    pub fn header_row(&self) -> Vec<String> {
        (1..=self.max_column)
            .map(|c| self.cell(1, c).to_text())
            .collect()
    }

    /// Render a data row as strings, one per column (0-indexed by column)
    pub fn row_text(&self, row: usize) -> Vec<String> {
        (1..=self.max_column)
            .map(|c| self.cell(row, c).to_text())
            .collect()
    }
}

// =============================================================================
// Weekdays
// =============================================================================

/// School weekdays covered by the drop-off survey, Monday through Friday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in calendar order
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Zero-based index into per-weekday arrays
    pub fn index(self) -> usize {
        self as usize
    }

    /// Korean label as it appears in survey headers
    pub fn label(self) -> &'static str {
        WEEKDAY_LABELS[self.index()]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Student Record
// =============================================================================

/// One weekday's drop-off answers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DropoffEntry {
    /// How the student leaves school (cleaned choice label)
    pub method: String,

    /// Selected dismissal time text (cleaned choice label)
    pub time: String,

    /// Assigned vehicle, empty unless the method is the school vehicle
    pub vehicle: String,

    /// Drop-off location, empty unless the method is the school vehicle
    pub location: String,
}

/// One survey row normalized into a student record
///
/// Created once by the record extractor and never mutated afterwards except
/// by address enrichment, which may overwrite `address` with a canonical
/// road-name value. Every field has defined empty-value semantics — always
/// an empty string, `None`, or a default sub-record, never absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    /// 1-indexed source row in the survey sheet
    pub row: usize,

    /// Student name (non-empty; rows without a name produce no record)
    pub name: String,

    /// Raw grade text as answered
    pub grade_text: String,

    /// Raw class text as answered
    pub class_text: String,

    /// Grade number parsed from the digits of `grade_text`, 0 when absent
    pub grade_num: u32,

    /// Class number parsed from the digits of `class_text`, 0 when absent
    pub class_num: u32,

    /// Roll number, `None` when unparsable (flagged but not excluding)
    pub number: Option<u32>,

    /// Birth date as answered
    pub birth_raw: String,

    /// Normalized birth date, `None` when the raw value did not parse
    pub birth_date: Option<NaiveDate>,

    /// Address as answered
    pub address_raw: String,

    /// Best-known address: canonical road address when lookup succeeded,
    /// otherwise the rule-normalized raw value
    pub address: String,

    /// Mother's name
    pub mother_name: String,

    /// Mother's phone, canonicalized
    pub mother_phone: String,

    /// Father's name
    pub father_name: String,

    /// Father's phone, canonicalized
    pub father_phone: String,

    /// Sibling note with placeholder-for-"none" phrases removed
    pub siblings: String,

    /// Morning boarding method (cleaned choice label)
    pub boarding_method: String,

    /// Morning boarding vehicle (cleaned choice label)
    pub boarding_vehicle: String,

    /// Morning boarding location, first non-empty candidate answer
    pub boarding_location: String,

    /// Primary parent phone, canonicalized
    pub main_parent_phone: String,

    /// Per-weekday drop-off answers, Monday through Friday
    pub dropoff: [DropoffEntry; 5],
}

impl StudentRecord {
    /// Drop-off answers for one weekday
    pub fn dropoff(&self, day: Weekday) -> &DropoffEntry {
        &self.dropoff[day.index()]
    }

    /// Derive the school-issued student id
    ///
    /// `{grade}{class}{number:02}` when grade and class are known, else the
    /// zero-padded roll number alone; empty when there is no roll number.
    pub fn student_id(&self) -> String {
        match self.number {
            None | Some(0) => String::new(),
            Some(number) => {
                if self.grade_num > 0 && self.class_num > 0 {
                    format!("{}{}{:02}", self.grade_num, self.class_num, number)
                } else {
                    format!("{:02}", number)
                }
            }
        }
    }

    /// Check whether the student rides the school vehicle in the morning
    pub fn boards_school_vehicle(&self) -> bool {
        self.boarding_method == crate::constants::SCHOOL_VEHICLE
    }
}

// =============================================================================
// Validation Issues
// =============================================================================

/// One malformed-value finding, informational only
///
/// A record with issues is still included in the output; only a missing
/// student name excludes a row, and that exclusion emits no issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// 1-indexed source row in the survey sheet
    pub row: usize,

    /// Student name on the offending row
    pub name: String,

    /// Logical field name
    pub field: String,

    /// Offending raw value
    pub value: String,

    /// Human-readable reason
    pub issue: String,
}

impl ValidationIssue {
    /// Create a new validation issue
    pub fn new(
        row: usize,
        name: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
        issue: impl Into<String>,
    ) -> Self {
        Self {
            row,
            name: name.into(),
            field: field.into(),
            value: value.into(),
            issue: issue.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> StudentRecord {
        StudentRecord {
            row: 2,
            name: "김하늘".to_string(),
            grade_text: "4학년".to_string(),
            class_text: "4반".to_string(),
            grade_num: 4,
            class_num: 4,
            number: Some(7),
            birth_raw: "150119".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2015, 1, 19),
            address_raw: "부산 해운대구 센텀중앙로 55".to_string(),
            address: "부산광역시 해운대구 센텀중앙로 55".to_string(),
            mother_name: String::new(),
            mother_phone: String::new(),
            father_name: String::new(),
            father_phone: String::new(),
            siblings: String::new(),
            boarding_method: "학교차량이용".to_string(),
            boarding_vehicle: "1호차".to_string(),
            boarding_location: "정문".to_string(),
            main_parent_phone: String::new(),
            dropoff: Default::default(),
        }
    }

    mod grid_tests {
        use super::*;

        #[test]
        fn test_grid_indexing_is_one_based() {
            let grid = RawGrid::from_rows(vec![
                vec!["이름".into(), "학년".into()],
                vec!["김하늘".into(), CellValue::Number(4.0)],
            ]);

            assert_eq!(grid.max_row(), 2);
            assert_eq!(grid.max_column(), 2);
            assert_eq!(grid.cell(1, 1).to_text(), "이름");
            assert_eq!(grid.cell(2, 2).to_text(), "4");
        }

        #[test]
        fn test_out_of_bounds_reads_are_empty() {
            let grid = RawGrid::from_rows(vec![vec!["a".into()]]);

            assert!(grid.cell(0, 1).is_empty());
            assert!(grid.cell(1, 0).is_empty());
            assert!(grid.cell(5, 5).is_empty());
        }

        #[test]
        fn test_ragged_rows_pad_with_empty() {
            let grid = RawGrid::from_rows(vec![
                vec!["a".into(), "b".into(), "c".into()],
                vec!["d".into()],
            ]);

            assert_eq!(grid.max_column(), 3);
            assert_eq!(grid.row_text(2), vec!["d", "", ""]);
        }

        #[test]
        fn test_number_rendering() {
            assert_eq!(CellValue::Number(4.0).to_text(), "4");
            assert_eq!(CellValue::Number(4.5).to_text(), "4.5");
            assert_eq!(CellValue::Empty.to_text(), "");
        }

        #[test]
        fn test_date_rendering() {
            let cell = CellValue::Date(NaiveDate::from_ymd_opt(2015, 1, 19).unwrap());
            assert_eq!(cell.to_text(), "2015-01-19");
        }
    }

    mod weekday_tests {
        use super::*;

        #[test]
        fn test_weekday_labels_in_order() {
            let labels: Vec<&str> = Weekday::ALL.iter().map(|d| d.label()).collect();
            assert_eq!(labels, vec!["월요일", "화요일", "수요일", "목요일", "금요일"]);
        }

        #[test]
        fn test_weekday_index_matches_array_position() {
            for (i, day) in Weekday::ALL.iter().enumerate() {
                assert_eq!(day.index(), i);
            }
        }
    }

    mod record_tests {
        use super::*;

        #[test]
        fn test_student_id_with_grade_and_class() {
            let record = sample_record();
            assert_eq!(record.student_id(), "4407");
        }

        #[test]
        fn test_student_id_without_grade() {
            let mut record = sample_record();
            record.grade_num = 0;
            assert_eq!(record.student_id(), "07");
        }

        #[test]
        fn test_student_id_without_number() {
            let mut record = sample_record();
            record.number = None;
            assert_eq!(record.student_id(), "");
        }

        #[test]
        fn test_boards_school_vehicle() {
            let mut record = sample_record();
            assert!(record.boards_school_vehicle());

            record.boarding_method = "도보".to_string();
            assert!(!record.boards_school_vehicle());
        }

        #[test]
        fn test_dropoff_accessor_uses_day_index() {
            let mut record = sample_record();
            record.dropoff[Weekday::Tuesday.index()].vehicle = "3호차".to_string();

            assert_eq!(record.dropoff(Weekday::Tuesday).vehicle, "3호차");
            assert_eq!(record.dropoff(Weekday::Monday).vehicle, "");
        }
    }
}
