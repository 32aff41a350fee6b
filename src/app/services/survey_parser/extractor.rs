//! Row-by-row record extraction for survey sheets
//!
//! Walks every data row of the grid, resolving cells through the header
//! index and normalizing each field. Failures never escape a row: a field
//! that does not parse degrades to an empty or default value and raises a
//! [`ValidationIssue`], and extraction continues with the next row.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::header::{DaySchedule, HeaderIndex};
use super::normalizer::{clean_choice_prefix, clean_sibling_note, normalize_date, normalize_phone};
use super::stats::{ExtractResult, ExtractStats};
use crate::app::models::{DropoffEntry, RawGrid, StudentRecord, ValidationIssue, Weekday};
use crate::constants::{DISTRICT_CHAR, FIRST_DATA_ROW, SCHOOL_VEHICLE, fields, reasons};

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());
static TRIP_SLOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([123])\s*하교").unwrap());

/// Extract student records and validation issues from one survey grid
///
/// Rows without a student name are skipped silently; every other row
/// produces exactly one record plus zero or more issues.
pub fn extract(grid: &RawGrid, index: &HeaderIndex) -> ExtractResult {
    let mut records = Vec::new();
    let mut issues = Vec::new();
    let mut stats = ExtractStats::new();

    for row in FIRST_DATA_ROW..=grid.max_row() {
        stats.rows_scanned += 1;
        let cells = grid.row_text(row);

        let name_raw = value_at(&cells, index.name);
        if name_raw.is_empty() {
            stats.rows_skipped += 1;
            debug!("Skipping row {}: no student name", row);
            continue;
        }
        let name = name_raw.trim().to_string();

        let record = extract_row(row, &cells, &name, index, &mut issues);
        records.push(record);

        // District sanity check runs on the record's raw address
        let address = value_at(&cells, index.address).trim();
        if !address.is_empty() && !address.contains(DISTRICT_CHAR) {
            issues.push(ValidationIssue::new(
                row,
                &name,
                fields::ADDRESS,
                address,
                reasons::DISTRICT_MISSING,
            ));
        }

        stats.records_extracted += 1;
    }

    stats.issues_raised = issues.len();
    debug!("{}", stats.summary());

    ExtractResult {
        records,
        issues,
        stats,
    }
}

/// Assemble one record from one named row
fn extract_row(
    row: usize,
    cells: &[String],
    name: &str,
    index: &HeaderIndex,
    issues: &mut Vec<ValidationIssue>,
) -> StudentRecord {
    let number_raw = value_at(cells, index.number);
    let number = parse_roll_number(number_raw);
    if number.is_none() {
        issues.push(ValidationIssue::new(
            row,
            name,
            fields::NUMBER,
            number_raw,
            reasons::NUMBER_PARSE,
        ));
    }

    let birth_raw = value_at(cells, index.birth);
    let (birth_date, birth_err) = normalize_date(birth_raw);
    if let Some(reason) = birth_err {
        issues.push(ValidationIssue::new(
            row,
            name,
            fields::BIRTH,
            birth_raw,
            reason,
        ));
    }

    let mother_phone_raw = value_at(cells, index.mother_phone);
    let (mother_phone, mother_err) = normalize_phone(mother_phone_raw);
    if let Some(reason) = mother_err {
        issues.push(ValidationIssue::new(
            row,
            name,
            fields::MOTHER_PHONE,
            mother_phone_raw,
            reason,
        ));
    }

    let father_phone_raw = value_at(cells, index.father_phone);
    let (father_phone, father_err) = normalize_phone(father_phone_raw);
    if let Some(reason) = father_err {
        issues.push(ValidationIssue::new(
            row,
            name,
            fields::FATHER_PHONE,
            father_phone_raw,
            reason,
        ));
    }

    // The primary parent phone is normalized best-effort; its absence is
    // already covered by the per-parent phone issues
    let (main_parent_phone, _) = normalize_phone(value_at(cells, index.main_parent_phone));

    let boarding_method = clean_choice_prefix(value_at(cells, index.boarding_method));
    let boarding_vehicle = clean_choice_prefix(value_at(cells, index.boarding_vehicle));
    let boarding_location =
        clean_choice_prefix(first_non_empty(cells, &index.boarding_locations).unwrap_or(""));

    let dropoff = std::array::from_fn(|i| extract_dropoff(cells, index.day(Weekday::ALL[i])));

    let grade_text = value_at(cells, index.grade).to_string();
    let class_text = value_at(cells, index.class).to_string();
    let address_raw = value_at(cells, index.address).to_string();

    StudentRecord {
        row,
        name: name.to_string(),
        grade_num: digits_as_number(&grade_text),
        class_num: digits_as_number(&class_text),
        grade_text,
        class_text,
        number,
        birth_date,
        birth_raw: birth_raw.to_string(),
        address: address_raw.trim().to_string(),
        address_raw,
        mother_name: value_at(cells, index.mother_name).trim().to_string(),
        mother_phone,
        father_name: value_at(cells, index.father_name).trim().to_string(),
        father_phone,
        siblings: clean_sibling_note(value_at(cells, index.siblings)),
        boarding_method,
        boarding_vehicle,
        boarding_location,
        main_parent_phone,
        dropoff,
    }
}

/// Resolve one weekday's drop-off answers
///
/// Vehicle and location stay empty unless the method is the school-vehicle
/// literal. The trip-time slot is read from the time text; a missing or
/// empty slot binding falls back to the first non-empty vehicle among the
/// weekday's candidates, and the location falls back from slot-specific
/// candidates to the weekday-wide union.
fn extract_dropoff(cells: &[String], schedule: &DaySchedule) -> DropoffEntry {
    let method = clean_choice_prefix(value_at(cells, schedule.method));
    let time = clean_choice_prefix(value_at(cells, schedule.time));

    if method != SCHOOL_VEHICLE {
        return DropoffEntry {
            method,
            time,
            ..Default::default()
        };
    }

    let slot = parse_trip_slot(&time);
    let mut vehicle_col = slot.and_then(|s| schedule.vehicle_for_slot(s));

    if vehicle_col.is_none_or(|col| cell_at(cells, col).is_empty()) {
        let candidates = schedule.vehicle_candidates();
        vehicle_col = first_non_empty_index(cells, &candidates).or(vehicle_col);
    }

    let vehicle = match vehicle_col {
        Some(col) => clean_choice_prefix(cell_at(cells, col)),
        None => String::new(),
    };

    let slot_locations = slot
        .map(|s| schedule.locations_for_slot(s).to_vec())
        .unwrap_or_default();
    let location_candidates = if slot_locations.is_empty() {
        schedule.location_candidates()
    } else {
        slot_locations
    };
    let location =
        clean_choice_prefix(first_non_empty(cells, &location_candidates).unwrap_or(""));

    DropoffEntry {
        method,
        time,
        vehicle,
        location,
    }
}

/// Cell text at an optional 0-based column index, empty when unlocated
fn value_at<'a>(cells: &'a [String], index: Option<usize>) -> &'a str {
    index.map(|i| cell_at(cells, i)).unwrap_or("")
}

fn cell_at(cells: &[String], index: usize) -> &str {
    cells.get(index).map(String::as_str).unwrap_or("")
}

/// First non-empty cell value among candidate columns
fn first_non_empty<'a>(cells: &'a [String], indices: &[usize]) -> Option<&'a str> {
    first_non_empty_index(cells, indices).map(|i| cell_at(cells, i))
}

/// Index of the first candidate column holding a non-empty value
fn first_non_empty_index(cells: &[String], indices: &[usize]) -> Option<usize> {
    indices
        .iter()
        .copied()
        .find(|&i| !cell_at(cells, i).is_empty())
}

/// First run of decimal digits anywhere in the raw value
fn parse_roll_number(raw: &str) -> Option<u32> {
    DIGIT_RUN
        .find(raw)
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

/// Grade/class number from the digits of the raw text, 0 when none remain
fn digits_as_number(raw: &str) -> u32 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Trip-time slot number ("2하교" in the time text)
fn parse_trip_slot(time_text: &str) -> Option<usize> {
    TRIP_SLOT
        .captures(time_text)
        .and_then(|caps| caps[1].parse().ok())
}
