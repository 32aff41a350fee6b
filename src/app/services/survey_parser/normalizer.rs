//! Field normalization for raw survey answers
//!
//! Pure functions that turn one raw cell value into a canonical date, a
//! canonical phone string, or a cleaned choice label. Each returns a value
//! plus an optional error reason; none of them ever fails past the field.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{SIBLING_NONE_PHRASES, SPELLING_FIX, reasons};

static CHOICE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\s*[.)]\s*").unwrap());
static KOREAN_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d{2,4})\D+(\d{1,2})\D+(\d{1,2})\D*$").unwrap());
static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").unwrap());
static SIBLING_FILLER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s.,]+").unwrap());
static SIBLING_REPEATED_NONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(없음)+$|^(없습니다)+$").unwrap());

/// Delimiter-specific formats tried after the digit-run interpretations
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d"];

/// Strip a leading multiple-choice ordinal prefix and fix known typos
///
/// Survey exports prefix selected options with their choice number
/// ("1. 학교차량이용", "2) 도보"); the prefix carries no meaning.
pub fn clean_choice_prefix(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let trimmed = raw.trim();
    let stripped = CHOICE_PREFIX.replace(trimmed, "");
    stripped
        .replace(SPELLING_FIX.0, SPELLING_FIX.1)
        .trim()
        .to_string()
}

/// Normalize a raw birth-date answer into a calendar date
///
/// Accepted forms, in priority order: a year/month/day pattern with
/// arbitrary non-digit separators ("15년1월19일", two-digit years are
/// 2000-based), exactly six digits as YYMMDD, exactly eight digits as
/// YYYYMMDD, then the `-`/`.`/`/` delimited formats. Returns the parsed
/// date or an error reason; never panics on impossible dates.
pub fn normalize_date(raw: &str) -> (Option<NaiveDate>, Option<&'static str>) {
    if raw.is_empty() {
        return (None, Some(reasons::BIRTH_MISSING));
    }

    let s = raw.trim();

    if let Some(caps) = KOREAN_DATE.captures(s) {
        let year: i32 = caps[1].parse().unwrap_or(0);
        let month: u32 = caps[2].parse().unwrap_or(0);
        let day: u32 = caps[3].parse().unwrap_or(0);
        let year = if year < 100 { year + 2000 } else { year };
        return match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => (Some(date), None),
            None => (None, Some(reasons::BIRTH_PARSE)),
        };
    }

    let digits = NON_DIGITS.replace_all(s, "");
    if digits.len() == 6 || digits.len() == 8 {
        let (year_digits, rest) = digits.split_at(digits.len() - 4);
        let year: i32 = year_digits.parse().unwrap_or(0);
        let year = if digits.len() == 6 { year + 2000 } else { year };
        let month: u32 = rest[..2].parse().unwrap_or(0);
        let day: u32 = rest[2..].parse().unwrap_or(0);
        return match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => (Some(date), None),
            None => (None, Some(reasons::BIRTH_PARSE)),
        };
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return (Some(date), None);
        }
    }

    (None, Some(reasons::BIRTH_FORMAT))
}

/// Canonicalize a raw phone answer into hyphenated form
///
/// Mobile numbers (010) hyphenate 3-4-4 or 3-3-4 by length; Seoul landlines
/// (02) hyphenate 2-4-4 or 2-3-4; any other 10/11-digit number falls back to
/// the generic grouping. Unrecognized values come back unchanged with a
/// reason so the caller can flag them.
pub fn normalize_phone(raw: &str) -> (String, Option<&'static str>) {
    if raw.is_empty() {
        return (String::new(), Some(reasons::PHONE_MISSING));
    }

    let s = raw.trim();
    let nums = NON_DIGITS.replace_all(s, "");

    if nums.starts_with("010") {
        return match nums.len() {
            11 => (hyphenate(&nums, 3, 4), None),
            10 => (hyphenate(&nums, 3, 3), None),
            _ => (s.to_string(), Some(reasons::PHONE_LENGTH)),
        };
    }

    if nums.starts_with("02") {
        match nums.len() {
            10 => return (hyphenate(&nums, 2, 4), None),
            9 => return (hyphenate(&nums, 2, 3), None),
            _ => {}
        }
    }

    match nums.len() {
        11 => (hyphenate(&nums, 3, 4), None),
        10 => (hyphenate(&nums, 3, 3), None),
        _ => (s.to_string(), Some(reasons::PHONE_FORMAT)),
    }
}

fn hyphenate(digits: &str, prefix: usize, middle: usize) -> String {
    format!(
        "{}-{}-{}",
        &digits[..prefix],
        &digits[prefix..prefix + middle],
        &digits[prefix + middle..]
    )
}

/// Clean a sibling-note answer of placeholder-for-"none" phrases
///
/// "없음", "해당없음" and friends (with any filler punctuation, possibly
/// repeated) normalize to an empty note; real notes pass through trimmed.
pub fn clean_sibling_note(raw: &str) -> String {
    let s = raw.trim();
    if s.is_empty() {
        return String::new();
    }

    let compact = SIBLING_FILLER.replace_all(s, "");
    if SIBLING_NONE_PHRASES.contains(&compact.as_ref())
        || SIBLING_REPEATED_NONE.is_match(&compact)
    {
        return String::new();
    }

    s.to_string()
}
