//! Rule-based address normalization fallback
//!
//! Applied whenever no canonical lookup result exists: the lookup service
//! is not configured, errored, or returned nothing. The rules cover the
//! shorthand parents actually write for this school's catchment area —
//! the metropolitan-city prefix is restored and district-only addresses
//! gain it back.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static DISTRICT_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[가-힣]+구\b").unwrap());

/// Normalize a raw address without a lookup service
pub fn normalize_fallback(addr: &str) -> String {
    let trimmed = addr.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let collapsed = WHITESPACE.replace_all(trimmed, " ").into_owned();
    let expanded = collapsed
        .replace("부산시 ", "부산광역시 ")
        .replace("부산시", "부산광역시");

    // Bare city token without the 시 suffix ("부산 해운대구 ...")
    let expanded = match expanded.strip_prefix("부산 ") {
        Some(rest) => format!("부산광역시 {}", rest),
        None => expanded,
    };

    if DISTRICT_ONLY.is_match(&expanded) {
        format!("부산광역시 {}", expanded)
    } else {
        expanded
    }
}
