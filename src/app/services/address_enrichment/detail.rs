//! Building/unit detail-token extraction and canonical-address merge
//!
//! Canonical road addresses drop the dong/ho/floor detail parents write in
//! free text. This module recovers those tokens from the raw answer with an
//! ordered pattern list and appends the ones the canonical address lacks.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Detail patterns in extraction order: combined dong-ho first so the
/// containment filter can drop its parts
static DETAIL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\d{1,4}동\s*\d{1,5}호",  // 101동2604호
        r"\d{1,4}동",              // 101동
        r"\d{1,5}호",              // 2604호
        r"\d{1,2}층",              // 3층
        r"\bB\d{1,2}\b",           // B1
        r"\b[A-Za-z]-\d{3,5}\b",   // A-3501
        r"\b\d{2,4}-\d{3,5}\b",    // 102-5909 (abbreviated dong-ho)
    ]
    .iter()
    .map(|p| {
        RegexBuilder::new(p)
            .case_insensitive(true)
            .build()
            .unwrap()
    })
    .collect()
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Extract building/unit detail tokens from a raw address
///
/// Tokens are whitespace-stripped and uppercased; a dong or ho token
/// already covered by a longer combined token is dropped.
pub fn extract_detail_tokens(raw: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for pattern in DETAIL_PATTERNS.iter() {
        for m in pattern.find_iter(raw) {
            let token = WHITESPACE.replace_all(m.as_str(), "").to_uppercase();
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
    }

    tokens
        .iter()
        .filter(|t| {
            let covered = tokens.iter().any(|other| {
                *t != other && other.contains(t.as_str()) && (t.ends_with('동') || t.ends_with('호'))
            });
            !covered
        })
        .cloned()
        .collect()
}

/// Append missing detail tokens to a canonical road address
///
/// Tokens already textually present in the canonical address (ignoring
/// whitespace and case) are not repeated; remaining ones join after a comma.
pub fn merge_detail(road_addr: &str, raw_addr: &str) -> String {
    let details = extract_detail_tokens(raw_addr);
    if details.is_empty() {
        return road_addr.to_string();
    }

    let road_norm = WHITESPACE.replace_all(road_addr, "").to_uppercase();
    let missing: Vec<String> = details
        .into_iter()
        .filter(|d| !road_norm.contains(d.as_str()))
        .collect();

    if missing.is_empty() {
        road_addr.to_string()
    } else {
        format!("{}, {}", road_addr, missing.join(" "))
    }
}
