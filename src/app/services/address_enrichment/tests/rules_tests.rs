//! Tests for rule-based address normalization

use super::super::rules::normalize_fallback;

#[test]
fn test_busan_si_expanded() {
    assert_eq!(
        normalize_fallback("부산시 해운대구 센텀중앙로 55"),
        "부산광역시 해운대구 센텀중앙로 55"
    );
}

#[test]
fn test_bare_busan_expanded() {
    assert_eq!(
        normalize_fallback("부산 해운대구 센텀중앙로 55 101동2604호"),
        "부산광역시 해운대구 센텀중앙로 55 101동2604호"
    );
}

#[test]
fn test_full_name_untouched() {
    assert_eq!(
        normalize_fallback("부산광역시 해운대구 센텀중앙로 55"),
        "부산광역시 해운대구 센텀중앙로 55"
    );
}

#[test]
fn test_district_only_prefix_gains_city() {
    assert_eq!(
        normalize_fallback("해운대구 센텀중앙로 55"),
        "부산광역시 해운대구 센텀중앙로 55"
    );
}

#[test]
fn test_whitespace_collapsed() {
    assert_eq!(
        normalize_fallback("  부산광역시   해운대구  센텀중앙로 55 "),
        "부산광역시 해운대구 센텀중앙로 55"
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(normalize_fallback(""), "");
    assert_eq!(normalize_fallback("   "), "");
}

#[test]
fn test_other_city_untouched() {
    assert_eq!(
        normalize_fallback("서울특별시 강남구 테헤란로 1"),
        "서울특별시 강남구 테헤란로 1"
    );
}
