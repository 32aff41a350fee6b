//! Integration tests for the survey processing pipeline
//!
//! These tests drive the public library surface end-to-end: build a raw
//! grid the way the spreadsheet adapter would, locate the header layout,
//! extract records, and run address enrichment against an in-test lookup
//! implementation.

use survey_processor::app::models::{CellValue, RawGrid, Weekday};
use survey_processor::app::services::address_enrichment::{
    AddressEnricher, AddressLookup, LookupOutcome, apply_rule_based,
};
use survey_processor::app::services::survey_parser::{HeaderIndex, extract};

/// A one-survey-year header row with drifted wording and two Tuesday slots
fn header_row() -> Vec<&'static str> {
    vec![
        "타임스탬프",
        "학생이름을 입력해주세요",
        "학년을 선택해주세요",
        "반을 입력해주세요",
        "번호를 입력해주세요",
        "생년월일을 입력해주세요",
        "주소(도로명주소)를 입력해주세요",
        "어머니 성명",
        "어머니의 전화번호를 입력해주세요",
        "아버지 성명",
        "아버지의 전화번호를 입력해주세요",
        "형제가 있다면 적어주세요",
        "주 학부모전화번호를 선택해주세요",
        "(등교)_등교 방법을 선택해주세요",
        "(등교)_등교 탑승 차량을 선택해주세요",
        "(등교)_등교 승차 장소를 선택해주세요",
        "(월요일)_하교 방법",
        "(월요일)_하교 시간",
        "(월요일)_탑승 차량",
        "(월요일)_하차 장소",
        "(화요일)_하교 방법",
        "화요일 하교시간을 선택해주세요",
        "탑승 차량을 선택해주세요.(화, 1하교)",
        "하차 장소(화, 1하교)",
        "탑승 차량을 선택해주세요.(화, 2하교)",
        "하차 장소(화, 2하교)",
        "(수요일)_하교 방법",
        "(수요일)_하교 시간",
        "(수요일)_탑승 차량",
        "(수요일)_하차 장소",
        "(목요일)_하교 방법",
        "(목요일)_하교 시간",
        "(목요일)_탑승 차량",
        "(목요일)_하차 장소",
        "(금요일)_하교 방법",
        "(금요일)_하교 시간",
        "(금요일)_탑승 차량",
        "(금요일)_하차 장소",
    ]
}

fn grid_from(rows: Vec<Vec<&str>>) -> RawGrid {
    RawGrid::from_rows(
        rows.into_iter()
            .map(|row| row.into_iter().map(CellValue::from).collect())
            .collect(),
    )
}

fn student_row() -> Vec<&'static str> {
    vec![
        "2026-02-27 10:12:00",
        "김하늘",
        "4학년",
        "4반",
        "7번",
        "15년1월19일",
        "부산 해운대구 센텀중앙로 55 101동2604호",
        "김어머니",
        "010-1234-5678",
        "김아버지",
        "01087654321",
        "없음",
        "1. 어머니",
        "1. 학교차량이용",
        "2) 1호차",
        "3. 베내시티 앞",
        "1. 학교차량이용",
        "1하교 14:00",
        "1호차",
        "정문",
        "학교차량이용",
        "2하교 15:00",
        "",
        "",
        "3호차",
        "정문",
        "2. 도보",
        "1하교 14:00",
        "",
        "",
        "학교차량이용",
        "2하교 15:00",
        "5호차",
        "후문",
        "1. 학교차량이용",
        "3하교 16:00",
        "2호차",
        "놀이터 앞",
    ]
}

#[test]
fn test_full_extraction_from_realistic_sheet() {
    let mut rows = vec![header_row()];
    rows.push(student_row());
    // A row without a name must vanish silently
    let mut nameless = vec![""; header_row().len()];
    nameless[4] = "9";
    rows.push(nameless);

    let grid = grid_from(rows);
    let index = HeaderIndex::locate(&grid.header_row());
    let result = extract(&grid, &index);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.stats.rows_skipped, 1);

    let record = &result.records[0];
    assert_eq!(record.name, "김하늘");
    assert_eq!(record.grade_num, 4);
    assert_eq!(record.class_num, 4);
    assert_eq!(record.number, Some(7));
    assert_eq!(record.student_id(), "4407");
    assert_eq!(
        record.birth_date,
        chrono::NaiveDate::from_ymd_opt(2015, 1, 19)
    );
    assert_eq!(record.mother_phone, "010-1234-5678");
    assert_eq!(record.father_phone, "010-8765-4321");
    assert_eq!(record.siblings, "");
    assert_eq!(record.boarding_method, "학교차량이용");
    assert_eq!(record.boarding_vehicle, "1호차");
    // The known survey typo is corrected during choice cleaning
    assert_eq!(record.boarding_location, "베네시티 앞");

    // Monday: slot 1, direct hit
    let monday = record.dropoff(Weekday::Monday);
    assert_eq!(monday.method, "학교차량이용");
    assert_eq!(monday.vehicle, "1호차");
    assert_eq!(monday.location, "정문");

    // Tuesday: slot 2 resolves through the explicit (화, 2하교) columns
    let tuesday = record.dropoff(Weekday::Tuesday);
    assert_eq!(tuesday.time, "2하교 15:00");
    assert_eq!(tuesday.vehicle, "3호차");
    assert_eq!(tuesday.location, "정문");

    // Wednesday: not a school-vehicle day
    let wednesday = record.dropoff(Weekday::Wednesday);
    assert_eq!(wednesday.method, "도보");
    assert_eq!(wednesday.vehicle, "");
    assert_eq!(wednesday.location, "");

    // Thursday and Friday resolve through single-column fallbacks
    assert_eq!(record.dropoff(Weekday::Thursday).vehicle, "5호차");
    assert_eq!(record.dropoff(Weekday::Friday).vehicle, "2호차");
    assert_eq!(record.dropoff(Weekday::Friday).location, "놀이터 앞");

    // No issues: every field on the row is well-formed
    assert!(result.issues.is_empty(), "issues: {:?}", result.issues);
}

#[test]
fn test_malformed_fields_flag_but_do_not_drop_rows() {
    let mut bad_row = student_row();
    bad_row[4] = "미정"; // roll number
    bad_row[5] = "모름"; // birth date
    bad_row[8] = "123"; // mother phone
    bad_row[6] = "센텀중앙로 55"; // address without district

    let grid = grid_from(vec![header_row(), bad_row]);
    let index = HeaderIndex::locate(&grid.header_row());
    let result = extract(&grid, &index);

    assert_eq!(result.records.len(), 1);
    let record = &result.records[0];
    assert_eq!(record.number, None);
    assert_eq!(record.birth_date, None);
    assert_eq!(record.mother_phone, "123");

    let fields: Vec<&str> = result.issues.iter().map(|i| i.field.as_str()).collect();
    assert_eq!(fields, vec!["번호", "생년월일", "어머니전화", "주소"]);
}

/// Lookup stub returning one canned canonical address
struct FixedLookup {
    road_addr: String,
}

impl AddressLookup for FixedLookup {
    async fn resolve(&self, _keyword: &str) -> LookupOutcome {
        Ok(self.road_addr.clone())
    }
}

#[tokio::test]
async fn test_extraction_then_enrichment() {
    let grid = grid_from(vec![header_row(), student_row()]);
    let index = HeaderIndex::locate(&grid.header_row());
    let mut result = extract(&grid, &index);

    let client = FixedLookup {
        road_addr: "부산광역시 해운대구 센텀중앙로 55".to_string(),
    };
    let mut enricher = AddressEnricher::new(client, 64);
    let stats = enricher.enrich(&mut result.records).await;

    assert_eq!(stats.resolved, 1);
    assert_eq!(
        result.records[0].address,
        "부산광역시 해운대구 센텀중앙로 55, 101동2604호"
    );
    // The raw answer is preserved for downstream consumers
    assert_eq!(
        result.records[0].address_raw,
        "부산 해운대구 센텀중앙로 55 101동2604호"
    );
}

#[test]
fn test_rule_based_normalization_without_service() {
    let grid = grid_from(vec![header_row(), student_row()]);
    let index = HeaderIndex::locate(&grid.header_row());
    let mut result = extract(&grid, &index);

    apply_rule_based(&mut result.records);

    assert_eq!(
        result.records[0].address,
        "부산광역시 해운대구 센텀중앙로 55 101동2604호"
    );
}
