//! Test utilities and fixtures for survey parser testing
//!
//! Provides a realistic survey header row and grid builders shared across
//! the test modules. The fixture mirrors one school year's export: fixed
//! fields first, duplicated boarding-location questions, then five weekday
//! drop-off segments with varying slot counts and labeling styles.

use crate::app::models::RawGrid;


/// Column positions of the fixture header, for readable row construction
pub mod col {
    pub const NAME: usize = 1;
    pub const GRADE: usize = 2;
    pub const CLASS: usize = 3;
    pub const NUMBER: usize = 4;
    pub const BIRTH: usize = 5;
    pub const ADDRESS: usize = 6;
    pub const MOTHER_NAME: usize = 7;
    pub const MOTHER_PHONE: usize = 8;
    pub const FATHER_NAME: usize = 9;
    pub const FATHER_PHONE: usize = 10;
    pub const SIBLINGS: usize = 11;
    pub const MAIN_PARENT_PHONE: usize = 12;
    pub const BOARDING_METHOD: usize = 13;
    pub const BOARDING_VEHICLE: usize = 14;
    pub const BOARDING_LOC_1: usize = 15;
    pub const BOARDING_LOC_2: usize = 16;

    pub const MON_METHOD: usize = 17;
    pub const MON_TIME: usize = 18;
    pub const MON_VEHICLE: usize = 19;
    pub const MON_LOC: usize = 20;

    pub const TUE_METHOD: usize = 21;
    pub const TUE_TIME: usize = 22;
    pub const TUE_VEHICLE_1: usize = 23;
    pub const TUE_LOC_1: usize = 24;
    pub const TUE_VEHICLE_2: usize = 25;
    pub const TUE_LOC_2: usize = 26;

    pub const WED_METHOD: usize = 27;
    pub const WED_TIME: usize = 28;
    pub const WED_VEHICLE: usize = 29;
    pub const WED_LOC: usize = 30;

    pub const THU_METHOD: usize = 31;
    pub const THU_TIME: usize = 32;
    pub const THU_VEHICLE: usize = 33;
    pub const THU_LOC: usize = 34;

    pub const FRI_METHOD: usize = 35;
    pub const FRI_TIME: usize = 36;
    pub const FRI_VEHICLE: usize = 37;
    pub const FRI_LOC: usize = 38;

    pub const WIDTH: usize = 39;
}

/// One realistic survey header row
pub fn fixture_header() -> Vec<String> {
    [
        "타임스탬프",
        "학생이름을 입력해주세요",
        "학년을 선택해주세요",
        "반을 입력해주세요",
        "번호를 입력해주세요",
        "생년월일을 입력해주세요(예: 2015-01-19)",
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
        "(등교)_등교 승차 장소를 선택해주세요.2",
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
        "(수요일)_탑승 차량(수, 1하교)",
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
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// An empty data row of fixture width
pub fn blank_row() -> Vec<String> {
    vec![String::new(); col::WIDTH]
}

/// Build a grid from the fixture header plus the given data rows
pub fn fixture_grid(data_rows: Vec<Vec<String>>) -> RawGrid {
    let mut rows = vec![fixture_header()];
    rows.extend(data_rows);
    RawGrid::from_rows(
        rows.into_iter()
            .map(|r| r.into_iter().map(|c| c.as_str().into()).collect())
            .collect(),
    )
}

/// A data row that extracts cleanly: every flagged field holds a valid value
pub fn named_row(name: &str) -> Vec<String> {
    let mut row = blank_row();
    row[col::NAME] = name.to_string();
    row[col::GRADE] = "4학년".to_string();
    row[col::CLASS] = "4반".to_string();
    row[col::NUMBER] = "7".to_string();
    row[col::BIRTH] = "150119".to_string();
    row[col::ADDRESS] = "부산광역시 해운대구 센텀중앙로 55".to_string();
    row[col::MOTHER_PHONE] = "01012345678".to_string();
    row[col::FATHER_PHONE] = "01087654321".to_string();
    row
}
