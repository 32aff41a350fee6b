//! Application constants for the survey processor
//!
//! This module contains the header marker vocabulary, survey answer literals,
//! validation field names and reasons, and default values used throughout
//! the survey processor application.

// =============================================================================
// Survey Sheet Structure
// =============================================================================

/// Name of the required sheet inside the uploaded survey workbook
pub const SURVEY_SHEET_NAME: &str = "학생";

/// Row index (1-based) of the header row
pub const HEADER_ROW: usize = 1;

/// Row index (1-based) of the first data row
pub const FIRST_DATA_ROW: usize = 2;

/// Weekday labels as they appear in survey headers, Monday through Friday
pub const WEEKDAY_LABELS: &[&str] = &["월요일", "화요일", "수요일", "목요일", "금요일"];

/// Number of dismissal time slots a weekday segment can carry
pub const MAX_TRIP_SLOTS: usize = 3;

// =============================================================================
// Header Markers
// =============================================================================

/// Marker substrings for fixed single-column fields
///
/// A header cell is matched by case-sensitive substring containment against
/// the raw (un-normalized) header text; the first matching cell wins.
pub mod markers {
    pub const NAME: &str = "학생이름";
    pub const GRADE: &str = "학년";
    pub const CLASS: &str = "반";
    pub const NUMBER: &str = "번호";
    pub const BIRTH: &str = "생년월일";
    pub const ADDRESS: &str = "주소(도로명주소)";
    pub const MOTHER_NAME: &str = "어머니 성명";
    pub const MOTHER_PHONE: &str = "어머니의 전화번호";
    pub const FATHER_NAME: &str = "아버지 성명";
    pub const FATHER_PHONE: &str = "아버지의 전화번호";
    pub const SIBLINGS: &str = "형제가 있다면";
    pub const BOARDING_METHOD: &str = "(등교)_등교 방법";
    pub const BOARDING_VEHICLE: &str = "(등교)_등교 탑승 차량";
    pub const MAIN_PARENT_PHONE: &str = "주 학부모전화번호";

    /// Tokens that must all appear in a normalized header for a column to be
    /// a boarding-location candidate
    pub const BOARDING_LOCATION_TOKENS: &[&str] = &["등교", "승차", "장소"];

    /// Tokens identifying a weekday's drop-off method column (normalized form)
    pub const DROPOFF_METHOD_TOKENS: (&str, &str) = ("하교", "방법");

    /// Tokens identifying a weekday's drop-off time column (normalized form)
    pub const DROPOFF_TIME_TOKENS: (&str, &str) = ("하교", "시간");

    /// Token identifying a vehicle column inside a weekday segment
    pub const VEHICLE_TOKEN: &str = "차량";

    /// Tokens identifying a drop-off location column inside a weekday segment
    pub const LOCATION_TOKENS: &[&str] = &["장소", "하차"];
}

// =============================================================================
// Survey Answer Literals
// =============================================================================

/// Answer literal meaning "uses the school vehicle"
pub const SCHOOL_VEHICLE: &str = "학교차량이용";

/// Korean administrative district suffix expected in well-formed addresses
pub const DISTRICT_CHAR: char = '구';

/// Known survey-export typo and its corrected spelling
pub const SPELLING_FIX: (&str, &str) = ("베내시티", "베네시티");

/// Sibling-note phrases that are placeholders for "none"
pub const SIBLING_NONE_PHRASES: &[&str] = &["없음", "해당없음", "없다", "없습니다", "무"];

// =============================================================================
// Validation Fields and Reasons
// =============================================================================

/// Field names used in the validation log
pub mod fields {
    pub const NUMBER: &str = "번호";
    pub const BIRTH: &str = "생년월일";
    pub const MOTHER_PHONE: &str = "어머니전화";
    pub const FATHER_PHONE: &str = "아버지전화";
    pub const ADDRESS: &str = "주소";
}

/// Human-readable issue reasons emitted by the extractor and normalizer
pub mod reasons {
    pub const NUMBER_PARSE: &str = "번호 파싱 실패";
    pub const BIRTH_MISSING: &str = "생년월일 미입력";
    pub const BIRTH_PARSE: &str = "생년월일 파싱 실패";
    pub const BIRTH_FORMAT: &str = "생년월일 형식 불일치";
    pub const PHONE_MISSING: &str = "전화번호 미입력";
    pub const PHONE_LENGTH: &str = "휴대전화 길이 이상";
    pub const PHONE_FORMAT: &str = "전화번호 형식 불일치";
    pub const DISTRICT_MISSING: &str = "구(區) 정보 누락 의심";
}

// =============================================================================
// Address Lookup Configuration
// =============================================================================

/// Road-name address search endpoint (juso.go.kr)
pub const JUSO_API_URL: &str = "https://business.juso.go.kr/addrlink/addrLinkApi.do";

/// Environment variable carrying the lookup credential
pub const JUSO_API_KEY_ENV: &str = "JUSO_API_KEY";

/// Default per-lookup timeout in seconds
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 3;

/// Default capacity of the per-batch lookup memoization cache
pub const DEFAULT_LOOKUP_CACHE_CAPACITY: usize = 2048;

/// Number of candidate addresses requested per lookup
pub const LOOKUP_RESULTS_PER_PAGE: u32 = 5;

/// Lookup failure reasons surfaced as batch-level issues
pub mod lookup_reasons {
    pub const PROVIDER_ERROR: &str = "주소 API 오류";
    pub const NO_RESULTS: &str = "검색 결과 없음";
    pub const NO_ROAD_ADDRESS: &str = "표준 도로명주소 없음";
    pub const LOOKUP_FAILED: &str = "조회 실패";
}

// =============================================================================
// Output Defaults
// =============================================================================

/// Default output file name for the validation log
pub const VALIDATION_LOG_FILE: &str = "validation_log.csv";

/// Default output file name for the normalized records dataset
pub const RECORDS_FILE: &str = "records.json";
