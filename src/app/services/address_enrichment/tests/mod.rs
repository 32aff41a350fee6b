//! Test utilities and mock infrastructure for address enrichment testing

use std::collections::HashMap;

use super::client::{AddressLookup, LookupOutcome};
use crate::app::models::StudentRecord;

mod rules_tests;

/// Mock lookup service with canned responses
#[derive(Debug, Default)]
pub struct MockLookup {
    responses: HashMap<String, LookupOutcome>,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned outcome for a keyword
    pub fn with_response(mut self, keyword: &str, outcome: LookupOutcome) -> Self {
        self.responses.insert(keyword.to_string(), outcome);
        self
    }
}

impl AddressLookup for MockLookup {
    async fn resolve(&self, keyword: &str) -> LookupOutcome {
        self.responses
            .get(keyword)
            .cloned()
            .unwrap_or_else(|| Err("검색 결과 없음".to_string()))
    }
}

/// Minimal record with the given name and raw address
pub fn record_with_address(name: &str, address_raw: &str) -> StudentRecord {
    StudentRecord {
        row: 2,
        name: name.to_string(),
        grade_text: String::new(),
        class_text: String::new(),
        grade_num: 0,
        class_num: 0,
        number: None,
        birth_raw: String::new(),
        birth_date: None,
        address_raw: address_raw.to_string(),
        address: address_raw.trim().to_string(),
        mother_name: String::new(),
        mother_phone: String::new(),
        father_name: String::new(),
        father_phone: String::new(),
        siblings: String::new(),
        boarding_method: String::new(),
        boarding_vehicle: String::new(),
        boarding_location: String::new(),
        main_parent_phone: String::new(),
        dropoff: Default::default(),
    }
}
