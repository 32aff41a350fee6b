//! Address enrichment for extracted student records
//!
//! This module resolves each record's raw address to a canonical road-name
//! address through an external lookup service, then grafts back the
//! building/unit detail tokens the canonical form drops. Lookups are
//! memoized in a bounded cache and isolated per record: one failing lookup
//! never aborts the batch, it records a batch-level issue and leaves that
//! record to the rule-based fallback normalizer.
//!
//! # Architecture
//!
//! - [`client`] - Lookup boundary: `AddressLookup` trait and the juso.go.kr
//!   HTTP implementation
//! - [`cache`] - Capacity-bounded LRU memoization of lookup outcomes
//! - [`detail`] - Detail-token extraction and canonical-address merge
//! - [`rules`] - Rule-based fallback normalization
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use survey_processor::app::services::address_enrichment::{AddressEnricher, JusoClient};
//!
//! # async fn example(mut records: Vec<survey_processor::StudentRecord>) -> survey_processor::Result<()> {
//! let client = JusoClient::new("credential", 3)?;
//! let mut enricher = AddressEnricher::new(client, 2048);
//! let stats = enricher.enrich(&mut records).await;
//!
//! println!("{}", stats.summary());
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod detail;
pub mod rules;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use cache::LruCache;
pub use client::{AddressLookup, JusoClient, LookupOutcome};

use tracing::debug;

use crate::app::models::StudentRecord;
use crate::constants::lookup_reasons;

/// One failed lookup, recorded at batch level
///
/// Lookup failures are not merged into the per-row validation issues; they
/// describe the external service, not the survey data.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LookupIssue {
    /// Student whose address failed to resolve
    pub name: String,

    /// Raw address keyword sent to the service
    pub address: String,

    /// Failure reason
    pub issue: String,
}

/// Enrichment statistics for one batch
#[derive(Debug, Clone, Default)]
pub struct EnrichmentStats {
    /// Records with a non-empty address that were attempted
    pub attempted: usize,

    /// Lookups that produced a canonical address
    pub resolved: usize,

    /// Lookups that failed and fell back to rule-based normalization
    pub failed: usize,

    /// Attempts satisfied from the memoization cache
    pub cache_hits: usize,

    /// Batch-level lookup issues in record order
    pub issues: Vec<LookupIssue>,
}

impl EnrichmentStats {
    /// Summary line for logs and CLI reporting
    pub fn summary(&self) -> String {
        format!(
            "Address enrichment: {} attempted | {} resolved | {} failed | {} cache hits",
            self.attempted, self.resolved, self.failed, self.cache_hits
        )
    }
}

/// Address enrichment service owning its lookup client and cache
///
/// The cache is scoped to this enricher and therefore to one batch run;
/// its key is the raw address keyword (credential and timeout are fixed
/// per client).
#[derive(Debug)]
pub struct AddressEnricher<C: AddressLookup> {
    client: C,
    cache: LruCache<String, LookupOutcome>,
}

impl<C: AddressLookup> AddressEnricher<C> {
    /// Create an enricher with a bounded lookup cache
    pub fn new(client: C, cache_capacity: usize) -> Self {
        Self {
            client,
            cache: LruCache::new(cache_capacity),
        }
    }

    /// Enrich every record with a canonical address where possible
    ///
    /// Records with an empty raw address are left untouched. On success the
    /// record's `address` becomes the canonical road address with missing
    /// detail tokens appended; on failure it becomes the rule-normalized
    /// raw value and a batch-level issue is recorded.
    pub async fn enrich(&mut self, records: &mut [StudentRecord]) -> EnrichmentStats {
        let mut stats = EnrichmentStats::default();

        for record in records.iter_mut() {
            let raw = record.address_raw.trim().to_string();
            if raw.is_empty() {
                continue;
            }
            stats.attempted += 1;

            let outcome = match self.cache.get(&raw) {
                Some(cached) => {
                    stats.cache_hits += 1;
                    cached
                }
                None => {
                    let outcome = self.client.resolve(&raw).await;
                    self.cache.insert(raw.clone(), outcome.clone());
                    outcome
                }
            };

            match outcome {
                Ok(road_addr) => {
                    record.address = detail::merge_detail(&road_addr, &raw);
                    stats.resolved += 1;
                }
                Err(reason) => {
                    record.address = rules::normalize_fallback(&raw);
                    stats.failed += 1;
                    let reason = if reason.is_empty() {
                        lookup_reasons::LOOKUP_FAILED.to_string()
                    } else {
                        reason
                    };
                    debug!("Address lookup failed for '{}': {}", raw, reason);
                    stats.issues.push(LookupIssue {
                        name: record.name.clone(),
                        address: raw,
                        issue: reason,
                    });
                }
            }
        }

        debug!("{}", stats.summary());
        stats
    }
}

/// Apply rule-based normalization only, for runs without a lookup service
pub fn apply_rule_based(records: &mut [StudentRecord]) {
    for record in records.iter_mut() {
        let raw = record.address_raw.trim();
        if !raw.is_empty() {
            record.address = rules::normalize_fallback(raw);
        }
    }
}
