use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{builtin, BenefitRecord};

/// Seam between the matcher and whatever owns the live catalog.
pub trait CatalogSource: Send + Sync {
    /// Immutable view of the catalog; never empty.
    fn snapshot(&self) -> Arc<[BenefitRecord]>;
}

/// Fixed catalog, useful for the CLI and for tests.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    records: Arc<[BenefitRecord]>,
}

impl StaticCatalog {
    pub fn new(records: Vec<BenefitRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn builtin() -> Self {
        Self {
            records: builtin(),
        }
    }
}

impl CatalogSource for StaticCatalog {
    fn snapshot(&self) -> Arc<[BenefitRecord]> {
        if self.records.is_empty() {
            return builtin();
        }
        Arc::clone(&self.records)
    }
}

/// Outcome of the last fetch against one scraping source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceStatus {
    pub last_fetch: DateTime<Utc>,
    pub success: bool,
    pub bonus_found: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Operational view rendered by `/api/scraper-status`.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    pub last_run: Option<DateTime<Utc>>,
    pub next_run: Option<DateTime<Utc>>,
    pub bonus_count: usize,
    pub update_count: u64,
    pub sources: BTreeMap<String, SourceStatus>,
}

#[derive(Debug, Default)]
struct CacheState {
    records: Option<Arc<[BenefitRecord]>>,
    last_update: Option<DateTime<Utc>>,
    update_count: u64,
    sources: BTreeMap<String, SourceStatus>,
}

/// Live catalog published by the refresh cycle.
///
/// Readers clone the current `Arc` and drop the lock straight away, so a refresh never waits on
/// an in-flight match and a match never observes a half-written catalog.
#[derive(Debug, Default)]
pub struct CatalogCache {
    state: RwLock<CacheState>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole catalog with a new snapshot.
    pub fn publish(&self, records: Vec<BenefitRecord>, now: DateTime<Utc>) -> usize {
        let count = records.len();
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.records = Some(records.into());
        state.last_update = Some(now);
        state.update_count += 1;
        tracing::info!(
            bonus_count = count,
            cycle = state.update_count,
            "catalog snapshot published"
        );
        count
    }

    pub fn record_source(&self, name: &str, status: SourceStatus) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.sources.insert(name.to_string(), status);
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last_update
    }

    pub fn status(&self, interval: Duration) -> CacheStatus {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let next_run = state.last_update.and_then(|last| {
            chrono::Duration::from_std(interval)
                .ok()
                .and_then(|interval| last.checked_add_signed(interval))
        });

        CacheStatus {
            last_run: state.last_update,
            next_run,
            bonus_count: state.records.as_ref().map_or(0, |records| records.len()),
            update_count: state.update_count,
            sources: state.sources.clone(),
        }
    }
}

impl CatalogSource for CatalogCache {
    fn snapshot(&self) -> Arc<[BenefitRecord]> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        match &state.records {
            Some(records) if !records.is_empty() => Arc::clone(records),
            _ => builtin(),
        }
    }
}
