use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::catalog::{BenefitRecord, CatalogSource};
use crate::config::ProfileConfig;

use super::engine::{MatchEngine, MatchPolicy, MatchResult};
use super::profile::{ProfileGuard, ProfileViolation, UserProfile};
use super::simulate::SimulationResult;

/// Service composing the profile guard, the live catalog and the engine.
pub struct MatchService<C> {
    guard: Arc<ProfileGuard>,
    catalog: Arc<C>,
    engine: Arc<MatchEngine>,
    scans: AtomicU64,
}

impl<C> MatchService<C>
where
    C: CatalogSource + 'static,
{
    pub fn new(catalog: Arc<C>, config: &ProfileConfig) -> Self {
        Self::with_parts(
            ProfileGuard::from_config(config),
            catalog,
            MatchEngine::new(MatchPolicy::default()),
        )
    }

    pub fn with_parts(guard: ProfileGuard, catalog: Arc<C>, engine: MatchEngine) -> Self {
        Self {
            guard: Arc::new(guard),
            catalog,
            engine: Arc::new(engine),
            scans: AtomicU64::new(0),
        }
    }

    /// Validate and match a questionnaire against the current snapshot.
    pub fn match_profile(
        &self,
        profile: UserProfile,
        now: DateTime<Utc>,
    ) -> Result<MatchResult, MatchServiceError> {
        let profile = self.guard.admit(profile)?;
        self.scans.fetch_add(1, Ordering::Relaxed);

        let snapshot = self.catalog.snapshot();
        let result = self.engine.run(&profile, &snapshot, now);
        tracing::debug!(
            matched = result.matched,
            expired = result.expired,
            region = %profile.region,
            "profile matched"
        );
        Ok(result)
    }

    pub fn simulate(
        &self,
        profile: UserProfile,
        now: DateTime<Utc>,
    ) -> Result<SimulationResult, MatchServiceError> {
        let profile = self.guard.admit(profile)?;
        let snapshot = self.catalog.snapshot();
        Ok(self.engine.simulate(&profile, &snapshot, now))
    }

    pub fn catalog(&self) -> Arc<[BenefitRecord]> {
        self.catalog.snapshot()
    }

    pub fn benefit(&self, id: &str) -> Result<BenefitRecord, MatchServiceError> {
        self.catalog
            .snapshot()
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| MatchServiceError::NotFound(id.to_string()))
    }

    /// Number of successful match requests since start-up.
    pub fn scan_count(&self) -> u64 {
        self.scans.load(Ordering::Relaxed)
    }
}

/// Error raised by the match service.
#[derive(Debug, thiserror::Error)]
pub enum MatchServiceError {
    #[error(transparent)]
    Validation(#[from] ProfileViolation),
    #[error("bonus non trovato: {0}")]
    NotFound(String),
}
