use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::BenefitRecord;

use super::engine::{MatchEngine, MatchResult};
use super::profile::UserProfile;

/// Real versus what-if ISEE comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    #[serde(rename = "reale")]
    pub real: MatchResult,
    #[serde(rename = "simulato")]
    pub simulated: MatchResult,
    #[serde(rename = "bonus_extra")]
    pub extra_benefits: usize,
    #[serde(rename = "risparmio_extra")]
    pub extra_saving: String,
    #[serde(rename = "nuovi_bonus")]
    pub new_benefit_ids: Vec<String>,
}

impl MatchEngine {
    /// Match twice, once with the declared ISEE and once with `simulated_isee` (0 when absent).
    pub fn simulate(
        &self,
        profile: &UserProfile,
        catalog: &[BenefitRecord],
        now: DateTime<Utc>,
    ) -> SimulationResult {
        let real = self.run(profile, catalog, now);
        let what_if = profile.with_isee(profile.simulated_isee.unwrap_or(0.0));
        let simulated = self.run(&what_if, catalog, now);

        let known: HashSet<&str> = real.ids().collect();
        let new_benefit_ids = simulated
            .ids()
            .filter(|id| !known.contains(id))
            .map(str::to_string)
            .collect();

        let extra_saving = (simulated.total_saving - real.total_saving).max(0.0);

        SimulationResult {
            extra_benefits: simulated.matched.saturating_sub(real.matched),
            extra_saving: format!("€{extra_saving:.0}"),
            new_benefit_ids,
            real,
            simulated,
        }
    }
}
