use std::collections::HashSet;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{builtin, BenefitRecord};

use super::profile::UserProfile;
use super::{deadline, regional, rules};

const DEFAULT_MATERIALITY_FLOOR: f64 = 10.0;

/// Knobs applied after scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchPolicy {
    /// Smallest "lost so far" amount worth reporting, in euro.
    pub materiality_floor: f64,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            materiality_floor: DEFAULT_MATERIALITY_FLOOR,
        }
    }
}

/// Ranked outcome of one match run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "bonus_trovati")]
    pub matched: usize,
    #[serde(rename = "bonus_attivi")]
    pub active: usize,
    #[serde(rename = "bonus_scaduti")]
    pub expired: usize,
    #[serde(rename = "risparmio_stimato")]
    pub estimated_saving: String,
    #[serde(rename = "perso_finora", default, skip_serializing_if = "Option::is_none")]
    pub lost_so_far: Option<String>,
    #[serde(rename = "bonus")]
    pub benefits: Vec<BenefitRecord>,
    #[serde(skip)]
    pub total_saving: f64,
}

impl MatchResult {
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.benefits.iter().map(|benefit| benefit.id.as_str())
    }
}

/// Stateless matcher applying the rule registry to a catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    policy: MatchPolicy,
}

impl MatchEngine {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Score every catalog entry against `profile`. An empty catalog means the built-in one.
    pub fn run(
        &self,
        profile: &UserProfile,
        catalog: &[BenefitRecord],
        now: DateTime<Utc>,
    ) -> MatchResult {
        let fallback;
        let catalog = if catalog.is_empty() {
            fallback = builtin();
            &fallback[..]
        } else {
            catalog
        };

        let mut seen = HashSet::new();
        let mut benefits: Vec<BenefitRecord> = catalog
            .iter()
            .filter(|record| seen.insert(record.id.as_str()))
            .filter_map(|record| personalize(record, profile, now))
            .collect();

        // Stable: ties keep catalog order.
        benefits.sort_by(|a, b| a.expired.cmp(&b.expired).then(b.score.cmp(&a.score)));

        let expired = benefits.iter().filter(|benefit| benefit.expired).count();
        let total_saving: f64 = benefits
            .iter()
            .filter(|benefit| !benefit.expired)
            .map(|benefit| benefit.estimated_saving)
            .sum();

        MatchResult {
            matched: benefits.len(),
            active: benefits.len() - expired,
            expired,
            estimated_saving: format!("€{total_saving:.0}"),
            lost_so_far: self.lost_so_far(total_saving, now),
            benefits,
            total_saving,
        }
    }

    fn lost_so_far(&self, total_saving: f64, now: DateTime<Utc>) -> Option<String> {
        let elapsed_months = now.month().saturating_sub(1);
        if elapsed_months == 0 {
            return None;
        }

        let lost = total_saving / 12.0 * f64::from(elapsed_months);
        if lost <= 0.0 || lost < self.policy.materiality_floor {
            return None;
        }
        Some(format!("€{lost:.0}"))
    }
}

fn personalize(
    record: &BenefitRecord,
    profile: &UserProfile,
    now: DateTime<Utc>,
) -> Option<BenefitRecord> {
    if record.is_regional() && !record.applies_to_region(&profile.region) {
        return None;
    }

    let bespoke = rules::lookup(&record.id).is_some();
    let mut score = rules::score(&record.id, profile);
    if score == 0 && record.is_regional() {
        score = regional::score(record, profile);
    }
    if score == 0 {
        return None;
    }

    let estimated_saving = if bespoke {
        rules::saving(&record.id, profile)
    } else if record.is_regional() {
        regional::saving(record.category)
    } else {
        0.0
    };

    let mut personalized = record.clone();
    personalized.score = score;
    personalized.exact_amount = rules::exact_amount(&record.id, profile);
    personalized.estimated_saving = estimated_saving;
    personalized.expired = deadline::is_expired(&record.deadline, now);
    Some(personalized)
}

/// Run the default engine.
pub fn match_benefits(
    profile: &UserProfile,
    catalog: &[BenefitRecord],
    now: DateTime<Utc>,
) -> MatchResult {
    MatchEngine::default().run(profile, catalog, now)
}
