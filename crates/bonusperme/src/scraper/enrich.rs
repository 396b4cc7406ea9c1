use std::collections::HashMap;

use chrono::NaiveDate;

use crate::catalog::BenefitRecord;
use crate::matcher::deadline;

use super::parse::{PLACEHOLDER_AMOUNT, PLACEHOLDER_DEADLINE};

pub(crate) const ACTIVE: &str = "attivo";

/// Fold scraped entries into the curated catalog.
///
/// Curated entries keep their identity and rule data; a scraped entry whose name matches one only
/// contributes a concrete deadline, a missing amount or a missing source URL. Unmatched scraped
/// entries are appended. Entries without an id or a name are dropped.
pub fn merge(
    scraped: Vec<BenefitRecord>,
    hardcoded: &[BenefitRecord],
    today: NaiveDate,
) -> Vec<BenefitRecord> {
    let stamp = today.format("%Y-%m-%d").to_string();
    let scraped_count = scraped.len();

    let mut merged: Vec<BenefitRecord> = hardcoded.to_vec();
    for record in &mut merged {
        record.last_updated.get_or_insert_with(|| stamp.clone());
        record.status.get_or_insert_with(|| ACTIVE.to_string());
    }

    let mut by_name: HashMap<String, usize> = merged
        .iter()
        .enumerate()
        .map(|(index, record)| (normalize_name(&record.name), index))
        .collect();

    for mut candidate in scraped {
        let key = normalize_name(&candidate.name);
        match by_name.get(&key) {
            Some(&index) => absorb(&mut merged[index], candidate, &stamp),
            None => {
                candidate.last_updated = Some(stamp.clone());
                candidate.status.get_or_insert_with(|| ACTIVE.to_string());
                merged.push(candidate);
                by_name.insert(key, merged.len() - 1);
            }
        }
    }

    merged.retain(|record| !record.id.trim().is_empty() && !record.name.trim().is_empty());

    tracing::info!(
        hardcoded = hardcoded.len(),
        scraped = scraped_count,
        merged = merged.len(),
        "catalog merged"
    );
    merged
}

fn absorb(target: &mut BenefitRecord, scraped: BenefitRecord, stamp: &str) {
    if target.amount.trim().is_empty()
        && !scraped.amount.trim().is_empty()
        && scraped.amount != PLACEHOLDER_AMOUNT
    {
        target.amount = scraped.amount;
    }
    if !scraped.deadline.trim().is_empty() && scraped.deadline != PLACEHOLDER_DEADLINE {
        target.deadline_kind = deadline::classify(&scraped.deadline);
        target.deadline = scraped.deadline;
    }
    if target.source_url.is_none() {
        target.source_url = scraped.source_url.filter(|url| !url.trim().is_empty());
    }
    target.last_updated = Some(stamp.to_string());
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
