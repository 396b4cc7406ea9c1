//! ISEE-tiered payout formulas.

use super::profile::UserProfile;

const ALLOWANCE_LOW_ISEE: f64 = 17_090.61;
const ALLOWANCE_HIGH_ISEE: f64 = 45_574.96;
const ALLOWANCE_MAX_PER_CHILD: f64 = 199.40;
const ALLOWANCE_MIN_PER_CHILD: f64 = 57.00;
const ALLOWANCE_UNDER_3_SURCHARGE: f64 = 91.40;
const ALLOWANCE_LARGE_FAMILY_SURCHARGE: f64 = 17.10;

const NURSERY_MONTHS: f64 = 11.0;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Monthly universal allowance for one child at the given ISEE.
pub(crate) fn allowance_per_child(isee: f64) -> f64 {
    if isee <= 0.0 || isee >= ALLOWANCE_HIGH_ISEE {
        return ALLOWANCE_MIN_PER_CHILD;
    }
    if isee <= ALLOWANCE_LOW_ISEE {
        return ALLOWANCE_MAX_PER_CHILD;
    }

    let position = (isee - ALLOWANCE_LOW_ISEE) / (ALLOWANCE_HIGH_ISEE - ALLOWANCE_LOW_ISEE);
    ALLOWANCE_MAX_PER_CHILD - position * (ALLOWANCE_MAX_PER_CHILD - ALLOWANCE_MIN_PER_CHILD)
}

/// Household allowance as `(monthly, yearly)`, rounded to cents at every aggregation step.
pub(crate) fn allowance(profile: &UserProfile) -> (f64, f64) {
    let children = f64::from(profile.children);
    let base = round2(allowance_per_child(profile.isee) * children);
    let under_3 = ALLOWANCE_UNDER_3_SURCHARGE * f64::from(profile.children_under_3);
    let large_family = if profile.children >= 3 {
        ALLOWANCE_LARGE_FAMILY_SURCHARGE * f64::from(profile.children - 2)
    } else {
        0.0
    };

    let monthly = round2(base + under_3 + large_family);
    (monthly, round2(monthly * 12.0))
}

pub(crate) fn allowance_label(profile: &UserProfile) -> String {
    let (monthly, yearly) = allowance(profile);
    format!("€{monthly:.2}/mese (€{yearly:.2}/anno)")
}

pub(crate) fn nursery_yearly(isee: f64) -> f64 {
    if isee <= 25_000.0 {
        3600.0
    } else if isee <= 40_000.0 {
        2500.0
    } else {
        1500.0
    }
}

pub(crate) fn nursery_label(profile: &UserProfile) -> String {
    let yearly = nursery_yearly(profile.isee);
    format!(
        "€{yearly:.2}/anno (€{:.2}/mese per 11 mensilità)",
        yearly / NURSERY_MONTHS
    )
}

pub(crate) fn psychologist_amount(isee: f64) -> f64 {
    if isee <= 0.0 {
        600.0
    } else if isee <= 15_000.0 {
        1500.0
    } else if isee <= 30_000.0 {
        1000.0
    } else if isee <= 50_000.0 {
        500.0
    } else {
        600.0
    }
}

pub(crate) fn psychologist_label(profile: &UserProfile) -> String {
    format!(
        "fino a €{:.0} in base al tuo ISEE",
        psychologist_amount(profile.isee)
    )
}
