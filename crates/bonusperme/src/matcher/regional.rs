use crate::catalog::{BenefitRecord, Category};

use super::profile::UserProfile;

/// Presence-based score for regional entries without a bespoke rule.
pub(crate) fn score(record: &BenefitRecord, profile: &UserProfile) -> u8 {
    if let Some(ceiling) = record.isee_ceiling {
        if ceiling > 0.0 && profile.isee > ceiling {
            return 0;
        }
    }

    match record.category {
        Category::Famiglia => {
            if profile.children > 0 {
                80
            } else {
                0
            }
        }
        Category::Istruzione => {
            if profile.student || profile.minor_children > 0 {
                75
            } else {
                0
            }
        }
        Category::Casa => {
            if profile.renter || profile.first_home || profile.renovating {
                70
            } else {
                0
            }
        }
        Category::Trasporti => {
            if profile.student || profile.over_65 > 0 || profile.age <= 26 || profile.age >= 65 {
                65
            } else {
                0
            }
        }
        _ => 50,
    }
}

pub(crate) fn saving(category: Category) -> f64 {
    match category {
        Category::Famiglia => 800.0,
        Category::Istruzione => 200.0,
        Category::Casa => 2000.0,
        Category::Trasporti => 400.0,
        _ => 300.0,
    }
}
