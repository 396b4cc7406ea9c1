use super::common::*;
use crate::catalog::{builtin, Category};
use crate::matcher::profile::UserProfile;
use crate::matcher::{match_benefits, MatchEngine, MatchPolicy};

#[test]
fn lone_always_shown_benefit_for_unremarkable_profile() {
    let result = match_benefits(&baseline_profile(), &builtin(), at(2026, 4, 15));

    assert_eq!(result.matched, 1);
    assert_eq!(result.active, 1);
    let only = &result.benefits[0];
    assert_eq!(only.id, "bonus-animali");
    assert_eq!(only.score, 30);
    assert_eq!(only.estimated_saving, 100.0);
    assert_eq!(result.estimated_saving, "€100");
}

#[test]
fn family_in_lombardy_is_ranked_by_score() {
    let result = match_benefits(&family_profile(), &builtin(), at(2026, 4, 15));

    let ids: Vec<&str> = result.ids().collect();
    assert_eq!(
        ids,
        vec![
            "assegno-unico",
            "bonus-nido",
            "carta-dedicata",
            "bonus-mamma",
            "lombardia-nidi-gratis",
            "lombardia-dote-scuola",
            "bonus-psicologo",
            "bonus-decoder-tv",
            "bonus-animali",
        ]
    );
    assert_eq!(result.matched, 9);
    assert_eq!(result.active, 9);
    assert_eq!(result.expired, 0);
    assert_eq!(result.estimated_saving, "€15632");
    assert_eq!(result.lost_so_far.as_deref(), Some("€3908"));
    assert_eq!(
        result.benefits[0].exact_amount.as_deref(),
        Some("€490.20/mese (€5882.40/anno)")
    );
}

#[test]
fn expired_entries_sink_and_stop_counting() {
    let result = match_benefits(&family_profile(), &builtin(), at(2027, 1, 10));

    assert_eq!(result.matched, 9);
    assert_eq!(result.expired, 1);
    assert_eq!(result.active, 8);
    let last = result.benefits.last().expect("non-empty result");
    assert_eq!(last.id, "bonus-nido");
    assert!(last.expired);
    assert_eq!(result.estimated_saving, "€12032");
    assert_eq!(result.lost_so_far, None, "nothing is lost in January");
}

#[test]
fn ordering_puts_active_first_then_score() {
    let result = match_benefits(&family_profile(), &builtin(), at(2027, 3, 1));

    for pair in result.benefits.windows(2) {
        let (earlier, later) = (&pair[0], &pair[1]);
        assert!(!earlier.expired || later.expired, "expired before active");
        if earlier.expired == later.expired {
            assert!(earlier.score >= later.score);
        }
    }
    assert!(result.benefits.iter().all(|b| b.score > 0 && b.score <= 100));
}

#[test]
fn ties_keep_catalog_order() {
    let catalog = vec![
        regional_record("prima", Category::Altro, &["Umbria"], None),
        regional_record("seconda", Category::Sostegno, &["Umbria"], None),
        regional_record("terza", Category::Spesa, &["Umbria"], None),
    ];
    let profile = UserProfile {
        region: "Umbria".to_string(),
        ..baseline_profile()
    };

    let result = match_benefits(&profile, &catalog, at(2026, 4, 15));
    let ids: Vec<&str> = result.ids().collect();
    assert_eq!(ids, vec!["prima", "seconda", "terza"]);
}

#[test]
fn regional_entries_require_matching_residence() {
    let mut profile = family_profile();
    profile.region = String::new();
    let result = match_benefits(&profile, &builtin(), at(2026, 4, 15));
    assert!(result.benefits.iter().all(|benefit| !benefit.is_regional()));

    profile.region = "Sicilia".to_string();
    let result = match_benefits(&profile, &builtin(), at(2026, 4, 15));
    assert!(result.ids().all(|id| !id.starts_with("lombardia-")));

    profile.region = "lombardia".to_string();
    let result = match_benefits(&profile, &builtin(), at(2026, 4, 15));
    assert!(result.ids().any(|id| id == "lombardia-dote-scuola"));
}

#[test]
fn active_total_is_the_sum_of_active_savings() {
    let result = match_benefits(&family_profile(), &builtin(), at(2027, 2, 1));
    let sum: f64 = result
        .benefits
        .iter()
        .filter(|benefit| !benefit.expired)
        .map(|benefit| benefit.estimated_saving)
        .sum();
    assert!((result.total_saving - sum).abs() < 1e-9);
    assert_eq!(result.estimated_saving, format!("€{sum:.0}"));
}

#[test]
fn lost_so_far_is_prorated_by_elapsed_months() {
    let catalog = vec![
        regional_record("famiglia-lazio", Category::Famiglia, &["Lazio"], None),
        regional_record("bus-lazio", Category::Trasporti, &["Lazio"], None),
    ];
    let profile = UserProfile {
        age: 20,
        region: "Lazio".to_string(),
        children: 1,
        ..UserProfile::default()
    };

    let april = match_benefits(&profile, &catalog, at(2026, 4, 10));
    assert_eq!(april.estimated_saving, "€1200");
    assert_eq!(april.lost_so_far.as_deref(), Some("€300"));

    let january = match_benefits(&profile, &catalog, at(2026, 1, 10));
    assert_eq!(january.lost_so_far, None);
}

#[test]
fn lost_so_far_below_materiality_floor_is_suppressed() {
    let february = match_benefits(&baseline_profile(), &builtin(), at(2026, 2, 10));
    assert_eq!(february.lost_so_far, None);

    let lenient = MatchEngine::new(MatchPolicy {
        materiality_floor: 5.0,
    });
    let result = lenient.run(&baseline_profile(), &builtin(), at(2026, 2, 10));
    assert_eq!(result.lost_so_far.as_deref(), Some("€8"));
}

#[test]
fn empty_catalog_falls_back_to_builtin() {
    let result = match_benefits(&baseline_profile(), &[], at(2026, 4, 15));
    assert_eq!(result.matched, 1);
    assert_eq!(result.benefits[0].id, "bonus-animali");
}

#[test]
fn duplicate_ids_keep_first_entry() {
    let mut first = record("bonus-animali", Category::Altro, "In vigore");
    first.name = "Prima copia".to_string();
    let mut second = first.clone();
    second.name = "Seconda copia".to_string();

    let result = match_benefits(&baseline_profile(), &[first, second], at(2026, 4, 15));
    assert_eq!(result.matched, 1);
    assert_eq!(result.benefits[0].name, "Prima copia");
}

#[test]
fn catalog_is_never_mutated_and_copies_keep_link_state() {
    let mut entry = record("bonus-animali", Category::Altro, "In vigore");
    entry.link_verified = Some(true);
    let catalog = vec![entry];

    let result = match_benefits(&baseline_profile(), &catalog, at(2026, 4, 15));
    assert_eq!(result.benefits[0].link_verified, Some(true));
    assert_eq!(result.benefits[0].score, 30);
    assert_eq!(catalog[0].score, 0);
    assert_eq!(catalog[0].estimated_saving, 0.0);
    assert!(builtin().iter().all(|record| record.score == 0));
}

#[test]
fn matching_is_deterministic() {
    let first = match_benefits(&family_profile(), &builtin(), at(2026, 9, 1));
    let second = match_benefits(&family_profile(), &builtin(), at(2026, 9, 1));
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
}
