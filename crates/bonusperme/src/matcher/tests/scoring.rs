use super::common::*;
use crate::catalog::Category;
use crate::matcher::profile::{Employment, MaritalStatus, UserProfile};
use crate::matcher::{regional, rules};

fn with(update: impl FnOnce(&mut UserProfile)) -> UserProfile {
    let mut profile = baseline_profile();
    update(&mut profile);
    profile
}

#[test]
fn child_allowance_scores_by_isee_band() {
    assert_eq!(rules::score("assegno-unico", &baseline_profile()), 0);

    let not_declared = with(|p| {
        p.children = 1;
        p.isee = 0.0;
    });
    assert_eq!(rules::score("assegno-unico", &not_declared), 85);

    let low = with(|p| {
        p.children = 1;
        p.isee = 17_000.0;
    });
    assert_eq!(rules::score("assegno-unico", &low), 98);

    let above = with(|p| {
        p.children = 1;
        p.isee = 17_000.01;
    });
    assert_eq!(rules::score("assegno-unico", &above), 85);
}

#[test]
fn psychologist_bonus_is_shown_low_when_isee_missing() {
    assert_eq!(rules::score("bonus-psicologo", &with(|p| p.isee = 0.0)), 40);
    assert_eq!(rules::score("bonus-psicologo", &with(|p| p.isee = 50_000.0)), 70);
    assert_eq!(rules::score("bonus-psicologo", &with(|p| p.isee = 50_000.01)), 0);
}

#[test]
fn pet_deduction_always_scores_thirty() {
    assert_eq!(rules::score("bonus-animali", &baseline_profile()), 30);
    assert_eq!(rules::score("bonus-animali", &family_profile()), 30);
}

#[test]
fn young_renter_bonus_depends_on_income() {
    let renter = |income: f64, age: u32| {
        with(|p| {
            p.age = age;
            p.renter = true;
            p.annual_income = income;
        })
    };
    assert_eq!(rules::score("bonus-affitto-giovani", &renter(15_000.0, 25)), 95);
    assert_eq!(rules::score("bonus-affitto-giovani", &renter(0.0, 25)), 60);
    assert_eq!(rules::score("bonus-affitto-giovani", &renter(15_000.0, 32)), 0);
    assert_eq!(rules::score("bonus-affitto-giovani", &renter(15_000.0, 19)), 0);

    let owner = with(|p| p.age = 25);
    assert_eq!(rules::score("bonus-affitto-giovani", &owner), 0);
}

#[test]
fn first_home_under_36_without_isee_scores_seventy() {
    let buyer = with(|p| {
        p.age = 35;
        p.first_home = true;
        p.isee = 0.0;
    });
    assert_eq!(rules::score("prima-casa-under36", &buyer), 70);
    assert_eq!(rules::score("bonus-verde", &buyer), 50);
    assert_eq!(rules::score("bonus-colonnine", &buyer), 40);
    assert_eq!(rules::score("bonus-acqua-potabile", &buyer), 35);
    assert_eq!(rules::score("prima-casa-under36", &with(|p| p.first_home = true)), 0);
}

#[test]
fn renovation_unlocks_home_credits() {
    let renovating = with(|p| p.renovating = true);
    assert_eq!(rules::score("bonus-ristrutturazione", &renovating), 90);
    assert_eq!(rules::score("bonus-mobili", &renovating), 80);
    assert_eq!(rules::score("ecobonus", &renovating), 75);
    assert_eq!(rules::score("bonus-verde", &renovating), 50);
}

#[test]
fn dedicated_card_needs_three_person_household() {
    let household = |children: u32, over_65: u32| {
        with(|p| {
            p.isee = 15_000.0;
            p.children = children;
            p.over_65 = over_65;
        })
    };
    assert_eq!(rules::score("carta-dedicata", &household(1, 1)), 90);
    assert_eq!(rules::score("carta-dedicata", &household(1, 0)), 0);
}

#[test]
fn working_mothers_exclude_singles() {
    let mut profile = family_profile();
    assert_eq!(rules::score("bonus-mamma", &profile), 85);

    profile.marital_status = MaritalStatus::Single;
    assert_eq!(rules::score("bonus-mamma", &profile), 0);

    profile.marital_status = MaritalStatus::Altro;
    profile.employment = Employment::Autonomo;
    assert_eq!(rules::score("bonus-mamma", &profile), 0);
}

#[test]
fn inclusion_measures_require_low_isee_and_need() {
    let fragile = with(|p| {
        p.isee = 9_000.0;
        p.disability = true;
    });
    assert_eq!(rules::score("adi", &fragile), 95);
    assert_eq!(rules::score("adi", &with(|p| p.isee = 9_000.0)), 0);
    assert_eq!(
        rules::score(
            "adi",
            &with(|p| {
                p.isee = 0.0;
                p.disability = true;
            })
        ),
        0
    );

    let jobless = with(|p| {
        p.age = 30;
        p.isee = 5_000.0;
        p.employment = Employment::Disoccupato;
    });
    assert_eq!(rules::score("sfl", &jobless), 90);
    assert_eq!(rules::score("sfl", &with(|p| {
        p.age = 60;
        p.isee = 5_000.0;
        p.employment = Employment::Inoccupato;
    })), 0);
}

#[test]
fn youth_and_student_benefits() {
    let eighteen = with(|p| {
        p.age = 18;
        p.isee = 30_000.0;
    });
    assert_eq!(rules::score("carta-cultura", &eighteen), 95);
    assert_eq!(rules::score("carta-cultura", &with(|p| p.age = 19)), 70);

    let student = with(|p| {
        p.student = true;
        p.isee = 0.0;
    });
    assert_eq!(rules::score("borsa-studio", &student), 90);
    assert_eq!(rules::score("borsa-studio", &with(|p| p.student = true)), 0);
}

#[test]
fn newborn_card_accepts_missing_isee() {
    let parents = with(|p| {
        p.newborn_2025 = true;
        p.isee = 0.0;
    });
    assert_eq!(rules::score("bonus-nascita", &parents), 95);
    assert_eq!(rules::score("bonus-nascita", &with(|p| p.newborn_2025 = true)), 0);
}

#[test]
fn unknown_ids_never_match() {
    assert_eq!(rules::score("bonus-inesistente", &family_profile()), 0);
    assert_eq!(rules::saving("bonus-inesistente", &family_profile()), 0.0);
    assert!(rules::exact_amount("bonus-inesistente", &family_profile()).is_none());
}

#[test]
fn regional_scorer_applies_isee_ceiling() {
    let entry = regional_record("dote", Category::Istruzione, &["Lombardia"], Some(15_748.78));
    assert_eq!(regional::score(&entry, &family_profile()), 75);

    let wealthy = UserProfile {
        isee: 30_000.0,
        ..family_profile()
    };
    assert_eq!(regional::score(&entry, &wealthy), 0);

    let undeclared = UserProfile {
        isee: 0.0,
        ..family_profile()
    };
    assert_eq!(regional::score(&entry, &undeclared), 75);
}

#[test]
fn regional_scorer_uses_category_signals() {
    let transport = regional_record("bus", Category::Trasporti, &["Lazio"], None);
    assert_eq!(regional::score(&transport, &with(|p| p.age = 26)), 65);
    assert_eq!(regional::score(&transport, &with(|p| p.age = 65)), 65);
    assert_eq!(regional::score(&transport, &baseline_profile()), 0);

    let housing = regional_record("casa", Category::Casa, &["Lazio"], None);
    assert_eq!(regional::score(&housing, &with(|p| p.renter = true)), 70);
    assert_eq!(regional::score(&housing, &baseline_profile()), 0);

    let family = regional_record("famiglia", Category::Famiglia, &["Lazio"], None);
    assert_eq!(regional::score(&family, &family_profile()), 80);
    assert_eq!(regional::score(&family, &baseline_profile()), 0);

    let support = regional_record("sostegno", Category::Sostegno, &["Lazio"], None);
    assert_eq!(regional::score(&support, &baseline_profile()), 50);
}
