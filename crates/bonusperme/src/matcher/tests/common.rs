use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::catalog::{BenefitRecord, Category, DeadlineKind, StaticCatalog};
use crate::config::ProfileConfig;
use crate::matcher::deadline;
use crate::matcher::profile::{Employment, MaritalStatus, UserProfile};
use crate::matcher::{matcher_router, MatchService};

pub(super) fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Adult with no children and a high ISEE: only the always-shown benefit should match.
pub(super) fn baseline_profile() -> UserProfile {
    UserProfile {
        age: 40,
        isee: 60_000.0,
        annual_income: 45_000.0,
        ..UserProfile::default()
    }
}

/// Married employee in Lombardy with two young children and a low ISEE.
pub(super) fn family_profile() -> UserProfile {
    UserProfile {
        age: 34,
        region: "Lombardia".to_string(),
        municipality: "Bergamo".to_string(),
        marital_status: MaritalStatus::Sposato,
        employment: Employment::Dipendente,
        children: 2,
        minor_children: 2,
        children_under_3: 1,
        isee: 10_000.0,
        annual_income: 25_000.0,
        ..UserProfile::default()
    }
}

pub(super) fn record(id: &str, category: Category, deadline_text: &str) -> BenefitRecord {
    BenefitRecord {
        id: id.to_string(),
        name: format!("Bonus {id}"),
        category,
        description: "Voce di prova".to_string(),
        amount: "variabile".to_string(),
        deadline: deadline_text.to_string(),
        deadline_kind: deadline::classify(deadline_text),
        requirements: vec!["Residenza in Italia".to_string()],
        how_to_apply: vec!["Domanda online".to_string()],
        documents: Vec::new(),
        legal_refs: Vec::new(),
        authority: "Ente di prova".to_string(),
        official_link: format!("https://example.org/{id}"),
        search_link: String::new(),
        regions: Vec::new(),
        isee_ceiling: None,
        last_updated: None,
        status: None,
        source_url: None,
        link_verified: None,
        link_verified_on: None,
        score: 0,
        exact_amount: None,
        estimated_saving: 0.0,
        expired: false,
    }
}

pub(super) fn regional_record(
    id: &str,
    category: Category,
    regions: &[&str],
    isee_ceiling: Option<f64>,
) -> BenefitRecord {
    BenefitRecord {
        regions: regions.iter().map(|region| region.to_string()).collect(),
        isee_ceiling,
        ..record(id, category, "In vigore")
    }
}

pub(super) fn assert_kind(text: &str, expected: DeadlineKind) {
    assert_eq!(deadline::classify(text), expected, "classifying {text:?}");
}

pub(super) fn build_service() -> Arc<MatchService<StaticCatalog>> {
    Arc::new(MatchService::new(
        Arc::new(StaticCatalog::builtin()),
        &ProfileConfig { min_age: 18 },
    ))
}

pub(super) fn router_with_service(service: Arc<MatchService<StaticCatalog>>) -> axum::Router {
    matcher_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
