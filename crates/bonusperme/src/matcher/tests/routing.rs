use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::Utc;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::matcher::profile::UserProfile;
use crate::matcher::MatchServiceError;

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

#[tokio::test]
async fn match_endpoint_returns_uncached_result() {
    let router = router_with_service(build_service());
    let body = json!({ "eta": 40, "isee": 60000, "reddito_annuo": 45000 }).to_string();

    let response = router
        .oneshot(post_json("/api/match", body))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "no-store, no-cache, must-revalidate"
    );
    assert_eq!(response.headers()[header::PRAGMA], "no-cache");
    let payload = read_json_body(response).await;
    assert_eq!(payload["bonus_trovati"], 1);
    assert_eq!(payload["bonus"][0]["id"], "bonus-animali");
    assert_eq!(payload["bonus"][0]["compatibilita"], 30);
}

#[tokio::test]
async fn match_endpoint_rejects_underage_profiles() {
    let router = router_with_service(build_service());
    let body = json!({ "eta": 12 }).to_string();

    let response = router
        .oneshot(post_json("/api/match", body))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    let message = payload["error"].as_str().expect("error message");
    assert!(message.contains("eta"), "unexpected message {message}");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let router = router_with_service(build_service());

    let response = router
        .oneshot(post_json("/api/match", "{\"eta\": ".to_string()))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"].is_string());
}

#[tokio::test]
async fn simulate_endpoint_reports_extra_benefits() {
    let router = router_with_service(build_service());
    let body = json!({ "eta": 40, "isee": 60000, "isee_simulato": 8000 }).to_string();

    let response = router
        .oneshot(post_json("/api/simulate", body))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
    let payload = read_json_body(response).await;
    assert!(payload["bonus_extra"].as_u64().expect("count") >= 1);
    assert!(payload["nuovi_bonus"]
        .as_array()
        .expect("ids")
        .iter()
        .any(|id| id == "bonus-psicologo"));
}

#[tokio::test]
async fn catalog_endpoint_is_public_and_cacheable() {
    let router = router_with_service(build_service());

    let response = router.oneshot(get("/api/bonus")).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=3600"
    );
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().expect("catalog array").len(), 31);
}

#[tokio::test]
async fn single_benefit_lookup() {
    let service = build_service();

    let found = router_with_service(service.clone())
        .oneshot(get("/api/bonus/adi"))
        .await
        .expect("response");
    assert_eq!(found.status(), StatusCode::OK);
    let payload = read_json_body(found).await;
    assert_eq!(payload["id"], "adi");
    assert_eq!(payload["ente"], "INPS");

    let missing = router_with_service(service)
        .oneshot(get("/api/bonus/bonus-inesistente"))
        .await
        .expect("response");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(missing).await;
    assert_eq!(payload["error"], "bonus non trovato: bonus-inesistente");
}

#[tokio::test]
async fn calendar_endpoint_handles_empty_and_malformed_selections() {
    let service = build_service();

    let empty = router_with_service(service.clone())
        .oneshot(get("/api/calendar"))
        .await
        .expect("response");
    assert_eq!(empty.status(), StatusCode::NO_CONTENT);

    let nothing_selected = router_with_service(service.clone())
        .oneshot(get("/api/calendar?bonuses=%5B%5D"))
        .await
        .expect("response");
    assert_eq!(nothing_selected.status(), StatusCode::NO_CONTENT);

    let malformed = router_with_service(service)
        .oneshot(get("/api/calendar?bonuses=%7Bnope"))
        .await
        .expect("response");
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn calendar_endpoint_serves_ics_attachment() {
    let router = router_with_service(build_service());
    // [{"nome":"Bonus Nido","scadenza":"31 dicembre 2026"}]
    let uri = "/api/calendar?bonuses=%5B%7B%22nome%22%3A%22Bonus%20Nido%22%2C%22scadenza%22%3A%2231%20dicembre%202026%22%7D%5D";

    let response = router.oneshot(get(uri)).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE]
        .to_str()
        .expect("ascii header");
    assert!(content_type.starts_with("text/calendar"));
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .expect("ascii header");
    assert!(disposition.contains("bonusperme-scadenze.ics"));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let ics = String::from_utf8(body.to_vec()).expect("utf8 calendar");
    assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(ics.contains("SUMMARY:Scadenza: Bonus Nido"));
    assert!(ics.contains("DTSTART;VALUE=DATE:20261231"));
}

#[tokio::test]
async fn stats_count_only_successful_scans() {
    let service = build_service();

    router_with_service(service.clone())
        .oneshot(post_json("/api/match", json!({ "eta": 12 }).to_string()))
        .await
        .expect("response");
    router_with_service(service.clone())
        .oneshot(post_json("/api/match", json!({ "eta": 30 }).to_string()))
        .await
        .expect("response");

    let response = router_with_service(service)
        .oneshot(get("/api/stats"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["scansioni"], 1);
}

#[test]
fn service_reports_validation_and_lookup_errors() {
    let service = build_service();

    let underage = UserProfile {
        age: 10,
        ..baseline_profile()
    };
    match service.match_profile(underage, Utc::now()) {
        Err(MatchServiceError::Validation(_)) => {}
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(service.scan_count(), 0);

    match service.benefit("sconosciuto") {
        Err(MatchServiceError::NotFound(id)) => assert_eq!(id, "sconosciuto"),
        other => panic!("expected not found, got {other:?}"),
    }

    let result = service
        .match_profile(baseline_profile(), Utc::now())
        .expect("valid profile");
    assert!(result.matched >= 1);
    assert_eq!(service.scan_count(), 1);
}
