use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::json;

use crate::calendar;
use crate::catalog::CatalogSource;

use super::profile::UserProfile;
use super::service::{MatchService, MatchServiceError};

/// Router exposing matching, catalog browsing and deadline export.
pub fn matcher_router<C>(service: Arc<MatchService<C>>) -> Router
where
    C: CatalogSource + 'static,
{
    Router::new()
        .route("/api/match", post(match_handler::<C>))
        .route("/api/simulate", post(simulate_handler::<C>))
        .route("/api/bonus", get(catalog_handler::<C>))
        .route("/api/bonus/:id", get(benefit_handler::<C>))
        .route("/api/calendar", get(calendar_handler))
        .route("/api/stats", get(stats_handler::<C>))
        .with_state(service)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let payload = json!({ "error": message.into() });
    (status, Json(payload)).into_response()
}

fn service_error(error: MatchServiceError) -> Response {
    match error {
        MatchServiceError::Validation(violation) => {
            error_response(StatusCode::BAD_REQUEST, violation.to_string())
        }
        MatchServiceError::NotFound(_) => error_response(StatusCode::NOT_FOUND, error.to_string()),
    }
}

pub(crate) async fn match_handler<C>(
    State(service): State<Arc<MatchService<C>>>,
    payload: Result<Json<UserProfile>, JsonRejection>,
) -> Response
where
    C: CatalogSource + 'static,
{
    let Json(profile) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match service.match_profile(profile, Utc::now()) {
        Ok(result) => (
            StatusCode::OK,
            [
                (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
                (header::PRAGMA, "no-cache"),
            ],
            Json(result),
        )
            .into_response(),
        Err(error) => service_error(error),
    }
}

pub(crate) async fn simulate_handler<C>(
    State(service): State<Arc<MatchService<C>>>,
    payload: Result<Json<UserProfile>, JsonRejection>,
) -> Response
where
    C: CatalogSource + 'static,
{
    let Json(profile) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match service.simulate(profile, Utc::now()) {
        Ok(result) => (
            StatusCode::OK,
            [(header::CACHE_CONTROL, "no-store")],
            Json(result),
        )
            .into_response(),
        Err(error) => service_error(error),
    }
}

pub(crate) async fn catalog_handler<C>(State(service): State<Arc<MatchService<C>>>) -> Response
where
    C: CatalogSource + 'static,
{
    let snapshot = service.catalog();
    (
        StatusCode::OK,
        [
            (header::CACHE_CONTROL, "public, max-age=3600"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        Json(&snapshot[..]),
    )
        .into_response()
}

pub(crate) async fn benefit_handler<C>(
    State(service): State<Arc<MatchService<C>>>,
    Path(id): Path<String>,
) -> Response
where
    C: CatalogSource + 'static,
{
    match service.benefit(&id) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => service_error(error),
    }
}

pub(crate) async fn calendar_handler(Query(params): Query<HashMap<String, String>>) -> Response {
    let raw = params.get("bonuses").map(String::as_str).unwrap_or_default();
    if raw.trim().is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    let items = match calendar::parse_selection(raw) {
        Ok(items) => items,
        Err(error) => return error_response(StatusCode::BAD_REQUEST, error.to_string()),
    };

    match calendar::render_ics(&items, Utc::now()) {
        Some(ics) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, calendar::CONTENT_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", calendar::FILE_NAME),
                ),
            ],
            ics,
        )
            .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

pub(crate) async fn stats_handler<C>(State(service): State<Arc<MatchService<C>>>) -> Response
where
    C: CatalogSource + 'static,
{
    let payload = json!({ "scansioni": service.scan_count() });
    (StatusCode::OK, Json(payload)).into_response()
}
