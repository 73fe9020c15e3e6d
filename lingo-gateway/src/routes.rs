//! Axum route handlers for the Lingo gateway API.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, warn};

use lingo_core::{resolve, Language};

use crate::{error::GatewayError, state::AppState};

// ── Request / response types ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

/// Language list returned by both lookup endpoints.
#[derive(Debug, Serialize)]
pub struct SupportedResponse {
    pub supported: Vec<Language>,
}

#[derive(Debug, Deserialize)]
pub struct TranslateBody {
    pub prompt: String,
    pub destination_language: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub completion: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router with the given shared state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/supported_languages", get(supported_languages))
        .route("/all_supported_languages", get(all_supported_languages))
        .route("/translate", post(translate))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Authentication ────────────────────────────────────────────────────────────

/// Verifies the `Authorization` header against the configured token.
///
/// Runs before anything else in every handler, so an unauthenticated request
/// never reaches validation or the translation backend.
fn check_auth(headers: &HeaderMap, state: &AppState) -> Result<(), GatewayError> {
    let provided = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    match provided {
        Some(token) if token_matches(token, &state.api_key) => Ok(()),
        _ => {
            warn!("rejected request with missing or invalid authorization token");
            Err(GatewayError::Unauthorized)
        }
    }
}

/// Compares tokens in constant time so the comparison leaks no prefix length.
fn token_matches(provided: &str, expected: &str) -> bool {
    if provided.len() != expected.len() {
        return false;
    }
    provided
        .bytes()
        .zip(expected.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
///
/// # Errors
/// Returns [`GatewayError::Unauthorized`] if the token is missing or wrong.
pub async fn health(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    check_auth(&headers, &state)?;
    Ok((StatusCode::OK, Json(serde_json::json!({"status": "ok"}))))
}

/// `GET /supported_languages` — fuzzy lookup over the catalog.
///
/// Without a `search` parameter (or with an empty one) the full catalog is
/// returned in load order. With one, catalog entries scoring at or above the
/// configured threshold are returned, best match first.
///
/// # Errors
/// Returns [`GatewayError::Unauthorized`] if the token is missing or wrong,
/// or [`GatewayError::InvalidRequest`] if the query string cannot be parsed.
pub async fn supported_languages(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    check_auth(&headers, &state)?;
    let Query(params) = query.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;

    let supported = match params.search.as_deref() {
        None | Some("") => state.catalog.to_vec(),
        Some(search) => resolve(search, &state.catalog, state.threshold),
    };
    debug!(matches = supported.len(), "language lookup");
    Ok(Json(SupportedResponse { supported }))
}

/// `GET /all_supported_languages` — the full catalog, in load order.
///
/// Any query parameters are ignored.
///
/// # Errors
/// Returns [`GatewayError::Unauthorized`] if the token is missing or wrong.
pub async fn all_supported_languages(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    check_auth(&headers, &state)?;
    Ok(Json(SupportedResponse {
        supported: state.catalog.to_vec(),
    }))
}

/// `POST /translate` — translate a prompt into a supported language.
///
/// The destination must name a catalog entry exactly (case-insensitive);
/// anything else is rejected before the translation backend is called.
///
/// # Errors
/// Returns [`GatewayError::Unauthorized`] if the token is missing or wrong,
/// [`GatewayError::InvalidRequest`] if the body is not valid JSON of the
/// expected shape, [`GatewayError::UnsupportedDestination`] if the destination
/// is not in the catalog, or [`GatewayError::Translation`] if the backend
/// fails.
pub async fn translate(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<TranslateBody>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    check_auth(&headers, &state)?;
    let Json(body) = body.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;

    if !state.catalog.contains(&body.destination_language) {
        return Err(GatewayError::UnsupportedDestination(
            body.destination_language,
        ));
    }
    let destination = Language::new(body.destination_language);

    let completion = state
        .translator
        .translate(&body.prompt, &destination)
        .await?;
    debug!(
        provider = state.translator.name(),
        language = %destination,
        "translation complete"
    );
    Ok(Json(TranslateResponse { completion }))
}
