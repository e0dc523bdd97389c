use crate::error::RelayError;
use crate::models::{AppState, RelayParams};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE},
        HeaderValue,
    },
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Base URL and path are concatenated as-is.
pub fn target_url(base: &str, path: Option<&str>) -> Result<String, RelayError> {
    match path {
        Some(path) if !path.is_empty() => Ok(format!("{}{}", base, path)),
        _ => Err(RelayError::MissingPath),
    }
}

pub async fn relay_get(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RelayParams>,
) -> Result<Response, RelayError> {
    let target = target_url(&state.config.backend_base_url, params.path.as_deref())?;
    debug!(%target, "relaying GET");

    let upstream = state
        .http
        .get(&target)
        .header(CACHE_CONTROL, "no-store")
        .send()
        .await
        .map_err(|e| {
            warn!(%target, error = %e, "upstream GET failed");
            RelayError::Upstream(e)
        })?;

    passthrough(upstream).await
}

pub async fn relay_post(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RelayParams>,
    body: Bytes,
) -> Result<Response, RelayError> {
    let target = target_url(&state.config.backend_base_url, params.path.as_deref())?;
    debug!(%target, bytes = body.len(), "relaying POST");

    let upstream = state
        .http
        .post(&target)
        .header(CONTENT_TYPE, "application/json")
        .header(CACHE_CONTROL, "no-store")
        .body(body)
        .send()
        .await
        .map_err(|e| {
            warn!(%target, error = %e, "upstream POST failed");
            RelayError::Upstream(e)
        })?;

    passthrough(upstream).await
}

/// Copies status, body and content type from the upstream response. The body
/// is never decoded.
async fn passthrough(upstream: reqwest::Response) -> Result<Response, RelayError> {
    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    let body = upstream.bytes().await.map_err(RelayError::Body)?;
    debug!(%status, bytes = body.len(), "upstream responded");

    Ok((status, [(CONTENT_TYPE, content_type)], body).into_response())
}
