use crate::{
    error::AppError,
    models::{ShortenRequest, ShortenResponse},
    AppState,
};
use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// POST /shorten
///
/// The body is decoded by hand rather than through `Json` so that every
/// malformed payload is a 400 carrying the parser's message, whatever the
/// request's content type.
pub async fn shorten(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, AppError> {
    let request: ShortenRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let key = match state.store.put(&request.url).await {
        Ok(key) => key,
        Err(e) => {
            tracing::debug!("Rejected shorten request for '{}': {}", request.url, e);
            return Err(e.into());
        }
    };

    let response = ShortenResponse {
        shortened_url: state.config.short_url(&key),
    };
    let encoded = serde_json::to_string(&response)?;

    let stored = state.store.len().await;
    tracing::debug!(
        "Shortened '{}' -> {} ({} link(s) stored)",
        request.url,
        response.shortened_url,
        stored
    );

    Ok(([(header::CONTENT_TYPE, "application/json")], encoded).into_response())
}
