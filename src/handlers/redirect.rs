use crate::{error::AppError, AppState};
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// GET /:key
///
/// The path segment is looked up as-is. A hit answers `302 Found` pointing at
/// the stored URL; a miss is a plain 404.
pub async fn redirect(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Response, AppError> {
    let Some(url) = state.store.get(&key).await else {
        tracing::debug!("Short key '{}' not found", key);
        return Ok((StatusCode::NOT_FOUND, "404 page not found").into_response());
    };

    let location = HeaderValue::try_from(url).map_err(|_| AppError::InvalidLocation)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
