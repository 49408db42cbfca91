use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::store::StoreError;

/// Failures a request handler can surface to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body could not be parsed; carries the parser's message.
    #[error("{0}")]
    BadRequest(String),

    #[error("URL already exists")]
    DuplicateUrl,

    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("stored URL is not a valid Location header")]
    InvalidLocation,
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUrl => AppError::DuplicateUrl,
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::DuplicateUrl => StatusCode::BAD_REQUEST,
            AppError::Encode(_) | AppError::InvalidLocation => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}
