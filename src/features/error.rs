use crate::database::StoreError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub const VALIDATION_ERRORS: &str = "validation errors";

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a handler can answer with. Bodies only ever carry the fixed message.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(&'static str),

    #[error("{0}")]
    Deletion(&'static str),

    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Deletion(_) | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // log a store failure on a read path and report it as a 500
    pub fn internal(err: StoreError) -> Self {
        tracing::error!("Store failure: {}", err);
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::NotFound(msg) => json!({ "error": msg }),
            _ => json!({ "errors": [self.to_string()] }),
        };

        (status, Json(body)).into_response()
    }
}
