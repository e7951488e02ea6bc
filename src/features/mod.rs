pub mod activities;
pub mod campers;
pub mod error;
pub mod signups;

use crate::AppState;
use axum::{
    Json, Router,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
    routing::get,
};
use error::{ApiError, ApiResult, VALIDATION_ERRORS};
use serde_json::{Map, Value};

pub type JsonObject = Map<String, Value>;

// every feature router is composed here; paths are absolute so nothing is nested
pub fn app_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .merge(campers::campers_router())
        .merge(activities::activities_router())
        .merge(signups::signups_router())
}

async fn home_handler() -> &'static str {
    ""
}

/// Unwraps a JSON object body. Malformed JSON, a missing body or a non-object
/// payload all count as a validation failure.
pub(crate) fn object_body(payload: Result<Json<JsonObject>, JsonRejection>) -> ApiResult<JsonObject> {
    match payload {
        Ok(Json(object)) => Ok(object),
        Err(rejection) => {
            tracing::warn!("Rejected request body: {}", rejection.body_text());
            Err(ApiError::Validation(VALIDATION_ERRORS))
        }
    }
}

/// Reads an integer id from the path. An id that doesn't parse can't name a
/// record, so it answers like any other unknown id.
pub(crate) fn path_id(
    path: Result<Path<i64>, PathRejection>,
    not_found: &'static str,
) -> ApiResult<i64> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::debug!("Unmatched id in path: {}", rejection.body_text());
            Err(ApiError::NotFound(not_found))
        }
    }
}
