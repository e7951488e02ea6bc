pub mod model;

use crate::AppState;
use crate::database::StoreError;
use crate::domain::NewSignup;
use crate::features::error::{ApiError, ApiResult, VALIDATION_ERRORS};
use crate::features::{JsonObject, object_body};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use model::SignupDetailJson;
use serde_json::Value;

pub const SIGNUP_REQUIRED_FIELDS: &str = "camper_id, activity_id, and time are required fields";
pub const SIGNUP_PARTIES_NOT_FOUND: &str = "Camper or Activity not found";

pub fn signups_router() -> Router<AppState> {
    Router::new().route("/signups", post(create_signup_handler))
}

async fn create_signup_handler(
    State(state): State<AppState>,
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> ApiResult<Json<SignupDetailJson>> {
    let body = object_body(payload)?;

    if ["camper_id", "activity_id", "time"]
        .iter()
        .any(|field| !body.contains_key(*field))
    {
        return Err(ApiError::Validation(SIGNUP_REQUIRED_FIELDS));
    }

    // an id that isn't an integer can't name an existing record
    let (Some(camper_id), Some(activity_id)) = (
        body.get("camper_id").and_then(Value::as_i64),
        body.get("activity_id").and_then(Value::as_i64),
    ) else {
        return Err(ApiError::Validation(SIGNUP_PARTIES_NOT_FOUND));
    };

    let Some(time) = body.get("time").and_then(Value::as_i64) else {
        // unknown records are reported ahead of a bad time
        let camper = state
            .repo
            .camper_by_id(camper_id)
            .await
            .map_err(ApiError::internal)?;
        let activity = state
            .repo
            .activity_by_id(activity_id)
            .await
            .map_err(ApiError::internal)?;
        if camper.is_none() || activity.is_none() {
            return Err(ApiError::Validation(SIGNUP_PARTIES_NOT_FOUND));
        }
        return Err(ApiError::Validation(VALIDATION_ERRORS));
    };

    let new_signup = NewSignup {
        camper_id,
        activity_id,
        time,
    };

    let detail = state
        .repo
        .insert_signup(&new_signup)
        .await
        .map_err(|e| match e {
            StoreError::NotFound(_) => ApiError::Validation(SIGNUP_PARTIES_NOT_FOUND),
            other => {
                tracing::warn!("Failed to create signup: {}", other);
                ApiError::Validation(VALIDATION_ERRORS)
            }
        })?;

    tracing::info!("Created {}", detail.signup);
    Ok(Json(SignupDetailJson::from(&detail)))
}
