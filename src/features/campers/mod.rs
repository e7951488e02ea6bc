pub mod model;

use crate::AppState;
use crate::database::StoreError;
use crate::domain::{CamperChanges, NewCamper};
use crate::features::error::{ApiError, ApiResult, VALIDATION_ERRORS};
use crate::features::{JsonObject, object_body, path_id};
use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    routing::get,
};
use model::{CamperDetailJson, CamperJson, CamperSignupJson};
use serde_json::Value;

pub const CAMPER_NOT_FOUND: &str = "Camper not found";
pub const CAMPER_REQUIRED_FIELDS: &str = "name and age are required fields";

pub fn campers_router() -> Router<AppState> {
    Router::new()
        .route(
            "/campers",
            get(list_campers_handler).post(create_camper_handler),
        )
        .route(
            "/campers/{id}",
            get(get_camper_handler).patch(update_camper_handler),
        )
}

async fn list_campers_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<CamperJson>>> {
    let campers = state.repo.all_campers().await.map_err(ApiError::internal)?;

    Ok(Json(campers.iter().map(CamperJson::from).collect()))
}

async fn get_camper_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<CamperDetailJson>> {
    let id = path_id(path, CAMPER_NOT_FOUND)?;
    let camper = state
        .repo
        .camper_by_id(id)
        .await
        .map_err(ApiError::internal)?
        .ok_or(ApiError::NotFound(CAMPER_NOT_FOUND))?;

    let signups = state
        .repo
        .signups_by_camper(camper.id)
        .await
        .map_err(ApiError::internal)?;

    let mut signup_views = Vec::with_capacity(signups.len());
    for signup in &signups {
        let activity = state
            .repo
            .activity_by_id(signup.activity_id)
            .await
            .map_err(ApiError::internal)?
            .ok_or_else(|| {
                tracing::error!("{} references a missing activity", signup);
                ApiError::Internal
            })?;
        signup_views.push(CamperSignupJson::new(signup, &activity));
    }

    Ok(Json(CamperDetailJson {
        camper: CamperJson::from(&camper),
        signups: signup_views,
    }))
}

async fn update_camper_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> ApiResult<Json<CamperJson>> {
    let id = path_id(path, CAMPER_NOT_FOUND)?;

    // an unknown id is a 404 whatever the body looks like
    let existing = state
        .repo
        .camper_by_id(id)
        .await
        .map_err(ApiError::internal)?
        .ok_or(ApiError::NotFound(CAMPER_NOT_FOUND))?;

    let body = object_body(payload)?;
    let changes = camper_changes(&body)?;
    if changes.is_empty() {
        return Ok(Json(CamperJson::from(&existing)));
    }

    let camper = state
        .repo
        .update_camper(id, &changes)
        .await
        .map_err(|e| match e {
            StoreError::NotFound(_) => ApiError::NotFound(CAMPER_NOT_FOUND),
            other => {
                tracing::warn!("Failed to update camper {}: {}", id, other);
                ApiError::Validation(VALIDATION_ERRORS)
            }
        })?;

    tracing::info!("Updated camper {}", camper);
    Ok(Json(CamperJson::from(&camper)))
}

async fn create_camper_handler(
    State(state): State<AppState>,
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> ApiResult<Json<JsonObject>> {
    let mut body = object_body(payload)?;

    if !body.contains_key("name") || !body.contains_key("age") {
        return Err(ApiError::Validation(CAMPER_REQUIRED_FIELDS));
    }

    let new_camper = NewCamper {
        name: body
            .get("name")
            .and_then(Value::as_str)
            .ok_or(ApiError::Validation(VALIDATION_ERRORS))?
            .to_string(),
        age: body
            .get("age")
            .and_then(Value::as_i64)
            .ok_or(ApiError::Validation(VALIDATION_ERRORS))?,
    };

    let camper = state
        .repo
        .insert_camper(&new_camper)
        .await
        .map_err(|e| {
            tracing::warn!("Failed to create camper: {}", e);
            ApiError::Validation(VALIDATION_ERRORS)
        })?;

    tracing::info!("Created camper {}", camper);

    // the response echoes the request payload, plus the new id
    body.insert("id".to_string(), Value::from(camper.id));
    Ok(Json(body))
}

// fields absent from the body stay untouched; a present field of the wrong type
// (null included) is a validation failure
fn camper_changes(body: &JsonObject) -> ApiResult<CamperChanges> {
    let name = match body.get("name") {
        None => None,
        Some(Value::String(name)) => Some(name.to_owned()),
        Some(_) => return Err(ApiError::Validation(VALIDATION_ERRORS)),
    };

    let age = match body.get("age") {
        None => None,
        Some(value) => Some(
            value
                .as_i64()
                .ok_or(ApiError::Validation(VALIDATION_ERRORS))?,
        ),
    };

    Ok(CamperChanges { name, age })
}
