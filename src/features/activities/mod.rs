pub mod model;

use crate::AppState;
use crate::database::StoreError;
use crate::features::error::{ApiError, ApiResult};
use crate::features::path_id;
use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    routing::{delete, get},
};
use model::ActivityJson;

pub const ACTIVITY_NOT_FOUND: &str = "Activity not found";
pub const ACTIVITY_DELETE_FAILED: &str = "An error occured while deleting the activity";

pub fn activities_router() -> Router<AppState> {
    Router::new()
        .route("/activities", get(list_activities_handler))
        .route("/activities/{id}", delete(delete_activity_handler))
}

async fn list_activities_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ActivityJson>>> {
    let activities = state
        .repo
        .all_activities()
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(activities.iter().map(ActivityJson::from).collect()))
}

async fn delete_activity_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = path_id(path, ACTIVITY_NOT_FOUND)?;

    match state.repo.delete_activity(id).await {
        Ok(()) => {
            tracing::info!("Deleted activity #{} and its signups", id);
            Ok(StatusCode::NO_CONTENT)
        }
        Err(StoreError::NotFound(_)) => Err(ApiError::NotFound(ACTIVITY_NOT_FOUND)),
        Err(e) => {
            tracing::error!("Failed to delete activity #{}: {}", id, e);
            Err(ApiError::Deletion(ACTIVITY_DELETE_FAILED))
        }
    }
}
