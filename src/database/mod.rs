use crate::domain::{Activity, Camper, CamperChanges, NewCamper, NewSignup, Signup, SignupDetail};
use async_trait::async_trait;
use sqlx::error::ErrorKind;
use thiserror::Error;

pub mod sqlite;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Constraint violation: {0}")]
    Constraint(sqlx::Error),

    #[error("Database error: {0}")]
    Unexpected(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let is_constraint = err
            .as_database_error()
            .is_some_and(|db_err| !matches!(db_err.kind(), ErrorKind::Other));

        if is_constraint {
            StoreError::Constraint(err)
        } else {
            StoreError::Unexpected(err)
        }
    }
}

// a CampRepository can be shared between threads (sqlx::Pool is thread safe)
// every write runs in its own transaction: committed on success, rolled back otherwise
#[async_trait]
pub trait CampRepository: Send + Sync {
    async fn all_campers(&self) -> StoreResult<Vec<Camper>>;
    async fn camper_by_id(&self, id: i64) -> StoreResult<Option<Camper>>;
    async fn all_activities(&self) -> StoreResult<Vec<Activity>>;
    async fn activity_by_id(&self, id: i64) -> StoreResult<Option<Activity>>;
    async fn signups_by_camper(&self, camper_id: i64) -> StoreResult<Vec<Signup>>;

    // write operations
    async fn insert_camper(&self, camper: &NewCamper) -> StoreResult<Camper>;
    async fn update_camper(&self, id: i64, changes: &CamperChanges) -> StoreResult<Camper>;
    async fn delete_activity(&self, id: i64) -> StoreResult<()>;
    async fn insert_signup(&self, signup: &NewSignup) -> StoreResult<SignupDetail>;
}
