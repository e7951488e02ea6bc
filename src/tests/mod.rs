
use crate::database::sqlite::SqliteRepository;
use crate::db::MIGRATOR;
use crate::{AppState, build_app};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;

// create a sqlite database in memory to test against
// a single connection that never expires, otherwise the in-memory database goes away with it
pub async fn setup_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Valid in-memory url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to create in-memory database");

    // run migrations to create the camp schema
    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    pool
}

// the real router on top of an in-memory database; the pool is handed back for seeding and checks
pub async fn setup_test_app() -> (Router, SqlitePool) {
    let pool = setup_test_pool().await;
    let state = AppState::new(Arc::new(SqliteRepository::new(pool.clone())));
    (build_app(state), pool)
}

// activities have no create endpoint, so tests seed them (and anything else they need) directly
pub async fn seed_activity(pool: &SqlitePool, name: &str, difficulty: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO activities (name, difficulty) VALUES (?, ?) RETURNING id",
    )
    .bind(name)
    .bind(difficulty)
    .fetch_one(pool)
    .await
    .expect("Should seed activity")
}

pub async fn seed_camper(pool: &SqlitePool, name: &str, age: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO campers (name, age) VALUES (?, ?) RETURNING id")
        .bind(name)
        .bind(age)
        .fetch_one(pool)
        .await
        .expect("Should seed camper")
}

pub async fn seed_signup(pool: &SqlitePool, camper_id: i64, activity_id: i64, time: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO signups (time, camper_id, activity_id) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(time)
    .bind(camper_id)
    .bind(activity_id)
    .fetch_one(pool)
    .await
    .expect("Should seed signup")
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    sqlx::query_scalar::<_, i64>(&sql)
        .fetch_one(pool)
        .await
        .expect("Should count rows")
}

// fire a single request at the router, return the status and the raw body
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();

    (status, bytes.to_vec())
}

// same as send, with the body parsed as JSON
pub async fn send_json(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let json = serde_json::from_slice(&bytes).expect("Response body should be JSON");
    (status, json)
}
