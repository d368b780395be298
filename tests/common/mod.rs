#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use f1_stats_api::{config::EnvironmentConfig, create_app, state::AppState};
use serde_json::Value;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;
use tower::ServiceExt;

const SCHEMA: &str = include_str!("../fixtures/schema.sql");
const SEED: &str = include_str!("../fixtures/seed.sql");

// Una sola conexión que nunca se recicla: cada conexión a `sqlite::memory:` es una base distinta
async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite")
}

async fn execute_script(pool: &SqlitePool, script: &str) {
    let without_comments: String = script
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n");

    for statement in without_comments.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }
        sqlx::query(statement)
            .execute(pool)
            .await
            .unwrap_or_else(|e| panic!("fixture statement failed: {}\n{}", e, statement));
    }
}

/// Pool con el schema del loader y el dataset de prueba
pub async fn seeded_pool() -> SqlitePool {
    let pool = memory_pool().await;
    execute_script(&pool, SCHEMA).await;
    execute_script(&pool, SEED).await;
    pool
}

/// Pool con las tablas creadas pero sin filas
pub async fn empty_pool() -> SqlitePool {
    let pool = memory_pool().await;
    execute_script(&pool, SCHEMA).await;
    pool
}

pub fn test_config() -> EnvironmentConfig {
    EnvironmentConfig::from_lookup(|key| match key {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        _ => None,
    })
    .expect("default config")
}

pub async fn test_app() -> Router {
    create_app(AppState::new(seeded_pool().await, test_config()))
}

pub async fn empty_app() -> Router {
    create_app(AppState::new(empty_pool().await, test_config()))
}

pub async fn get_raw(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_raw(app, uri).await;
    let json = serde_json::from_slice(&body)
        .unwrap_or_else(|e| panic!("{} returned non-JSON body ({}): {:?}", uri, e, String::from_utf8_lossy(&body)));
    (status, json)
}

pub fn ids(body: &Value, key: &str) -> Vec<i64> {
    body["results"]
        .as_array()
        .expect("results array")
        .iter()
        .map(|row| row[key].as_i64().expect("integer id"))
        .collect()
}
