// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use budgetbrew::config::Config;
use budgetbrew::db::JsonStore;
use budgetbrew::routes::create_router;
use budgetbrew::services::FirebaseVerifier;
use budgetbrew::AppState;
use jsonwebtoken::{encode, Algorithm, DecodingKey, EncodingKey, Header};
use ring::rand::SystemRandom;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_PROJECT: &str = "budgetbrew-test";
pub const TEST_KID: &str = "test-kid";
pub const TEST_SECRET: &[u8] = b"budgetbrew_test_secret_32_bytes!";

/// Create a test app backed by a freshly seeded data file, without Firebase.
/// The temp dir must outlive the router.
#[allow(dead_code)]
pub async fn create_test_app() -> (axum::Router, Arc<AppState>, TempDir) {
    build_app(None).await
}

/// Create a test app that verifies HS256 tokens minted by [`mint_id_token`].
#[allow(dead_code)]
pub async fn create_firebase_test_app() -> (axum::Router, Arc<AppState>, TempDir) {
    let verifier = FirebaseVerifier::new_with_static_key(
        TEST_PROJECT,
        TEST_KID,
        Algorithm::HS256,
        DecodingKey::from_secret(TEST_SECRET),
    )
    .expect("static verifier");
    build_app(Some(verifier)).await
}

async fn build_app(firebase: Option<FirebaseVerifier>) -> (axum::Router, Arc<AppState>, TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");
    let static_dir = dir.path().join("public");
    std::fs::create_dir_all(&static_dir).expect("static dir");
    std::fs::write(
        static_dir.join("index.html"),
        "<html><body>BudgetBrew</body></html>",
    )
    .expect("index.html");

    let config = Config {
        data_path: dir.path().join("data.json"),
        static_dir,
        firebase_project_id: firebase.as_ref().map(|f| f.project_id().to_string()),
        ..Config::default()
    };

    let store = JsonStore::open(&config.data_path)
        .await
        .expect("open store");

    let state = Arc::new(AppState {
        config,
        store,
        firebase,
        rng: SystemRandom::new(),
    });

    (create_router(state.clone()), state, dir)
}

/// Mint a Firebase-style ID token accepted by [`create_firebase_test_app`].
#[allow(dead_code)]
pub fn mint_id_token(uid: &str, email: Option<&str>) -> String {
    #[derive(Serialize)]
    struct Claims<'a> {
        iss: String,
        aud: &'a str,
        sub: &'a str,
        iat: u64,
        exp: u64,
        auth_time: u64,
        email: Option<&'a str>,
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let claims = Claims {
        iss: format!("https://securetoken.google.com/{TEST_PROJECT}"),
        aud: TEST_PROJECT,
        sub: uid,
        iat: now,
        exp: now + 3600,
        auth_time: now,
        email,
    };

    let mut header = Header::new(Algorithm::HS256);
    header.kid = Some(TEST_KID.to_string());
    encode(&header, &claims, &EncodingKey::from_secret(TEST_SECRET)).unwrap()
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send a request and decode the JSON body (`Null` when empty).
#[allow(dead_code)]
pub async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
