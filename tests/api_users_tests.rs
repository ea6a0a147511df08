// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User, leaderboard, metrics and quiz endpoint tests against a seeded store.

use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;

use common::{create_test_app, get, json_request, send};

#[tokio::test]
async fn test_health_check() {
    let (app, _state, _dir) = create_test_app().await;

    let (status, json) = send(&app, get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["message"], "Server is running");
    assert!(json["timestamp"].as_i64().unwrap() > 0);
    assert!(json["buildId"].is_string());
}

#[tokio::test]
async fn test_me_defaults_to_first_user() {
    let (app, _state, _dir) = create_test_app().await;

    let (status, json) = send(&app, get("/api/user/me")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "1");
    assert_eq!(json["name"], "Alex Rivera");
    assert_eq!(json["finScore"], 74.5);
    assert!(json["teamId"].is_null());
}

#[tokio::test]
async fn test_me_uses_query_user_id() {
    let (app, _state, _dir) = create_test_app().await;

    let (status, json) = send(&app, get("/api/user/me?userId=2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "2");
    assert_eq!(json["finScore"], 87.0);

    let (status, json) = send(&app, get("/api/user/me?userId=42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "User not found");
}

#[tokio::test]
async fn test_get_user_by_id() {
    let (app, _state, _dir) = create_test_app().await;

    let (status, json) = send(&app, get("/api/user/4")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Taylor Kim");
    assert_eq!(json["finScore"], 73.6);

    let (status, json) = send(&app, get("/api/user/me?userId=3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "3");

    let (status, json) = send(&app, get("/api/user/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "error": "User not found" }));
}

#[tokio::test]
async fn test_leaderboard_sorted_by_fin_score() {
    let (app, _state, _dir) = create_test_app().await;

    let (status, json) = send(&app, get("/api/users")).await;

    assert_eq!(status, StatusCode::OK);
    let users = json.as_array().unwrap();
    let order: Vec<&str> = users.iter().map(|u| u["id"].as_str().unwrap()).collect();
    assert_eq!(order, vec!["2", "1", "4", "3"]);
    assert!(users.iter().all(|u| u["teamName"].is_null()));
    assert_eq!(users[3]["finScore"], 55.5);
}

#[tokio::test]
async fn test_metrics_update_clamps_and_awards() {
    let (app, state, _dir) = create_test_app().await;

    let (status, json) = send(
        &app,
        json_request(
            Method::PUT,
            "/api/user/3/metrics",
            json!({ "budgetAdherence": 120, "savingProgress": 50 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["budgetAdherence"], 100.0);
    assert_eq!(json["savingProgress"], 50.0);
    // budget rule scored with the raw 120: +3 budget, +1 savings
    assert_eq!(json["ingredients"]["budget"], 4);
    assert_eq!(json["ingredients"]["savings"], 3);
    assert_eq!(json["ingredients"]["investment"], 0);
    assert_eq!(json["finScore"], 69.0);

    let data = state.store.read().await.unwrap();
    let stored = data.find_user("3").unwrap();
    assert_eq!(stored.budget_adherence, 100.0);
    assert_eq!(stored.ingredients.budget, 4);
}

#[tokio::test]
async fn test_metrics_update_unknown_user() {
    let (app, _state, _dir) = create_test_app().await;

    let (status, _) = send(
        &app,
        json_request(
            Method::PUT,
            "/api/user/77/metrics",
            json!({ "budgetAdherence": 50 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_quiz_questions_include_answers() {
    let (app, _state, _dir) = create_test_app().await;

    let (status, json) = send(&app, get("/api/quiz")).await;

    assert_eq!(status, StatusCode::OK);
    let questions = json.as_array().unwrap();
    assert_eq!(questions.len(), 5);
    assert!(questions[0]["question"].is_string());
    assert_eq!(questions[0]["options"].as_array().unwrap().len(), 4);
    assert!(questions[0]["correct"].is_u64());
}

#[tokio::test]
async fn test_quiz_submit_perfect_score() {
    let (app, state, _dir) = create_test_app().await;

    let (status, json) = send(
        &app,
        json_request(
            Method::POST,
            "/api/quiz/submit",
            json!({
                "userId": "3",
                "answers": { "1": 0, "2": 1, "3": 2, "4": 1, "5": 2 }
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["score"], 100.0);
    assert_eq!(json["ingredientsAwarded"], json!({ "savings": 2, "knowledge": 5 }));
    assert_eq!(json["ingredients"]["savings"], 4);
    assert_eq!(json["ingredients"]["knowledge"], 7);
    assert_eq!(json["finScore"], 61.5);

    let data = state.store.read().await.unwrap();
    let user = data.find_user("3").unwrap();
    assert_eq!(user.quiz_score, 100.0);
    assert_eq!(user.activities.len(), 1);
    assert_eq!(user.activities[0].kind, "quiz");
}

#[tokio::test]
async fn test_quiz_submit_partial_score_for_default_user() {
    let (app, _state, _dir) = create_test_app().await;

    let (status, json) = send(
        &app,
        json_request(
            Method::POST,
            "/api/quiz/submit",
            json!({ "answers": { "1": 0, "2": 1, "3": 2, "4": 3 } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["score"], 60.0);
    assert_eq!(json["ingredientsAwarded"], json!({ "savings": 1, "knowledge": 3 }));
    // Alex starts with 5 savings and 3 knowledge
    assert_eq!(json["ingredients"]["savings"], 6);
    assert_eq!(json["ingredients"]["knowledge"], 6);
}

#[tokio::test]
async fn test_quiz_submit_requires_answers() {
    let (app, _state, _dir) = create_test_app().await;

    let (status, json) = send(
        &app,
        json_request(Method::POST, "/api/quiz/submit", json!({ "userId": "1" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Answers required");
}

#[tokio::test]
async fn test_quiz_submit_with_empty_bank() {
    let (app, state, _dir) = create_test_app().await;
    state
        .store
        .update(|data| {
            data.quiz_questions.clear();
            Ok::<_, budgetbrew::db::StoreError>(())
        })
        .await
        .unwrap();

    let (status, json) = send(
        &app,
        json_request(Method::POST, "/api/quiz/submit", json!({ "answers": {} })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "No quiz questions available");
}
