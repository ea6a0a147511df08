// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Financial-literacy quiz routes.

use crate::error::{AppError, Result};
use crate::middleware::Identity;
use crate::models::{IngredientAward, Ingredients, QuizQuestion};
use crate::routes::users::caller_user_mut;
use crate::services::finscore::fin_score;
use crate::services::quiz::score_quiz;
use crate::services::rewards::{record_activity, ActivityKind};
use crate::time_utils::now_millis;
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/quiz", get(get_questions))
        .route("/api/quiz/submit", post(submit_quiz))
}

/// The question bank, answers included; the client grades its own review.
async fn get_questions(State(state): State<Arc<AppState>>) -> Result<Json<Vec<QuizQuestion>>> {
    let data = state.store.read().await?;
    Ok(Json(data.quiz_questions))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitQuizRequest {
    /// Question ID -> chosen option index
    answers: Option<HashMap<String, i64>>,
    user_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuizResult {
    score: f64,
    fin_score: f64,
    ingredients_awarded: IngredientAward,
    ingredients: Ingredients,
}

/// Grade a quiz, store the score as the caller's quiz metric and pay awards.
async fn submit_quiz(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<SubmitQuizRequest>,
) -> Result<Json<QuizResult>> {
    let answers = body
        .answers
        .ok_or_else(|| AppError::BadRequest("Answers required".to_string()))?;

    let result = state
        .store
        .update(|data| {
            let score = score_quiz(&data.quiz_questions, &answers)
                .ok_or_else(|| AppError::BadRequest("No quiz questions available".to_string()))?;

            let user = caller_user_mut(data, &identity, body.user_id.as_deref())?;
            user.quiz_score = score;
            let ingredients_awarded =
                record_activity(user, ActivityKind::Quiz.as_str(), score, now_millis());

            tracing::info!(user_id = %user.id, score, "Quiz submitted");

            Ok::<_, AppError>(QuizResult {
                score,
                fin_score: fin_score(user),
                ingredients_awarded,
                ingredients: user.ingredients,
            })
        })
        .await?;

    Ok(Json(result))
}
